//! Team name canonicalization.
//!
//! Both venues spell the same team differently ("Ohio State", "Ohio St.",
//! "Ohio State (OH)"). Canonical forms are compared instead of raw labels.

/// Whole-word abbreviations applied during canonicalization.
const ABBREVIATIONS: &[(&str, &str)] = &[("state", "st"), ("university", "u"), ("college", "c")];

/// Produce the canonical lowercase form of a team label.
///
/// Lowercases, drops parenthesized suffixes such as `(FL)`, drops periods,
/// abbreviates `state`/`university`/`college`, and collapses every run of
/// characters outside `[a-z0-9]` to a single space. The result is trimmed and
/// canonicalizing it again returns it unchanged.
#[must_use]
pub fn canonicalize(label: &str) -> String {
    let lowered = label.to_lowercase();
    let without_parens = strip_parenthesized(&lowered);
    let without_dots = without_parens.replace('.', "");

    let abbreviated = ABBREVIATIONS
        .iter()
        .fold(without_dots, |acc, (word, short)| {
            replace_word(&acc, word, short, false)
        });

    collapse_non_alphanumeric(&abbreviated)
}

/// Replace whole-word occurrences of `word` with `replacement`.
///
/// Word boundaries are ASCII alphanumerics; matching is case-sensitive. With
/// `eat_dot`, a single `.` directly after the word is consumed too when a
/// word character follows it (`St.Louis`). A dot before a space or at the
/// end stays, so `Ohio St.` becomes `Ohio State.`.
pub(crate) fn replace_word(text: &str, word: &str, replacement: &str, eat_dot: bool) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied_to = 0;
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find(word) {
        let start = search_from + offset;
        let mut end = start + word.len();

        let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
        let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();

        if before_ok && after_ok {
            if eat_dot
                && bytes.get(end) == Some(&b'.')
                && bytes.get(end + 1).is_some_and(u8::is_ascii_alphanumeric)
            {
                end += 1;
            }
            out.push_str(&text[copied_to..start]);
            out.push_str(replacement);
            copied_to = end;
            search_from = end;
        } else {
            search_from = start + word.len().max(1);
        }

        if search_from >= text.len() {
            break;
        }
    }

    out.push_str(&text[copied_to..]);
    out
}

/// Remove every `( ... )` group. An unclosed `(` is left in place.
fn strip_parenthesized(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('(') {
        match rest[open..].find(')') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}

fn collapse_non_alphanumeric(text: &str) -> String {
    text.split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_punctuation() {
        assert_eq!(canonicalize("  Green   Bay-Packers! "), "green bay packers");
    }

    #[test]
    fn removes_parenthesized_suffix() {
        let canonical = canonicalize("Florida (FL) State");
        assert!(!canonical.contains('('));
        assert!(!canonical.contains(')'));
        assert_eq!(canonical, "florida st");
    }

    #[test]
    fn abbreviates_whole_words_only() {
        assert_eq!(canonicalize("Ohio State"), "ohio st");
        assert_eq!(canonicalize("Boston College"), "boston c");
        assert_eq!(canonicalize("Liberty University"), "liberty u");
        assert_eq!(canonicalize("Statesmen"), "statesmen");
    }

    #[test]
    fn drops_periods_before_abbreviating() {
        assert_eq!(canonicalize("Ohio St."), "ohio st");
        assert_eq!(canonicalize("St. Mary's"), "st mary s");
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        assert_eq!(canonicalize("San José State"), "san jos st");
    }

    #[test]
    fn unclosed_paren_is_treated_as_punctuation() {
        assert_eq!(canonicalize("Miami (OH"), "miami oh");
    }

    #[test]
    fn canonicalize_is_idempotent() {
        let inputs = [
            "Florida (FL) State",
            "Texas A&M University",
            "St. John's (NY)",
            "state_college",
            "Sta(x)te",
            "  ..  ",
            "49ers",
            "São Paulo FC",
            "UNIVERSITY OF STATE COLLEGE",
            "",
        ];
        for input in inputs {
            let once = canonicalize(input);
            assert_eq!(canonicalize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn replace_word_respects_boundaries() {
        assert_eq!(replace_word("State Stateline", "State", "St", false), "St Stateline");
        assert_eq!(replace_word("Ohio St. Buckeyes", "St", "State", true), "Ohio State. Buckeyes");
        assert_eq!(replace_word("Stanford", "St", "State", true), "Stanford");
        assert_eq!(replace_word("U of U", "U", "University", false), "University of University");
    }

    #[test]
    fn eat_dot_only_between_word_characters() {
        assert_eq!(replace_word("Ohio St.", "St", "State", true), "Ohio State.");
        assert_eq!(replace_word("St.Louis", "St", "State", true), "StateLouis");
        assert_eq!(replace_word("Boston Univ.", "Univ", "U", true), "Boston U.");
        assert_eq!(replace_word("Ohio St", "St", "State", true), "Ohio State");
        assert_eq!(replace_word("Ohio St.", "St", "State", false), "Ohio State.");
    }
}
