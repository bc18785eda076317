//! Exchange abstraction layer.
//!
//! Defines the read-only traits the scanner needs from each venue so the
//! scan itself can run against HTTP clients or in-memory fakes.

mod traits;

pub use traits::{LabeledExchange, OutcomeExchange};
