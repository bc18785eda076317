//! Scan orchestration: fetch, match, price.

mod cache;
mod report;
mod scanner;

pub use cache::QuoteCache;
pub use report::ScanReport;
pub use scanner::Scanner;
