pub mod clf;
pub mod generated;
pub mod regex_error;
pub mod regex_patterns;

pub use clf::{ClfParser, parse};
pub use regex_error::RegexError;
pub use regex_patterns::StaticRegexSet;
