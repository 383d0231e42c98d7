#![warn(rust_2018_idioms)]

pub mod aggregate;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod handler;
pub mod healthcheck;
pub mod parser;
pub mod snapshot;
pub mod source;
pub mod table;

pub use aggregate::{AggregateResult, aggregate};
pub use domain::{LogRecord, ParseOutcome, ParseStats};
pub use healthcheck::{healthcheck, healthcheck_with_port, resolve_port};
pub use parser::{ClfParser, parse};
