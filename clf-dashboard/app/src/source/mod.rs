//! Where raw access log lines come from.

pub mod file;
pub mod sample;

pub use file::FileLogSource;
pub use sample::SampleLogGenerator;

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to read log file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No log data in {0}")]
    Empty(String),
}

/// Supplier of raw log lines, read once per snapshot load.
pub trait LogSource: Send + Sync {
    fn fetch_lines(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, FetchError>> + Send + '_>>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}
