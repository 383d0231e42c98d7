use super::{FetchError, LogSource};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tracing::info;

/// Reads the whole access log file on every fetch.
#[derive(Debug, Clone)]
pub struct FileLogSource {
    path: PathBuf,
}

impl FileLogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_lines(&self) -> Result<Vec<String>, FetchError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::Read {
                path: self.path.clone(),
                source,
            })?;
        // Invalid UTF-8 only spoils the line it sits on
        let content = String::from_utf8_lossy(&bytes);

        let lines: Vec<String> = content.lines().map(str::to_owned).collect();
        if lines.iter().all(|line| line.trim().is_empty()) {
            return Err(FetchError::Empty(self.path.display().to_string()));
        }

        info!(
            "Read {} lines from {}",
            lines.len(),
            self.path.display()
        );
        Ok(lines)
    }
}

impl LogSource for FileLogSource {
    fn fetch_lines(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, FetchError>> + Send + '_>> {
        Box::pin(self.read_lines())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
