use crate::config::Config;
use crate::snapshot::{SnapshotLoader, SnapshotStore};
use crate::source::{FileLogSource, LogSource, SampleLogGenerator};
use std::sync::Arc;

/// Presentation limits applied by the handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub top_n: usize,
    pub page_size: usize,
    pub max_page_size: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            top_n: 5,
            page_size: 10,
            max_page_size: 100,
        }
    }
}

impl ViewSettings {
    /// Requested page size, or the default, capped at the maximum.
    pub fn page_size(&self, requested: Option<usize>) -> usize {
        requested
            .filter(|&size| size > 0)
            .unwrap_or(self.page_size)
            .min(self.max_page_size)
    }
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn LogSource>,
    pub loader: Arc<SnapshotLoader>,
    pub view: ViewSettings,
}

impl AppState {
    pub fn new(
        source: Arc<dyn LogSource>,
        generator: SampleLogGenerator,
        sample_size: usize,
        view: ViewSettings,
    ) -> Self {
        let store = Arc::new(SnapshotStore::new());
        let loader = Arc::new(SnapshotLoader::new(
            Arc::clone(&source),
            store,
            generator,
            sample_size,
        ));
        Self {
            source,
            loader,
            view,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let source: Arc<dyn LogSource> = Arc::new(FileLogSource::new(&config.log_path));
        let view = ViewSettings {
            top_n: config.top_n,
            page_size: config.page_size,
            max_page_size: config.max_page_size,
        };
        Self::new(
            source,
            SampleLogGenerator::with_seed(config.sample_seed),
            config.sample_size,
            view,
        )
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        self.loader.store()
    }
}
