//! Immutable parsed views of the access log and the store that publishes them.
//!
//! Every load takes a ticket before fetching. A finished load is published
//! only if its ticket is newer than the snapshot currently held, so a slow
//! fetch can never replace the result of a later one.

use crate::aggregate::{AggregateResult, aggregate};
use crate::domain::{LogRecord, ParseStats};
use crate::parser::ClfParser;
use crate::source::{LogSource, SampleLogGenerator};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

pub const SAMPLE_DATA_WARNING: &str =
    "Unable to read local log file. Displaying sample data instead.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    File,
    Sample,
}

#[derive(Debug, Clone)]
pub struct LogSnapshot {
    pub generation: u64,
    pub origin: DataOrigin,
    pub warning: Option<String>,
    pub records: Vec<LogRecord>,
    pub aggregates: AggregateResult,
    pub stats: ParseStats,
    pub loaded_at: DateTime<Utc>,
}

impl LogSnapshot {
    /// Placeholder held before the first load completes.
    pub fn empty() -> Self {
        Self {
            generation: 0,
            origin: DataOrigin::File,
            warning: None,
            records: Vec::new(),
            aggregates: AggregateResult::default(),
            stats: ParseStats::default(),
            loaded_at: Utc::now(),
        }
    }

    pub fn build<S: AsRef<str>>(
        generation: u64,
        origin: DataOrigin,
        warning: Option<String>,
        lines: &[S],
    ) -> Self {
        let (records, stats) = ClfParser::new().parse_with_stats(lines);
        let aggregates = aggregate(&records);

        Self {
            generation,
            origin,
            warning,
            records,
            aggregates,
            stats,
            loaded_at: Utc::now(),
        }
    }

    pub fn using_sample_data(&self) -> bool {
        self.origin == DataOrigin::Sample
    }
}

#[derive(Debug)]
pub struct SnapshotStore {
    last_ticket: AtomicU64,
    current: RwLock<Arc<LogSnapshot>>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            last_ticket: AtomicU64::new(0),
            current: RwLock::new(Arc::new(LogSnapshot::empty())),
        }
    }

    /// Next load generation. Strictly increasing, starting at 1.
    pub fn ticket(&self) -> u64 {
        self.last_ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Replace the current snapshot if `snapshot` is newer. Returns whether it
    /// was published.
    pub fn publish(&self, snapshot: LogSnapshot) -> bool {
        let mut current = self.current.write();
        if snapshot.generation <= current.generation {
            return false;
        }
        *current = Arc::new(snapshot);
        true
    }

    pub fn current(&self) -> Arc<LogSnapshot> {
        Arc::clone(&self.current.read())
    }
}

/// Fetches from a [`LogSource`], falls back to generated lines when that
/// fails, and publishes the result into a [`SnapshotStore`].
pub struct SnapshotLoader {
    source: Arc<dyn LogSource>,
    store: Arc<SnapshotStore>,
    generator: SampleLogGenerator,
    sample_size: usize,
}

impl SnapshotLoader {
    pub fn new(
        source: Arc<dyn LogSource>,
        store: Arc<SnapshotStore>,
        generator: SampleLogGenerator,
        sample_size: usize,
    ) -> Self {
        Self {
            source,
            store,
            generator,
            sample_size,
        }
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    /// Load a fresh snapshot and return whatever is current afterwards.
    pub async fn load(&self) -> Arc<LogSnapshot> {
        let generation = self.store.ticket();

        let snapshot = match self.source.fetch_lines().await {
            Ok(lines) => LogSnapshot::build(generation, DataOrigin::File, None, &lines),
            Err(e) => {
                warn!(
                    "Falling back to {} sample lines, {} unavailable: {}",
                    self.sample_size,
                    self.source.describe(),
                    e
                );
                let lines = self.generator.generate(self.sample_size);
                LogSnapshot::build(
                    generation,
                    DataOrigin::Sample,
                    Some(SAMPLE_DATA_WARNING.to_string()),
                    &lines,
                )
            }
        };

        let origin = snapshot.origin;
        let stats = snapshot.stats;
        if self.store.publish(snapshot) {
            info!(
                generation,
                ?origin,
                parsed = stats.parsed,
                skipped = stats.skipped,
                "Published log snapshot"
            );
        } else {
            info!(generation, "Discarded stale log snapshot");
        }

        self.store.current()
    }
}
