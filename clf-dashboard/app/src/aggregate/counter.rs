use std::collections::{BTreeMap, HashMap};

/// Frequency counter that remembers the order in which keys were first seen.
///
/// Ranking uses a stable sort over that order, so keys with equal counts
/// always come out in first-occurrence order.
#[derive(Debug, Default, Clone)]
pub struct FrequencyCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries ordered by count descending, ties in first-occurrence order.
    pub fn into_ranked(self) -> Vec<(String, usize)> {
        let mut entries = self.entries;
        // `sort_by` is stable
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    pub fn into_map(self) -> BTreeMap<String, usize> {
        self.entries.into_iter().collect()
    }
}
