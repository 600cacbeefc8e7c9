//! Watched-application registry.

use indexmap::IndexMap;

/// Ordered mapping from canonical application names to probe addresses.
///
/// Probe addresses for one application are alternatives; any one resolving
/// to an installed handler marks the application present. Insertion order
/// is preserved and determines probe order, not display order.
#[derive(Debug, Clone, Default)]
pub struct AppRegistry {
    entries: IndexMap<String, Vec<String>>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an application with its probe addresses. Re-inserting a name
    /// replaces its probe list.
    pub fn insert(&mut self, name: impl Into<String>, probes: Vec<String>) {
        self.entries.insert(name.into(), probes);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate applications in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, probes)| (name.as_str(), probes.as_slice()))
    }
}

impl From<IndexMap<String, Vec<String>>> for AppRegistry {
    fn from(entries: IndexMap<String, Vec<String>>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, Vec<String>)> for AppRegistry {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
