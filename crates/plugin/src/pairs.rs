use flowbridge_protocol::PathPair;

/// Ordered collection of path pairs for the current listing phase.
///
/// Insertion order is preserved and duplicates are allowed; the summary
/// reports the entry count as the number of files.
#[derive(Debug, Default)]
pub struct PairStore {
    pairs: Vec<PathPair>,
}

impl PairStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all pairs. Called at the start of a listing phase so stale
    /// entries from an earlier phase can never leak into the next summary.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn push(&mut self, pair: PathPair) {
        self.pairs.push(pair);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn first(&self) -> Option<&PathPair> {
        self.pairs.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathPair> {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(source: &str, destination: &str) -> PathPair {
        PathPair {
            source: source.to_string(),
            destination: destination.to_string(),
        }
    }

    #[test]
    fn preserves_insertion_order() {
        let mut store = PairStore::new();
        store.push(pair("a", "b"));
        store.push(pair("c", "d"));
        store.push(pair("e", "f"));

        let sources: Vec<&str> = store.iter().map(|p| p.source.as_str()).collect();
        assert_eq!(sources, ["a", "c", "e"]);
        assert_eq!(store.first().unwrap().source, "a");
    }

    #[test]
    fn allows_duplicates() {
        let mut store = PairStore::new();
        store.push(pair("a", "b"));
        store.push(pair("a", "b"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = PairStore::new();
        store.push(pair("a", "b"));
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.first(), None);

        // Clearing an already-empty store is fine.
        store.clear();
        assert!(store.is_empty());
    }
}
