use std::collections::HashMap;

/// Student marks keyed by name.
///
/// Iteration follows first-insertion order. Inserting a name that is already
/// present replaces its score but keeps the student's original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreStore {
    entries: Vec<(String, u8)>,
    index: HashMap<String, usize>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a student's score, returning the previous score if any.
    pub fn insert(&mut self, name: impl Into<String>, score: u8) -> Option<u8> {
        let name = name.into();
        if let Some(&pos) = self.index.get(&name) {
            let previous = self.entries[pos].1;
            self.entries[pos].1 = score;
            return Some(previous);
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, score));
        None
    }

    pub fn get(&self, name: &str) -> Option<u8> {
        self.index.get(name).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.entries.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Scores in store order
    pub fn scores(&self) -> Vec<u8> {
        self.entries.iter().map(|(_, score)| *score).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, u8)> for ScoreStore {
    fn from_iter<I: IntoIterator<Item = (S, u8)>>(iter: I) -> Self {
        let mut store = ScoreStore::new();
        for (name, score) in iter {
            store.insert(name, score);
        }
        store
    }
}
