//! Insertion-ordered occurrence counter

use std::collections::HashMap;
use std::hash::Hash;

/// Counts keys while remembering the order they were first seen
#[derive(Debug, Clone)]
pub(crate) struct Tally<K> {
    entries: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, c)| (k, *c))
    }
}

impl<K: Eq + Hash + Clone + Ord> Tally<K> {
    /// Entries by descending count, ties broken by key
    pub fn ranked(&self) -> Vec<(&K, usize)> {
        let mut ranked: Vec<(&K, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_keeps_first_seen_order() {
        let mut tally = Tally::new();
        for key in ["b", "a", "b", "c", "a", "b"] {
            tally.add(key.to_string());
        }

        let seen: Vec<(&str, usize)> = tally.iter().map(|(k, c)| (k.as_str(), c)).collect();
        assert_eq!(seen, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_tally_ranked_breaks_ties_by_key() {
        let mut tally = Tally::new();
        for key in ["z", "y", "x", "y", "z"] {
            tally.add(key);
        }

        let ranked: Vec<(&str, usize)> = tally.ranked().into_iter().map(|(k, c)| (*k, c)).collect();
        assert_eq!(ranked, vec![("y", 2), ("z", 2), ("x", 1)]);
    }
}
