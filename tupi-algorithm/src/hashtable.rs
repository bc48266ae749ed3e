use ahash::RandomState;
use rayon::prelude::*;
use std::collections::HashMap;

/// Structure containing the data required by the HashMap algorithm.
#[derive(Debug, Default, Clone)]
pub struct MapAlgorithm {
    /// Data from the HashMap.
    data: HashMap<String, Slot, RandomState>,
    /// Distinct keys inserted so far, used to stamp first appearances.
    insertions: usize,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    count: usize,
    first_seen: usize,
}

impl MapAlgorithm {
    /// Adds data to the data contained in the HashMap.
    pub fn set<T>(&mut self, key: T)
    where
        T: ToString,
    {
        if let Some(slot) = self.data.get_mut(&key.to_string()) {
            slot.count += 1;
        } else {
            let first_seen = self.insertions;
            self.insertions += 1;
            self.data
                .insert(key.to_string(), Slot { count: 1, first_seen });
        }
    }

    /// Number of times `key` was set.
    pub fn get<T>(&self, key: T) -> Option<usize>
    where
        T: ToString,
    {
        self.data.get(&key.to_string()).map(|slot| slot.count)
    }

    /// Number of distinct keys in the table.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the table holds no key at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Plain word-to-count view of the table. Every key appears with its
    /// exact occurrence count; no key has count 0.
    pub fn counts(&self) -> HashMap<String, usize> {
        self.data
            .iter()
            .map(|(key, slot)| (key.clone(), slot.count))
            .collect()
    }

    /// Rank the `length` most used keys.
    ///
    /// Ordered by count descending; keys with equal counts keep the order
    /// in which they first appeared. Asking for more keys than the table
    /// holds returns every key, ranked.
    pub fn rank(&self, length: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(&String, &Slot)> = self.data.iter().collect();

        // Unstable sort is fine, the comparator is a total order.
        entries.par_sort_unstable_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        entries.truncate(length);

        entries
            .into_iter()
            .map(|(key, slot)| (key.clone(), slot.count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(words: &[&str]) -> MapAlgorithm {
        let mut algorithm = MapAlgorithm::default();
        for word in words {
            algorithm.set(word);
        }
        algorithm
    }

    #[test]
    fn test_counts_are_exact() {
        let algorithm =
            table(&["gato", "correu", "correu", "correu", "gato"]);

        assert_eq!(algorithm.get("correu"), Some(3));
        assert_eq!(algorithm.get("gato"), Some(2));
        assert_eq!(algorithm.get("lua"), None);
        assert_eq!(algorithm.len(), 2);

        let counts = algorithm.counts();
        assert_eq!(counts.get("correu"), Some(&3));
        assert_eq!(counts.get("gato"), Some(&2));
        assert!(counts.values().all(|count| *count > 0));
    }

    #[test]
    fn test_rank_orders_by_count() {
        let algorithm =
            table(&["a", "b", "b", "c", "c", "c"]);

        assert_eq!(
            algorithm.rank(3),
            vec![
                ("c".to_string(), 3),
                ("b".to_string(), 2),
                ("a".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_rank_breaks_ties_by_first_appearance() {
        let algorithm = table(&["lua", "mar", "sol", "mar", "lua", "sol"]);

        // every count is 2: first appearance decides.
        assert_eq!(
            algorithm.rank(3),
            vec![
                ("lua".to_string(), 2),
                ("mar".to_string(), 2),
                ("sol".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_rank_length_above_distinct_returns_all() {
        let algorithm = table(&["a", "b", "b"]);
        let ranking = algorithm.rank(100);

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0], ("b".to_string(), 2));
    }

    #[test]
    fn test_rank_on_empty_table() {
        assert!(MapAlgorithm::default().rank(5).is_empty());
        assert!(MapAlgorithm::default().is_empty());
    }

    #[test]
    fn test_rank_zero_is_empty() {
        assert!(table(&["a", "b"]).rank(0).is_empty());
    }
}
