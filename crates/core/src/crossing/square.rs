use std::collections::hash_map;
use std::collections::HashMap;

use serde::{Deserialize, Serialize, Serializer};

/// Offspring genotypes of a cross with their multiplicities.
///
/// Keys are canonical genotype strings. Every gamete combination is equally
/// likely, so a count divided by [`total`](Self::total) is the relative
/// frequency of that genotype. Iteration order is unspecified; use
/// [`sorted`](Self::sorted) for a stable view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PunnettSquare {
    counts: HashMap<String, u64>,
}

impl PunnettSquare {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `genotype`.
    pub fn record(&mut self, genotype: String) {
        *self.counts.entry(genotype).or_insert(0) += 1;
    }

    /// Count of `genotype`, or `None` if it never occurs.
    #[inline]
    pub fn get(&self, genotype: &str) -> Option<u64> {
        self.counts.get(genotype).copied()
    }

    #[inline]
    pub fn contains(&self, genotype: &str) -> bool {
        self.counts.contains_key(genotype)
    }

    /// Number of distinct genotypes.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, the number of gamete combinations.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Relative frequency of `genotype` in `[0, 1]`.
    pub fn frequency(&self, genotype: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(genotype).unwrap_or(0) as f64 / total as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Entries ordered by count (descending), then genotype.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    #[inline]
    pub fn as_map(&self) -> &HashMap<String, u64> {
        &self.counts
    }

    pub fn into_map(self) -> HashMap<String, u64> {
        self.counts
    }
}

impl Serialize for PunnettSquare {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.sorted())
    }
}

impl Extend<String> for PunnettSquare {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        iter.into_iter().for_each(|genotype| self.record(genotype));
    }
}

impl FromIterator<String> for PunnettSquare {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut square = Self::new();
        square.extend(iter);
        square
    }
}

impl IntoIterator for PunnettSquare {
    type Item = (String, u64);
    type IntoIter = hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl From<PunnettSquare> for HashMap<String, u64> {
    fn from(square: PunnettSquare) -> Self {
        square.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monohybrid() -> PunnettSquare {
        ["AA", "Aa", "Aa", "aa"].into_iter().map(String::from).collect()
    }

    #[test]
    fn test_record_and_get() {
        let square = monohybrid();
        assert_eq!(square.get("Aa"), Some(2));
        assert_eq!(square.get("AA"), Some(1));
        assert_eq!(square.get("aA"), None);
        assert!(square.contains("aa"));
        assert_eq!(square.len(), 3);
        assert_eq!(square.total(), 4);
    }

    #[test]
    fn test_frequency() {
        let square = monohybrid();
        assert_eq!(square.frequency("Aa"), 0.5);
        assert_eq!(square.frequency("AA"), 0.25);
        assert_eq!(square.frequency("BB"), 0.0);
        assert_eq!(PunnettSquare::new().frequency("AA"), 0.0);
    }

    #[test]
    fn test_sorted() {
        let square = monohybrid();
        assert_eq!(square.sorted(), vec![("Aa", 2), ("AA", 1), ("aa", 1)]);
    }

    #[test]
    fn test_empty() {
        let square = PunnettSquare::new();
        assert!(square.is_empty());
        assert_eq!(square.total(), 0);
    }

    #[test]
    fn test_serialize_sorted_json() {
        let json = serde_json::to_string(&monohybrid()).unwrap();
        assert_eq!(json, r#"{"Aa":2,"AA":1,"aa":1}"#);

        let parsed: PunnettSquare = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, monohybrid());
    }

    #[test]
    fn test_into_map() {
        let map: HashMap<String, u64> = monohybrid().into();
        assert_eq!(map.get("aa"), Some(&1));
    }
}
