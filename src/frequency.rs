use crate::error::{Error, Result};
use crate::symbol::Symbol;
use std::collections::HashMap;

/// Occurrence counts for the distinct symbols of one input.
///
/// Every stored count is at least one; symbols that never occur are absent.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    counts: HashMap<S, u64>,
}

impl<S: Symbol> PartialEq for FrequencyTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<S: Symbol> Eq for FrequencyTable<S> {}

impl<S: Symbol> FrequencyTable<S> {
    /// Counts every symbol of `symbols` in one pass.
    pub fn from_symbols(symbols: impl IntoIterator<Item = S>) -> Self {
        let mut counts: HashMap<S, u64> = HashMap::new();
        for s in symbols {
            *counts.entry(s).or_default() += 1;
        }

        Self { counts }
    }

    /// Builds a table from explicit `(symbol, count)` pairs.
    ///
    /// Counts for a repeated symbol are summed. A zero count is rejected since
    /// it would put a symbol into the alphabet that never occurs, and so is a
    /// set of counts whose total does not fit in a `u64`, which keeps every
    /// tree weight built from the table representable.
    pub fn from_counts(pairs: impl IntoIterator<Item = (S, u64)>) -> Result<Self> {
        let mut counts: HashMap<S, u64> = HashMap::new();
        let mut total = 0u64;
        for (s, count) in pairs {
            if count == 0 {
                return Err(Error::InvalidInput("symbol frequency must be at least 1"));
            }
            total = total
                .checked_add(count)
                .ok_or(Error::InvalidInput("total frequency overflows u64"))?;
            *counts.entry(s).or_default() += count;
        }

        Ok(Self { counts })
    }

    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> {
        self.counts.iter().map(|(s, &c)| (s, c))
    }

    /// Entries in ascending symbol order.
    pub fn sorted(&self) -> Vec<(S, u64)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(s, &c)| (s.clone(), c)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_symbols() {
        let freq = FrequencyTable::from_symbols("aabccc".chars());

        assert_eq!(freq.get(&'a'), Some(2));
        assert_eq!(freq.get(&'b'), Some(1));
        assert_eq!(freq.get(&'c'), Some(3));
        assert_eq!(freq.get(&'d'), None);
        assert_eq!(freq.len(), 3);
        assert_eq!(freq.total(), 6);
    }

    #[test]
    fn empty_input() {
        let freq = FrequencyTable::<u8>::from_symbols(Vec::new());
        assert!(freq.is_empty());
        assert_eq!(freq.total(), 0);
    }

    #[test]
    fn explicit_counts_merge_duplicates() {
        let freq = FrequencyTable::from_counts([(b'x', 2), (b'y', 1), (b'x', 3)]).unwrap();
        assert_eq!(freq.get(&b'x'), Some(5));
        assert_eq!(freq.sorted(), vec![(b'x', 5), (b'y', 1)]);
    }

    #[test]
    fn explicit_counts_overflow_rejected() {
        let err = FrequencyTable::from_counts([('a', u64::MAX), ('b', 1)]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = FrequencyTable::from_counts([('a', u64::MAX / 2 + 1), ('a', u64::MAX / 2 + 1)])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let max = FrequencyTable::from_counts([('a', u64::MAX - 1), ('b', 1)]).unwrap();
        assert_eq!(max.total(), u64::MAX);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let counted = FrequencyTable::from_symbols("abca".chars());
        let explicit = FrequencyTable::from_counts([('c', 1), ('b', 1), ('a', 2)]).unwrap();
        assert_eq!(counted, explicit);
        assert_ne!(counted, FrequencyTable::from_symbols("abc".chars()));
    }

    #[test]
    fn explicit_zero_count_rejected() {
        let err = FrequencyTable::from_counts([('a', 1), ('b', 0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
