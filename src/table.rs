use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::node::Node;
use crate::symbol::Symbol;
use crate::tree::HuffmanTree;
use bitvec::prelude::*;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Symbol to code mapping derived from a [`HuffmanTree`].
///
/// Codes are never empty and no code is a prefix of another.
#[derive(Debug, Clone)]
pub struct CodeTable<S> {
    codes: HashMap<S, BitBox>,
}

impl<S: Symbol> PartialEq for CodeTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.codes == other.codes
    }
}

impl<S: Symbol> Eq for CodeTable<S> {}

impl<S: Symbol> CodeTable<S> {
    /// Assigns each leaf the path that reaches it: `0` for every step left,
    /// `1` for every step right.
    ///
    /// A tree made of a single leaf has no edges, so that symbol is given the
    /// code `0`.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        fn traverse<S: Symbol>(node: &Node<S>, v: &mut BitVec, codes: &mut HashMap<S, BitBox>) {
            match node {
                Node::Leaf { symbol, .. } => {
                    codes.insert(symbol.clone(), v.clone().into_boxed_bitslice());
                }
                Node::Internal { left, right, .. } => {
                    v.push(false);
                    traverse(left, v, codes);
                    v.pop();

                    v.push(true);
                    traverse(right, v, codes);
                    v.pop();
                }
            }
        }

        let mut codes = HashMap::new();
        match tree.root() {
            Node::Leaf { symbol, .. } => {
                codes.insert(symbol.clone(), bitbox![0]);
            }
            root => traverse(root, &mut BitVec::new(), &mut codes),
        }

        let table = Self { codes };
        debug!(
            "derived code table: {} codes, longest {} bits",
            table.len(),
            table.max_code_len()
        );
        table
    }

    /// Builds a table from explicit entries, checking that every code is
    /// non-empty, every symbol and code is unique, and the codes are
    /// prefix-free.
    pub fn from_entries(entries: impl IntoIterator<Item = (S, BitVec)>) -> Result<Self> {
        Self::checked(entries).map_err(Error::InvalidInput)
    }

    pub(crate) fn checked(
        entries: impl IntoIterator<Item = (S, BitVec)>,
    ) -> std::result::Result<Self, &'static str> {
        let mut codes = HashMap::new();
        for (s, code) in entries {
            if code.is_empty() {
                return Err("empty code");
            }
            if codes.insert(s, code.into_boxed_bitslice()).is_some() {
                return Err("duplicate symbol");
            }
        }
        if codes.is_empty() {
            return Err("empty code table");
        }

        let table = Self { codes };
        let ordered = table.by_code();
        for pair in ordered.windows(2) {
            let (shorter, longer) = (&pair[0].1, &pair[1].1);
            if is_prefix(shorter, longer) {
                return Err("code is a prefix of another code");
            }
        }

        Ok(table)
    }

    pub fn get(&self, symbol: &S) -> Option<&BitSlice> {
        self.codes.get(symbol).map(|b| b.as_bitslice())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitSlice)> {
        self.codes.iter().map(|(s, b)| (s, b.as_bitslice()))
    }

    pub fn symbols(&self) -> HashSet<&S> {
        self.codes.keys().collect()
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(|b| b.len()).max().unwrap_or(0)
    }

    /// Entries in ascending symbol order.
    pub fn by_symbol(&self) -> Vec<(&S, &BitSlice)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Entries in lexicographic code order, which for a derived table is the
    /// left-to-right order of the leaves in the tree.
    pub fn by_code(&self) -> Vec<(&S, &BitSlice)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.1.iter().by_vals().cmp(b.1.iter().by_vals()));
        entries
    }

    pub fn is_prefix_free(&self) -> bool {
        self.by_code()
            .windows(2)
            .all(|pair| !is_prefix(pair[0].1, pair[1].1))
    }

    /// Encoded length in bits of an input with the given frequencies.
    ///
    /// Fails with [`Error::InvalidInput`] if the length does not fit in a
    /// `u64`.
    pub fn weighted_length(&self, freq: &FrequencyTable<S>) -> Result<u64> {
        freq.iter().try_fold(0u64, |acc, (s, count)| {
            let code = self.get(s).ok_or(Error::UnknownSymbol {
                ordinal: s.ordinal(),
            })?;
            count
                .checked_mul(code.len() as u64)
                .and_then(|bits| acc.checked_add(bits))
                .ok_or(Error::InvalidInput("encoded length overflows u64"))
        })
    }
}

impl<S: Symbol> fmt::Display for CodeTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (s, code) in self.by_code() {
            writeln!(f, "{:?} {}", s, render_bits(code))?;
        }
        Ok(())
    }
}

fn is_prefix(shorter: &BitSlice, longer: &BitSlice) -> bool {
    shorter.len() <= longer.len() && longer[..shorter.len()] == *shorter
}

/// Renders bits as ASCII `0`/`1` characters.
pub fn render_bits(bits: &BitSlice) -> String {
    bits.iter()
        .by_vals()
        .map(|b| if b { '1' } else { '0' })
        .collect()
}

/// Parses ASCII `0`/`1` characters. Returns `None` on any other character.
pub fn parse_bits(text: &str) -> Option<BitVec> {
    text.chars()
        .map(|c| match c {
            '0' => Some(false),
            '1' => Some(true),
            _ => None,
        })
        .collect()
}
