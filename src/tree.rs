use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::node::Node;
use crate::symbol::Symbol;
use derivative::Derivative;
use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Priority queue entry. Ordered by `(weight, seq)` only, so the node itself
/// never takes part in a comparison.
#[derive(Debug, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
struct QueueEntry<S> {
    weight: u64,
    seq: usize,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    node: Node<S>,
}

impl<S> QueueEntry<S> {
    fn new(node: Node<S>, seq: usize) -> Reverse<Self> {
        Reverse(Self {
            weight: node.weight(),
            seq,
            node,
        })
    }
}

/// An optimal prefix-code tree for one frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Builds the tree by repeatedly merging the two lightest subtrees.
    ///
    /// Ties are broken by a sequence number: leaves are numbered in ascending
    /// symbol order, and every merged node is numbered after all existing
    /// entries. Among equal weights the lower number is extracted first and
    /// becomes the left child.
    ///
    /// Costs `O(k log k)` for `k` distinct symbols. Fails with
    /// [`Error::InvalidInput`] when `freq` is empty.
    pub fn build(freq: &FrequencyTable<S>) -> Result<Self> {
        if freq.is_empty() {
            return Err(Error::InvalidInput("cannot build a tree for an empty alphabet"));
        }

        let mut pq: BinaryHeap<_> = freq
            .sorted()
            .into_iter()
            .enumerate()
            .map(|(seq, (s, count))| QueueEntry::new(Node::leaf(s, count), seq))
            .collect();
        let mut next_seq = pq.len();

        while pq.len() > 1 {
            let (Some(Reverse(left)), Some(Reverse(right))) = (pq.pop(), pq.pop()) else {
                break;
            };
            trace!(
                "merging #{} (w={}) with #{} (w={}) into #{}",
                left.seq,
                left.weight,
                right.seq,
                right.weight,
                next_seq
            );
            pq.push(QueueEntry::new(Node::from_children(left.node, right.node), next_seq));
            next_seq += 1;
        }

        let root = pq
            .pop()
            .map(|Reverse(entry)| entry.node)
            .ok_or(Error::InvalidInput("cannot build a tree for an empty alphabet"))?;

        debug!(
            "built huffman tree: {} symbols, total weight {}, depth {}",
            freq.len(),
            root.weight(),
            root.depth()
        );

        Ok(Self { root })
    }

    /// Counts `symbols` and builds the tree for them.
    pub fn from_symbols(symbols: impl IntoIterator<Item = S>) -> Result<Self> {
        Self::build(&FrequencyTable::from_symbols(symbols))
    }

    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    pub fn into_root(self) -> Node<S> {
        self.root
    }

    /// Total weight, i.e. the length of the input the tree was built for.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// `sum(weight(s) * depth(s))` over all leaves, or `None` if that does
    /// not fit in a `u64`.
    ///
    /// A single-leaf tree reports its weight, since its lone symbol is given a
    /// one-bit code.
    pub fn weighted_path_length(&self) -> Option<u64> {
        match &self.root {
            Node::Leaf { weight, .. } => Some(*weight),
            root => root.weighted_path_length(),
        }
    }
}
