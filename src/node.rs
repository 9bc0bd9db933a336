/// A node of a Huffman tree.
///
/// The tree is a strict binary tree: an internal node always owns exactly two
/// children and its weight is the sum of theirs. Nodes are never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<Symbol> {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node<Symbol>>,
        right: Box<Node<Symbol>>,
    },
}

impl<Symbol> Node<Symbol> {
    pub fn leaf(symbol: Symbol, weight: u64) -> Self {
        Node::Leaf { symbol, weight }
    }

    /// Joins two subtrees under a new internal node.
    ///
    /// The combined weight must fit in a `u64`; trees built from a
    /// [`FrequencyTable`](crate::FrequencyTable) always satisfy this.
    pub fn from_children(left: Node<Symbol>, right: Node<Symbol>) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn left(&self) -> Option<&Node<Symbol>> {
        match self {
            Node::Internal { left, .. } => Some(&**left),
            Node::Leaf { .. } => None,
        }
    }

    pub fn right(&self) -> Option<&Node<Symbol>> {
        match self {
            Node::Internal { right, .. } => Some(&**right),
            Node::Leaf { .. } => None,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path, in edges.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Sum of `weight * depth` over all leaves below this node.
    ///
    /// Equivalently the sum of the weights of all internal nodes, which is
    /// what gets computed here. `None` if the sum does not fit in a `u64`.
    pub fn weighted_path_length(&self) -> Option<u64> {
        match self {
            Node::Leaf { .. } => Some(0),
            Node::Internal {
                weight, left, right, ..
            } => weight
                .checked_add(left.weighted_path_length()?)?
                .checked_add(right.weighted_path_length()?),
        }
    }
}
