use std::fmt::Debug;
use std::hash::Hash;

/// An atomic unit that can be Huffman coded.
///
/// Every symbol maps to a stable integer ordinal, which is how it is written
/// into a persisted artifact. The `Ord` bound orders symbols for the tree
/// builder's tie-break and must agree with the ordinal order.
pub trait Symbol: Clone + Eq + Hash + Ord + Debug {
    fn ordinal(&self) -> u32;

    /// Inverse of [`Symbol::ordinal`]. Returns `None` when `ordinal` does not
    /// name a value of this type.
    fn from_ordinal(ordinal: u32) -> Option<Self>;
}

impl Symbol for u8 {
    fn ordinal(&self) -> u32 {
        u32::from(*self)
    }

    fn from_ordinal(ordinal: u32) -> Option<Self> {
        u8::try_from(ordinal).ok()
    }
}

impl Symbol for char {
    fn ordinal(&self) -> u32 {
        u32::from(*self)
    }

    fn from_ordinal(ordinal: u32) -> Option<Self> {
        char::from_u32(ordinal)
    }
}
