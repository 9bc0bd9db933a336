//! Bit-packed transport for an [`Artifact`].
//!
//! This is a separate format from the text artifact: codes and the payload
//! are stored as machine words with an explicit bit length, and the whole
//! structure is left to a serde format of the caller's choosing. It cannot be
//! read by anything expecting the text layout.

use crate::artifact::Artifact;
use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::table::CodeTable;
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

/// A bit string stored as its length plus the words that hold it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PackedBits {
    len: usize,
    words: Box<[usize]>,
}

impl From<&BitSlice> for PackedBits {
    fn from(bits: &BitSlice) -> Self {
        Self {
            len: bits.len(),
            words: bits.to_bitvec().into_boxed_bitslice().into_boxed_slice(),
        }
    }
}

impl From<PackedBits> for BitVec {
    fn from(packed: PackedBits) -> Self {
        let mut bv = BitBox::from_boxed_slice(packed.words).into_bitvec();
        bv.resize(packed.len, false);
        bv
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedArtifact<S> {
    codes: Vec<(S, PackedBits)>,
    payload: PackedBits,
}

impl<'a, S: Symbol> From<&'a Artifact<S>> for PackedArtifact<S> {
    fn from(other: &'a Artifact<S>) -> Self {
        Self {
            codes: other
                .table()
                .by_symbol()
                .into_iter()
                .map(|(s, code)| (s.clone(), code.into()))
                .collect(),
            payload: other.payload().into(),
        }
    }
}

impl<S: Symbol> PackedArtifact<S> {
    /// Unpacks into an [`Artifact`], validating the table the same way the
    /// text reader does.
    pub fn into_artifact(self) -> Result<Artifact<S>> {
        for (_, code) in &self.codes {
            check_len(code)?;
        }
        check_len(&self.payload)?;

        let table = CodeTable::checked(self.codes.into_iter().map(|(s, code)| (s, code.into())))
            .map_err(|reason| Error::malformed(0, reason))?;

        Ok(Artifact::new(table, self.payload.into()))
    }
}

fn check_len(packed: &PackedBits) -> Result<()> {
    if packed.len > packed.words.len() * usize::BITS as usize {
        return Err(Error::malformed(
            0,
            format!(
                "{} bits declared but only {} words stored",
                packed.len,
                packed.words.len()
            ),
        ));
    }
    Ok(())
}
