use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::table::CodeTable;
use bitvec::prelude::*;
use log::{debug, warn};
use std::borrow::Borrow;
use std::collections::HashMap;

/// Replaces every symbol with its code, in input order.
///
/// Fails with [`Error::UnknownSymbol`] if a symbol is missing from `table`,
/// which cannot happen when the table was derived from the same input.
pub fn encode<S, I>(symbols: I, table: &CodeTable<S>) -> Result<BitVec>
where
    S: Symbol,
    I: IntoIterator,
    I::Item: Borrow<S>,
{
    let mut out = BitVec::new();
    for s in symbols {
        let s = s.borrow();
        let code = table.get(s).ok_or(Error::UnknownSymbol {
            ordinal: s.ordinal(),
        })?;
        out.extend_from_bitslice(code);
    }

    debug!("encoded {} bits", out.len());
    Ok(out)
}

/// Decodes `bits` with a strict [`Decoder`] over `table`.
pub fn decode<S: Symbol>(bits: &BitSlice, table: &CodeTable<S>) -> Result<Vec<S>> {
    Decoder::new(table).decode(bits)
}

/// What to do with bits left over at the end of a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Leftover bits fail with [`Error::TruncatedStream`].
    #[default]
    Strict,
    /// Leftover bits are dropped with a warning.
    Lenient,
}

/// Reverse lookup from code to symbol.
#[derive(Debug, Clone)]
pub struct Decoder<S> {
    decode_table: HashMap<BitVec, S>,
    max_code_len: usize,
    mode: DecodeMode,
}

impl<S: Symbol> Decoder<S> {
    pub fn new(table: &CodeTable<S>) -> Self {
        let decode_table = table
            .iter()
            .map(|(s, code)| (code.to_bitvec(), s.clone()))
            .collect();

        Self {
            decode_table,
            max_code_len: table.max_code_len(),
            mode: DecodeMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    /// Reads bits one at a time, emitting a symbol whenever the bits read
    /// since the last symbol form a code.
    ///
    /// The codes are prefix-free, so the first match is the only possible
    /// one. Fails with [`Error::InvalidCode`] once the pending bits are longer
    /// than any code.
    pub fn decode(&self, input: &BitSlice) -> Result<Vec<S>> {
        let mut out = Vec::new();

        let mut cursor = BitVec::new();
        for (offset, b) in input.iter().by_vals().enumerate() {
            cursor.push(b);
            if let Some(sym) = self.decode_table.get(&cursor) {
                cursor.clear();
                out.push(sym.clone());
            } else if cursor.len() >= self.max_code_len {
                return Err(Error::InvalidCode { offset });
            }
        }

        if !cursor.is_empty() {
            match self.mode {
                DecodeMode::Strict => {
                    return Err(Error::TruncatedStream {
                        pending: cursor.len(),
                    })
                }
                DecodeMode::Lenient => {
                    warn!("dropping {} trailing bit(s) that do not form a code", cursor.len());
                }
            }
        }

        debug!("decoded {} symbols from {} bits", out.len(), input.len());
        Ok(out)
    }
}
