//! The text artifact: a code table followed by the encoded payload.
//!
//! ```text
//! <ordinal> <code>\n
//! <ordinal> <code>\n
//! ===\n
//! <payload as ASCII '0'/'1', no padding>
//! ```
//!
//! Table lines are written in ascending ordinal order. The reader accepts
//! them in any order.

use crate::codec::{DecodeMode, Decoder};
use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::table::{parse_bits, render_bits, CodeTable};
use bitvec::prelude::*;
use log::debug;
use std::fmt::Write as _;
use std::io::{Read, Write};

/// Line separating the code table from the payload.
pub const SEPARATOR: &str = "===";

/// A code table together with a payload encoded by it.
#[derive(Debug, Clone)]
pub struct Artifact<S> {
    table: CodeTable<S>,
    payload: BitVec,
}

impl<S: Symbol> PartialEq for Artifact<S> {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table && self.payload == other.payload
    }
}

impl<S: Symbol> Eq for Artifact<S> {}

impl<S: Symbol> Artifact<S> {
    pub fn new(table: CodeTable<S>, payload: BitVec) -> Self {
        Self { table, payload }
    }

    pub fn table(&self) -> &CodeTable<S> {
        &self.table
    }

    pub fn payload(&self) -> &BitSlice {
        &self.payload
    }

    pub fn into_parts(self) -> (CodeTable<S>, BitVec) {
        (self.table, self.payload)
    }

    /// Decodes the payload with the stored table.
    pub fn decode(&self, mode: DecodeMode) -> Result<Vec<S>> {
        Decoder::new(&self.table).with_mode(mode).decode(&self.payload)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (s, code) in self.table.by_symbol() {
            // writing to a String cannot fail
            let _ = writeln!(out, "{} {}", s.ordinal(), render_bits(code));
        }
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&render_bits(&self.payload));
        out
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.to_text().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Parses an artifact produced by [`Artifact::to_text`].
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = Vec::new();
        let mut rest = text;
        let mut line_no = 0;

        let payload_text = loop {
            line_no += 1;
            let (line, tail) = match rest.split_once('\n') {
                Some((line, tail)) => (line, Some(tail)),
                None => (rest, None),
            };
            let line = line.strip_suffix('\r').unwrap_or(line);

            if line == SEPARATOR {
                break tail.unwrap_or("");
            }
            let Some(tail) = tail else {
                return Err(Error::malformed(line_no, "missing `===` separator"));
            };

            entries.push(parse_entry::<S>(line, line_no)?);
            rest = tail;
        };

        let table = CodeTable::checked(entries).map_err(|reason| Error::malformed(line_no, reason))?;
        let payload = parse_bits(payload_text).ok_or_else(|| {
            Error::malformed(line_no + 1, "payload may only contain '0' and '1'")
        })?;

        debug!(
            "parsed artifact: {} codes, {} payload bits",
            table.len(),
            payload.len()
        );
        Ok(Self { table, payload })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::malformed(0, format!("artifact is not valid UTF-8: {e}")))?;
        Self::parse(text)
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }
}

fn parse_entry<S: Symbol>(line: &str, line_no: usize) -> Result<(S, BitVec)> {
    let mut fields = line.split_whitespace();
    let (Some(ordinal), Some(code), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(Error::malformed(line_no, "expected `<ordinal> <code>`"));
    };

    let ordinal: u32 = ordinal
        .parse()
        .map_err(|_| Error::malformed(line_no, format!("invalid ordinal `{ordinal}`")))?;
    let symbol = S::from_ordinal(ordinal).ok_or_else(|| {
        Error::malformed(line_no, format!("ordinal {ordinal} is not a valid symbol"))
    })?;
    let code = parse_bits(code)
        .ok_or_else(|| Error::malformed(line_no, format!("invalid code `{code}`")))?;

    Ok((symbol, code))
}
