//! Static two-pass Huffman coding.
//!
//! Count the symbols of an input, build an optimal prefix-code tree, derive a
//! code table from it, encode the input, and persist the table together with
//! the encoded payload. Any symbol type implementing [`Symbol`] works; `char`
//! and `u8` are provided. The text pipeline codes the UTF-8 bytes of its
//! input, so its artifacts only ever hold ordinals `0..=255`.
//!
//! ```
//! use static_huffman::{compress_text, decompress_text};
//!
//! let artifact = compress_text("abracadabra").unwrap();
//! assert_eq!(decompress_text(&artifact).unwrap(), "abracadabra");
//! ```

pub mod artifact;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod node;
pub mod packed;
pub mod symbol;
pub mod table;
pub mod tree;

pub use artifact::Artifact;
pub use codec::{decode, encode, DecodeMode, Decoder};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use node::Node;
pub use packed::PackedArtifact;
pub use symbol::Symbol;
pub use table::CodeTable;
pub use tree::HuffmanTree;

/// Runs the whole encoding pipeline over `symbols`.
///
/// Fails with [`Error::InvalidInput`] when `symbols` is empty.
pub fn compress<S: Symbol>(symbols: &[S]) -> Result<Artifact<S>> {
    let freq = FrequencyTable::from_symbols(symbols.iter().cloned());
    let tree = HuffmanTree::build(&freq)?;
    let table = CodeTable::from_tree(&tree);
    let payload = encode(symbols, &table)?;

    Ok(Artifact::new(table, payload))
}

/// Strictly decodes an artifact's payload.
pub fn decompress<S: Symbol>(artifact: &Artifact<S>) -> Result<Vec<S>> {
    artifact.decode(DecodeMode::Strict)
}

/// Compresses text into the text artifact format, one symbol per UTF-8 byte.
pub fn compress_text(text: &str) -> Result<String> {
    Ok(compress(text.as_bytes())?.to_text())
}

/// Inverse of [`compress_text`]; fails with `MalformedArtifact` on a bad
/// artifact or a payload that is not UTF-8, and with `TruncatedStream` or
/// `InvalidCode` on a bad payload.
pub fn decompress_text(artifact: &str) -> Result<String> {
    let bytes = decompress(&Artifact::<u8>::parse(artifact)?)?;
    String::from_utf8(bytes).map_err(|e| {
        Error::malformed(0, format!("decoded payload is not valid UTF-8: {e}"))
    })
}

/// Compresses arbitrary bytes into the text artifact format.
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    Ok(compress(data)?.to_text().into_bytes())
}

/// Inverse of [`compress_bytes`]; fails with `MalformedArtifact`,
/// `TruncatedStream` or `InvalidCode`.
pub fn decompress_bytes(artifact: &[u8]) -> Result<Vec<u8>> {
    decompress(&Artifact::<u8>::from_bytes(artifact)?)
}
