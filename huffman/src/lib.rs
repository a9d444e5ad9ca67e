//! A standalone implementation of the static canonical [Huffman] code table
//! used by [HPACK] (RFC 7541 Appendix B) to compress HTTP/2 header string
//! literals.
//!
//! This crate knows nothing about HPACK's representations, tables, or
//! headers; it only turns bytes into Huffman-coded bits and back. It is
//! meant to be used as a collaborator by a higher-level HPACK codec, which
//! decides *when* to Huffman-encode a string and *what* to do with the
//! result.
//!
//! [Huffman]: https://en.wikipedia.org/wiki/Canonical_Huffman_code
//! [HPACK]: https://tools.ietf.org/html/rfc7541

mod decoder;
mod encoder;
pub mod table;

pub use decoder::*;
pub use encoder::encode;
