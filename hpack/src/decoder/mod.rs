//! Provides an implementation of the [HPACK] decoder.
//!
//! The decoder walks a header block one representation at a time. Each
//! representation starts with a single byte whose high-order bits classify
//! it; the classification then determines how many more bytes (and which
//! primitive encodings) follow.
//!
//! * [Indexed header field representation]: the header field already
//!   lives in the static or dynamic table; only its combined index is on
//!   the wire.
//! * [Literal header field representation]: with incremental indexing,
//!   without indexing, or never indexed. The header's name may itself be a
//!   table reference, but its value is always a string literal.
//! * [Dynamic table size update]: signals a new capacity for the dynamic
//!   table; only legal at the start of a block or immediately after
//!   another size-update.
//!
//! [HPACK]: https://tools.ietf.org/html/rfc7541
//! [Indexed header field representation]: https://tools.ietf.org/html/rfc7541#section-6.1
//! [Literal header field representation]: https://tools.ietf.org/html/rfc7541#section-6.2
//! [Dynamic table size update]: https://tools.ietf.org/html/rfc7541#section-6.3

mod error;
mod primitives;

pub use error::*;
use primitives::*;

use crate::settings::Settings;
use crate::table::Table;

/// One of the five on-wire HPACK representations, classified from the
/// first byte of a block position.
#[derive(Debug, PartialEq)]
enum Representation {
    Indexed,
    LiteralWithIndexing,
    LiteralWithoutIndexing,
    LiteralNeverIndexed,
    SizeUpdate,
}

impl Representation {
    /// Classifies `byte` by priority, per [6.1]–[6.3]: the first matching
    /// high-order bit pattern wins.
    ///
    /// [6.1]: https://tools.ietf.org/html/rfc7541#section-6.1
    /// [6.3]: https://tools.ietf.org/html/rfc7541#section-6.3
    fn load(byte: u8) -> Self {
        if byte & 0b1000_0000 != 0 {
            Self::Indexed
        } else if byte & 0b0100_0000 != 0 {
            Self::LiteralWithIndexing
        } else if byte & 0b0010_0000 != 0 {
            Self::SizeUpdate
        } else if byte & 0b0001_0000 != 0 {
            Self::LiteralNeverIndexed
        } else {
            Self::LiteralWithoutIndexing
        }
    }
}

/// Provides the decoding engine for HTTP/2 headers.
///
/// The decoder owns no table: it operates on a `Table` (and, for
/// size-update validation, the settings bound) supplied by the caller, so
/// a single `Decoder` can be reused across many `decode` calls against the
/// same dynamic table.
#[derive(Debug, Default)]
pub struct Decoder;

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes every representation in `src` into an ordered header list,
    /// mutating `table` as incremental and size-update representations
    /// require.
    ///
    /// `settings` supplies the bound a size-update directive is validated
    /// against ([6.3]) via [`Settings::validate_decoded`]: before the
    /// caller's first `SETTINGS_HEADER_TABLE_SIZE` notification anything is
    /// accepted, afterward a size-update exceeding it is rejected.
    ///
    /// [6.3]: https://tools.ietf.org/html/rfc7541#section-6.3
    pub fn decode(
        &self,
        src: &[u8],
        table: &mut Table,
        settings: &Settings,
    ) -> Result<Vec<(Vec<u8>, Vec<u8>)>, DecoderError> {
        let mut pos = 0;
        let mut result = Vec::new();
        let mut can_resize = true; // a size-update is legal here

        while pos < src.len() {
            let first = src[pos];

            let representation = Representation::load(first);
            tracing::trace!(?representation, pos, "decoding representation");

            match representation {
                Representation::Indexed => {
                    can_resize = false;
                    let index = decode_integer(src, &mut pos, 7)?;
                    if index == 0 {
                        tracing::warn!("rejected Indexed representation with index 0");
                        return Err(DecoderError::IndexOutOfRange);
                    }
                    let (name, value) = table
                        .get(index)
                        .map(|(n, v)| (n.to_vec(), v.to_vec()))
                        .ok_or_else(|| {
                            tracing::warn!(index, "indexed reference out of range");
                            DecoderError::IndexOutOfRange
                        })?;
                    result.push((name, value));
                }
                Representation::LiteralWithIndexing => {
                    can_resize = false;
                    let (name, value) = self.decode_literal(src, &mut pos, table, 6)?;
                    table.insert(name.clone(), value.clone());
                    result.push((name, value));
                }
                Representation::LiteralWithoutIndexing => {
                    can_resize = false;
                    let entry = self.decode_literal(src, &mut pos, table, 4)?;
                    result.push(entry);
                }
                Representation::LiteralNeverIndexed => {
                    can_resize = false;
                    // The never-indexed bit is a downstream retransmission
                    // signal only; decoding behaves like without-indexing.
                    let entry = self.decode_literal(src, &mut pos, table, 4)?;
                    result.push(entry);
                }
                Representation::SizeUpdate => {
                    if !can_resize {
                        tracing::warn!("rejected size-update found mid-block");
                        return Err(DecoderError::InvalidSizeUpdate);
                    }
                    let new_size = decode_integer(src, &mut pos, 5)?;
                    if !settings.validate_decoded(new_size) {
                        tracing::warn!(new_size, "rejected size-update exceeding settings bound");
                        return Err(DecoderError::InvalidSizeUpdate);
                    }
                    tracing::debug!(new_size, "dynamic table size updated by decoder");
                    table.update_max_dynamic_size(new_size);
                    // Stays true: another size-update may immediately follow.
                }
            }
        }

        Ok(result)
    }

    fn decode_literal(
        &self,
        src: &[u8],
        pos: &mut usize,
        table: &Table,
        prefix_bits: u8,
    ) -> Result<(Vec<u8>, Vec<u8>), DecoderError> {
        let index = decode_integer(src, pos, prefix_bits)?;

        let name = if index == 0 {
            decode_string(src, pos)?
        } else {
            table.get(index).map(|(n, _)| n.to_vec()).ok_or_else(|| {
                tracing::warn!(index, "indexed name reference out of range");
                DecoderError::IndexOutOfRange
            })?
        };

        let value = decode_string(src, pos)?;

        Ok((name, value))
    }
}
