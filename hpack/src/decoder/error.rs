use std::{error, fmt};

/// Contains error options that can be encountered while performing the
/// decoding operations.
#[derive(Debug, PartialEq)]
pub enum DecoderError {
    /// A multi-octet integer was truncated or exceeded the allowed range.
    MalformedInteger,

    /// A string literal was truncated, had a bad length, or failed to
    /// Huffman-decode.
    MalformedString,

    /// An indexed reference fell outside the combined static/dynamic
    /// address space, or was `0` on an Indexed representation.
    IndexOutOfRange,

    /// A dynamic-table-size-update directive violated the agreed
    /// `SETTINGS_HEADER_TABLE_SIZE` bound, or arrived outside its allowed
    /// position (not at the very start of a block, nor immediately
    /// following another size-update).
    InvalidSizeUpdate,
}

impl fmt::Display for DecoderError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MalformedInteger => write!(fmt, "Truncated or overlong HPACK integer."),
            Self::MalformedString => write!(fmt, "Truncated or invalid HPACK string literal."),
            Self::IndexOutOfRange => write!(fmt, "Table index out of the combined address space."),
            Self::InvalidSizeUpdate => write!(fmt, "Dynamic table size update is out of bound or out of place."),
        }
    }
}

impl error::Error for DecoderError {}
