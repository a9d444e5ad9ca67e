use std::{error, fmt, io};

/// Contains error options that can be encountered while performing the
/// encoding operations.
#[derive(Debug)]
pub enum EncoderError {
    /// Indicates that a provided table index does not resolve to an entry in
    /// the combined static/dynamic address space.
    InvalidIndex,

    /// Indicates that a header field is missing its name or value.
    InvalidHeader,

    /// Wraps an I/O failure while writing to the destination buffer.
    Io(io::Error),
}

impl fmt::Display for EncoderError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidIndex => write!(fmt, "Index does not exist in the indexing table."),
            Self::InvalidHeader => write!(fmt, "Header field is missing a name or a value."),
            Self::Io(err) => write!(fmt, "I/O error while encoding: {}", err),
        }
    }
}

impl error::Error for EncoderError {}

impl From<io::Error> for EncoderError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
