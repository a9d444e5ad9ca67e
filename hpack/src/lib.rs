//! An implementation of [HPACK], the header compression scheme used by
//! [HTTP/2] to shrink the repeated header fields sent on every request and
//! response.
//!
//! This crate implements the codec core: the integer and string primitive
//! encodings, the static and dynamic tables, the encoder and decoder state
//! machines, and the `SETTINGS_HEADER_TABLE_SIZE` bookkeeping that ties
//! them together. It does not do frame I/O, stream multiplexing, or TLS;
//! those are an HTTP/2 implementation's job, built on top of [`Codec`].
//!
//! **Example:**
//!
//! ```rust
//! use hpack::Codec;
//!
//! let mut codec = Codec::new();
//! let headers = vec![(b":method".to_vec(), b"GET".to_vec())];
//! let bytes = codec.compress(&headers).unwrap();
//! assert_eq!(bytes, vec![0x82]);
//! assert_eq!(codec.decompress(&bytes).unwrap(), headers);
//! ```
//!
//! [HPACK]: https://tools.ietf.org/html/rfc7541
//! [HTTP/2]: https://tools.ietf.org/html/rfc7540

mod cookie;
mod decoder;
mod encoder;
mod settings;
mod table;

pub use decoder::{Decoder, DecoderError};
pub use encoder::{Encoder, EncoderError, EncoderInput};
pub use settings::{Settings, SettingsError};
pub use table::Table;

/// An ordered list of header name/value pairs, as exchanged between the
/// caller and the codec. Duplicates are allowed; order is observable.
pub type HeaderList = Vec<(Vec<u8>, Vec<u8>)>;

/// Ties an [`Encoder`], a [`Decoder`], their independent dynamic tables,
/// and the shared [`Settings`] tracker into the single logical component
/// an HTTP/2 endpoint direction pair needs.
///
/// A `Codec` instance is single-threaded: its two directions are
/// sequential state machines and concurrent calls on the same instance are
/// not supported. Two distinct instances may run on separate threads
/// without coordination; they only share the immutable static table.
#[derive(Debug)]
pub struct Codec<'a> {
    encoder: Encoder<'a>,
    decoder: Decoder,
    dec_table: Table<'a>,
    settings: Settings,
    buf: Vec<u8>,
}

impl<'a> Codec<'a> {
    /// Returns a fresh codec: both tables empty with the default 4096-byte
    /// capacity, and no `SETTINGS_HEADER_TABLE_SIZE` received yet.
    pub fn new() -> Self {
        Self {
            encoder: Encoder::default(),
            decoder: Decoder::new(),
            dec_table: Table::default(),
            settings: Settings::new(),
            buf: Vec::new(),
        }
    }

    /// Returns a fresh codec whose encoder and decoder dynamic tables both
    /// start out with `max_dynamic_size` bytes of capacity instead of the
    /// default 4096.
    pub fn with_dynamic_size(max_dynamic_size: u32) -> Self {
        Self {
            encoder: Encoder::with_dynamic_size(max_dynamic_size),
            decoder: Decoder::new(),
            dec_table: Table::with_dynamic_size(max_dynamic_size),
            settings: Settings::new(),
            buf: Vec::new(),
        }
    }

    /// Records a `SETTINGS_HEADER_TABLE_SIZE` change, applying the new
    /// capacity to both dynamic tables immediately and queuing the
    /// size-update directive to be emitted ahead of the next `compress`
    /// call ([4.7]).
    ///
    /// [4.7]: https://tools.ietf.org/html/rfc7541#section-6.3
    pub fn notify_settings(&mut self, new_max: u32) -> Result<(), SettingsError> {
        self.settings.notify(new_max)?;
        self.encoder.apply_max_dynamic_size(new_max);
        self.dec_table.update_max_dynamic_size(new_max);
        Ok(())
    }

    /// Encodes `headers` into an HPACK header block, prefixed with any
    /// dynamic-table-size-update directives queued by `notify_settings`.
    ///
    /// Every header is encoded using the best available representation:
    /// a full index match when one exists, otherwise a Huffman-coded
    /// literal with incremental indexing (matching or creating a dynamic
    /// table entry). The codec never emits a without-indexing or
    /// never-indexed representation of its own initiative; callers that
    /// need those representations should drive [`Encoder`] directly.
    pub fn compress(&mut self, headers: &[(Vec<u8>, Vec<u8>)]) -> Result<Vec<u8>, EncoderError> {
        self.buf.clear();

        if self.settings.must_emit_update() {
            for size in self.settings.drain_pending() {
                tracing::debug!(size, "emitting queued dynamic table size update");
                self.encoder.update_max_dynamic_size(size, &mut self.buf)?;
            }
        }

        const FLAGS: u8 = Encoder::BEST_FORMAT
            | Encoder::WITH_INDEXING
            | Encoder::HUFFMAN_NAME
            | Encoder::HUFFMAN_VALUE;

        for (name, value) in headers {
            self.encoder
                .encode((name.as_slice(), value.as_slice(), FLAGS), &mut self.buf)?;
        }

        Ok(self.buf.clone())
    }

    /// Decodes an HPACK header block into an ordered header list, then
    /// performs Cookie reassembly ([4.6]) on the result.
    ///
    /// [4.6]: https://tools.ietf.org/html/rfc7540#section-8.1.2.5
    pub fn decompress(&mut self, bytes: &[u8]) -> Result<HeaderList, DecoderError> {
        let mut headers = self
            .decoder
            .decode(bytes, &mut self.dec_table, &self.settings)?;
        cookie::reassemble(&mut headers);
        Ok(headers)
    }

    /// Releases the encoder's reused output buffer. Idempotent, and safe
    /// to call even if the codec is used again afterward (a fresh buffer
    /// is allocated lazily on the next `compress`).
    pub fn dispose(&mut self) {
        self.buf = Vec::new();
    }
}

impl<'a> Default for Codec<'a> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Scenario 1: indexed static match round-trips as a single octet.
    #[test]
    fn compresses_indexed_static_match() {
        let mut codec = Codec::new();
        let headers = vec![(b":method".to_vec(), b"GET".to_vec())];
        let bytes = codec.compress(&headers).unwrap();
        assert_eq!(bytes, vec![0x82]);
        assert_eq!(codec.decompress(&bytes).unwrap(), headers);
    }

    /// Scenario 2: a brand-new header is encoded as an incremental literal
    /// and inserted into the encoder's dynamic table.
    #[test]
    fn compresses_incremental_literal() {
        let mut codec = Codec::new();
        let headers = vec![(b"custom-key".to_vec(), b"custom-value".to_vec())];
        let bytes = codec.compress(&headers).unwrap();
        assert_eq!(bytes[0], 0x40);
        assert_eq!(codec.decompress(&bytes).unwrap(), headers);
    }

    /// Scenario 5: queued settings changes are emitted, in order, ahead of
    /// the next compressed block.
    #[test]
    fn emits_queued_size_updates_before_next_block() {
        let mut codec = Codec::new();
        codec.notify_settings(100).unwrap();
        codec.notify_settings(200).unwrap();
        let bytes = codec.compress(&[]).unwrap();
        // Two size-update directives, 100 then 200, prefix 5: 0b001xxxxx.
        assert_eq!(bytes[0] & 0b1110_0000, 0b0010_0000);
        let mut table = Table::default();
        let decoder = Decoder::new();
        let mut settings = Settings::default();
        settings.notify(200).unwrap();
        let decoded_raw_updates = decoder.decode(&bytes, &mut table, &settings).unwrap();
        assert!(decoded_raw_updates.is_empty()); // size-updates carry no headers
        assert_eq!(table.max_dynamic_size(), 200);
    }

    /// Round-trips a header list through compress/decompress (P1).
    #[test]
    fn round_trips_a_mixed_header_list() {
        let mut codec = Codec::new();
        let headers = vec![
            (b":method".to_vec(), b"GET".to_vec()),
            (b":path".to_vec(), b"/".to_vec()),
            (b"x-request-id".to_vec(), b"abc-123".to_vec()),
        ];
        let bytes = codec.compress(&headers).unwrap();
        assert_eq!(codec.decompress(&bytes).unwrap(), headers);
    }

    /// Cookie reassembly runs as part of decompress (scenario 6).
    #[test]
    fn reassembles_cookies_on_decompress() {
        let mut encoder_codec = Codec::new();
        let input = vec![
            (b"cookie".to_vec(), b"a=1".to_vec()),
            (b":path".to_vec(), b"/".to_vec()),
            (b"cookie".to_vec(), b"b=2".to_vec()),
        ];
        let bytes = encoder_codec.compress(&input).unwrap();
        let decoded = encoder_codec.decompress(&bytes).unwrap();
        assert_eq!(
            decoded,
            vec![
                (b":path".to_vec(), b"/".to_vec()),
                (b"cookie".to_vec(), b"a=1; b=2".to_vec()),
            ]
        );
    }

    #[test]
    fn dispose_is_idempotent_and_reusable() {
        let mut codec = Codec::new();
        codec.compress(&[(b":method".to_vec(), b"GET".to_vec())]).unwrap();
        codec.dispose();
        codec.dispose();
        let bytes = codec.compress(&[(b":method".to_vec(), b"POST".to_vec())]).unwrap();
        assert_eq!(bytes, vec![0x83]);
    }
}
