use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::table::{CODES, EOS};
use super::error::DecoderError;

lazy_static! {
    /// Maps `(code, length)` back to the symbol it represents, including the
    /// EOS entry at key `256` so the reader can reject a literal EOS found in
    /// the middle of a string instead of silently accepting it as data.
    static ref CODE_MAP: HashMap<(u32, u8), u16> = {
        let mut m = HashMap::with_capacity(CODES.len());
        for (symbol, &(code, len)) in CODES.iter().enumerate() {
            m.insert((code, len), symbol as u16);
        }
        m
    };
}

/// Streaming bit-at-a-time Huffman reader. Bytes are fed one at a time via
/// [`DecodeReader::decode`]; call [`DecodeReader::finalize`] once the whole
/// input has been consumed to validate the trailing padding.
pub struct DecodeReader {
    current: u32,
    current_len: u8,
}

impl DecodeReader {
    /// `speed` matches [`crate::DecoderSpeed`]'s signature; the reader
    /// itself always decodes one bit at a time.
    pub fn new(_speed: usize) -> Self {
        Self {
            current: 0,
            current_len: 0,
        }
    }

    /// Feeds one more encoded octet into the reader, appending any fully
    /// decoded bytes to `dst`.
    pub fn decode(&mut self, byte: u8, dst: &mut Vec<u8>) -> Result<(), DecoderError> {
        for shift in (0..8).rev() {
            let bit = (byte >> shift) & 1;
            self.current = (self.current << 1) | bit as u32;
            self.current_len += 1;

            if let Some(&symbol) = CODE_MAP.get(&(self.current, self.current_len)) {
                if symbol as usize == EOS {
                    return Err(DecoderError::InvalidInput);
                }
                dst.push(symbol as u8);
                self.current = 0;
                self.current_len = 0;
            }
        }
        Ok(())
    }

    /// Validates that any leftover bits form a valid EOS padding: at most 7
    /// bits, all set, matching the high-order bits of the EOS code.
    pub fn finalize(&mut self, _dst: &mut Vec<u8>) -> Result<(), DecoderError> {
        if self.current_len == 0 {
            return Ok(());
        }
        if self.current_len > 7 {
            return Err(DecoderError::InvalidInput);
        }
        let all_ones = (1u32 << self.current_len) - 1;
        if self.current != all_ones {
            return Err(DecoderError::InvalidInput);
        }
        Ok(())
    }
}
