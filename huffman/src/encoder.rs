//! Provides an implementation of the [canonical Huffman] encoder.
//!
//! Bytes are replaced by their static Huffman code (see [`crate::table`]) and
//! packed most-significant-bit first into the destination buffer. If the
//! final octet is left with spare bits, it is padded with the high-order
//! bits of the End-of-String code, as required by [HPACK, 5.2].
//!
//! [canonical Huffman]: https://en.wikipedia.org/wiki/Canonical_Huffman_code
//! [HPACK, 5.2]: https://tools.ietf.org/html/rfc7541#section-5.2

use crate::table::{CODES, EOS};

/// Encodes `src` into its Huffman representation, appending the result to
/// `dst`. Always succeeds: every byte value has a code in the static table.
///
/// **Example:**
///
/// ```rust
/// use huffman::encode;
///
/// let mut dst = Vec::new();
/// encode(b"www.example.com", &mut dst);
/// ```
pub fn encode(src: &[u8], dst: &mut Vec<u8>) {
    let mut acc: u64 = 0;
    let mut bits: u32 = 0;

    for &byte in src {
        let (code, len) = CODES[byte as usize];
        acc = (acc << len) | code as u64;
        bits += len as u32;

        while bits >= 8 {
            bits -= 8;
            dst.push((acc >> bits) as u8);
        }
    }

    if bits > 0 {
        let (eos, eos_len) = CODES[EOS];
        let pad = 8 - bits;
        acc = (acc << pad) | (eos as u64 >> (eos_len as u32 - pad));
        dst.push(acc as u8);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encodes_empty_input() {
        let mut dst = Vec::new();
        encode(b"", &mut dst);
        assert_eq!(dst, Vec::<u8>::new());
    }

    #[test]
    fn encodes_known_literals() {
        // Known-good (literal, code) pairs used throughout the HPACK corpus.
        let cases: Vec<(&[u8], Vec<u8>)> = vec![
            (b":method", vec![185, 73, 83, 57, 228]),
            (b"GET", vec![197, 131, 127]),
            (b"accept", vec![25, 8, 90, 211]),
        ];
        for (literal, code) in cases {
            let mut dst = Vec::new();
            encode(literal, &mut dst);
            assert_eq!(dst, code);
        }
    }

    #[test]
    fn pads_with_eos_prefix() {
        let mut dst = Vec::new();
        encode(b"a", &mut dst); // 'a' = 0x3, 5 bits -> 1 byte with 3 pad bits
        assert_eq!(dst, vec![0b00011_111]);
    }
}
