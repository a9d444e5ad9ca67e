//! HTTP/2 requires that multiple `cookie` header fields be reassembled
//! into one after decompression ([RFC 7540, 8.1.2.5]).
//!
//! [RFC 7540, 8.1.2.5]: https://tools.ietf.org/html/rfc7540#section-8.1.2.5

const COOKIE: &[u8] = b"cookie";
const DELIMITER: &[u8] = b"; ";

/// Removes every `cookie` entry from `headers`, joins their values with
/// `"; "` in original order with no trailing delimiter, and appends a
/// single reassembled `cookie` entry at the end. Leaves `headers`
/// untouched if no `cookie` entries are present.
pub fn reassemble(headers: &mut Vec<(Vec<u8>, Vec<u8>)>) {
    let mut values = Vec::new();
    headers.retain(|(name, value)| {
        if name.eq_ignore_ascii_case(COOKIE) {
            values.push(value.clone());
            false
        } else {
            true
        }
    });

    if values.is_empty() {
        return;
    }

    let joined = values.join(DELIMITER);
    headers.push((COOKIE.to_vec(), joined));
}
