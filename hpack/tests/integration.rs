use hpack::{Codec, Decoder, DecoderError, Settings, Table};

/// RFC 7541 Appendix C.3: three requests without Huffman coding, decoded
/// in sequence against one dynamic table and checked against the
/// transcript's published header lists and table sizes.
#[test]
fn decodes_rfc7541_appendix_c3_request_sequence() {
    let decoder = Decoder::new();
    let mut table = Table::default();
    let settings = Settings::default();

    let first = hex::decode("828684410f7777772e6578616d706c652e636f6d").unwrap();
    let decoded = decoder.decode(&first, &mut table, &settings).unwrap();
    assert_eq!(
        decoded,
        vec![
            (b":method".to_vec(), b"GET".to_vec()),
            (b":scheme".to_vec(), b"http".to_vec()),
            (b":path".to_vec(), b"/".to_vec()),
            (b":authority".to_vec(), b"www.example.com".to_vec()),
        ]
    );
    assert_eq!(table.dynamic_len(), 1);
    assert_eq!(table.dynamic_size(), 57);

    let second = hex::decode("828684be58086e6f2d6361636865").unwrap();
    let decoded = decoder.decode(&second, &mut table, &settings).unwrap();
    assert_eq!(
        decoded,
        vec![
            (b":method".to_vec(), b"GET".to_vec()),
            (b":scheme".to_vec(), b"http".to_vec()),
            (b":path".to_vec(), b"/".to_vec()),
            (b":authority".to_vec(), b"www.example.com".to_vec()),
            (b"cache-control".to_vec(), b"no-cache".to_vec()),
        ]
    );
    assert_eq!(table.dynamic_len(), 2);
    assert_eq!(table.dynamic_size(), 110);

    let third =
        hex::decode("828785bf400a637573746f6d2d6b65790c637573746f6d2d76616c7565").unwrap();
    let decoded = decoder.decode(&third, &mut table, &settings).unwrap();
    assert_eq!(
        decoded,
        vec![
            (b":method".to_vec(), b"GET".to_vec()),
            (b":scheme".to_vec(), b"https".to_vec()),
            (b":path".to_vec(), b"/index.html".to_vec()),
            (b":authority".to_vec(), b"www.example.com".to_vec()),
            (b"custom-key".to_vec(), b"custom-value".to_vec()),
        ]
    );
    assert_eq!(table.dynamic_len(), 3);
    assert_eq!(table.dynamic_size(), 164);
}

/// Scenario 3: a header whose name is already in the static table but
/// whose value is new is encoded as a name-indexed literal, and the
/// resulting entry lands at the front of the dynamic table.
#[test]
fn encodes_name_indexed_literal_for_new_value() {
    let mut codec = Codec::new();
    let headers = vec![(b":authority".to_vec(), b"example.com".to_vec())];
    let bytes = codec.compress(&headers).unwrap();
    assert_eq!(bytes[0], 0b0100_0001); // name index 1, with incremental indexing
    assert_eq!(codec.decompress(&bytes).unwrap(), headers);
}

/// Scenario 4: eviction on insertion keeps only what fits. Observed
/// black-box: once an entry is evicted, re-sending it can no longer be
/// encoded as an Indexed reference; it has to be spelled out again.
#[test]
fn evicts_oldest_entry_to_make_room() {
    let mut codec = Codec::new();
    codec.notify_settings(64).unwrap(); // room for exactly one 41-byte entry

    let first = vec![(b"aaaaaaaa".to_vec(), b"1".to_vec())]; // size 8+1+32=41
    let bytes = codec.compress(&first).unwrap();
    // bytes[0..2] is the queued size-update directive for 64 (0x3F, 0x21);
    // the literal representation starts right after it.
    assert_eq!(bytes[2] & 0xF0, 0x40); // new entry, literal with indexing

    let second = vec![(b"bbbbbbbb".to_vec(), b"2".to_vec())]; // evicts "aaaaaaaa"
    codec.compress(&second).unwrap();

    let repeats_first = codec.compress(&first).unwrap();
    assert_eq!(repeats_first[0] & 0xF0, 0x40); // evicted: literal again, not Indexed
}

/// P1: round-trip for a realistic request-like header list, with several
/// entries repeating across two blocks so the dynamic table is exercised.
#[test]
fn round_trips_across_multiple_blocks() {
    let mut codec = Codec::new();

    let first = vec![
        (b":method".to_vec(), b"GET".to_vec()),
        (b":scheme".to_vec(), b"https".to_vec()),
        (b":path".to_vec(), b"/".to_vec()),
        (b":authority".to_vec(), b"www.example.com".to_vec()),
    ];
    let bytes = codec.compress(&first).unwrap();
    assert_eq!(codec.decompress(&bytes).unwrap(), first);

    let second = vec![
        (b":method".to_vec(), b"GET".to_vec()),
        (b":scheme".to_vec(), b"https".to_vec()),
        (b":path".to_vec(), b"/".to_vec()),
        (b":authority".to_vec(), b"www.example.com".to_vec()),
        (b"cache-control".to_vec(), b"no-cache".to_vec()),
    ];
    let bytes = codec.compress(&second).unwrap();
    assert_eq!(codec.decompress(&bytes).unwrap(), second);
}

/// P5: an entry larger than the capacity empties the table instead of
/// being inserted, so re-sending it never becomes an Indexed reference.
#[test]
fn oversized_entry_is_rejected_not_inserted() {
    let mut codec = Codec::new();
    codec.notify_settings(16).unwrap();

    let header = vec![(b"this-name-is-too-big".to_vec(), b"value".to_vec())]; // way over 16
    let first = codec.compress(&header).unwrap();
    // first[0] is the queued size-update directive for 16 (single octet,
    // 16 fits the 5-bit prefix); the literal representation starts after it.
    assert_eq!(first[1] & 0xF0, 0x40);

    let second = codec.compress(&header).unwrap();
    assert_eq!(second[0] & 0xF0, 0x40); // still literal: never got inserted
}

/// P6 / scenario 5: settings changes queued before a compress call are
/// emitted, in order, and the dynamic table capacity reflects the latest.
#[test]
fn settings_changes_drive_size_update_sequence() {
    let mut codec = Codec::new();
    codec.notify_settings(100).unwrap();
    codec.notify_settings(200).unwrap();

    let bytes = codec.compress(&[]).unwrap();

    let mut table = Table::default();
    let decoder = Decoder::new();
    let mut settings = Settings::default();
    settings.notify(200).unwrap();
    decoder.decode(&bytes[..2], &mut table, &settings).unwrap();
    assert_eq!(table.max_dynamic_size(), 100);
    decoder.decode(&bytes[2..], &mut table, &settings).unwrap();
    assert_eq!(table.max_dynamic_size(), 200);
}

/// P7: a size-update found after a non-size-update representation in the
/// same block must be rejected.
#[test]
fn rejects_mid_block_size_update() {
    let decoder = Decoder::new();
    let mut table = Table::default();
    let mut block = vec![0x82]; // Indexed(:method, GET)
    block.push(0b0010_0000 | 10); // size-update(10), illegal here
    assert_eq!(
        decoder.decode(&block, &mut table, &Settings::default()),
        Err(DecoderError::InvalidSizeUpdate)
    );
}

/// Scenario 6: multiple decoded `cookie` headers are coalesced into one,
/// moved to the tail, joined with `"; "` and no trailing delimiter.
#[test]
fn cookie_reassembly_runs_on_decompress() {
    let mut codec = Codec::new();
    let input = vec![
        (b"cookie".to_vec(), b"a=1".to_vec()),
        (b":path".to_vec(), b"/".to_vec()),
        (b"cookie".to_vec(), b"b=2".to_vec()),
    ];
    let bytes = codec.compress(&input).unwrap();
    let decoded = codec.decompress(&bytes).unwrap();
    assert_eq!(
        decoded,
        vec![
            (b":path".to_vec(), b"/".to_vec()),
            (b"cookie".to_vec(), b"a=1; b=2".to_vec()),
        ]
    );
}

/// A `SETTINGS_HEADER_TABLE_SIZE` bound rejects an out-of-range
/// size-update even when it is correctly placed at the start of a block.
#[test]
fn rejects_size_update_exceeding_settings_bound() {
    let decoder = Decoder::new();
    let mut table = Table::default();
    let mut settings = Settings::default();
    settings.notify(20).unwrap();
    let block = [0b0010_0000 | 25]; // 25 > agreed bound of 20
    assert_eq!(
        decoder.decode(&block, &mut table, &settings),
        Err(DecoderError::InvalidSizeUpdate)
    );
}
