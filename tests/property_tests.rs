use huffzip::compress::{create_code_tree, create_container};
use huffzip::freq::create_freq_table;
use huffzip::tree::create_code_table;
use huffzip::{compress, decompress, Error};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_round_trip(input in prop::collection::vec(any::<u8>(), 0..2000)) {
        let compressed = compress(&input).expect("Expected codec to succeed");
        let output = decompress(&compressed).expect("Expected codec to succeed");
        prop_assert_eq!(output, input);
    }

    #[test]
    fn test_round_trip_small_alphabet(input in prop::collection::vec(0..4u8, 0..500)) {
        let compressed = compress(&input).expect("Expected codec to succeed");
        prop_assert_eq!(decompress(&compressed).expect("Expected codec to succeed"), input);
    }

    #[test]
    fn test_codes_prefix_free(input in prop::collection::vec(any::<u8>(), 2..1000)) {
        let tree = create_code_tree(&create_freq_table(&input)).expect("Expected codec to succeed");
        let code_table = create_code_table(&tree);
        let codes: Vec<_> = code_table.iter().collect();
        for a in &codes {
            prop_assert!(a.bit_len > 0);
            for b in &codes {
                if a.plain_symbol != b.plain_symbol {
                    prop_assert!(!a.is_prefix_of(b));
                }
            }
        }
    }

    #[test]
    fn test_node_count_matches_alphabet(input in prop::collection::vec(any::<u8>(), 1..1000)) {
        let container = create_container(&input).expect("Expected codec to succeed");
        let distinct = create_freq_table(&input).len();
        prop_assert_eq!(container.node_count(), distinct - 1);
        prop_assert_eq!(container.original_len as usize, input.len());
    }

    #[test]
    fn test_truncated_payload_is_corrupt(input in prop::collection::vec(any::<u8>(), 1..1000)) {
        let compressed = compress(&input).expect("Expected codec to succeed");
        let truncated = &compressed[..compressed.len() - 1];
        let is_corrupt = matches!(decompress(truncated), Err(Error::CorruptStream { .. }));
        prop_assert!(is_corrupt);
    }
}
