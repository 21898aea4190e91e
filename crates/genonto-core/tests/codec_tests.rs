//! Tests for the line-oriented codec: both directions, the coercion
//! heuristics on the decode side, the documented lossy cases, file helpers,
//! and separator failure modes.

use std::collections::BTreeSet;

use genonto_core::{
    decode_mapping, decode_sequence, encode_mapping, encode_sequence, read_mapping, read_sequence,
    write_mapping, write_sequence, Entry, GenontoError, Mapping, Token, Value,
};

fn tokens(items: &[&str]) -> Vec<Token> {
    items.iter().map(|s| Token::from(*s)).collect()
}

// ============================================================================
// 1. Encoding sequences
// ============================================================================

#[test]
fn encode_rows_one_bracketed_line_each() {
    let xs = vec![
        Entry::Row(tokens(&["TP53", "c.524G>A"])),
        Entry::Row(tokens(&["KRAS", "c.35G>T"])),
    ];
    assert_eq!(
        encode_sequence(&xs),
        "['TP53', 'c.524G>A']\n['KRAS', 'c.35G>T']\n"
    );
}

#[test]
fn encode_scalar_entries_bare() {
    let xs = vec![
        Entry::Token(Token::from("TP53")),
        Entry::Token(Token::Int(42)),
    ];
    assert_eq!(encode_sequence(&xs), "TP53\n42\n");
}

#[test]
fn encode_integers_unquoted_inside_rows() {
    let xs = vec![Entry::Row(vec![Token::Int(0), Token::from("IMPACT")])];
    assert_eq!(encode_sequence(&xs), "[0, 'IMPACT']\n");
}

#[test]
fn encode_empty_sequence_is_empty_text() {
    assert_eq!(encode_sequence(&[]), "");
}

// ============================================================================
// 2. Encoding mappings
// ============================================================================

#[test]
fn encode_mapping_scalar_list_and_set_values() {
    let mut map = Mapping::new();
    map.insert("g1".to_string(), Value::List(vec![Token::Int(1), Token::Int(2)]));
    map.insert("g2".to_string(), Value::Scalar(Token::from("text")));
    map.insert(
        "g3".to_string(),
        Value::Set(BTreeSet::from([Token::from("GO:0002"), Token::from("GO:0001")])),
    );

    assert_eq!(
        encode_mapping(&map),
        "g1: [1, 2]\ng2: text\ng3: {'GO:0001', 'GO:0002'}\n"
    );
}

#[test]
fn encode_mapping_preserves_insertion_order() {
    let mut map = Mapping::new();
    map.insert("zeta".to_string(), Value::Scalar(Token::Int(1)));
    map.insert("alpha".to_string(), Value::Scalar(Token::Int(2)));
    assert_eq!(encode_mapping(&map), "zeta: 1\nalpha: 2\n");
}

#[test]
fn encode_empty_collections() {
    let mut map = Mapping::new();
    map.insert("a".to_string(), Value::List(vec![]));
    map.insert("b".to_string(), Value::Set(BTreeSet::new()));
    assert_eq!(encode_mapping(&map), "a: []\nb: {}\n");
}

// ============================================================================
// 3. Decoding sequences
// ============================================================================

#[test]
fn decode_bracketed_line_to_row() {
    let xs = decode_sequence("['TP53', 'c.524G>A']\n", false);
    assert_eq!(xs, vec![Entry::Row(tokens(&["TP53", "c.524G>A"]))]);
}

#[test]
fn decode_braced_line_indistinguishable_from_bracketed() {
    let from_set = decode_sequence("{'GO:0001', 'GO:0002'}\n", false);
    let from_list = decode_sequence("['GO:0001', 'GO:0002']\n", false);
    assert_eq!(from_set, from_list);
}

#[test]
fn decode_coerces_integer_tokens() {
    let xs = decode_sequence("[0, 34, 'HGVSp']\n", false);
    assert_eq!(
        xs,
        vec![Entry::Row(vec![
            Token::Int(0),
            Token::Int(34),
            Token::from("HGVSp"),
        ])]
    );
}

#[test]
fn decode_plain_line_is_a_one_field_row() {
    let xs = decode_sequence("TP53\n", false);
    assert_eq!(xs, vec![Entry::Row(tokens(&["TP53"]))]);
}

#[test]
fn decode_flatten_extends_all_lines_into_tokens() {
    let xs = decode_sequence("['GO:0001', 'GO:0002']\n['GO:0003']\n", true);
    assert_eq!(
        xs,
        vec![
            Entry::Token(Token::from("GO:0001")),
            Entry::Token(Token::from("GO:0002")),
            Entry::Token(Token::from("GO:0003")),
        ]
    );
}

#[test]
fn decode_empty_text_is_empty_sequence() {
    assert!(decode_sequence("", false).is_empty());
}

// ============================================================================
// 4. Decoding mappings
// ============================================================================

#[test]
fn decode_mapping_scalar_and_list_values() {
    let map = decode_mapping("g1: [1, 2]\ng2: text\ng3: 7\n").unwrap();
    assert_eq!(
        map.get("g1"),
        Some(&Value::List(vec![Token::Int(1), Token::Int(2)]))
    );
    assert_eq!(map.get("g2"), Some(&Value::Scalar(Token::from("text"))));
    assert_eq!(map.get("g3"), Some(&Value::Scalar(Token::Int(7))));
}

#[test]
fn decode_mapping_preserves_line_order() {
    let map = decode_mapping("zeta: 1\nalpha: 2\n").unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
}

#[test]
fn decode_mapping_braced_value_becomes_a_list() {
    let map = decode_mapping("TP53: {'GO:0001', 'GO:0002'}\n").unwrap();
    assert_eq!(
        map.get("TP53"),
        Some(&Value::List(tokens(&["GO:0001", "GO:0002"])))
    );
}

#[test]
fn decode_mapping_missing_separator_fails_with_line_number() {
    let err = decode_mapping("good: 1\nbroken\n").unwrap_err();
    match err {
        GenontoError::Format { line, .. } => assert_eq!(line, 2),
        other => panic!("expected Format error, got {:?}", other),
    }
}

#[test]
fn decode_mapping_extra_separator_fails() {
    // A key or value containing ": " breaks the line apart; the decoder
    // refuses rather than guessing which split was intended.
    let err = decode_mapping("key: with: colon\n").unwrap_err();
    match err {
        GenontoError::Format { line, message } => {
            assert_eq!(line, 1);
            assert!(message.contains("separator"));
        }
        other => panic!("expected Format error, got {:?}", other),
    }
}

// ============================================================================
// 5. Round trips and documented lossiness
// ============================================================================

#[test]
fn mapping_roundtrips_up_to_integer_coercion() {
    let mut map = Mapping::new();
    map.insert("g1".to_string(), Value::List(vec![Token::Int(1), Token::Int(2)]));
    map.insert("g2".to_string(), Value::Scalar(Token::from("text")));

    let back = decode_mapping(&encode_mapping(&map)).unwrap();
    assert_eq!(back, map);
}

#[test]
fn numeric_text_gains_int_type_after_roundtrip() {
    let mut map = Mapping::new();
    map.insert("pos".to_string(), Value::Scalar(Token::from("93")));

    let back = decode_mapping(&encode_mapping(&map)).unwrap();
    assert_eq!(back.get("pos"), Some(&Value::Scalar(Token::Int(93))));
}

#[test]
fn set_values_come_back_as_lists() {
    let mut map = Mapping::new();
    map.insert(
        "TP53".to_string(),
        Value::Set(BTreeSet::from([Token::from("GO:0001")])),
    );

    let back = decode_mapping(&encode_mapping(&map)).unwrap();
    assert_eq!(back.get("TP53"), Some(&Value::List(tokens(&["GO:0001"]))));
}

#[test]
fn empty_list_comes_back_as_one_empty_token() {
    let mut map = Mapping::new();
    map.insert("a".to_string(), Value::List(vec![]));

    let back = decode_mapping(&encode_mapping(&map)).unwrap();
    assert_eq!(back.get("a"), Some(&Value::List(vec![Token::from("")])));
}

#[test]
fn sequence_of_rows_roundtrips() {
    let xs = vec![
        Entry::Row(tokens(&["TP53", "HIGH"])),
        Entry::Row(tokens(&["KRAS", "LOW"])),
    ];
    assert_eq!(decode_sequence(&encode_sequence(&xs), false), xs);
}

// ============================================================================
// 6. File helpers
// ============================================================================

#[test]
fn sequence_survives_a_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("samples.txt");

    let xs = vec![Entry::Row(tokens(&["TP53", "c.524G>A", "HIGH"]))];
    write_sequence(&path, &xs).unwrap();
    assert_eq!(read_sequence(&path, false).unwrap(), xs);
}

#[test]
fn mapping_survives_a_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("genes.txt");

    let mut map = Mapping::new();
    map.insert("g1".to_string(), Value::List(tokens(&["GO:0001"])));
    write_mapping(&path, &map).unwrap();
    assert_eq!(read_mapping(&path).unwrap(), map);
}

#[test]
fn reading_a_missing_file_is_an_io_error() {
    let err = read_mapping("/no/such/file.txt").unwrap_err();
    assert!(matches!(err, GenontoError::Io(_)));
}
