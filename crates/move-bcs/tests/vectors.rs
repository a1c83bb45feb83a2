//! Known-answer vectors for the canonical encoding.

use move_bcs::well_known::{lbr_type_tag, LBR_IDENTIFIER};
use move_bcs::{
    deserialize, deserialize_with_options, serialize, Address, DecodeError, DecodeOptions,
    ErrorKind, Script, ScriptBuilder, StructTagBuilder, TransactionArgument, TypeTag,
};

const LBR_TYPE_TAG_BYTES: [u8; 26] = [
    7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 3, 76, 66, 82, 3, 76, 66, 82, 0,
];

fn lbr_script() -> Script {
    Script::new(
        Vec::new(),
        vec![lbr_type_tag()],
        vec![
            TransactionArgument::U8Vector(Vec::new()),
            TransactionArgument::U64(1234567),
            TransactionArgument::U8Vector(Vec::new()),
        ],
    )
}

fn lbr_script_bytes() -> Vec<u8> {
    let mut bytes = vec![0, 1];
    bytes.extend_from_slice(&LBR_TYPE_TAG_BYTES);
    bytes.extend_from_slice(&[3, 4, 0, 1, 135, 214, 18, 0, 0, 0, 0, 0, 4, 0]);
    bytes
}

#[test]
fn lbr_transfer_script() {
    let script = lbr_script();
    let bytes = serialize(&script);
    assert_eq!(bytes, lbr_script_bytes());
    assert_eq!(deserialize::<Script>(&bytes).unwrap(), script);
}

#[test]
fn builder_matches_direct_construction() {
    let lbr = StructTagBuilder::new()
        .address(Address::ONE)
        .module(LBR_IDENTIFIER.clone())
        .name(LBR_IDENTIFIER.clone())
        .build()
        .unwrap();
    let script = ScriptBuilder::new()
        .code(Vec::new())
        .ty_arg(lbr.into())
        .args([
            TransactionArgument::U8Vector(Vec::new()),
            TransactionArgument::U64(1234567),
            TransactionArgument::U8Vector(Vec::new()),
        ])
        .build()
        .unwrap();
    assert_eq!(script, lbr_script());
    assert_eq!(serialize(&script), lbr_script_bytes());
}

#[test]
fn vector_of_lbr() {
    let tag = TypeTag::vector(lbr_type_tag());
    let mut expected = vec![6];
    expected.extend_from_slice(&LBR_TYPE_TAG_BYTES);
    assert_eq!(serialize(&tag), expected);
    assert_eq!(deserialize::<TypeTag>(&expected).unwrap(), tag);
}

#[test]
fn padded_length_rejected() {
    // Code length 0 written as two bytes.
    let mut bytes = vec![0x80, 0x00];
    bytes.extend_from_slice(&lbr_script_bytes()[1..]);
    let err = deserialize::<Script>(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NonCanonicalEncoding);
}

#[test]
fn appended_byte_rejected() {
    let mut bytes = lbr_script_bytes();
    bytes.push(0);
    assert_eq!(
        deserialize::<Script>(&bytes),
        Err(DecodeError::TrailingBytes { remaining: 1 })
    );
}

#[test]
fn every_truncation_rejected() {
    let bytes = lbr_script_bytes();
    for len in 0..bytes.len() {
        assert!(
            deserialize::<Script>(&bytes[..len]).is_err(),
            "prefix of length {len} accepted"
        );
    }
}

#[test]
fn address_length_is_exact() {
    assert_eq!(
        deserialize::<Address>(&[0u8; 15]).unwrap_err().kind(),
        ErrorKind::InvalidLength
    );
    assert_eq!(
        deserialize::<Address>(&[0u8; 17]),
        Err(DecodeError::TrailingBytes { remaining: 1 })
    );
    assert_eq!(deserialize::<Address>(&[0u8; 16]).unwrap(), Address::ZERO);
}

#[test]
fn unknown_type_tag_variant() {
    assert_eq!(
        deserialize::<TypeTag>(&[8]).unwrap_err().kind(),
        ErrorKind::UnknownVariant
    );
    assert_eq!(
        deserialize::<TransactionArgument>(&[6]).unwrap_err().kind(),
        ErrorKind::UnknownVariant
    );
}

#[test]
fn deep_nesting_bounded() {
    let mut bytes = vec![6u8; 10_000];
    bytes.push(0);
    assert_eq!(
        deserialize::<TypeTag>(&bytes).unwrap_err().kind(),
        ErrorKind::RecursionLimitExceeded
    );

    let options = DecodeOptions::strict(4);
    assert!(deserialize_with_options::<TypeTag>(&[6, 6, 6, 0], options).is_ok());
    assert_eq!(
        deserialize_with_options::<TypeTag>(&[6, 6, 6, 6, 0], options)
            .unwrap_err()
            .kind(),
        ErrorKind::RecursionLimitExceeded
    );
}

#[test]
fn huge_declared_length_fails_cleanly() {
    // ty_args claims 2^31-2 elements with nothing behind it.
    let bytes = [0u8, 0xfe, 0xff, 0xff, 0xff, 0x07];
    assert_eq!(
        deserialize::<Script>(&bytes).unwrap_err().kind(),
        ErrorKind::UnexpectedEndOfInput
    );

    // A length just past the sequence limit.
    let bytes = [0x80u8, 0x80, 0x80, 0x80, 0x08];
    assert_eq!(
        deserialize::<Script>(&bytes).unwrap_err().kind(),
        ErrorKind::IntegerOverflow
    );
}
