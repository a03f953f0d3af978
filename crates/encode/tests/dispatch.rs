//! Tests for the scheme dispatch entry points.

use bintext_encode::{
    decode_to_bin, decode_to_bin_size, decode_to_bin_valid, decode_to_bin_validate, decode_to_vec,
    encode_to_str, encode_to_str_size, encode_to_string, EncodeError, EncodeType, FormatError,
    InvalidEncodeType,
};
use proptest::prelude::*;
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn size_then_write() {
    for _ in 0..100 {
        let blob = generate_blob();
        let size = encode_to_str_size(EncodeType::Base64, blob.len());
        let mut text = vec![0xffu8; size + 1];
        let length = encode_to_str(EncodeType::Base64, &blob, &mut text);
        assert_eq!(length, size);
        assert_eq!(text[length], 0);

        let encoded = std::str::from_utf8(&text[..length]).unwrap();
        let decoded_size = decode_to_bin_size(EncodeType::Base64, encoded).unwrap();
        assert_eq!(decoded_size, blob.len());

        let mut bin = vec![0u8; decoded_size];
        let written = decode_to_bin(EncodeType::Base64, encoded, &mut bin).unwrap();
        assert_eq!(written, blob.len());
        assert_eq!(bin, blob);
    }
}

#[test]
fn owned_round_trip() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode_to_string(EncodeType::Base64, &blob);
        assert_eq!(decode_to_vec(EncodeType::Base64, &encoded).unwrap(), blob);
    }
}

#[test]
fn vectors() {
    assert_eq!(encode_to_string(EncodeType::Base64, &[]), "");
    assert_eq!(encode_to_string(EncodeType::Base64, &[0x4d]), "TQ==");
    assert_eq!(encode_to_string(EncodeType::Base64, &[0x4d, 0x61]), "TWE=");
    assert_eq!(
        encode_to_string(EncodeType::Base64, &[0x4d, 0x61, 0x6e]),
        "TWFu"
    );
    assert_eq!(
        decode_to_vec(EncodeType::Base64, "TWFu").unwrap(),
        [0x4d, 0x61, 0x6e]
    );
    for (size, expected) in [(0, 0), (1, 4), (3, 4), (4, 8)] {
        assert_eq!(encode_to_str_size(EncodeType::Base64, size), expected);
    }
}

#[test]
fn malformed_input_is_a_format_error() {
    let cases = [
        ("QQ=", FormatError::SizeNotMultipleOfFour { size: 3 }),
        ("QQ", FormatError::SizeNotMultipleOfFour { size: 2 }),
        ("Q=QQ", FormatError::PadNotAtEnd),
        ("QQ=Q", FormatError::PadIncomplete),
        ("QQ Q", FormatError::InvalidCharacter { position: 2 }),
    ];

    for (input, expected) in cases {
        let expected = Err(EncodeError::Format(expected));
        assert_eq!(decode_to_bin_validate(EncodeType::Base64, input), expected);
        assert_eq!(
            decode_to_bin_size(EncodeType::Base64, input).map(|_| ()),
            expected
        );
        let mut dest = [0u8; 8];
        assert_eq!(
            decode_to_bin(EncodeType::Base64, input, &mut dest).map(|_| ()),
            expected
        );
        assert_eq!(decode_to_vec(EncodeType::Base64, input).map(|_| ()), expected);
        assert_eq!(decode_to_bin_valid(EncodeType::Base64, input), Ok(false));
    }
}

#[test]
fn unknown_raw_identifier_is_not_a_format_error() {
    assert_eq!(EncodeType::try_from(1), Err(InvalidEncodeType(1)));
    let result = std::panic::catch_unwind(|| {
        let encode_type = EncodeType::from_raw(42);
        decode_to_bin_valid(encode_type, "!!!!")
    });
    let payload = result.unwrap_err();
    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .unwrap_or_default();
    assert_eq!(message, "invalid encode type 42");
}

proptest! {
    #[test]
    fn valid_matches_validate(text in "[-A-Za-z0-9+/= _]{0,12}") {
        let valid = decode_to_bin_valid(EncodeType::Base64, &text).unwrap();
        let validate = decode_to_bin_validate(EncodeType::Base64, &text);
        prop_assert_eq!(valid, validate.is_ok());
    }

    #[test]
    fn sizes_match_output(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = encode_to_string(EncodeType::Base64, &data);
        prop_assert_eq!(encoded.len(), encode_to_str_size(EncodeType::Base64, data.len()));
        prop_assert_eq!(decode_to_bin_size(EncodeType::Base64, &encoded).unwrap(), data.len());
    }
}
