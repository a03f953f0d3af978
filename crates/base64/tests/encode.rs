//! Tests for base64 encoding (to_base64, to_base64_bin).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bintext_base64::{encoded_size, to_base64, to_base64_bin};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let result = to_base64(&blob);

        // Verify against known-good encoding using the base64 crate
        let expected = STANDARD.encode(&blob);
        assert_eq!(result, expected, "Failed for blob of length {}", blob.len());
    }
}

#[test]
fn writes_into_caller_buffer() {
    for _ in 0..100 {
        let blob = generate_blob();
        let mut dest = vec![0xffu8; encoded_size(blob.len()) + 1];
        let length = to_base64_bin(&blob, &mut dest);
        assert_eq!(length, encoded_size(blob.len()));
        assert_eq!(dest[length], 0);
        assert_eq!(&dest[..length], STANDARD.encode(&blob).as_bytes());
    }
}

#[test]
fn padding_shape() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base64(&blob);
        let pads = encoded.bytes().rev().take_while(|&b| b == b'=').count();
        let expected = match blob.len() % 3 {
            0 => 0,
            1 => 2,
            _ => 1,
        };
        assert_eq!(pads, expected, "Failed for blob of length {}", blob.len());
    }
}

#[test]
fn empty_input() {
    assert_eq!(to_base64(b""), "");
}

#[test]
fn single_byte() {
    assert_eq!(to_base64(&[0x4d]), "TQ==");
}

#[test]
fn two_bytes() {
    assert_eq!(to_base64(&[0x4d, 0x61]), "TWE=");
}

#[test]
fn three_bytes() {
    assert_eq!(to_base64(&[0x4d, 0x61, 0x6e]), "TWFu");
}

#[test]
fn sizes() {
    assert_eq!(encoded_size(0), 0);
    assert_eq!(encoded_size(1), 4);
    assert_eq!(encoded_size(3), 4);
    assert_eq!(encoded_size(4), 8);
}
