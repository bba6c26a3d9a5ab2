use pcg::{DecodeError, Pcg64, ENCODED_LEN};
use rand_core::RngCore;

#[test]
fn test_codec_reference() {
    let rng = Pcg64::new(1, 2);
    let expected: [u8; ENCODED_LEN] = [
        112, 99, 103, 58, // "pcg:"
        88, 81, 244, 45, 76, 149, 127, 44, // hi.state, big-endian
        176, 163, 232, 90, 153, 42, 254, 91, // lo.state, big-endian
    ];
    assert_eq!(rng.to_bytes(), expected);

    let mut rng = Pcg64::new(12345, 67890);
    for _ in 0..3 {
        rng.next_u64_mcg();
    }
    let expected: [u8; ENCODED_LEN] = [
        112, 99, 103, 58, 200, 233, 91, 27, 100, 34, 170, 89, 94, 74, 94, 7, 137, 119, 186, 248,
    ];
    assert_eq!(rng.to_bytes(), expected);
}

#[test]
fn test_codec_variants_agree() {
    let mut rng = Pcg64::new_with_streams(42, 54, 18, 27);
    for _ in 0..5 {
        let mut buf = [0u8; ENCODED_LEN];
        rng.encode_into(&mut buf);
        assert_eq!(buf, rng.to_bytes());
        rng.next_u64();
        rng.next_u64_mcg();
    }
}

#[test]
fn test_codec_round_trip() {
    let mut rng = Pcg64::new(12345, 67890);
    for _ in 0..7 {
        rng.next_u64();
    }

    // Decoding into a generator seeded with the same streams restores it
    // completely.
    let mut restored = Pcg64::new(12345, 67890);
    restored.from_bytes(&rng.to_bytes()).unwrap();
    assert_eq!(restored, rng);
    for _ in 0..16 {
        assert_eq!(restored.next_u64(), rng.next_u64());
        assert_eq!(restored.next_u64_mcg(), rng.next_u64_mcg());
    }
}

#[test]
fn test_codec_rejects_bad_input() {
    let reference = Pcg64::new(1, 2);
    let encoded = reference.to_bytes();

    let mut rng = reference.clone();
    for len in &[0usize, 4, 19, 21] {
        let mut bytes = vec![0u8; *len];
        let n = bytes.len().min(encoded.len());
        bytes[..n].copy_from_slice(&encoded[..n]);
        assert_eq!(rng.from_bytes(&bytes), Err(DecodeError));
    }

    let mut bad_magic = encoded;
    bad_magic[0] = b'P';
    assert_eq!(rng.from_bytes(&bad_magic), Err(DecodeError));

    // No partial mutation on any failure path.
    assert_eq!(rng, reference);
}

#[test]
fn test_codec_streams_not_restored() {
    // The format carries only the state words. A generator on different
    // streams decodes to identical bytes yet diverges on the next draw.
    let origin = Pcg64::new(1, 2);
    let mut other = Pcg64::new_with_streams(1, 2, 7, 8);
    other.from_bytes(&origin.to_bytes()).unwrap();

    assert_eq!(other.to_bytes(), origin.to_bytes());
    assert_ne!(other, origin);

    let mut a = origin.clone();
    let mut b = other.clone();
    // Fast-path stepping involves the stream selectors, so the sequences
    // part ways even from equal state words.
    let draws_a: Vec<u64> = (0..4).map(|_| a.next_u64()).collect();
    let draws_b: Vec<u64> = (0..4).map(|_| b.next_u64()).collect();
    assert_ne!(draws_a, draws_b);
}
