//! Encoder / Decoder / Codec Tests
//!
//! Round trips, the correction bound, documented beyond-bound behaviour and
//! the verifying codec wrapper.

use rsecc::galois::GaloisField;
use rsecc::reed_solomon::{decode, Decoded, Encoder, RsError, Uncorrectable};
use rsecc::CodecConfig;
use std::sync::Arc;

const RS_15_7_DATA: [u16; 7] = [4, 7, 2, 0, 3, 2, 3];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rs_15_7_codeword() -> (Arc<GaloisField>, Vec<u16>) {
    let field = Arc::new(GaloisField::gf16());
    let encoder = Encoder::new(field.clone(), 8).unwrap();
    (field.clone(), encoder.encode(&RS_15_7_DATA).unwrap())
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_round_trip_without_corruption() {
    init_logging();
    let field = Arc::new(GaloisField::gf256());
    let encoder = Encoder::new(field.clone(), 32).unwrap();
    let data: Vec<u16> = (0..223).map(|i| (i * 7 % 256) as u16).collect();

    let mut encoded = encoder.encode(&data).unwrap();
    assert_eq!(encoded.len(), 255);
    assert_eq!(decode(&field, &mut encoded, 32), Ok(Decoded::NoErrors));
    assert_eq!(&encoded[..223], &data[..]);
}

#[test]
fn test_encode_does_not_mutate_input() {
    let field = Arc::new(GaloisField::gf16());
    let encoder = Encoder::new(field, 4).unwrap();
    let data = vec![1u16, 2, 3];
    let _ = encoder.encode(&data).unwrap();
    assert_eq!(data, vec![1, 2, 3]);
}

#[test]
fn test_empty_data_encodes_to_zero_parity() {
    let field = Arc::new(GaloisField::gf16());
    let encoder = Encoder::new(field.clone(), 4).unwrap();
    let mut encoded = encoder.encode(&[]).unwrap();
    assert_eq!(encoded, vec![0, 0, 0, 0]);
    assert_eq!(decode(&field, &mut encoded, 4), Ok(Decoded::NoErrors));
}

// ============================================================================
// Correction Bound
// ============================================================================

#[test]
fn test_rs_15_7_corrects_every_single_error() {
    init_logging();
    let (field, original) = rs_15_7_codeword();

    for position in 0..original.len() {
        for delta in 1..16u16 {
            let mut received = original.clone();
            received[position] ^= delta;

            let decoded = decode(&field, &mut received, 8).unwrap();
            assert_eq!(decoded.positions(), vec![position]);
            assert_eq!(received, original, "position {} delta {}", position, delta);
        }
    }
}

#[test]
fn test_rs_15_7_corrects_four_errors() {
    let (field, original) = rs_15_7_codeword();
    let mut received = original.clone();
    for (position, delta) in [(1, 3), (4, 15), (8, 8), (12, 1)] {
        received[position] ^= delta;
    }

    let decoded = decode(&field, &mut received, 8).unwrap();
    assert_eq!(decoded.corrected_count(), 4);
    assert_eq!(received, original);
}

#[test]
fn test_odd_ecc_count_corrects_floor_half() {
    let field = Arc::new(GaloisField::gf256());
    let encoder = Encoder::new(field.clone(), 7).unwrap();
    let original = encoder.encode(&[42; 20]).unwrap();

    let mut received = original.clone();
    received[0] ^= 1;
    received[13] ^= 2;
    received[26] ^= 3;

    assert_eq!(decode(&field, &mut received, 7).unwrap().corrected_count(), 3);
    assert_eq!(received, original);
}

#[test]
fn test_errors_in_parity_only() {
    let (field, original) = rs_15_7_codeword();
    let mut received = original.clone();
    received[13] ^= 5;
    received[14] ^= 6;

    decode(&field, &mut received, 8).unwrap();
    assert_eq!(received, original);
}

// ============================================================================
// Beyond the Bound
// ============================================================================

#[test]
fn test_five_errors_are_detected_as_missing_roots() {
    init_logging();
    let (field, original) = rs_15_7_codeword();
    let mut received = original.clone();
    for symbol in received.iter_mut().take(5) {
        *symbol ^= 1;
    }
    let snapshot = received.clone();

    assert_eq!(
        decode(&field, &mut received, 8),
        Err(RsError::Uncorrectable(Uncorrectable::MissingRoots {
            located: 0,
            expected: 4
        }))
    );
    assert_eq!(received, snapshot);
}

#[test]
fn test_five_errors_can_miscorrect() {
    // Known pattern that lands within distance 4 of a different codeword:
    // decoding "succeeds" and even the verifying codec cannot tell.
    let (field, original) = rs_15_7_codeword();
    let mut received = original.clone();
    for (position, delta) in [(1, 14), (3, 9), (4, 9), (11, 9), (13, 7)] {
        received[position] ^= delta;
    }

    let codec = CodecConfig::rs_15_7().build().unwrap();
    let mut via_codec = received.clone();
    assert!(codec.decode(&mut via_codec).is_ok());

    let decoded = decode(&field, &mut received, 8).unwrap();
    let mut positions = decoded.positions();
    positions.sort_unstable();
    assert_eq!(positions, vec![2, 5, 8, 9]);
    assert_eq!(received, vec![4, 9, 5, 9, 10, 10, 3, 6, 8, 15, 6, 5, 11, 3, 1]);
    assert_ne!(&received[..7], &RS_15_7_DATA);
    assert_eq!(via_codec, received);
}

// ============================================================================
// Codec Wrapper
// ============================================================================

#[test]
fn test_codec_round_trip_rs_255_223() {
    let codec = CodecConfig::default().build().unwrap();
    let data: Vec<u16> = b"The quick brown fox jumps over the lazy dog"
        .iter()
        .map(|&b| b as u16)
        .collect();

    let mut encoded = codec.encode(&data).unwrap();
    for i in 0..16 {
        encoded[i * 3] ^= 0x5a;
    }

    let decoded = codec.decode(&mut encoded).unwrap();
    assert_eq!(decoded.corrected_count(), 16);
    assert_eq!(&encoded[..data.len()], &data[..]);
}

#[test]
fn test_codec_failure_leaves_buffer_untouched() {
    let codec = CodecConfig::rs_15_7().build().unwrap();
    let mut received = codec.encode(&RS_15_7_DATA).unwrap();
    for symbol in received.iter_mut().take(5) {
        *symbol ^= 1;
    }
    let snapshot = received.clone();

    assert!(matches!(
        codec.decode(&mut received),
        Err(RsError::Uncorrectable(_))
    ));
    assert_eq!(received, snapshot);
}

#[test]
fn test_codec_rejects_evaluator_not_below_locator() {
    init_logging();
    let received = vec![5u16, 11, 2, 7, 3, 8, 4, 9, 13, 12, 10, 7, 13, 8, 2];

    for verify in [true, false] {
        let codec = CodecConfig::rs_15_7()
            .with_ecc_symbols(6)
            .with_verify(verify)
            .build()
            .unwrap();
        let mut buffer = received.clone();

        assert_eq!(
            codec.decode(&mut buffer),
            Err(RsError::Uncorrectable(Uncorrectable::EvaluatorDegree {
                evaluator: 2,
                locator: 2
            }))
        );
        assert_eq!(buffer, received);
        assert!(!codec.syndromes_clean(&buffer).unwrap());
    }
}

#[test]
fn test_codec_without_verification_matches_decode() {
    let codec = CodecConfig::rs_15_7().with_verify(false).build().unwrap();
    let (field, original) = rs_15_7_codeword();
    let mut a = original.clone();
    a[6] ^= 2;
    let mut b = a.clone();

    assert_eq!(codec.decode(&mut a), decode(&field, &mut b, 8));
    assert_eq!(a, original);
}

#[test]
fn test_codec_parameter_errors() {
    assert!(matches!(
        CodecConfig::rs_15_7().with_ecc_symbols(15).build(),
        Err(RsError::InvalidEccCount { ecc_count: 15, max: 14 })
    ));

    let codec = CodecConfig::rs_15_7().build().unwrap();
    assert!(matches!(
        codec.encode(&[0; 8]),
        Err(RsError::CodewordTooLong { length: 16, max: 15 })
    ));
    assert!(matches!(
        codec.decode_to_vec(&[0; 5]),
        Err(RsError::BufferTooShort { length: 5, ecc_count: 8 })
    ));
}
