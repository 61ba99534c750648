//! Randomized Burst Scenarios
//!
//! Encode a fixed message, overwrite a short burst at a random offset and
//! decode. Seeded so failures reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rsecc::galois::{GaloisField, GF16_GENERATOR, GF256_GENERATOR};
use rsecc::reed_solomon::{decode, Encoder};
use std::sync::Arc;

const VERSE: &str = "Or, if there were a sympathy in choice, \n\
War, death, or sickness did lay siege to it, \n\
Making it momentary as a sound, \n\
Swift as a shadow, short as any dream, \n\
Brief as the lightning in the collied night;";

/// First byte of each space separated word, padded with spaces.
fn verse_message(length: usize) -> Vec<u16> {
    let mut message: Vec<u16> = VERSE
        .split(' ')
        .filter_map(|word| word.bytes().next())
        .map(u16::from)
        .collect();
    message.resize(length, 0x20);
    message
}

fn run_bursts(field: Arc<GaloisField>, ecc: usize, data: &[u16], trials: usize, seed: u64) {
    let encoder = Encoder::new(field.clone(), ecc).unwrap();
    let codeword = encoder.encode(data).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);

    for trial in 0..trials {
        let mut received = codeword.clone();
        let offset = rng.random_range(0..12);
        for symbol in &mut received[offset..offset + 3] {
            *symbol = rng.random_range(0..15);
        }

        let result = decode(&field, &mut received, ecc);
        assert!(result.is_ok(), "trial {}: {:?}", trial, result);
        assert_eq!(&received[..data.len()], data, "trial {}", trial);
    }
}

#[test]
fn test_rs_255_223_verse_bursts() {
    let _ = env_logger::builder().is_test(true).try_init();
    let field = Arc::new(GaloisField::new(256, GF256_GENERATOR, 1).unwrap());
    let data = verse_message(223);
    assert_eq!(&data[..4], &[b'O' as u16, b'i' as u16, b't' as u16, b'w' as u16]);

    run_bursts(field, 32, &data, 1000, 0x5eed);
}

#[test]
fn test_rs_15_7_bursts() {
    let field = Arc::new(GaloisField::new(16, GF16_GENERATOR, 1).unwrap());
    run_bursts(field, 8, &[4, 7, 2, 0, 3, 2, 3], 10_000, 0xc0de);
}
