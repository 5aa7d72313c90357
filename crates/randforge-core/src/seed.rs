//! Seed hashing.
//!
//! Arbitrary seed bytes are expanded into as many state words as an engine
//! needs. Block `i` of the expansion is `SHA-256(u32_le(i) || seed)`; each
//! digest is read as little-endian words. The expansion is identical on
//! every platform, so a string seed always reproduces the same stream.

use sha2::digest::Output;
use sha2::{Digest, Sha256};

fn block_digest(seed: &[u8], block_index: u32) -> Output<Sha256> {
    Sha256::new()
        .chain_update(block_index.to_le_bytes())
        .chain_update(seed)
        .finalize()
}

/// Fills `words` with 64-bit words derived from `seed`.
pub fn fill_u64(seed: &[u8], words: &mut [u64]) {
    for (chunk, block_index) in words.chunks_mut(4).zip(0_u32..) {
        let digest = block_digest(seed, block_index);
        for (word, bytes) in chunk.iter_mut().zip(digest.chunks_exact(8)) {
            let mut buf = [0_u8; 8];
            buf.copy_from_slice(bytes);
            *word = u64::from_le_bytes(buf);
        }
    }
}

/// Fills `words` with 32-bit words derived from `seed`.
pub fn fill_u32(seed: &[u8], words: &mut [u32]) {
    for (chunk, block_index) in words.chunks_mut(8).zip(0_u32..) {
        let digest = block_digest(seed, block_index);
        for (word, bytes) in chunk.iter_mut().zip(digest.chunks_exact(4)) {
            let mut buf = [0_u8; 4];
            buf.copy_from_slice(bytes);
            *word = u32::from_le_bytes(buf);
        }
    }
}

/// Returns `N` 64-bit words derived from `seed`.
#[must_use]
pub fn words_u64<const N: usize>(seed: &[u8]) -> [u64; N] {
    let mut words = [0_u64; N];
    fill_u64(seed, &mut words);
    words
}

/// Returns `N` 32-bit words derived from `seed`.
#[must_use]
pub fn words_u32<const N: usize>(seed: &[u8]) -> [u32; N] {
    let mut words = [0_u32; N];
    fill_u32(seed, &mut words);
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_u64_match_reference_expansion() {
        let words: [u64; 6] = words_u64(b"randforge");

        assert_eq!(
            words,
            [
                0x38f6_9081_41b6_3627,
                0xce67_419e_dbb5_8519,
                0x88cf_68da_6c77_7b81,
                0x9920_76ab_17d1_db21,
                // second block
                0x6416_a4e9_d193_7563,
                0x695d_7642_8aac_16c1,
            ]
        );
    }

    #[test]
    fn test_words_u32_are_halves_of_u64_words() {
        let words: [u32; 4] = words_u32(b"randforge");

        assert_eq!(words, [0x41b6_3627, 0x38f6_9081, 0xdbb5_8519, 0xce67_419e]);
    }

    #[test]
    fn test_empty_seed_is_still_hashed() {
        let words: [u64; 1] = words_u64(b"");

        assert_eq!(words, [0xdb2f_a904_9861_3fdf]);
    }

    #[test]
    fn test_different_seeds_produce_different_words() {
        let a: [u64; 2] = words_u64(b"alpha");
        let b: [u64; 2] = words_u64(b"beta");

        assert_ne!(a, b);
    }
}
