//! Seed derivation.
//!
//! Each block of the sample axis gets its own generator. Its seed is the
//! SplitMix64 finaliser applied to the base seed mixed with the block index,
//! which keeps neighbouring blocks decorrelated while staying a pure function
//! of `(base_seed, block)`.

/// SplitMix64 finaliser.
#[inline]
pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Seed of the generator for sample block `block` under `base_seed`.
#[inline]
pub fn derive_block_seed(base_seed: u64, block: usize) -> u64 {
    splitmix64(base_seed ^ splitmix64(block as u64))
}

/// Fresh base seed from the thread-local entropy source.
pub fn entropy_seed() -> u64 {
    rand::random()
}
