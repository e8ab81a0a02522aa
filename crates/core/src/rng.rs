//! Deterministic RNG and address hashing for map layouts.
//!
//! Both use explicit 32-bit wrapping arithmetic so a given seed produces
//! the same map on every platform.

use rand::Rng;

use solciv_common::constants::SEED_SPACE;

/// Source of layout randomness.
pub trait MapRng {
    /// Next raw 32-bit state.
    fn next_u32(&mut self) -> u32;

    /// Uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }
}

/// Linear congruential generator with the Numerical Recipes constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub const MULTIPLIER: u32 = 1_664_525;
    pub const INCREMENT: u32 = 1_013_904_223;

    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl MapRng for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }
}

/// Polynomial rolling hash `h = h * 31 + unit` over UTF-16 code units,
/// with `i32` overflow.
pub fn hash_address(address: &str) -> i32 {
    address
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Layout seed bound to an address: `|hash| mod 10_000_000`.
/// `|i32::MIN|` is 2^31, not an overflow.
pub fn seed_for_address(address: &str) -> u32 {
    hash_address(address).unsigned_abs() % SEED_SPACE
}

/// Fresh random seed for guest sessions.
pub fn random_seed<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..SEED_SPACE)
}
