use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

// This module contains the generator itself: a linear congruential
// recurrence with a configurable internal modulus.

/// Linear congruential generator state.
/// Iteration is state <- (state * multiplier + increment) mod modulus,
/// with the multiply-add wrapping at 64 bits before the reduction.
/// The wraparound is part of the generator's defined behavior: two
/// implementations agree bit for bit only if both wrap at 2^64.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Lcg {
    /// Most recent recurrence value.
    last: u64,
    /// Additive constant of the recurrence.
    increment: u64,
    /// Multiplier of the recurrence.
    multiplier: u64,
    /// Internal modulus applied to every state transition. Never 0.
    modulus: u64,
}

// As recommended, this Debug implementation does not expose internal state.
impl core::fmt::Debug for Lcg {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Lcg {{}}")
    }
}

impl Lcg {
    /// Creates a generator seeded with `seed`.
    /// `modulus` is the internal modulus and must be nonzero.
    pub fn new(seed: u64, increment: u64, multiplier: u64, modulus: u64) -> Self {
        debug_assert!(modulus > 0);
        Lcg { last: seed, increment, multiplier, modulus }
    }

    /// Advances to the next state.
    #[wrappit] #[inline]
    fn step(&mut self) {
        self.last = (self.last * self.multiplier + self.increment) % self.modulus;
    }

    /// Generates the next value, reported modulo `ext_modulus`.
    /// `ext_modulus` may equal the internal modulus; it must be nonzero.
    #[inline]
    pub fn next(&mut self, ext_modulus: u64) -> u64 {
        self.step();
        self.last % ext_modulus
    }

    /// Returns the current recurrence value without advancing.
    #[inline]
    pub fn state(&self) -> u64 {
        self.last
    }
}

use rand_core::{Error, RngCore};

/// The raw internal stream (no external modulus applied) doubles as a
/// plain RNG. Only useful for full-width internal moduli; small moduli
/// leave the high bits empty.
impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step();
        self.last
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = dest.len();
        let mut i = 0;
        while i < bytes {
            let x = self.next_u64();
            let j = bytes.min(i + 8);
            // Always use Little-Endian.
            dest[i .. j].copy_from_slice(&x.to_le_bytes()[0 .. (j - i)]);
            i = j;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        Ok(self.fill_bytes(dest))
    }
}
