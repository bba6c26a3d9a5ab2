// Copyright 2018-2023 Developers of the Rand project.
// Copyright 2014-2017, 2019 Melissa O'Neill and PCG Project contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The 64/32 PCG generator

use core::fmt;
use rand_core::{impls, le, Error, RngCore, SeedableRng};
#[cfg(feature = "serde1")] use serde::{Deserialize, Serialize};

// This is the default multiplier used by PCG for 64-bit state.
pub(crate) const MULTIPLIER: u64 = 0x5851f42d4c957f2d;

// State and stream of the PCG reference implementation's default-initialised
// `pcg32_random_t`.
const DEFAULT_STATE: u64 = 0x853c49e6748fea9b;
const DEFAULT_INCREMENT: u64 = 0xda3e39cb94b95bdb;

/// A PCG random number generator (XSH RR 64/32 (LCG) variant).
///
/// Permuted Congruential Generator with 64-bit state, internal Linear
/// Congruential Generator, and 32-bit output via "xorshift high (bits),
/// random rotation" output function.
///
/// This is a 64-bit LCG with explicitly chosen stream with the PCG-XSH-RR
/// output function, officially known as `pcg32`.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Pcg32 {
    pub(crate) state: u64,
    pub(crate) increment: u64,
}

impl Pcg32 {
    /// Construct an instance compatible with PCG seed and stream.
    ///
    /// Note that the highest bit of the `stream` parameter is discarded
    /// to simplify upholding internal invariants.
    ///
    /// `new(42, 54)` reproduces the demo sequence published by the PCG
    /// reference implementation, starting `0xa15c02b7, 0x7b47f409, ...`.
    pub fn new(state: u64, stream: u64) -> Self {
        // The increment must be odd, hence we discard one bit:
        let increment = (stream << 1) | 1;
        Self::from_state_incr(state, increment)
    }

    #[inline]
    fn from_state_incr(state: u64, increment: u64) -> Self {
        let mut pcg = Self { state, increment };
        // Move away from initial value:
        pcg.state = pcg.state.wrapping_add(pcg.increment);
        pcg.step();
        pcg
    }

    #[inline(always)]
    fn step(&mut self) {
        // prepare the LCG for the next round
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment);
    }

    /// Multi-step advance functions (jump-ahead, jump-back)
    ///
    /// The method used here is based on Brown, "Random Number Generation
    /// with Arbitrary Stride,", Transactions of the American Nuclear
    /// Society (Nov. 1994).  The algorithm is very similar to fast
    /// exponentiation.
    ///
    /// Using this function is equivalent to calling `next_u32()` `delta`
    /// number of times.
    #[inline]
    pub fn advance(&mut self, delta: u64) {
        let mut acc_mult: u64 = 1;
        let mut acc_plus: u64 = 0;
        let mut cur_mult = MULTIPLIER;
        let mut cur_plus = self.increment;
        let mut mdelta = delta;

        while mdelta > 0 {
            if (mdelta & 1) != 0 {
                acc_mult = acc_mult.wrapping_mul(cur_mult);
                acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
            }
            cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
            cur_mult = cur_mult.wrapping_mul(cur_mult);
            mdelta /= 2;
        }
        self.state = acc_mult.wrapping_mul(self.state).wrapping_add(acc_plus);
    }

    /// Move the generator backwards by `delta` steps.
    ///
    /// Since the LCG has full period 2^64, retreating by `delta` is the same
    /// as advancing by the additive inverse of `delta` modulo 2^64, "the
    /// long way round". `retreat(delta)` exactly undoes `advance(delta)`.
    #[inline]
    pub fn retreat(&mut self, delta: u64) {
        self.advance(delta.wrapping_neg());
    }

    /// Return a uniformly distributed value in `[0, bound)`, without
    /// modulo bias. Returns 0 if `bound` is 0.
    ///
    /// Draws below `2^32 mod bound` are rejected so that every residue
    /// class keeps an equal share of the remaining range; fewer than half
    /// of all draws can be rejected, so the expected number of iterations
    /// is below 2 for any bound.
    pub fn next_u32_bounded(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }

        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.next_u32();
            if r >= threshold {
                return r % bound;
            }
        }
    }
}

/// The PCG reference implementation's default state and stream
/// (`PCG32_INITIALIZER`).
impl Default for Pcg32 {
    fn default() -> Self {
        Self {
            state: DEFAULT_STATE,
            increment: DEFAULT_INCREMENT,
        }
    }
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for Pcg32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pcg32 {{}}")
    }
}

impl SeedableRng for Pcg32 {
    type Seed = [u8; 16];

    /// We use a single 127-bit seed to initialise the state and select a
    /// stream. One `seed` bit (the highest bit of `seed[8..16]`) is ignored.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut seed_u64 = [0u64; 2];
        le::read_u64_into(&seed, &mut seed_u64);
        Self::new(seed_u64[0], seed_u64[1])
    }
}

impl RngCore for Pcg32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let state = self.state;
        self.step();

        // Output function XSH RR: xorshift high (bits), followed by a
        // random rotate
        // Constants are for 64-bit state, 32-bit output
        const ROTATE: u32 = 59; // 64 - 5
        const XSHIFT: u32 = 18; // (5 + 32) / 2
        const SPARE: u32 = 27; // 64 - 32 - 5

        let rot = (state >> ROTATE) as u32;
        let xsh = (((state >> XSHIFT) ^ state) >> SPARE) as u32;
        xsh.rotate_right(rot)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
