// Copyright 2018-2023 Developers of the Rand project.
// Copyright 2014-2017, 2019 Melissa O'Neill and PCG Project contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The paired 64-bit PCG generator

use core::fmt;
use rand_core::{impls, le, Error, RngCore, SeedableRng};
#[cfg(feature = "serde1")] use serde::{Deserialize, Serialize};

use crate::pcg32::Pcg32;

#[cfg(feature = "alloc")] use alloc::vec::Vec;

// Default 128-bit multiplier and increment used by PCG for 128-bit state.
const MULTIPLIER_128: u128 = 0x2360ed051fc65da44385df649fccf645;
const INCREMENT_128: u128 = 0x5851f42d4c957f2d14057b7ef767814f;

// This is the cheap multiplier used by PCG for 128-bit state.
const CHEAP_MULTIPLIER: u64 = 0xda942042e4dd58b5;

const INV_2POW52: f64 = 1.0 / (1u64 << 52) as f64;
const INV_2POW64: f64 = 1.0 / ((1u128 << 64) as f64);

/// A PCG random number generator built from a pair of [`Pcg32`] instances,
/// with 128 bits of effective state.
///
/// The two sub-generators are kept on distinct streams and produce 64-bit
/// output two ways:
///
/// -   [`next_u64`]: the fast path, concatenating one 32-bit draw from each
///     sub-generator. Statistical quality is that of the underlying
///     [`Pcg32`] streams.
/// -   [`next_u64_mcg`]: the high-quality path, advancing the two state
///     words as a single 128-bit LCG and permuting the high word, the
///     construction from PCG's ["128-bit MCG" output
///     function](https://www.pcg-random.org/posts/128-bit-mcg-passes-practrand.html).
///
/// Both paths share the same state and the same [`advance`]/[`retreat`]
/// semantics, so the paths may be mixed on one instance; each draw consumes
/// one step of both state words.
///
/// [`next_u64`]: RngCore::next_u64
/// [`next_u64_mcg`]: Pcg64::next_u64_mcg
/// [`advance`]: Pcg64::advance
/// [`retreat`]: Pcg64::retreat
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Pcg64 {
    pub(crate) hi: Pcg32,
    pub(crate) lo: Pcg32,
}

impl Pcg64 {
    /// Construct an instance from two state seeds, on streams 0 and its
    /// complement.
    ///
    /// Equivalent to `new_with_streams(seed1, seed2, 0, 0)`; see
    /// [`new_with_streams`] for the stream-separation rule applied.
    ///
    /// [`new_with_streams`]: Pcg64::new_with_streams
    pub fn new(seed1: u64, seed2: u64) -> Self {
        Self::new_with_streams(seed1, seed2, 0, 0)
    }

    /// Construct an instance from two state seeds and two stream selectors.
    ///
    /// The sub-generators must never share a stream, or the two halves of
    /// every output would be perfectly correlated. Since [`Pcg32`] discards
    /// the highest stream bit, `seq2` is complemented whenever the two
    /// selectors coincide in their low 63 bits.
    pub fn new_with_streams(seed1: u64, seed2: u64, seq1: u64, mut seq2: u64) -> Self {
        let mask = u64::MAX >> 1;
        if seq1 & mask == seq2 & mask {
            seq2 = !seq2;
        }
        Self {
            hi: Pcg32::new(seed2, seq2),
            lo: Pcg32::new(seed1, seq1),
        }
    }

    /// Multi-step advance (jump-ahead, jump-back); see [`Pcg32::advance`].
    ///
    /// Both sub-generators evolve as independent LCGs, so advancing each by
    /// `delta` advances the composite by `delta` draws, on either output
    /// path. Using this function is equivalent to calling `next_u64()`
    /// `delta` number of times.
    #[inline]
    pub fn advance(&mut self, delta: u64) {
        self.hi.advance(delta);
        self.lo.advance(delta);
    }

    /// Move the generator backwards by `delta` steps.
    ///
    /// `retreat(delta)` exactly undoes `advance(delta)`.
    #[inline]
    pub fn retreat(&mut self, delta: u64) {
        self.hi.retreat(delta);
        self.lo.retreat(delta);
    }

    /// Advance the pair of state words as one 128-bit LCG and return the
    /// post-step `(hi, lo)` words.
    ///
    /// The high sub-generator's state is the most significant half. The
    /// step uses PCG's default 128-bit multiplier and increment; the
    /// sub-generators' own stream selectors play no part in it.
    #[inline]
    pub fn step_u128(&mut self) -> (u64, u64) {
        let state = (u128::from(self.hi.state) << 64) | u128::from(self.lo.state);
        let state = state
            .wrapping_mul(MULTIPLIER_128)
            .wrapping_add(INCREMENT_128);
        self.hi.state = (state >> 64) as u64;
        self.lo.state = state as u64;
        (self.hi.state, self.lo.state)
    }

    /// Return the next value of the high-quality output path.
    ///
    /// Advances the 128-bit state via [`step_u128`], then permutes the high
    /// word conditioned on the low word. Forcing the low bit of the final
    /// multiplier keeps it odd, so that multiplication is a bijection on
    /// the output word.
    ///
    /// [`step_u128`]: Pcg64::step_u128
    #[inline]
    pub fn next_u64_mcg(&mut self) -> u64 {
        let (mut hi, lo) = self.step_u128();

        hi ^= hi >> 22;
        hi = hi.wrapping_mul(CHEAP_MULTIPLIER);
        hi ^= hi >> 48;
        hi = hi.wrapping_mul(lo | 1);

        hi
    }

    /// Return a uniformly distributed value in `[0, 2^63)`: a fast-path
    /// draw with the highest bit masked off.
    ///
    /// This is the natural range for callers interfacing with signed 64-bit
    /// consumers.
    #[inline]
    pub fn next_u63(&mut self) -> u64 {
        self.next_u64() & (u64::MAX >> 1)
    }

    /// Return a uniformly distributed float in `[0, 1)` with 52 bits of
    /// precision: the top 52 bits of a 63-bit draw scaled by 2^-52.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u63() >> 11) as f64 * INV_2POW52
    }

    /// Return a uniformly distributed float in `[0, 1)` using the low 56
    /// bits of a full 64-bit draw scaled by 2^-64.
    ///
    /// Marginally finer-grained than [`next_f64`] (the result is a multiple
    /// of 2^-64 rather than 2^-52) at slightly higher cost.
    ///
    /// [`next_f64`]: Pcg64::next_f64
    #[inline]
    pub fn next_f64_full(&mut self) -> f64 {
        (self.next_u64() & 0x00ff_ffff_ffff_ffff) as f64 * INV_2POW64
    }

    /// Return a uniformly distributed value in `[0, bound)`, without
    /// modulo bias. Returns 0 if `bound` is 0.
    ///
    /// Same rejection-sampling policy as [`Pcg32::next_u32_bounded`], at
    /// 64-bit width over fast-path draws.
    pub fn next_u64_bounded(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }

        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return r % bound;
            }
        }
    }

    /// Shuffle `n` elements in place via the caller-supplied `swap`.
    ///
    /// Fisher–Yates: for `i` from `n - 1` down to 1, a pivot `j` is drawn
    /// uniformly from `[0, i]` and `swap(i, j)` invoked. Fewer than two
    /// elements is a no-op.
    pub fn shuffle<F: FnMut(usize, usize)>(&mut self, n: usize, mut swap: F) {
        for i in (1..n).rev() {
            let j = self.next_u64_bounded(i as u64 + 1) as usize;
            swap(i, j);
        }
    }

    /// Return a uniformly random permutation of `[0, n)`.
    #[cfg(feature = "alloc")]
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..n).collect();
        self.shuffle(n, |i, j| perm.swap(i, j));
        perm
    }
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for Pcg64 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pcg64 {{}}")
    }
}

impl SeedableRng for Pcg64 {
    type Seed = [u8; 32];

    /// We use a 254-bit seed split into two state seeds and two stream
    /// selectors, `(seed1, seed2, seq1, seq2)` in little-endian order; see
    /// [`Pcg64::new_with_streams`]. One bit of each stream selector is
    /// ignored.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut seed_u64 = [0u64; 4];
        le::read_u64_into(&seed, &mut seed_u64);
        Self::new_with_streams(seed_u64[0], seed_u64[1], seed_u64[2], seed_u64[3])
    }
}

impl RngCore for Pcg64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        (u64::from(self.hi.next_u32()) << 32) | u64::from(self.lo.next_u32())
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
