// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! PCG random number generators with jump-ahead and a binary state codec.
//!
//! This is a native Rust implementation of a small selection of [PCG
//! generators], plus the stream utilities commonly wanted alongside them.
//! It is explicitly not a goal to re-implement all of PCG.
//!
//! ## Generators
//!
//! This crate provides:
//!
//! -   [`Pcg32`], officially known as `pcg32`: a 64-bit LCG with the XSH-RR
//!     output function, producing 32-bit output. A good general-purpose
//!     choice on both 32-bit and 64-bit CPUs.
//! -   [`Pcg64`]: a pair of [`Pcg32`] instances on distinct streams,
//!     producing 64-bit output two ways — a fast interleaved path
//!     ([`RngCore::next_u64`]) and a higher-quality path stepping the pair
//!     as one 128-bit LCG ([`Pcg64::next_u64_mcg`]).
//!
//! Both generators are deterministic and portable, tested against reference
//! vectors, and support arbitrary-stride [`advance`]/[`retreat`] in
//! logarithmic time. `Pcg64` additionally offers unbiased bounded sampling,
//! float conversion, Fisher–Yates shuffling and a fixed 20-byte binary
//! encoding of its state words (see [`DecodeError`] for the format rules).
//!
//! ## Seeding (construction)
//!
//! Generators implement the [`SeedableRng`] trait; any of its methods is
//! suitable. For reproducible streams prefer the explicit constructors
//! ([`Pcg32::new`], [`Pcg64::new_with_streams`]), which take PCG's
//! state/stream parameters directly.
//!
//! ```
//! use rand_core::RngCore;
//! use pcg::Pcg32;
//!
//! // The canonical pcg32 demo seeding:
//! let mut rng = Pcg32::new(42, 54);
//! assert_eq!(rng.next_u32(), 0xa15c02b7);
//! ```
//!
//! ## Non-goals
//!
//! These generators are not cryptographically secure: output is reproducible
//! from the seed by design. Do not use them where an attacker must not be
//! able to predict output.
//!
//! [PCG generators]: https://www.pcg-random.org/
//! [`advance`]: Pcg32::advance
//! [`retreat`]: Pcg32::retreat
//! [`RngCore::next_u64`]: rand_core::RngCore::next_u64
//! [`SeedableRng`]: rand_core::SeedableRng

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod codec;
mod pcg32;
mod pcg64;

pub use rand_core;

pub use self::codec::{DecodeError, ENCODED_LEN};
pub use self::pcg32::Pcg32;
pub use self::pcg64::Pcg64;
