// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Binary encoding of [`Pcg64`] state; see [`Pcg64::to_bytes`] for the
//! format.

use core::fmt;

use crate::Pcg64;

const MAGIC: [u8; 4] = *b"pcg:";

/// Length in bytes of an encoded state record.
pub const ENCODED_LEN: usize = 20;

/// Error returned when decoding an encoded state record fails.
///
/// Decoding fails when the input is not exactly [`ENCODED_LEN`] bytes long
/// or does not begin with the `"pcg:"` tag; the generator is left
/// untouched in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError;

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid PCG encoding")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

impl Pcg64 {
    /// Encode the generator's state words as a fresh 20-byte record.
    ///
    /// The record is the 4-byte tag `"pcg:"` followed by the high and low
    /// state words as big-endian 64-bit integers. There is no version
    /// field; any change to the state shape is a breaking format change.
    /// Only the state words are persisted — the stream selectors are not
    /// part of the format, so decoding into a generator seeded with
    /// different streams reproduces the encoder's output only if the
    /// caller re-applies the original streams. This mirrors the format
    /// this codec interoperates with and is intentional.
    ///
    /// [`to_bytes`] and [`encode_into`] produce identical bytes.
    ///
    /// [`to_bytes`]: Pcg64::to_bytes
    /// [`encode_into`]: Pcg64::encode_into
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let mut buf = [0u8; ENCODED_LEN];
        buf[..4].copy_from_slice(&MAGIC);
        buf[4..12].copy_from_slice(&self.hi.state.to_be_bytes());
        buf[12..].copy_from_slice(&self.lo.state.to_be_bytes());
        buf
    }

    /// Encode the generator's state words into a caller-provided record,
    /// avoiding any intermediate buffer.
    pub fn encode_into(&self, buf: &mut [u8; ENCODED_LEN]) {
        buf[..4].copy_from_slice(&MAGIC);
        let mut v = self.hi.state;
        for b in buf[4..12].iter_mut().rev() {
            *b = v as u8;
            v >>= 8;
        }
        let mut v = self.lo.state;
        for b in buf[12..].iter_mut().rev() {
            *b = v as u8;
            v >>= 8;
        }
    }

    /// Restore the generator's state words from an encoded record.
    ///
    /// Fails with [`DecodeError`] unless `bytes` is exactly 20 bytes long
    /// and starts with the `"pcg:"` tag; no state is modified on failure.
    /// The stream selectors are left as seeded — they are not part of the
    /// format.
    pub fn from_bytes(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        if bytes.len() != ENCODED_LEN || bytes[..4] != MAGIC {
            return Err(DecodeError);
        }
        let mut word = [0u8; 8];
        word.copy_from_slice(&bytes[4..12]);
        self.hi.state = u64::from_be_bytes(word);
        word.copy_from_slice(&bytes[12..]);
        self.lo.state = u64::from_be_bytes(word);
        Ok(())
    }
}
