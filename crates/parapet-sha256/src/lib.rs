// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 digest with hexadecimal rendering
//!
//! Implementation per FIPS 180-4 / RFC 6234 Section 6.2. Whole-message only:
//! the input is padded, expanded into per-block message schedules and folded
//! through the 64-round compression function in one call. No incremental
//! interface is exposed.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod hex;
mod pad;
mod sha256;

use alloc::string::String;

pub use error::DigestError;
pub use hex::bytes_to_hex;
pub use pad::MAX_MESSAGE_LEN;
pub use sha256::digest_bytes;

/// Compute the SHA-256 digest of `message` and render it as 64 lowercase
/// hexadecimal characters.
///
/// The message is hashed as its UTF-8 byte sequence. Fails only when the
/// input exceeds [`MAX_MESSAGE_LEN`] bytes.
pub fn digest(message: &str) -> Result<String, DigestError> {
    let digest = sha256::digest_bytes(message.as_bytes())?;
    Ok(hex::bytes_to_hex(&digest))
}
