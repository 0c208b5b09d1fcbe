// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message padding per RFC 6234 Section 4.1

use alloc::vec;
use alloc::vec::Vec;

use crate::error::DigestError;

/// Largest message length in bytes whose bit length fits the 64-bit length
/// field appended during padding.
pub const MAX_MESSAGE_LEN: u64 = (1 << 61) - 1;

pub(crate) const BLOCK_LEN: usize = 64;

/// Reject lengths whose bit count would wrap the 64-bit length field.
pub(crate) fn ensure_representable(len: u64) -> Result<(), DigestError> {
    if len > MAX_MESSAGE_LEN {
        return Err(DigestError::InputTooLarge);
    }
    Ok(())
}

/// Pad `msg` per RFC 6234 Section 4.1.
///
/// Appends the 0x80 terminator, the minimum zero fill and the message bit
/// length as a big-endian u64, so the result is a whole number of 64-byte
/// blocks.
pub(crate) fn pad_message(msg: &[u8]) -> Result<Vec<u8>, DigestError> {
    ensure_representable(msg.len() as u64)?;

    let bit_len = (msg.len() as u64) * 8;

    // Terminator + zero fill + 8-byte length field, rounded up to a block
    let padded_len = (msg.len() + 1 + 8).next_multiple_of(BLOCK_LEN);

    let mut padded = vec![0u8; padded_len];
    padded[..msg.len()].copy_from_slice(msg);
    padded[msg.len()] = 0x80;
    padded[padded_len - 8..].copy_from_slice(&bit_len.to_be_bytes());

    Ok(padded)
}
