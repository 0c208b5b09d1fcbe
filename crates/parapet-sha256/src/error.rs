// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Digest error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    /// Message bit length does not fit the 64-bit length field appended
    /// during padding
    #[error("message exceeds 2^61 - 1 bytes; bit length does not fit in 64 bits")]
    InputTooLarge,
}
