//! Cross-cutting error types for Launchpad.
//!
//! Errors raised here never involve the network. Transport and backend
//! errors live in `lp-client`; chain-level errors converge in `lp-chain`.

use thiserror::Error;

/// Errors that can be raised by any Launchpad crate before I/O happens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The startup idea is shorter than the minimum accepted length.
    #[error(
        "please provide a more detailed description of your startup idea \
         (at least {min} characters, got {length})"
    )]
    IdeaTooShort { length: usize, min: usize },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
