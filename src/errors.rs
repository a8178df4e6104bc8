//! The only way to misuse a [`crate::Spritz`] is to ask for a keystream XOR
//! into a buffer shorter than its input.
//!
//! Every other operation (absorbing, squeezing, hashing, resetting) is total.
//! A [`core::result::Result`] wrapper called [`SpritzResult`] (having error fixed to [`SpritzError`]) is also provided.

use std::{error::Error, fmt::Display};

/// An error signaling a broken calling contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpritzError {
    /// The destination of a keystream XOR is shorter than its source.
    DestinationTooShort {
        /// Length of the destination buffer.
        dst: usize,
        /// Length of the source buffer.
        src: usize,
    },
}

/// The result type of the fallible Spritz operations.
pub type SpritzResult<T> = Result<T, SpritzError>;

impl Display for SpritzError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DestinationTooShort { dst, src } => write!(
                f,
                "destination buffer too small ({} bytes for {} input bytes)",
                dst, src
            ),
        }
    }
}

impl Error for SpritzError {}
