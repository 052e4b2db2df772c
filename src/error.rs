//! Error types for the RotorCrypt library.
//!
//! Every error is raised while a cipher is being put together. Once a
//! [`CipherState`](crate::CipherState) or [`Cascade`](crate::Cascade) exists,
//! advancing it and reading keystream bytes cannot fail.

use thiserror::Error;

/// Broad category of a [`RotorCryptError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Tables, keys or stage counts that cannot form a working cipher.
    InvalidConfiguration,
    /// Buffers handed to a processing call that do not line up.
    InvalidBuffer,
}

/// Errors produced by the RotorCrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotorCryptError {
    /// A wheel table does not have exactly as many bytes as its wheel modulus.
    #[error("wheel {wheel} table holds {found} bytes, expected {expected}")]
    WheelTableLength {
        wheel: usize,
        expected: usize,
        found: usize,
    },
    /// A cascade was requested with no cipher stages.
    #[error("cascade requires at least one cipher stage")]
    EmptyCascade,
    /// The number of keys differs from the number of cascade stages.
    #[error("cascade has {expected} stages but {found} keys were supplied")]
    KeyCountMismatch { expected: usize, found: usize },
    /// Input and output buffers differ in length.
    #[error("output buffer holds {output} bytes but input holds {input}")]
    BufferLengthMismatch { input: usize, output: usize },
}

impl RotorCryptError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RotorCryptError::WheelTableLength { .. }
            | RotorCryptError::EmptyCascade
            | RotorCryptError::KeyCountMismatch { .. } => ErrorKind::InvalidConfiguration,
            RotorCryptError::BufferLengthMismatch { .. } => ErrorKind::InvalidBuffer,
        }
    }
}
