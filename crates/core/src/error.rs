//! Error types for the Skein core

use thiserror::Error;

/// Errors produced while framing input for hashing
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Input length does not pack into whole units of the given width
    #[error("invalid input: {len} bytes is not a multiple of {unit}")]
    InvalidInput { len: usize, unit: usize },
}
