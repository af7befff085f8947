//! # Skein Core
//!
//! Skein hashing built from the Threefish tweakable block cipher and
//! Unique Block Iteration (UBI) chaining, in two word widths:
//!
//! - **Skein-512-512**: 64-bit words, 64-byte blocks, 512-bit digest
//!   (v1.2 constants, matches the NIST CD known-answer tests)
//! - **Half Skein-256**: 32-bit words, 32-byte blocks, 256-bit digest,
//!   five-word tweak schedule and its own rotation table
//!
//! ## Structure
//!
//! ```text
//! engine     padding, word packing, ordered block fold, hex formatting
//! threefish  keyed 72-round mix network
//! tweak      position / first / last / type tag per block
//! ubi        tagged chaining calls (config, message, output)
//! skein      hashers, optional parameters, shared initial chaining values
//! ```
//!
//! ## Input Format
//!
//! Messages are sequences of 16-bit code units, so their byte length must
//! be even. Odd-length input is rejected with [`Error::InvalidInput`].
//!
//! ## Example
//!
//! ```rust
//! use skein_core::{Skein512, skein512};
//!
//! // Single-shot hashing
//! let digest = skein512(&[0x41, 0xfb]).unwrap();
//! assert!(digest.starts_with("9fe78bd755a7b4e5"));
//!
//! // Reusable hasher
//! let hasher = Skein512::new();
//! let first = hasher.hash(b"first!").unwrap();
//! let second = hasher.hash(b"second").unwrap();
//! assert_ne!(first, second);
//! ```

pub mod engine;
mod error;
mod params;
mod skein;
pub mod threefish;
mod tweak;
pub mod ubi;
mod word;

pub use error::Error;
pub use params::*;
pub use skein::{Digest, HalfSkein256, Params, Skein, Skein512, Variant, half_skein256, skein512};
pub use threefish::{Threefish, Threefish256h, Threefish512};
pub use tweak::Tweak;
pub use word::Word;
