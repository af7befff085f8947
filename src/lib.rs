//! Skein Suite
//!
//! Configurable Skein hashers over the [`skein_core`] algorithm crate.
//!
//! # Overview
//!
//! Two instances of the same Threefish/UBI construction are available:
//!
//! - **Skein-512-512**: 64-bit words, 512-bit digest
//! - **Half Skein-256**: 32-bit words, 256-bit digest
//!
//! Hashers can be built directly from the algorithm crate or from a JSON
//! [`HasherConfig`] that selects the variant and the optional key,
//! personalization, public key, key identifier and nonce.
//!
//! # Example
//!
//! ```rust
//! use skein::{HasherConfig, Variant};
//!
//! let config = HasherConfig::from_json(r#"{ "variant": "skein512" }"#).unwrap();
//! let hasher = config.build().unwrap();
//!
//! // Text is hashed as UTF-16LE code units
//! let digest = hasher.hash_text("hello").unwrap();
//! assert_eq!(digest.len(), Variant::Skein512.hex_len());
//! ```

// Re-export the core algorithm
pub use skein_core as algorithm;

pub mod config;
pub mod encoding;
pub mod error;

// Convenience re-exports
pub use algorithm::{HalfSkein256, Params, Skein512, half_skein256, skein512};
pub use config::{Hasher, HasherConfig, Input, Variant};
pub use error::{Error, Result};
