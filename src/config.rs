//! Hasher configuration
//!
//! A hasher is described by its variant and the optional parameters
//! chained before the message. Configurations deserialize from JSON:
//!
//! ```json
//! {
//!   "variant": "half-skein256",
//!   "personalization": { "text": "my app" },
//!   "nonce": { "hex": "00010203" }
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use skein_core::{HalfSkein256, Params, Skein512};

use crate::encoding;
use crate::error::{Error, Result};

/// Which Skein instance to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Skein-512-512
    #[default]
    #[serde(alias = "skein-512")]
    Skein512,
    /// 32-bit-word Skein with a 256-bit digest
    #[serde(alias = "halfskein")]
    HalfSkein256,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Skein512 => "skein512",
            Variant::HalfSkein256 => "half-skein256",
        }
    }

    /// Digest length in hex characters
    pub fn hex_len(self) -> usize {
        match self {
            Variant::Skein512 => 2 * skein_core::Digest::<u64>::LEN,
            Variant::HalfSkein256 => 2 * skein_core::Digest::<u32>::LEN,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skein512" | "skein-512" => Ok(Variant::Skein512),
            "half-skein256" | "halfskein" => Ok(Variant::HalfSkein256),
            other => Err(Error::UnknownVariant(other.to_string())),
        }
    }
}

/// A parameter value, given either as hex bytes or as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Input {
    Hex(String),
    /// Encoded as UTF-16LE
    Text(String),
}

impl Input {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Input::Hex(hex) => encoding::from_hex(hex),
            Input::Text(text) => Ok(encoding::utf16le(text)),
        }
    }
}

fn decode(input: &Option<Input>) -> Result<Option<Vec<u8>>> {
    input.as_ref().map(Input::to_bytes).transpose()
}

/// Hasher configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HasherConfig {
    #[serde(default)]
    pub variant: Variant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Input>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalization: Option<Input>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<Input>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<Input>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<Input>,
}

impl HasherConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode every present parameter into bytes
    pub fn params(&self) -> Result<Params> {
        Ok(Params {
            key: decode(&self.key)?,
            personalization: decode(&self.personalization)?,
            public_key: decode(&self.public_key)?,
            key_id: decode(&self.key_id)?,
            nonce: decode(&self.nonce)?,
        })
    }

    /// Build a hasher, chaining the parameters once up front
    pub fn build(&self) -> Result<Hasher> {
        let params = self.params()?;
        debug!(
            "building {} hasher (parameters: {})",
            self.variant,
            if params.is_empty() { "none" } else { "custom" }
        );

        let hasher = match self.variant {
            Variant::Skein512 => Hasher::Skein512(Skein512::with_params(&params)?),
            Variant::HalfSkein256 => Hasher::HalfSkein256(HalfSkein256::with_params(&params)?),
        };
        Ok(hasher)
    }
}

/// A configured hasher of either variant
#[derive(Debug, Clone, Copy)]
pub enum Hasher {
    Skein512(Skein512),
    HalfSkein256(HalfSkein256),
}

impl Hasher {
    /// Hasher with default parameters
    pub fn new(variant: Variant) -> Self {
        match variant {
            Variant::Skein512 => Hasher::Skein512(Skein512::new()),
            Variant::HalfSkein256 => Hasher::HalfSkein256(HalfSkein256::new()),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Hasher::Skein512(_) => Variant::Skein512,
            Hasher::HalfSkein256(_) => Variant::HalfSkein256,
        }
    }

    /// Hash raw bytes into lowercase hex
    pub fn hash(&self, message: &[u8]) -> Result<String> {
        trace!("{}: hashing {} bytes", self.variant(), message.len());
        let digest = match self {
            Hasher::Skein512(h) => h.hash(message)?.to_hex(),
            Hasher::HalfSkein256(h) => h.hash(message)?.to_hex(),
        };
        Ok(digest)
    }

    /// Hash text read as UTF-16LE
    pub fn hash_text(&self, text: &str) -> Result<String> {
        self.hash(&encoding::utf16le(text))
    }

    /// Hash a hex-encoded message
    pub fn hash_hex(&self, hex: &str) -> Result<String> {
        self.hash(&encoding::from_hex(hex)?)
    }
}
