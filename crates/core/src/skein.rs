//! Skein hashers
//!
//! A hasher holds its initial chaining value and runs two UBI calls per
//! message: the message call and the output call. The initial chaining
//! value for default parameters is computed once per process and copied
//! into every hasher; hashers built with parameters derive their own.

use core::fmt;

use lazy_static::lazy_static;

use crate::engine;
use crate::error::Error;
use crate::params::{
    STATE_WORDS, TYPE_KEY, TYPE_KEY_ID, TYPE_MESSAGE, TYPE_NONCE, TYPE_PERSONALIZATION,
    TYPE_PUBLIC_KEY,
};
use crate::threefish::{Threefish, Threefish256h, Threefish512};
use crate::ubi::{Chain, configure, output, ubi};
use crate::word::Word;

lazy_static! {
    static ref SKEIN_512_IV: Chain<Threefish512> = configure::<Threefish512>([0; STATE_WORDS]);
    static ref HALF_SKEIN_256_IV: Chain<Threefish256h> =
        configure::<Threefish256h>([0; STATE_WORDS]);
}

/// A Threefish instance with a shared default initial chaining value
pub trait Variant: Threefish {
    /// Chaining value after the configuration call on a zero state
    fn default_chain() -> Chain<Self>;
}

impl Variant for Threefish512 {
    fn default_chain() -> Chain<Self> {
        *SKEIN_512_IV
    }
}

impl Variant for Threefish256h {
    fn default_chain() -> Chain<Self> {
        *HALF_SKEIN_256_IV
    }
}

/// Optional inputs chained before the message
///
/// Each present field becomes one extra UBI call with its own type tag.
/// The key is processed before the configuration call; the rest follow
/// it in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pub key: Option<Vec<u8>>,
    pub personalization: Option<Vec<u8>>,
    pub public_key: Option<Vec<u8>>,
    pub key_id: Option<Vec<u8>>,
    pub nonce: Option<Vec<u8>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn personalization(mut self, personalization: impl Into<Vec<u8>>) -> Self {
        self.personalization = Some(personalization.into());
        self
    }

    pub fn public_key(mut self, public_key: impl Into<Vec<u8>>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }

    pub fn key_id(mut self, key_id: impl Into<Vec<u8>>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    pub fn nonce(mut self, nonce: impl Into<Vec<u8>>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.key.is_none() && self.post_config().all(|(_, value)| value.is_none())
    }

    /// Fields chained after the configuration call, with their tags
    fn post_config(&self) -> impl Iterator<Item = (u8, Option<&[u8]>)> {
        [
            (TYPE_PERSONALIZATION, self.personalization.as_deref()),
            (TYPE_PUBLIC_KEY, self.public_key.as_deref()),
            (TYPE_KEY_ID, self.key_id.as_deref()),
            (TYPE_NONCE, self.nonce.as_deref()),
        ]
        .into_iter()
    }
}

/// Reusable Skein hasher over a Threefish variant
#[derive(Debug, Clone, Copy)]
pub struct Skein<T: Variant> {
    initial: Chain<T>,
}

/// Skein-512-512
pub type Skein512 = Skein<Threefish512>;

/// 32-bit-word Skein with a 256-bit digest
pub type HalfSkein256 = Skein<Threefish256h>;

impl<T: Variant> Skein<T> {
    /// Hasher with default parameters
    pub fn new() -> Self {
        Self {
            initial: T::default_chain(),
        }
    }

    /// Hasher whose initial chaining value absorbs `params`
    ///
    /// Fails when any parameter has an odd byte length.
    pub fn with_params(params: &Params) -> Result<Self, Error> {
        let mut chain = match &params.key {
            Some(key) => {
                let keyed = ubi::<T>([T::Word::default(); STATE_WORDS], TYPE_KEY, key)?;
                configure::<T>(keyed)
            }
            None => T::default_chain(),
        };

        for (type_tag, value) in params.post_config() {
            if let Some(value) = value {
                chain = ubi::<T>(chain, type_tag, value)?;
            }
        }

        Ok(Self { initial: chain })
    }

    /// Chaining value every message call starts from
    pub fn initial_chain(&self) -> &Chain<T> {
        &self.initial
    }

    /// Hash a message of even byte length
    pub fn hash(&self, message: &[u8]) -> Result<Digest<T::Word>, Error> {
        let chain = ubi::<T>(self.initial, TYPE_MESSAGE, message)?;
        Ok(Digest {
            words: output::<T>(chain),
        })
    }
}

impl<T: Variant> Default for Skein<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Final chaining state, serialized least significant byte first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digest<W: Word> {
    words: [W; STATE_WORDS],
}

impl<W: Word> Digest<W> {
    /// Digest length in bytes
    pub const LEN: usize = STATE_WORDS * W::BYTES;

    pub fn words(&self) -> &[W; STATE_WORDS] {
        &self.words
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        engine::words_to_bytes(&self.words)
    }

    /// Lowercase hex, `2 * LEN` characters
    pub fn to_hex(&self) -> String {
        engine::format(&self.words, Self::LEN)
    }
}

impl<W: Word> fmt::Display for Digest<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Skein-512-512 of `message` as 128 hex characters
pub fn skein512(message: &[u8]) -> Result<String, Error> {
    Ok(Skein512::new().hash(message)?.to_hex())
}

/// 32-bit-word Skein-256 of `message` as 64 hex characters
pub fn half_skein256(message: &[u8]) -> Result<String, Error> {
    Ok(HalfSkein256::new().hash(message)?.to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_builder() {
        let params = Params::new().personalization(*b"me").nonce(vec![1, 2]);
        assert!(!params.is_empty());
        assert_eq!(params.personalization.as_deref(), Some(&b"me"[..]));
        assert!(params.key.is_none());
        assert!(Params::new().is_empty());
    }

    #[test]
    fn test_empty_params_use_shared_chain() {
        let hasher = Skein512::with_params(&Params::new()).unwrap();
        assert_eq!(hasher.initial_chain(), Skein512::new().initial_chain());
    }

    #[test]
    fn test_odd_parameter_rejected() {
        let err = HalfSkein256::with_params(&Params::new().nonce(vec![1u8; 5])).unwrap_err();
        assert_eq!(err, Error::InvalidInput { len: 5, unit: 2 });
    }

    #[test]
    fn test_digest_lengths() {
        assert_eq!(Digest::<u64>::LEN, 64);
        assert_eq!(Digest::<u32>::LEN, 32);
    }

    #[test]
    fn test_display_matches_hex() {
        let digest = HalfSkein256::new().hash(b"").unwrap();
        assert_eq!(digest.to_string(), digest.to_hex());
        assert_eq!(hex::encode(digest.to_bytes()), digest.to_hex());
    }
}
