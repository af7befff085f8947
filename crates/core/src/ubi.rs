//! Unique Block Iteration
//!
//! A UBI call folds tagged data into a chaining state. For each block
//! the chaining state keys Threefish, the block is the plaintext, the
//! tweak records position, first/last flags and the call's type tag, and
//! the plaintext is XORed back into the ciphertext (Matyas-Meyer-Oseas).

use core::marker::PhantomData;

use crate::engine::{BlockEngine, Framing, Padding, RoundFunction};
use crate::error::Error;
use crate::params::{
    CONFIG_BYTES, CONFIG_VERSION, OUTPUT_COUNTER_BYTES, STATE_WORDS, TYPE_CONFIG, TYPE_OUTPUT,
};
use crate::threefish::{Threefish, encrypt};
use crate::tweak::Tweak;
use crate::word::Word;

/// Chaining state of a variant
pub type Chain<T> = [<T as Threefish>::Word; STATE_WORDS];

/// Round function for a single UBI call with a fixed type tag
#[derive(Debug, Clone, Copy)]
pub struct Ubi<T> {
    type_tag: u8,
    _variant: PhantomData<T>,
}

impl<T: Threefish> Ubi<T> {
    pub fn new(type_tag: u8) -> Self {
        Self {
            type_tag,
            _variant: PhantomData,
        }
    }

    pub fn tweak(&self, framing: &Framing) -> Tweak {
        Tweak::new(self.type_tag, framing.position, framing.first, framing.last)
    }

    fn engine(self) -> BlockEngine<Self> {
        BlockEngine::new(self, Padding::ZeroFill)
    }
}

impl<T: Threefish> RoundFunction for Ubi<T> {
    type Word = T::Word;
    type State = Chain<T>;

    const BLOCK_WORDS: usize = STATE_WORDS;

    fn process(&self, chain: Chain<T>, block: &[T::Word], framing: &Framing) -> Chain<T> {
        let mut plaintext = [T::Word::default(); STATE_WORDS];
        plaintext.copy_from_slice(block);

        let mut next = encrypt::<T>(&chain, &self.tweak(framing), &plaintext);
        for (word, p) in next.iter_mut().zip(plaintext) {
            *word ^= p;
        }
        next
    }
}

/// Fold `data` into `chain` under `type_tag`
pub fn ubi<T: Threefish>(chain: Chain<T>, type_tag: u8, data: &[u8]) -> Result<Chain<T>, Error> {
    Ubi::<T>::new(type_tag).engine().fold(chain, data)
}

/// Build the 32-byte configuration block
pub fn config_block<T: Threefish>() -> [u8; CONFIG_BYTES] {
    let output_bits = (STATE_WORDS * <T::Word as Word>::BYTES * 8) as u64;

    let mut block = [0u8; CONFIG_BYTES];
    block[0..4].copy_from_slice(&T::SCHEMA);
    block[4..6].copy_from_slice(&CONFIG_VERSION.to_le_bytes());
    block[8..16].copy_from_slice(&output_bits.to_le_bytes());
    block
}

/// Apply the configuration call to `chain`
pub fn configure<T: Threefish>(chain: Chain<T>) -> Chain<T> {
    Ubi::<T>::new(TYPE_CONFIG)
        .engine()
        .absorb(chain, &config_block::<T>())
}

/// Output stage: encrypt counter zero under the final message state
pub fn output<T: Threefish>(chain: Chain<T>) -> Chain<T> {
    Ubi::<T>::new(TYPE_OUTPUT)
        .engine()
        .absorb(chain, &[0u8; OUTPUT_COUNTER_BYTES])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::framings;
    use crate::params::{TYPE_MESSAGE, TYPE_NONCE};
    use crate::threefish::{Threefish256h, Threefish512};

    #[test]
    fn test_config_block_layout() {
        let block = config_block::<Threefish512>();
        assert_eq!(&block[0..4], b"SHA3");
        assert_eq!(&block[4..8], &[1, 0, 0, 0]);
        assert_eq!(&block[8..16], &512u64.to_le_bytes());
        assert!(block[16..].iter().all(|&b| b == 0));

        let block = config_block::<Threefish256h>();
        assert_eq!(&block[0..4], b"hSkn");
        assert_eq!(&block[8..10], &[0x00, 0x01]);
    }

    #[test]
    fn test_tag_separation() {
        let data = b"same bytes, other context!";
        let zero = [0u64; STATE_WORDS];
        let message = ubi::<Threefish512>(zero, TYPE_MESSAGE, data).unwrap();
        let nonce = ubi::<Threefish512>(zero, TYPE_NONCE, data).unwrap();
        assert_ne!(message, nonce);

        let zero = [0u32; STATE_WORDS];
        let message = ubi::<Threefish256h>(zero, TYPE_MESSAGE, data).unwrap();
        let nonce = ubi::<Threefish256h>(zero, TYPE_NONCE, data).unwrap();
        assert_ne!(message, nonce);
    }

    #[test]
    fn test_feed_forward_applies_to_every_block() {
        // With a zero key, a two-block call must differ from chaining the
        // blocks through bare encryption.
        let data = [0x11u8; 128];
        let zero = [0u64; STATE_WORDS];
        let chained = ubi::<Threefish512>(zero, TYPE_MESSAGE, &data).unwrap();

        let ubi_round = Ubi::<Threefish512>::new(TYPE_MESSAGE);
        let block = [0x1111_1111_1111_1111u64; STATE_WORDS];
        let frames: Vec<Framing> = framings(128, 128, 64).collect();
        let mut bare = zero;
        for frame in &frames {
            bare = encrypt::<Threefish512>(&bare, &ubi_round.tweak(frame), &block);
        }
        assert_ne!(chained, bare);

        let mut manual = zero;
        for frame in &frames {
            manual = ubi_round.process(manual, &block, frame);
        }
        assert_eq!(chained, manual);
    }

    #[test]
    fn test_odd_data_is_rejected() {
        let err = ubi::<Threefish256h>([0; STATE_WORDS], TYPE_MESSAGE, &[1, 2, 3]).unwrap_err();
        assert_eq!(err, Error::InvalidInput { len: 3, unit: 2 });
    }

    #[test]
    fn test_output_tweak_never_matches_message_tweak() {
        let round = Ubi::<Threefish512>::new(TYPE_MESSAGE);
        let out = Ubi::<Threefish512>::new(TYPE_OUTPUT);
        let out_tweaks: Vec<Tweak> = framings(OUTPUT_COUNTER_BYTES, 64, 64)
            .map(|f| out.tweak(&f))
            .collect();

        for len in [0usize, 2, 8, 62, 64, 66, 128, 1000] {
            let padded = if len == 0 { 64 } else { len.next_multiple_of(64) };
            for frame in framings(len, padded, 64) {
                let tweak = round.tweak(&frame);
                assert!(!out_tweaks.contains(&tweak), "collision at len {len}");
            }
        }
    }
}
