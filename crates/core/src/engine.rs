//! Generic block hash engine
//!
//! Owns message framing and digest extraction: padding, packing bytes
//! into words, folding blocks through a [`RoundFunction`] in strict
//! order, and formatting the final state. Everything algorithm-specific
//! lives in the round function.

use crate::error::Error;
use crate::params::INPUT_UNIT_BYTES;
use crate::word::Word;

/// Padding rule applied before a message is split into blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Append `0x80`, then zeros until `len % block_bytes == residue`
    Marker { residue: usize },
    /// Zeros up to the next block boundary; empty input becomes one zero
    /// block, non-empty aligned input is left as is
    ZeroFill,
}

/// Where a block sits within the message being folded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Framing {
    /// Zero-based block number
    pub index: usize,
    pub first: bool,
    pub last: bool,
    /// Message bytes consumed through this block, never counting padding
    pub position: u64,
}

/// Algorithm-specific compression of one block into the chaining state
pub trait RoundFunction {
    type Word: Word;
    type State: Copy;

    /// Words per block
    const BLOCK_WORDS: usize;

    fn process(&self, state: Self::State, block: &[Self::Word], framing: &Framing) -> Self::State;
}

/// Pad `message` into a fresh buffer
pub fn pad(message: &[u8], padding: Padding, block_bytes: usize) -> Vec<u8> {
    let mut padded = message.to_vec();
    match padding {
        Padding::Marker { residue } => {
            padded.push(0x80);
            while padded.len() % block_bytes != residue % block_bytes {
                padded.push(0);
            }
        }
        Padding::ZeroFill => {
            if padded.is_empty() {
                padded.resize(block_bytes, 0);
            } else if padded.len() % block_bytes != 0 {
                let len = padded.len().next_multiple_of(block_bytes);
                padded.resize(len, 0);
            }
        }
    }
    padded
}

/// Reinterpret bytes as little-endian words
pub fn to_words<W: Word>(bytes: &[u8]) -> Result<Vec<W>, Error> {
    if bytes.len() % W::BYTES != 0 {
        return Err(Error::InvalidInput {
            len: bytes.len(),
            unit: W::BYTES,
        });
    }
    Ok(pack_words(bytes))
}

/// Pack whole words; a trailing partial word is ignored
fn pack_words<W: Word>(bytes: &[u8]) -> Vec<W> {
    bytes.chunks_exact(W::BYTES).map(W::from_le_slice).collect()
}

/// Framing for every block of a padded message
///
/// `message_len` is the unpadded length; it becomes the position of the
/// last block.
pub fn framings(
    message_len: usize,
    padded_len: usize,
    block_bytes: usize,
) -> impl Iterator<Item = Framing> {
    let blocks = padded_len / block_bytes;
    (0..blocks).map(move |index| {
        let last = index + 1 == blocks;
        let position = if last {
            message_len
        } else {
            (index + 1) * block_bytes
        };
        Framing {
            index,
            first: index == 0,
            last,
            position: position as u64,
        }
    })
}

/// Serialize words little-endian into lowercase hex, keeping only the
/// trailing `digest_bytes` when the state is wider than the digest
pub fn format<W: Word>(words: &[W], digest_bytes: usize) -> String {
    let bytes = words_to_bytes(words);
    let start = bytes.len().saturating_sub(digest_bytes);
    hex::encode(&bytes[start..])
}

/// Serialize words least significant byte first
pub fn words_to_bytes<W: Word>(words: &[W]) -> Vec<u8> {
    let mut bytes = vec![0u8; words.len() * W::BYTES];
    for (word, out) in words.iter().zip(bytes.chunks_exact_mut(W::BYTES)) {
        word.write_le(out);
    }
    bytes
}

/// Pads a message, packs it into words and folds blocks through `R`
#[derive(Debug, Clone, Copy)]
pub struct BlockEngine<R> {
    round_fn: R,
    padding: Padding,
}

impl<R: RoundFunction> BlockEngine<R> {
    pub fn new(round_fn: R, padding: Padding) -> Self {
        Self { round_fn, padding }
    }

    /// Bytes per block
    pub fn block_bytes(&self) -> usize {
        R::BLOCK_WORDS * <R::Word as Word>::BYTES
    }

    /// Reject messages that do not pack into whole input units
    pub fn check(message: &[u8]) -> Result<(), Error> {
        if message.len() % INPUT_UNIT_BYTES != 0 {
            return Err(Error::InvalidInput {
                len: message.len(),
                unit: INPUT_UNIT_BYTES,
            });
        }
        Ok(())
    }

    /// Validate, then fold the whole message into `initial`
    pub fn fold(&self, initial: R::State, message: &[u8]) -> Result<R::State, Error> {
        Self::check(message)?;
        Ok(self.absorb(initial, message))
    }

    /// Fold an input the caller already knows to be well formed
    pub(crate) fn absorb(&self, initial: R::State, message: &[u8]) -> R::State {
        let block_bytes = self.block_bytes();
        let padded = pad(message, self.padding, block_bytes);
        let words: Vec<R::Word> = pack_words(&padded);
        self.fold_blocks(initial, &words, message.len())
    }

    /// Feed blocks to the round function in order, each output state
    /// becoming the next input
    pub fn fold_blocks(&self, initial: R::State, words: &[R::Word], message_len: usize) -> R::State {
        let block_bytes = self.block_bytes();
        let padded_len = words.len() * <R::Word as Word>::BYTES;

        words
            .chunks_exact(R::BLOCK_WORDS)
            .zip(framings(message_len, padded_len, block_bytes))
            .fold(initial, |state, (block, framing)| {
                self.round_fn.process(state, block, &framing)
            })
    }
}
