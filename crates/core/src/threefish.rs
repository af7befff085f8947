//! Threefish keyed mix network
//!
//! A tweakable block cipher over eight words. Every fourth elementary
//! round injects a subkey drawn from the nine-word key schedule, two
//! tweak words and the injection counter; each elementary round then
//! applies four add-rotate-xor MIX operations over a fixed word pairing.
//!
//! The network is generic over [`Threefish`], which supplies the word
//! width, rotation table, tweak schedule and configuration schema.

use crate::params::{KEY_PARITY, KEY_WORDS, ROUNDS, ROUNDS_PER_SUBKEY, STATE_WORDS};
use crate::tweak::Tweak;
use crate::word::Word;

/// MIX pairings `(a, b)` for elementary round `d mod 4`
///
/// The word permutation between rounds is folded into these indices.
const PAIRS: [[(usize, usize); 4]; ROUNDS_PER_SUBKEY] = [
    [(0, 1), (2, 3), (4, 5), (6, 7)],
    [(2, 1), (4, 7), (6, 5), (0, 3)],
    [(4, 1), (6, 3), (0, 5), (2, 7)],
    [(6, 1), (0, 7), (2, 5), (4, 3)],
];

/// A Threefish instance: word width and its fixed constants
pub trait Threefish: Copy + Send + Sync + 'static {
    type Word: Word;

    /// Tweak words injected by the key schedule (3 or 5 words)
    type TweakWords: AsRef<[Self::Word]>;

    /// Rotation constants indexed by `[round mod 8][mix index]`
    const ROTATIONS: [[u32; 4]; 8];

    /// Configuration schema identifier
    const SCHEMA: [u8; 4];

    /// Slice a tweak into this width's tweak schedule
    fn tweak_words(tweak: &Tweak) -> Self::TweakWords;

    /// Bytes per 8-word block
    fn block_bytes() -> usize {
        STATE_WORDS * <Self::Word as Word>::BYTES
    }
}

/// 64-bit Threefish-512 (Skein v1.2 constants)
#[derive(Debug, Clone, Copy, Default)]
pub struct Threefish512;

impl Threefish for Threefish512 {
    type Word = u64;
    type TweakWords = [u64; 3];

    const ROTATIONS: [[u32; 4]; 8] = [
        [46, 36, 19, 37],
        [33, 27, 14, 42],
        [17, 49, 36, 39],
        [44, 9, 54, 56],
        [39, 30, 34, 24],
        [13, 50, 10, 17],
        [25, 29, 39, 43],
        [8, 35, 56, 22],
    ];

    const SCHEMA: [u8; 4] = *b"SHA3";

    #[inline(always)]
    fn tweak_words(tweak: &Tweak) -> [u64; 3] {
        tweak.words64()
    }
}

/// 32-bit Threefish over eight `u32` words
///
/// Rotation constants come from the digits of pi mapped through
/// `2 + (n mod 28)`, so 0, 1 and 31 never occur.
#[derive(Debug, Clone, Copy, Default)]
pub struct Threefish256h;

impl Threefish for Threefish256h {
    type Word = u32;
    type TweakWords = [u32; 5];

    const ROTATIONS: [[u32; 4]; 8] = [
        [5, 16, 17, 10],
        [11, 9, 7, 25],
        [6, 12, 20, 28],
        [17, 12, 6, 25],
        [24, 2, 2, 21],
        [17, 15, 13, 11],
        [21, 12, 4, 22],
        [15, 23, 18, 5],
    ];

    const SCHEMA: [u8; 4] = *b"hSkn";

    #[inline(always)]
    fn tweak_words(tweak: &Tweak) -> [u32; 5] {
        tweak.words32()
    }
}

/// Extend a chaining state into the nine-word key schedule
#[inline(always)]
pub fn key_schedule<W: Word>(key: &[W; STATE_WORDS]) -> [W; KEY_WORDS] {
    let mut schedule = [W::from_u64(KEY_PARITY); KEY_WORDS];
    schedule[..STATE_WORDS].copy_from_slice(key);
    for &k in key {
        schedule[STATE_WORDS] ^= k;
    }
    schedule
}

/// Encrypt one block under `key` and `tweak`
pub fn encrypt<T: Threefish>(
    key: &[T::Word; STATE_WORDS],
    tweak: &Tweak,
    block: &[T::Word; STATE_WORDS],
) -> [T::Word; STATE_WORDS] {
    let schedule = key_schedule(key);
    let tweak_words = T::tweak_words(tweak);
    let tweak_words = tweak_words.as_ref();

    let mut x = *block;
    for round in 0..ROUNDS {
        if round % ROUNDS_PER_SUBKEY == 0 {
            inject_subkey(&mut x, &schedule, tweak_words, round / ROUNDS_PER_SUBKEY);
        }
        mix_round(&mut x, &T::ROTATIONS[round % 8], round % ROUNDS_PER_SUBKEY);
    }
    inject_subkey(&mut x, &schedule, tweak_words, ROUNDS / ROUNDS_PER_SUBKEY);
    x
}

/// Add subkey `s` into the state
#[inline(always)]
fn inject_subkey<W: Word>(x: &mut [W; STATE_WORDS], key: &[W; KEY_WORDS], tweak: &[W], s: usize) {
    for (i, word) in x.iter_mut().enumerate() {
        *word = word.wrapping_add(key[(s + i) % KEY_WORDS]);
    }
    x[5] = x[5].wrapping_add(tweak[s % tweak.len()]);
    x[6] = x[6].wrapping_add(tweak[(s + 1) % tweak.len()]);
    x[7] = x[7].wrapping_add(W::from_u64(s as u64));
}

/// One elementary round: four MIX operations
#[inline(always)]
fn mix_round<W: Word>(x: &mut [W; STATE_WORDS], rotations: &[u32; 4], pairing: usize) {
    for (&(a, b), &r) in PAIRS[pairing].iter().zip(rotations) {
        x[a] = x[a].wrapping_add(x[b]);
        x[b] = x[b].rotate_left(r) ^ x[a];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TYPE_MESSAGE;

    #[test]
    fn test_key_schedule_parity() {
        let key = [1u64, 2, 3, 4, 5, 6, 7, 8];
        let schedule = key_schedule(&key);
        assert_eq!(&schedule[..8], &key);
        assert_eq!(schedule[8], KEY_PARITY ^ 1 ^ 2 ^ 3 ^ 4 ^ 5 ^ 6 ^ 7 ^ 8);

        let zero = key_schedule(&[0u32; 8]);
        assert_eq!(zero[8], 0x5555_5555);
    }

    #[test]
    fn test_encrypt_deterministic() {
        let key = [0x0123_4567_89ab_cdefu64; 8];
        let block = [7u64; 8];
        let tweak = Tweak::new(TYPE_MESSAGE, 64, true, true);

        let c1 = encrypt::<Threefish512>(&key, &tweak, &block);
        let c2 = encrypt::<Threefish512>(&key, &tweak, &block);
        assert_eq!(c1, c2);
        assert_ne!(c1, block);
    }

    #[test]
    fn test_tweak_changes_ciphertext() {
        let key = [0u32; 8];
        let block = [0u32; 8];
        let a = encrypt::<Threefish256h>(&key, &Tweak::new(TYPE_MESSAGE, 32, true, true), &block);
        let b = encrypt::<Threefish256h>(&key, &Tweak::new(TYPE_MESSAGE, 32, true, false), &block);
        assert_ne!(a, b);
    }

    #[test]
    fn test_mix_round_is_invertible() {
        // Undo the MIX pairs in reverse order and recover the input.
        let input = [1u64, 2, 3, 4, 5, 6, 7, 8];
        let rotations = Threefish512::ROTATIONS[0];
        let mut x = input;
        mix_round(&mut x, &rotations, 0);
        assert_ne!(x, input);

        for (&(a, b), &r) in PAIRS[0].iter().zip(&rotations).rev() {
            x[b] = (x[b] ^ x[a]).rotate_right(r);
            x[a] = x[a].wrapping_sub(x[b]);
        }
        assert_eq!(x, input);
    }

    #[test]
    fn test_block_bytes() {
        assert_eq!(Threefish512::block_bytes(), 64);
        assert_eq!(Threefish256h::block_bytes(), 32);
    }
}
