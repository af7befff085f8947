//! Skein Algorithm Parameters
//!
//! Type tags, round counts and configuration layout shared by both
//! word widths.

/// Words in a chaining state and in a cipher block
pub const STATE_WORDS: usize = 8;

/// Words in the extended key schedule (state plus parity word)
pub const KEY_WORDS: usize = STATE_WORDS + 1;

/// Elementary Threefish rounds per block
pub const ROUNDS: usize = 72;

/// Elementary rounds between subkey injections
pub const ROUNDS_PER_SUBKEY: usize = 4;

/// Subkey injections per block (one every four rounds plus the final one)
pub const SUBKEYS: usize = ROUNDS / ROUNDS_PER_SUBKEY + 1;

/// Seed of the key-schedule parity word, truncated to the word width
pub const KEY_PARITY: u64 = 0x5555_5555_5555_5555;

/// Messages are sequences of 16-bit code units
pub const INPUT_UNIT_BYTES: usize = 2;

/// Configuration block size in bytes
pub const CONFIG_BYTES: usize = 32;

/// Configuration format version
pub const CONFIG_VERSION: u16 = 1;

/// Bytes of the output-stage counter fed to the final UBI call
pub const OUTPUT_COUNTER_BYTES: usize = 8;

/// UBI type tag: secret key
pub const TYPE_KEY: u8 = 0;

/// UBI type tag: configuration block
pub const TYPE_CONFIG: u8 = 4;

/// UBI type tag: personalization string
pub const TYPE_PERSONALIZATION: u8 = 8;

/// UBI type tag: public key
pub const TYPE_PUBLIC_KEY: u8 = 12;

/// UBI type tag: key identifier
pub const TYPE_KEY_ID: u8 = 16;

/// UBI type tag: nonce
pub const TYPE_NONCE: u8 = 20;

/// UBI type tag: message
pub const TYPE_MESSAGE: u8 = 48;

/// UBI type tag: output stage
pub const TYPE_OUTPUT: u8 = 63;

/// Largest tag that fits the 6-bit type field
pub const TYPE_MAX: u8 = 63;
