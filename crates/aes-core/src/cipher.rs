//! AES-128 key schedule and single-block encryption.

use crate::block::{block_from_slice, Block};
use crate::error::CipherError;
use crate::gf::xtime;
use crate::key::{Aes128Key, RoundKeys};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::sbox::sbox;

type Word = [u8; 4];

fn sub_word(word: Word) -> Word {
    [sbox(word[0]), sbox(word[1]), sbox(word[2]), sbox(word[3])]
}

fn rot_word(word: Word) -> Word {
    [word[1], word[2], word[3], word[0]]
}

fn xor_words(a: Word, b: Word) -> Word {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// Expands a 128-bit key into the 11 round keys.
///
/// Word `i` is word `i - 4` XOR the previous word, where every fourth
/// word first passes through RotWord, SubWord, and the round constant.
/// The Rcon sequence is produced by GF(2^8) doubling from 0x01.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut words = [[0u8; 4]; 44];
    for (word, chunk) in words.iter_mut().zip(key.0.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    let mut rcon = 0x01u8;
    for i in 4..44 {
        let mut temp = words[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= rcon;
            rcon = xtime(rcon);
        }
        words[i] = xor_words(words[i - 4], temp);
    }

    let mut round_keys = [[0u8; 16]; 11];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for (word_idx, word) in words[round * 4..round * 4 + 4].iter().enumerate() {
            round_key[word_idx * 4..word_idx * 4 + 4].copy_from_slice(word);
        }
    }
    RoundKeys::new(round_keys)
}

/// Encrypts a single 16-byte block under `key`.
///
/// Expands a fresh key schedule for the call; nothing is cached between
/// invocations. Deterministic and free of side effects.
pub fn encrypt_block(key: &Aes128Key, plaintext: &Block) -> Block {
    let round_keys = expand_key(key);
    let mut state = *plaintext;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..10 {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    // Final round omits MixColumns.
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(10));

    state
}

/// Validating entry point over byte slices.
///
/// Both `key` and `plaintext` must be exactly 16 bytes; anything else is
/// rejected before any cipher work happens.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Block, CipherError> {
    let key = Aes128Key::try_from(key)?;
    let block = block_from_slice(plaintext)?;
    Ok(encrypt_block(&key, &block))
}
