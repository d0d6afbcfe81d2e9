//! The four AES round transformations over the column-major state.

use crate::block::{xor_in_place, Block};
use crate::gf::xtime;
use crate::sbox::sbox;

/// SubBytes: S-box substitution of every state byte.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// ShiftRows: row `r` of the 4x4 state rotates left by `r` positions.
///
/// Row `r` occupies indices `r, r + 4, r + 8, r + 12` of the flat state.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let mut shifted = [0u8; 16];
    for row in 0..4 {
        for col in 0..4 {
            shifted[col * 4 + row] = state[((col + row) % 4) * 4 + row];
        }
    }
    *state = shifted;
}

// One column through the MDS matrix [2 3 1 1; 1 2 3 1; 1 1 2 3; 3 1 1 2],
// with multiplication by 3 written as xtime(v) ^ v.
fn mix_column(col: &mut [u8; 4]) {
    let [a, b, c, d] = *col;
    col[0] = xtime(a) ^ (xtime(b) ^ b) ^ c ^ d;
    col[1] = a ^ xtime(b) ^ (xtime(c) ^ c) ^ d;
    col[2] = a ^ b ^ xtime(c) ^ (xtime(d) ^ d);
    col[3] = (xtime(a) ^ a) ^ b ^ c ^ xtime(d);
}

/// MixColumns: multiplies each state column by the fixed MDS matrix.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for chunk in state.chunks_exact_mut(4) {
        let mut col = [chunk[0], chunk[1], chunk[2], chunk[3]];
        mix_column(&mut col);
        chunk.copy_from_slice(&col);
    }
}

/// AddRoundKey: XORs the round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
