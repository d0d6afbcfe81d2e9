//! The AES S-box, derived rather than transcribed.
//!
//! The table is built at compile time from the GF(2^8) multiplicative
//! inverse followed by the standard affine transform, and pinned to the
//! published FIPS-197 table by spot-value tests.

use crate::gf;

const SBOX: [u8; 256] = build_sbox();

/// Forward S-box lookup.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0usize;
    while x < 256 {
        table[x] = affine(invert(x as u8));
        x += 1;
    }
    table
}

// Multiplicative inverse in GF(2^8); zero maps to zero per FIPS-197.
const fn invert(a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let mut candidate = 1u8;
    loop {
        if gf::mul(a, candidate) == 1 {
            return candidate;
        }
        candidate = candidate.wrapping_add(1);
    }
}

// b XOR its four left rotations XOR 0x63.
const fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ 0x63
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_published_spot_values() {
        assert_eq!(sbox(0x00), 0x63);
        assert_eq!(sbox(0x01), 0x7c);
        assert_eq!(sbox(0x53), 0xed);
        assert_eq!(sbox(0xc9), 0xdd);
        assert_eq!(sbox(0xff), 0x16);
    }

    #[test]
    fn is_a_permutation() {
        let mut seen = [false; 256];
        for x in 0..=255u8 {
            let y = sbox(x) as usize;
            assert!(!seen[y], "duplicate output {y:#04x}");
            seen[y] = true;
        }
    }

    #[test]
    fn has_no_fixed_points() {
        for x in 0..=255u8 {
            assert_ne!(sbox(x), x);
            assert_ne!(sbox(x), x ^ 0xff);
        }
    }
}
