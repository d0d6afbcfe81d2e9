//! GF(2^8) arithmetic with the AES reduction polynomial x^8+x^4+x^3+x+1.

/// Doubles `a` in GF(2^8), reducing by 0x1b when the high bit falls off.
#[inline]
pub const fn xtime(a: u8) -> u8 {
    let doubled = a << 1;
    if a & 0x80 != 0 {
        doubled ^ 0x1b
    } else {
        doubled
    }
}

/// Multiplies `a` by `b` in GF(2^8) by shift-and-reduce.
pub const fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut acc = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            acc ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    acc
}
