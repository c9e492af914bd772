//! Bank-level bit arithmetic shared by every storage width.
//!
//! Banks are `u8`; bit `pos` lives in bank `pos / 8` at offset `pos % 8`.

/// Width of one storage bank in bits.
pub const BANK_BITS: usize = u8::BITS as usize;

/// Number of banks needed to hold `bits` bits.
///
/// ```
/// use typed_flags::bank_count;
///
/// assert_eq!(bank_count(0), 0);
/// assert_eq!(bank_count(8), 1);
/// assert_eq!(bank_count(9), 2);
/// ```
pub const fn bank_count(bits: usize) -> usize {
    bits.div_ceil(BANK_BITS)
}

/// Mask of the bits of the last bank that belong to a `bits`-wide set.
pub const fn last_bank_mask(bits: usize) -> u8 {
    match bits % BANK_BITS {
        0 => u8::MAX,
        rem => !(u8::MAX << rem),
    }
}

#[inline]
pub fn get_bit(banks: &[u8], pos: usize) -> bool {
    (banks[pos / BANK_BITS] >> (pos % BANK_BITS)) & 1 == 1
}

#[inline]
pub fn set_bit(banks: &mut [u8], pos: usize, value: bool) {
    let mask = 1u8 << (pos % BANK_BITS);
    if value {
        banks[pos / BANK_BITS] |= mask;
    } else {
        banks[pos / BANK_BITS] &= !mask;
    }
}

/// Clears the padding bits above `bits` in the last bank.
#[inline]
pub fn mask_padding(banks: &mut [u8], bits: usize) {
    if let Some(last) = banks.last_mut() {
        *last &= last_bank_mask(bits);
    }
}

#[inline]
pub fn count_ones(banks: &[u8]) -> usize {
    banks.iter().map(|b| b.count_ones() as usize).sum()
}
