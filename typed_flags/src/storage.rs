//! Fixed-width packed bit storage.
//!
//! # Examples
//!
//! ```rust
//! use typed_flags::{BitStorage, FlagsStorage, bank_count};
//!
//! type Bits10 = FlagsStorage<10, { bank_count(10) }>;
//!
//! let mut bits = Bits10::from_integral(0b11_0000_0101u16);
//! assert!(bits.get_bit(9));
//! bits.flip_all();
//! assert_eq!(bits.to_integral::<u16>(), 0b00_1111_1010);
//! assert_eq!(core::mem::size_of::<Bits10>(), 2);
//! ```

use core::fmt;
use core::hash::Hash;

use bytemuck::Pod;

use crate::bit_ops::{self, bank_count};
use crate::error::{FlagsError, Result};

mod sealed {
    pub trait Sealed {}
}

/// Primitive integers a flag set converts to and from.
///
/// Bit `i` of the set is bit `i` of the integer regardless of the target's
/// byte order.
pub trait Integral: Pod + sealed::Sealed {
    const BITS: u32;

    fn to_little_endian(self) -> Self;

    fn from_little_endian(self) -> Self;
}

macro_rules! impl_integral {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Integral for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn to_little_endian(self) -> Self {
                <$t>::to_le(self)
            }

            #[inline]
            fn from_little_endian(self) -> Self {
                <$t>::from_le(self)
            }
        }
    )*};
}

impl_integral!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Bit-level state of a flag set.
///
/// Padding bits above [`BitStorage::BITS`] stay zero after every operation.
pub trait BitStorage: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Number of addressable bits.
    const BITS: usize;

    /// All bits clear.
    fn zeroed() -> Self;

    /// Low bits of `value`; wider integers are truncated, narrower ones
    /// zero-extended.
    fn from_integral<T: Integral>(value: T) -> Self;

    /// Reads the rightmost `BITS` characters of the first `len` characters
    /// of `src` (all of them when `len` is `None`). The rightmost character
    /// is bit 0.
    fn parse(src: &str, len: Option<usize>, zero: char, one: char) -> Result<Self>;

    /// `pos` must be below `BITS`.
    fn get_bit(&self, pos: usize) -> bool;

    /// `pos` must be below `BITS`.
    fn set_bit(&mut self, pos: usize, value: bool);

    fn set_all(&mut self);

    fn reset_all(&mut self);

    fn flip_all(&mut self);

    fn none(&self) -> bool;

    fn any(&self) -> bool {
        !self.none()
    }

    /// Vacuously true for a zero-width set.
    fn all(&self) -> bool;

    fn count_ones(&self) -> usize;

    /// Fails to compile when `T` is narrower than `BITS`.
    fn to_integral<T: Integral>(&self) -> T;

    /// Writes bit `BITS - 1` first and bit 0 last.
    fn write_chars<W: fmt::Write>(&self, out: &mut W, zero: char, one: char) -> fmt::Result;

    /// Combines bank by bank. `op` must map `(0, 0)` to `0`.
    fn bitwise(&mut self, other: &Self, op: impl Fn(u8, u8) -> u8);

    /// Raw banks, bit 0 in the low bit of the first byte.
    fn as_bytes(&self) -> &[u8];
}

/// `N` bits packed into `B` bytes. `B` must be `bank_count(N)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagsStorage<const N: usize, const B: usize> {
    banks: [u8; B],
}

impl<const N: usize, const B: usize> FlagsStorage<N, B> {
    /// Creates an all-zero storage.
    pub const fn new() -> Self {
        const { assert!(B == bank_count(N), "bank count does not match bit width") };
        Self { banks: [0; B] }
    }
}

impl<const N: usize, const B: usize> Default for FlagsStorage<N, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const B: usize> BitStorage for FlagsStorage<N, B> {
    const BITS: usize = N;

    #[inline]
    fn zeroed() -> Self {
        Self::new()
    }

    fn from_integral<T: Integral>(value: T) -> Self {
        let mut storage = Self::new();
        let value = value.to_little_endian();
        let bytes = bytemuck::bytes_of(&value);
        let len = bytes.len().min(B);
        storage.banks[..len].copy_from_slice(&bytes[..len]);
        bit_ops::mask_padding(&mut storage.banks, N);
        storage
    }

    fn parse(src: &str, len: Option<usize>, zero: char, one: char) -> Result<Self> {
        let src = match len {
            Some(len) => src
                .char_indices()
                .nth(len)
                .map_or(src, |(end, _)| &src[..end]),
            None => src,
        };
        let total = src.chars().count();

        #[cfg(feature = "tracing")]
        tracing::trace!(bits = N, chars = total, "parsing flag string");

        let mut storage = Self::new();
        for (pos, c) in src.chars().rev().take(N).enumerate() {
            if c == one {
                bit_ops::set_bit(&mut storage.banks, pos, true);
            } else if c != zero {
                let index = total - 1 - pos;
                #[cfg(feature = "tracing")]
                tracing::debug!(character = ?c, index, "rejected flag string");
                return Err(FlagsError::InvalidCharacter {
                    character: c,
                    index,
                });
            }
        }
        Ok(storage)
    }

    #[inline]
    fn get_bit(&self, pos: usize) -> bool {
        debug_assert!(pos < N, "bit {} out of range for width {}", pos, N);
        bit_ops::get_bit(&self.banks, pos)
    }

    #[inline]
    fn set_bit(&mut self, pos: usize, value: bool) {
        debug_assert!(pos < N, "bit {} out of range for width {}", pos, N);
        bit_ops::set_bit(&mut self.banks, pos, value);
    }

    fn set_all(&mut self) {
        self.banks = [u8::MAX; B];
        bit_ops::mask_padding(&mut self.banks, N);
    }

    fn reset_all(&mut self) {
        self.banks = [0; B];
    }

    fn flip_all(&mut self) {
        for bank in &mut self.banks {
            *bank = !*bank;
        }
        bit_ops::mask_padding(&mut self.banks, N);
    }

    fn none(&self) -> bool {
        self.banks.iter().all(|&bank| bank == 0)
    }

    fn all(&self) -> bool {
        match self.banks.split_last() {
            None => true,
            Some((last, rest)) => {
                rest.iter().all(|&bank| bank == u8::MAX) && *last == bit_ops::last_bank_mask(N)
            }
        }
    }

    fn count_ones(&self) -> usize {
        bit_ops::count_ones(&self.banks)
    }

    fn to_integral<T: Integral>(&self) -> T {
        const {
            assert!(
                T::BITS as usize >= N,
                "integral type is too narrow for this flag set"
            )
        };
        let mut out = T::zeroed();
        bytemuck::bytes_of_mut(&mut out)[..B].copy_from_slice(&self.banks);
        out.from_little_endian()
    }

    fn write_chars<W: fmt::Write>(&self, out: &mut W, zero: char, one: char) -> fmt::Result {
        (0..N)
            .rev()
            .try_for_each(|pos| out.write_char(if self.get_bit(pos) { one } else { zero }))
    }

    fn bitwise(&mut self, other: &Self, op: impl Fn(u8, u8) -> u8) {
        for (lhs, rhs) in self.banks.iter_mut().zip(other.banks.iter()) {
            *lhs = op(*lhs, *rhs);
        }
    }

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        &self.banks
    }
}

impl<const N: usize, const B: usize> fmt::Debug for FlagsStorage<N, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FlagsStorage(")?;
        self.write_chars(f, '0', '1')?;
        f.write_str(")")
    }
}
