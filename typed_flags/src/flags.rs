//! Type-safe flag container.
//!
//! # Examples
//!
//! ```rust
//! use typed_flags::{Flag, FlagValue, TypedFlags};
//!
//! #[derive(Flag)] struct EatsMeat;
//! #[derive(Flag)] struct EatsGrass;
//! #[derive(Flag)] struct HasTail;
//!
//! type Animal = TypedFlags<(EatsMeat, EatsGrass, HasTail)>;
//!
//! let mut wolf = Animal::new();
//! wolf.set::<(EatsMeat, HasTail)>(true);
//!
//! assert!(wolf.test::<EatsMeat>());
//! assert!(wolf.none_of::<EatsGrass>());
//! assert_eq!(wolf.to_integral::<u8>(), 0b101);
//! assert_eq!(wolf.to_string(), "101");
//!
//! let rabbit: Animal = "110".parse()?;
//! assert_eq!(wolf & rabbit, Animal::from_values(FlagValue::<HasTail>::new(true)));
//! # Ok::<(), typed_flags::FlagsError>(())
//! ```
//!
//! Sets declared from different flag lists do not mix:
//!
//! ```compile_fail
//! use typed_flags::{Flag, TypedFlags};
//!
//! #[derive(Flag)] struct EatsMeat;
//! #[derive(Flag)] struct HasTail;
//! #[derive(Flag)] struct BuildsSpaceships;
//!
//! let animal = TypedFlags::<(EatsMeat, HasTail)>::new();
//! let human = TypedFlags::<(EatsMeat, BuildsSpaceships)>::new();
//! let _ = animal | human;
//! ```
//!
//! Nor does a flag outside the declared list:
//!
//! ```compile_fail
//! use typed_flags::{Flag, TypedFlags};
//!
//! #[derive(Flag)] struct EatsMeat;
//! #[derive(Flag)] struct BuildsSpaceships;
//!
//! let mut animal = TypedFlags::<(EatsMeat,)>::new();
//! animal.set::<BuildsSpaceships>(true);
//! ```
//!
//! And integers too narrow for the set are refused:
//!
//! ```compile_fail
//! use typed_flags::{Flag, TypedFlags};
//!
//! #[derive(Flag)] struct F1; #[derive(Flag)] struct F2; #[derive(Flag)] struct F3;
//! #[derive(Flag)] struct F4; #[derive(Flag)] struct F5; #[derive(Flag)] struct F6;
//! #[derive(Flag)] struct F7; #[derive(Flag)] struct F8; #[derive(Flag)] struct F9;
//!
//! let flags = TypedFlags::<(F1, F2, F3, F4, F5, F6, F7, F8, F9)>::new();
//! let _ = flags.to_integral::<u8>();
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use core::str::FromStr;

#[cfg(feature = "alloc")]
use alloc::string::String;

use crate::identity::{Flag, Identity, resolver};
use crate::layout::{FlagList, Layout};
use crate::storage::{BitStorage, Integral};
use crate::error::{FlagsError, Result};
use crate::value::ValueList;

/// A fixed set of boolean flags addressed by the types of layout `L`.
///
/// Plain value: copying it copies the bits, and no two sets share state.
pub struct TypedFlags<L: Layout> {
    storage: L::Storage,
    _layout: PhantomData<fn() -> L>,
}

impl<L: Layout> TypedFlags<L> {
    /// Number of flags (bits) in the set.
    pub const LEN: usize = <L::Storage as BitStorage>::BITS;

    #[inline]
    fn from_storage(storage: L::Storage) -> Self {
        let () = L::CHECKED;
        Self {
            storage,
            _layout: PhantomData,
        }
    }

    /// Creates a set with every flag cleared.
    pub fn new() -> Self {
        Self::from_storage(L::Storage::zeroed())
    }

    /// Creates a set from flag values; flags not mentioned stay cleared.
    pub fn from_values<V: ValueList>(values: V) -> Self {
        let mut flags = Self::new();
        values.store(&mut flags);
        flags
    }

    /// Loads the low bits of `value`. Bit 0 is the first flag of the layout;
    /// bits above the set are dropped.
    pub fn from_integral<T: Integral>(value: T) -> Self {
        Self::from_storage(L::Storage::from_integral(value))
    }

    /// Loads flags from characters. The rightmost of the first `len`
    /// characters (all when `None`) is bit 0.
    ///
    /// # Errors
    ///
    /// [`FlagsError::InvalidCharacter`] when a character that would be read
    /// is neither `zero` nor `one`.
    pub fn parse_with(src: &str, len: Option<usize>, zero: char, one: char) -> Result<Self> {
        L::Storage::parse(src, len, zero, one).map(Self::from_storage)
    }

    /// Bit position of flag `T`. Fails to compile when `T` is not part of
    /// the layout.
    pub const fn index<T: Flag>() -> usize {
        const {
            let () = L::CHECKED;
            resolver::expect_position(T::ID, L::ENTRIES)
        }
    }

    /// Bit positions of selection `S`, resolved while compiling.
    fn positions<S: FlagList>() -> &'static [usize] {
        const { &resolver::select(S::IDS, L::ENTRIES) }.as_slice()
    }

    #[inline]
    pub fn test<T: Flag>(&self) -> bool {
        self.storage.get_bit(Self::index::<T>())
    }

    /// Sets the selected flags to `value`; `()` selects every flag.
    pub fn set<S: FlagList>(&mut self, value: bool) {
        if S::IDS.is_empty() {
            if value {
                self.storage.set_all();
            } else {
                self.storage.reset_all();
            }
            return;
        }
        for &pos in Self::positions::<S>() {
            self.storage.set_bit(pos, value);
        }
    }

    pub fn reset<S: FlagList>(&mut self) {
        self.set::<S>(false);
    }

    pub fn flip<S: FlagList>(&mut self) {
        if S::IDS.is_empty() {
            self.storage.flip_all();
            return;
        }
        for &pos in Self::positions::<S>() {
            let bit = self.storage.get_bit(pos);
            self.storage.set_bit(pos, !bit);
        }
    }

    pub fn set_all(&mut self) {
        self.storage.set_all();
    }

    pub fn reset_all(&mut self) {
        self.storage.reset_all();
    }

    pub fn flip_all(&mut self) {
        self.storage.flip_all();
    }

    /// True when every selected flag is clear; `()` checks the whole set.
    pub fn none_of<S: FlagList>(&self) -> bool {
        if S::IDS.is_empty() {
            return self.storage.none();
        }
        Self::positions::<S>().iter().all(|&pos| !self.storage.get_bit(pos))
    }

    /// True when at least one selected flag is set; `()` checks the whole set.
    pub fn any_of<S: FlagList>(&self) -> bool {
        !self.none_of::<S>()
    }

    /// True when every selected flag is set; `()` checks the whole set.
    pub fn all_of<S: FlagList>(&self) -> bool {
        if S::IDS.is_empty() {
            return self.storage.all();
        }
        Self::positions::<S>().iter().all(|&pos| self.storage.get_bit(pos))
    }

    pub fn none(&self) -> bool {
        self.storage.none()
    }

    pub fn any(&self) -> bool {
        self.storage.any()
    }

    /// Every flag set. An empty set satisfies this vacuously.
    pub fn all(&self) -> bool {
        self.storage.all()
    }

    pub fn set_values<V: ValueList>(&mut self, values: V) {
        values.store(self);
    }

    /// Copies the current bit of each value's flag into the value.
    pub fn get_values<V: ValueList>(&self, values: &mut V) {
        values.load(self);
    }

    pub const fn size(&self) -> usize {
        Self::LEN
    }

    /// Number of set bits.
    pub fn count(&self) -> usize {
        self.storage.count_ones()
    }

    /// Identities of the set flags, lowest bit first.
    pub fn iter(&self) -> Iter<'_, L> {
        Iter {
            flags: self,
            pos: 0,
        }
    }

    /// Fails to compile when `T` has fewer bits than the set.
    pub fn to_integral<T: Integral>(&self) -> T {
        self.storage.to_integral()
    }

    /// Highest bit first, so the last character is the first flag.
    #[cfg(feature = "alloc")]
    pub fn to_string_with(&self, zero: char, one: char) -> String {
        let mut out = String::with_capacity(Self::LEN);
        // writing into a String cannot fail
        let _ = self.storage.write_chars(&mut out, zero, one);
        out
    }
}

/// Iterator over the identities of the set flags of a [`TypedFlags`].
pub struct Iter<'a, L: Layout> {
    flags: &'a TypedFlags<L>,
    pos: usize,
}

impl<L: Layout> Iterator for Iter<'_, L> {
    type Item = Identity;

    fn next(&mut self) -> Option<Identity> {
        while self.pos < TypedFlags::<L>::LEN {
            let pos = self.pos;
            self.pos += 1;
            if !self.flags.storage.get_bit(pos) {
                continue;
            }
            if let Some(entry) = L::ENTRIES.iter().find(|e| e.position == pos) {
                return Some(entry.id);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(TypedFlags::<L>::LEN - self.pos))
    }
}

impl<'a, L: Layout> IntoIterator for &'a TypedFlags<L> {
    type Item = Identity;
    type IntoIter = Iter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L: Layout> Clone for TypedFlags<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: Layout> Copy for TypedFlags<L> {}

impl<L: Layout> Default for TypedFlags<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Layout> PartialEq for TypedFlags<L> {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<L: Layout> Eq for TypedFlags<L> {}

impl<L: Layout> Hash for TypedFlags<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.storage.hash(state);
    }
}

impl<L: Layout> FromStr for TypedFlags<L> {
    type Err = FlagsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, None, '0', '1')
    }
}

impl<L: Layout> fmt::Display for TypedFlags<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.storage.write_chars(f, '0', '1')
    }
}

impl<L: Layout> fmt::Binary for TypedFlags<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        self.storage.write_chars(f, '0', '1')
    }
}

impl<L: Layout> fmt::Debug for TypedFlags<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedFlags({} ", self)?;
        f.debug_set().entries(self.iter()).finish()?;
        f.write_str(")")
    }
}

impl<L: Layout> BitAndAssign for TypedFlags<L> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.storage.bitwise(&rhs.storage, |x, y| x & y);
    }
}

impl<L: Layout> BitOrAssign for TypedFlags<L> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.storage.bitwise(&rhs.storage, |x, y| x | y);
    }
}

impl<L: Layout> BitXorAssign for TypedFlags<L> {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.storage.bitwise(&rhs.storage, |x, y| x ^ y);
    }
}

impl<L: Layout> BitAnd for TypedFlags<L> {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self {
        self &= rhs;
        self
    }
}

impl<L: Layout> BitOr for TypedFlags<L> {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        self |= rhs;
        self
    }
}

impl<L: Layout> BitXor for TypedFlags<L> {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self {
        self ^= rhs;
        self
    }
}

impl<L: Layout> Not for TypedFlags<L> {
    type Output = Self;

    fn not(mut self) -> Self {
        self.storage.flip_all();
        self
    }
}
