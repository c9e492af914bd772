//! Declared flag sets and flag selections.
//!
//! A tuple of flag types is a layout whose K-th element owns bit K:
//!
//! ```rust
//! use typed_flags::{Flag, Layout, TypedFlags};
//!
//! #[derive(Flag)] struct EatsMeat;
//! #[derive(Flag)] struct EatsGrass;
//! #[derive(Flag)] struct HasTail;
//!
//! type Animal = TypedFlags<(EatsMeat, EatsGrass, HasTail)>;
//!
//! assert_eq!(Animal::index::<EatsMeat>(), 0);
//! assert_eq!(Animal::index::<HasTail>(), 2);
//! assert_eq!(<(EatsMeat, EatsGrass, HasTail) as Layout>::ENTRIES.len(), 3);
//! ```
//!
//! Repeating a flag in one layout is rejected when the set is first used:
//!
//! ```compile_fail
//! use typed_flags::{Flag, TypedFlags};
//!
//! #[derive(Flag)] struct EatsMeat;
//!
//! let _ = TypedFlags::<(EatsMeat, EatsMeat)>::new();
//! ```
//!
//! [`bit_layout!`](crate::bit_layout) declares a layout with explicit bit
//! positions inside a fixed width.

use crate::identity::{Entry, Flag, Identity, resolver};
use crate::storage::{BitStorage, FlagsStorage};
use crate::bit_ops::bank_count;

/// An ordered, duplicate-free mapping from flag identities to bit positions.
pub trait Layout: 'static {
    type Storage: BitStorage;

    const ENTRIES: &'static [Entry];

    /// Evaluates to `()` for a valid layout and fails compilation otherwise.
    #[doc(hidden)]
    const CHECKED: () =
        resolver::expect_valid(Self::ENTRIES, <Self::Storage as BitStorage>::BITS);
}

/// Flags named by a bulk operation.
///
/// Any single flag type, or a tuple of them. The empty tuple selects every
/// bit of the set.
pub trait FlagList: 'static {
    const IDS: &'static [Identity];
}

impl<T: Flag> FlagList for T {
    const IDS: &'static [Identity] = &[T::ID];
}

macro_rules! impl_tuples {
    ($($len:literal => ($($name:ident : $pos:tt),*);)*) => {$(
        impl<$($name: Flag),*> Layout for ($($name,)*) {
            type Storage = FlagsStorage<$len, { bank_count($len) }>;

            const ENTRIES: &'static [Entry] = &[$(Entry::new($name::ID, $pos)),*];
        }

        impl<$($name: Flag),*> FlagList for ($($name,)*) {
            const IDS: &'static [Identity] = &[$($name::ID),*];
        }
    )*};
}

impl_tuples! {
    0 => ();
    1 => (A0: 0);
    2 => (A0: 0, A1: 1);
    3 => (A0: 0, A1: 1, A2: 2);
    4 => (A0: 0, A1: 1, A2: 2, A3: 3);
    5 => (A0: 0, A1: 1, A2: 2, A3: 3, A4: 4);
    6 => (A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5);
    7 => (A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5, A6: 6);
    8 => (A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5, A6: 6, A7: 7);
    9 => (A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5, A6: 6, A7: 7, A8: 8);
    10 => (A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5, A6: 6, A7: 7, A8: 8, A9: 9);
    11 => (A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5, A6: 6, A7: 7, A8: 8, A9: 9, A10: 10);
    12 => (A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5, A6: 6, A7: 7, A8: 8, A9: 9, A10: 10,
           A11: 11);
    13 => (A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5, A6: 6, A7: 7, A8: 8, A9: 9, A10: 10,
           A11: 11, A12: 12);
    14 => (A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5, A6: 6, A7: 7, A8: 8, A9: 9, A10: 10,
           A11: 11, A12: 12, A13: 13);
    15 => (A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5, A6: 6, A7: 7, A8: 8, A9: 9, A10: 10,
           A11: 11, A12: 12, A13: 13, A14: 14);
    16 => (A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5, A6: 6, A7: 7, A8: 8, A9: 9, A10: 10,
           A11: 11, A12: 12, A13: 13, A14: 14, A15: 15);
}

/// Declares a layout of fixed bit width with an explicit position per flag.
///
/// Positions must be unique and below the width; flags must be unique.
/// Bits without a flag can still be reached through integer and string
/// conversions.
///
/// ```rust
/// use typed_flags::{Flag, TypedFlags, bit_layout};
///
/// #[derive(Flag)] struct Enable;
/// #[derive(Flag)] struct Ready;
/// #[derive(Flag)] struct Fault;
///
/// bit_layout! {
///     /// Control register.
///     pub Control: 16 {
///         Enable = 0,
///         Ready = 3,
///         Fault = 15,
///     }
/// }
///
/// let mut reg = TypedFlags::<Control>::new();
/// reg.set::<(Enable, Fault)>(true);
/// assert_eq!(reg.to_integral::<u16>(), 0x8001);
/// assert_eq!(reg.size(), 16);
/// ```
///
/// ```compile_fail
/// use typed_flags::{Flag, TypedFlags, bit_layout};
///
/// #[derive(Flag)] struct Enable;
///
/// bit_layout! { Narrow: 4 { Enable = 4 } }
///
/// let _ = TypedFlags::<Narrow>::new();
/// ```
#[macro_export]
macro_rules! bit_layout {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident : $width:literal {
            $($flag:ty = $pos:expr),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {}

        impl $crate::Layout for $name {
            type Storage = $crate::FlagsStorage<$width, { $crate::bank_count($width) }>;

            const ENTRIES: &'static [$crate::Entry] =
                &[$($crate::Entry::new(<$flag as $crate::Flag>::ID, $pos)),*];
        }
    };
}

#[cfg(all(test, feature = "derive"))]
mod tests {
    use super::*;
    use crate::FlagsError;

    #[derive(crate::Flag)]
    struct Read;
    #[derive(crate::Flag)]
    struct Write;
    #[derive(crate::Flag)]
    struct Exec;

    crate::bit_layout! {
        Sparse: 12 {
            Exec = 11,
            Read = 0,
            Write = 4,
        }
    }

    #[test]
    fn tuple_positions_follow_declaration_order() {
        type L = (Read, Write, Exec);
        let entries = <L as Layout>::ENTRIES;
        assert_eq!(resolver::resolve(Read::ID, entries), Ok(0));
        assert_eq!(resolver::resolve(Write::ID, entries), Ok(1));
        assert_eq!(resolver::resolve(Exec::ID, entries), Ok(2));
        assert_eq!(<<L as Layout>::Storage as BitStorage>::BITS, 3);
        assert_eq!(core::mem::size_of::<<L as Layout>::Storage>(), 1);
    }

    #[test]
    fn empty_layout_has_no_storage() {
        assert!(<() as Layout>::ENTRIES.is_empty());
        assert_eq!(core::mem::size_of::<<() as Layout>::Storage>(), 0);
    }

    #[test]
    fn selection_lists_keep_order() {
        assert_eq!(<Exec as FlagList>::IDS, &[Exec::ID]);
        assert_eq!(<(Exec, Read) as FlagList>::IDS, &[Exec::ID, Read::ID]);
        assert!(<() as FlagList>::IDS.is_empty());
    }

    #[test]
    fn explicit_layout_keeps_given_positions() {
        assert_eq!(resolver::resolve(Exec::ID, Sparse::ENTRIES), Ok(11));
        assert_eq!(resolver::resolve(Write::ID, Sparse::ENTRIES), Ok(4));
        assert_eq!(resolver::validate(Sparse::ENTRIES, 12), Ok(()));
        assert_eq!(
            resolver::resolve(Identity::new("nowhere"), Sparse::ENTRIES),
            Err(FlagsError::UnknownIdentity("nowhere"))
        );
        assert_eq!(core::mem::size_of::<<Sparse as Layout>::Storage>(), 2);
    }

    #[test]
    fn repeated_flag_is_reported_by_validation() {
        type Bad = (Read, Write, Read);
        assert_eq!(
            resolver::validate(<Bad as Layout>::ENTRIES, 3),
            Err(FlagsError::DuplicateIdentity {
                name: Read::ID.name(),
                first: 0,
                second: 2
            })
        );
    }
}
