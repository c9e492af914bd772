//! A boolean tagged with the flag it belongs to.

use core::fmt;
use core::marker::PhantomData;
use core::ops::Not;

use crate::flags::TypedFlags;
use crate::identity::Flag;
use crate::layout::Layout;

/// Value of one flag, used to build or read several flags in one call.
///
/// ```rust
/// use typed_flags::{Flag, FlagValue, TypedFlags};
///
/// #[derive(Flag)] struct EatsMeat;
/// #[derive(Flag)] struct HasTail;
///
/// let wolf = TypedFlags::<(EatsMeat, HasTail)>::from_values((
///     FlagValue::<HasTail>::new(true),
///     FlagValue::<EatsMeat>::new(true),
/// ));
///
/// let mut tail = FlagValue::<HasTail>::default();
/// assert!(!tail.get());
/// wolf.get_values(&mut tail);
/// assert!(tail == true);
/// ```
pub struct FlagValue<T: Flag> {
    value: bool,
    _flag: PhantomData<fn() -> T>,
}

impl<T: Flag> FlagValue<T> {
    pub const fn new(value: bool) -> Self {
        Self {
            value,
            _flag: PhantomData,
        }
    }

    pub const fn get(self) -> bool {
        self.value
    }

    pub fn set(&mut self, value: bool) {
        self.value = value;
    }
}

impl<T: Flag> Clone for FlagValue<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Flag> Copy for FlagValue<T> {}

impl<T: Flag> Default for FlagValue<T> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<T: Flag> PartialEq for FlagValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Flag> Eq for FlagValue<T> {}

impl<T: Flag> PartialEq<bool> for FlagValue<T> {
    fn eq(&self, other: &bool) -> bool {
        self.value == *other
    }
}

impl<T: Flag> From<bool> for FlagValue<T> {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl<T: Flag> From<FlagValue<T>> for bool {
    fn from(flag: FlagValue<T>) -> Self {
        flag.value
    }
}

impl<T: Flag> Not for FlagValue<T> {
    type Output = Self;

    fn not(self) -> Self {
        Self::new(!self.value)
    }
}

impl<T: Flag> fmt::Debug for FlagValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", T::ID, self.value)
    }
}

/// One or more [`FlagValue`]s moved into or out of a set together.
///
/// Implemented for a single value and for tuples of up to 16 lists.
pub trait ValueList {
    /// Writes every value to its flag's bit.
    fn store<L: Layout>(&self, flags: &mut TypedFlags<L>);

    /// Overwrites every value with its flag's bit.
    fn load<L: Layout>(&mut self, flags: &TypedFlags<L>);
}

impl<T: Flag> ValueList for FlagValue<T> {
    #[inline]
    fn store<L: Layout>(&self, flags: &mut TypedFlags<L>) {
        flags.set::<T>(self.value);
    }

    #[inline]
    fn load<L: Layout>(&mut self, flags: &TypedFlags<L>) {
        self.value = flags.test::<T>();
    }
}

macro_rules! impl_value_tuples {
    ($(($($name:ident : $idx:tt),*);)*) => {$(
        impl<$($name: ValueList),*> ValueList for ($($name,)*) {
            #[inline]
            fn store<L: Layout>(&self, flags: &mut TypedFlags<L>) {
                $(self.$idx.store(flags);)*
            }

            #[inline]
            fn load<L: Layout>(&mut self, flags: &TypedFlags<L>) {
                $(self.$idx.load(flags);)*
            }
        }
    )*};
}

impl_value_tuples! {
    (V0: 0);
    (V0: 0, V1: 1);
    (V0: 0, V1: 1, V2: 2);
    (V0: 0, V1: 1, V2: 2, V3: 3);
    (V0: 0, V1: 1, V2: 2, V3: 3, V4: 4);
    (V0: 0, V1: 1, V2: 2, V3: 3, V4: 4, V5: 5);
    (V0: 0, V1: 1, V2: 2, V3: 3, V4: 4, V5: 5, V6: 6);
    (V0: 0, V1: 1, V2: 2, V3: 3, V4: 4, V5: 5, V6: 6, V7: 7);
    (V0: 0, V1: 1, V2: 2, V3: 3, V4: 4, V5: 5, V6: 6, V7: 7, V8: 8);
    (V0: 0, V1: 1, V2: 2, V3: 3, V4: 4, V5: 5, V6: 6, V7: 7, V8: 8, V9: 9);
    (V0: 0, V1: 1, V2: 2, V3: 3, V4: 4, V5: 5, V6: 6, V7: 7, V8: 8, V9: 9, V10: 10);
    (V0: 0, V1: 1, V2: 2, V3: 3, V4: 4, V5: 5, V6: 6, V7: 7, V8: 8, V9: 9, V10: 10, V11: 11);
    (V0: 0, V1: 1, V2: 2, V3: 3, V4: 4, V5: 5, V6: 6, V7: 7, V8: 8, V9: 9, V10: 10, V11: 11,
     V12: 12);
    (V0: 0, V1: 1, V2: 2, V3: 3, V4: 4, V5: 5, V6: 6, V7: 7, V8: 8, V9: 9, V10: 10, V11: 11,
     V12: 12, V13: 13);
    (V0: 0, V1: 1, V2: 2, V3: 3, V4: 4, V5: 5, V6: 6, V7: 7, V8: 8, V9: 9, V10: 10, V11: 11,
     V12: 12, V13: 13, V14: 14);
    (V0: 0, V1: 1, V2: 2, V3: 3, V4: 4, V5: 5, V6: 6, V7: 7, V8: 8, V9: 9, V10: 10, V11: 11,
     V12: 12, V13: 13, V14: 14, V15: 15);
}
