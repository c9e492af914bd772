//! # typed_flags
//!
//! A `no_std` compatible set of boolean flags addressed by marker types.
//!
//! Each flag is a type. A set is declared as a tuple of flag types and every
//! access is checked against that list while compiling, so a flag from one
//! set cannot be used on another.
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
//! let mut cat = Animal::from_values(FlagValue::<EatsMeat>::new(true));
//! cat.set::<HasTail>(true);
//!
//! let cow = Animal::from_integral(0b110u8);
//!
//! assert!((cat & cow).test::<HasTail>());
//! assert!((cat | cow).all());
//! assert_eq!((cat ^ cow).to_string(), "011");
//! assert_eq!(core::mem::size_of::<Animal>(), 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` via `thiserror`.
//! - `alloc`: string rendering with custom characters.
//! - `derive` (default): `#[derive(Flag)]`.
//! - `tracing`: trace events while parsing flag strings.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

// lets the derive's `::typed_flags::` paths resolve inside this crate
extern crate self as typed_flags;

pub mod error;
pub use error::{FlagsError, Result};

pub mod bit_ops;
pub use bit_ops::{bank_count, last_bank_mask};

mod storage;
pub use storage::{BitStorage, FlagsStorage, Integral};

mod identity;
pub use identity::{Entry, Flag, Identity, resolver};

mod layout;
pub use layout::{FlagList, Layout};

mod value;
pub use value::{FlagValue, ValueList};

pub mod flags;
pub use flags::TypedFlags;

#[cfg(feature = "derive")]
pub use typed_flags_derive::Flag;
