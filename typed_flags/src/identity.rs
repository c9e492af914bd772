//! Flag identities and the resolver that maps them to bit positions.
//!
//! Everything here is `const fn` so a layout can be checked, and every
//! lookup answered, while the program is compiled.

use core::fmt;
use core::hash::{Hash, Hasher};

/// Compile-time identity of a flag.
///
/// Two identities are the same flag exactly when their keys match. The key
/// of a derived flag carries the declaring module, type and source location,
/// so distinct marker types never share one. The name is for display only.
#[derive(Clone, Copy)]
pub struct Identity {
    key: &'static str,
    name: &'static str,
}

impl Identity {
    /// An identity whose key is its name.
    ///
    /// Every type built this way with the same `name` is the same flag;
    /// prefer `#[derive(Flag)]`.
    pub const fn new(name: &'static str) -> Self {
        Self { key: name, name }
    }

    /// An identity displayed as `name` and compared by `key`.
    pub const fn keyed(name: &'static str, key: &'static str) -> Self {
        Self { key, name }
    }

    pub const fn name(self) -> &'static str {
        self.name
    }

    pub const fn key(self) -> &'static str {
        self.key
    }

    /// Byte-wise key comparison usable in const context.
    pub const fn same_as(self, other: Identity) -> bool {
        let a = self.key.as_bytes();
        let b = other.key.as_bytes();
        if a.len() != b.len() {
            return false;
        }
        let mut i = 0;
        while i < a.len() {
            if a[i] != b[i] {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(*other)
    }
}

impl Eq for Identity {}

impl Hash for Identity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A marker type usable as a flag.
///
/// Usually derived:
///
/// ```rust
/// use typed_flags::Flag;
///
/// #[derive(Flag)]
/// struct EatsMeat;
///
/// #[derive(Flag)]
/// #[flag(name = "animal.tail")]
/// enum HasTail {}
///
/// assert!(EatsMeat::ID.name().ends_with("::EatsMeat"));
/// assert_eq!(HasTail::ID.name(), "animal.tail");
/// assert_ne!(EatsMeat::ID, HasTail::ID);
/// ```
///
/// An explicit name only changes how the flag is shown. A different type
/// with the same name is still a different flag:
///
/// ```compile_fail
/// use typed_flags::{Flag, TypedFlags};
///
/// #[derive(Flag)]
/// #[flag(name = "x")]
/// struct Declared;
///
/// #[derive(Flag)]
/// #[flag(name = "x")]
/// struct Stranger;
///
/// let mut flags = TypedFlags::<(Declared,)>::new();
/// flags.set::<Stranger>(true);
/// ```
pub trait Flag: 'static {
    const ID: Identity;
}

/// One flag of a layout and the bit it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry {
    pub id: Identity,
    pub position: usize,
}

impl Entry {
    pub const fn new(id: Identity, position: usize) -> Self {
        Self { id, position }
    }
}

pub mod resolver {
    use super::{Entry, Identity};
    use crate::error::{FlagsError, Result};

    /// Position of `id`; the first matching entry wins.
    pub const fn resolve(id: Identity, entries: &[Entry]) -> Result<usize> {
        let mut i = 0;
        while i < entries.len() {
            if entries[i].id.same_as(id) {
                return Ok(entries[i].position);
            }
            i += 1;
        }
        Err(FlagsError::UnknownIdentity(id.name()))
    }

    /// Fails on the first identity that occurs twice.
    pub const fn validate_uniqueness(entries: &[Entry]) -> Result<()> {
        let mut i = 0;
        while i < entries.len() {
            let mut j = i + 1;
            while j < entries.len() {
                if entries[i].id.same_as(entries[j].id) {
                    return Err(FlagsError::DuplicateIdentity {
                        name: entries[i].id.name(),
                        first: i,
                        second: j,
                    });
                }
                j += 1;
            }
            i += 1;
        }
        Ok(())
    }

    /// Checks that positions fit in `width` and that positions and
    /// identities are unique.
    pub const fn validate(entries: &[Entry], width: usize) -> Result<()> {
        let mut i = 0;
        while i < entries.len() {
            let position = entries[i].position;
            if position >= width {
                return Err(FlagsError::PositionOutOfRange { position, width });
            }
            let mut j = i + 1;
            while j < entries.len() {
                if entries[j].position == position {
                    return Err(FlagsError::DuplicatePosition(position));
                }
                j += 1;
            }
            i += 1;
        }
        validate_uniqueness(entries)
    }

    /// Like [`resolve`], but aborts const evaluation on failure.
    pub const fn expect_position(id: Identity, entries: &[Entry]) -> usize {
        match resolve(id, entries) {
            Ok(position) => position,
            Err(err) => err.raise(),
        }
    }

    /// Most flags a single bulk operation can name.
    pub const MAX_SELECTION: usize = 16;

    /// Positions of a flag selection, resolved once in const context.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Selection {
        positions: [usize; MAX_SELECTION],
        len: usize,
    }

    impl Selection {
        pub const fn as_slice(&self) -> &[usize] {
            self.positions.as_slice().split_at(self.len).0
        }
    }

    /// Resolves every id, in order. Aborts const evaluation when an id is
    /// not declared or more than [`MAX_SELECTION`] ids are given.
    pub const fn select(ids: &[Identity], entries: &[Entry]) -> Selection {
        if ids.len() > MAX_SELECTION {
            panic!("a selection names at most 16 flags");
        }
        let mut positions = [0; MAX_SELECTION];
        let mut i = 0;
        while i < ids.len() {
            positions[i] = expect_position(ids[i], entries);
            i += 1;
        }
        Selection {
            positions,
            len: ids.len(),
        }
    }

    /// Aborts const evaluation unless [`validate`] passes.
    pub const fn expect_valid(entries: &[Entry], width: usize) {
        if let Err(err) = validate(entries, width) {
            err.raise()
        }
    }
}
