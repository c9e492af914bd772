#[cfg(feature = "std")]
use thiserror::Error;

/// Errors reported by flag sets.
///
/// `InvalidCharacter` is the only variant a caller meets at runtime. The
/// others come out of the identity resolver, which runs in const context:
/// there they abort compilation through [`FlagsError::raise`].
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagsError {
    #[cfg_attr(
        feature = "std",
        error("character {character:?} at index {index} is neither the zero nor the one symbol")
    )]
    InvalidCharacter { character: char, index: usize },

    #[cfg_attr(feature = "std", error("flag `{0}` is not declared in this set"))]
    UnknownIdentity(&'static str),

    #[cfg_attr(
        feature = "std",
        error("flag `{name}` is declared twice (entries {first} and {second})")
    )]
    DuplicateIdentity {
        name: &'static str,
        first: usize,
        second: usize,
    },

    #[cfg_attr(feature = "std", error("bit position {0} is assigned to more than one flag"))]
    DuplicatePosition(usize),

    #[cfg_attr(
        feature = "std",
        error("bit position {position} is out of range for width {width}")
    )]
    PositionOutOfRange { position: usize, width: usize },
}

pub type Result<T> = core::result::Result<T, FlagsError>;

impl FlagsError {
    /// Aborts const evaluation with a message naming the violated rule.
    ///
    /// Const panics cannot format their payload, so the message is fixed per
    /// variant; the offending flag shows up in the compiler's const backtrace.
    pub const fn raise(self) -> ! {
        match self {
            FlagsError::InvalidCharacter { .. } => {
                panic!("character is neither the zero nor the one symbol")
            }
            FlagsError::UnknownIdentity(_) => panic!("flag is not declared in this set"),
            FlagsError::DuplicateIdentity { .. } => panic!("flag types are not unique"),
            FlagsError::DuplicatePosition(_) => panic!("bit positions are not unique"),
            FlagsError::PositionOutOfRange { .. } => panic!("bit position is out of range"),
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for FlagsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FlagsError::InvalidCharacter { character, index } => write!(
                f,
                "character {:?} at index {} is neither the zero nor the one symbol",
                character, index
            ),
            FlagsError::UnknownIdentity(name) => {
                write!(f, "flag `{}` is not declared in this set", name)
            }
            FlagsError::DuplicateIdentity {
                name,
                first,
                second,
            } => write!(
                f,
                "flag `{}` is declared twice (entries {} and {})",
                name, first, second
            ),
            FlagsError::DuplicatePosition(position) => {
                write!(f, "bit position {} is assigned to more than one flag", position)
            }
            FlagsError::PositionOutOfRange { position, width } => write!(
                f,
                "bit position {} is out of range for width {}",
                position, width
            ),
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::error::Error for FlagsError {}
