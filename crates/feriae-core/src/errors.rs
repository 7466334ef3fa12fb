//! Error types for feriae.
//!
//! Construction-time failures (unknown entity, unknown subdivision, invalid
//! rule tables) are the only hard errors the library produces.  Per-year
//! conditions such as a year before an entity existed or a year outside the
//! Islamic lookup table are *not* errors: they produce empty results.

use thiserror::Error;

/// The top-level error type used throughout feriae.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested entity code has no registered rule set.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    /// The requested subdivision is not recognised by the entity.
    #[error("entity {entity} has no subdivision {subdivision}")]
    UnknownSubdivision {
        /// Canonical code of the entity that was asked.
        entity: String,
        /// The subdivision code as supplied by the caller.
        subdivision: String,
    },

    /// An entity with the same code (or alias) is already registered.
    #[error("entity {0} is already registered")]
    DuplicateEntity(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout feriae.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Error::Precondition` when `$cond` is false.
///
/// # Example
/// ```
/// use feriae_core::{ensure, errors::Error};
/// fn month(m: u8) -> feriae_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(matches!(month(13), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Error::Runtime` immediately.
///
/// # Example
/// ```
/// use feriae_core::{fail, errors::Error};
/// fn always_err() -> feriae_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
