//! # feriae-entities
//!
//! Rule tables and name catalogs for the shipped jurisdictions.
//!
//! | Code | Entity                  | Subdivisions | Languages |
//! |------|-------------------------|--------------|-----------|
//! | `BA` | Bosnia and Herzegovina  | 3            | bs, en    |
//! | `BO` | Bolivia                 | 9            | es, en    |

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use feriae_core::errors::Result;
use feriae_engine::Registry;

/// Bosnia and Herzegovina.
pub mod ba;

/// Bolivia.
pub mod bo;

/// Register every shipped entity in `registry`.
///
/// # Errors
/// [`Error::DuplicateEntity`](feriae_core::errors::Error::DuplicateEntity)
/// if one of the codes is already taken, or the error of a name catalog
/// that fails to parse.
pub fn register_all(registry: &mut Registry) -> Result<()> {
    registry.register(ba::entity()?)?;
    registry.register(bo::entity()?)?;
    Ok(())
}
