//! Invertible, chainable transformations over the dimensions of a parameter search space.
//!
//! An optimization algorithm often requires its search space to be expressed in a
//! particular way (e.g., only real-valued dimensions).
//! This crate builds a `TransformedSpace` that agrees to such requirements, and maps
//! points back and forth between it and the space the user defined.
//!
//! "henkan" is a Japanese translation of "conversion".
//!
//! # Examples
//!
//! ```
//! use henkan::dimensions::{Dimension, Real};
//! use henkan::point::Point;
//! use henkan::policy::PassThrough;
//! use henkan::space::Space;
//! use henkan::types::TargetType;
//!
//! # fn main() -> henkan::Result<()> {
//! let mut original = Space::new();
//! original.register(Real::new("x", 0.0, 10.0)?)?;
//!
//! let space = henkan::build_required_space(TargetType::Invariant, &original, &PassThrough)?;
//! let point = space.transform(&[Point::Real(5.0)])?;
//! assert_eq!(space.reverse(&point)?, vec![Point::Real(5.0)]);
//! assert_eq!(space.values().next().map(|d| d.name()), Some("x"));
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]
#[macro_use]
extern crate trackable;

pub use self::error::{Error, ErrorKind};
pub use self::requirements::{build_required_space, Requirements};

pub mod dimensions;
pub mod point;
pub mod policy;
pub mod requirements;
pub mod space;
pub mod transformed;
pub mod transforms;
pub mod types;

mod error;
#[cfg(test)]
mod test_util;

/// This crate specific `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
