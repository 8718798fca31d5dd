//! Dimension types and transform target types.
use crate::{Error, ErrorKind, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic type of a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DimensionType {
    /// Continuous numerical dimension.
    Real,

    /// Discrete numerical dimension.
    Integer,

    /// Categorical dimension.
    Categorical,
}
impl DimensionType {
    /// Returns the type tag of this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            DimensionType::Real => "real",
            DimensionType::Integer => "integer",
            DimensionType::Categorical => "categorical",
        }
    }
}
impl FromStr for DimensionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "real" => Ok(DimensionType::Real),
            "integer" => Ok(DimensionType::Integer),
            "categorical" => Ok(DimensionType::Categorical),
            _ => track_panic!(
                ErrorKind::UnsupportedDimensionType,
                "Unsupported dimension type {:?}",
                s
            ),
        }
    }
}
impl fmt::Display for DimensionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of the values produced by a transform.
///
/// `TargetType::Invariant` means that the transform keeps whatever type flows in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TargetType {
    /// Real numbers.
    Real,

    /// Integer numbers.
    Integer,

    /// Categories.
    Categorical,

    /// Same as the input type.
    Invariant,
}
impl TargetType {
    /// Returns the type tag of this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            TargetType::Real => "real",
            TargetType::Integer => "integer",
            TargetType::Categorical => "categorical",
            TargetType::Invariant => "invariant",
        }
    }

    /// Returns `true` if this is `TargetType::Invariant`.
    pub fn is_invariant(self) -> bool {
        self == TargetType::Invariant
    }

    /// Resolves this target type into a concrete dimension type.
    ///
    /// `fallback` is returned if this is `TargetType::Invariant`.
    pub fn resolve(self, fallback: DimensionType) -> DimensionType {
        match self {
            TargetType::Real => DimensionType::Real,
            TargetType::Integer => DimensionType::Integer,
            TargetType::Categorical => DimensionType::Categorical,
            TargetType::Invariant => fallback,
        }
    }

    /// Returns `self` unless it is `TargetType::Invariant`, in which case `fallback` is returned.
    pub fn or(self, fallback: TargetType) -> TargetType {
        if self.is_invariant() {
            fallback
        } else {
            self
        }
    }
}
impl From<DimensionType> for TargetType {
    fn from(f: DimensionType) -> Self {
        match f {
            DimensionType::Real => TargetType::Real,
            DimensionType::Integer => TargetType::Integer,
            DimensionType::Categorical => TargetType::Categorical,
        }
    }
}
impl FromStr for TargetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "invariant" => Ok(TargetType::Invariant),
            _ => track!(s.parse::<DimensionType>().map(TargetType::from)),
        }
    }
}
impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
