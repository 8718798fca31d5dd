//! Points of a single dimension.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::Result;
use std::fmt;

/// Shape of an array-valued point.
///
/// The empty shape denotes a scalar.
pub type Shape = Vec<usize>;

/// A value of a single dimension, expressed in some representation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Point {
    /// Real number.
    Real(f64),

    /// Integer number.
    Integer(i64),

    /// Category label.
    Categorical(String),

    /// Array of points (all elements are expected to have the same shape).
    Array(Vec<Point>),
}
impl Point {
    /// Returns the shape of this point.
    pub fn shape(&self) -> Shape {
        match self {
            Point::Array(items) => {
                let mut shape = vec![items.len()];
                if let Some(first) = items.first() {
                    shape.extend(first.shape());
                }
                shape
            }
            _ => Vec::new(),
        }
    }

    /// Returns the real value if this is a `Point::Real`.
    pub fn as_real(&self) -> Option<f64> {
        if let Point::Real(x) = *self {
            Some(x)
        } else {
            None
        }
    }

    /// Returns the integer value if this is a `Point::Integer`.
    pub fn as_integer(&self) -> Option<i64> {
        if let Point::Integer(x) = *self {
            Some(x)
        } else {
            None
        }
    }

    /// Returns the category label if this is a `Point::Categorical`.
    pub fn as_categorical(&self) -> Option<&str> {
        if let Point::Categorical(x) = self {
            Some(x)
        } else {
            None
        }
    }

    /// Returns the elements if this is a `Point::Array`.
    pub fn as_array(&self) -> Option<&[Point]> {
        if let Point::Array(x) = self {
            Some(x)
        } else {
            None
        }
    }

    /// Applies `f` to every scalar of this point, keeping the array structure.
    pub fn try_map_scalars<F>(&self, f: &F) -> Result<Point>
    where
        F: Fn(&Point) -> Result<Point>,
    {
        match self {
            Point::Array(items) => items
                .iter()
                .map(|p| track!(p.try_map_scalars(f)))
                .collect::<Result<Vec<_>>>()
                .map(Point::Array),
            scalar => track!(f(scalar)),
        }
    }

    /// Returns `true` if every scalar of this point satisfies `f`.
    pub fn all_scalars<F>(&self, f: &F) -> bool
    where
        F: Fn(&Point) -> bool,
    {
        match self {
            Point::Array(items) => items.iter().all(|p| p.all_scalars(f)),
            scalar => f(scalar),
        }
    }
}
impl From<f64> for Point {
    fn from(f: f64) -> Self {
        Point::Real(f)
    }
}
impl From<i64> for Point {
    fn from(f: i64) -> Self {
        Point::Integer(f)
    }
}
impl From<String> for Point {
    fn from(f: String) -> Self {
        Point::Categorical(f)
    }
}
impl<'a> From<&'a str> for Point {
    fn from(f: &'a str) -> Self {
        Point::Categorical(f.to_owned())
    }
}
impl From<Vec<Point>> for Point {
    fn from(f: Vec<Point>) -> Self {
        Point::Array(f)
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Point::Real(x) => write!(f, "{}", x),
            Point::Integer(x) => write!(f, "{}", x),
            Point::Categorical(x) => write!(f, "{:?}", x),
            Point::Array(items) => {
                write!(f, "[")?;
                for (i, p) in items.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", p)?;
                }
                write!(f, "]")
            }
        }
    }
}
