//! Invertible transformations of dimension values.
use crate::point::{Point, Shape};
use crate::types::TargetType;
use crate::Result;
use std::fmt;

pub use self::composite::Composite;
pub use self::identity::Identity;

mod composite;
mod identity;

/// Injective function on the points of a dimension, together with its inverse.
///
/// `target_type` tells the type of the values produced by `transform`.
/// `TargetType::Invariant` means that the type of the input is kept.
pub trait Transform: fmt::Debug + Send + Sync {
    /// Transforms a point from the domain dimension to the target dimension.
    fn transform(&self, point: &Point) -> Result<Point>;

    /// Reverse transforms a point from the target dimension to the domain dimension.
    ///
    /// # Errors
    ///
    /// Implementations should return an `ErrorKind::OutOfImage` error
    /// if `transformed_point` cannot have been produced by `transform`.
    fn reverse(&self, transformed_point: &Point) -> Result<Point>;

    /// Returns the shape of the dimension after transformation.
    fn infer_target_shape(&self, shape: &[usize]) -> Shape {
        shape.to_vec()
    }

    /// Returns the type of the values produced by this transform.
    fn target_type(&self) -> TargetType;

    /// Returns the name of this transform, used by `format`.
    fn name(&self) -> &str;

    /// Wraps the representation of a dimension with this transform.
    fn format(&self, what: &str) -> String {
        format!("{}({})", self.name(), what)
    }
}
impl<T: Transform + ?Sized> Transform for Box<T> {
    fn transform(&self, point: &Point) -> Result<Point> {
        (**self).transform(point)
    }

    fn reverse(&self, transformed_point: &Point) -> Result<Point> {
        (**self).reverse(transformed_point)
    }

    fn infer_target_shape(&self, shape: &[usize]) -> Shape {
        (**self).infer_target_shape(shape)
    }

    fn target_type(&self) -> TargetType {
        (**self).target_type()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn format(&self, what: &str) -> String {
        (**self).format(what)
    }
}
