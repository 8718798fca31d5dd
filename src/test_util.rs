//! Small concrete transforms used by the unit tests.
use crate::point::{Point, Shape};
use crate::transforms::Transform;
use crate::types::TargetType;
use crate::{ErrorKind, Result};

/// Adds a constant to integer points.
#[derive(Debug, Clone, Copy)]
pub struct Offset(pub i64);
impl Transform for Offset {
    fn transform(&self, point: &Point) -> Result<Point> {
        let k = self.0;
        track!(point.try_map_scalars(&|x: &Point| -> Result<Point> {
            let x = track_assert_some!(x.as_integer(), ErrorKind::InvalidInput; x);
            Ok(Point::Integer(x + k))
        }))
    }

    fn reverse(&self, transformed_point: &Point) -> Result<Point> {
        let k = self.0;
        track!(transformed_point.try_map_scalars(&|x: &Point| -> Result<Point> {
            let x = track_assert_some!(x.as_integer(), ErrorKind::OutOfImage; x);
            Ok(Point::Integer(x - k))
        }))
    }

    fn target_type(&self) -> TargetType {
        TargetType::Invariant
    }

    fn name(&self) -> &str {
        "Offset"
    }
}

/// Multiplies real points by a constant.
#[derive(Debug, Clone, Copy)]
pub struct Scale(pub f64);
impl Transform for Scale {
    fn transform(&self, point: &Point) -> Result<Point> {
        let k = self.0;
        track!(point.try_map_scalars(&|x: &Point| -> Result<Point> {
            let x = track_assert_some!(x.as_real(), ErrorKind::InvalidInput; x);
            Ok(Point::Real(x * k))
        }))
    }

    fn reverse(&self, transformed_point: &Point) -> Result<Point> {
        let k = self.0;
        track!(transformed_point.try_map_scalars(&|x: &Point| -> Result<Point> {
            let x = track_assert_some!(x.as_real(), ErrorKind::OutOfImage; x);
            Ok(Point::Real(x / k))
        }))
    }

    fn target_type(&self) -> TargetType {
        TargetType::Invariant
    }

    fn name(&self) -> &str {
        "Scale"
    }
}

/// Maps integer points to real points.
#[derive(Debug, Clone, Copy)]
pub struct Widen;
impl Transform for Widen {
    fn transform(&self, point: &Point) -> Result<Point> {
        track!(point.try_map_scalars(&|x: &Point| -> Result<Point> {
            let x = track_assert_some!(x.as_integer(), ErrorKind::InvalidInput; x);
            Ok(Point::Real(x as f64))
        }))
    }

    fn reverse(&self, transformed_point: &Point) -> Result<Point> {
        track!(transformed_point.try_map_scalars(&|x: &Point| -> Result<Point> {
            let x = track_assert_some!(x.as_real(), ErrorKind::OutOfImage; x);
            track_assert_eq!(x.fract(), 0.0, ErrorKind::OutOfImage; x);
            Ok(Point::Integer(x as i64))
        }))
    }

    fn target_type(&self) -> TargetType {
        TargetType::Real
    }

    fn name(&self) -> &str {
        "Widen"
    }
}

/// Maps category labels to their indices.
#[derive(Debug, Clone)]
pub struct Enumerate(pub Vec<String>);
impl Transform for Enumerate {
    fn transform(&self, point: &Point) -> Result<Point> {
        track!(point.try_map_scalars(&|x: &Point| -> Result<Point> {
            let x = track_assert_some!(x.as_categorical(), ErrorKind::InvalidInput; x);
            let i = track_assert_some!(
                self.0.iter().position(|c| c == x),
                ErrorKind::InvalidInput; x
            );
            Ok(Point::Integer(i as i64))
        }))
    }

    fn reverse(&self, transformed_point: &Point) -> Result<Point> {
        track!(transformed_point.try_map_scalars(&|x: &Point| -> Result<Point> {
            let i = track_assert_some!(x.as_integer(), ErrorKind::OutOfImage; x);
            track_assert!(0 <= i && (i as usize) < self.0.len(), ErrorKind::OutOfImage; i);
            Ok(Point::Categorical(self.0[i as usize].clone()))
        }))
    }

    fn target_type(&self) -> TargetType {
        TargetType::Integer
    }

    fn name(&self) -> &str {
        "Enumerate"
    }
}

/// Repeats a point `n` times, adding a leading axis.
#[derive(Debug, Clone, Copy)]
pub struct Repeat(pub usize);
impl Transform for Repeat {
    fn transform(&self, point: &Point) -> Result<Point> {
        Ok(Point::Array(vec![point.clone(); self.0]))
    }

    fn reverse(&self, transformed_point: &Point) -> Result<Point> {
        let items = track_assert_some!(transformed_point.as_array(), ErrorKind::OutOfImage);
        track_assert_eq!(items.len(), self.0, ErrorKind::OutOfImage);
        let first = track_assert_some!(items.first(), ErrorKind::OutOfImage);
        track_assert!(items.iter().all(|p| p == first), ErrorKind::OutOfImage);
        Ok(first.clone())
    }

    fn infer_target_shape(&self, shape: &[usize]) -> Shape {
        let mut target = vec![self.0];
        target.extend_from_slice(shape);
        target
    }

    fn target_type(&self) -> TargetType {
        TargetType::Invariant
    }

    fn name(&self) -> &str {
        "Repeat"
    }
}
