//! Transformed views of dimensions and spaces.
use crate::dimensions::Dimension;
use crate::point::{Point, Shape};
use crate::space::SearchSpace;
use crate::transforms::Transform;
use crate::types::DimensionType;
use crate::{ErrorKind, Result};
use std::fmt;
use std::sync::Arc;

/// A dimension seen through a transform.
///
/// Sampling, intervals and membership are delegated to the original dimension,
/// and the transform is applied to cross the boundary.
#[derive(Debug)]
pub struct TransformedDimension {
    transformer: Box<dyn Transform>,
    original_dimension: Arc<dyn Dimension>,
    original_type: DimensionType,
}
impl TransformedDimension {
    /// Makes a new `TransformedDimension` instance.
    ///
    /// # Errors
    ///
    /// If the type tag of `original_dimension` is unknown,
    /// an `ErrorKind::UnsupportedDimensionType` error will be returned.
    pub fn new(
        transformer: Box<dyn Transform>,
        original_dimension: Arc<dyn Dimension>,
    ) -> Result<Self> {
        let original_type = track!(original_dimension.dimension_type())?;
        Ok(Self {
            transformer,
            original_dimension,
            original_type,
        })
    }

    /// Transforms a point of the original dimension.
    pub fn transform(&self, point: &Point) -> Result<Point> {
        track!(self.transformer.transform(point); self.name())
    }

    /// Reverses a transformed point into the original dimension.
    pub fn reverse(&self, transformed_point: &Point) -> Result<Point> {
        track!(self.transformer.reverse(transformed_point); self.name())
    }

    /// Returns the type of this dimension.
    ///
    /// This is the target type of the transform unless it is invariant,
    /// otherwise the type of the original dimension.
    pub fn dimension_type(&self) -> DimensionType {
        self.transformer.target_type().resolve(self.original_type)
    }

    /// Returns the original dimension.
    pub fn original_dimension(&self) -> &Arc<dyn Dimension> {
        &self.original_dimension
    }

    /// Returns the transform applied to the original dimension.
    pub fn transformer(&self) -> &dyn Transform {
        &*self.transformer
    }
}
impl Dimension for TransformedDimension {
    fn name(&self) -> &str {
        self.original_dimension.name()
    }

    fn type_tag(&self) -> &str {
        TransformedDimension::dimension_type(self).as_str()
    }

    fn shape(&self) -> Shape {
        self.transformer.infer_target_shape(&self.original_dimension.shape())
    }

    fn sample(&self, n: usize, seed: Option<u64>) -> Result<Vec<Point>> {
        let samples = track!(self.original_dimension.sample(n, seed))?;
        samples.iter().map(|p| track!(self.transform(p))).collect()
    }

    fn interval(&self, alpha: f64) -> Result<(Point, Point)> {
        let (low, high) = track!(self.original_dimension.interval(alpha))?;
        Ok((track!(self.transform(&low))?, track!(self.transform(&high))?))
    }

    /// Reverses `point` and asks the original dimension.
    ///
    /// A point outside of the image of the transform is never contained.
    fn contains(&self, point: &Point) -> bool {
        self.reverse(point)
            .map(|p| self.original_dimension.contains(&p))
            .unwrap_or(false)
    }

    fn dimension_type(&self) -> Result<DimensionType> {
        Ok(TransformedDimension::dimension_type(self))
    }
}
impl fmt::Display for TransformedDimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let original = self.original_dimension.to_string();
        f.write_str(&self.transformer.format(&original))
    }
}

/// A search space whose dimensions are `TransformedDimension`s.
#[derive(Debug, Default)]
pub struct TransformedSpace {
    dims: Vec<TransformedDimension>,
}
impl TransformedSpace {
    /// Makes a new empty `TransformedSpace` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dimension to the end of this space.
    ///
    /// # Errors
    ///
    /// If this space already has a dimension with the same name,
    /// an `ErrorKind::InvalidInput` error will be returned.
    pub fn register(&mut self, dim: TransformedDimension) -> Result<()> {
        track_assert!(
            self.get(dim.name()).is_none(),
            ErrorKind::InvalidInput,
            "Duplicate dimension name: {:?}",
            dim.name()
        );
        self.dims.push(dim);
        Ok(())
    }

    /// Returns the dimensions of this space in order.
    pub fn values(&self) -> impl Iterator<Item = &TransformedDimension> {
        self.dims.iter()
    }

    /// Returns the dimension with the given name.
    pub fn get(&self, name: &str) -> Option<&TransformedDimension> {
        self.dims.iter().find(|d| d.name() == name)
    }

    /// Returns the number of dimensions in this space.
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    /// Returns `true` if this space has no dimensions.
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Transforms a point of the original space into this space.
    ///
    /// The `i`-th coordinate of `point` is transformed by the `i`-th dimension.
    ///
    /// # Errors
    ///
    /// If `point.len()` differs from the number of dimensions,
    /// an `ErrorKind::InvalidInput` error will be returned.
    pub fn transform(&self, point: &[Point]) -> Result<Vec<Point>> {
        track_assert_eq!(point.len(), self.dims.len(), ErrorKind::InvalidInput);
        self.dims
            .iter()
            .zip(point.iter())
            .map(|(d, p)| track!(d.transform(p)))
            .collect()
    }

    /// Reverses a point of this space into the original space.
    ///
    /// # Errors
    ///
    /// If `transformed_point.len()` differs from the number of dimensions,
    /// an `ErrorKind::InvalidInput` error will be returned.
    pub fn reverse(&self, transformed_point: &[Point]) -> Result<Vec<Point>> {
        track_assert_eq!(transformed_point.len(), self.dims.len(), ErrorKind::InvalidInput);
        self.dims
            .iter()
            .zip(transformed_point.iter())
            .map(|(d, p)| track!(d.reverse(p)))
            .collect()
    }
}
impl SearchSpace for TransformedSpace {
    fn dimensions(&self) -> Vec<&dyn Dimension> {
        self.dims.iter().map(|d| d as &dyn Dimension).collect()
    }
}
impl fmt::Display for TransformedSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "TransformedSpace([")?;
        for dim in &self.dims {
            writeln!(f, "    {},", dim)?;
        }
        write!(f, "])")
    }
}
