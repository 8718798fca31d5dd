//! Search spaces.
use crate::dimensions::{self, Dimension};
use crate::point::Point;
use crate::{ErrorKind, Result};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// This trait allows for defining a search space, i.e., an ordered collection of dimensions.
pub trait SearchSpace {
    /// Returns the dimensions of this space in order.
    fn dimensions(&self) -> Vec<&dyn Dimension>;

    /// Draws `n` points from the prior distribution of this space.
    ///
    /// Each dimension is sampled with its own seed derived from `seed`,
    /// and the `i`-th returned point collects the `i`-th sample of every dimension.
    fn sample(&self, n: usize, seed: Option<u64>) -> Result<Vec<Vec<Point>>> {
        let mut rng = dimensions::rng(seed);
        let dims = self.dimensions();
        let mut points = (0..n)
            .map(|_| Vec::with_capacity(dims.len()))
            .collect::<Vec<_>>();
        for dim in dims {
            let samples = track!(dim.sample(n, Some(rng.gen())); dim.name())?;
            track_assert_eq!(samples.len(), n, ErrorKind::Other; dim.name());
            for (point, sample) in points.iter_mut().zip(samples) {
                point.push(sample);
            }
        }
        Ok(points)
    }

    /// Returns the interval of every dimension at the level `alpha`.
    fn interval(&self, alpha: f64) -> Result<Vec<(Point, Point)>> {
        self.dimensions()
            .into_iter()
            .map(|dim| track!(dim.interval(alpha); dim.name()))
            .collect()
    }

    /// Returns `true` if every coordinate of `point` is contained in the corresponding dimension.
    fn contains(&self, point: &[Point]) -> bool {
        let dims = self.dimensions();
        dims.len() == point.len() && dims.iter().zip(point.iter()).all(|(d, p)| d.contains(p))
    }
}

/// A search space defined by the user.
#[derive(Debug, Default, Clone)]
pub struct Space {
    dims: Vec<Arc<dyn Dimension>>,
}
impl Space {
    /// Makes a new empty `Space` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dimension to the end of this space.
    ///
    /// # Errors
    ///
    /// If this space already has a dimension with the same name,
    /// an `ErrorKind::InvalidInput` error will be returned.
    pub fn register<D>(&mut self, dim: D) -> Result<()>
    where
        D: Dimension + 'static,
    {
        track!(self.register_shared(Arc::new(dim)))
    }

    /// Adds a shared dimension to the end of this space.
    pub fn register_shared(&mut self, dim: Arc<dyn Dimension>) -> Result<()> {
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
    pub fn values(&self) -> impl Iterator<Item = &Arc<dyn Dimension>> {
        self.dims.iter()
    }

    /// Returns the dimension with the given name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Dimension>> {
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
}
impl SearchSpace for Space {
    fn dimensions(&self) -> Vec<&dyn Dimension> {
        self.dims.iter().map(|d| &**d as &dyn Dimension).collect()
    }
}
impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Space([")?;
        for dim in &self.dims {
            writeln!(f, "    {},", dim)?;
        }
        write!(f, "])")
    }
}
