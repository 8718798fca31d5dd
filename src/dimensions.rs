//! Search space dimensions.
use crate::point::{Point, Shape};
use crate::types::DimensionType;
use crate::{ErrorKind, Result};
use ordered_float::NotNan;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::fmt;

/// This trait allows for defining a dimension of a search space.
pub trait Dimension: fmt::Debug + fmt::Display + Send + Sync {
    /// Returns the name of this dimension.
    fn name(&self) -> &str;

    /// Returns the type tag of this dimension.
    ///
    /// Supported tags are `"real"`, `"integer"` and `"categorical"`.
    fn type_tag(&self) -> &str;

    /// Returns the shape of the points of this dimension.
    fn shape(&self) -> Shape;

    /// Draws `n` points from the prior distribution of this dimension.
    ///
    /// The same `seed` always yields the same points.
    /// If `seed` is `None`, the random generator is seeded from the OS.
    fn sample(&self, n: usize, seed: Option<u64>) -> Result<Vec<Point>>;

    /// Returns the interval that contains the `alpha` fraction of the prior mass.
    ///
    /// # Errors
    ///
    /// If `alpha` is not in `(0.0, 1.0]`, an `ErrorKind::InvalidInput` error will be returned.
    fn interval(&self, alpha: f64) -> Result<(Point, Point)>;

    /// Returns `true` if `point` is a possible sample of this dimension.
    fn contains(&self, point: &Point) -> bool;

    /// Parses the type tag of this dimension.
    ///
    /// # Errors
    ///
    /// If the tag is unknown, an `ErrorKind::UnsupportedDimensionType` error will be returned.
    fn dimension_type(&self) -> Result<DimensionType> {
        track!(self.type_tag().parse(); self.name())
    }
}

pub(crate) fn rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    }
}

fn check_alpha(alpha: f64) -> Result<()> {
    track_assert!(0.0 < alpha && alpha <= 1.0, ErrorKind::InvalidInput; alpha);
    Ok(())
}

// Builds a point of `shape` whose leaves are drawn by `f`.
fn sample_shaped<R, F>(rng: &mut R, shape: &[usize], f: &F) -> Point
where
    R: Rng,
    F: Fn(&mut R) -> Point,
{
    match shape.split_first() {
        None => f(rng),
        Some((&n, rest)) => Point::Array((0..n).map(|_| sample_shaped(rng, rest, f)).collect()),
    }
}

fn has_shape(point: &Point, shape: &[usize]) -> bool {
    match (point, shape.split_first()) {
        (Point::Array(_), None) => false,
        (_, None) => true,
        (Point::Array(items), Some((&n, rest))) => {
            items.len() == n && items.iter().all(|p| has_shape(p, rest))
        }
        _ => false,
    }
}

fn fmt_shape(f: &mut fmt::Formatter, shape: &[usize]) -> fmt::Result {
    if !shape.is_empty() {
        write!(f, ", shape={:?}", shape)?;
    }
    Ok(())
}

/// Real number dimension with a uniform prior over `[low, high]`.
#[derive(Debug, Clone)]
pub struct Real {
    name: String,
    low: NotNan<f64>,
    high: NotNan<f64>,
    shape: Shape,
}
impl Real {
    /// Makes a new `Real` instance.
    ///
    /// # Errors
    ///
    /// If one of the following conditions is satisfied,
    /// this function returns an `ErrorKind::InvalidInput` error:
    ///
    /// - `low` or `high` is not a finite number
    /// - `low >= high`
    /// - `high - low` is not a finite number
    pub fn new(name: &str, low: f64, high: f64) -> Result<Self> {
        track_assert!(low.is_finite(), ErrorKind::InvalidInput; name, low, high);
        track_assert!(high.is_finite(), ErrorKind::InvalidInput; name, low, high);
        track_assert!(low < high, ErrorKind::InvalidInput; name, low, high);
        track_assert!((high - low).is_finite(), ErrorKind::InvalidInput; name, low, high);

        let low = track_assert_some!(NotNan::new(low).ok(), ErrorKind::InvalidInput);
        let high = track_assert_some!(NotNan::new(high).ok(), ErrorKind::InvalidInput);
        Ok(Self {
            name: name.to_owned(),
            low,
            high,
            shape: Vec::new(),
        })
    }

    /// Makes each point of this dimension an array of the given shape.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Returns the lower bound of this dimension.
    pub fn low(&self) -> f64 {
        self.low.into_inner()
    }

    /// Returns the upper bound of this dimension.
    pub fn high(&self) -> f64 {
        self.high.into_inner()
    }

    fn real_interval(&self, alpha: f64) -> Result<(f64, f64)> {
        track!(check_alpha(alpha))?;
        let margin = (self.high() - self.low()) * (1.0 - alpha) / 2.0;
        Ok((self.low() + margin, self.high() - margin))
    }
}
impl Dimension for Real {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_tag(&self) -> &str {
        DimensionType::Real.as_str()
    }

    fn shape(&self) -> Shape {
        self.shape.clone()
    }

    fn sample(&self, n: usize, seed: Option<u64>) -> Result<Vec<Point>> {
        let mut rng = rng(seed);
        let (low, high) = (self.low(), self.high());
        Ok((0..n)
            .map(|_| {
                sample_shaped(&mut rng, &self.shape, &|rng: &mut StdRng| {
                    Point::Real(rng.gen_range(low, high))
                })
            })
            .collect())
    }

    fn interval(&self, alpha: f64) -> Result<(Point, Point)> {
        let (low, high) = track!(self.real_interval(alpha))?;
        Ok((Point::Real(low), Point::Real(high)))
    }

    fn contains(&self, point: &Point) -> bool {
        let (low, high) = (self.low(), self.high());
        has_shape(point, &self.shape)
            && point.all_scalars(&|x: &Point| {
                x.as_real().map_or(false, |x| low <= x && x <= high)
            })
    }
}
impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Real(name={}, interval=[{}, {}]",
            self.name,
            self.low(),
            self.high()
        )?;
        fmt_shape(f, &self.shape)?;
        write!(f, ")")
    }
}

/// Integer dimension with a uniform prior over `[low, high]`.
#[derive(Debug, Clone)]
pub struct Integer {
    name: String,
    low: i64,
    high: i64,
    shape: Shape,
}
impl Integer {
    /// Makes a new `Integer` instance.
    ///
    /// # Errors
    ///
    /// If `low > high` or `high == i64::MAX`,
    /// this function returns an `ErrorKind::InvalidInput` error.
    pub fn new(name: &str, low: i64, high: i64) -> Result<Self> {
        track_assert!(low <= high, ErrorKind::InvalidInput; name, low, high);
        track_assert!(high < std::i64::MAX, ErrorKind::InvalidInput; name, high);
        Ok(Self {
            name: name.to_owned(),
            low,
            high,
            shape: Vec::new(),
        })
    }

    /// Makes each point of this dimension an array of the given shape.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Returns the lower bound (inclusive) of this dimension.
    pub const fn low(&self) -> i64 {
        self.low
    }

    /// Returns the upper bound (inclusive) of this dimension.
    pub const fn high(&self) -> i64 {
        self.high
    }
}
impl Dimension for Integer {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_tag(&self) -> &str {
        DimensionType::Integer.as_str()
    }

    fn shape(&self) -> Shape {
        self.shape.clone()
    }

    fn sample(&self, n: usize, seed: Option<u64>) -> Result<Vec<Point>> {
        let mut rng = rng(seed);
        let (low, high) = (self.low, self.high);
        Ok((0..n)
            .map(|_| {
                sample_shaped(&mut rng, &self.shape, &|rng: &mut StdRng| {
                    Point::Integer(rng.gen_range(low, high + 1))
                })
            })
            .collect())
    }

    fn interval(&self, alpha: f64) -> Result<(Point, Point)> {
        track!(check_alpha(alpha))?;
        let (low, high) = (self.low as f64, self.high as f64);
        let margin = (high - low) * (1.0 - alpha) / 2.0;
        let mid = (low + high) / 2.0;
        let low = (low + margin).ceil() as i64;
        let high = (high - margin).floor() as i64;

        // No integer lies in a narrow interval around a half-integer midpoint.
        if low > high {
            let mid = mid.floor() as i64;
            return Ok((Point::Integer(mid), Point::Integer(mid)));
        }
        Ok((Point::Integer(low), Point::Integer(high)))
    }

    fn contains(&self, point: &Point) -> bool {
        let (low, high) = (self.low, self.high);
        has_shape(point, &self.shape)
            && point.all_scalars(&|x: &Point| {
                x.as_integer().map_or(false, |x| low <= x && x <= high)
            })
    }
}
impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Integer(name={}, interval=[{}, {}]",
            self.name, self.low, self.high
        )?;
        fmt_shape(f, &self.shape)?;
        write!(f, ")")
    }
}

/// Categorical dimension with a uniform prior over its categories.
#[derive(Debug, Clone)]
pub struct Categorical {
    name: String,
    categories: Vec<String>,
    shape: Shape,
}
impl Categorical {
    /// Makes a new `Categorical` instance.
    ///
    /// # Errors
    ///
    /// If `categories` is empty or contains duplicates,
    /// this function returns an `ErrorKind::InvalidInput` error.
    pub fn new<I, T>(name: &str, categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let categories = categories.into_iter().map(Into::into).collect::<Vec<_>>();
        track_assert!(!categories.is_empty(), ErrorKind::InvalidInput; name);

        let unique = categories.iter().collect::<HashSet<_>>();
        track_assert_eq!(unique.len(), categories.len(), ErrorKind::InvalidInput; name, categories);
        Ok(Self {
            name: name.to_owned(),
            categories,
            shape: Vec::new(),
        })
    }

    /// Makes each point of this dimension an array of the given shape.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Returns the categories of this dimension.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}
impl Dimension for Categorical {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_tag(&self) -> &str {
        DimensionType::Categorical.as_str()
    }

    fn shape(&self) -> Shape {
        self.shape.clone()
    }

    fn sample(&self, n: usize, seed: Option<u64>) -> Result<Vec<Point>> {
        let mut rng = rng(seed);
        let categories = &self.categories;
        Ok((0..n)
            .map(|_| {
                sample_shaped(&mut rng, &self.shape, &|rng: &mut StdRng| {
                    let i = rng.gen_range(0, categories.len());
                    Point::Categorical(categories[i].clone())
                })
            })
            .collect())
    }

    fn interval(&self, alpha: f64) -> Result<(Point, Point)> {
        track!(check_alpha(alpha))?;
        track_panic!(
            ErrorKind::InvalidInput,
            "Categorical dimension {:?} has no interval",
            self.name
        );
    }

    fn contains(&self, point: &Point) -> bool {
        let categories = &self.categories;
        has_shape(point, &self.shape)
            && point.all_scalars(&|x: &Point| {
                x.as_categorical()
                    .map_or(false, |x| categories.iter().any(|c| c == x))
            })
    }
}
impl fmt::Display for Categorical {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Categorical(name={}, categories={:?}", self.name, self.categories)?;
        fmt_shape(f, &self.shape)?;
        write!(f, ")")
    }
}
