//! Policies that select the transforms needed to satisfy a requirement.
use crate::transforms::Transform;
use crate::types::{DimensionType, TargetType};
use crate::{ErrorKind, Result};
use std::collections::HashMap;
use std::fmt;

/// This trait allows for deciding which transforms convert a dimension of
/// type `current` into one that satisfies `requirement`.
pub trait TransformPolicy {
    /// Returns the transforms to apply, in order.
    ///
    /// An empty vector means that `requirement` is already satisfied.
    ///
    /// # Errors
    ///
    /// Implementations should return an `ErrorKind::UnsatisfiableRequirement` error
    /// if there is no way to reach `requirement` from `current`.
    fn select(
        &self,
        current: DimensionType,
        requirement: TargetType,
    ) -> Result<Vec<Box<dyn Transform>>>;
}
impl<F> TransformPolicy for F
where
    F: Fn(DimensionType, TargetType) -> Result<Vec<Box<dyn Transform>>>,
{
    fn select(
        &self,
        current: DimensionType,
        requirement: TargetType,
    ) -> Result<Vec<Box<dyn Transform>>> {
        self(current, requirement)
    }
}

/// A policy that never transforms anything.
///
/// It accepts an invariant requirement or one equal to the current type,
/// and rejects everything else.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;
impl TransformPolicy for PassThrough {
    fn select(
        &self,
        current: DimensionType,
        requirement: TargetType,
    ) -> Result<Vec<Box<dyn Transform>>> {
        track_assert!(
            requirement.is_invariant() || requirement == TargetType::from(current),
            ErrorKind::UnsatisfiableRequirement,
            "No transform from {} to {}",
            current,
            requirement
        );
        Ok(Vec::new())
    }
}

type Factory = Box<dyn Fn() -> Box<dyn Transform> + Send + Sync>;

/// A lookup table from `(current type, requirement)` to the transforms to instantiate.
///
/// Pairs that are not in the table are handled by `PassThrough`.
///
/// # Examples
///
/// ```
/// use henkan::policy::{TransformPolicy, TransformTable};
/// use henkan::transforms::{Identity, Transform};
/// use henkan::types::{DimensionType, TargetType};
///
/// let table = TransformTable::new().route(DimensionType::Integer, TargetType::Real, || {
///     Box::new(Identity) as Box<dyn Transform>
/// });
/// let selected = table.select(DimensionType::Integer, TargetType::Real).unwrap();
/// assert_eq!(selected.len(), 1);
/// assert!(table.select(DimensionType::Real, TargetType::Integer).is_err());
/// ```
#[derive(Default)]
pub struct TransformTable {
    routes: HashMap<(DimensionType, TargetType), Vec<Factory>>,
}
impl TransformTable {
    /// Makes a new empty `TransformTable` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transform to the route from `current` to `requirement`.
    ///
    /// Transforms registered for the same pair are applied in registration order.
    pub fn route<F>(mut self, current: DimensionType, requirement: TargetType, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Transform> + Send + Sync + 'static,
    {
        self.routes
            .entry((current, requirement))
            .or_insert_with(Vec::new)
            .push(Box::new(factory));
        self
    }

    /// Returns the number of transforms routed from `current` to `requirement`.
    pub fn route_len(&self, current: DimensionType, requirement: TargetType) -> usize {
        self.routes
            .get(&(current, requirement))
            .map_or(0, |factories| factories.len())
    }
}
impl TransformPolicy for TransformTable {
    fn select(
        &self,
        current: DimensionType,
        requirement: TargetType,
    ) -> Result<Vec<Box<dyn Transform>>> {
        if let Some(factories) = self.routes.get(&(current, requirement)) {
            Ok(factories.iter().map(|f| f()).collect())
        } else {
            track!(PassThrough.select(current, requirement))
        }
    }
}
impl fmt::Debug for TransformTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut routes = self
            .routes
            .iter()
            .map(|(&(from, to), factories)| (from.as_str(), to.as_str(), factories.len()))
            .collect::<Vec<_>>();
        routes.sort();
        f.debug_struct("TransformTable")
            .field("routes", &routes)
            .finish()
    }
}
