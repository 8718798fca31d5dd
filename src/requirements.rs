//! Building a space that agrees to the requirements of an optimization algorithm.
use crate::policy::TransformPolicy;
use crate::space::Space;
use crate::transformed::{TransformedDimension, TransformedSpace};
use crate::transforms::{Composite, Transform};
use crate::types::TargetType;
use crate::Result;
use std::iter::FromIterator;
use std::slice;
use std::sync::Arc;

/// Ordered list of types that an optimization algorithm requires its space to be expressed in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Requirements(Vec<TargetType>);
impl Requirements {
    /// Makes a new `Requirements` instance.
    pub fn new(requirements: Vec<TargetType>) -> Self {
        Self(requirements)
    }

    /// Returns an iterator over the requirements in order.
    pub fn iter(&self) -> slice::Iter<'_, TargetType> {
        self.0.iter()
    }

    /// Returns the number of requirements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no requirements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl From<TargetType> for Requirements {
    fn from(f: TargetType) -> Self {
        Self(vec![f])
    }
}
impl From<Vec<TargetType>> for Requirements {
    fn from(f: Vec<TargetType>) -> Self {
        Self(f)
    }
}
impl<'a> From<&'a [TargetType]> for Requirements {
    fn from(f: &'a [TargetType]) -> Self {
        Self(f.to_vec())
    }
}
impl FromIterator<TargetType> for Requirements {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = TargetType>,
    {
        Self(iter.into_iter().collect())
    }
}
impl<'a> IntoIterator for &'a Requirements {
    type Item = &'a TargetType;
    type IntoIter = slice::Iter<'a, TargetType>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds a `TransformedSpace` which agrees to the `requirements` imposed
/// by an optimization algorithm.
///
/// For every dimension of `original_space`, `policy` is asked in turn for the
/// transforms leading to each requirement, and the selected transforms are
/// composed into a single one.
///
/// # Errors
///
/// - `ErrorKind::UnsupportedDimensionType` if a dimension declares an unknown type
/// - any error returned by `policy`
pub fn build_required_space<R, P>(
    requirements: R,
    original_space: &Space,
    policy: &P,
) -> Result<TransformedSpace>
where
    R: Into<Requirements>,
    P: TransformPolicy + ?Sized,
{
    let requirements = requirements.into();
    let mut space = TransformedSpace::new();
    for dim in original_space.values() {
        let mut current = track!(dim.dimension_type())?;
        let mut transforms: Vec<Box<dyn Transform>> = Vec::new();
        for &requirement in &requirements {
            let selected = track!(
                policy.select(current, requirement);
                dim.name(),
                current,
                requirement
            )?;
            log::trace!(
                "Selected {} transform(s) for {:?}: {} -> {}",
                selected.len(),
                dim.name(),
                current,
                requirement
            );
            if let Some(t) = selected.iter().rev().find(|t| !t.target_type().is_invariant()) {
                current = t.target_type().resolve(current);
            }
            transforms.extend(selected);
        }

        let transformer = Composite::new(transforms);
        let transformed = track!(TransformedDimension::new(
            Box::new(transformer),
            Arc::clone(dim)
        ))?;
        log::debug!("Transformed dimension: {}", transformed);
        track!(space.register(transformed))?;
    }
    Ok(space)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::{Categorical, Dimension, Integer, Real};
    use crate::point::{Point, Shape};
    use crate::policy::{PassThrough, TransformTable};
    use crate::space::SearchSpace;
    use crate::test_util::{Enumerate, Offset, Widen};
    use crate::types::DimensionType;
    use crate::ErrorKind;
    use std::fmt;
    use trackable::result::TestResult;

    type Selection = Result<Vec<Box<dyn Transform>>>;

    fn labels() -> Vec<String> {
        vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]
    }

    fn space() -> Result<Space> {
        let mut space = Space::new();
        track!(space.register(track!(Integer::new("a", 0, 10))?))?;
        track!(space.register(track!(Categorical::new("b", labels()))?))?;
        track!(space.register(track!(Integer::new("c", -5, 5))?))?;
        Ok(space)
    }

    fn table() -> TransformTable {
        TransformTable::new()
            .route(DimensionType::Categorical, TargetType::Integer, || {
                Box::new(Enumerate(labels()))
            })
            .route(DimensionType::Integer, TargetType::Real, || Box::new(Widen))
    }

    #[test]
    fn invariant_requirement_keeps_the_space() -> TestResult {
        let mut original = Space::new();
        track!(original.register(track!(Real::new("x", 0.0, 10.0))?))?;

        let space = track!(build_required_space(TargetType::Invariant, &original, &PassThrough))?;
        assert_eq!(space.len(), 1);

        let x = space.get("x").expect("x");
        assert_eq!(x.dimension_type(), DimensionType::Real);
        assert_eq!(track!(x.transform(&Point::Real(5.0)))?, Point::Real(5.0));
        assert_eq!(track!(x.reverse(&Point::Real(5.0)))?, Point::Real(5.0));
        assert_eq!(
            track!(x.interval(1.0))?,
            (Point::Real(0.0), Point::Real(10.0))
        );
        assert!(Arc::ptr_eq(
            x.original_dimension(),
            original.get("x").expect("x")
        ));
        Ok(())
    }

    #[test]
    fn requirements_are_chained() -> TestResult {
        let original = track!(space())?;
        let requirements = vec![TargetType::Integer, TargetType::Real];
        let space = track!(build_required_space(requirements, &original, &table()))?;

        let names = space.values().map(|d| d.name()).collect::<Vec<_>>();
        assert_eq!(names, ["a", "b", "c"]);
        let types = space.values().map(|d| d.dimension_type()).collect::<Vec<_>>();
        assert_eq!(types, [DimensionType::Real; 3]);

        let b = space.get("b").expect("b");
        assert_eq!(
            b.to_string(),
            r#"Widen(Enumerate(Categorical(name=b, categories=["a", "b", "c"])))"#
        );

        let point = vec![Point::Integer(4), Point::from("c"), Point::Integer(-3)];
        let transformed = track!(space.transform(&point))?;
        assert_eq!(
            transformed,
            vec![Point::Real(4.0), Point::Real(2.0), Point::Real(-3.0)]
        );
        assert_eq!(track!(space.reverse(&transformed))?, point);

        for p in track!(space.sample(10, Some(3)))? {
            assert!(space.contains(&p));
            assert!(original.contains(&track!(space.reverse(&p))?));
        }
        Ok(())
    }

    #[test]
    fn single_requirement_equals_singleton_list() -> TestResult {
        let original = track!(space())?;
        let policy = TransformTable::new()
            .route(DimensionType::Categorical, TargetType::Integer, || {
                Box::new(Enumerate(labels()))
            });
        let a = track!(build_required_space(TargetType::Integer, &original, &policy))?;
        let b = track!(build_required_space(vec![TargetType::Integer], &original, &policy))?;
        assert_eq!(a.to_string(), b.to_string());
        Ok(())
    }

    #[test]
    fn type_propagates_across_invariant_transforms() -> TestResult {
        let mut original = Space::new();
        track!(original.register(track!(Categorical::new("b", labels()))?))?;

        let policy = |current: DimensionType, requirement: TargetType| -> Selection {
            match (current, requirement) {
                (DimensionType::Categorical, TargetType::Integer) => {
                    Ok(vec![Box::new(Enumerate(labels())), Box::new(Offset(1))])
                }
                (DimensionType::Integer, TargetType::Invariant) => Ok(vec![Box::new(Offset(1))]),
                (DimensionType::Integer, TargetType::Integer) => Ok(Vec::new()),
                _ => track_panic!(ErrorKind::UnsatisfiableRequirement; current, requirement),
            }
        };
        let requirements = vec![
            TargetType::Integer,
            TargetType::Invariant,
            TargetType::Integer,
        ];
        let space = track!(build_required_space(requirements, &original, &policy))?;

        let b = space.get("b").expect("b");
        assert_eq!(b.dimension_type(), DimensionType::Integer);
        assert_eq!(track!(b.transform(&Point::from("a")))?, Point::Integer(2));
        Ok(())
    }

    #[test]
    fn unsupported_dimension_type_is_rejected() -> TestResult {
        #[derive(Debug)]
        struct Unknown;
        impl fmt::Display for Unknown {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "Unknown")
            }
        }
        impl Dimension for Unknown {
            fn name(&self) -> &str {
                "u"
            }
            fn type_tag(&self) -> &str {
                "unknown"
            }
            fn shape(&self) -> Shape {
                Vec::new()
            }
            fn sample(&self, n: usize, _seed: Option<u64>) -> Result<Vec<Point>> {
                Ok(vec![Point::Integer(0); n])
            }
            fn interval(&self, _alpha: f64) -> Result<(Point, Point)> {
                Ok((Point::Integer(0), Point::Integer(0)))
            }
            fn contains(&self, point: &Point) -> bool {
                *point == Point::Integer(0)
            }
        }

        let mut original = Space::new();
        track!(original.register(Unknown))?;

        let e = build_required_space(vec![TargetType::Real], &original, &table())
            .err()
            .map(|e| *e.kind());
        assert_eq!(e, Some(ErrorKind::UnsupportedDimensionType));
        Ok(())
    }

    #[test]
    fn unsatisfiable_requirement_is_rejected() -> TestResult {
        let original = track!(space())?;
        let e = build_required_space(TargetType::Real, &original, &PassThrough)
            .err()
            .map(|e| *e.kind());
        assert_eq!(e, Some(ErrorKind::UnsatisfiableRequirement));
        Ok(())
    }

    #[test]
    fn empty_requirements_wrap_with_identity() -> TestResult {
        let original = track!(space())?;
        let space = track!(build_required_space(Vec::new(), &original, &PassThrough))?;
        assert_eq!(space.len(), original.len());
        for (t, o) in space.values().zip(original.values()) {
            assert_eq!(t.to_string(), o.to_string());
            assert_eq!(t.type_tag(), o.type_tag());
        }
        Ok(())
    }
}
