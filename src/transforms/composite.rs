use crate::point::{Point, Shape};
use crate::transforms::{Identity, Transform};
use crate::types::TargetType;
use crate::Result;

/// A transform made of a sequence of transforms.
///
/// `Composite::new(vec![t1, t2, t3])` applies `t1`, `t2` and `t3` in that order
/// when transforming, and `t3`, `t2` and `t1` when reversing.
///
/// Internally the sequence is kept as a chain: the last transform (`apply`) is
/// applied after the composite of the preceding ones (`composition`).
/// The chain bottoms out at `Identity`.
#[derive(Debug)]
pub struct Composite {
    apply: Box<dyn Transform>,
    composition: Box<dyn Transform>,
    len: usize,
}
impl Composite {
    /// Makes a new `Composite` instance.
    ///
    /// An empty `transforms` makes a composite that behaves as `Identity`.
    pub fn new(transforms: Vec<Box<dyn Transform>>) -> Self {
        transforms
            .into_iter()
            .fold(Self::default(), |inner, outer| {
                let len = inner.len + 1;
                let composition: Box<dyn Transform> = if inner.len == 0 {
                    Box::new(Identity)
                } else {
                    Box::new(inner)
                };
                Self {
                    apply: outer,
                    composition,
                    len,
                }
            })
    }

    /// Returns the number of transforms in this composite.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if this composite has no transforms.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
impl Default for Composite {
    fn default() -> Self {
        Self {
            apply: Box::new(Identity),
            composition: Box::new(Identity),
            len: 0,
        }
    }
}
impl Transform for Composite {
    fn transform(&self, point: &Point) -> Result<Point> {
        let point = track!(self.composition.transform(point))?;
        track!(self.apply.transform(&point))
    }

    fn reverse(&self, transformed_point: &Point) -> Result<Point> {
        let point = track!(self.apply.reverse(transformed_point))?;
        track!(self.composition.reverse(&point))
    }

    fn infer_target_shape(&self, shape: &[usize]) -> Shape {
        let shape = self.composition.infer_target_shape(shape);
        self.apply.infer_target_shape(&shape)
    }

    fn target_type(&self) -> TargetType {
        self.apply.target_type().or(self.composition.target_type())
    }

    fn name(&self) -> &str {
        "Composite"
    }

    fn format(&self, what: &str) -> String {
        self.apply.format(&self.composition.format(what))
    }
}
