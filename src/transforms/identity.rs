use crate::point::Point;
use crate::transforms::Transform;
use crate::types::TargetType;
use crate::Result;

/// A transform that keeps everything as it is.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;
impl Transform for Identity {
    fn transform(&self, point: &Point) -> Result<Point> {
        Ok(point.clone())
    }

    fn reverse(&self, transformed_point: &Point) -> Result<Point> {
        Ok(transformed_point.clone())
    }

    fn target_type(&self) -> TargetType {
        TargetType::Invariant
    }

    fn name(&self) -> &str {
        "Identity"
    }

    fn format(&self, what: &str) -> String {
        what.to_owned()
    }
}
