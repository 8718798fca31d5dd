use trackable::error::{ErrorKind as TrackableErrorKind, ErrorKindExt};
use trackable::error::{Failure, TrackableError};

/// This crate specific `Error` type.
#[derive(Debug, Clone, TrackableError)]
pub struct Error(TrackableError<ErrorKind>);
impl From<Failure> for Error {
    fn from(f: Failure) -> Self {
        ErrorKind::Other.takes_over(f).into()
    }
}

/// Possible error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid input was given.
    InvalidInput,

    /// A dimension declared a type that is not one of `real`, `integer` or `categorical`.
    UnsupportedDimensionType,

    /// No transform could be selected to reach the required type.
    UnsatisfiableRequirement,

    /// A value outside of the image of a transform was given to `Transform::reverse`.
    OutOfImage,

    /// Other error.
    Other,
}
impl TrackableErrorKind for ErrorKind {}
