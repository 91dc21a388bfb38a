/// Returned when an operation needs a direction but the receiver is the
/// zero vector, which has none.
#[derive(thiserror::Error, Clone, Copy, Debug, Eq, PartialEq)]
#[error("the zero vector has no direction")]
pub struct ZeroVector;
