use std::fmt;

/// Configuration rejected before any output is written
///
/// Raised when user-supplied flags are contradictory or a required input is
/// missing, e.g. a build target named without a manifest, or a resource path
/// that does not exist under the root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError(message.into())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error: {}", self.0)
    }
}

impl std::error::Error for ValidationError {}

/// Internal-consistency fault
///
/// Not a user error and not recoverable: it means the compiler broke one of
/// its own invariants, e.g. a resource identifier path too short to name both
/// a parent namespace and a leaf constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation(pub String);

impl InvariantViolation {
    pub fn new(message: impl Into<String>) -> Self {
        InvariantViolation(message.into())
    }
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "internal invariant violated: {}", self.0)
    }
}

impl std::error::Error for InvariantViolation {}
