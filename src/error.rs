use std::{error::Error, fmt};

/// Error returned by vector operations that received a degenerate input.
///
/// Every condition here is detectable from the inputs alone and recoverable:
/// the caller can handle the error or retry with different inputs. None of
/// the operations in this crate panic on degenerate values or let NaN /
/// infinity propagate silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorError {
    /// The operation requires a vector of non-zero magnitude, but the input's
    /// magnitude was approximately zero.
    ///
    /// Returned by [`Vector::normalize`][crate::Vector::normalize] and
    /// [`angle_between`][crate::angle_between], which have no meaningful
    /// result for a zero vector.
    DegenerateVector,
    /// A componentwise division by a scalar of zero was requested.
    ZeroDivisor,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateVector => f.write_str("vector magnitude is approximately zero"),
            Self::ZeroDivisor => f.write_str("attempted to divide a vector by a zero scalar"),
        }
    }
}

impl Error for VectorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            VectorError::DegenerateVector.to_string(),
            "vector magnitude is approximately zero"
        );
        assert_eq!(
            VectorError::ZeroDivisor.to_string(),
            "attempted to divide a vector by a zero scalar"
        );
    }
}
