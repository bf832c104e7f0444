use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

use crate::{
    approx::{ApproxEq, TOLERANCE},
    error::VectorError,
};

/// Operations shared by every vector dimensionality.
///
/// Implementors are plain `Copy` value types. No operation mutates its
/// operands; "modifying" a vector always produces a new one. Componentwise
/// addition, subtraction, scaling and negation are part of the contract via
/// the operator supertraits, which is what lets callers write
/// dimension-agnostic code such as [`angle_between`].
///
/// The [`fmt::Display`] supertrait provides the human-readable diagnostic
/// form of a vector, `(x, y)` or `(x, y, z)`.
pub trait Vector:
    Copy
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Neg<Output = Self>
    + ApproxEq<Tolerance = f32>
    + Sized
{
    /// The vector with every component set to zero.
    const ZERO: Self;

    /// Computes the dot product of `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the
    ///   vectors is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// Also see [`angle_between`] for computing the exact angle between them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use openmodel_linalg::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    fn dot(self, other: Self) -> f32;

    /// Computes the cross product of `self` and `other`, if this
    /// dimensionality has one.
    ///
    /// Only 3-dimensional vectors have a cross product: [`Vec3`] returns
    /// `Some` (see [`Vec3::cross`] for the direct form), while [`Vec2`]
    /// always returns `None` since no 2D analog exists.
    ///
    /// # Examples
    ///
    /// ```
    /// # use openmodel_linalg::*;
    /// assert_eq!(Vec3::X.checked_cross(Vec3::Y), Some(Vec3::Z));
    /// assert_eq!(Vec2::X.checked_cross(Vec2::Y), None);
    /// ```
    ///
    /// [`Vec2`]: crate::Vec2
    /// [`Vec3`]: crate::Vec3
    /// [`Vec3::cross`]: crate::Vec3::cross
    fn checked_cross(self, other: Self) -> Option<Self>;

    /// Returns the squared magnitude of `self`.
    ///
    /// Cheaper than [`Vector::magnitude`] since it skips the square root;
    /// prefer it for comparing lengths.
    fn magnitude2(self) -> f32 {
        self.dot(self)
    }

    /// Returns the magnitude (Euclidean norm) of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use openmodel_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).magnitude(), 5.0);
    /// ```
    fn magnitude(self) -> f32 {
        self.magnitude2().sqrt()
    }

    /// Divides `self` by its magnitude, resulting in a unit vector.
    ///
    /// Returns [`VectorError::DegenerateVector`] if the magnitude of `self`
    /// is within [`TOLERANCE`] of zero: such a vector has no meaningful
    /// direction to preserve, and dividing by its magnitude would only
    /// produce non-finite components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use openmodel_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize()?;
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    ///
    /// assert_eq!(Vec2::ZERO.normalize(), Err(VectorError::DegenerateVector));
    /// # Ok::<(), openmodel_linalg::VectorError>(())
    /// ```
    fn normalize(self) -> Result<Self, VectorError> {
        let mag = self.magnitude();
        if mag <= TOLERANCE {
            return Err(VectorError::DegenerateVector);
        }
        self.divide(mag)
    }

    /// Divides every component of `self` by `scalar`.
    ///
    /// Returns [`VectorError::ZeroDivisor`] if `scalar` is zero, instead of
    /// letting infinities or NaNs into the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use openmodel_linalg::*;
    /// assert_eq!(vec2(2.0, 4.0).divide(2.0), Ok(vec2(1.0, 2.0)));
    /// assert_eq!(vec2(2.0, 4.0).divide(0.0), Err(VectorError::ZeroDivisor));
    /// ```
    fn divide(self, scalar: f32) -> Result<Self, VectorError> {
        if scalar == 0.0 {
            return Err(VectorError::ZeroDivisor);
        }
        Ok(self * scalar.recip())
    }

    /// Compares `self` and `other` for componentwise approximate equality,
    /// with [`TOLERANCE`].
    ///
    /// Every component pair must match within the tolerance. Sharing a
    /// magnitude is not enough: `vec2(1.0, 0.0)` and `vec2(0.0, 1.0)` have
    /// the same length but compare unequal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use openmodel_linalg::*;
    /// assert!(vec2(1.0, 0.0).approx_eq(vec2(1.00001, 0.0)));
    /// assert!(!vec2(1.0, 0.0).approx_eq(vec2(0.0, 1.0)));
    /// ```
    fn approx_eq(self, other: Self) -> bool {
        self.abs_diff_eq(&other, TOLERANCE)
    }
}

/// Computes the smallest angle between `a` and `b`, in radians.
///
/// The result is in `[0, π]`. Both operands must be the same variant (the
/// single type parameter enforces this) and have non-zero magnitude;
/// [`VectorError::DegenerateVector`] is returned otherwise.
///
/// The cosine ratio is clamped to `[-1.0, 1.0]` before the inverse cosine is
/// taken: floating-point rounding can push the ratio slightly outside the
/// `acos` domain for (anti)parallel operands, which would otherwise yield
/// NaN.
///
/// # Examples
///
/// ```
/// # use openmodel_linalg::*;
/// use std::f32::consts::FRAC_PI_2;
///
/// let angle = angle_between(Vec2::X, Vec2::Y)?;
/// assert_approx_eq!(angle, FRAC_PI_2);
///
/// assert_eq!(
///     angle_between(Vec3::ZERO, Vec3::X),
///     Err(VectorError::DegenerateVector),
/// );
/// # Ok::<(), openmodel_linalg::VectorError>(())
/// ```
pub fn angle_between<V: Vector>(a: V, b: V) -> Result<f32, VectorError> {
    let (mag_a, mag_b) = (a.magnitude(), b.magnitude());
    if mag_a <= TOLERANCE || mag_b <= TOLERANCE {
        return Err(VectorError::DegenerateVector);
    }

    let cos = (a.dot(b) / (mag_a * mag_b)).clamp(-1.0, 1.0);
    Ok(cos.acos())
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, vec2, vec3, Vec2, Vec3};

    use super::*;

    #[test]
    fn angle_parallel() {
        assert_approx_eq!(angle_between(Vec2::X, Vec2::X).unwrap(), 0.0);
        assert_approx_eq!(angle_between(vec2(1.0, 0.0), vec2(3.0, 0.0)).unwrap(), 0.0);
    }

    #[test]
    fn angle_perpendicular() {
        assert_approx_eq!(angle_between(Vec2::X, Vec2::Y).unwrap(), FRAC_PI_2);
        assert_approx_eq!(angle_between(Vec3::X, Vec3::Y).unwrap(), FRAC_PI_2);
        assert_approx_eq!(
            angle_between(vec2(0.0, 2.0), vec2(-3.0, 0.0)).unwrap(),
            FRAC_PI_2
        );
    }

    #[test]
    fn angle_opposite() {
        assert_approx_eq!(angle_between(Vec2::Y, -Vec2::Y).unwrap(), PI);
        assert_approx_eq!(angle_between(Vec3::Z, -Vec3::Z).unwrap(), PI);
    }

    #[test]
    fn angle_degenerate() {
        assert_eq!(
            angle_between(Vec2::ZERO, Vec2::X),
            Err(VectorError::DegenerateVector)
        );
        assert_eq!(
            angle_between(Vec3::X, Vec3::ZERO),
            Err(VectorError::DegenerateVector)
        );
    }

    // The cosine ratio of parallel non-unit vectors can land slightly outside
    // [-1, 1]; the result must stay finite rather than turn into NaN.
    #[test]
    fn angle_domain_clamped() {
        let a = vec3(1.0, 2.0, 3.0);
        let angle = angle_between(a, a * 3.0).unwrap();
        assert!(angle.is_finite());
        assert_approx_eq!(angle, 0.0, 1e-3);

        let angle = angle_between(a, a * -3.0).unwrap();
        assert!(angle.is_finite());
        assert_approx_eq!(angle, PI, 1e-3);
    }

    #[test]
    fn magnitude_defaults() {
        assert_eq!(vec2(3.0, 4.0).magnitude2(), 25.0);
        assert_eq!(vec3(2.0, 3.0, 6.0).magnitude(), 7.0);
    }
}
