//! Approximate equality.
//!
//! Floating-point results in this crate are compared against an explicit
//! tolerance instead of with `==`. For more information on the subtleties of
//! approximate floating-point number comparison, see:
//! <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>

use std::fmt;

/// Default tolerance for approximate comparisons.
///
/// Two values whose absolute difference is at most this value compare equal
/// under [`Vector::approx_eq`][crate::Vector::approx_eq] and the default form
/// of [`assert_approx_eq!`][crate::assert_approx_eq]. A vector whose magnitude
/// is at most this value is treated as degenerate by
/// [`Vector::normalize`][crate::Vector::normalize] and
/// [`angle_between`][crate::angle_between].
pub const TOLERANCE: f32 = 1e-4;

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of
/// their components are. `NaN` is never approximately equal to anything;
/// non-finite values only compare equal if they are exactly equal.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type representing the tolerance for absolute and relative comparisons.
    ///
    /// This is [`f32`] for every type in this crate.
    type Tolerance: Copy;

    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is at most
    /// `abs_tolerance`, the values are considered to be equal.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is at most the
    /// largest of the two values times `rel_tolerance`, the values are
    /// considered to be equal.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;
}

impl ApproxEq for f32 {
    type Tolerance = Self;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        (self - other).abs() <= abs_tolerance
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        let largest = Self::max(self.abs(), other.abs());
        (self - other).abs() <= largest * rel_tolerance
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], abs_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], rel_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], abs_tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &[U; N], rel_tolerance: Self::Tolerance) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AssertionKind {
    Eq,
    Ne,
}

#[doc(hidden)]
#[track_caller]
pub fn assert_approx<T>(left: &T, right: &T, tolerance: T::Tolerance, kind: AssertionKind)
where
    T: ApproxEq + fmt::Debug + ?Sized,
{
    let equal = left.abs_diff_eq(right, tolerance);
    if (!equal && kind == AssertionKind::Eq) || (equal && kind == AssertionKind::Ne) {
        let op = match kind {
            AssertionKind::Eq => "==",
            AssertionKind::Ne => "!=",
        };
        panic!(
            r#"assertion `left {op} right` failed
  left: {left:?}
 right: {right:?}"#
        );
    }
}

/// Asserts that two expressions are approximately equal to each other (using
/// [`ApproxEq::abs_diff_eq`]).
///
/// This macro functions identically to [`assert_eq!`], except in that it
/// performs an approximate comparison. An optional third argument overrides
/// the [`TOLERANCE`] used by default.
///
/// Also see [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// # Examples
///
/// ```
/// # use openmodel_linalg::*;
/// let one = (0..10).fold(0.0f32, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// assert_approx_eq!(100.0f32, 99.0, 1.0);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::approx::assert_approx(
            &$left,
            &$right,
            $crate::approx::TOLERANCE,
            $crate::approx::AssertionKind::Eq,
        )
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        $crate::approx::assert_approx(
            &$left,
            &$right,
            $tolerance,
            $crate::approx::AssertionKind::Eq,
        )
    };
}

/// Asserts that two expressions are *not* approximately equal to each other
/// (using [`ApproxEq::abs_diff_eq`]).
///
/// This macro functions identically to [`assert_ne!`], except in that it
/// performs an approximate comparison. An optional third argument overrides
/// the [`TOLERANCE`] used by default.
///
/// Also see [`assert_approx_eq!`][crate::assert_approx_eq].
///
/// # Examples
///
/// ```
/// # use openmodel_linalg::*;
/// assert_approx_ne!(100.0f32, 99.0);
/// assert_approx_ne!(1.0f32, 1.5, 0.1);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($left:expr, $right:expr $(,)?) => {
        $crate::approx::assert_approx(
            &$left,
            &$right,
            $crate::approx::TOLERANCE,
            $crate::approx::AssertionKind::Ne,
        )
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        $crate::approx::assert_approx(
            &$left,
            &$right,
            $tolerance,
            $crate::approx::AssertionKind::Ne,
        )
    };
}
