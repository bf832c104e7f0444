//! Implementations of `std::ops` and [`ApproxEq`] for the vector variants.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::approx::ApproxEq;

use super::{Vec2, Vec3};

// Scalar division is deliberately not implemented as an operator: a zero
// divisor must surface as `VectorError::ZeroDivisor` through
// `Vector::divide`, and `Div` has no way to report it.
macro_rules! componentwise_ops {
    ($ty:ty: $($field:ident),+) => {
        /// Componentwise negation.
        impl Neg for $ty {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        /// Componentwise addition.
        impl Add for $ty {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        /// Componentwise addition.
        impl AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        /// Componentwise subtraction.
        impl Sub for $ty {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        /// Componentwise subtraction.
        impl SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        /// Vector-scalar multiplication (scaling).
        impl Mul<f32> for $ty {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        /// Vector-scalar multiplication (scaling).
        impl MulAssign<f32> for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        /// Component access by position; out-of-range indices panic like
        /// array indexing.
        impl Index<usize> for $ty {
            type Output = f32;

            #[inline]
            fn index(&self, index: usize) -> &f32 {
                &self.as_array()[index]
            }
        }

        impl IndexMut<usize> for $ty {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.as_mut_array()[index]
            }
        }

        /// Componentwise approximate comparison.
        impl ApproxEq for $ty {
            type Tolerance = f32;

            fn abs_diff_eq(&self, other: &Self, abs_tolerance: f32) -> bool {
                self.as_array().abs_diff_eq(other.as_array(), abs_tolerance)
            }

            fn rel_diff_eq(&self, other: &Self, rel_tolerance: f32) -> bool {
                self.as_array().rel_diff_eq(other.as_array(), rel_tolerance)
            }
        }
    };
}

componentwise_ops!(Vec2: x, y);
componentwise_ops!(Vec3: x, y, z);
