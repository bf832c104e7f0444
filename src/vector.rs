use std::fmt;

use crate::traits::Vector;

mod ops;

/// A 2-dimensional vector.
///
/// # Construction
///
/// - The freestanding [`vec2`] function directly creates a vector from the
///   provided components, as does [`Vec2::new`].
/// - [`Vec2::splat`] copies one value into both components.
/// - `Vec2` can be created from a `[f32; 2]` using its [`From`]
///   implementation.
/// - [`Vector::ZERO`], [`Vec2::X`] and [`Vec2::Y`] provide the zero vector
///   and the unit vectors.
///
/// # Element Access
///
/// Components are plain public fields `x` and `y`. The [`Index`] and
/// [`IndexMut`] impls can be used just like on arrays, and
/// [`Vec2::as_array`], [`Vec2::into_array`] and the [`From`] impls convert to
/// `[f32; 2]`. [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented
/// to allow safe transmutation.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// A 3-dimensional vector.
///
/// Construction and element access mirror [`Vec2`]; the third component is
/// `z`. This is the only variant with a cross product ([`Vec3::cross`]).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

unsafe impl bytemuck::Zeroable for Vec2 {}
unsafe impl bytemuck::Pod for Vec2 {}
unsafe impl bytemuck::Zeroable for Vec3 {}
unsafe impl bytemuck::Pod for Vec3 {}

impl Vec2 {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self::new(1.0, 0.0);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from its two components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Appends a Z component, yielding a [`Vec3`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use openmodel_linalg::*;
    /// assert_eq!(vec2(-1.0, 2.0).extend(5.0), vec3(-1.0, 2.0, 5.0));
    /// ```
    #[inline]
    pub const fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }

    /// Returns a reference to the components as an array of length 2.
    #[inline]
    pub fn as_array(&self) -> &[f32; 2] {
        bytemuck::cast_ref(self)
    }

    /// Returns a mutable reference to the components as an array of length 2.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 2] {
        bytemuck::cast_mut(self)
    }

    /// Converts this vector into a 2-element array.
    #[inline]
    pub const fn into_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Vec3 {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from its three components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all three components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Removes the Z component, yielding a [`Vec2`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use openmodel_linalg::*;
    /// assert_eq!(vec3(-1.0, 2.0, 3.5).truncate(), vec2(-1.0, 2.0));
    /// ```
    #[inline]
    pub const fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both operands. Its direction depends on
    /// the order of the arguments: swapping them inverts the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use openmodel_linalg::*;
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns a reference to the components as an array of length 3.
    #[inline]
    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    /// Returns a mutable reference to the components as an array of length 3.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 3] {
        bytemuck::cast_mut(self)
    }

    /// Converts this vector into a 3-element array.
    #[inline]
    pub const fn into_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Vector for Vec2 {
    const ZERO: Self = Self::splat(0.0);

    fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    fn checked_cross(self, _other: Self) -> Option<Self> {
        None
    }
}

impl Vector for Vec3 {
    const ZERO: Self = Self::splat(0.0);

    fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn checked_cross(self, other: Self) -> Option<Self> {
        Some(self.cross(other))
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from(value: [f32; 2]) -> Self {
        let [x, y] = value;
        Self::new(x, y)
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(value: Vec2) -> Self {
        value.into_array()
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(value: [f32; 3]) -> Self {
        let [x, y, z] = value;
        Self::new(x, y, z)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(value: Vec3) -> Self {
        value.into_array()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Constructs a [`Vec2`] from its two components.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Constructs a [`Vec3`] from its three components.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Computes the cross product of `a` and `b`.
///
/// Freestanding form of [`Vec3::cross`] for callers who prefer non-member
/// style; the results are identical.
///
/// # Examples
///
/// ```
/// # use openmodel_linalg::*;
/// assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
/// ```
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, assert_approx_ne, error::VectorError, traits::Vector};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3::X.x, 1.0);
        assert_eq!(Vec3::X.y, 0.0);
        assert_eq!(Vec3::X.z, 0.0);
        assert_eq!(Vec2::Y.y, 1.0);
        assert_eq!(Vec2::ZERO, vec2(0.0, 0.0));
        assert_eq!(Vec3::ZERO, vec3(0.0, 0.0, 0.0));

        let mut v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        v[1] = 777.0;
        assert_eq!(v, vec3(1.0, 777.0, 3.0));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec2(0.0, 1.0)), "(0, 1)");
        assert_eq!(format!("{}", vec3(1.0, -2.5, 0.0)), "(1, -2.5, 0)");
        assert_eq!(format!("{:?}", vec2(0.0, 1.0)), "Vec2 { x: 0.0, y: 1.0 }");
    }

    #[test]
    fn splat() {
        assert_eq!(Vec2::splat(2.0), vec2(2.0, 2.0));
        assert_eq!(Vec3::splat(-1.5), vec3(-1.5, -1.5, -1.5));
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(4.0, -2.0, -1.0)), 3.0);
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(1.0, 3.0, -5.0)), 35.0);

        assert_eq!(Vec2::X.dot(Vec2::X), 1.0);
        assert_eq!(Vec2::X.dot(Vec2::Y), 0.0);
        assert_eq!(Vec2::Y.dot(-Vec2::Y), -1.0);
    }

    #[test]
    fn cross_member_and_free() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
        assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::X.cross(Vec3::Y));

        let a = vec3(2.0, 3.0, 4.0);
        let b = vec3(5.0, 6.0, 7.0);
        assert_eq!(a.cross(b), vec3(-3.0, 6.0, -3.0));
    }

    #[test]
    fn cross_checked() {
        assert_eq!(Vec3::X.checked_cross(Vec3::Y), Some(Vec3::Z));
        // No 2D analog exists.
        assert_eq!(Vec2::X.checked_cross(Vec2::Y), None);
    }

    #[test]
    fn normalize() {
        assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), Ok(Vec3::Z));
        assert_approx_eq!(vec2(3.0, 4.0).normalize().unwrap(), vec2(0.6, 0.8));
        assert_approx_eq!(vec2(3.0, 4.0).normalize().unwrap().magnitude(), 1.0);

        assert_eq!(Vec2::ZERO.normalize(), Err(VectorError::DegenerateVector));
        assert_eq!(
            Vec3::splat(1e-5).normalize(),
            Err(VectorError::DegenerateVector)
        );
    }

    #[test]
    fn divide() {
        assert_eq!(vec2(2.0, 4.0).divide(2.0), Ok(vec2(1.0, 2.0)));
        assert_eq!(vec3(2.0, 4.0, 8.0).divide(-2.0), Ok(vec3(-1.0, -2.0, -4.0)));

        assert_eq!(vec2(2.0, 4.0).divide(0.0), Err(VectorError::ZeroDivisor));
        assert_eq!(Vec3::ZERO.divide(0.0), Err(VectorError::ZeroDivisor));
    }

    #[test]
    fn equality() {
        // Exact comparison distinguishes what the tolerance forgives.
        assert_ne!(vec2(1.0, 0.0), vec2(1.00001, 0.0));
        assert!(vec2(1.0, 0.0).approx_eq(vec2(1.00001, 0.0)));
        assert_approx_eq!(vec2(1.0, 0.0), vec2(1.00001, 0.0));

        assert!(!vec2(1.0, 0.0).approx_eq(vec2(1.001, 0.0)));

        // Equal magnitude, different direction: must compare unequal.
        assert!(!Vec2::X.approx_eq(Vec2::Y));
        assert_approx_ne!(Vec2::X, Vec2::Y);
        assert_approx_ne!(vec3(1.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn arrays() {
        assert_eq!(Vec2::from([1.0, 2.0]), vec2(1.0, 2.0));
        assert_eq!(<[f32; 3]>::from(vec3(1.0, 2.0, 3.0)), [1.0, 2.0, 3.0]);
        assert_eq!(vec3(1.0, 2.0, 3.0).into_array(), [1.0, 2.0, 3.0]);
        assert_eq!(vec2(1.0, 2.0).as_array(), &[1.0, 2.0]);

        let mut v = vec2(1.0, 2.0);
        v.as_mut_array()[1] = 5.0;
        assert_eq!(v, vec2(1.0, 5.0));

        let pod: Vec3 = bytemuck::cast([1.0f32, 2.0, 3.0]);
        assert_eq!(pod, vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn extend_truncate() {
        assert_eq!(vec2(1.0, 2.0).extend(3.0), vec3(1.0, 2.0, 3.0));
        assert_eq!(vec3(1.0, 2.0, 3.0).truncate(), vec2(1.0, 2.0));
    }

    #[test]
    fn operators() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, -5.0, 6.0);

        assert_eq!(a + b, vec3(5.0, -3.0, 9.0));
        assert_eq!(a - b, vec3(-3.0, 7.0, -3.0));
        assert_eq!(a * 2.0, vec3(2.0, 4.0, 6.0));
        assert_eq!(-a, vec3(-1.0, -2.0, -3.0));

        let mut c = vec2(1.0, 2.0);
        c += vec2(0.5, 0.5);
        assert_eq!(c, vec2(1.5, 2.5));
        c -= vec2(1.5, 0.5);
        assert_eq!(c, vec2(0.0, 2.0));
        c *= 2.0;
        assert_eq!(c, vec2(0.0, 4.0));
    }
}
