//! Three-component vector math for grid fields.
//!
//! [`Vec3`] is a plain `f64` value type with the usual component-wise
//! arithmetic. The time-stepping layer only needs one scalar out of it, the
//! largest velocity magnitude in a field (see [`Vec3::max_magnitude`]), but
//! field solvers lean on the rest for advection and boundary handling.

use std::{
    f64::consts::PI,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// Tolerance used to snap tiny or near-unit magnitudes.
pub const VECTOR_EPSILON: f64 = 1e-6;

/// A three-component vector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Constructs a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the component-wise minimum of two vectors.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Returns the component-wise maximum of two vectors.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Projects the vector into the plane normal to `n`.
    ///
    /// `n` must have unit length.
    #[must_use]
    pub fn project_normal_to(self, n: Self) -> Self {
        self - n * self.dot(n)
    }

    #[must_use]
    pub fn norm_squared(self) -> f64 {
        self.dot(self)
    }

    /// Returns the magnitude of the vector.
    ///
    /// Magnitudes within [`VECTOR_EPSILON`] of zero or one are snapped to
    /// exactly `0.0` or `1.0`.
    #[must_use]
    pub fn norm(self) -> f64 {
        let ls = self.norm_squared();
        let eps2 = VECTOR_EPSILON * VECTOR_EPSILON;
        if ls <= eps2 {
            0.0
        } else if (ls - 1.0).abs() < eps2 {
            1.0
        } else {
            ls.sqrt()
        }
    }

    /// Returns the sum of the components.
    #[must_use]
    pub fn sum(self) -> f64 {
        self.x + self.y + self.z
    }

    /// Returns the component-wise absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Returns a unit vector with the same direction.
    ///
    /// The zero vector normalizes to itself.
    #[must_use]
    pub fn normalize(self) -> Self {
        let l = self.norm();
        if l == 0.0 { Self::ZERO } else { self / l }
    }

    /// Returns a unit vector orthogonal to `self`.
    ///
    /// The helper axis is the one after the dominant component, so the cross
    /// product never degenerates for a non-zero input.
    #[must_use]
    pub fn orthogonal(self) -> Self {
        let a = self.abs();
        let mut max_index = 0;
        let mut m = a.x;
        if a.y > m {
            max_index = 1;
            m = a.y;
        }
        if a.z > m {
            max_index = 2;
        }

        let axis = match (max_index + 1) % 3 {
            0 => Self::new(1.0, 0.0, 0.0),
            1 => Self::new(0.0, 1.0, 0.0),
            _ => Self::new(0.0, 0.0, 1.0),
        };
        self.cross(axis).normalize()
    }

    /// Converts the vector to polar angles `(phi, theta)`.
    ///
    /// `phi` lies in `[0, 2π)` around the y axis, `theta` in `[0, π]` measured
    /// from the positive y axis.
    #[must_use]
    pub fn to_angles(self) -> (f64, f64) {
        let Self { x, y, z } = self;

        let mut theta = if y.abs() < VECTOR_EPSILON {
            PI / 2.0
        } else if x.abs() < VECTOR_EPSILON && z.abs() < VECTOR_EPSILON {
            if y >= 0.0 { 0.0 } else { PI }
        } else {
            ((x * x + z * z).sqrt() / y).atan()
        };
        if theta < 0.0 {
            theta += PI;
        }

        let mut phi = if x.abs() < VECTOR_EPSILON {
            PI / 2.0
        } else {
            (z / x).atan()
        };
        if phi < 0.0 {
            phi += PI;
        }
        if z.abs() < VECTOR_EPSILON {
            phi = if x >= 0.0 { 0.0 } else { PI };
        } else if z < 0.0 {
            phi += PI;
        }

        (phi, theta)
    }

    /// Reflects `self` about the plane with normal `n`.
    ///
    /// The normal is flipped to face the incoming vector if needed.
    #[must_use]
    pub fn reflect(self, n: Self) -> Self {
        let n = if self.dot(n) > 0.0 { -n } else { n };
        self - n * (2.0 * self.dot(n))
    }

    /// Refracts `self` through a surface with unit `normal`.
    ///
    /// `nt` is the refractive index of the medium being entered and `nair`
    /// the one being left. Total internal reflection yields the zero vector.
    #[must_use]
    pub fn refract(self, normal: Self, nt: f64, nair: f64) -> Self {
        let eta = nair / nt;
        let n = -self.dot(normal);
        let tt = 1.0 + eta * eta * (n * n - 1.0);
        if tt < 0.0 {
            return Self::ZERO;
        }
        let tt = eta * n - tt.sqrt();
        self * eta + normal * tt
    }

    /// Returns the largest magnitude in a collection of vectors.
    ///
    /// This is the largest [`norm`](Self::norm), so near-zero and near-unit
    /// magnitudes are snapped the same way. It is the scalar a timestep
    /// controller consumes. An empty collection yields `0.0`.
    pub fn max_magnitude<I>(vectors: I) -> f64
    where
        I: IntoIterator<Item = Self>,
    {
        vectors
            .into_iter()
            .map(Self::norm)
            .fold(0.0, f64::max)
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Component-wise product.
impl Mul for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
}

/// Component-wise quotient.
impl Div for Vec3 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, k: f64) -> Self {
        Self::new(self.x / k, self.y / k, self.z / k)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn dot_multiplies_every_component() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_relative_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn abs_keeps_positive_components() {
        let v = Vec3::new(-1.5, 2.0, 0.0);
        assert_eq!(v.abs(), Vec3::new(1.5, 2.0, 0.0));
    }

    #[test]
    fn norm_snaps_near_zero_and_near_one() {
        assert_eq!(Vec3::new(1e-7, 0.0, 0.0).norm(), 0.0);
        assert_eq!(Vec3::new(1.0, 0.0, 0.0).norm(), 1.0);
        assert_relative_eq!(Vec3::new(3.0, 4.0, 0.0).norm(), 5.0);
    }

    #[test]
    fn normalize_divides_by_length() {
        let v = Vec3::new(0.0, 3.0, 4.0).normalize();
        assert_relative_eq!(v.y, 0.6);
        assert_relative_eq!(v.z, 0.8);
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }

    #[test]
    fn project_normal_to_removes_normal_component() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let n = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(v.project_normal_to(n), Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn component_wise_min_max() {
        let a = Vec3::new(1.0, 5.0, -2.0);
        let b = Vec3::new(3.0, 0.0, -1.0);
        assert_eq!(a.min(b), Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(a.max(b), Vec3::new(3.0, 5.0, -1.0));
    }

    #[test]
    fn reflect_flips_normal_component() {
        let incoming = Vec3::new(1.0, -1.0, 0.0);
        let up = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(incoming.reflect(up), Vec3::new(1.0, 1.0, 0.0));
        // Normal facing away from the incoming ray gives the same result.
        assert_eq!(incoming.reflect(-up), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn refract_straight_through_matching_media() {
        let incoming = Vec3::new(0.0, -1.0, 0.0);
        let normal = Vec3::new(0.0, 1.0, 0.0);
        let out = incoming.refract(normal, 1.0, 1.0);
        assert_relative_eq!(out.y, -1.0);
        assert_relative_eq!(out.x, 0.0);
    }

    #[test]
    fn refract_total_internal_reflection_is_zero() {
        // Grazing ray leaving a dense medium.
        let incoming = Vec3::new(1.0, -0.1, 0.0).normalize();
        let normal = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(incoming.refract(normal, 1.0, 1.5), Vec3::ZERO);
    }

    #[test]
    fn to_angles_on_axes() {
        let (phi, theta) = Vec3::new(0.0, 1.0, 0.0).to_angles();
        assert_relative_eq!(theta, 0.0);
        assert_relative_eq!(phi, 0.0);

        let (phi, theta) = Vec3::new(1.0, 0.0, 0.0).to_angles();
        assert_relative_eq!(theta, PI / 2.0);
        assert_relative_eq!(phi, 0.0);

        let (phi, theta) = Vec3::new(-1.0, 0.0, 0.0).to_angles();
        assert_relative_eq!(theta, PI / 2.0);
        assert_relative_eq!(phi, PI);

        let (phi, _) = Vec3::new(0.0, 0.0, -1.0).to_angles();
        assert_relative_eq!(phi, 3.0 * PI / 2.0);
    }

    #[test]
    fn max_magnitude_of_field() {
        let field = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, -3.0, 4.0),
            Vec3::new(2.0, 2.0, 0.0),
        ];
        assert_relative_eq!(Vec3::max_magnitude(field), 5.0);
        assert_eq!(Vec3::max_magnitude(std::iter::empty::<Vec3>()), 0.0);
    }

    #[test]
    fn max_magnitude_snaps_like_norm() {
        let still = [Vec3::new(1e-7, 0.0, 0.0), Vec3::new(0.0, -5e-7, 0.0)];
        assert_eq!(Vec3::max_magnitude(still), 0.0);

        let unit = [Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 1.0 + 1e-13, 0.0)];
        assert_eq!(Vec3::max_magnitude(unit), 1.0);
    }

    fn component() -> impl Strategy<Value = f64> {
        -1.0e3..1.0e3
    }

    fn vec3() -> impl Strategy<Value = Vec3> {
        (component(), component(), component()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn orthogonal_is_unit_and_perpendicular(v in vec3()) {
            prop_assume!(v.norm() > 1e-3);
            let o = v.orthogonal();
            prop_assert!((o.norm_squared() - 1.0).abs() < 1e-9);
            prop_assert!(v.dot(o).abs() < 1e-9 * v.norm().max(1.0));
        }

        #[test]
        fn abs_is_never_negative(v in vec3()) {
            let a = v.abs();
            prop_assert!(a.x >= 0.0 && a.y >= 0.0 && a.z >= 0.0);
            prop_assert_eq!(a.abs(), a);
        }
    }
}
