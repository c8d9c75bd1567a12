// Copyright 2025 Ludic Engine contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides a Quaternion type for representing 3D rotations.

use serde::{Deserialize, Serialize};

use super::{Angle, Mat4, Vec3, Vec4};
use std::fmt;
use std::ops::{Mul, MulAssign};

/// A quaternion in scalar-first `(w, x, y, z)` layout.
///
/// A quaternion represents a rotation only when it is unit length
/// (`w² + x² + y² + z² = 1`). [`from_axis_angle`](Self::from_axis_angle)
/// yields a unit quaternion when given a unit axis; nothing in this API
/// normalizes or checks, and a non-unit quaternion fed to
/// [`to_mat4`](Self::to_mat4) silently produces a matrix that is not a
/// rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Quaternion {
    /// The scalar (real) part.
    pub w: f32,
    /// The x component of the vector part.
    pub x: f32,
    /// The y component of the vector part.
    pub y: f32,
    /// The z component of the vector part.
    pub z: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new quaternion from its raw components, scalar first.
    ///
    /// This does not guarantee a unit quaternion; for rotations prefer
    /// [`from_axis_angle`](Self::from_axis_angle).
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Creates a quaternion representing a rotation around a given axis by
    /// a given angle.
    ///
    /// `axis` must be a unit vector; this is not checked, and a non-unit
    /// axis silently produces a non-unit quaternion.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: &Angle) -> Self {
        let half = angle.radians() * 0.5;
        let s = half.sin();
        Self {
            w: half.cos(),
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
        }
    }

    /// Converts this quaternion to the equivalent 4x4 homogeneous rotation
    /// matrix.
    ///
    /// The fourth row and column are fixed to `(0, 0, 0, 1)`: the result is
    /// always a pure rotation, never a general affine transform.
    pub fn to_mat4(&self) -> Mat4 {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        let (xx, yy, zz) = (x * x, y * y, z * z);
        Mat4::from_rows(
            Vec4::new(
                1.0 - 2.0 * (yy + zz),
                2.0 * (x * y - w * z),
                2.0 * (x * z + w * y),
                0.0,
            ),
            Vec4::new(
                2.0 * (x * y + w * z),
                1.0 - 2.0 * (xx + zz),
                2.0 * (y * z - w * x),
                0.0,
            ),
            Vec4::new(
                2.0 * (x * z - w * y),
                2.0 * (y * z + w * x),
                1.0 - 2.0 * (xx + yy),
                0.0,
            ),
            Vec4::W,
        )
    }
}

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Vec4> for Quaternion {
    /// Reinterprets a `Vec4` as a quaternion, taking the vector's `w` as
    /// the scalar part.
    #[inline]
    fn from(v: Vec4) -> Self {
        Self::new(v.w, v.x, v.y, v.z)
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations using the Hamilton product.
    /// Quaternion multiplication is not commutative: `a * b` applies `b`
    /// first, then `a`.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            z: self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
        }
    }
}

impl MulAssign<Quaternion> for Quaternion {
    /// Combines this rotation with another in place.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Quaternion {
    /// Formats the quaternion scalar-first with three decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}, {:.3}, {:.3}]",
            self.w, self.x, self.y, self.z
        )
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, Mat3, EPSILON, FRAC_PI_2, PI};
    use approx::assert_relative_eq;

    fn mat4_approx_eq(a: Mat4, b: Mat4) -> bool {
        (0..4).all(|r| {
            (0..4).all(|c| approx_eq(a.rows[r].get(c), b.rows[r].get(c)))
        })
    }

    #[test]
    fn test_identity_and_default() {
        let q = Quaternion::default();
        assert_eq!(q, Quaternion::IDENTITY);
        assert_eq!(q.w, 1.0);
        assert_eq!(q.x, 0.0);
        assert_eq!(q.y, 0.0);
        assert_eq!(q.z, 0.0);
    }

    #[test]
    fn test_identity_to_mat4_is_identity() {
        assert_eq!(Quaternion::IDENTITY.to_mat4(), Mat4::IDENTITY);
    }

    #[test]
    fn test_from_axis_angle_half_angle_terms() {
        let angle = Angle::from_radians(FRAC_PI_2);
        let q = Quaternion::from_axis_angle(Vec3::Y, &angle);

        let half = FRAC_PI_2 * 0.5;
        assert_relative_eq!(q.w, half.cos(), epsilon = EPSILON);
        assert_relative_eq!(q.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(q.y, half.sin(), epsilon = EPSILON);
        assert_relative_eq!(q.z, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_from_axis_angle_does_not_normalize() {
        // The unit-axis precondition is the caller's responsibility.
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 5.0, 0.0), &Angle::from_radians(1.0));
        let magnitude_sq = q.w * q.w + q.x * q.x + q.y * q.y + q.z * q.z;
        assert!(magnitude_sq > 1.0 + EPSILON);
    }

    #[test]
    fn test_to_mat4_matches_axis_angle_matrix() {
        let axis = Vec3::new(1.0, -2.0, 3.0).normalize();
        let angle = Angle::from_radians(PI / 7.0);
        let from_quat = Quaternion::from_axis_angle(axis, &angle).to_mat4();
        let from_rodrigues = Mat3::from_axis_angle(axis, &angle).to_mat4();
        assert!(mat4_approx_eq(from_quat, from_rodrigues));
    }

    #[test]
    fn test_to_mat4_is_rotation() {
        let axis = Vec3::new(0.5, 0.5, -1.0).normalize();
        let q = Quaternion::from_axis_angle(axis, &Angle::from_degrees(73.0));
        let m = q.to_mat4();

        // Rotating preserves length and fixes the homogeneous row/column.
        let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
        let rotated = m * v;
        assert!(approx_eq(rotated.truncate().length(), v.truncate().length()));
        assert!(approx_eq(rotated.w, 1.0));
        assert_eq!(m.rows[3], Vec4::W);
        assert_eq!(m.col(3), Vec4::W);
    }

    #[test]
    fn test_multiplication_identity() {
        let q = Quaternion::from_axis_angle(Vec3::Y, &Angle::from_radians(FRAC_PI_2));
        assert_eq!(q * Quaternion::IDENTITY, q);

        let id_q = Quaternion::IDENTITY * q;
        assert_relative_eq!(id_q.w, q.w, epsilon = EPSILON);
        assert_relative_eq!(id_q.x, q.x, epsilon = EPSILON);
        assert_relative_eq!(id_q.y, q.y, epsilon = EPSILON);
        assert_relative_eq!(id_q.z, q.z, epsilon = EPSILON);
    }

    #[test]
    fn test_multiplication_is_not_commutative() {
        let qx = Quaternion::from_axis_angle(Vec3::X, &Angle::from_radians(FRAC_PI_2));
        let qy = Quaternion::from_axis_angle(Vec3::Y, &Angle::from_radians(FRAC_PI_2));
        assert_ne!(qx * qy, qy * qx);
    }

    #[test]
    fn test_multiplication_composes_rotations() {
        let angle_a = Angle::from_radians(0.4);
        let angle_b = Angle::from_radians(1.1);
        let qa = Quaternion::from_axis_angle(Vec3::Z, &angle_a);
        let qb = Quaternion::from_axis_angle(Vec3::Z, &angle_b);

        // Same axis: products compose the angles.
        let composed = qa * qb;
        let expected = Quaternion::from_axis_angle(Vec3::Z, &Angle::from_radians(1.5));
        assert_relative_eq!(composed.w, expected.w, epsilon = EPSILON);
        assert_relative_eq!(composed.x, expected.x, epsilon = EPSILON);
        assert_relative_eq!(composed.y, expected.y, epsilon = EPSILON);
        assert_relative_eq!(composed.z, expected.z, epsilon = EPSILON);
    }

    #[test]
    fn test_multiplication_matches_matrix_product() {
        let q1 = Quaternion::from_axis_angle(
            Vec3::new(1.0, 1.0, 0.0).normalize(),
            &Angle::from_radians(0.8),
        );
        let q2 = Quaternion::from_axis_angle(
            Vec3::new(0.0, -1.0, 2.0).normalize(),
            &Angle::from_radians(-1.4),
        );
        assert!(mat4_approx_eq(
            (q1 * q2).to_mat4(),
            q1.to_mat4() * q2.to_mat4()
        ));
    }

    #[test]
    fn test_mul_assign() {
        let qx = Quaternion::from_axis_angle(Vec3::X, &Angle::from_radians(0.3));
        let qy = Quaternion::from_axis_angle(Vec3::Y, &Angle::from_radians(0.9));
        let mut q = qx;
        q *= qy;
        assert_eq!(q, qx * qy);
    }

    #[test]
    fn test_hamilton_product_term_signs() {
        // Exercise every term of the Hamilton product against hand-computed
        // values: (w 1, x 2, y 3, z 4) * (w 5, x 6, y 7, z 8).
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
        let p = a * b;
        assert_eq!(p.w, 1.0 * 5.0 - 2.0 * 6.0 - 3.0 * 7.0 - 4.0 * 8.0); // -60
        assert_eq!(p.x, 1.0 * 6.0 + 2.0 * 5.0 + 3.0 * 8.0 - 4.0 * 7.0); // 12
        assert_eq!(p.y, 1.0 * 7.0 + 3.0 * 5.0 + 4.0 * 6.0 - 2.0 * 8.0); // 30
        assert_eq!(p.z, 1.0 * 8.0 + 4.0 * 5.0 + 2.0 * 7.0 - 3.0 * 6.0); // 24
    }

    #[test]
    fn test_from_vec4_is_scalar_first() {
        let q = Quaternion::from(Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(q, Quaternion::new(4.0, 1.0, 2.0, 3.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Quaternion::IDENTITY.to_string(),
            "[1.000, 0.000, 0.000, 0.000]"
        );
    }
}
