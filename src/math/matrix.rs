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

//! Defines the `Mat3` and `Mat4` types and associated operations.
//!
//! Both matrices are stored row-major (`rows[r][c]` addresses row `r`,
//! column `c`) and multiply column vectors on the right:
//! `out_i = Σ_j m[i][j] * v_j`. Rotation constructors on [`Mat3`] assign
//! rows, so the produced matrices rotate vectors actively in a right-handed
//! frame.
//!
//! Every arithmetic operation comes in two forms: an allocating operator
//! (`+`, `-`, unary `-`, `*`) and an explicit output-parameter form
//! (`add_into`, `sub_into`, `negate_in_place`, `mul_vec3_into`) for
//! game-loop code that recycles storage.

use super::{Angle, Vec3, Vec4};
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub};

/// Determinant tolerance for [`Mat3::is_rotation_matrix`].
const ROTATION_DET_TOLERANCE: f32 = 1e-4;

// --- Errors ---

/// Error returned when constructing a matrix from a runtime grid whose
/// dimensions are not exactly N×N.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixShapeError {
    /// The required number of rows and columns.
    pub expected: usize,
    /// The number of rows the grid actually had.
    pub rows: usize,
    /// The number of columns of the first non-conforming row (or of the
    /// grid, when the row count itself is wrong).
    pub cols: usize,
}

impl fmt::Display for MatrixShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected a {n}x{n} grid, got {rows}x{cols}",
            n = self.expected,
            rows = self.rows,
            cols = self.cols
        )
    }
}

impl std::error::Error for MatrixShapeError {}

// --- Axis ---

/// A principal axis of the 3D coordinate frame, used to select a
/// single-axis rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The X-axis.
    X,
    /// The Y-axis.
    Y,
    /// The Z-axis.
    Z,
}

// --- Mat3 ---

/// A 3x3 row-major matrix, used for rotation and scale in 3D (and affine
/// transforms in 2D).
///
/// Matrices produced by the rotation constructors are orthonormal with
/// determinant 1 as long as the documented unit-axis preconditions hold;
/// this is an invariant of construction, not a separate type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// The rows of the matrix. `rows[0]` is the first row, and so on.
    pub rows: [Vec3; 3],
}

impl Mat3 {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [Vec3::X, Vec3::Y, Vec3::Z],
    };

    /// A 3x3 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        rows: [Vec3::ZERO; 3],
    };

    /// Creates a matrix with every cell set to `value`.
    #[inline]
    pub fn splat(value: f32) -> Self {
        Self {
            rows: [Vec3::new(value, value, value); 3],
        }
    }

    /// Creates a matrix from nine scalars in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(
        m11: f32,
        m12: f32,
        m13: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Self {
        Self {
            rows: [
                Vec3::new(m11, m12, m13),
                Vec3::new(m21, m22, m23),
                Vec3::new(m31, m32, m33),
            ],
        }
    }

    /// Creates a matrix from three row vectors.
    #[inline]
    pub fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self { rows: [r0, r1, r2] }
    }

    /// Creates a matrix from three column vectors.
    ///
    /// Distinct from [`from_rows`](Self::from_rows): the same three vectors
    /// passed to each produce transposed results.
    #[inline]
    pub fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self {
            rows: [
                Vec3::new(c0.x, c1.x, c2.x),
                Vec3::new(c0.y, c1.y, c2.y),
                Vec3::new(c0.z, c1.z, c2.z),
            ],
        }
    }

    /// Creates a pure scaling matrix with the vector's components on the
    /// diagonal.
    #[inline]
    pub fn from_diagonal(scale: Vec3) -> Self {
        Self {
            rows: [
                Vec3::new(scale.x, 0.0, 0.0),
                Vec3::new(0.0, scale.y, 0.0),
                Vec3::new(0.0, 0.0, scale.z),
            ],
        }
    }

    /// Creates a matrix from a runtime grid of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixShapeError`] unless the grid is exactly 3x3.
    pub fn from_grid(grid: &[&[f32]]) -> Result<Self, MatrixShapeError> {
        let cols = grid.first().map_or(0, |row| row.len());
        if grid.len() != 3 {
            return Err(MatrixShapeError {
                expected: 3,
                rows: grid.len(),
                cols,
            });
        }
        for row in grid {
            if row.len() != 3 {
                return Err(MatrixShapeError {
                    expected: 3,
                    rows: grid.len(),
                    cols: row.len(),
                });
            }
        }
        Ok(Self::from_rows(
            Vec3::new(grid[0][0], grid[0][1], grid[0][2]),
            Vec3::new(grid[1][0], grid[1][1], grid[1][2]),
            Vec3::new(grid[2][0], grid[2][1], grid[2][2]),
        ))
    }

    /// Returns a column of the matrix as a `Vec3`.
    ///
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    pub fn col(&self, index: usize) -> Vec3 {
        Vec3 {
            x: self.rows[0].get(index),
            y: self.rows[1].get(index),
            z: self.rows[2].get(index),
        }
    }

    /// Creates a matrix for a rotation around the X-axis.
    #[inline]
    pub fn from_rotation_x(angle: &Angle) -> Self {
        let (s, c) = angle.radians().sin_cos();
        Self {
            rows: [
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, c, -s),
                Vec3::new(0.0, s, c),
            ],
        }
    }

    /// Creates a matrix for a rotation around the Y-axis.
    #[inline]
    pub fn from_rotation_y(angle: &Angle) -> Self {
        let (s, c) = angle.radians().sin_cos();
        Self {
            rows: [
                Vec3::new(c, 0.0, s),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(-s, 0.0, c),
            ],
        }
    }

    /// Creates a matrix for a rotation around the Z-axis.
    #[inline]
    pub fn from_rotation_z(angle: &Angle) -> Self {
        let (s, c) = angle.radians().sin_cos();
        Self {
            rows: [
                Vec3::new(c, -s, 0.0),
                Vec3::new(s, c, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a matrix for a rotation around one of the principal axes.
    #[inline]
    pub fn from_axis_rotation(axis: Axis, angle: &Angle) -> Self {
        match axis {
            Axis::X => Self::from_rotation_x(angle),
            Axis::Y => Self::from_rotation_y(angle),
            Axis::Z => Self::from_rotation_z(angle),
        }
    }

    /// Creates a rotation matrix around an arbitrary axis using Rodrigues'
    /// rotation formula.
    ///
    /// `axis` must be a unit vector; this is not checked, and a non-unit
    /// axis silently produces a matrix that is not a rotation.
    pub fn from_axis_angle(axis: Vec3, angle: &Angle) -> Self {
        let (s, c) = angle.radians().sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);
        Self {
            rows: [
                Vec3::new(c + x * x * t, x * y * t - z * s, x * z * t + y * s),
                Vec3::new(x * y * t + z * s, c + y * y * t, y * z * t - x * s),
                Vec3::new(x * z * t - y * s, y * z * t + x * s, c + z * z * t),
            ],
        }
    }

    /// Computes the determinant via the standard cofactor expansion along
    /// the first row.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let [r0, r1, r2] = self.rows;
        r0.x * (r1.y * r2.z - r1.z * r2.y) - r0.y * (r1.x * r2.z - r1.z * r2.x)
            + r0.z * (r1.x * r2.y - r1.y * r2.x)
    }

    /// Returns `true` when the determinant is within `1e-4` of 1.
    ///
    /// This is a necessary but not sufficient test for a proper rotation: a
    /// matrix can have determinant 1 without being orthogonal.
    #[inline]
    pub fn is_rotation_matrix(&self) -> bool {
        (self.determinant() - 1.0).abs() <= ROTATION_DET_TOLERANCE
    }

    /// Sets the X scale cell (`m[0][0]`).
    #[inline]
    pub fn set_x_scale(&mut self, x_scale: f32) {
        self.rows[0].x = x_scale;
    }

    /// Sets the Y scale cell (`m[1][1]`).
    #[inline]
    pub fn set_y_scale(&mut self, y_scale: f32) {
        self.rows[1].y = y_scale;
    }

    /// Sets the Z scale cell (`m[2][2]`).
    #[inline]
    pub fn set_z_scale(&mut self, z_scale: f32) {
        self.rows[2].z = z_scale;
    }

    /// Returns a copy of this matrix with every off-diagonal cell zeroed.
    #[inline]
    pub fn trim_to_scalar(&self) -> Self {
        let mut out = *self;
        out.trim_to_scalar_in_place();
        out
    }

    /// Zeroes every off-diagonal cell of this matrix in place.
    #[inline]
    pub fn trim_to_scalar_in_place(&mut self) {
        let diagonal = Vec3::new(self.rows[0].x, self.rows[1].y, self.rows[2].z);
        *self = Self::from_diagonal(diagonal);
    }

    /// Writes the element-wise sum of `lhs` and `rhs` into `out`.
    #[inline]
    pub fn add_into(lhs: &Self, rhs: &Self, out: &mut Self) {
        for i in 0..3 {
            out.rows[i] = lhs.rows[i] + rhs.rows[i];
        }
    }

    /// Writes the element-wise difference of `lhs` and `rhs` into `out`.
    #[inline]
    pub fn sub_into(lhs: &Self, rhs: &Self, out: &mut Self) {
        for i in 0..3 {
            out.rows[i] = lhs.rows[i] - rhs.rows[i];
        }
    }

    /// Negates every element of this matrix in place.
    #[inline]
    pub fn negate_in_place(&mut self) {
        for row in &mut self.rows {
            *row = -*row;
        }
    }

    /// Writes the matrix-vector product into `out`.
    #[inline]
    pub fn mul_vec3_into(&self, v: Vec3, out: &mut Vec3) {
        out.x = self.rows[0].dot(v);
        out.y = self.rows[1].dot(v);
        out.z = self.rows[2].dot(v);
    }

    /// Embeds this matrix into a [`Mat4`], preserving its values in the
    /// upper-left corner. The new fourth row and column are `(0, 0, 0, 1)`.
    #[inline]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_rows(
            Vec4::from_vec3(self.rows[0], 0.0),
            Vec4::from_vec3(self.rows[1], 0.0),
            Vec4::from_vec3(self.rows[2], 0.0),
            Vec4::W,
        )
    }
}

// --- Operator Overloads ---

impl Default for Mat3 {
    /// Returns the 3x3 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Mat3 {
    type Output = Self;
    /// Adds two matrices element-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut out = Self::ZERO;
        Self::add_into(&self, &rhs, &mut out);
        out
    }
}

impl AddAssign for Mat3 {
    /// Increments this matrix in place, element-wise.
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..3 {
            self.rows[i] += rhs.rows[i];
        }
    }
}

impl Sub for Mat3 {
    type Output = Self;
    /// Subtracts two matrices element-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = Self::ZERO;
        Self::sub_into(&self, &rhs, &mut out);
        out
    }
}

impl Neg for Mat3 {
    type Output = Self;
    /// Negates every element.
    #[inline]
    fn neg(self) -> Self::Output {
        let mut out = self;
        out.negate_in_place();
        out
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat3`. Matrix multiplication is
    /// not commutative.
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        let c0 = rhs.col(0);
        let c1 = rhs.col(1);
        let c2 = rhs.col(2);
        Self {
            rows: [
                Vec3::new(self.rows[0].dot(c0), self.rows[0].dot(c1), self.rows[0].dot(c2)),
                Vec3::new(self.rows[1].dot(c0), self.rows[1].dot(c1), self.rows[1].dot(c2)),
                Vec3::new(self.rows[2].dot(c0), self.rows[2].dot(c1), self.rows[2].dot(c2)),
            ],
        }
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    /// Transforms a `Vec3` by this matrix (column vector on the right).
    #[inline]
    fn mul(self, v: Vec3) -> Self::Output {
        Vec3 {
            x: self.rows[0].dot(v),
            y: self.rows[1].dot(v),
            z: self.rows[2].dot(v),
        }
    }
}

impl Index<usize> for Mat3 {
    type Output = Vec3;
    /// Allows accessing a matrix row by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Mat3 {
    /// Allows mutably accessing a matrix row by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

impl fmt::Display for Mat3 {
    /// Formats the matrix as its rows, three decimal places per element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.rows[0], self.rows[1], self.rows[2])
    }
}

// --- Mat4 ---

/// A 4x4 row-major matrix for homogeneous 3D transforms.
///
/// In this crate `Mat4` is produced by embedding a [`Mat3`] or converting a
/// [`Quaternion`](super::Quaternion); its fourth row and column carry the
/// homogeneous `(0, 0, 0, 1)` of a pure rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// The rows of the matrix. `rows[0]` is the first row, and so on.
    pub rows: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// A 4x4 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        rows: [Vec4::ZERO; 4],
    };

    /// Creates a matrix with every cell set to `value`.
    #[inline]
    pub fn splat(value: f32) -> Self {
        Self {
            rows: [Vec4::new(value, value, value, value); 4],
        }
    }

    /// Creates a matrix from sixteen scalars in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(
        m11: f32,
        m12: f32,
        m13: f32,
        m14: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m24: f32,
        m31: f32,
        m32: f32,
        m33: f32,
        m34: f32,
        m41: f32,
        m42: f32,
        m43: f32,
        m44: f32,
    ) -> Self {
        Self {
            rows: [
                Vec4::new(m11, m12, m13, m14),
                Vec4::new(m21, m22, m23, m24),
                Vec4::new(m31, m32, m33, m34),
                Vec4::new(m41, m42, m43, m44),
            ],
        }
    }

    /// Creates a matrix from four row vectors.
    #[inline]
    pub fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self {
            rows: [r0, r1, r2, r3],
        }
    }

    /// Creates a matrix from four column vectors.
    ///
    /// Distinct from [`from_rows`](Self::from_rows): the same four vectors
    /// passed to each produce transposed results.
    #[inline]
    pub fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            rows: [
                Vec4::new(c0.x, c1.x, c2.x, c3.x),
                Vec4::new(c0.y, c1.y, c2.y, c3.y),
                Vec4::new(c0.z, c1.z, c2.z, c3.z),
                Vec4::new(c0.w, c1.w, c2.w, c3.w),
            ],
        }
    }

    /// Creates a matrix from a runtime grid of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixShapeError`] unless the grid is exactly 4x4.
    pub fn from_grid(grid: &[&[f32]]) -> Result<Self, MatrixShapeError> {
        let cols = grid.first().map_or(0, |row| row.len());
        if grid.len() != 4 {
            return Err(MatrixShapeError {
                expected: 4,
                rows: grid.len(),
                cols,
            });
        }
        for row in grid {
            if row.len() != 4 {
                return Err(MatrixShapeError {
                    expected: 4,
                    rows: grid.len(),
                    cols: row.len(),
                });
            }
        }
        Ok(Self::from_rows(
            Vec4::new(grid[0][0], grid[0][1], grid[0][2], grid[0][3]),
            Vec4::new(grid[1][0], grid[1][1], grid[1][2], grid[1][3]),
            Vec4::new(grid[2][0], grid[2][1], grid[2][2], grid[2][3]),
            Vec4::new(grid[3][0], grid[3][1], grid[3][2], grid[3][3]),
        ))
    }

    /// Returns a column of the matrix as a `Vec4`.
    ///
    /// # Panics
    /// Panics if `index` is not between 0 and 3.
    #[inline]
    pub fn col(&self, index: usize) -> Vec4 {
        Vec4 {
            x: self.rows[0].get(index),
            y: self.rows[1].get(index),
            z: self.rows[2].get(index),
            w: self.rows[3].get(index),
        }
    }

    /// Returns a copy of this matrix with every off-diagonal cell zeroed.
    #[inline]
    pub fn trim_to_scalar(&self) -> Self {
        let mut out = *self;
        out.trim_to_scalar_in_place();
        out
    }

    /// Zeroes every off-diagonal cell of this matrix in place.
    #[inline]
    pub fn trim_to_scalar_in_place(&mut self) {
        let diagonal = Vec4::new(
            self.rows[0].x,
            self.rows[1].y,
            self.rows[2].z,
            self.rows[3].w,
        );
        *self = Self {
            rows: [
                Vec4::new(diagonal.x, 0.0, 0.0, 0.0),
                Vec4::new(0.0, diagonal.y, 0.0, 0.0),
                Vec4::new(0.0, 0.0, diagonal.z, 0.0),
                Vec4::new(0.0, 0.0, 0.0, diagonal.w),
            ],
        };
    }

    /// Writes the element-wise sum of `lhs` and `rhs` into `out`.
    #[inline]
    pub fn add_into(lhs: &Self, rhs: &Self, out: &mut Self) {
        for i in 0..4 {
            out.rows[i] = lhs.rows[i] + rhs.rows[i];
        }
    }

    /// Writes the element-wise difference of `lhs` and `rhs` into `out`.
    #[inline]
    pub fn sub_into(lhs: &Self, rhs: &Self, out: &mut Self) {
        for i in 0..4 {
            out.rows[i] = lhs.rows[i] - rhs.rows[i];
        }
    }

    /// Negates every element of this matrix in place.
    #[inline]
    pub fn negate_in_place(&mut self) {
        for row in &mut self.rows {
            *row = -*row;
        }
    }

    /// Writes the matrix-vector product into `out`.
    #[inline]
    pub fn mul_vec4_into(&self, v: Vec4, out: &mut Vec4) {
        out.x = self.rows[0].dot(v);
        out.y = self.rows[1].dot(v);
        out.z = self.rows[2].dot(v);
        out.w = self.rows[3].dot(v);
    }
}

// --- Operator Overloads ---

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Mat4 {
    type Output = Self;
    /// Adds two matrices element-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut out = Self::ZERO;
        Self::add_into(&self, &rhs, &mut out);
        out
    }
}

impl AddAssign for Mat4 {
    /// Increments this matrix in place, element-wise.
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..4 {
            self.rows[i] += rhs.rows[i];
        }
    }
}

impl Sub for Mat4 {
    type Output = Self;
    /// Subtracts two matrices element-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = Self::ZERO;
        Self::sub_into(&self, &rhs, &mut out);
        out
    }
}

impl Neg for Mat4 {
    type Output = Self;
    /// Negates every element.
    #[inline]
    fn neg(self) -> Self::Output {
        let mut out = self;
        out.negate_in_place();
        out
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat4`. Matrix multiplication is
    /// not commutative.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        let c0 = rhs.col(0);
        let c1 = rhs.col(1);
        let c2 = rhs.col(2);
        let c3 = rhs.col(3);
        let row = |r: Vec4| Vec4::new(r.dot(c0), r.dot(c1), r.dot(c2), r.dot(c3));
        Self {
            rows: [
                row(self.rows[0]),
                row(self.rows[1]),
                row(self.rows[2]),
                row(self.rows[3]),
            ],
        }
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    /// Transforms a `Vec4` by this matrix (column vector on the right).
    #[inline]
    fn mul(self, v: Vec4) -> Self::Output {
        Vec4 {
            x: self.rows[0].dot(v),
            y: self.rows[1].dot(v),
            z: self.rows[2].dot(v),
            w: self.rows[3].dot(v),
        }
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;
    /// Allows accessing a matrix row by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Mat4 {
    /// Allows mutably accessing a matrix row by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

impl fmt::Display for Mat4 {
    /// Formats the matrix as its rows, three decimal places per element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.rows[0], self.rows[1], self.rows[2], self.rows[3]
        )
    }
}

// --- Tests ---
