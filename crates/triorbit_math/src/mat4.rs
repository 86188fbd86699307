//! 4x4 matrix utilities for the camera transform
//!
//! Matrices are column-major (`m[column][row]`), matching the WGSL
//! `mat4x4<f32>` memory layout, so they can be copied into uniform buffers
//! byte-for-byte.

use crate::vec3::{self, Vec3};

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

/// Create a perspective projection matrix
///
/// `fov_y` is the vertical field of view in radians. The same inputs always
/// produce the same bits; callers may compare outputs with `==`.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, (far + near) * nf, -1.0],
        [0.0, 0.0, 2.0 * far * near * nf, 0.0],
    ]
}

/// Create a look-at view matrix
///
/// Transforms world-space points into a camera space with the eye at the
/// origin looking down -Z.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = vec3::normalize(vec3::sub(target, eye));
    let s = vec3::normalize(vec3::cross(f, up));
    let u = vec3::cross(s, f);

    [
        [s[0], u[0], -f[0], 0.0],
        [s[1], u[1], -f[1], 0.0],
        [s[2], u[2], -f[2], 0.0],
        [-vec3::dot(s, eye), -vec3::dot(u, eye), vec3::dot(f, eye), 1.0],
    ]
}

/// Recover the eye position from a view matrix produced by [`look_at`]
///
/// The view matrix stores `-R * eye` in its translation column; undoing the
/// rotation gives the eye back: `eye = -R^T * t`.
pub fn view_eye(m: Mat4) -> Vec3 {
    let t = [m[3][0], m[3][1], m[3][2]];
    [
        -(m[0][0] * t[0] + m[0][1] * t[1] + m[0][2] * t[2]),
        -(m[1][0] * t[0] + m[1][1] * t[1] + m[1][2] * t[2]),
        -(m[2][0] * t[0] + m[2][1] * t[1] + m[2][2] * t[2]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a[0], b[0]) && approx_eq(a[1], b[1]) && approx_eq(a[2], b[2])
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if !approx_eq(a[i][j], b[i][j]) {
                    return false;
                }
            }
        }
        true
    }

    /// Transform a point by a column-major matrix, dropping the w divide.
    fn transform_point(m: Mat4, p: Vec3) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        let v = [p[0], p[1], p[2], 1.0];
        for row in 0..4 {
            for col in 0..4 {
                out[row] += m[col][row] * v[col];
            }
        }
        out
    }

    #[test]
    fn test_mul_identity() {
        let p = perspective(0.8, 1.5, 0.1, 100.0);
        assert!(mat_approx_eq(mul(IDENTITY, p), p));
        assert!(mat_approx_eq(mul(p, IDENTITY), p));
    }

    #[test]
    fn test_mul_associative() {
        let a = perspective(0.8, 1.5, 0.1, 100.0);
        let b = look_at([0.0, 0.0, 4.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let c = look_at([1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(mat_approx_eq(mul(mul(a, b), c), mul(a, mul(b, c))));
    }

    #[test]
    fn test_transpose_involution() {
        let m = look_at([1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert_eq!(transpose(transpose(m)), m);
    }

    #[test]
    fn test_perspective_bitwise_idempotent() {
        // Same parameters must give bitwise-identical matrices.
        let a = perspective(45.0f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
        let b = perspective(45.0f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_look_at_maps_eye_to_origin() {
        let eye = [0.0, 0.0, 4.0];
        let view = look_at(eye, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let mapped = transform_point(view, eye);
        assert!(vec_approx_eq([mapped[0], mapped[1], mapped[2]], [0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_look_at_target_on_negative_z() {
        // The look target must land on the -Z axis in camera space.
        let view = look_at([0.0, 0.0, 4.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let mapped = transform_point(view, [0.0, 0.0, 0.0]);
        assert!(approx_eq(mapped[0], 0.0));
        assert!(approx_eq(mapped[1], 0.0));
        assert!(approx_eq(mapped[2], -4.0));
    }

    #[test]
    fn test_view_eye_roundtrip() {
        let eye = [3.0, -1.5, 2.0];
        let view = look_at(eye, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(vec_approx_eq(view_eye(view), eye));
    }

    #[test]
    fn test_view_eye_identity() {
        assert_eq!(view_eye(IDENTITY), [0.0, 0.0, 0.0]);
    }
}
