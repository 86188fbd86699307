//! Camera paths
//!
//! The moving scenes drive the camera along a closed sinusoidal curve
//! parameterized by elapsed seconds. With equal frequency multipliers the
//! curve is a plain circle through the XY diagonal; with distinct
//! multipliers it becomes a non-planar Lissajous-style orbit.

use triorbit_math::Vec3;

/// How the camera moves over time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraPath {
    /// No camera at all; geometry is drawn in clip space as uploaded
    Fixed,
    /// Sinusoidal orbit around the world origin
    Orbit(OrbitPath),
}

/// Sinusoidal orbit around the origin
///
/// The camera position at time `t` is
/// `(r·sin(fx·t), r·sin(fy·t), r·cos(fz·t))` for radius `r` and per-axis
/// frequency multipliers `(fx, fy, fz)`. The camera always looks at the
/// origin with up (0, 1, 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPath {
    /// Distance scale of the curve
    pub radius: f32,
    /// Angular frequency multiplier per axis (x, y, z)
    pub freq: [f32; 3],
}

impl OrbitPath {
    /// Circular orbit with the same frequency on every axis
    pub fn circular(radius: f32) -> Self {
        Self {
            radius,
            freq: [1.0, 1.0, 1.0],
        }
    }

    /// Camera position at `t` seconds
    pub fn position(&self, t: f32) -> Vec3 {
        [
            (self.freq[0] * t).sin() * self.radius,
            (self.freq[1] * t).sin() * self.radius,
            (self.freq[2] * t).cos() * self.radius,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a[0] - b[0]).abs() < EPSILON
            && (a[1] - b[1]).abs() < EPSILON
            && (a[2] - b[2]).abs() < EPSILON
    }

    #[test]
    fn test_circular_orbit_starts_on_z_axis() {
        // Two-triangle scene: r=4, unit frequencies. At t=0 the camera sits
        // at (0, 0, 4).
        let orbit = OrbitPath::circular(4.0);
        assert!(vec_approx_eq(orbit.position(0.0), [0.0, 0.0, 4.0]));
    }

    #[test]
    fn test_circular_orbit_follows_curve() {
        let orbit = OrbitPath::circular(4.0);
        for i in 0..32 {
            let t = i as f32 * 0.37;
            let p = orbit.position(t);
            assert!(vec_approx_eq(
                p,
                [4.0 * t.sin(), 4.0 * t.sin(), 4.0 * t.cos()]
            ));
        }
    }

    #[test]
    fn test_lissajous_orbit_at_zero() {
        // Polyhedron scene: r=3, frequencies (3, 2, 1). At t=0 the camera
        // sits at (0, 0, 3).
        let orbit = OrbitPath {
            radius: 3.0,
            freq: [3.0, 2.0, 1.0],
        };
        assert!(vec_approx_eq(orbit.position(0.0), [0.0, 0.0, 3.0]));
    }

    #[test]
    fn test_lissajous_orbit_at_thirty_degrees() {
        // t = pi/6: x = 3·sin(pi/2) = 3, y = 3·sin(pi/3), z = 3·cos(pi/6).
        let orbit = OrbitPath {
            radius: 3.0,
            freq: [3.0, 2.0, 1.0],
        };
        let t = std::f32::consts::PI / 6.0;
        let p = orbit.position(t);
        assert!(vec_approx_eq(p, [3.0, 2.598_076, 2.598_076]));
    }
}
