//! Orbit camera for the rig viewport.

use glam::Vec2;

use crate::vec3::Vec3;

/// Pitch stays strictly inside ±π/2 so the view never flips over the poles.
const PITCH_LIMIT: f64 = std::f64::consts::FRAC_PI_2 - 0.05;

/// Camera distance can never reach the viewpoint itself.
const MIN_DISTANCE: f64 = 1.0;

/// A camera that orbits the scene origin, driven by pointer drags.
///
/// The camera holds yaw, pitch, and distance; it never stores a position.
/// Instead, [`OrbitCamera::rotate`] maps object-space vectors into a frame
/// where the viewpoint sits at the origin looking down +z, and the renderer
/// pushes the scene out by [`OrbitCamera::distance`].
///
/// # Example
/// ```
/// use haptos::OrbitCamera;
/// use haptos::Vec2;
///
/// let mut orbit = OrbitCamera::new().distance(500.0).sensitivity(0.005);
/// orbit.update(Vec2::new(100.0, 0.0), true);
/// assert!(orbit.yaw < 0.0); // drag right orbits right
/// ```
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    /// Horizontal angle in radians.
    pub yaw: f64,
    /// Vertical angle in radians, clamped to avoid gimbal inversion.
    pub pitch: f64,
    /// Distance from the orbit origin, in millimeters (≥ 1).
    pub distance: f64,
    /// Radians of rotation per pixel of drag.
    pub sensitivity: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 500.0,
            sensitivity: 0.005,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the distance from the orbit origin, clamped to stay positive.
    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = distance.max(MIN_DISTANCE);
        self
    }

    /// Set the drag sensitivity.
    pub fn sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Set the initial yaw in radians.
    pub fn yaw(mut self, yaw: f64) -> Self {
        self.yaw = yaw;
        self
    }

    /// Set the initial pitch in radians, clamped to the pole limit.
    pub fn pitch(mut self, pitch: f64) -> Self {
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self
    }

    /// Apply one frame of pointer movement.
    ///
    /// Only moves while `dragging` is true. Dragging right decreases yaw
    /// (the view orbits right); dragging down decreases pitch (the view
    /// orbits down). Pitch is clamped at ±(π/2 − 0.05).
    pub fn update(&mut self, delta: Vec2, dragging: bool) {
        if !dragging {
            return;
        }
        self.yaw -= f64::from(delta.x) * self.sensitivity;
        self.pitch -= f64::from(delta.y) * self.sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Map an object-space vector into camera-relative space.
    ///
    /// Pitch rotation about the horizontal axis first, then yaw about the
    /// vertical axis; the yaw axis stays vertical on screen.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let (sp, cp) = self.pitch.sin_cos();
        let pitched = Vec3::new(v.x, v.y * cp - v.z * sp, v.y * sp + v.z * cp);

        let (sy, cy) = self.yaw.sin_cos();
        Vec3::new(
            pitched.x * cy + pitched.z * sy,
            pitched.y,
            -pitched.x * sy + pitched.z * cy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn drag_right_decreases_yaw() {
        let s = 0.005;
        let mut orbit = OrbitCamera::new().sensitivity(s);
        orbit.update(Vec2::new(100.0, 0.0), true);
        assert_relative_eq!(orbit.yaw, -100.0 * s);
        assert_relative_eq!(orbit.pitch, 0.0);
    }

    #[test]
    fn drag_down_decreases_pitch() {
        let mut orbit = OrbitCamera::new();
        orbit.update(Vec2::new(0.0, 40.0), true);
        assert!(orbit.pitch < 0.0);
    }

    #[test]
    fn ignores_movement_when_not_dragging() {
        let mut orbit = OrbitCamera::new();
        orbit.update(Vec2::new(500.0, 500.0), false);
        assert_eq!(orbit.yaw, 0.0);
        assert_eq!(orbit.pitch, 0.0);
    }

    #[test]
    fn pitch_clamps_at_the_poles() {
        let mut orbit = OrbitCamera::new();
        orbit.update(Vec2::new(0.0, -1_000_000.0), true);
        assert_relative_eq!(orbit.pitch, FRAC_PI_2 - 0.05);
        orbit.update(Vec2::new(0.0, 1_000_000.0), true);
        assert_relative_eq!(orbit.pitch, -(FRAC_PI_2 - 0.05));
    }

    #[test]
    fn yaw_rotation_about_vertical_axis() {
        let orbit = OrbitCamera::new().yaw(FRAC_PI_2);
        let v = orbit.rotate(Vec3::X);
        assert_relative_eq!(v, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-12);
        // The vertical axis is untouched by yaw.
        assert_relative_eq!(orbit.rotate(Vec3::Y), Vec3::Y, epsilon = 1e-12);
    }

    #[test]
    fn pitch_rotation_about_horizontal_axis() {
        let orbit = OrbitCamera::new().pitch(FRAC_PI_2 - 0.05);
        let rotated = orbit.rotate(Vec3::Z);
        let (s, c) = (FRAC_PI_2 - 0.05).sin_cos();
        assert_relative_eq!(rotated, Vec3::new(0.0, -s, c), epsilon = 1e-12);
    }

    #[test]
    fn pitch_applies_before_yaw() {
        let orbit = OrbitCamera::new().yaw(FRAC_PI_4).pitch(FRAC_PI_4);
        let v = Vec3::new(0.3, -1.2, 2.0);

        // Expected: explicit matrix products, pitch about x then yaw about y.
        let (sp, cp) = FRAC_PI_4.sin_cos();
        let after_pitch = Vec3::new(v.x, v.y * cp - v.z * sp, v.y * sp + v.z * cp);
        let (sy, cy) = FRAC_PI_4.sin_cos();
        let expected = Vec3::new(
            after_pitch.x * cy + after_pitch.z * sy,
            after_pitch.y,
            -after_pitch.x * sy + after_pitch.z * cy,
        );

        assert_relative_eq!(orbit.rotate(v), expected, epsilon = 1e-12);
    }

    #[test]
    fn rotation_preserves_length() {
        let orbit = OrbitCamera::new().yaw(1.1).pitch(-0.7);
        let v = Vec3::new(12.0, -7.0, 3.0);
        assert_relative_eq!(orbit.rotate(v).length(), v.length(), max_relative = 1e-12);
    }

    #[test]
    fn distance_never_reaches_zero() {
        let orbit = OrbitCamera::new().distance(-50.0);
        assert_eq!(orbit.distance, 1.0);
    }
}
