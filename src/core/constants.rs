use glam::Vec3;

// Camera shared by the layout math and the renderer.

pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 2.0, 10.0);
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;
pub const CAMERA_FOV_DEGREES: f32 = 60.0;

/// Distance from the camera to the z = 0 focus plane, used by the
/// focused-item scale formula.
pub const FOCUS_PLANE_DISTANCE: f32 = 10.0;

pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 200.0;
