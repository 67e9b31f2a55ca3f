use glam::Vec3;

// Slot geometry for the carousel ring, in world units.
pub const SELECTED_Z: f32 = 0.0;
pub const SIDE_X: f32 = 8.0;
pub const SIDE_Y: f32 = 0.0;
pub const SIDE_Z: f32 = -1.0;
pub const SIDE_SCALE: f32 = 0.5;
pub const FAR_X_MULTIPLIER: f32 = 1.2;
pub const FAR_Z_OFFSET: f32 = -2.0;
pub const FAR_SCALE: f32 = 0.25;

/// Fraction of the vertical field of view the focused planet should fill.
pub const FOCUS_FILL_PROPORTION: f32 = 0.8;

/// Wrap a raw index difference to the shortest signed distance around the
/// ring.
///
/// Offsets strictly beyond `total / 2` (real division) are folded by one
/// list length, so the result lies in `(-total/2, total/2]`. For even
/// totals an offset of exactly `total / 2` is deliberately left unwrapped;
/// the tie-break direction is part of the observed behavior. Callers pass
/// index differences, so `|raw| < total`.
pub fn effective_offset(raw: i32, total: usize) -> i32 {
    if total <= 1 {
        return raw;
    }
    let total = total as i32;
    if 2 * raw.abs() > total {
        if raw > 0 {
            raw - total
        } else {
            raw + total
        }
    } else {
        raw
    }
}

/// Scale multiplier that makes a model of `focus_radius` fill
/// [`FOCUS_FILL_PROPORTION`] of the viewport height at `camera_distance`
/// from the focus plane.
pub fn focus_scale(focus_radius: f32, camera_distance: f32, fov_degrees: f32) -> f32 {
    let half_fov = (fov_degrees / 2.0).to_radians();
    let desired_diameter = 2.0 * camera_distance * half_fov.tan() * FOCUS_FILL_PROPORTION;
    desired_diameter / (focus_radius * 2.0)
}

/// Target position and uniform scale for an item at `raw` index difference
/// from the focus. Pure; cheap enough to recompute every tick.
pub fn layout(
    raw: i32,
    total: usize,
    focus_radius: f32,
    camera_distance: f32,
    fov_degrees: f32,
) -> (Vec3, f32) {
    let offset = effective_offset(raw, total);
    match offset {
        0 => (
            Vec3::new(0.0, 0.0, SELECTED_Z),
            focus_scale(focus_radius, camera_distance, fov_degrees),
        ),
        1 | -1 => (
            Vec3::new(offset as f32 * SIDE_X, SIDE_Y, SIDE_Z),
            SIDE_SCALE,
        ),
        _ => {
            let magnitude = offset.abs() as f32;
            let x = SIDE_X + (magnitude - 1.0) * SIDE_X * FAR_X_MULTIPLIER;
            (
                Vec3::new(offset.signum() as f32 * x, SIDE_Y, SIDE_Z + FAR_Z_OFFSET),
                FAR_SCALE,
            )
        }
    }
}
