use glam::Vec3;

// Per-tick exponential smoothing factors. Items asymptotically approach
// their targets; there is no arrival threshold.
pub const POSITION_DAMPING: f32 = 0.07;
pub const SCALE_DAMPING: f32 = 0.1;

/// Self-rotation of the focused planet, radians per tick.
pub const FOCUS_SPIN_PER_TICK: f32 = 0.005;

/// Authoritative per-item runtime transform, kept in a plain arena indexed
/// by item position. The renderer reads from this array every tick instead
/// of owning scene-node state.
#[derive(Clone, Copy, Debug)]
pub struct PlanetTransform {
    pub position: Vec3,
    pub scale: f32,
    pub rotation_y: f32,
}

impl Default for PlanetTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
            rotation_y: 0.0,
        }
    }
}

/// Target derived from the layout function; recomputed every tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct TargetTransform {
    pub position: Vec3,
    pub scale: f32,
}

/// Advance every transform one tick toward its target.
///
/// The focused item spins; everything else has its rotation reset so a
/// planet re-entering focus starts from zero. Extra targets beyond the
/// arena length are ignored (an item absent from the arena simply skips
/// its step).
pub fn step_transforms(
    transforms: &mut [PlanetTransform],
    targets: &[TargetTransform],
    focused: usize,
) {
    for (i, (t, target)) in transforms.iter_mut().zip(targets.iter()).enumerate() {
        t.position += (target.position - t.position) * POSITION_DAMPING;
        t.scale += (target.scale - t.scale) * SCALE_DAMPING;
        if i == focused {
            t.rotation_y += FOCUS_SPIN_PER_TICK;
        } else {
            t.rotation_y = 0.0;
        }
    }
}
