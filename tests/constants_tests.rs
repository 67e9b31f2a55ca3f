// Host-side sanity checks over the shared tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod animate {
    include!("../src/core/animate.rs");
}
mod gesture {
    include!("../src/core/gesture.rs");
}
mod layout {
    include!("../src/core/layout.rs");
}
mod config {
    include!("../src/core/config.rs");
}

#[test]
fn camera_looks_down_the_focus_axis() {
    assert_eq!(constants::CAMERA_TARGET, glam::Vec3::ZERO);
    assert_eq!(constants::CAMERA_EYE.z, constants::FOCUS_PLANE_DISTANCE);
    assert!(constants::CAMERA_FOV_DEGREES > 0.0 && constants::CAMERA_FOV_DEGREES < 180.0);
    assert!(constants::Z_NEAR > 0.0);
    assert!(constants::Z_NEAR < constants::Z_FAR);
}

#[test]
fn damping_factors_are_fractions() {
    assert!(animate::POSITION_DAMPING > 0.0 && animate::POSITION_DAMPING < 1.0);
    assert!(animate::SCALE_DAMPING > 0.0 && animate::SCALE_DAMPING < 1.0);
    assert!(animate::FOCUS_SPIN_PER_TICK > 0.0);
}

#[test]
fn drag_threshold_is_positive() {
    assert!(gesture::DRAG_THRESHOLD_PX > 0.0);
}

#[test]
fn slot_scales_shrink_with_distance() {
    assert!(layout::SIDE_SCALE > layout::FAR_SCALE);
    assert!(layout::FAR_X_MULTIPLIER > 1.0);
    assert!(layout::FOCUS_FILL_PROPORTION > 0.0 && layout::FOCUS_FILL_PROPORTION <= 1.0);
    assert!(layout::FAR_Z_OFFSET < layout::SIDE_Z);
    assert!(layout::SIDE_Z < layout::SELECTED_Z);
}

#[test]
fn roster_entries_are_well_formed() {
    assert!(!config::PLANETS.is_empty());
    let mut seen = std::collections::HashSet::new();
    for planet in config::PLANETS {
        assert!(seen.insert(planet.id), "duplicate id {}", planet.id);
        assert!(!planet.name.is_empty());
        assert!(planet.model_path.ends_with(".glb"));
        assert!(planet.size > 0.0);
        assert!(planet.visual_radius > 0.0);
        for c in planet.color_rgb {
            assert!((0.0..=1.0).contains(&c));
        }
    }
}
