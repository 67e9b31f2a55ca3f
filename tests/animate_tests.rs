// Host-side tests for the per-frame animator.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod animate {
    include!("../src/core/animate.rs");
}

use animate::*;
use glam::Vec3;

fn target(position: Vec3, scale: f32) -> TargetTransform {
    TargetTransform { position, scale }
}

#[test]
fn position_moves_seven_percent_per_tick() {
    let mut arena = vec![PlanetTransform::default()];
    let targets = vec![target(Vec3::new(10.0, 0.0, 0.0), 1.0)];
    step_transforms(&mut arena, &targets, 0);
    assert!((arena[0].position.x - 0.7).abs() < 1e-6);
    step_transforms(&mut arena, &targets, 0);
    // 0.7 + (10 - 0.7) * 0.07
    assert!((arena[0].position.x - 1.351).abs() < 1e-5);
}

#[test]
fn scale_moves_ten_percent_per_tick() {
    let mut arena = vec![PlanetTransform::default()];
    let targets = vec![target(Vec3::ZERO, 6.0)];
    step_transforms(&mut arena, &targets, 0);
    assert!((arena[0].scale - 1.5).abs() < 1e-6);
}

#[test]
fn convergence_matches_closed_form() {
    let mut arena = vec![PlanetTransform::default()];
    let targets = vec![target(Vec3::new(8.0, 0.0, -1.0), 0.5)];
    for _ in 0..50 {
        step_transforms(&mut arena, &targets, 1);
    }
    // Remaining error after n ticks is (1 - damping)^n of the start gap.
    let expected_x = 8.0 * (1.0 - 0.93f32.powi(50));
    assert!((arena[0].position.x - expected_x).abs() < 1e-3);
    // ~2.7% of the gap remains at 50 ticks; comfortably under 3%.
    assert!((arena[0].position.x - 8.0).abs() < 8.0 * 0.03);
    // Scale damps faster and is under 1% by now.
    assert!((arena[0].scale - 0.5).abs() < 0.5 * 0.01);
}

#[test]
fn long_run_settles_tightly() {
    let mut arena = vec![PlanetTransform::default()];
    let targets = vec![target(Vec3::new(-8.0, 0.0, -1.0), 0.5)];
    for _ in 0..200 {
        step_transforms(&mut arena, &targets, 1);
    }
    assert!((arena[0].position.x + 8.0).abs() < 1e-3);
    assert!((arena[0].scale - 0.5).abs() < 1e-3);
}

#[test]
fn focused_item_spins_and_others_hold_zero() {
    let mut arena = vec![PlanetTransform::default(); 3];
    let targets = vec![target(Vec3::ZERO, 1.0); 3];
    for _ in 0..3 {
        step_transforms(&mut arena, &targets, 1);
    }
    assert!((arena[1].rotation_y - 0.015).abs() < 1e-6);
    assert_eq!(arena[0].rotation_y, 0.0);
    assert_eq!(arena[2].rotation_y, 0.0);
}

#[test]
fn losing_focus_resets_rotation() {
    let mut arena = vec![PlanetTransform::default(); 2];
    let targets = vec![target(Vec3::ZERO, 1.0); 2];
    for _ in 0..10 {
        step_transforms(&mut arena, &targets, 0);
    }
    assert!(arena[0].rotation_y > 0.0);
    step_transforms(&mut arena, &targets, 1);
    assert_eq!(arena[0].rotation_y, 0.0);
    assert!((arena[1].rotation_y - 0.005).abs() < 1e-6);
}

#[test]
fn extra_targets_are_ignored() {
    let mut arena = vec![PlanetTransform::default()];
    let targets = vec![target(Vec3::new(1.0, 0.0, 0.0), 1.0); 3];
    step_transforms(&mut arena, &targets, 2);
    assert!((arena[0].position.x - 0.07).abs() < 1e-6);
}

#[test]
fn short_targets_leave_tail_untouched() {
    let mut arena = vec![PlanetTransform::default(); 3];
    let targets = vec![target(Vec3::new(1.0, 0.0, 0.0), 1.0)];
    step_transforms(&mut arena, &targets, 0);
    assert!(arena[0].position.x > 0.0);
    assert_eq!(arena[1].position, Vec3::ZERO);
    assert_eq!(arena[2].position, Vec3::ZERO);
}

#[test]
fn item_at_target_stays_put() {
    let pos = Vec3::new(8.0, 0.0, -1.0);
    let mut arena = vec![PlanetTransform {
        position: pos,
        scale: 0.5,
        rotation_y: 0.0,
    }];
    let targets = vec![target(pos, 0.5)];
    step_transforms(&mut arena, &targets, 1);
    assert_eq!(arena[0].position, pos);
    assert_eq!(arena[0].scale, 0.5);
}
