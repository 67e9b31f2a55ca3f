// Host-side tests for the carousel state holder.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod carousel {
    include!("../src/core/carousel.rs");
}

use carousel::*;

#[test]
fn starts_focused_on_first_item() {
    let state = CarouselState::new(3);
    assert_eq!(state.index(), 0);
    assert_eq!(state.len(), 3);
}

#[test]
fn advance_then_retreat_is_identity() {
    for len in 1..=7 {
        let mut state = CarouselState::new(len);
        for start in 0..len {
            while state.index() != start {
                state.advance();
            }
            state.advance();
            state.retreat();
            assert_eq!(state.index(), start, "len={len} start={start}");
            state.retreat();
            state.advance();
            assert_eq!(state.index(), start, "len={len} start={start}");
        }
    }
}

#[test]
fn advancing_len_times_closes_the_cycle() {
    for len in 1..=7 {
        let mut state = CarouselState::new(len);
        for _ in 0..len {
            state.advance();
        }
        assert_eq!(state.index(), 0, "len={len}");
    }
}

#[test]
fn retreat_wraps_from_the_front() {
    let mut state = CarouselState::new(3);
    state.retreat();
    assert_eq!(state.index(), 2);
    state.retreat();
    assert_eq!(state.index(), 1);
}

#[test]
fn single_item_list_never_moves() {
    let mut state = CarouselState::new(1);
    state.advance();
    assert_eq!(state.index(), 0);
    state.retreat();
    assert_eq!(state.index(), 0);
}

#[test]
fn raw_offset_is_signed_index_difference() {
    let mut state = CarouselState::new(3);
    state.advance(); // focus on 1
    assert_eq!(state.raw_offset(0), -1);
    assert_eq!(state.raw_offset(1), 0);
    assert_eq!(state.raw_offset(2), 1);
}

#[test]
fn index_always_in_bounds_under_random_walk() {
    let mut state = CarouselState::new(5);
    // deterministic pseudo-random walk
    let mut x: u32 = 0x1234_5678;
    for _ in 0..500 {
        x = x.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        if x & 1 == 0 {
            state.advance();
        } else {
            state.retreat();
        }
        assert!(state.index() < state.len());
    }
}
