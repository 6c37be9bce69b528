// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_are_within_reasonable_bounds() {
    assert!(DEFAULT_MOUSE_SMOOTHNESS > 0.0 && DEFAULT_MOUSE_SMOOTHNESS <= 1.0);
    assert!(DEFAULT_PARALLAX_INTENSITY >= 0.0);
    assert!(DEFAULT_MOUSE_MAX_OFFSET_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fades_never_go_negative_before_clamping() {
    // Hero and headline stay partly visible at full progress.
    assert!(HERO_FADE > 0.0 && HERO_FADE < 1.0);
    assert!(HEADLINE_FADE > 0.0 && HEADLINE_FADE < 1.0);
    // The indicator is fully gone before one viewport of scroll.
    assert!(INDICATOR_FADE >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn depth_coefficients_increase_with_index() {
    assert!(LAYER_DEPTH_STEP > 0.0);
    assert!(ACCENT_DEPTH_BASE > 0.0);
    assert!(ACCENT_DEPTH_STEP > 0.0);
    assert!(ACCENT_SPEED_STEP > 0.0);
    assert!(SHAPE_TILT_DEG > 0.0 && SHAPE_TILT_DEG < 45.0);
}

#[test]
fn selectors_and_properties_are_well_formed() {
    for sel in [
        HERO_VISUAL_SELECTOR,
        ABSTRACT_SHAPE_SELECTOR,
        SHAPE_LAYER_SELECTOR,
        FLOATING_CIRCLE_SELECTOR,
        HEADLINE_SELECTOR,
        SCROLL_INDICATOR_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{sel}");
    }
    assert!(MOUSE_X_PROPERTY.starts_with("--"));
    assert!(MOUSE_Y_PROPERTY.starts_with("--"));
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
}
