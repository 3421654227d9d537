use super::*;
use crate::{
    animation::path::PathShape, composition::model::ProgressThresholds,
    composition::model::ThresholdOverrides, foundation::core::ContentHandle,
};

fn container(bounds: Rect, elevation: f64) -> ContainerSpec {
    ContainerSpec {
        elevation,
        ..ContainerSpec::new(bounds, ContentHandle(1))
    }
}

fn scene() -> SceneMetrics {
    SceneMetrics {
        width: 1080.0,
        height: 1920.0,
    }
}

// A 100x100 card expanding to 300x300 with stock enter defaults.
fn grow_compositor() -> Compositor {
    Compositor::new(
        container(Rect::new(0.0, 0.0, 100.0, 100.0), 0.0),
        container(Rect::new(0.0, 0.0, 300.0, 300.0), 12.0),
        TransitionConfig::new(scene()),
    )
    .unwrap()
}

#[test]
fn zero_size_bounds_are_rejected() {
    let err = Compositor::new(
        container(Rect::new(0.0, 0.0, 0.0, 0.0), 0.0),
        container(Rect::new(0.0, 0.0, 300.0, 300.0), 0.0),
        TransitionConfig::new(scene()),
    )
    .unwrap_err();
    assert!(matches!(err, MorphError::Configuration(_)));
}

#[test]
fn inverted_threshold_overrides_are_rejected() {
    let mut config = TransitionConfig::new(scene());
    config.thresholds = ThresholdOverrides {
        fade: Some(ProgressThresholds {
            start: 0.8,
            end: 0.2,
        }),
        ..ThresholdOverrides::default()
    };
    let err = Compositor::new(
        container(Rect::new(0.0, 0.0, 100.0, 100.0), 0.0),
        container(Rect::new(0.0, 0.0, 300.0, 300.0), 0.0),
        config,
    )
    .unwrap_err();
    assert!(matches!(err, MorphError::Configuration(_)));
}

#[test]
fn non_finite_progress_is_rejected() {
    let compositor = grow_compositor();
    assert!(matches!(
        compositor.update_progress(f64::NAN).unwrap_err(),
        MorphError::InvalidProgress(_)
    ));
    assert!(matches!(
        compositor.update_progress(f64::INFINITY).unwrap_err(),
        MorphError::InvalidProgress(_)
    ));
}

#[test]
fn midpoint_of_the_grow_scenario_saturates_fade_and_halves_elevation() {
    let state = grow_compositor().update_progress(0.5).unwrap();
    assert_eq!(state.start_alpha, 255);
    assert_eq!(state.end_alpha, 255);
    assert_eq!(state.elevation, 6.0);
    assert_eq!(state.top_layer, Layer::End);
}

#[test]
fn early_progress_of_the_grow_scenario_ramps_end_alpha() {
    let state = grow_compositor().update_progress(0.1).unwrap();
    assert_eq!(state.start_alpha, 255);
    assert!((101..=103).contains(&state.end_alpha));
}

#[test]
fn boundary_progress_reproduces_the_container_bounds() {
    let compositor = grow_compositor();
    let start_bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
    let end_bounds = Rect::new(0.0, 0.0, 300.0, 300.0);

    let at_zero = compositor.update_progress(0.0).unwrap();
    assert_eq!(at_zero.current_start_bounds, start_bounds);
    assert_eq!(at_zero.current_end_bounds, start_bounds);
    assert_eq!(at_zero.current_start_bounds_masked, start_bounds);
    assert_eq!(at_zero.current_end_bounds_masked, start_bounds);

    let at_one = compositor.update_progress(1.0).unwrap();
    assert_eq!(at_one.current_start_bounds, end_bounds);
    assert_eq!(at_one.current_end_bounds, end_bounds);
    assert_eq!(at_one.current_start_bounds_masked, end_bounds);
    assert_eq!(at_one.current_end_bounds_masked, end_bounds);
}

#[test]
fn overshoot_progress_stays_finite() {
    let compositor = grow_compositor();
    for p in [-0.1, 1.1] {
        let state = compositor.update_progress(p).unwrap();
        for rect in [
            state.current_start_bounds,
            state.current_end_bounds,
            state.current_start_bounds_masked,
            state.current_end_bounds_masked,
        ] {
            assert!(rect.x0.is_finite() && rect.y0.is_finite());
            assert!(rect.x1.is_finite() && rect.y1.is_finite());
        }
        assert!(state.elevation.is_finite());
    }
    // Elevation may legitimately leave the resting interval under overshoot.
    let state = compositor.update_progress(1.1).unwrap();
    assert!((state.elevation - 13.2).abs() < 1e-9);
}

#[test]
fn equal_progress_yields_an_equal_snapshot() {
    let compositor = grow_compositor();
    let a = serde_json::to_string(&compositor.update_progress(0.37).unwrap()).unwrap();
    // Rewinding in between must not disturb the result.
    let _ = compositor.update_progress(0.9).unwrap();
    let b = serde_json::to_string(&compositor.update_progress(0.37).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn auto_direction_resolves_by_area() {
    assert!(grow_compositor().is_entering());

    let shrinking = Compositor::new(
        container(Rect::new(0.0, 0.0, 300.0, 300.0), 12.0),
        container(Rect::new(0.0, 0.0, 100.0, 100.0), 0.0),
        TransitionConfig::new(scene()),
    )
    .unwrap();
    assert!(!shrinking.is_entering());
}

#[test]
fn return_direction_picks_return_defaults_and_swaps_the_fade() {
    let mut config = TransitionConfig::new(scene());
    config.direction = TransitionDirection::Return;
    let compositor = Compositor::new(
        container(Rect::new(0.0, 0.0, 300.0, 300.0), 12.0),
        container(Rect::new(0.0, 0.0, 100.0, 100.0), 0.0),
        config,
    )
    .unwrap();
    assert_eq!(
        compositor.thresholds(),
        ProgressThresholdsGroup::return_defaults()
    );

    // FadeMode::In behaves as Out on a return transition.
    let state = compositor.update_progress(1.0).unwrap();
    assert_eq!(state.start_alpha, 0);
    assert_eq!(state.end_alpha, 255);
}

#[test]
fn scrim_follows_the_transition_direction() {
    let entering = grow_compositor();
    assert_eq!(entering.update_progress(0.0).unwrap().scrim_alpha, 0);
    assert_eq!(entering.update_progress(1.0).unwrap().scrim_alpha, 255);

    let mut config = TransitionConfig::new(scene());
    config.direction = TransitionDirection::Return;
    let returning = Compositor::new(
        container(Rect::new(0.0, 0.0, 100.0, 100.0), 0.0),
        container(Rect::new(0.0, 0.0, 300.0, 300.0), 12.0),
        config,
    )
    .unwrap();
    assert_eq!(returning.update_progress(0.0).unwrap().scrim_alpha, 255);
    assert_eq!(returning.update_progress(1.0).unwrap().scrim_alpha, 0);
}

#[test]
fn arc_path_selects_the_arc_threshold_defaults() {
    let mut config = TransitionConfig::new(scene());
    config.path_shape = PathShape::Arc;
    config.direction = TransitionDirection::Enter;
    let compositor = Compositor::new(
        container(Rect::new(0.0, 0.0, 100.0, 100.0), 0.0),
        container(Rect::new(200.0, 400.0, 500.0, 700.0), 12.0),
        config,
    )
    .unwrap();
    assert_eq!(
        compositor.thresholds(),
        ProgressThresholdsGroup::enter_arc_defaults()
    );
}

#[test]
fn disabling_shadows_drops_the_offset_but_keeps_elevation() {
    let mut config = TransitionConfig::new(scene());
    config.elevation_shadow_enabled = false;
    let compositor = Compositor::new(
        container(Rect::new(0.0, 0.0, 100.0, 100.0), 0.0),
        container(Rect::new(0.0, 0.0, 300.0, 300.0), 12.0),
        config,
    )
    .unwrap();
    let state = compositor.update_progress(0.5).unwrap();
    assert!(state.shadow_offset.is_none());
    assert_eq!(state.elevation, 6.0);

    let with_shadow = grow_compositor().update_progress(0.5).unwrap();
    assert!(with_shadow.shadow_offset.is_some());
}
