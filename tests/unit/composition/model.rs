use super::*;

#[test]
fn thresholds_reject_inverted_and_non_finite_ranges() {
    assert!(ProgressThresholds::new(0.8, 0.2).is_err());
    assert!(ProgressThresholds::new(f64::NAN, 0.5).is_err());
    assert!(ProgressThresholds::new(0.2, f64::INFINITY).is_err());
    assert!(ProgressThresholds::new(0.2, 0.8).is_ok());
    assert!(ProgressThresholds::new(0.5, 0.5).is_ok());
}

#[test]
fn default_groups_follow_direction_and_path() {
    assert_eq!(
        ProgressThresholdsGroup::defaults_for(true, PathShape::Linear),
        ProgressThresholdsGroup::enter_defaults()
    );
    assert_eq!(
        ProgressThresholdsGroup::defaults_for(false, PathShape::Linear),
        ProgressThresholdsGroup::return_defaults()
    );
    assert_eq!(
        ProgressThresholdsGroup::defaults_for(true, PathShape::Arc),
        ProgressThresholdsGroup::enter_arc_defaults()
    );
    assert_eq!(
        ProgressThresholdsGroup::defaults_for(false, PathShape::Arc),
        ProgressThresholdsGroup::return_arc_defaults()
    );
}

#[test]
fn overrides_keep_defaults_where_absent() {
    let overridden = ProgressThresholds {
        start: 0.4,
        end: 0.6,
    };
    let resolved = ThresholdOverrides {
        fade: Some(overridden),
        ..ThresholdOverrides::default()
    }
    .resolve(ProgressThresholdsGroup::enter_defaults());
    assert_eq!(resolved.fade, overridden);
    assert_eq!(resolved.scale, ProgressThresholdsGroup::enter_defaults().scale);
}

#[test]
fn corner_normalization_is_height_relative() {
    let corners = CornerGeometry::uniform(10.0);
    let relative = corners.to_relative(&Rect::new(0.0, 0.0, 400.0, 100.0));
    assert_eq!(relative.top_left, 0.1);

    let resolved = relative.resolve(&Rect::new(0.0, 0.0, 50.0, 200.0));
    assert_eq!(resolved.bottom_right, 20.0);
}

#[test]
fn corner_validation_rejects_negative_sizes() {
    assert!(CornerGeometry::uniform(-1.0).validate().is_err());
    assert!(CornerGeometry::uniform(f64::NAN).validate().is_err());
    assert!(CornerGeometry::uniform(16.0).validate().is_ok());
    assert!(CornerGeometry::default().is_square());
    assert!(!CornerGeometry::uniform(1.0).is_square());
}

#[test]
fn container_spec_validation_names_the_side() {
    let bad = ContainerSpec::new(Rect::new(0.0, 0.0, -10.0, 100.0), ContentHandle(0));
    let err = bad.validate("start").unwrap_err();
    assert!(err.to_string().contains("start container"));

    let good = ContainerSpec::new(Rect::new(0.0, 0.0, 10.0, 100.0), ContentHandle(0));
    assert!(good.validate("end").is_ok());
}

#[test]
fn config_json_defaults_match_the_programmatic_ones() {
    let config =
        TransitionConfig::from_json_str(r#"{"scene":{"width":1080.0,"height":1920.0}}"#).unwrap();
    assert_eq!(
        config,
        TransitionConfig::new(SceneMetrics {
            width: 1080.0,
            height: 1920.0,
        })
    );
    assert_eq!(config.fade_mode, FadeMode::In);
    assert_eq!(config.fit_mode, FitMode::Auto);
    assert!(config.elevation_shadow_enabled);
    assert_eq!(config.scrim_color.a, 82);
}

#[test]
fn config_json_accepts_overrides() {
    let config = TransitionConfig::from_json_str(
        r#"{
            "fade_mode": "Cross",
            "path_shape": "Arc",
            "direction": "Return",
            "thresholds": {"fade": {"start": 0.1, "end": 0.9}},
            "scene": {"width": 800.0, "height": 600.0}
        }"#,
    )
    .unwrap();
    assert_eq!(config.fade_mode, FadeMode::Cross);
    assert_eq!(config.path_shape, PathShape::Arc);
    assert_eq!(config.direction, TransitionDirection::Return);
    assert_eq!(
        config.thresholds.fade,
        Some(ProgressThresholds {
            start: 0.1,
            end: 0.9,
        })
    );
}

#[test]
fn malformed_config_json_is_a_serde_error() {
    let err = TransitionConfig::from_json_str("{").unwrap_err();
    assert!(matches!(err, MorphError::Serde(_)));
}
