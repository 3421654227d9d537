use kurbo::Rect;

use crate::{
    animation::path::PathShape,
    eval::fade::FadeMode,
    eval::fit::FitMode,
    foundation::core::{ContentHandle, Rgba8, SceneMetrics},
    foundation::error::{MorphError, MorphResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A `[start, end]` sub-range of the full `0.0 - 1.0` transition progress.
///
/// One child animation (fade, scale, mask) runs to completion while progress
/// crosses its sub-range and saturates at the nearer boundary value outside
/// of it.
pub struct ProgressThresholds {
    /// Progress at which the child animation begins.
    pub start: f64,
    /// Progress at which the child animation has completed.
    pub end: f64,
}

impl ProgressThresholds {
    /// Validated constructor; inverted or non-finite ranges are rejected.
    pub fn new(start: f64, end: f64) -> MorphResult<Self> {
        let thresholds = Self { start, end };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Check the finite, `start <= end` invariant (also used after Serde
    /// ingestion, which bypasses [`ProgressThresholds::new`]).
    pub fn validate(&self) -> MorphResult<()> {
        if !(self.start.is_finite() && self.end.is_finite()) {
            return Err(MorphError::configuration(
                "progress thresholds must be finite",
            ));
        }
        if self.start > self.end {
            return Err(MorphError::configuration(format!(
                "progress thresholds inverted: start {} > end {}",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The four sub-ranges driving the child animations of one container morph.
pub struct ProgressThresholdsGroup {
    /// Sub-range of the content cross-fade.
    pub fade: ProgressThresholds,
    /// Sub-range over which content scales to the end dimensions.
    pub scale: ProgressThresholds,
    /// Sub-range over which the overflowing side is clipped to the container.
    pub scale_mask: ProgressThresholds,
    /// Sub-range over which corner geometry morphs between the two shapes.
    pub shape_mask: ProgressThresholds,
}

impl ProgressThresholdsGroup {
    /// Default sub-ranges for an enter transition on a linear path.
    pub fn enter_defaults() -> Self {
        Self {
            fade: ProgressThresholds {
                start: 0.0,
                end: 0.25,
            },
            scale: ProgressThresholds {
                start: 0.0,
                end: 1.0,
            },
            scale_mask: ProgressThresholds {
                start: 0.0,
                end: 1.0,
            },
            shape_mask: ProgressThresholds {
                start: 0.0,
                end: 0.75,
            },
        }
    }

    /// Default sub-ranges for a return transition on a linear path.
    pub fn return_defaults() -> Self {
        Self {
            fade: ProgressThresholds {
                start: 0.60,
                end: 0.90,
            },
            scale: ProgressThresholds {
                start: 0.0,
                end: 1.0,
            },
            scale_mask: ProgressThresholds {
                start: 0.0,
                end: 0.90,
            },
            shape_mask: ProgressThresholds {
                start: 0.30,
                end: 0.90,
            },
        }
    }

    /// Default sub-ranges for an enter transition on an arced path.
    pub fn enter_arc_defaults() -> Self {
        Self {
            fade: ProgressThresholds {
                start: 0.10,
                end: 0.40,
            },
            scale: ProgressThresholds {
                start: 0.10,
                end: 1.0,
            },
            scale_mask: ProgressThresholds {
                start: 0.10,
                end: 1.0,
            },
            shape_mask: ProgressThresholds {
                start: 0.10,
                end: 0.90,
            },
        }
    }

    /// Default sub-ranges for a return transition on an arced path.
    pub fn return_arc_defaults() -> Self {
        Self {
            fade: ProgressThresholds {
                start: 0.60,
                end: 0.90,
            },
            scale: ProgressThresholds {
                start: 0.0,
                end: 0.90,
            },
            scale_mask: ProgressThresholds {
                start: 0.0,
                end: 0.90,
            },
            shape_mask: ProgressThresholds {
                start: 0.20,
                end: 0.90,
            },
        }
    }

    /// Pick the default group matching the resolved direction and path shape.
    pub fn defaults_for(entering: bool, path_shape: PathShape) -> Self {
        match (path_shape, entering) {
            (PathShape::Linear, true) => Self::enter_defaults(),
            (PathShape::Linear, false) => Self::return_defaults(),
            (PathShape::Arc, true) => Self::enter_arc_defaults(),
            (PathShape::Arc, false) => Self::return_arc_defaults(),
        }
    }

    /// Validate all four sub-ranges.
    pub fn validate(&self) -> MorphResult<()> {
        self.fade.validate()?;
        self.scale.validate()?;
        self.scale_mask.validate()?;
        self.shape_mask.validate()?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Optional per-sub-range overrides applied on top of the direction/path
/// default group.
pub struct ThresholdOverrides {
    /// Override for the fade sub-range.
    #[serde(default)]
    pub fade: Option<ProgressThresholds>,
    /// Override for the scale sub-range.
    #[serde(default)]
    pub scale: Option<ProgressThresholds>,
    /// Override for the scale-mask sub-range.
    #[serde(default)]
    pub scale_mask: Option<ProgressThresholds>,
    /// Override for the shape-mask sub-range.
    #[serde(default)]
    pub shape_mask: Option<ProgressThresholds>,
}

impl ThresholdOverrides {
    /// Resolve against a default group, keeping defaults where no override
    /// is present.
    pub fn resolve(&self, defaults: ProgressThresholdsGroup) -> ProgressThresholdsGroup {
        ProgressThresholdsGroup {
            fade: self.fade.unwrap_or(defaults.fade),
            scale: self.scale.unwrap_or(defaults.scale),
            scale_mask: self.scale_mask.unwrap_or(defaults.scale_mask),
            shape_mask: self.shape_mask.unwrap_or(defaults.shape_mask),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Family of all four corners of a container outline.
pub enum CornerFamily {
    /// Circular-arc rounded corners.
    #[default]
    Rounded,
    /// Straight chamfer (cut) corners.
    Cut,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-corner sizes of a container outline.
///
/// Sizes are absolute when captured from a container and height-relative
/// fractions once normalized for interpolation (see
/// [`CornerGeometry::to_relative`]), which keeps geometry comparison
/// resolution-independent.
pub struct CornerGeometry {
    /// Top-left corner size.
    pub top_left: f64,
    /// Top-right corner size.
    pub top_right: f64,
    /// Bottom-right corner size.
    pub bottom_right: f64,
    /// Bottom-left corner size.
    pub bottom_left: f64,
}

impl CornerGeometry {
    /// The same size on all four corners.
    pub fn uniform(size: f64) -> Self {
        Self {
            top_left: size,
            top_right: size,
            bottom_right: size,
            bottom_left: size,
        }
    }

    /// Normalize absolute corner sizes to fractions of the bounds height.
    pub fn to_relative(&self, bounds: &Rect) -> Self {
        self.scaled(1.0 / bounds.height())
    }

    /// Resolve height-relative fractions back to absolute sizes against a
    /// (possibly different) set of bounds.
    pub fn resolve(&self, bounds: &Rect) -> Self {
        self.scaled(bounds.height())
    }

    /// Whether all four corners are zero-sized (a square outline).
    pub fn is_square(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_right == 0.0
            && self.bottom_left == 0.0
    }

    /// Check that every corner size is finite and non-negative.
    pub fn validate(&self) -> MorphResult<()> {
        for (name, size) in [
            ("top_left", self.top_left),
            ("top_right", self.top_right),
            ("bottom_right", self.bottom_right),
            ("bottom_left", self.bottom_left),
        ] {
            if !(size.is_finite() && size >= 0.0) {
                return Err(MorphError::configuration(format!(
                    "corner size {name} must be finite and >= 0, got {size}"
                )));
            }
        }
        Ok(())
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            top_left: self.top_left * factor,
            top_right: self.top_right * factor,
            bottom_right: self.bottom_right * factor,
            bottom_left: self.bottom_left * factor,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Direction of the transition, controlling default thresholds, scrim fade
/// and the in/out fade swap.
pub enum TransitionDirection {
    /// Resolve by comparing container areas: a growing container enters.
    #[default]
    Auto,
    /// The end container enters the scene.
    Enter,
    /// The start container exits the scene.
    Return,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Immutable per-side input captured once when a transition begins.
pub struct ContainerSpec {
    /// Container bounds in scene coordinates; must have positive size.
    pub bounds: Rect,
    /// Corner sizes of the container outline, in absolute units.
    #[serde(default)]
    pub corners: CornerGeometry,
    /// Corner family of the container outline.
    #[serde(default)]
    pub corner_family: CornerFamily,
    /// Resting elevation of the container.
    #[serde(default)]
    pub elevation: f64,
    /// Fill color of the container surface.
    #[serde(default)]
    pub color: Rgba8,
    /// Opaque handle to the content drawn inside the container.
    pub content: ContentHandle,
}

impl ContainerSpec {
    /// Spec with plain square corners, zero elevation and transparent fill.
    pub fn new(bounds: Rect, content: ContentHandle) -> Self {
        Self {
            bounds,
            corners: CornerGeometry::default(),
            corner_family: CornerFamily::default(),
            elevation: 0.0,
            color: Rgba8::transparent(),
            content,
        }
    }

    /// Check bounds, corner and elevation invariants.
    pub fn validate(&self, side: &str) -> MorphResult<()> {
        let w = self.bounds.width();
        let h = self.bounds.height();
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(MorphError::configuration(format!(
                "{side} container bounds must have positive size, got {w} x {h}"
            )));
        }
        self.corners
            .validate()
            .map_err(|e| MorphError::configuration(format!("{side} container: {e}")))?;
        if !self.elevation.is_finite() {
            return Err(MorphError::configuration(format!(
                "{side} container elevation must be finite"
            )));
        }
        Ok(())
    }
}

fn default_scrim_color() -> Rgba8 {
    // 32% black, the stock scrim drawn behind the morphing container.
    Rgba8 {
        r: 0,
        g: 0,
        b: 0,
        a: 82,
    }
}

fn default_shadow_enabled() -> bool {
    true
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Construction-time configuration of one container morph.
///
/// A pure data model: it can be built programmatically or deserialized via
/// Serde (JSON), and is consumed once by [`crate::Compositor::new`].
pub struct TransitionConfig {
    /// How content of the two sides is faded over the transition.
    #[serde(default)]
    pub fade_mode: FadeMode,
    /// How content of the two sides is scaled over the transition.
    #[serde(default)]
    pub fit_mode: FitMode,
    /// Shape of the anchor motion path.
    #[serde(default)]
    pub path_shape: PathShape,
    /// Transition direction (controls defaults and the scrim/fade flip).
    #[serde(default)]
    pub direction: TransitionDirection,
    /// Per-sub-range threshold overrides.
    #[serde(default)]
    pub thresholds: ThresholdOverrides,
    /// Background of the morphing container, drawn below both contents.
    #[serde(default)]
    pub container_color: Rgba8,
    /// Scrim drawn behind the container over non-shared content.
    #[serde(default = "default_scrim_color")]
    pub scrim_color: Rgba8,
    /// Whether to compute elevation shadow parameters per frame.
    #[serde(default = "default_shadow_enabled")]
    pub elevation_shadow_enabled: bool,
    /// Scene the morph plays in (light-source placement for shadows).
    pub scene: SceneMetrics,
}

impl TransitionConfig {
    /// Config with stock defaults for a given scene.
    pub fn new(scene: SceneMetrics) -> Self {
        Self {
            fade_mode: FadeMode::default(),
            fit_mode: FitMode::default(),
            path_shape: PathShape::default(),
            direction: TransitionDirection::default(),
            thresholds: ThresholdOverrides::default(),
            container_color: Rgba8::transparent(),
            scrim_color: default_scrim_color(),
            elevation_shadow_enabled: true,
            scene,
        }
    }

    /// Deserialize a config from JSON.
    pub fn from_json_str(s: &str) -> MorphResult<Self> {
        serde_json::from_str(s).map_err(|e| MorphError::serde(format!("transition config: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
