use kurbo::{BezPath, Point, Rect, Vec2};

use crate::{
    animation::path::MotionPathSampler,
    animation::threshold::{fraction_window, lerp_alpha},
    composition::model::{
        ContainerSpec, CornerFamily, CornerGeometry, ProgressThresholdsGroup, TransitionConfig,
        TransitionDirection,
    },
    eval::fade::{FadeMode, Layer},
    eval::fit::FitVariant,
    eval::mask::evaluate_mask,
    eval::shadow::evaluate_shadow,
    foundation::core::{Rgba8, SceneMetrics},
    foundation::error::{MorphError, MorphResult},
};

#[derive(Clone, Debug, serde::Serialize)]
/// The complete geometric/visual snapshot of one morph frame.
///
/// Everything a renderer needs to paint the frame: clip silhouette, per-side
/// bounds/scale/alpha, draw order, shadow parameters and scrim alpha. A new
/// independent value is produced on every [`Compositor::update_progress`]
/// call and is meant to be consumed and discarded by the renderer.
pub struct MorphState {
    /// The progress value this snapshot was computed for.
    pub progress: f64,
    /// Evolving bounds of the start content, anchored at the path position.
    pub current_start_bounds: Rect,
    /// Evolving bounds of the end content, anchored at the path position.
    pub current_end_bounds: Rect,
    /// Start bounds after the scale-mask trim.
    pub current_start_bounds_masked: Rect,
    /// End bounds after the scale-mask trim.
    pub current_end_bounds_masked: Rect,
    /// Union of the two current outlines (nonzero fill rule). All drawing
    /// for the frame (container fill, start content, end content) must be
    /// clipped to this path.
    pub silhouette: BezPath,
    /// Interpolated corner sizes of the current silhouette, absolute units.
    pub corners: CornerGeometry,
    /// Corner family of the current silhouette.
    pub corner_family: CornerFamily,
    /// Alpha of the start content, `0..=255`.
    pub start_alpha: u8,
    /// Alpha of the end content, `0..=255`.
    pub end_alpha: u8,
    /// Which content paints on top.
    pub top_layer: Layer,
    /// Uniform scale applied to the start content.
    pub start_scale: f64,
    /// Uniform scale applied to the end content.
    pub end_scale: f64,
    /// Current elevation (unclamped linear; overshoot may exceed endpoints).
    pub elevation: f64,
    /// Shadow offset for the fixed top-center light, `None` when elevation
    /// shadows are disabled. Drawn only outside the silhouette.
    pub shadow_offset: Option<Vec2>,
    /// Alpha of the scrim behind the container, `0..=255`.
    pub scrim_alpha: u8,
    /// Fill of the morphing container, drawn below both contents.
    pub container_color: Rgba8,
    /// Scrim color (combine with `scrim_alpha`).
    pub scrim_color: Rgba8,
}

/// Progress-driven morph compositor for one start/end container pair.
///
/// All configuration is fixed at construction; [`Compositor::update_progress`]
/// is a pure function of its progress argument and may be called repeatedly
/// and in any order (a caller may rewind).
#[derive(Clone, Debug)]
pub struct Compositor {
    start: ContainerSpec,
    end: ContainerSpec,
    // Corner fractions captured once, height-relative (resolution-independent).
    start_corners: CornerGeometry,
    end_corners: CornerGeometry,
    thresholds: ProgressThresholdsGroup,
    fade_mode: FadeMode,
    fit_variant: FitVariant,
    sampler: MotionPathSampler,
    entering: bool,
    scene: SceneMetrics,
    container_color: Rgba8,
    scrim_color: Rgba8,
    elevation_shadow_enabled: bool,
}

impl Compositor {
    /// Validate the captured containers and configuration and resolve every
    /// per-transition choice (direction, fade swap, fit axis, thresholds,
    /// motion path) once.
    #[tracing::instrument(skip(start, end, config))]
    pub fn new(
        start: ContainerSpec,
        end: ContainerSpec,
        config: TransitionConfig,
    ) -> MorphResult<Self> {
        start.validate("start")?;
        end.validate("end")?;
        config.scene.validate()?;

        let entering = match config.direction {
            TransitionDirection::Auto => end.bounds.area() > start.bounds.area(),
            TransitionDirection::Enter => true,
            TransitionDirection::Return => false,
        };

        let defaults = ProgressThresholdsGroup::defaults_for(entering, config.path_shape);
        let thresholds = config.thresholds.resolve(defaults);
        thresholds.validate()?;

        let sampler = MotionPathSampler::new(
            anchor_point(&start.bounds),
            anchor_point(&end.bounds),
            config.path_shape,
        );

        Ok(Self {
            start_corners: start.corners.to_relative(&start.bounds),
            end_corners: end.corners.to_relative(&end.bounds),
            fade_mode: config.fade_mode.resolve_for_direction(entering),
            fit_variant: config
                .fit_mode
                .variant_for(entering, &start.bounds, &end.bounds),
            sampler,
            entering,
            scene: config.scene,
            container_color: config.container_color,
            scrim_color: config.scrim_color,
            elevation_shadow_enabled: config.elevation_shadow_enabled,
            thresholds,
            start,
            end,
        })
    }

    /// Whether this transition was resolved as entering (end container grows
    /// into the scene) rather than returning.
    pub fn is_entering(&self) -> bool {
        self.entering
    }

    /// The resolved threshold group driving the child animations.
    pub fn thresholds(&self) -> ProgressThresholdsGroup {
        self.thresholds
    }

    /// The resolved fit axis.
    pub fn fit_variant(&self) -> FitVariant {
        self.fit_variant
    }

    /// Compute the complete morph snapshot for one progress value.
    ///
    /// Total over all finite progress, including overshoot outside `[0, 1]`;
    /// NaN or infinite progress is rejected with
    /// [`MorphError::InvalidProgress`]. Referentially transparent: equal
    /// progress always yields an equal snapshot.
    #[tracing::instrument(skip(self))]
    pub fn update_progress(&self, progress: f64) -> MorphResult<MorphState> {
        if !progress.is_finite() {
            return Err(MorphError::invalid_progress(format!(
                "progress must be finite, got {progress}"
            )));
        }

        // Scrim fades in over non-shared content while entering, back out
        // while returning.
        let scrim_alpha = if self.entering {
            lerp_alpha(0, 255, 0.0, 1.0, progress)
        } else {
            lerp_alpha(255, 0, 0.0, 1.0, progress)
        };

        let anchor = self.sampler.position(progress);

        let fit = self.fit_variant.evaluate(
            progress,
            self.thresholds.scale,
            &self.start.bounds,
            &self.end.bounds,
        );
        let current_start_bounds = anchored_bounds(
            anchor,
            fit.current_start_width,
            fit.current_start_height,
        );
        let current_end_bounds =
            anchored_bounds(anchor, fit.current_end_width, fit.current_end_height);

        // Trim the overflowing side toward the final silhouette over the
        // scale-mask sub-range.
        let mut current_start_bounds_masked = current_start_bounds;
        let mut current_end_bounds_masked = current_end_bounds;
        let mask_fraction = fraction_window(
            self.thresholds.scale_mask.start,
            self.thresholds.scale_mask.end,
            progress,
        );
        if self.fit_variant.mask_target_is_start(&fit) {
            self.fit_variant
                .apply_mask(&mut current_start_bounds_masked, mask_fraction, &fit);
        } else {
            self.fit_variant
                .apply_mask(&mut current_end_bounds_masked, 1.0 - mask_fraction, &fit);
        }

        let mask = evaluate_mask(
            progress,
            &self.start_corners,
            self.start.corner_family,
            &self.end_corners,
            self.end.corner_family,
            &current_start_bounds,
            &current_start_bounds_masked,
            &current_end_bounds_masked,
            self.thresholds.shape_mask,
        );

        let fade = self.fade_mode.evaluate(progress, self.thresholds.fade);

        let shadow = evaluate_shadow(
            self.start.elevation,
            self.end.elevation,
            progress,
            current_start_bounds_masked
                .union(current_end_bounds_masked)
                .center(),
            &self.scene,
        );

        Ok(MorphState {
            progress,
            current_start_bounds,
            current_end_bounds,
            current_start_bounds_masked,
            current_end_bounds_masked,
            silhouette: mask.silhouette,
            corners: mask.corners,
            corner_family: mask.family,
            start_alpha: fade.start_alpha,
            end_alpha: fade.end_alpha,
            top_layer: fade.top_layer,
            start_scale: fit.start_scale,
            end_scale: fit.end_scale,
            elevation: shadow.elevation,
            shadow_offset: self.elevation_shadow_enabled.then_some(shadow.offset),
            scrim_alpha,
            container_color: self.container_color,
            scrim_color: self.scrim_color,
        })
    }
}

// The reference point each container contributes to the motion path: its
// top-center.
fn anchor_point(bounds: &Rect) -> Point {
    Point::new(bounds.center().x, bounds.y0)
}

fn anchored_bounds(anchor: Point, width: f64, height: f64) -> Rect {
    Rect::new(
        anchor.x - width / 2.0,
        anchor.y,
        anchor.x + width / 2.0,
        anchor.y + height,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/eval/compositor.rs"]
mod tests;
