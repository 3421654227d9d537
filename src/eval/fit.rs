use kurbo::Rect;

use crate::{
    animation::threshold::lerp_window,
    composition::model::ProgressThresholds,
    foundation::error::{MorphError, MorphResult},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// How the content of the two sides is scaled while the container morphs.
pub enum FitMode {
    /// Pick [`FitMode::Width`] or [`FitMode::Height`] automatically,
    /// whichever keeps the fitted side inside the evolving container.
    #[default]
    Auto,
    /// Scale both contents so their widths track the evolving container
    /// width; overflowing height is clipped by the scale mask.
    Width,
    /// Scale both contents so their heights track the evolving container
    /// height; overflowing width is clipped by the scale mask.
    Height,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Fit axis resolved once at construction time from a [`FitMode`].
pub enum FitVariant {
    /// Widths are driven, heights derived.
    Width,
    /// Heights are driven, widths derived.
    Height,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-frame fit output: evolving content sizes and scales of both sides.
pub struct FitSnapshot {
    /// Scaled width of the start content.
    pub current_start_width: f64,
    /// Scaled height of the start content.
    pub current_start_height: f64,
    /// Scaled width of the end content.
    pub current_end_width: f64,
    /// Scaled height of the end content.
    pub current_end_height: f64,
    /// Uniform scale applied to the start content.
    pub start_scale: f64,
    /// Uniform scale applied to the end content.
    pub end_scale: f64,
}

impl FitMode {
    /// Resolve the fit axis once, from the direction and both captured
    /// bounds. `Auto` fits to width when the incoming side, scaled into the
    /// outgoing width, is at least as tall as the outgoing side (so the
    /// overflow is vertical and can be clipped bottom-up).
    pub fn variant_for(self, entering: bool, start_bounds: &Rect, end_bounds: &Rect) -> FitVariant {
        match self {
            Self::Width => FitVariant::Width,
            Self::Height => FitVariant::Height,
            Self::Auto => {
                if should_fit_width(entering, start_bounds, end_bounds) {
                    FitVariant::Width
                } else {
                    FitVariant::Height
                }
            }
        }
    }
}

fn should_fit_width(entering: bool, start_bounds: &Rect, end_bounds: &Rect) -> bool {
    let start_w = start_bounds.width();
    let start_h = start_bounds.height();
    let end_w = end_bounds.width();
    let end_h = end_bounds.height();

    let end_height_fit_to_width = end_h * start_w / end_w;
    let start_height_fit_to_width = start_h * end_w / start_w;
    if entering {
        end_height_fit_to_width >= start_h
    } else {
        start_height_fit_to_width >= end_h
    }
}

impl FitVariant {
    /// Compute both sides' scaled sizes for a progress value over the scale
    /// sub-range. At or below `scale.start` the sizes equal the start
    /// container's own size; at or above `scale.end` the end container's;
    /// in between they vary continuously and monotonically.
    pub fn evaluate(
        self,
        progress: f64,
        scale: ProgressThresholds,
        start_bounds: &Rect,
        end_bounds: &Rect,
    ) -> FitSnapshot {
        let start_w = start_bounds.width();
        let start_h = start_bounds.height();
        let end_w = end_bounds.width();
        let end_h = end_bounds.height();

        match self {
            Self::Width => {
                let current_width = lerp_window(start_w, end_w, scale.start, scale.end, progress);
                let start_scale = current_width / start_w;
                let end_scale = current_width / end_w;
                FitSnapshot {
                    current_start_width: current_width,
                    current_start_height: start_h * start_scale,
                    current_end_width: current_width,
                    current_end_height: end_h * end_scale,
                    start_scale,
                    end_scale,
                }
            }
            Self::Height => {
                let current_height = lerp_window(start_h, end_h, scale.start, scale.end, progress);
                let start_scale = current_height / start_h;
                let end_scale = current_height / end_h;
                FitSnapshot {
                    current_start_width: start_w * start_scale,
                    current_start_height: current_height,
                    current_end_width: end_w * end_scale,
                    current_end_height: current_height,
                    start_scale,
                    end_scale,
                }
            }
        }
    }

    /// Which of the two evolving rectangles must be progressively clipped
    /// toward the final silhouette: the one whose derived axis overflows the
    /// other's.
    pub fn mask_target_is_start(self, snapshot: &FitSnapshot) -> bool {
        match self {
            Self::Width => snapshot.current_start_height > snapshot.current_end_height,
            Self::Height => snapshot.current_start_width > snapshot.current_end_width,
        }
    }

    /// Trim the overflowing axis of `bounds` by `multiplier` of the current
    /// size difference: height is trimmed bottom-up, width symmetrically
    /// from both sides (the container is anchored at top-center).
    pub fn apply_mask(self, bounds: &mut Rect, multiplier: f64, snapshot: &FitSnapshot) {
        match self {
            Self::Width => {
                let diff = (snapshot.current_end_height - snapshot.current_start_height).abs();
                bounds.y1 -= diff * multiplier;
            }
            Self::Height => {
                let diff = (snapshot.current_end_width - snapshot.current_start_width).abs();
                bounds.x0 += diff * multiplier / 2.0;
                bounds.x1 -= diff * multiplier / 2.0;
            }
        }
    }
}

/// Parse a fit mode from its canonical string form.
pub fn parse_fit_mode(kind: &str) -> MorphResult<FitMode> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "auto" => Ok(FitMode::Auto),
        "width" => Ok(FitMode::Width),
        "height" => Ok(FitMode::Height),
        other => Err(MorphError::configuration(format!(
            "unknown fit mode '{other}'"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fit.rs"]
mod tests;
