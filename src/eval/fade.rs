use crate::{
    animation::threshold::{lerp, lerp_alpha},
    composition::model::ProgressThresholds,
    foundation::error::{MorphError, MorphResult},
};

// Interior split point of the fade sub-range for the Through mode: outgoing
// content is gone before incoming content starts to appear.
const FADE_THROUGH_SPLIT: f64 = 0.35;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// How the content of the two sides is faded while the container morphs.
pub enum FadeMode {
    /// Fade in the incoming content; outgoing content stays opaque.
    #[default]
    In,
    /// Fade out the outgoing content; incoming content stays opaque.
    Out,
    /// Cross-fade outgoing and incoming content simultaneously.
    Cross,
    /// Sequentially fade out the outgoing content, then fade in the incoming
    /// content, with no overlap.
    Through,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Which side's content is drawn after (visually above) the other.
pub enum Layer {
    /// The start container's content paints on top.
    Start,
    /// The end container's content paints on top.
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Per-frame fade output: content alphas and draw order.
pub struct FadeSnapshot {
    /// Alpha of the start content, `0..=255`.
    pub start_alpha: u8,
    /// Alpha of the end content, `0..=255`.
    pub end_alpha: u8,
    /// Which content paints on top.
    pub top_layer: Layer,
}

impl FadeMode {
    /// Compute content alphas and draw order for a progress value over the
    /// fade sub-range. Saturates at the boundary values outside the range.
    pub fn evaluate(self, progress: f64, thresholds: ProgressThresholds) -> FadeSnapshot {
        let ProgressThresholds { start, end } = thresholds;
        match self {
            Self::In => FadeSnapshot {
                start_alpha: 255,
                end_alpha: lerp_alpha(0, 255, start, end, progress),
                top_layer: Layer::End,
            },
            Self::Out => FadeSnapshot {
                start_alpha: lerp_alpha(255, 0, start, end, progress),
                end_alpha: 255,
                top_layer: Layer::Start,
            },
            Self::Cross => FadeSnapshot {
                start_alpha: lerp_alpha(255, 0, start, end, progress),
                end_alpha: lerp_alpha(0, 255, start, end, progress),
                top_layer: Layer::Start,
            },
            Self::Through => {
                let split = lerp(start, end, FADE_THROUGH_SPLIT);
                FadeSnapshot {
                    start_alpha: lerp_alpha(255, 0, start, split, progress),
                    end_alpha: lerp_alpha(0, 255, split, end, progress),
                    top_layer: Layer::Start,
                }
            }
        }
    }

    /// Direction-resolve the mode: on a return transition the roles of
    /// incoming and outgoing content swap, so `In` behaves as `Out` and vice
    /// versa. `Cross` and `Through` are symmetric and unaffected.
    pub(crate) fn resolve_for_direction(self, entering: bool) -> Self {
        if entering {
            return self;
        }
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
            other => other,
        }
    }
}

/// Parse a fade mode from its canonical string form.
pub fn parse_fade_mode(kind: &str) -> MorphResult<FadeMode> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "in" => Ok(FadeMode::In),
        "out" => Ok(FadeMode::Out),
        "cross" => Ok(FadeMode::Cross),
        "through" => Ok(FadeMode::Through),
        other => Err(MorphError::configuration(format!(
            "unknown fade mode '{other}'"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fade.rs"]
mod tests;
