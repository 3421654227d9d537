use kurbo::{Point, Vec2};

use crate::{animation::threshold::lerp, foundation::core::SceneMetrics};

// Offset contributed per unit of elevation.
const OFFSET_PER_ELEVATION: f64 = 0.33;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-frame shadow output: current elevation and the approximate shadow
/// offset under a fixed light source.
pub struct ShadowSnapshot {
    /// Current elevation. Unclamped: overshoot progress can transiently push
    /// it past either resting elevation.
    pub elevation: f64,
    /// Shadow offset from the silhouette, in scene units.
    pub offset: Vec2,
}

/// Interpolate elevation and derive the shadow offset for one frame.
///
/// The light sits at the horizontal scene center, top of scene: a container
/// left of center casts its shadow further left, one lower in the scene casts
/// it further down. The renderer draws the shadow only outside the clip
/// silhouette, so content drawn afterwards never erases it from inside.
pub fn evaluate_shadow(
    start_elevation: f64,
    end_elevation: f64,
    progress: f64,
    anchor: Point,
    scene: &SceneMetrics,
) -> ShadowSnapshot {
    let elevation = lerp(start_elevation, end_elevation, progress);
    let dx = (anchor.x / (scene.width / 2.0) - 1.0) * elevation * OFFSET_PER_ELEVATION;
    let dy = anchor.y / scene.height * elevation * OFFSET_PER_ELEVATION;
    ShadowSnapshot {
        elevation,
        offset: Vec2::new(dx, dy),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/shadow.rs"]
mod tests;
