use kurbo::{BezPath, Rect, RoundedRect, RoundedRectRadii, Shape};

use crate::{
    animation::threshold::lerp_window,
    composition::model::{CornerFamily, CornerGeometry, ProgressThresholds},
};

// Flattening tolerance for the rounded-corner arcs of the silhouette.
const OUTLINE_TOLERANCE: f64 = 0.1;

#[derive(Clone, Debug)]
/// Per-frame mask output: the interpolated corner geometry and the clip
/// silhouette bounding all drawing for the frame.
pub struct MaskSnapshot {
    /// Interpolated corner sizes, in absolute units.
    pub corners: CornerGeometry,
    /// Corner family of the current silhouette.
    pub family: CornerFamily,
    /// Union of the two current outlines, one subpath per side.
    ///
    /// The union is expressed through the nonzero fill rule: both subpaths
    /// share a winding direction, so filling (or clipping to) the path with
    /// nonzero covers exactly the union region.
    pub silhouette: BezPath,
}

/// Interpolate corner geometry over the shape-mask sub-range and build the
/// frame's clip silhouette from the two current outlines.
///
/// Corner sizes are height-relative fractions captured at transition start;
/// each side resolves against its own evolving bounds (the start side against
/// the unmasked current start bounds, the end side against the masked current
/// end bounds) before the per-corner threshold lerp. A side whose corners are
/// all zero is insignificant: the other side's corner family is used as the
/// interpolation base so the silhouette never flips family mid-morph.
#[allow(clippy::too_many_arguments)]
pub fn evaluate_mask(
    progress: f64,
    start_corners: &CornerGeometry,
    start_family: CornerFamily,
    end_corners: &CornerGeometry,
    end_family: CornerFamily,
    current_start_bounds: &Rect,
    current_start_bounds_masked: &Rect,
    current_end_bounds_masked: &Rect,
    shape_mask: ProgressThresholds,
) -> MaskSnapshot {
    let start_abs = start_corners.resolve(current_start_bounds);
    let end_abs = end_corners.resolve(current_end_bounds_masked);

    let corner = |s: f64, e: f64| lerp_window(s, e, shape_mask.start, shape_mask.end, progress);
    let corners = CornerGeometry {
        top_left: corner(start_abs.top_left, end_abs.top_left),
        top_right: corner(start_abs.top_right, end_abs.top_right),
        bottom_right: corner(start_abs.bottom_right, end_abs.bottom_right),
        bottom_left: corner(start_abs.bottom_left, end_abs.bottom_left),
    };

    let family = if start_corners.is_square() {
        end_family
    } else {
        start_family
    };

    let start_outline = outline(current_start_bounds_masked, &corners, family);
    let end_outline = outline(current_end_bounds_masked, &corners, family);
    let mut elements = start_outline.elements().to_vec();
    elements.extend_from_slice(end_outline.elements());
    let silhouette = BezPath::from_vec(elements);

    MaskSnapshot {
        corners,
        family,
        silhouette,
    }
}

/// Outline of one side's bounds with the current corner geometry.
pub fn outline(bounds: &Rect, corners: &CornerGeometry, family: CornerFamily) -> BezPath {
    let c = clamp_to_bounds(corners, bounds);
    match family {
        CornerFamily::Rounded => RoundedRect::from_rect(
            *bounds,
            RoundedRectRadii::new(c.top_left, c.top_right, c.bottom_right, c.bottom_left),
        )
        .to_path(OUTLINE_TOLERANCE),
        CornerFamily::Cut => cut_outline(bounds, &c),
    }
}

// Corner sizes may momentarily exceed what the shrinking masked bounds can
// hold; cap them at half the shorter edge.
fn clamp_to_bounds(corners: &CornerGeometry, bounds: &Rect) -> CornerGeometry {
    let cap = (bounds.width().min(bounds.height()) / 2.0).max(0.0);
    CornerGeometry {
        top_left: corners.top_left.clamp(0.0, cap),
        top_right: corners.top_right.clamp(0.0, cap),
        bottom_right: corners.bottom_right.clamp(0.0, cap),
        bottom_left: corners.bottom_left.clamp(0.0, cap),
    }
}

fn cut_outline(bounds: &Rect, corners: &CornerGeometry) -> BezPath {
    let Rect { x0, y0, x1, y1 } = *bounds;
    let mut path = BezPath::new();
    path.move_to((x0 + corners.top_left, y0));
    path.line_to((x1 - corners.top_right, y0));
    path.line_to((x1, y0 + corners.top_right));
    path.line_to((x1, y1 - corners.bottom_right));
    path.line_to((x1 - corners.bottom_right, y1));
    path.line_to((x0 + corners.bottom_left, y1));
    path.line_to((x0, y1 - corners.bottom_left));
    path.line_to((x0, y0 + corners.top_left));
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/eval/mask.rs"]
mod tests;
