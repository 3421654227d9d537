use kurbo::{Line, ParamCurve, ParamCurveArclen, Point, QuadBez};

use crate::foundation::error::{MorphError, MorphResult};

/// Shape of the motion path the morphing container's anchor travels along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PathShape {
    /// Straight line from the start anchor to the end anchor.
    #[default]
    Linear,
    /// Quadratic arc whose control point keeps the motion horizontal-first
    /// when moving up and vertical-first when moving down.
    Arc,
}

/// Parse a path shape from its canonical string form.
pub fn parse_path_shape(kind: &str) -> MorphResult<PathShape> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "linear" | "line" => Ok(PathShape::Linear),
        "arc" => Ok(PathShape::Arc),
        other => Err(MorphError::configuration(format!(
            "unknown path shape '{other}'"
        ))),
    }
}

// Boundary sample distance used for overshoot extrapolation.
const OVERSHOOT_EPS: f64 = 0.01;
const ARCLEN_ACCURACY: f64 = 1e-6;

#[derive(Clone, Debug)]
enum MotionCurve {
    Line(Line),
    Arc(QuadBez),
}

/// Arc-length sampler over the motion path between two anchor points.
///
/// `position` is total over all real fractions: inside `[0, 1]` it samples
/// the path at `fraction * total_length` of arc length; outside it
/// extrapolates linearly along the secant between a near-boundary sample and
/// the true endpoint, preserving directional momentum for bounce easing.
#[derive(Clone, Debug)]
pub struct MotionPathSampler {
    curve: MotionCurve,
    total_len: f64,
    start: Point,
    end: Point,
}

impl MotionPathSampler {
    /// Build the path once from the two anchor points and a shape selector.
    pub fn new(start: Point, end: Point, shape: PathShape) -> Self {
        let curve = match shape {
            PathShape::Linear => MotionCurve::Line(Line::new(start, end)),
            PathShape::Arc => MotionCurve::Arc(QuadBez::new(start, arc_control(start, end), end)),
        };
        let total_len = match &curve {
            MotionCurve::Line(line) => line.arclen(ARCLEN_ACCURACY),
            MotionCurve::Arc(quad) => quad.arclen(ARCLEN_ACCURACY),
        };
        Self {
            curve,
            total_len,
            start,
            end,
        }
    }

    /// Total arc length of the built path.
    pub fn total_length(&self) -> f64 {
        self.total_len
    }

    /// Position for any real `fraction` (see type-level docs).
    pub fn position(&self, fraction: f64) -> Point {
        // Coincident anchors degenerate to a single point for all fractions.
        if self.total_len <= 0.0 {
            return self.start;
        }
        if fraction < 0.0 {
            let boundary = self.sample(OVERSHOOT_EPS);
            return self.start + (self.start - boundary) * (-fraction / OVERSHOOT_EPS);
        }
        if fraction > 1.0 {
            let boundary = self.sample(1.0 - OVERSHOOT_EPS);
            return self.end + (self.end - boundary) * ((fraction - 1.0) / OVERSHOOT_EPS);
        }
        self.sample(fraction)
    }

    // Arc-length parameterized sample, `fraction` in [0, 1].
    fn sample(&self, fraction: f64) -> Point {
        match &self.curve {
            // Uniform parameterization of a line is already arc length.
            MotionCurve::Line(line) => line.eval(fraction),
            MotionCurve::Arc(quad) => {
                let t = quad.inv_arclen(self.total_len * fraction, ARCLEN_ACCURACY);
                quad.eval(t)
            }
        }
    }
}

// Control point placement for the arced path: when moving up the arc leads
// horizontally, when moving down it leads vertically.
fn arc_control(start: Point, end: Point) -> Point {
    if start.y > end.y {
        Point::new(end.x, start.y)
    } else {
        Point::new(start.x, end.y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/path.rs"]
mod tests;
