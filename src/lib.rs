//! Morpho is a progress-driven container morph compositor.
//!
//! Morpho animates a smooth visual morph between two rectangular containers,
//! each with its own bounds, corner shape, elevation and color. For every
//! point along an animation's progress it produces one complete snapshot
//! ([`MorphState`]) describing how the start container transforms into the
//! end container: current bounds, clip silhouette, opacities, scales, shadow
//! and scrim.
//!
//! # Pipeline overview
//!
//! 1. **Capture** (external): two [`ContainerSpec`] values plus a
//!    [`TransitionConfig`] describe the transition.
//! 2. **Configure**: `ContainerSpec x2 + TransitionConfig -> Compositor`
//!    (direction, fade/fit resolution, thresholds, motion path; fixed once)
//! 3. **Evaluate**: `Compositor + progress -> MorphState` (pure, per frame)
//! 4. **Render** (external): a platform renderer paints the snapshot.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: evaluation is pure and stable for a given
//!   input; equal progress yields an equal snapshot.
//! - **No IO, no clock**: progress is supplied by an external animator;
//!   pixels are produced by an external renderer.
//! - **Total over its domain**: any finite progress (including overshoot
//!   outside `[0, 1]`) yields a finite snapshot; only NaN/infinite progress
//!   and degenerate construction inputs are rejected.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod composition;
mod eval;
mod foundation;

pub use animation::path::{MotionPathSampler, PathShape, parse_path_shape};
pub use animation::threshold::{fraction_window, lerp, lerp_alpha, lerp_window};
pub use composition::model::{
    ContainerSpec, CornerFamily, CornerGeometry, ProgressThresholds, ProgressThresholdsGroup,
    ThresholdOverrides, TransitionConfig, TransitionDirection,
};
pub use eval::compositor::{Compositor, MorphState};
pub use eval::fade::{FadeMode, FadeSnapshot, Layer, parse_fade_mode};
pub use eval::fit::{FitMode, FitSnapshot, FitVariant, parse_fit_mode};
pub use eval::mask::{MaskSnapshot, evaluate_mask, outline};
pub use eval::shadow::{ShadowSnapshot, evaluate_shadow};
pub use foundation::core::{BezPath, ContentHandle, Point, Rect, Rgba8, SceneMetrics, Vec2};
pub use foundation::error::{MorphError, MorphResult};
