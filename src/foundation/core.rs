use crate::foundation::error::{MorphError, MorphResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Opaque handle to the content a renderer will paint inside a container.
///
/// The compositor never looks behind the handle; it is carried through to
/// [`crate::MorphState`] untouched so a renderer can resolve it against its
/// own texture/snapshot store.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ContentHandle(pub u64);

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Opaque color from RGB channels.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// The same color with a replaced alpha channel.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Dimensions of the scene the morph plays in, in the same coordinate space
/// as the container bounds.
///
/// Used by the shadow model to place the conceptual light source at the
/// horizontal scene center, top of scene.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneMetrics {
    /// Scene width, must be > 0.
    pub width: f64,
    /// Scene height, must be > 0.
    pub height: f64,
}

impl SceneMetrics {
    /// Validated constructor.
    pub fn new(width: f64, height: f64) -> MorphResult<Self> {
        let scene = Self { width, height };
        scene.validate()?;
        Ok(scene)
    }

    /// Check the finite-positive invariant (also used after Serde ingestion).
    pub fn validate(&self) -> MorphResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(MorphError::configuration("scene width must be > 0"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(MorphError::configuration("scene height must be > 0"));
        }
        Ok(())
    }
}
