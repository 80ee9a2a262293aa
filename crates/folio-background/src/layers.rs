//! Gradient blobs: the fixed layer table and its looping drift path.

use folio_core::{GradientLayer, Rgba};

use crate::easing::{EASE_IN_OUT, sample_even};

/// The six hand-placed blobs, back to front.
static GRADIENT_LAYERS: [GradientLayer; 6] = [
    // Deep pink
    layer(1, Rgba::new(219, 39, 119, 0.45), 900.0, -10.0, -5.0),
    // Coral
    layer(2, Rgba::new(251, 146, 60, 0.35), 700.0, 70.0, 5.0),
    // Deep blue
    layer(3, Rgba::new(59, 130, 246, 0.40), 1000.0, 50.0, 40.0),
    // Magenta
    layer(4, Rgba::new(236, 72, 153, 0.38), 800.0, 80.0, 60.0),
    // Purple
    layer(5, Rgba::new(139, 92, 246, 0.42), 850.0, 20.0, 70.0),
    // Cyan
    layer(6, Rgba::new(34, 211, 238, 0.30), 600.0, 40.0, 20.0),
];

const fn layer(id: u32, color: Rgba, size: f32, x: f32, y: f32) -> GradientLayer {
    GradientLayer {
        id,
        color,
        size,
        x,
        y,
    }
}

/// Horizontal drift keyframes in pixels.
const PATH_X: [f32; 6] = [0.0, 150.0, -100.0, 200.0, -50.0, 0.0];
/// Vertical drift keyframes in pixels.
const PATH_Y: [f32; 6] = [0.0, -100.0, 150.0, -50.0, 100.0, 0.0];
const PATH_SCALE: [f32; 6] = [1.0, 1.3, 0.9, 1.2, 0.95, 1.0];
const PATH_OPACITY: [f32; 6] = [0.6, 0.9, 0.5, 0.8, 0.7, 0.6];

/// The gradient fades to transparent at this fraction of its radius.
const GRADIENT_EXTENT: f32 = 0.6;

/// The constant blob table. Always the same slice.
pub fn gradient_layers() -> &'static [GradientLayer] {
    &GRADIENT_LAYERS
}

/// Animated state of a blob at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobFrame {
    /// Horizontal offset from the resting position, pixels.
    pub dx: f32,
    /// Vertical offset from the resting position, pixels.
    pub dy: f32,
    pub scale: f32,
    pub opacity: f32,
}

/// Seconds for one full loop of the drift path.
pub fn cycle_secs(layer: &GradientLayer) -> f32 {
    15.0 + layer.id as f32 * 3.0
}

/// Where the blob is `elapsed` seconds into the animation.
pub fn blob_frame(layer: &GradientLayer, elapsed: f32) -> BlobFrame {
    let cycle = cycle_secs(layer);
    let progress = elapsed.rem_euclid(cycle) / cycle;
    BlobFrame {
        dx: sample_even(&PATH_X, progress, &EASE_IN_OUT),
        dy: sample_even(&PATH_Y, progress, &EASE_IN_OUT),
        scale: sample_even(&PATH_SCALE, progress, &EASE_IN_OUT),
        opacity: sample_even(&PATH_OPACITY, progress, &EASE_IN_OUT),
    }
}

/// Alpha multiplier the blob contributes at pixel `(px, py)` of a `vw` x
/// `vh` viewport, applied on top of the layer color's own alpha.
///
/// The blob box sits with its top-left corner at the layer position, is
/// scaled about its centre, and carries a radial gradient from full color at
/// the centre to transparent at 60% of the farthest-corner radius.
pub fn blob_alpha(
    layer: &GradientLayer,
    frame: &BlobFrame,
    px: f32,
    py: f32,
    vw: f32,
    vh: f32,
) -> f32 {
    let half = layer.size / 2.0;
    let cx = layer.x / 100.0 * vw + frame.dx + half;
    let cy = layer.y / 100.0 * vh + frame.dy + half;

    let corner_radius = half * frame.scale * std::f32::consts::SQRT_2;
    let extent = corner_radius * GRADIENT_EXTENT;
    if extent <= 0.0 {
        return 0.0;
    }

    let dist = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
    let falloff = (1.0 - dist / extent).max(0.0);
    frame.opacity * falloff
}
