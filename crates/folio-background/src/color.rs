//! Color constants and helpers for the space background.

use folio_core::Rgba;

/// Near-black page backdrop, `#050508`.
pub const BACKDROP: (u8, u8, u8) = (5, 5, 8);

/// Color of the pointer glow at its centre.
pub const GLOW: Rgba = Rgba::new(244, 114, 182, 0.15);
/// Diameter of the pointer glow in pixels.
pub const GLOW_SIZE: f32 = 300.0;
/// The glow fades out at this fraction of its farthest-corner radius.
const GLOW_EXTENT: f32 = 0.7;

/// Strength of the backdrop fade over the lower half of the page.
const BOTTOM_FADE_OPACITY: f32 = 0.8;

/// Alpha of the backdrop-colored fade at normalized height `y_norm`
/// (0 = top, 1 = bottom). Transparent over the top half, rising linearly to
/// full strength at the bottom edge.
pub fn bottom_fade(y_norm: f32) -> f32 {
    let from_bottom = 1.0 - y_norm.clamp(0.0, 1.0);
    BOTTOM_FADE_OPACITY * (1.0 - from_bottom / 0.5).max(0.0)
}

/// Alpha the pointer glow contributes at `dist` pixels from its centre.
pub fn glow_alpha(dist: f32) -> f32 {
    let extent = GLOW_SIZE / 2.0 * std::f32::consts::SQRT_2 * GLOW_EXTENT;
    (1.0 - dist / extent).max(0.0)
}

/// Composite `color` with extra `alpha` onto `bg`.
pub fn over(bg: (u8, u8, u8), color: Rgba, alpha: f32) -> (u8, u8, u8) {
    color.blend_over(bg, alpha)
}

/// Fade `rgb` toward the backdrop by `alpha`.
pub fn fade_to_backdrop(rgb: (u8, u8, u8), alpha: f32) -> (u8, u8, u8) {
    let (r, g, b) = BACKDROP;
    Rgba::opaque(r, g, b).blend_over(rgb, alpha)
}
