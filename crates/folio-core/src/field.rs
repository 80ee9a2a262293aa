//! Parameter records produced by the decorative field generator.

use crate::color::Rgba;

/// A large radial gradient blob drifting behind the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientLayer {
    /// Ordinal id, also selects the blob's cycle duration.
    pub id: u32,
    /// Color at the centre of the gradient.
    pub color: Rgba,
    /// Diameter in viewport pixels.
    pub size: f32,
    /// Left edge, percent of viewport width.
    pub x: f32,
    /// Top edge, percent of viewport height.
    pub y: f32,
}

/// A small light dot drifting left to right across the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightParticle {
    pub id: u32,
    /// Diameter in pixels (2-6).
    pub size: f32,
    /// Vertical position, percent of viewport height.
    pub y: f32,
    /// Seconds for one crossing.
    pub duration: f32,
    /// Seconds before the first crossing starts.
    pub delay: f32,
    /// Opacity held between the fade in and fade out.
    pub opacity: f32,
    pub color: Rgba,
}
