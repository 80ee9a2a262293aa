//! One activation of the gradient and particle layers.

use std::cell::OnceCell;

use folio_core::{GradientLayer, LightParticle};

use crate::layers::gradient_layers;
use crate::particles;
use crate::spring::PointerFilter;

/// Gradient blobs, light particles and the pointer filter for as long as
/// the background is shown.
///
/// Particles are generated on first use and then held for the lifetime of
/// the value; a new activation generates a new set. Pointer updates never
/// touch either list.
#[derive(Debug, Default)]
pub struct DecorativeField {
    particles: OnceCell<Box<[LightParticle]>>,
    pointer: PointerFilter,
    /// Animation time in seconds since activation.
    elapsed: f32,
}

impl DecorativeField {
    /// Start a new activation.
    pub fn activate() -> Self {
        tracing::debug!("decorative field activated");
        Self::default()
    }

    /// The constant blob table.
    pub fn layers(&self) -> &'static [GradientLayer] {
        gradient_layers()
    }

    /// This activation's particles.
    pub fn particles(&self) -> &[LightParticle] {
        self.particles
            .get_or_init(|| particles::generate(&mut rand::thread_rng()).into_boxed_slice())
    }

    /// Record a raw pointer position in viewport pixels.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.set_target(x, y);
    }

    /// Put the smoothed pointer directly at `(x, y)`, for the first
    /// position seen in an activation.
    pub fn place_pointer(&mut self, x: f32, y: f32) {
        self.pointer.jump_to(x, y);
    }

    /// Smoothed pointer position in viewport pixels.
    pub fn pointer(&self) -> (f32, f32) {
        self.pointer.value()
    }

    /// Advance the pointer filter by `dt` wall-clock seconds.
    pub fn tick_pointer(&mut self, dt: f32) {
        self.pointer.tick(dt);
    }

    /// Advance the blob and particle timelines by `dt` animation seconds.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    /// Animation time since activation.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particles_are_memoized() {
        let field = DecorativeField::activate();
        let first = field.particles();
        let second = field.particles();
        assert_eq!(first.len(), 35);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_pointer_updates_keep_particles() {
        let mut field = DecorativeField::activate();
        let before = field.particles().as_ptr();
        field.pointer_moved(120.0, 80.0);
        for _ in 0..30 {
            field.tick_pointer(1.0 / 60.0);
            field.advance(1.0 / 60.0);
        }
        assert!(std::ptr::eq(before, field.particles().as_ptr()));
        assert_ne!(field.pointer(), (0.0, 0.0));
    }

    #[test]
    fn test_layers_shared_across_activations() {
        let a = DecorativeField::activate();
        let b = DecorativeField::activate();
        assert!(std::ptr::eq(a.layers(), b.layers()));
        assert_eq!(a.layers().len(), 6);
    }

    #[test]
    fn test_pointer_starts_at_rest() {
        let mut field = DecorativeField::activate();
        field.tick_pointer(0.5);
        assert_eq!(field.pointer(), (0.0, 0.0));
    }

    #[test]
    fn test_timeline_clock() {
        let mut field = DecorativeField::activate();
        field.advance(1.5);
        field.advance(-3.0);
        field.advance(0.5);
        assert_eq!(field.elapsed(), 2.0);
    }
}
