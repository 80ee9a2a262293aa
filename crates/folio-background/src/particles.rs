//! Floating light particles drifting left to right.

use folio_core::{LightParticle, Rgba};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::easing::sample_timed;

/// Number of particles per activation.
pub const PARTICLE_COUNT: usize = 35;

/// Colors a particle may take.
pub const PALETTE: [Rgba; 6] = [
    Rgba::new(244, 114, 182, 0.6), // pink
    Rgba::new(96, 165, 250, 0.5),  // blue
    Rgba::new(52, 211, 153, 0.5),  // green
    Rgba::new(167, 139, 250, 0.5), // purple
    Rgba::new(251, 191, 36, 0.4),  // amber
    Rgba::new(255, 255, 255, 0.6), // white
];

/// Particles start this far left of the viewport, as a fraction of its width.
const START_X: f32 = -0.05;
/// Distance travelled per crossing, as a fraction of viewport width.
const TRAVEL_X: f32 = 1.10;

/// Fade in over the first tenth, hold, fade out over the last tenth.
const FADE_TIMES: [f32; 4] = [0.0, 0.1, 0.9, 1.0];

/// Generate a fresh set of particles.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Vec<LightParticle> {
    (0..PARTICLE_COUNT)
        .map(|i| LightParticle {
            id: i as u32,
            size: rng.gen_range(2.0..6.0),
            y: rng.gen_range(0.0..100.0),
            duration: rng.gen_range(25.0..55.0),
            delay: rng.gen_range(0.0..20.0),
            opacity: rng.gen_range(0.2..0.6),
            color: *PALETTE.choose(rng).unwrap_or(&PALETTE[0]),
        })
        .collect()
}

/// Where a particle is at one instant, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    /// Centre, pixels from the left edge.
    pub x: f32,
    /// Centre, pixels from the top edge.
    pub y: f32,
    pub opacity: f32,
}

/// Position and opacity `elapsed` seconds into the animation, or `None`
/// while the particle is still waiting out its delay.
pub fn particle_frame(
    p: &LightParticle,
    elapsed: f32,
    vw: f32,
    vh: f32,
) -> Option<ParticleFrame> {
    let running = elapsed - p.delay;
    if running < 0.0 || p.duration <= 0.0 {
        return None;
    }
    let progress = running.rem_euclid(p.duration) / p.duration;
    let opacity = sample_timed(&[0.0, p.opacity, p.opacity, 0.0], &FADE_TIMES, progress);

    let half = p.size / 2.0;
    Some(ParticleFrame {
        x: (START_X + TRAVEL_X * progress) * vw + half,
        y: p.y / 100.0 * vh + half,
        opacity,
    })
}
