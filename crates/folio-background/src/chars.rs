//! Character constants for the background.

/// Star glyphs from nearest to farthest.
pub const STAR_CHARS: &[char] = &['✦', '*', '·', '.'];

/// Depth thresholds matching [`STAR_CHARS`]; anything farther uses the last glyph.
pub const STAR_DEPTHS: &[f32] = &[0.75, 1.5, 4.0];

/// Particle glyphs from smallest to largest.
pub const PARTICLE_CHARS: &[char] = &['·', '•', '●'];

/// Glyph for a star `depth` units in front of the camera.
pub fn star_char(depth: f32) -> char {
    let idx = STAR_DEPTHS
        .iter()
        .position(|d| depth < *d)
        .unwrap_or(STAR_CHARS.len() - 1);
    STAR_CHARS[idx]
}

/// Glyph for a particle of `size` pixels (2-6).
pub fn particle_char(size: f32) -> char {
    if size < 3.0 {
        PARTICLE_CHARS[0]
    } else if size < 4.5 {
        PARTICLE_CHARS[1]
    } else {
        PARTICLE_CHARS[2]
    }
}
