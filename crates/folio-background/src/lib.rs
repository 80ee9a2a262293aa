//! Decorative space background for folio.
//!
//! Generates the parameters of the portfolio's animated backdrop (six
//! drifting gradient blobs, a fresh set of floating light particles, two
//! rotating starfields and a pointer-following glow) and paints them into
//! terminal cells.

mod canvas;
mod chars;
mod color;
mod easing;
mod field;
mod layers;
mod particles;
mod spring;
mod starfield;
mod state;

pub use canvas::{CELL_HEIGHT_PX, CELL_WIDTH_PX, Canvas, Cell};
pub use color::BACKDROP;
pub use easing::{CubicBezier, EASE_IN_OUT};
pub use field::DecorativeField;
pub use layers::{BlobFrame, blob_frame, cycle_secs, gradient_layers};
pub use particles::{PALETTE, PARTICLE_COUNT, ParticleFrame, particle_frame};
pub use spring::{PointerFilter, Spring, SpringConfig};
pub use starfield::{
    ProjectedStar, Rotation, SpinRate, StarBuffer, StarLayer, Starfield, project,
};
pub use state::BackgroundState;
