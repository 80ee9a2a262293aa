//! Core types shared across the folio crates.
//!
//! Holds the value types produced by the decorative background generators,
//! the user-selectable styles, and the read-only content records rendered by
//! the section panels.

mod color;
mod content;
mod field;
mod style;

pub use color::{ParseColorError, Rgba};
pub use content::{
    BlogPost, Description, ExperienceEntry, Portfolio, ProjectEntry, SkillEntry, group_skills,
};
pub use field::{GradientLayer, LightParticle};
pub use style::{AnimationSpeed, BackgroundStyle, Section};
