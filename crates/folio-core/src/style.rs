//! User-selectable styles and page sections.

use serde::{Deserialize, Serialize};

/// Which decorative layers are drawn behind the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    /// Gradient blobs, light particles and both starfields.
    #[default]
    Space,
    /// Gradient blobs and light particles only.
    Particles,
    /// Starfields only.
    Starfield,
    /// Plain dark backdrop.
    None,
}

impl BackgroundStyle {
    /// Cycle to the next style.
    pub fn next(self) -> Self {
        match self {
            Self::Space => Self::Particles,
            Self::Particles => Self::Starfield,
            Self::Starfield => Self::None,
            Self::None => Self::Space,
        }
    }

    /// Display name of the style.
    pub fn name(self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Particles => "particles",
            Self::Starfield => "starfield",
            Self::None => "none",
        }
    }

    /// Whether the gradient blobs and light particles are drawn.
    pub fn shows_particles(self) -> bool {
        matches!(self, Self::Space | Self::Particles)
    }

    /// Whether the rotating starfields are drawn.
    pub fn shows_stars(self) -> bool {
        matches!(self, Self::Space | Self::Starfield)
    }
}

/// Global animation speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            Self::Slow => Self::Medium,
            Self::Medium => Self::Fast,
            Self::Fast => Self::Slow,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
        }
    }

    /// Multiplier applied to animation time.
    pub fn time_scale(self) -> f32 {
        match self {
            Self::Slow => 0.5,
            Self::Medium => 1.0,
            Self::Fast => 2.0,
        }
    }
}

/// A page section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Blog,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 5] = [
        Section::Blog,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Blog => "Blog",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    /// Position in [`Section::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// The following section, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The preceding section, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
