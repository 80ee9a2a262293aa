//! Damped spring smoothing for the pointer glow.

/// Integration sub-step in seconds.
const SUBSTEP: f32 = 1.0 / 240.0;
/// Longest frame the spring will integrate; longer gaps are clamped.
const MAX_FRAME_DT: f32 = 0.1;
/// Distance from the target, in pixels, considered settled.
const REST_DELTA: f32 = 0.5;
/// Speed, in pixels per second, considered settled.
const REST_SPEED: f32 = 2.0;

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// The glow's pointer follower.
    pub const POINTER: SpringConfig = SpringConfig {
        stiffness: 150.0,
        damping: 25.0,
        mass: 0.5,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::POINTER
    }
}

/// A one-dimensional spring pulling `position` toward `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
    config: SpringConfig,
}

impl Spring {
    /// A spring at rest at `value`.
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
            config,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            return;
        }

        let mut remaining = dt.clamp(0.0, MAX_FRAME_DT);
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let force = -stiffness * (self.position - self.target) - damping * self.velocity;
            // Semi-implicit Euler: velocity first, then position with the new velocity.
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
    }
}

/// Smooths raw pointer coordinates with one spring per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerFilter {
    x: Spring,
    y: Spring,
}

impl Default for PointerFilter {
    fn default() -> Self {
        Self::new(SpringConfig::POINTER)
    }
}

impl PointerFilter {
    /// A filter resting at the origin.
    pub fn new(config: SpringConfig) -> Self {
        Self {
            x: Spring::new(0.0, config),
            y: Spring::new(0.0, config),
        }
    }

    /// Record a raw pointer position.
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.x.target = x;
        self.y.target = y;
    }

    /// Place the filter at a position, settled, with no travel toward it.
    pub fn jump_to(&mut self, x: f32, y: f32) {
        self.x = Spring::new(x, self.x.config);
        self.y = Spring::new(y, self.y.config);
    }

    /// Advance both axes by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.x.step(dt);
        self.y.step(dt);
    }

    /// Current smoothed position.
    pub fn value(&self) -> (f32, f32) {
        (self.x.position, self.y.position)
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }
}
