//! Easing curves and keyframe sampling for the looping timelines.

/// A CSS-style cubic Bézier timing function through (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// `cubic-bezier(0.42, 0, 0.58, 1)`.
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `x` in 0.0-1.0.
    pub fn apply(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(x);
        bezier(t, self.y1, self.y2)
    }

    /// Find the curve parameter whose x coordinate is `x`.
    fn solve_t(&self, x: f32) -> f32 {
        // Newton first, it converges in a few steps away from flat regions.
        let mut t = x;
        for _ in 0..8 {
            let err = bezier(t, self.x1, self.x2) - x;
            if err.abs() < 1e-6 {
                return t;
            }
            let slope = bezier_slope(t, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        // Bisection fallback; x(t) is monotonic for x1, x2 in 0..=1.
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..32 {
            let v = bezier(t, self.x1, self.x2);
            if (v - x).abs() < 1e-6 {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }
}

/// One coordinate of a Bézier with end points 0 and 1.
fn bezier(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn bezier_slope(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Sample evenly spaced keyframes at `progress` (0.0-1.0), easing each
/// segment independently.
pub fn sample_even(values: &[f32], progress: f32, ease: &CubicBezier) -> f32 {
    match values {
        [] => 0.0,
        [only] => *only,
        _ => {
            let segments = (values.len() - 1) as f32;
            let scaled = progress.clamp(0.0, 1.0) * segments;
            let index = (scaled.floor() as usize).min(values.len() - 2);
            let local = scaled - index as f32;
            lerp(values[index], values[index + 1], ease.apply(local))
        }
    }
}

/// Sample keyframes placed at explicit `times` (ascending, 0.0-1.0) with
/// linear interpolation.
pub fn sample_timed(values: &[f32], times: &[f32], progress: f32) -> f32 {
    debug_assert_eq!(values.len(), times.len());
    let Some(&first) = values.first() else {
        return 0.0;
    };
    if progress <= times[0] {
        return first;
    }
    for i in 1..values.len() {
        if progress <= times[i] {
            let span = times[i] - times[i - 1];
            let local = if span > 0.0 {
                ((progress - times[i - 1]) / span).clamp(0.0, 1.0)
            } else {
                1.0
            };
            return lerp(values[i - 1], values[i], local);
        }
    }
    values[values.len() - 1]
}
