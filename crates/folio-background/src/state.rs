//! Background animation state management.

use folio_core::{AnimationSpeed, BackgroundStyle, Rgba};
use ratatui::{Frame, widgets::Paragraph};

use crate::canvas::Canvas;
use crate::chars::{particle_char, star_char};
use crate::color::{GLOW, bottom_fade, fade_to_backdrop, glow_alpha, over};
use crate::field::DecorativeField;
use crate::layers::{blob_alpha, blob_frame};
use crate::particles::particle_frame;
use crate::starfield::{Starfield, project};

/// Background animation state.
///
/// Owns the active decorative field and starfield. Each is activated when the
/// selected style first needs it and dropped as soon as it no longer does;
/// coming back to it later starts a fresh activation.
#[derive(Debug)]
pub struct BackgroundState {
    /// Gradient blobs, particles and pointer filter.
    field: Option<DecorativeField>,
    /// Rotating starfields.
    stars: Option<Starfield>,
    /// Draw the pointer glow.
    pointer_glow: bool,
    /// Color of the pointer glow at its centre.
    glow_color: Rgba,
    /// Whether any pointer event reached the current field.
    pointer_seen: bool,
    /// Last update time in milliseconds.
    last_update_ms: u64,
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundState {
    /// Create a new background state with nothing activated yet.
    pub fn new() -> Self {
        Self {
            field: None,
            stars: None,
            pointer_glow: true,
            glow_color: GLOW,
            pointer_seen: false,
            last_update_ms: 0,
        }
    }

    /// Enable or disable the glow following the pointer.
    pub fn with_pointer_glow(mut self, enabled: bool) -> Self {
        self.pointer_glow = enabled;
        self
    }

    /// Use `color` for the pointer glow.
    pub fn with_glow_color(mut self, color: Rgba) -> Self {
        self.glow_color = color;
        self
    }

    /// The active decorative field, if the style shows one.
    pub fn field(&self) -> Option<&DecorativeField> {
        self.field.as_ref()
    }

    /// The active starfield, if the style shows one.
    pub fn stars(&self) -> Option<&Starfield> {
        self.stars.as_ref()
    }

    /// Feed a pointer move at terminal cell `(x, y)`. Ignored while no field
    /// is active.
    ///
    /// The first move of an activation places the glow under the pointer;
    /// later moves are smoothed.
    pub fn pointer_moved(&mut self, x: u16, y: u16) {
        if let Some(field) = self.field.as_mut() {
            let (px, py) = Canvas::cell_centre_px(x, y);
            if self.pointer_seen {
                field.pointer_moved(px, py);
            } else {
                field.place_pointer(px, py);
                self.pointer_seen = true;
            }
        }
    }

    /// Activate or drop layers to match `style`.
    pub fn sync(&mut self, style: BackgroundStyle) {
        if style.shows_particles() {
            self.field.get_or_insert_with(DecorativeField::activate);
        } else if self.field.take().is_some() {
            self.pointer_seen = false;
            tracing::debug!("decorative field deactivated");
        }

        if style.shows_stars() {
            self.stars.get_or_insert_with(Starfield::activate);
        } else if self.stars.take().is_some() {
            tracing::debug!("starfield deactivated");
        }
    }

    /// Advance every active layer to `elapsed_ms` of wall-clock time.
    pub fn update(&mut self, elapsed_ms: u64, speed: AnimationSpeed) {
        let delta_ms = elapsed_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = elapsed_ms;

        let dt = delta_ms as f32 / 1000.0;
        let animation_dt = dt * speed.time_scale();

        if let Some(field) = self.field.as_mut() {
            field.tick_pointer(dt);
            field.advance(animation_dt);
        }
        if let Some(stars) = self.stars.as_mut() {
            stars.advance(animation_dt);
        }
    }

    /// Render the background to the frame.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        style: BackgroundStyle,
        elapsed_ms: u64,
        speed: AnimationSpeed,
    ) {
        let area = frame.area();
        self.sync(style);
        self.update(elapsed_ms, speed);

        let lines = self.paint(area.width, area.height).into_lines();
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Paint the current state of every active layer.
    pub fn paint(&self, width: u16, height: u16) -> Canvas {
        let mut canvas = Canvas::new(width, height);

        if let Some(field) = &self.field {
            self.paint_blobs(&mut canvas, field);
            paint_particles(&mut canvas, field);
        }
        if let Some(stars) = &self.stars {
            paint_stars(&mut canvas, stars);
        }

        let rows = height.max(1) as f32;
        for (_, y, cell) in canvas.cells_mut() {
            let fade = bottom_fade((y as f32 + 0.5) / rows);
            if fade > 0.0 {
                cell.bg = fade_to_backdrop(cell.bg, fade);
                cell.fg = fade_to_backdrop(cell.fg, fade);
            }
        }

        canvas
    }

    /// Gradient blobs and the pointer glow, painted into cell backgrounds.
    fn paint_blobs(&self, canvas: &mut Canvas, field: &DecorativeField) {
        let (vw, vh) = canvas.viewport_px();
        let frames: Vec<_> = field
            .layers()
            .iter()
            .map(|layer| (layer, blob_frame(layer, field.elapsed())))
            .collect();
        let glow = (self.pointer_glow && self.pointer_seen).then(|| field.pointer());

        for (x, y, cell) in canvas.cells_mut() {
            let (px, py) = Canvas::cell_centre_px(x, y);
            let mut bg = cell.bg;
            for (layer, blob) in &frames {
                let alpha = blob_alpha(layer, blob, px, py, vw, vh);
                if alpha > 0.0 {
                    bg = over(bg, layer.color, alpha);
                }
            }
            if let Some((gx, gy)) = glow {
                let dist = ((px - gx).powi(2) + (py - gy).powi(2)).sqrt();
                let alpha = glow_alpha(dist);
                if alpha > 0.0 {
                    bg = over(bg, self.glow_color, alpha);
                }
            }
            cell.bg = bg;
            cell.fg = bg;
        }
    }
}

/// Light particles, drawn as glyphs over the blobs.
fn paint_particles(canvas: &mut Canvas, field: &DecorativeField) {
    let (vw, vh) = canvas.viewport_px();
    for particle in field.particles() {
        let Some(p) = particle_frame(particle, field.elapsed(), vw, vh) else {
            continue;
        };
        if p.opacity <= 0.0 {
            continue;
        }
        let Some((x, y)) = canvas.cell_at_px(p.x, p.y) else {
            continue;
        };
        if let Some(cell) = canvas.get_mut(x, y) {
            cell.symbol = particle_char(particle.size);
            cell.fg = over(cell.bg, particle.color, p.opacity);
        }
    }
}

/// Both starfields, nearest star winning each cell.
fn paint_stars(canvas: &mut Canvas, stars: &Starfield) {
    let (width, height) = (canvas.width() as f32, canvas.height() as f32);
    let (vw, vh) = canvas.viewport_px();
    if vw <= 0.0 || vh <= 0.0 {
        return;
    }
    let aspect = vw / vh;

    for layer in stars.layers() {
        let color = layer.color();
        for point in layer.world_points() {
            let Some(star) = project(point, aspect) else {
                continue;
            };
            let x = (((star.ndc_x + 1.0) / 2.0 * width) as u16).min(canvas.width() - 1);
            let y = (((1.0 - star.ndc_y) / 2.0 * height) as u16).min(canvas.height() - 1);
            let Some(cell) = canvas.get_mut(x, y) else {
                continue;
            };
            if star.depth >= cell.star_depth {
                continue;
            }
            cell.star_depth = star.depth;
            cell.symbol = star_char(star.depth);
            cell.fg = over(cell.bg, color, (1.0 / star.depth).clamp(0.15, 1.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BACKDROP;

    #[test]
    fn test_sync_activates_per_style() {
        let mut state = BackgroundState::new();
        state.sync(BackgroundStyle::Space);
        assert!(state.field().is_some());
        assert!(state.stars().is_some());

        state.sync(BackgroundStyle::Particles);
        assert!(state.field().is_some());
        assert!(state.stars().is_none());

        state.sync(BackgroundStyle::None);
        assert!(state.field().is_none());
        assert!(state.stars().is_none());
    }

    #[test]
    fn test_resync_keeps_activation() {
        let mut state = BackgroundState::new();
        state.sync(BackgroundStyle::Particles);
        let first = state.field().map(|f| f.particles().as_ptr());
        state.sync(BackgroundStyle::Space);
        let second = state.field().map(|f| f.particles().as_ptr());
        assert_eq!(first, second);
    }

    #[test]
    fn test_remount_regenerates() {
        let mut state = BackgroundState::new();
        state.sync(BackgroundStyle::Particles);
        state.update(4_000, AnimationSpeed::Medium);
        state.sync(BackgroundStyle::None);
        state.sync(BackgroundStyle::Particles);
        // A fresh activation starts its timeline from zero.
        assert_eq!(state.field().map(|f| f.elapsed()), Some(0.0));
    }

    #[test]
    fn test_update_scales_animation_time() {
        let mut state = BackgroundState::new();
        state.sync(BackgroundStyle::Space);
        state.update(1_000, AnimationSpeed::Fast);
        assert_eq!(state.field().map(|f| f.elapsed()), Some(2.0));
        let y = state.stars().map(|s| s.sparse.rotation().y).unwrap_or_default();
        assert!((y - 2.0 / 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_pointer_ignored_without_field() {
        let mut state = BackgroundState::new();
        state.sync(BackgroundStyle::Starfield);
        state.pointer_moved(10, 5);
        assert!(!state.pointer_seen);
    }

    #[test]
    fn test_first_pointer_move_places_glow() {
        let mut state = BackgroundState::new();
        state.sync(BackgroundStyle::Particles);
        state.pointer_moved(40, 10);
        let at = Canvas::cell_centre_px(40, 10);
        assert_eq!(state.field().map(|f| f.pointer()), Some(at));

        // Later moves glide from there rather than from the origin.
        state.pointer_moved(41, 10);
        state.update(16, AnimationSpeed::Medium);
        let (x, y) = state.field().map(|f| f.pointer()).unwrap_or_default();
        assert!(x >= at.0 && x <= Canvas::cell_centre_px(41, 10).0);
        assert_eq!(y, at.1);
    }

    #[test]
    fn test_glow_color_is_configurable() {
        let paint_glow = |state: BackgroundState| {
            let mut state = state;
            state.sync(BackgroundStyle::Particles);
            state.pointer_moved(10, 4);
            state.paint(20, 10).get(10, 4).map(|c| c.bg)
        };
        let pink = paint_glow(BackgroundState::new());
        let cyan =
            paint_glow(BackgroundState::new().with_glow_color(Rgba::new(34, 211, 238, 0.15)));
        let hidden = paint_glow(BackgroundState::new().with_pointer_glow(false));
        assert_ne!(pink, cyan);
        assert_ne!(pink, hidden);
    }

    #[test]
    fn test_plain_backdrop() {
        let mut state = BackgroundState::new();
        state.sync(BackgroundStyle::None);
        let canvas = state.paint(20, 10);
        assert_eq!(canvas.get(0, 0).map(|c| c.bg), Some(BACKDROP));
        assert_eq!(canvas.get(19, 9).map(|c| c.symbol), Some(' '));
    }

    #[test]
    fn test_blobs_tint_the_backdrop() {
        let mut state = BackgroundState::new();
        state.sync(BackgroundStyle::Particles);
        let canvas = state.paint(80, 24);
        // The top half is outside the bottom fade and covered by blobs.
        let tinted = (0..80).any(|x| canvas.get(x, 4).map(|c| c.bg) != Some(BACKDROP));
        assert!(tinted);
    }

    #[test]
    fn test_stars_are_drawn() {
        let mut state = BackgroundState::new();
        state.sync(BackgroundStyle::Starfield);
        let canvas = state.paint(80, 24);
        let stars = (0..24)
            .flat_map(|y| (0..80).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.get(x, y).is_some_and(|c| c.symbol != ' '))
            .count();
        assert!(stars > 0);
    }
}
