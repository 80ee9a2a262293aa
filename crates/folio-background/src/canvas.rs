//! Off-screen cell grid the background is painted into.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::color::BACKDROP;

/// Width of a terminal cell in viewport pixels.
pub const CELL_WIDTH_PX: f32 = 8.0;
/// Height of a terminal cell in viewport pixels.
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// A single painted cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub symbol: char,
    pub fg: (u8, u8, u8),
    pub bg: (u8, u8, u8),
    /// Depth of the star drawn here, if any.
    pub star_depth: f32,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: ' ',
            fg: BACKDROP,
            bg: BACKDROP,
            star_depth: f32::INFINITY,
        }
    }
}

/// Grid of cells, row major.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    /// A canvas filled with the backdrop.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Viewport size in pixels.
    pub fn viewport_px(&self) -> (f32, f32) {
        (
            self.width as f32 * CELL_WIDTH_PX,
            self.height as f32 * CELL_HEIGHT_PX,
        )
    }

    /// Pixel coordinates of the centre of cell `(x, y)`.
    pub fn cell_centre_px(x: u16, y: u16) -> (f32, f32) {
        (
            (x as f32 + 0.5) * CELL_WIDTH_PX,
            (y as f32 + 0.5) * CELL_HEIGHT_PX,
        )
    }

    /// Cell containing pixel `(px, py)`, if it is on the canvas.
    pub fn cell_at_px(&self, px: f32, py: f32) -> Option<(u16, u16)> {
        if px < 0.0 || py < 0.0 {
            return None;
        }
        let x = (px / CELL_WIDTH_PX) as u16;
        let y = (py / CELL_HEIGHT_PX) as u16;
        (x < self.width && y < self.height).then_some((x, y))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// All cells with their coordinates.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = (u16, u16, &mut Cell)> {
        let width = self.width.max(1) as usize;
        self.cells
            .iter_mut()
            .enumerate()
            .map(move |(i, cell)| ((i % width) as u16, (i / width) as u16, cell))
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Convert to styled lines for a `Paragraph`.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        let width = self.width.max(1) as usize;
        self.cells
            .chunks(width)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| {
                        let (fr, fg, fb) = cell.fg;
                        let (br, bg, bb) = cell.bg;
                        Span::styled(
                            cell.symbol.to_string(),
                            Style::new()
                                .fg(Color::Rgb(fr, fg, fb))
                                .bg(Color::Rgb(br, bg, bb)),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}
