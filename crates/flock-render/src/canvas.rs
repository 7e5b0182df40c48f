//! The braille dot canvas.

use flock_core::Vec2;
use flock_sim::{FlockRenderer, PredatorView};

/// First codepoint of the braille patterns block; the low byte is the dot mask.
const BRAILLE_BASE: u32 = 0x2800;

/// Dot bit for the sub-cell `(px, py)`, `px ∈ 0..2`, `py ∈ 0..4`.
///
/// Follows the Unicode braille numbering: dots 1-3 and 4-6 run down the left
/// and right columns, dots 7 and 8 sit on the bottom row.
#[inline]
pub const fn dot_bit(px: usize, py: usize) -> u8 {
    match (px, py) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

/// A `cols × rows` grid of braille characters covering a
/// `2·cols × 4·rows` unit domain, plus one optional overlay glyph per cell.
#[derive(Clone, Debug)]
pub struct BrailleCanvas {
    cols:     usize,
    rows:     usize,
    masks:    Vec<u8>,
    overlays: Vec<Option<char>>,
}

impl BrailleCanvas {
    /// Canvas for a `width × height` domain.  Partial cells at the right and
    /// bottom edges are dropped.
    pub fn new(width: f32, height: f32) -> Self {
        let cols = cells(width, 2.0);
        let rows = cells(height, 4.0);
        Self {
            cols,
            rows,
            masks:    vec![0; cols * rows],
            overlays: vec![None; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Character at `(col, row)`: the overlay glyph if one is set, otherwise
    /// the braille pattern.  `None` outside the grid.
    pub fn char_at(&self, col: usize, row: usize) -> Option<char> {
        let i = self.idx(col, row)?;
        Some(self.overlays[i].unwrap_or_else(|| braille(self.masks[i])))
    }

    /// Raw dot mask at `(col, row)`.
    pub fn mask_at(&self, col: usize, row: usize) -> Option<u8> {
        self.idx(col, row).map(|i| self.masks[i])
    }

    /// Each row as a string, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.rows).map(move |r| (0..self.cols).filter_map(|c| self.char_at(c, r)).collect())
    }

    /// The whole frame, rows joined with `\n`.
    pub fn frame(&self) -> String {
        self.rows().collect::<Vec<_>>().join("\n")
    }

    /// Overlay glyphs as `(col, row, glyph)`, row-major.
    pub fn overlays(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.overlays
            .iter()
            .enumerate()
            .filter_map(move |(i, o)| o.map(|ch| (i % self.cols, i / self.cols, ch)))
    }

    fn idx(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.cols && row < self.rows).then(|| row * self.cols + col)
    }

    /// Grid cell holding `p` when each cell is `cw × ch` units.
    fn cell_for(&self, p: Vec2, cw: f32, ch: f32) -> Option<(usize, usize)> {
        if !p.is_finite() || p.x < 0.0 || p.y < 0.0 {
            return None;
        }
        let (col, row) = ((p.x / cw) as usize, (p.y / ch) as usize);
        (col < self.cols && row < self.rows).then_some((col, row))
    }
}

impl FlockRenderer for BrailleCanvas {
    fn clear(&mut self) {
        self.masks.fill(0);
        self.overlays.fill(None);
    }

    fn plot(&mut self, points: &[Vec2]) {
        for &p in points {
            let Some((col, row)) = self.cell_for(p.floor(), 2.0, 4.0) else {
                continue;
            };
            let (px, py) = (p.x as usize % 2, p.y as usize % 4);
            self.masks[row * self.cols + col] |= dot_bit(px, py);
        }
    }

    fn render(&mut self, predators: &[PredatorView]) {
        for view in predators {
            if let Some((col, row)) = self.cell_for(view.position, 2.0, 4.0) {
                self.overlays[row * self.cols + col] = Some(view.heading.symbol());
            }
        }
    }
}

fn cells(extent: f32, per_cell: f32) -> usize {
    if extent.is_finite() && extent > 0.0 { (extent / per_cell) as usize } else { 0 }
}

fn braille(mask: u8) -> char {
    char::from_u32(BRAILLE_BASE + u32::from(mask)).unwrap_or(' ')
}
