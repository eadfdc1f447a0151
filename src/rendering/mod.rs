use macroquad::prelude::*;

use crate::application::Snapshot;
use crate::domain::{Dimensions, Position};

/// Character-cell layout of the viewport.
///
/// Row 0 holds the stats line; grid row `y` sits on row `1 + y`. Within a
/// row, `margin` blank cells pad both sides and `gap` blank cells separate
/// neighboring grid cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visual {
    pub margin: usize,
    pub gap: usize,
    /// Side of one character cell in pixels
    pub cell_px: f32,
}

impl Default for Visual {
    fn default() -> Self {
        Self {
            margin: 1,
            gap: 1,
            cell_px: 12.0,
        }
    }
}

impl Visual {
    /// (column, row) of the character cell holding grid cell `pos`
    pub const fn cell_origin(&self, pos: Position) -> (usize, usize) {
        (self.margin + pos.x * (self.gap + 1), 1 + pos.y)
    }

    /// Viewport size in character cells
    pub const fn extent(&self, dims: Dimensions) -> (usize, usize) {
        let columns = 2 * self.margin + dims.width() + (dims.width() - 1) * self.gap;
        (columns, 1 + dims.height())
    }

    /// Window size in pixels
    pub fn window_size(&self, dims: Dimensions) -> (f32, f32) {
        let (columns, rows) = self.extent(dims);
        (columns as f32 * self.cell_px, rows as f32 * self.cell_px)
    }

    fn to_screen(&self, (column, row): (usize, usize)) -> (f32, f32) {
        (column as f32 * self.cell_px, row as f32 * self.cell_px)
    }
}

/// Draw stats line, live cells and cursor
pub fn draw_world(snapshot: &Snapshot<'_>, stats_line: &str, visual: &Visual) {
    let alive_color = Color::from_rgba(0, 255, 150, 255); // Bright green
    let cursor_color = Color::from_rgba(255, 255, 255, 220);

    draw_text(stats_line, 2.0, visual.cell_px * 0.85, visual.cell_px, WHITE);

    for (pos, cell) in snapshot.grid.iter_cells() {
        if !cell.is_alive() {
            continue;
        }
        let (x, y) = visual.to_screen(visual.cell_origin(pos));
        draw_rectangle(x, y, visual.cell_px, visual.cell_px, alive_color);
    }

    let (x, y) = visual.to_screen(visual.cell_origin(snapshot.cursor));
    draw_rectangle_lines(x, y, visual.cell_px, visual.cell_px, 2.0, cursor_color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_origin_spacing() {
        let visual = Visual { margin: 1, gap: 1, cell_px: 10.0 };
        assert_eq!(visual.cell_origin(Position::ORIGIN), (1, 1));
        assert_eq!(visual.cell_origin(Position::new(3, 4)), (9, 4));
    }

    #[test]
    fn test_no_margin_no_gap_is_dense() {
        let visual = Visual { margin: 0, gap: 0, cell_px: 10.0 };
        assert_eq!(visual.cell_origin(Position::new(2, 5)), (5, 3));
    }

    #[test]
    fn test_extent_fits_last_cell() {
        let visual = Visual::default();
        let dims = Dimensions::new(32, 32).unwrap();
        let (columns, rows) = visual.extent(dims);
        let (last_col, last_row) = visual.cell_origin(Position::new(31, 31));
        assert_eq!(columns, last_col + 1 + visual.margin);
        assert_eq!(rows, last_row + 1);
        assert_eq!(visual.window_size(dims), (columns as f32 * 12.0, rows as f32 * 12.0));
    }
}
