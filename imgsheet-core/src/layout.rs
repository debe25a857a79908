use crate::grid::ColorGrid;

/// Row height in points. Together with [`COLUMN_WIDTH`] this makes one
/// cell approximate one square pixel on screen.
pub const ROW_HEIGHT: f64 = 4.0;
/// Column width in character units.
pub const COLUMN_WIDTH: f64 = 1.0;
/// Sheet view zoom percentage.
pub const ZOOM_PERCENT: u16 = 50;
/// Gridlines would cut through the pixel fills, so they stay off.
pub const SHOW_GRIDLINES: bool = false;

/// Sheet geometry handed to the workbook writer. Applied uniformly to
/// every row and column; nothing here depends on pixel content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetLayout {
    pub rows: u32,
    pub cols: u32,
    pub row_height: f64,
    pub column_width: f64,
    pub zoom: u16,
    pub gridlines: bool,
}

impl SheetLayout {
    /// Derive the layout from grid dimensions.
    pub fn for_grid(grid: &ColorGrid) -> Self {
        Self {
            rows: grid.height(),
            cols: grid.width(),
            row_height: ROW_HEIGHT,
            column_width: COLUMN_WIDTH,
            zoom: ZOOM_PERCENT,
            gridlines: SHOW_GRIDLINES,
        }
    }
}
