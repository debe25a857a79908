use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use imgsheet_core::grid::ColorGrid;
use imgsheet_core::layout::SheetLayout;
use rust_xlsxwriter::{Color, Format, Workbook};

// Excel hard limits; past these the writer rejects the cell anyway.
const MAX_COLS: u32 = 16_384;
const MAX_ROWS: u32 = 1_048_576;

/// Serialize a color grid into an .xlsx file, one solid-filled cell per pixel.
pub fn write_grid(grid: &ColorGrid, layout: &SheetLayout, path: &Path) -> anyhow::Result<()> {
    if layout.cols > MAX_COLS || layout.rows > MAX_ROWS {
        anyhow::bail!(
            "image {}x{} exceeds worksheet limits ({MAX_COLS} cols x {MAX_ROWS} rows)",
            layout.cols,
            layout.rows
        );
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("pixels")?;
    sheet.set_zoom(layout.zoom);
    sheet.set_screen_gridlines(layout.gridlines);

    for col in 0..layout.cols {
        sheet.set_column_width(col as u16, layout.column_width)?;
    }

    // One Format per distinct color, not per cell
    let mut fills: HashMap<u32, Format> = HashMap::new();

    for (i, row) in grid.rows().iter().enumerate() {
        let row_num = i as u32;
        sheet.set_row_height(row_num, layout.row_height)?;

        for (j, code) in row.iter().enumerate() {
            let rgb = code.rgb_u32();
            let fill = fills
                .entry(rgb)
                .or_insert_with(|| Format::new().set_background_color(Color::RGB(rgb)));
            sheet.write_blank(row_num, j as u16, fill)?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("could not save {}", path.display()))?;

    Ok(())
}
