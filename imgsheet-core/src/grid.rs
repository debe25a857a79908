use crate::color::ColorCode;

/// RGBA8 layout: four consecutive bytes per pixel, alpha last.
pub const BYTES_PER_PIXEL: usize = 4;

/// Row-major grid of cell fill colors mirroring the source image:
/// cell (i, j) holds the color of the pixel at buffer offset
/// `(i * width + j) * 4`.
#[derive(Clone, Debug)]
pub struct ColorGrid {
    width: u32,
    height: u32,
    rows: Vec<Vec<ColorCode>>,
}

impl ColorGrid {
    /// Build the grid from a flat RGBA8 buffer. The buffer length must
    /// equal `width * height * 4`; a decoder that reports mismatched
    /// dimensions is rejected here rather than producing a malformed grid.
    pub fn from_rgba(buffer: &[u8], width: u32, height: u32) -> anyhow::Result<Self> {
        if width == 0 || height == 0 {
            anyhow::bail!("image dimensions must be positive, got {width}x{height}");
        }
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if buffer.len() != expected {
            anyhow::bail!(
                "pixel buffer length {} does not match {width}x{height} rgba dimensions (expected {expected})",
                buffer.len()
            );
        }

        let codes: Vec<ColorCode> = buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| ColorCode::from_channels(px[0], px[1], px[2]))
            .collect();

        // chunks() leaves a short final row as-is instead of padding;
        // unreachable through the length check above.
        let rows = codes
            .chunks(width as usize)
            .map(<[ColorCode]>::to_vec)
            .collect();

        Ok(Self { width, height, rows })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Rows in image order, top to bottom.
    pub fn rows(&self) -> &[Vec<ColorCode>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pixel_image() {
        let grid = ColorGrid::from_rgba(&[10, 160, 255, 0], 1, 1).unwrap();
        assert_eq!(grid.rows().len(), 1);
        assert_eq!(grid.rows()[0].len(), 1);
        assert_eq!(grid.rows()[0][0].argb(), "ff0aa0ff");
    }

    #[test]
    fn two_by_one_image() {
        let buffer = [0, 0, 0, 255, 255, 255, 255, 255];
        let grid = ColorGrid::from_rgba(&buffer, 2, 1).unwrap();
        let codes: Vec<String> = grid.rows()[0].iter().map(ColorCode::argb).collect();
        assert_eq!(codes, ["ff000000", "ffffffff"]);
    }

    #[test]
    fn chunking_is_row_major() {
        // P00, P01, P10, P11 in buffer order
        let buffer = [
            1, 0, 0, 255, // P00
            2, 0, 0, 255, // P01
            3, 0, 0, 255, // P10
            4, 0, 0, 255, // P11
        ];
        let grid = ColorGrid::from_rgba(&buffer, 2, 2).unwrap();
        assert_eq!(grid.rows()[0][0].r, 1);
        assert_eq!(grid.rows()[0][1].r, 2);
        assert_eq!(grid.rows()[1][0].r, 3);
        assert_eq!(grid.rows()[1][1].r, 4);
    }

    #[test]
    fn shape_matches_dimensions() {
        let buffer = vec![7u8; 3 * 2 * BYTES_PER_PIXEL];
        let grid = ColorGrid::from_rgba(&buffer, 3, 2).unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.rows().len(), 2);
        assert!(grid.rows().iter().all(|row| row.len() == 3));
    }

    #[test]
    fn alpha_never_affects_the_cell() {
        let opaque = ColorGrid::from_rgba(&[9, 8, 7, 255], 1, 1).unwrap();
        let transparent = ColorGrid::from_rgba(&[9, 8, 7, 0], 1, 1).unwrap();
        assert_eq!(opaque.rows()[0][0], transparent.rows()[0][0]);
    }

    #[test]
    fn mismatched_buffer_length_is_rejected() {
        let err = ColorGrid::from_rgba(&[0u8; 12], 2, 2).unwrap_err();
        assert!(err.to_string().contains("does not match 2x2"));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(ColorGrid::from_rgba(&[], 0, 1).is_err());
        assert!(ColorGrid::from_rgba(&[], 1, 0).is_err());
    }
}
