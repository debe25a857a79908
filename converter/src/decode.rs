use std::path::Path;

use anyhow::Context;

/// A decoded image: flat RGBA8 pixel buffer plus its dimensions.
/// Four bytes per pixel, row-major, alpha last.
pub struct DecodedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl DecodedImage {
    /// Decode an image file into RGBA8. Paletted and grayscale sources
    /// are expanded so the four-channel layout always holds.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let img = image::open(path)
            .with_context(|| format!("could not decode {}", path.display()))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
        })
    }
}
