/// Fill color for one spreadsheet cell: one source pixel, alpha forced opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorCode {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorCode {
    /// Encode one pixel's channel values. The source alpha is never read.
    pub fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 8-character ARGB hex code: literal `ff` opacity plus three
    /// zero-padded lowercase channels.
    pub fn argb(&self) -> String {
        format!("ff{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Packed 0xRRGGBB value for writers that take RGB without alpha.
    pub fn rgb_u32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}
