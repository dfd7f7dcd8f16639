//! Texture pixel data backing a submap.

use crate::error::Result;

/// Raw texture data loaded from PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// RGBA8 pixel data (4 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// Create a new texture from RGBA data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Copy out a rectangle of pixels.
    ///
    /// Panics if the rectangle reaches outside the texture.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> TextureData {
        assert!(
            x + width <= self.width && y + height <= self.height,
            "crop {}x{} at ({}, {}) outside {}x{} texture",
            width,
            height,
            x,
            y,
            self.width,
            self.height
        );

        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for row in y..y + height {
            let start = ((row * self.width + x) * 4) as usize;
            let end = start + (width * 4) as usize;
            pixels.extend_from_slice(&self.pixels[start..end]);
        }
        TextureData::new(width, height, pixels)
    }
}

/// Decode a sprite sheet from encoded image bytes into RGBA8.
pub fn load_texture_from_bytes(data: &[u8]) -> Result<TextureData> {
    let rgba = image::load_from_memory(data)?.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(TextureData::new(width, height, rgba.into_raw()))
}
