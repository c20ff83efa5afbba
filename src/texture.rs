//! Textures and sub-rectangle quads for sprite blitting.

use std::io::Read;

use cairo::{Format, ImageSurface};

use crate::error::GraphicsError;

/// An image held in a Cairo surface, ready to be blitted onto the canvas.
///
/// Decoding and pixel storage are Cairo's concern; this type only carries
/// the surface and its dimensions.
#[derive(Debug, Clone)]
pub struct Texture {
    surface: ImageSurface,
    width: i32,
    height: i32,
}

impl Texture {
    /// Decodes a PNG stream into a texture.
    ///
    /// # Errors
    /// Returns [`GraphicsError::Texture`] if the stream is not valid PNG data.
    pub fn from_png<R: Read>(reader: &mut R) -> Result<Self, GraphicsError> {
        let surface = ImageSurface::create_from_png(reader).map_err(GraphicsError::Texture)?;
        let width = surface.width();
        let height = surface.height();

        Ok(Self {
            surface,
            width,
            height,
        })
    }

    /// Creates a blank (fully transparent) texture, mainly useful in tests
    /// and for render-to-texture style compositing.
    ///
    /// # Errors
    /// Returns [`GraphicsError::Backend`] if Cairo cannot allocate the surface.
    pub fn blank(width: i32, height: i32) -> Result<Self, GraphicsError> {
        let surface = ImageSurface::create(Format::ARgb32, width, height)?;

        Ok(Self {
            surface,
            width,
            height,
        })
    }

    /// Texture width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Texture height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Width and height in pixels.
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// A quad covering the entire texture.
    pub fn full_quad(&self) -> Quad {
        Quad::new(0.0, 0.0, self.width as f64, self.height as f64)
    }

    pub(crate) fn surface(&self) -> &ImageSurface {
        &self.surface
    }
}

/// A named sub-rectangle of a texture, for sprite-sheet style partial blits.
///
/// Coordinates are in texture pixels. No bounds checking is performed
/// against any particular texture; regions outside the source read as
/// transparent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Left edge within the texture.
    pub x: f64,
    /// Top edge within the texture.
    pub y: f64,
    /// Region width.
    pub width: f64,
    /// Region height.
    pub height: f64,
}

impl Quad {
    /// Creates a quad from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_texture_reports_dimensions() {
        let texture = Texture::blank(32, 16).unwrap();
        assert_eq!(texture.dimensions(), (32, 16));
    }

    #[test]
    fn full_quad_covers_texture() {
        let texture = Texture::blank(64, 48).unwrap();
        assert_eq!(texture.full_quad(), Quad::new(0.0, 0.0, 64.0, 48.0));
    }

    #[test]
    fn from_png_decodes_cairo_output() {
        // Round-trip a surface through Cairo's PNG writer to get real PNG bytes.
        let surface = ImageSurface::create(Format::ARgb32, 8, 4).unwrap();
        let mut png = Vec::new();
        surface.write_to_png(&mut png).unwrap();

        let texture = Texture::from_png(&mut png.as_slice()).unwrap();
        assert_eq!(texture.dimensions(), (8, 4));
    }

    #[test]
    fn from_png_rejects_garbage() {
        let mut not_png: &[u8] = b"definitely not a png";
        assert!(matches!(
            Texture::from_png(&mut not_png),
            Err(GraphicsError::Texture(_))
        ));
    }
}
