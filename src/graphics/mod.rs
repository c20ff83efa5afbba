//! The drawing canvas and its state.
//!
//! [`Graphics`] is the explicit context that replaces the process-wide
//! drawing state of classic console graphics libraries: one fixed 640×480
//! surface, a current draw color, a background color, a transform stack,
//! render settings, and a registry of fonts. All drawing goes through it,
//! in call order, from a single thread.

mod blit;
pub mod params;
mod primitives;
mod text;
mod transform;

pub use params::DrawParams;

use std::io::Write;

use cairo::{Antialias, Context, Format, ImageSurface, Matrix, Operator};
use log::debug;

use crate::color::{self, Color};
use crate::config::{AspectRatio, Config};
use crate::error::GraphicsError;
use crate::font::{Font, FontId, FontRegistry};

/// Output width in pixels. Fixed; the canvas does not resize.
pub const WIDTH: i32 = 640;
/// Output height in pixels. Fixed; the canvas does not resize.
pub const HEIGHT: i32 = 480;

/// Default line width and point size established by [`Graphics::reset`].
const DEFAULT_STROKE: u8 = 6;

/// Render settings mirroring the backend's global switches.
///
/// Deflicker has no Cairo counterpart (it is an interlace filter on the
/// original hardware) and is tracked here purely as state so the get/set
/// surface stays complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RenderSettings {
    antialias: bool,
    deflicker: bool,
    line_width: u8,
    point_size: u8,
}

impl RenderSettings {
    fn defaults() -> Self {
        Self {
            antialias: true,
            deflicker: true,
            line_width: DEFAULT_STROKE,
            point_size: DEFAULT_STROKE,
        }
    }
}

/// A fixed-resolution 2D canvas with a game-framework-style drawing API.
///
/// Create one at startup with [`Graphics::new`]; dropping it releases the
/// surface. Drawing operations are fire-and-forget: invalid coordinates are
/// not validated here, Cairo clips whatever falls outside the surface.
pub struct Graphics {
    surface: ImageSurface,
    ctx: Context,

    color: Color,
    background_color: Color,
    transforms: Vec<Matrix>,
    settings: RenderSettings,

    fonts: FontRegistry,
    current_font: FontId,

    widescreen: bool,
}

impl Graphics {
    /// Initializes the canvas: creates the backing surface, reads the
    /// display aspect ratio from `config`, registers the default font, and
    /// applies [`reset`](Self::reset) defaults.
    ///
    /// # Errors
    /// Returns [`GraphicsError::Backend`] if Cairo cannot allocate the
    /// surface or drawing context.
    pub fn new(config: &Config) -> Result<Self, GraphicsError> {
        let surface = ImageSurface::create(Format::ARgb32, WIDTH, HEIGHT)?;
        let ctx = Context::new(&surface)?;

        let widescreen = config.display.aspect_ratio == AspectRatio::Widescreen;
        debug!(
            "Canvas initialized: {}x{}, widescreen={}",
            WIDTH, HEIGHT, widescreen
        );

        let mut fonts = FontRegistry::default();
        let default_font = fonts.add(Font::default());

        let mut graphics = Self {
            surface,
            ctx,
            color: color::WHITE,
            background_color: color::BLACK,
            transforms: Vec::new(),
            settings: RenderSettings::defaults(),
            fonts,
            current_font: default_font,
            widescreen,
        };
        graphics.reset();

        Ok(graphics)
    }

    /// Restores default draw settings: opaque white draw color, opaque
    /// black background, identity transform with an empty stack,
    /// anti-aliasing and deflicker enabled, line width and point size 6.
    pub fn reset(&mut self) {
        self.color = color::WHITE;
        self.background_color = color::BLACK;

        self.transforms.clear();
        self.origin();

        self.set_anti_aliasing(true);
        self.set_deflicker(true);
        self.set_line_width(DEFAULT_STROKE);
        self.set_point_size(DEFAULT_STROKE);
    }

    // Misc. querying functions

    /// Output width and height in pixels, always (640, 480).
    pub fn dimensions(&self) -> (i32, i32) {
        (WIDTH, HEIGHT)
    }

    /// Output width in pixels.
    pub fn width(&self) -> i32 {
        WIDTH
    }

    /// Output height in pixels.
    pub fn height(&self) -> i32 {
        HEIGHT
    }

    /// Whether the display is 16:9. Fixed at construction from the display
    /// configuration; never changes afterwards.
    pub fn is_widescreen(&self) -> bool {
        self.widescreen
    }

    // Set and get drawing colors

    /// Current draw color applied to primitives, text, and blit alpha.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the current draw color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Background color used by [`clear`](Self::clear) when no color is given.
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Sets the background color. Tracked locally; nothing is drawn until
    /// the next clear.
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    /// Fills the whole screen with `color`, or with the background color
    /// when `None`. Ignores the current transform.
    pub fn clear(&mut self, color: Option<Color>) {
        let (r, g, b, a) = color.unwrap_or(self.background_color).to_cairo();

        let _ = self.ctx.save();
        self.ctx.set_matrix(Matrix::identity());
        self.ctx.set_operator(Operator::Source);
        self.ctx.set_source_rgba(r, g, b, a);
        let _ = self.ctx.paint();
        let _ = self.ctx.restore();
    }

    // Font functions

    /// Registers a font with the canvas and returns its handle.
    pub fn add_font(&mut self, font: Font) -> FontId {
        self.fonts.add(font)
    }

    /// Handle of the current font.
    pub fn font(&self) -> FontId {
        self.current_font
    }

    /// Makes `font` the current font. The handle is not validated here; a
    /// handle from another canvas makes [`print`](Self::print) a logged no-op.
    pub fn set_font(&mut self, font: FontId) {
        self.current_font = font;
    }

    // Graphics state functions

    /// Whether anti-aliasing is enabled.
    pub fn anti_aliasing(&self) -> bool {
        self.settings.antialias
    }

    /// Enables or disables anti-aliasing for subsequent draws.
    pub fn set_anti_aliasing(&mut self, enable: bool) {
        self.settings.antialias = enable;
        self.ctx.set_antialias(if enable {
            Antialias::Good
        } else {
            Antialias::None
        });
    }

    /// Whether the deflicker filter flag is set.
    pub fn deflicker(&self) -> bool {
        self.settings.deflicker
    }

    /// Sets the deflicker filter flag.
    pub fn set_deflicker(&mut self, enable: bool) {
        self.settings.deflicker = enable;
    }

    /// Line width used for strokes, in pixels.
    pub fn line_width(&self) -> u8 {
        self.settings.line_width
    }

    /// Sets the stroke line width. Passed through unchecked.
    pub fn set_line_width(&mut self, width: u8) {
        self.settings.line_width = width;
    }

    /// Point size setting, in pixels.
    pub fn point_size(&self) -> u8 {
        self.settings.point_size
    }

    /// Sets the point size. Passed through unchecked.
    pub fn set_point_size(&mut self, size: u8) {
        self.settings.point_size = size;
    }

    // Rendering functions

    /// Ends the current frame, flushing all pending drawing to the surface.
    pub fn present(&mut self) {
        self.surface.flush();
    }

    /// Writes the current canvas contents as PNG.
    ///
    /// # Errors
    /// Returns [`GraphicsError::Snapshot`] if encoding or writing fails.
    pub fn write_png<W: Write>(&mut self, writer: &mut W) -> Result<(), GraphicsError> {
        self.surface.flush();
        self.surface
            .write_to_png(writer)
            .map_err(GraphicsError::Snapshot)
    }

    /// Applies the current draw color to the Cairo context.
    pub(crate) fn apply_color(&self) {
        let (r, g, b, a) = self.color.to_cairo();
        self.ctx.set_source_rgba(r, g, b, a);
    }
}
