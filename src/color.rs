//! RGBA color type and predefined color constants.

/// Represents an RGBA color with 8-bit components.
///
/// All components are in the range 0 (minimum) to 255 (maximum).
///
/// # Examples
///
/// ```
/// use retrocanvas::Color;
/// let red = Color { r: 255, g: 0, b: 0, a: 255 };
/// let semi_transparent_blue = Color { r: 0, g: 0, b: 255, a: 128 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red component (0 = no red, 255 = full red)
    pub r: u8,
    /// Green component (0 = no green, 255 = full green)
    pub g: u8,
    /// Blue component (0 = no blue, 255 = full blue)
    pub b: u8,
    /// Alpha/transparency (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color from RGB components.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Converts to floating-point components in the 0.0-1.0 range Cairo expects.
    pub(crate) fn to_cairo(self) -> (f64, f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
            self.a as f64 / 255.0,
        )
    }
}

/// Predefined opaque white (draw-color default).
pub const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

/// Predefined opaque black (background default).
pub const BLACK: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

/// Predefined red color.
pub const RED: Color = Color {
    r: 255,
    g: 0,
    b: 0,
    a: 255,
};

/// Predefined green color.
pub const GREEN: Color = Color {
    r: 0,
    g: 255,
    b: 0,
    a: 255,
};

/// Predefined blue color.
pub const BLUE: Color = Color {
    r: 0,
    g: 0,
    b: 255,
    a: 255,
};

/// Fully transparent color.
pub const TRANSPARENT: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_fully_opaque() {
        assert_eq!(Color::rgb(10, 20, 30), Color::new(10, 20, 30, 255));
    }

    #[test]
    fn cairo_conversion_scales_channels() {
        let (r, g, b, a) = WHITE.to_cairo();
        assert_eq!((r, g, b, a), (1.0, 1.0, 1.0, 1.0));

        let (r, g, b, a) = Color::new(255, 0, 0, 51).to_cairo();
        assert_eq!((r, g, b), (1.0, 0.0, 0.0));
        assert!((a - 0.2).abs() < 1e-9);
    }
}
