//! Placement parameters shared by texture blits and text drawing.

/// Position, rotation, scale, and origin offset for a draw call.
///
/// Replaces the numbered-overload families a binding surface would use for
/// optional arguments: construct with [`DrawParams::at`] (or `Default`) and
/// chain only the setters you need.
///
/// # Examples
///
/// ```
/// use retrocanvas::DrawParams;
///
/// let params = DrawParams::at(320.0, 240.0)
///     .rotation(std::f64::consts::FRAC_PI_4)
///     .scale(2.0, 2.0)
///     .origin(16.0, 16.0);
/// assert_eq!(params.x, 320.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    /// Horizontal position on the canvas.
    pub x: f64,
    /// Vertical position on the canvas.
    pub y: f64,
    /// Rotation in radians around the origin offset.
    pub rotation: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Horizontal origin offset, in source pixels before scaling.
    pub origin_x: f64,
    /// Vertical origin offset, in source pixels before scaling.
    pub origin_y: f64,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

impl DrawParams {
    /// Parameters placing the draw at (`x`, `y`) with no rotation, unit
    /// scale, and zero origin offset.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Sets the rotation, in radians.
    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets per-axis scale factors.
    pub fn scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Sets the origin offset the draw rotates and scales around.
    pub fn origin(mut self, origin_x: f64, origin_y: f64) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity_placement() {
        let params = DrawParams::default();
        assert_eq!(params.x, 0.0);
        assert_eq!(params.rotation, 0.0);
        assert_eq!((params.scale_x, params.scale_y), (1.0, 1.0));
        assert_eq!((params.origin_x, params.origin_y), (0.0, 0.0));
    }

    #[test]
    fn builders_only_touch_their_fields() {
        let params = DrawParams::at(10.0, 20.0).scale(3.0, 4.0);
        assert_eq!((params.x, params.y), (10.0, 20.0));
        assert_eq!((params.scale_x, params.scale_y), (3.0, 4.0));
        assert_eq!(params.rotation, 0.0);

        let rotated = params.rotation(1.0).origin(5.0, 6.0);
        assert_eq!(rotated.rotation, 1.0);
        assert_eq!((rotated.origin_x, rotated.origin_y), (5.0, 6.0));
        assert_eq!((rotated.scale_x, rotated.scale_y), (3.0, 4.0));
    }
}
