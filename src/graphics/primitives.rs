//! Primitive drawing: circles, lines, rectangles.
//!
//! All primitives draw in the current color under the current transform and
//! are fire-and-forget. Geometry outside the surface is clipped by Cairo.

use super::Graphics;

impl Graphics {
    /// Draws a circle centered at (`x`, `y`).
    ///
    /// `fill` selects between a filled disc and an outline stroked with the
    /// current line width.
    pub fn circle(&mut self, fill: bool, x: f64, y: f64, radius: f64) {
        self.apply_color();
        self.ctx
            .arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);

        if fill {
            let _ = self.ctx.fill();
        } else {
            self.ctx.set_line_width(self.settings.line_width as f64);
            let _ = self.ctx.stroke();
        }
    }

    /// Draws a line from (`x1`, `y1`) to (`x2`, `y2`) with the current line
    /// width, round-capped.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.apply_color();
        self.ctx.set_line_width(self.settings.line_width as f64);
        self.ctx.set_line_cap(cairo::LineCap::Round);

        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        let _ = self.ctx.stroke();
    }

    /// Draws a rectangle with top-left corner (`x`, `y`).
    ///
    /// `fill` selects between a filled rectangle and an outline stroked
    /// with the current line width.
    pub fn rectangle(&mut self, fill: bool, x: f64, y: f64, width: f64, height: f64) {
        self.apply_color();
        self.ctx.rectangle(x, y, width, height);

        if fill {
            let _ = self.ctx.fill();
        } else {
            self.ctx.set_line_width(self.settings.line_width as f64);
            self.ctx.set_line_join(cairo::LineJoin::Miter);
            let _ = self.ctx.stroke();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::config::Config;

    fn canvas() -> Graphics {
        Graphics::new(&Config::default()).unwrap()
    }

    // Primitives are fire-and-forget; these exercise the paths for panics
    // and state leaks rather than pixel output.

    #[test]
    fn primitives_draw_without_disturbing_state() {
        let mut gfx = canvas();
        gfx.set_color(Color::rgb(200, 100, 50));

        gfx.circle(true, 320.0, 240.0, 50.0);
        gfx.circle(false, 100.0, 100.0, 25.0);
        gfx.line(0.0, 0.0, 640.0, 480.0);
        gfx.rectangle(true, 10.0, 10.0, 60.0, 40.0);
        gfx.rectangle(false, 200.0, 200.0, 80.0, 80.0);

        assert_eq!(gfx.color(), Color::rgb(200, 100, 50));
        assert_eq!(gfx.line_width(), 6);
    }

    #[test]
    fn off_screen_geometry_is_accepted() {
        let mut gfx = canvas();
        gfx.circle(true, -500.0, -500.0, 10.0);
        gfx.line(-100.0, -100.0, 10_000.0, 10_000.0);
        gfx.rectangle(false, 5_000.0, 5_000.0, 100.0, 100.0);
    }

    #[test]
    fn primitives_respect_transform_stack() {
        let mut gfx = canvas();
        gfx.push();
        gfx.translate(100.0, 100.0);
        gfx.rotate(0.5);
        gfx.rectangle(true, 0.0, 0.0, 50.0, 50.0);
        gfx.pop().unwrap();
    }
}
