//! Text drawing through Pango layouts.

use log::warn;

use super::Graphics;
use super::params::DrawParams;

impl Graphics {
    /// Draws `text` with the current font and draw color.
    ///
    /// Placement follows the same rules as texture blits: position, then
    /// rotation and scale around the origin offset. Newlines in `text`
    /// produce multiple lines; Pango handles the line breaking.
    ///
    /// If the current font handle does not resolve (a handle minted by a
    /// different canvas), a warning is logged and nothing is drawn.
    pub fn print(&mut self, text: &str, params: &DrawParams) {
        let Some(font) = self.fonts.get(self.current_font) else {
            warn!(
                "print skipped: font {:?} is not registered with this canvas",
                self.current_font
            );
            return;
        };
        let description = font.to_description();

        self.apply_color();

        let _ = self.ctx.save();
        self.ctx.translate(params.x, params.y);
        self.ctx.rotate(params.rotation);
        self.ctx.scale(params.scale_x, params.scale_y);
        self.ctx.translate(-params.origin_x, -params.origin_y);

        let layout = pangocairo::functions::create_layout(&self.ctx);
        layout.set_font_description(Some(&description));
        layout.set_text(text);

        self.ctx.move_to(0.0, 0.0);
        pangocairo::functions::show_layout(&self.ctx, &layout);

        let _ = self.ctx.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::config::Config;
    use crate::font::{Font, FontId};

    fn canvas() -> Graphics {
        Graphics::new(&Config::default()).unwrap()
    }

    #[test]
    fn print_draws_with_default_font() {
        let mut gfx = canvas();
        gfx.set_color(Color::rgb(255, 255, 0));
        gfx.print("hello", &DrawParams::at(20.0, 20.0));
        gfx.present();
    }

    #[test]
    fn print_with_placement_and_multiline_text() {
        let mut gfx = canvas();
        let big = gfx.add_font(Font::new("Sans", "bold", "normal", 32.0));
        gfx.set_font(big);

        let params = DrawParams::at(320.0, 240.0)
            .rotation(0.3)
            .scale(1.5, 1.5)
            .origin(10.0, 10.0);
        gfx.print("line one\nline two", &params);
    }

    #[test]
    fn print_with_stale_font_id_is_a_no_op() {
        let mut gfx = canvas();
        gfx.set_font(FontId(42));
        // Must not panic; warning is logged instead.
        gfx.print("nothing to see", &DrawParams::default());
    }

    #[test]
    fn print_leaves_transform_untouched() {
        let mut gfx = canvas();
        gfx.translate(7.0, 9.0);
        let before = gfx.transform();

        gfx.print("moved", &DrawParams::at(50.0, 50.0).rotation(0.5));

        let after = gfx.transform();
        assert!((before.x0() - after.x0()).abs() < 1e-9);
        assert!((before.y0() - after.y0()).abs() < 1e-9);
    }
}
