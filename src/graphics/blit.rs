//! Texture blitting onto the canvas.

use super::Graphics;
use super::params::DrawParams;
use crate::texture::{Quad, Texture};

impl Graphics {
    /// Blits a whole texture with the given placement.
    ///
    /// The blit is modulated by the current draw color's alpha channel.
    pub fn draw(&mut self, texture: &Texture, params: &DrawParams) {
        let quad = texture.full_quad();
        self.blit(texture, &quad, params);
    }

    /// Blits the `quad` sub-rectangle of a texture with the given placement.
    ///
    /// The quad is not bounds-checked against the texture; regions outside
    /// the source read as transparent.
    pub fn draw_quad(&mut self, texture: &Texture, quad: &Quad, params: &DrawParams) {
        self.blit(texture, quad, params);
    }

    fn blit(&mut self, texture: &Texture, quad: &Quad, params: &DrawParams) {
        let alpha = self.color.a as f64 / 255.0;

        let _ = self.ctx.save();

        // Placement: translate to position, rotate, scale, then shift by
        // the origin offset so rotation/scale pivot around it.
        self.ctx.translate(params.x, params.y);
        self.ctx.rotate(params.rotation);
        self.ctx.scale(params.scale_x, params.scale_y);
        self.ctx.translate(-params.origin_x, -params.origin_y);

        // Source is positioned so the quad's corner lands at local (0, 0),
        // then clipped to the quad's extent.
        let _ = self
            .ctx
            .set_source_surface(texture.surface(), -quad.x, -quad.y);
        self.ctx.rectangle(0.0, 0.0, quad.width, quad.height);
        self.ctx.clip();
        let _ = self.ctx.paint_with_alpha(alpha);

        let _ = self.ctx.restore();
    }
}
