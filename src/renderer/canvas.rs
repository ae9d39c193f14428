//! Browser Canvas 2D renderer

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::{Frame, Renderer, colors};
use crate::consts::LABEL_FONT;
use crate::sprite::Sprite;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    /// Decoded image for `Sprite::Image`; unused for glyph sprites
    image: Option<HtmlImageElement>,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, image: Option<HtmlImageElement>) -> Self {
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        Self { ctx, image }
    }

    fn draw_sprite(&self, frame: &Frame<'_>) {
        let (x, y) = (frame.pos.x as f64, frame.pos.y as f64);
        match (frame.sprite, &self.image) {
            (Sprite::Image(img), Some(element)) => {
                let (w, h) = (img.width as f64, img.height as f64);
                if let Err(e) = self
                    .ctx
                    .draw_image_with_html_image_element_and_dw_and_dh(element, x - w / 2.0, y - h / 2.0, w, h)
                {
                    log::warn!("drawImage failed: {:?}", e);
                }
            }
            (Sprite::Glyph(glyph), _) => {
                self.ctx.set_font(&format!("{}px \"Segoe UI Emoji\", sans-serif", glyph.font_px));
                self.ctx.set_fill_style_str(colors::GLYPH);
                let _ = self.ctx.fill_text(&glyph.glyph, x, y);
            }
            (Sprite::Image(_), None) => {}
        }
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        let (w, h) = (frame.canvas.width as f64, frame.canvas.height as f64);

        self.ctx.set_fill_style_str(colors::BACKGROUND);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.draw_sprite(frame);

        self.ctx.set_font(LABEL_FONT);
        self.ctx.set_fill_style_str(&frame.label_color.to_hex());
        let _ = self
            .ctx
            .fill_text(frame.label, frame.pos.x as f64, frame.pos.y as f64);
    }
}
