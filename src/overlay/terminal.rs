use super::surface_size;
use crate::constants::*;
use crate::core::constants::GLITCH_JITTER_PX;
use crate::core::terminal::TerminalState;
use crate::core::Phase;
use crate::dom;
use crate::error::MountError;
use instant::Instant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use web_sys as web;

/// CRT-style status surface: dark wash, scanlines, one status line.
pub struct TerminalOverlay {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    state: TerminalState,
    rng: StdRng,
    started: Instant,
}

impl TerminalOverlay {
    pub fn new(canvas: web::HtmlCanvasElement) -> Result<Self, MountError> {
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self {
            canvas,
            ctx,
            state: TerminalState::new(),
            rng: StdRng::from_entropy(),
            started: Instant::now(),
        })
    }

    pub fn draw(&mut self, phase: Phase, hovered: bool) {
        let (w, h) = surface_size(&self.canvas);
        let ctx = &self.ctx;

        ctx.set_fill_style_str(TERMINAL_WASH);
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_stroke_style_str(SCANLINE_COLOR);
        ctx.set_line_width(1.0);
        let mut y = 0.0;
        while y < h {
            ctx.begin_path();
            ctx.move_to(0.0, y);
            ctx.line_to(w, y);
            ctx.stroke();
            y += SCANLINE_SPACING_PX;
        }

        let text = self
            .state
            .tick(phase, self.started.elapsed().as_secs_f64());
        let baseline = h - TERMINAL_TEXT_BOTTOM_OFFSET;

        ctx.save();
        ctx.set_font(TERMINAL_FONT);
        ctx.set_fill_style_str(TERMINAL_TEXT_COLOR);
        ctx.set_shadow_blur(TERMINAL_GLOW_BLUR);
        ctx.set_shadow_color(TERMINAL_TEXT_COLOR);
        _ = ctx.fill_text(&text, TERMINAL_TEXT_X, baseline);

        if hovered {
            let dx = self.rng.gen::<f32>() * GLITCH_JITTER_PX;
            let dy = self.rng.gen::<f32>() * GLITCH_JITTER_PX;
            ctx.set_global_alpha(GLITCH_ALPHA);
            ctx.set_fill_style_str(GLITCH_COLOR);
            _ = ctx.fill_text(
                &text,
                TERMINAL_TEXT_X + dx as f64,
                baseline + dy as f64,
            );
        }
        ctx.restore();
    }
}
