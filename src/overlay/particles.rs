use super::surface_size;
use crate::constants::{SPARK_COLOR, SPARK_DOT_RADIUS_PX, SPEED_LINE_COLOR, SPEED_LINE_WIDTH};
use crate::core::sparks::{speed_line_xs, SparkField};
use crate::dom;
use crate::error::MountError;
use crate::input::InputSnapshot;
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// Speed lines while hovered, plus sparks thrown off by pointer movement.
pub struct ParticleOverlay {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    sparks: SparkField,
}

impl ParticleOverlay {
    pub fn new(canvas: web::HtmlCanvasElement) -> Result<Self, MountError> {
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self {
            canvas,
            ctx,
            sparks: SparkField::from_entropy(),
        })
    }

    pub fn draw(&mut self, input: &InputSnapshot, moves: &[Vec2]) {
        let (w, h) = surface_size(&self.canvas);
        let surface = Vec2::new(w as f32, h as f32);
        for &m in moves {
            self.sparks.pointer_moved(m, surface);
        }

        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, w, h);

        if input.hovered {
            ctx.set_stroke_style_str(SPEED_LINE_COLOR);
            ctx.set_line_width(SPEED_LINE_WIDTH);
            for x in speed_line_xs(input.uv[0] * w as f32) {
                ctx.begin_path();
                ctx.move_to(x as f64, 0.0);
                ctx.line_to(x as f64, h);
                ctx.stroke();
            }
        }

        // expired sparks are gone before anything is drawn
        self.sparks.tick();
        ctx.save();
        ctx.set_fill_style_str(SPARK_COLOR);
        for s in self.sparks.live() {
            ctx.set_global_alpha(s.life as f64);
            ctx.begin_path();
            _ = ctx.arc(
                s.position.x as f64,
                s.position.y as f64,
                SPARK_DOT_RADIUS_PX,
                0.0,
                TAU,
            );
            ctx.fill();
        }
        ctx.restore();
    }
}
