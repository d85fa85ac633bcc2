//! Draws the car game onto a 2D canvas

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::palette::cabin_color;
use crate::sim::{Obstacle, Session};

const ROAD: &str = "#2a2a2a";
const SHOULDER: &str = "#3a3a3a";
const SHADOW: &str = "rgba(0, 0, 0, 0.3)";
const WHEEL: &str = "#1a1a1a";
const TAIL_LIGHT: &str = "#ff3333";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    pub fn draw(&self, session: &Session) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.draw_road(session);
        for obstacle in session.obstacles.iter() {
            self.draw_obstacle(obstacle, &session.config.palette);
        }
        self.draw_player(session);
    }

    fn draw_road(&self, session: &Session) {
        let (w, h) = (self.width, self.height);
        let ctx = &self.ctx;

        ctx.set_fill_style_str(ROAD);
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_fill_style_str(SHOULDER);
        ctx.fill_rect(0.0, 0.0, 8.0, h);
        ctx.fill_rect(w - 8.0, 0.0, 8.0, h);

        ctx.set_fill_style_str("rgba(255, 255, 255, 0.3)");
        ctx.fill_rect(8.0, 0.0, 2.0, h);
        ctx.fill_rect(w - 10.0, 0.0, 2.0, h);

        ctx.set_fill_style_str("rgba(255, 255, 255, 0.6)");
        for marker in &session.markers {
            ctx.fill_rect(w / 2.0 - 2.0, marker.y as f64, 4.0, 35.0);
        }

        ctx.set_fill_style_str("rgba(255, 255, 255, 0.15)");
        for marker in &session.markers {
            ctx.fill_rect(w / 4.0, marker.y as f64, 2.0, 25.0);
            ctx.fill_rect(w * 3.0 / 4.0, marker.y as f64, 2.0, 25.0);
        }
    }

    fn draw_shadow(&self, x: f64, y: f64, w: f64, h: f64) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(SHADOW);
        ctx.begin_path();
        let _ = ctx.ellipse(x + w / 2.0 + 3.0, y + h - 5.0, w / 2.0 - 5.0, 8.0, 0.0, 0.0, TAU);
        ctx.fill();
    }

    /// Tail lights and wheels go on top of the body
    fn draw_rear_and_wheels(&self, x: f64, y: f64, w: f64, h: f64) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(TAIL_LIGHT);
        ctx.fill_rect(x + 4.0, y + h - 10.0, 8.0, 4.0);
        ctx.fill_rect(x + w - 12.0, y + h - 10.0, 8.0, 4.0);

        ctx.set_fill_style_str(WHEEL);
        ctx.fill_rect(x - 3.0, y + 8.0, 6.0, 16.0);
        ctx.fill_rect(x + w - 3.0, y + 8.0, 6.0, 16.0);
        ctx.fill_rect(x - 3.0, y + h - 24.0, 6.0, 16.0);
        ctx.fill_rect(x + w - 3.0, y + h - 24.0, 6.0, 16.0);
    }

    fn draw_player(&self, session: &Session) {
        let p = &session.player;
        let (x, y) = (p.pos.x as f64, p.pos.y as f64);
        let (w, h) = (p.size.x as f64, p.size.y as f64);
        let ctx = &self.ctx;

        ctx.save();
        self.draw_shadow(x, y, w, h);

        ctx.set_fill_style_str("#6bb8ff");
        ctx.fill_rect(x, y, w, h);
        ctx.set_fill_style_str("#529bee");
        ctx.fill_rect(x + 2.0, y + 2.0, w - 15.0, h - 4.0);
        // Roof and windshield
        ctx.set_fill_style_str("#4a90e2");
        ctx.fill_rect(x + 4.0, y + 18.0, w - 8.0, 30.0);
        ctx.set_fill_style_str("#a8d4ff");
        ctx.fill_rect(x + 6.0, y + 20.0, w - 12.0, 12.0);
        // Headlights
        ctx.set_fill_style_str("#fff");
        ctx.fill_rect(x + 4.0, y + 4.0, 10.0, 6.0);
        ctx.fill_rect(x + w - 14.0, y + 4.0, 10.0, 6.0);

        self.draw_rear_and_wheels(x, y, w, h);
        ctx.restore();
    }

    fn draw_obstacle(&self, obstacle: &Obstacle, palette: &[String]) {
        let (x, y) = (obstacle.pos.x as f64, obstacle.pos.y as f64);
        let (w, h) = (obstacle.size.x as f64, obstacle.size.y as f64);
        let body = palette.get(obstacle.color).map(String::as_str).unwrap_or("#888888");
        let ctx = &self.ctx;

        ctx.save();
        self.draw_shadow(x, y, w, h);

        ctx.set_fill_style_str(body);
        ctx.fill_rect(x, y, w, h);
        ctx.set_fill_style_str(&cabin_color(body));
        ctx.fill_rect(x + 4.0, y + 32.0, w - 8.0, 28.0);
        ctx.set_fill_style_str("#333");
        ctx.fill_rect(x + 6.0, y + 48.0, w - 12.0, 10.0);

        self.draw_rear_and_wheels(x, y, w, h);
        ctx.restore();
    }
}
