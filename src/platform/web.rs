//! Browser host: requestAnimationFrame, document key listeners, DOM HUD

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, Window};

use super::{FrameId, GameHost};
use crate::renderer::canvas::CanvasRenderer;
use crate::sim::{GameOverSummary, Hud, Session};

/// JS callbacks the host hands to the browser. They call back into the
/// controller, so they are filled in after the controller exists.
#[derive(Default)]
pub struct HostCallbacks {
    pub frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    pub key_down: RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>,
    pub key_up: RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>,
}

pub struct WebHost {
    window: Window,
    document: Document,
    renderer: Option<CanvasRenderer>,
    callbacks: Rc<HostCallbacks>,
}

impl WebHost {
    pub fn new(
        window: Window,
        document: Document,
        canvas: &HtmlCanvasElement,
        callbacks: Rc<HostCallbacks>,
    ) -> Self {
        let renderer = CanvasRenderer::new(canvas);
        if renderer.is_none() {
            log::warn!("2D canvas context unavailable, car game will not draw");
        }
        Self {
            window,
            document,
            renderer,
            callbacks,
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_display(&self, id: &str, display: &str) {
        if let Some(el) = self
            .document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = el.style().set_property("display", display);
        }
    }

    fn listen(&self, event: &str, callback: &RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>) {
        if let Some(cb) = callback.borrow().as_ref() {
            let _ = self
                .document
                .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
        }
    }

    fn unlisten(&self, event: &str, callback: &RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>) {
        if let Some(cb) = callback.borrow().as_ref() {
            let _ = self
                .document
                .remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
        }
    }
}

impl GameHost for WebHost {
    fn request_frame(&mut self) -> FrameId {
        let frame = self.callbacks.frame.borrow();
        let Some(cb) = frame.as_ref() else {
            log::warn!("Frame requested before the frame callback was installed");
            return 0;
        };
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .unwrap_or_else(|e| {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                0
            })
    }

    fn cancel_frame(&mut self, id: FrameId) {
        let _ = self.window.cancel_animation_frame(id);
    }

    fn attach_input(&mut self) {
        self.listen("keydown", &self.callbacks.key_down);
        self.listen("keyup", &self.callbacks.key_up);
    }

    fn detach_input(&mut self) {
        self.unlisten("keydown", &self.callbacks.key_down);
        self.unlisten("keyup", &self.callbacks.key_up);
    }

    fn now_ms(&self) -> f64 {
        self.window
            .performance()
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn present(&mut self, hud: &Hud) {
        self.set_text("car-score", &hud.score.to_string());
        self.set_text("car-dodgedCars", &hud.dodged.to_string());
        self.set_text("car-gameTime", &hud.elapsed_secs.to_string());
        self.set_text("car-speedValue", &hud.speed.to_string());
        self.set_text("car-highScore", &hud.high_score.to_string());
    }

    fn show_game_over(&mut self, summary: Option<&GameOverSummary>) {
        match summary {
            Some(summary) => {
                self.set_text("car-finalScore", &summary.final_score.to_string());
                self.set_text("car-finalHighScore", &summary.high_score.to_string());
                self.set_text("car-finalDodged", &summary.dodged.to_string());
                self.set_text("car-highScore", &summary.high_score.to_string());
                self.set_display("car-gameOver", "block");
            }
            None => self.set_display("car-gameOver", "none"),
        }
    }

    fn draw(&mut self, session: &Session) {
        if let Some(renderer) = &self.renderer {
            renderer.draw(session);
        }
    }
}
