//! Platform abstraction layer
//!
//! The controller never talks to the browser directly. A `GameHost` provides:
//! - Frame scheduling (requestAnimationFrame on web)
//! - Input listener attach/detach
//! - Clock
//! - HUD and game-over presentation, drawing
//!
//! `ManualHost` is a synchronous stand-in used by tests and the native demo.

mod manual;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use manual::ManualHost;

use crate::sim::{GameOverSummary, Hud, Session};

/// Handle for a scheduled frame
pub type FrameId = i32;

pub trait GameHost {
    /// Ask for `SessionController::on_frame` to be called on the next frame
    fn request_frame(&mut self) -> FrameId;

    /// Drop a pending frame request
    fn cancel_frame(&mut self, id: FrameId);

    /// Start delivering key events to the controller
    fn attach_input(&mut self);

    /// Stop delivering key events
    fn detach_input(&mut self);

    /// Current time in milliseconds, on the same clock as frame timestamps
    fn now_ms(&self) -> f64;

    /// Show the running numbers
    fn present(&mut self, _hud: &Hud) {}

    /// Show (`Some`) or hide (`None`) the game-over panel
    fn show_game_over(&mut self, _summary: Option<&GameOverSummary>) {}

    /// Draw the current frame
    fn draw(&mut self, _session: &Session) {}
}
