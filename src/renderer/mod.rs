//! Canvas 2D rendering
//!
//! `palette` is plain color math; `canvas` draws a session onto an
//! `HtmlCanvasElement` and only exists on wasm32.

pub mod palette;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use palette::Rgb;
