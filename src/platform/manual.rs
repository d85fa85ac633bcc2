use super::{FrameId, GameHost};
use crate::sim::{GameOverSummary, Hud};

/// Host driven by hand: frames only happen when the caller says so
#[derive(Debug, Default)]
pub struct ManualHost {
    /// Clock reported by `now_ms`
    pub now_ms: f64,
    /// Frame request waiting to be served
    pub pending: Option<FrameId>,
    pub requests: u32,
    pub cancels: u32,
    pub input_attached: bool,
    pub attach_count: u32,
    pub last_hud: Option<Hud>,
    pub game_over: Option<GameOverSummary>,
    next_id: FrameId,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock and hand out the pending frame, if any
    pub fn next_frame(&mut self, dt_ms: f64) -> Option<f64> {
        self.now_ms += dt_ms;
        self.pending.take().map(|_| self.now_ms)
    }
}

impl GameHost for ManualHost {
    fn request_frame(&mut self) -> FrameId {
        self.next_id += 1;
        self.requests += 1;
        self.pending = Some(self.next_id);
        self.next_id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if self.pending == Some(id) {
            self.pending = None;
            self.cancels += 1;
        }
    }

    fn attach_input(&mut self) {
        self.input_attached = true;
        self.attach_count += 1;
    }

    fn detach_input(&mut self) {
        self.input_attached = false;
    }

    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn present(&mut self, hud: &Hud) {
        self.last_hud = Some(*hud);
    }

    fn show_game_over(&mut self, summary: Option<&GameOverSummary>) {
        self.game_over = summary.copied();
    }
}
