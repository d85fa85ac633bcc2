//! Session lifecycle
//!
//! The controller owns the one live `Session` and drives it through a
//! `GameHost`. A step only ever runs in response to a frame the controller
//! itself requested, so cancelling that request is enough to halt the game.

use crate::config::GameConfig;
use crate::highscores::HighScore;
use crate::persistence::HighScoreStore;
use crate::platform::{FrameId, GameHost};
use crate::sim::{GamePhase, Hud, Session, StepOutcome, step};

/// What a key does in the car game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Left,
    Right,
    Restart,
}

impl KeyAction {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Self::Left),
            "ArrowRight" | "d" | "D" => Some(Self::Right),
            " " | "Enter" => Some(Self::Restart),
            _ => None,
        }
    }
}

pub struct SessionController<H: GameHost, S: HighScoreStore> {
    host: H,
    high_score: HighScore<S>,
    config: GameConfig,
    seed: u64,
    session: Option<Session>,
    pending: Option<FrameId>,
    input_attached: bool,
}

impl<H: GameHost, S: HighScoreStore> SessionController<H, S> {
    /// An invalid config is replaced by the defaults
    pub fn new(host: H, store: S, config: GameConfig, seed: u64) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("Invalid game config ({}), using defaults", e);
                GameConfig::default()
            }
        };
        Self {
            host,
            high_score: HighScore::load(store),
            config,
            seed,
            session: None,
            pending: None,
            input_attached: false,
        }
    }

    /// Begin a brand new session, replacing any previous one
    pub fn start(&mut self) {
        self.cancel_pending();
        let best = self.high_score.reload();
        let now = self.host.now_ms();
        self.session = Some(Session::new(self.config.clone(), self.seed, best, now));
        // Each fresh session gets its own spawn sequence
        self.seed = self.seed.wrapping_add(0x9e37_79b9_7f4a_7c15);

        log::info!("Car game started (high score {})", best);
        self.resume();
    }

    /// Cancel the pending frame and stop listening for keys. The session is
    /// kept so its last numbers stay readable.
    pub fn stop(&mut self) {
        self.cancel_pending();
        if self.input_attached {
            self.host.detach_input();
            self.input_attached = false;
        }
        log::info!("Car game stopped");
    }

    /// Reset the current session and run again. Starts one if none exists.
    pub fn restart(&mut self) {
        if self.session.is_none() {
            self.start();
            return;
        }
        self.cancel_pending();
        let now = self.host.now_ms();
        if let Some(session) = self.session.as_mut() {
            session.reset(now);
        }

        log::info!("Car game restarted");
        self.resume();
    }

    /// Feed a key press or release. Returns true when the key was used.
    pub fn handle_input(&mut self, key: &str, pressed: bool) -> bool {
        if !self.input_attached {
            return false;
        }
        let Some(action) = KeyAction::from_key(key) else {
            return false;
        };
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        match action {
            KeyAction::Left => session.input.left = pressed,
            KeyAction::Right => session.input.right = pressed,
            KeyAction::Restart => {
                if !pressed || session.phase != GamePhase::GameOver {
                    return false;
                }
                self.restart();
            }
        }
        true
    }

    /// Serve a frame the host scheduled. Stale frames (cancelled, or after
    /// game over) are ignored.
    pub fn on_frame(&mut self, now_ms: f64) {
        if self.pending.take().is_none() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let outcome = step(session, now_ms);
        self.host.draw(session);
        self.host.present(&session.hud());

        match outcome {
            StepOutcome::Continue => {
                self.pending = Some(self.host.request_frame());
            }
            StepOutcome::GameOver(mut summary) => {
                summary.new_record = self.high_score.submit(summary.final_score);
                summary.high_score = self.high_score.best();
                session.high_score = summary.high_score;
                log::debug!(
                    "Game over: score {} dodged {} best {}",
                    summary.final_score,
                    summary.dodged,
                    summary.high_score
                );
                self.host.show_game_over(Some(&summary));
            }
            StepOutcome::Halted => {}
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    pub fn hud(&self) -> Option<Hud> {
        self.session.as_ref().map(Session::hud)
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn store(&self) -> &S {
        self.high_score.store()
    }

    /// Attach input, refresh the page and schedule the first frame
    fn resume(&mut self) {
        if !self.input_attached {
            self.host.attach_input();
            self.input_attached = true;
        }
        if let Some(session) = &self.session {
            self.host.present(&session.hud());
        }
        self.host.show_game_over(None);
        self.pending = Some(self.host.request_frame());
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.host.cancel_frame(id);
        }
    }
}
