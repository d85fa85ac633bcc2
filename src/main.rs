//! Wave site entry point
//!
//! On the web this wires the car game and the page helpers into the DOM.
//! Natively it plays a headless demo game and logs the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_site {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use wave_site::persistence::LocalStorageStore;
    use wave_site::platform::web::{HostCallbacks, WebHost};
    use wave_site::site::{self, PlayerStatus};
    use wave_site::{GameConfig, SessionController, SiteConfig};

    type WebController = SessionController<WebHost, LocalStorageStore>;

    thread_local! {
        static GAME: RefCell<Option<Rc<RefCell<WebController>>>> = const { RefCell::new(None) };
        static SITE: SiteConfig = load_site_config();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Wave site starting...");
    }

    /// Site config from an optional `<script type="application/json" id="site-config">`
    fn load_site_config() -> SiteConfig {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("site-config"))
            .and_then(|el| el.text_content());
        match raw {
            Some(json) => SiteConfig::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Invalid site config ({}), using defaults", e);
                SiteConfig::default()
            }),
            None => SiteConfig::default(),
        }
    }

    fn build_controller() -> Option<Rc<RefCell<WebController>>> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("carGameCanvas")?
            .dyn_into()
            .ok()?;

        let config = GameConfig::with_playfield(canvas.width() as f32, canvas.height() as f32);
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("Canvas does not fit the default lanes ({}), using defaults", e);
                GameConfig::default()
            }
        };

        let callbacks = Rc::new(HostCallbacks::default());
        let host = WebHost::new(window, document, &canvas, callbacks.clone());
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(SessionController::new(
            host,
            LocalStorageStore::new(),
            config,
            seed,
        )));

        {
            let game = game.clone();
            *callbacks.frame.borrow_mut() = Some(Closure::new(move |time: f64| {
                game.borrow_mut().on_frame(time);
            }));
        }
        {
            let game = game.clone();
            *callbacks.key_down.borrow_mut() = Some(Closure::new(move |event: KeyboardEvent| {
                game.borrow_mut().handle_input(&event.key(), true);
            }));
        }
        {
            let game = game.clone();
            *callbacks.key_up.borrow_mut() = Some(Closure::new(move |event: KeyboardEvent| {
                game.borrow_mut().handle_input(&event.key(), false);
            }));
        }

        log::info!("Car game initialized with seed: {}", seed);
        Some(game)
    }

    fn game() -> Option<Rc<RefCell<WebController>>> {
        GAME.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot.is_none() {
                *slot = build_controller();
            }
            slot.clone()
        })
    }

    fn element(selector: &str) -> Option<HtmlElement> {
        web_sys::window()?
            .document()?
            .query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into()
            .ok()
    }

    fn set_display(el: &Option<HtmlElement>, display: &str) {
        if let Some(el) = el {
            let _ = el.style().set_property("display", display);
        }
    }

    /// Toggle the sidebar between the server status panel and the car game
    #[wasm_bindgen(js_name = playCarGame)]
    pub fn play_car_game() {
        let container = element("#car-game-container");
        let status = element(".server-status");
        let hidden = container
            .as_ref()
            .map(|c| {
                let display = c.style().get_property_value("display").unwrap_or_default();
                display.is_empty() || display == "none"
            })
            .unwrap_or(true);

        if hidden {
            set_display(&container, "block");
            set_display(&status, "none");
            if let Some(game) = game() {
                game.borrow_mut().start();
            }
        } else {
            hide_car_game();
        }
    }

    #[wasm_bindgen(js_name = hideCarGame)]
    pub fn hide_car_game() {
        set_display(&element("#car-game-container"), "none");
        set_display(&element(".server-status"), "block");
        GAME.with(|slot| {
            if let Some(game) = slot.borrow().as_ref() {
                game.borrow_mut().stop();
            }
        });
    }

    #[wasm_bindgen(js_name = restartCarGame)]
    pub fn restart_car_game() {
        if let Some(game) = game() {
            game.borrow_mut().restart();
        }
    }

    /// `HH:MM:SS` until the next server restart
    #[wasm_bindgen(js_name = restartCountdown)]
    pub fn restart_countdown(hour: u32, minute: u32, second: u32) -> String {
        SITE.with(|site| {
            site::next_restart(hour, minute, second, &site.restart_hours)
                .map(|c| c.to_string())
                .unwrap_or_else(|| "--:--:--".to_string())
        })
    }

    /// Player feed as the page shows it. Pass `undefined` when the fetch failed.
    #[wasm_bindgen]
    pub struct PlayerFeed {
        status: PlayerStatus,
    }

    #[wasm_bindgen]
    impl PlayerFeed {
        #[wasm_bindgen(constructor)]
        pub fn new(body: Option<String>) -> PlayerFeed {
            PlayerFeed {
                status: PlayerStatus::from_feed(body.as_deref()),
            }
        }

        #[wasm_bindgen(js_name = countText)]
        pub fn count_text(&self) -> String {
            self.status.count_text()
        }

        pub fn headline(&self) -> String {
            self.status.headline()
        }

        #[wasm_bindgen(js_name = connectCommand)]
        pub fn connect_command(&self) -> String {
            SITE.with(|site| self.status.connect_command(&site.server_id))
        }
    }

    #[wasm_bindgen(js_name = memberCountText)]
    pub fn member_count_text(body: Option<String>) -> String {
        site::member_count_text(body.as_deref())
    }

    #[wasm_bindgen(js_name = connectUrl)]
    pub fn connect_url() -> String {
        SITE.with(|site| site::connect_url(&site.server_id))
    }

    #[wasm_bindgen(js_name = inviteUrl)]
    pub fn invite_url() -> String {
        SITE.with(|site| site.invite_url())
    }

    #[wasm_bindgen(js_name = feedUrls)]
    pub fn feed_urls() -> Vec<String> {
        SITE.with(|site| vec![site.server_feed_url(), site.invite_feed_url()])
    }

    #[wasm_bindgen(js_name = pollIntervalMs)]
    pub fn poll_interval_ms() -> u32 {
        SITE.with(|site| site.poll_interval_secs * 1000)
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_site::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Wave site (native) starting...");
    log::info!("The page build targets wasm32 - run with `trunk serve` for the web version");

    demo::play();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use wave_site::persistence::MemoryStore;
    use wave_site::platform::ManualHost;
    use wave_site::sim::Session;
    use wave_site::{GameConfig, SessionController};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: usize = 60 * 60 * 5;

    /// Steer away from the nearest car bearing down on the player
    fn autopilot(session: &Session) -> (&'static str, bool) {
        let player = &session.player;
        let centre = player.pos.x + player.size.x / 2.0;
        let threat = session
            .obstacles
            .iter()
            .filter(|o| o.pos.y > 150.0 && o.pos.y < player.pos.y + player.size.y)
            .filter(|o| (o.pos.x + o.size.x / 2.0 - centre).abs() < player.size.x)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

        match threat {
            Some(o) if o.pos.x + o.size.x / 2.0 >= centre && player.pos.x > session.config.player_min_x() => {
                ("ArrowLeft", true)
            }
            Some(_) => ("ArrowRight", true),
            None => ("ArrowLeft", false),
        }
    }

    pub fn play() {
        let mut game = SessionController::new(
            ManualHost::new(),
            MemoryStore::new(),
            GameConfig::default(),
            0x5eed,
        );
        game.start();

        for _ in 0..MAX_FRAMES {
            let Some(now) = game.host_mut().next_frame(FRAME_MS) else {
                break;
            };
            if let Some(session) = game.session() {
                let (key, pressed) = autopilot(session);
                game.handle_input("ArrowLeft", false);
                game.handle_input("ArrowRight", false);
                game.handle_input(key, pressed);
            }
            game.on_frame(now);
        }

        match game.host().game_over {
            Some(summary) => log::info!(
                "Demo crashed: score {}, dodged {}, best {}",
                summary.final_score,
                summary.dodged,
                summary.high_score
            ),
            None => {
                if let Some(hud) = game.hud() {
                    log::info!("Demo survived {}s with score {}", hud.elapsed_secs, hud.score);
                }
                game.stop();
            }
        }
    }
}
