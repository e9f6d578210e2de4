//! Tilesnake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use tilesnake::consts::*;
    use tilesnake::input::{direction_for_key, direction_for_swipe};
    use tilesnake::renderer::CanvasRenderer;
    use tilesnake::sim::{self, GamePhase, GameState};
    use tilesnake::HighScore;

    /// Origin of an in-progress touch, for tap/swipe resolution
    #[derive(Debug, Clone, Copy)]
    struct TouchOrigin {
        x: f64,
        y: f64,
        time_ms: f64,
    }

    /// Game instance owning all state
    struct Game {
        state: GameState,
        renderer: Option<CanvasRenderer>,
        high_score: HighScore,
        // Track phase for the game-over persistence trigger
        last_phase: GamePhase,
        touch_origin: Option<TouchOrigin>,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                renderer: None,
                high_score: HighScore::load(),
                last_phase: GamePhase::NotStarted,
                touch_origin: None,
            }
        }

        /// Run one simulation step and react to phase transitions
        fn update(&mut self) {
            sim::tick(&mut self.state);

            let phase = self.state.phase;
            if phase != self.last_phase {
                if phase == GamePhase::Over {
                    // Fire-and-forget: storage errors are logged inside and
                    // never reach the simulation.
                    self.high_score = HighScore::save_if_best(self.state.score);
                }
                self.last_phase = phase;
            }
        }

        /// Render the current frame
        fn render(&self) {
            if let Some(ref renderer) = self.renderer {
                renderer.render(&self.state);
            }
        }

        /// Update score/high-score/game-over DOM elements
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            if let Some(el) = document.get_element_by_id("high-score") {
                el.set_text_content(Some(&self.high_score.best.to_string()));
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                // Toggle visibility only; the overlay keeps its own classes
                if self.state.phase == GamePhase::Over {
                    let _ = el.class_list().remove_1("hidden");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.state.score.to_string()));
                    }
                } else {
                    let _ = el.class_list().add_1("hidden");
                }
            }
        }

        fn restart(&mut self) {
            self.state.reset();
            self.last_phase = GamePhase::NotStarted;
            log::info!("Game reset");
        }
    }

    fn now_ms() -> f64 {
        js_sys::Date::now()
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tilesnake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let board_px = (TILE_COUNT as f64 * GRID_SIZE) as u32;
        canvas.set_width(board_px);
        canvas.set_height(board_px);

        let seed = now_ms() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        match CanvasRenderer::new(&canvas) {
            Some(renderer) => game.borrow_mut().renderer = Some(renderer),
            None => log::error!("Failed to acquire 2d canvas context"),
        }

        setup_keyboard(game.clone());
        setup_touch(&canvas, game.clone());
        setup_restart_button(game.clone());
        setup_auto_pause(game.clone());

        // Arm the first tick
        schedule_tick(game);

        log::info!("Tilesnake running!");
    }

    /// Arm a single-shot timer for the next tick.
    ///
    /// The delay is read fresh from `current_speed_ms` every time, so the
    /// score-driven speed ramp applies starting with the very next step.
    /// `once_into_js` hands ownership to the JS side, which frees the
    /// closure after its single invocation; this runs once per tick, so it
    /// must not leak like a `forget()` listener would.
    fn schedule_tick(game: Rc<RefCell<Game>>) {
        let delay = sim::current_speed_ms(&game.borrow().state) as i32;
        let window = web_sys::window().expect("no window");
        let callback = Closure::once_into_js(move || loop_step(game));
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay,
        );
    }

    fn loop_step(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
            g.update_hud();
        }
        schedule_tick(game);
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            match event.code().as_str() {
                "Space" => {
                    event.prevent_default();
                    if g.state.phase == GamePhase::NotStarted {
                        sim::start(&mut g.state, now_ms());
                    } else {
                        sim::toggle_pause(&mut g.state);
                    }
                }
                "KeyR" => g.restart(),
                code => {
                    if let Some(dir) = direction_for_key(code) {
                        sim::request_direction_change(&mut g.state, dir, now_ms());
                    }
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_touch(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Touch start: remember where and when the touch began
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().touch_origin = Some(TouchOrigin {
                        x: f64::from(touch.client_x()),
                        y: f64::from(touch.client_y()),
                        time_ms: now_ms(),
                    });
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end: a quick tap starts the game, anything longer is a
        // swipe candidate
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                let Some(origin) = g.touch_origin.take() else {
                    return;
                };
                let now = now_ms();

                if now - origin.time_ms < TAP_MAX_MS && g.state.phase == GamePhase::NotStarted {
                    sim::start(&mut g.state, now);
                    return;
                }

                if let Some(touch) = event.changed_touches().get(0) {
                    let delta_x = f64::from(touch.client_x()) - origin.x;
                    let delta_y = f64::from(touch.client_y()) - origin.y;
                    if let Some(dir) = direction_for_swipe(delta_x, delta_y) {
                        sim::request_direction_change(&mut g.state, dir, now);
                    }
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().restart();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Pause when the tab is hidden so the run doesn't die unattended
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                if g.state.phase == GamePhase::Running {
                    sim::toggle_pause(&mut g.state);
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::Rng;
    use tilesnake::sim::{self, Direction, GamePhase, GameState};

    env_logger::init();
    log::info!("Tilesnake (native) starting...");
    log::info!("The playable build targets the browser - run with `trunk serve`");

    // Headless smoke run: random steering until the snake dies
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed);
    let mut rng = rand::rng();
    let mut now = 0.0;

    sim::start(&mut state, now);
    let mut ticks = 0u32;
    while state.phase == GamePhase::Running && ticks < 10_000 {
        now += f64::from(sim::current_speed_ms(&state));
        let dir = match rng.random_range(0..4) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        };
        sim::request_direction_change(&mut state, dir, now);
        sim::tick(&mut state);
        ticks += 1;
    }

    println!(
        "Headless run over after {} ticks: score {}, snake length {}",
        ticks,
        state.score,
        state.snake.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
