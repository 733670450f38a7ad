//! Neon Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use neon_dodge::Tuning;
    use neon_dodge::consts::*;
    use neon_dodge::render::CanvasRenderer;
    use neon_dodge::sim::{GamePhase, GameState, TickInput, tick};

    /// Exclusive touch direction (left/right half of the canvas)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TouchDir {
        Left,
        Right,
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Option<CanvasRenderer>,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        key_left: bool,
        key_right: bool,
        touch_dir: Option<TouchDir>,
        /// False while game over; the loop stops rescheduling itself
        running: bool,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning) -> Self {
            Self {
                state: GameState::with_tuning(seed, tuning),
                renderer: None,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                key_left: false,
                key_right: false,
                touch_dir: None,
                running: true,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            // Keyboard and touch combine into one directional intent
            self.input.left = self.key_left || self.touch_dir == Some(TouchDir::Left);
            self.input.right = self.key_right || self.touch_dir == Some(TouchDir::Right);

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.clone();
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.dash = false;
            }

            if self.state.phase == GamePhase::GameOver && self.running {
                self.running = false;
                log::info!("Game over, final score: {}", self.state.score);
            }
        }

        /// Render the current frame
        fn render(&self) {
            if let Some(ref renderer) = self.renderer {
                renderer.draw(&self.state);
            }
        }

        /// Update score readout and restart button visibility in the DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&format!("Score: {}", self.state.score)));
            }

            if let Some(el) = document.get_element_by_id("restart-btn") {
                if self.state.phase == GamePhase::GameOver {
                    let _ = el.set_attribute("style", RESTART_SHOWN);
                } else {
                    let _ = el.set_attribute("style", RESTART_HIDDEN);
                }
            }
        }

        /// Reset game state for restart
        fn restart(&mut self) {
            self.state.reset();
            self.accumulator = 0.0;
            self.input = TickInput::default();
            self.touch_dir = None;
        }
    }

    const RESTART_SHOWN: &str =
        "display:block; position:fixed; left:50%; top:60%; transform:translateX(-50%); \
         font-size:18px; padding:8px 24px;";
    const RESTART_HIDDEN: &str = "display:none;";

    /// Find the host page's canvas, or create and attach one
    fn get_or_create_canvas(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
        if let Some(el) = document.get_element_by_id("canvas") {
            return el.dyn_into();
        }
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_id("canvas");
        canvas
            .set_attribute("style", "display:block; margin:0 auto; background:#000;")?;
        document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&canvas)?;
        Ok(canvas)
    }

    /// Find or create the score readout and restart button
    fn get_or_create_hud(document: &Document) -> Result<Element, JsValue> {
        if document.get_element_by_id("hud-score").is_none() {
            let el = document.create_element("div")?;
            el.set_id("hud-score");
            el.set_attribute(
                "style",
                "color:#fff; font:16px monospace; text-align:center; padding:4px;",
            )?;
            el.set_text_content(Some("Score: 0"));
            document
                .body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .append_child(&el)?;
        }

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            return Ok(btn);
        }
        let btn = document.create_element("button")?;
        btn.set_id("restart-btn");
        btn.set_text_content(Some("Restart"));
        btn.set_attribute("style", RESTART_HIDDEN)?;
        document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&btn)?;
        Ok(btn)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Neon Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas = get_or_create_canvas(&document)?;
        canvas.set_width(SURFACE_WIDTH as u32);
        canvas.set_height(SURFACE_HEIGHT as u32);
        let restart_btn = get_or_create_hud(&document)?;

        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(seed, Tuning::load());
        game.renderer = Some(CanvasRenderer::new(canvas.clone())?);
        let game = Rc::new(RefCell::new(game));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(&restart_btn, game.clone());

        request_animation_frame(game);

        log::info!("Neon Dodge running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" => g.key_left = true,
                    "ArrowRight" | "d" => g.key_right = true,
                    " " => {
                        event.prevent_default();
                        g.input.dash = true;
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" => g.key_left = false,
                    "ArrowRight" | "d" => g.key_right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start: left or right half of the canvas steers
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let dir = if x < rect.width() as f32 / 2.0 {
                        TouchDir::Left
                    } else {
                        TouchDir::Right
                    };
                    game.borrow_mut().touch_dir = Some(dir);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().touch_dir = None;
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(btn: &web_sys::Element, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let resume = {
                let mut g = game.borrow_mut();
                g.restart();
                let resume = !g.running;
                g.running = true;
                g.last_time = 0.0;
                log::info!("Game restarted");
                resume
            };
            if resume {
                request_animation_frame(game.clone());
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
            g.running
        };

        // Halt scheduling on game over; the restart button resumes the loop
        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_dodge::Tuning;
    use neon_dodge::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Neon Dodge (native) starting...");
    log::info!("Native mode is headless - build for wasm32 for the playable version");

    // Headless demo session: weave left and right, dash now and then
    let mut state = GameState::with_tuning(0xD0D6E, Tuning::load());
    let mut ticks = 0u64;
    while state.phase == GamePhase::Playing && ticks < 60 * 60 {
        let input = TickInput {
            left: (ticks / 120) % 2 == 0,
            right: (ticks / 120) % 2 == 1,
            dash: ticks % 300 == 0,
        };
        tick(&mut state, &input);
        ticks += 1;
    }

    match state.phase {
        GamePhase::GameOver => log::info!("Demo run over after {ticks} ticks, score {}", state.score),
        GamePhase::Playing => log::info!("Demo run survived {ticks} ticks, score {}", state.score),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
