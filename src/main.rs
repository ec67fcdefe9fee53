//! Grid Hopper entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use grid_hopper::assets::AssetStore;
    use grid_hopper::consts::*;
    use grid_hopper::renderer::Renderer;
    use grid_hopper::sim::{Direction, GameState, tick};
    use grid_hopper::GameConfig;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Option<Renderer>,
        assets: Option<AssetStore>,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        fn new(seed: u64, config: GameConfig) -> Self {
            Self {
                state: GameState::with_config(seed, config),
                renderer: None,
                assets: None,
                accumulator: 0.0,
                last_time: 0.0,
            }
        }

        /// Run simulation ticks for one frame's elapsed time
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        /// Render the current frame
        fn render(&self) {
            if let (Some(renderer), Some(assets)) = (&self.renderer, &self.assets) {
                renderer.draw(&self.state, assets);
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Grid Hopper starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let config = GameConfig::load();
        // Write the effective config back so a first run (or a rejected
        // stored config) leaves editable defaults in LocalStorage
        config.save();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, config)));

        log::info!("Game initialized with seed: {}", seed);

        let renderer = Renderer::new(&canvas).expect("no 2d rendering context");
        let assets = AssetStore::load().await.expect("failed to load images");
        {
            let mut g = game.borrow_mut();
            g.renderer = Some(renderer);
            g.assets = Some(assets);
        }

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Grid Hopper running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        // Keyboard: the original listens on keyup, one move per key release
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if let Some(direction) = Direction::from_key(&event.key()) {
                game.borrow_mut().state.handle_input(direction);
            }
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
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
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use grid_hopper::consts::SIM_DT;
    use grid_hopper::sim::{Direction, GameState, tick};

    env_logger::init();
    log::info!("Grid Hopper (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    // Short headless run: walk the player toward the goal row while the
    // enemies cross, then report where everything ended up.
    let mut state = GameState::new(0xC0FFEE);
    for step in 0..600 {
        if step % 60 == 0 {
            state.handle_input(Direction::Up);
        }
        tick(&mut state, SIM_DT);
    }

    log::info!(
        "After {} ticks: player at ({}, {}), clock {:.2}s",
        state.time_ticks,
        state.player.col,
        state.player.row,
        state.clock
    );
    for enemy in &state.enemies {
        log::info!("enemy row {} at x {:.1} ({:.0} px/s)", enemy.row, enemy.pos.x, enemy.speed);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
