//! Orb Arena entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use orb_arena::GameConfig;
    use orb_arena::renderer::{CanvasSurface, Surface, render};
    use orb_arena::sim::{GameEvent, GameSession, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        surface: CanvasSurface,
        input: TickInput,
    }

    impl Game {
        /// Run one simulation tick, then draw it
        fn frame(&mut self) {
            tick(&mut self.session, &self.input);

            // Clear one-shot inputs after processing
            self.input.restart = false;
            self.input.forfeit = false;

            for event in &self.session.events {
                match event {
                    GameEvent::Won { score } => log::info!("You win! Score: {}", score),
                    GameEvent::Lost { score } => log::info!("Game over. Score: {}", score),
                    GameEvent::Restarted => log::info!("Restarted"),
                    _ => {}
                }
            }

            render(&self.session, &mut self.surface);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Orb Arena starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the canvas to its container once; the arena never changes mid-session
        let (client_w, client_h) = match document.get_element_by_id("gameContainer") {
            Some(container) => (container.client_width(), container.client_height()),
            None => (canvas.client_width(), canvas.client_height()),
        };
        canvas.set_width(client_w.max(0) as u32);
        canvas.set_height(client_h.max(0) as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let surface = CanvasSurface::new(canvas.clone(), ctx);
        let (width, height) = surface.extent();

        let seed = js_sys::Date::now() as u64;
        let session = match GameSession::new(GameConfig::load_local(), width, height, seed) {
            Ok(session) => session,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            session,
            surface,
            input: TickInput::default(),
        }));

        setup_restart_listener(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Orb Arena running!");
    }

    /// Clicks request a restart; the session ignores it unless the run has ended
    fn setup_restart_listener(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut g = game.borrow_mut();
            if g.session.is_over() {
                g.input.restart = true;
            }
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;

    use orb_arena::GameConfig;
    use orb_arena::renderer::{RecordingSurface, render};
    use orb_arena::sim::{GameEvent, GameSession, TickInput, tick};

    /// Run Orb Arena without a display
    #[derive(Parser, Debug)]
    #[command(name = "orb-arena", version, about)]
    pub struct Args {
        /// RNG seed
        #[arg(long, default_value_t = 1)]
        pub seed: u64,

        /// Number of ticks to simulate
        #[arg(long, default_value_t = 3600)]
        pub ticks: u64,

        /// Arena width
        #[arg(long, default_value_t = 800.0)]
        pub width: f32,

        /// Arena height
        #[arg(long, default_value_t = 600.0)]
        pub height: f32,

        /// JSON config file (defaults apply to missing fields)
        #[arg(long)]
        pub config: Option<PathBuf>,

        /// Forfeit the run at this tick
        #[arg(long)]
        pub forfeit_at: Option<u64>,
    }

    pub fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
        let config = match &args.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        let mut session = GameSession::new(config, args.width, args.height, args.seed)?;
        let mut surface = RecordingSurface::new(args.width, args.height);
        let mut restarts_left = 1;
        let mut input = TickInput::default();

        for frame in 0..args.ticks {
            input.forfeit = args.forfeit_at == Some(frame);
            tick(&mut session, &input);
            input = TickInput::default();

            for event in &session.events {
                match event {
                    GameEvent::Spawned { id } => log::debug!("[{}] spawned {}", frame, id),
                    GameEvent::Absorbed { id, avatar_radius } => {
                        log::debug!("[{}] absorbed {} -> radius {}", frame, id, avatar_radius)
                    }
                    GameEvent::Won { score } => log::info!("[{}] won, score {}", frame, score),
                    GameEvent::Lost { score } => log::info!("[{}] lost, score {}", frame, score),
                    GameEvent::Restarted => log::info!("[{}] restarted", frame),
                }
            }

            render(&session, &mut surface);

            if session.is_over() && restarts_left > 0 {
                restarts_left -= 1;
                input.restart = true;
            }
        }

        let outcome = match session.outcome() {
            Some(outcome) => format!("{:?}", outcome),
            None => "Running".to_string(),
        };
        println!(
            "outcome={} score={} radius={} entities={} ticks={} drawn_circles={}",
            outcome,
            session.score,
            session.avatar.body.radius,
            session.entities.len(),
            session.time_ticks,
            surface.circle_count()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;

    env_logger::init();
    log::info!("Orb Arena (headless) starting...");
    headless::run(headless::Args::parse())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
