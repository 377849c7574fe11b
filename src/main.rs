//! Classic Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use classic_pong::consts::*;
    use classic_pong::renderer::{RenderState, shapes};
    use classic_pong::sim::{GameState, InputCommand, InputQueue, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputQueue,
        render_state: Option<RenderState>,
        /// Canvas CSS size, for pointer to field mapping
        canvas_size: (f32, f32),
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                input: InputQueue::new(),
                render_state: None,
                canvas_size: (FIELD_WIDTH, FIELD_HEIGHT),
            }
        }

        fn set_canvas_size(&mut self, w: f32, h: f32) {
            if w > 0.0 && h > 0.0 {
                self.canvas_size = (w, h);
            }
        }

        /// Convert a canvas-space pointer y to field space
        fn pointer_to_field_y(&self, y: f32) -> f32 {
            y * self.state.field.height / self.canvas_size.1
        }

        /// Run one simulation step
        fn update(&mut self) {
            tick(&mut self.state, &mut self.input);
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = shapes::scene(&self.state);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Classic Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        game.borrow_mut()
            .set_canvas_size(client_w as f32, client_h as f32);

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            (FIELD_WIDTH, FIELD_HEIGHT),
        )
        .await;
        game.borrow_mut().render_state = Some(render_state);

        // Set up input handlers
        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Classic Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let w = canvas_clone.client_width() as f32;
                let h = canvas_clone.client_height() as f32;
                g.set_canvas_size(w, h);
                let y = g.pointer_to_field_y(event.offset_y() as f32);
                g.input.push(InputCommand::PointerMoved { y });
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    let w = canvas_clone.client_width() as f32;
                    let h = canvas_clone.client_height() as f32;
                    g.set_canvas_size(w, h);
                    let rect = canvas_clone.get_bounding_client_rect();
                    let y = g.pointer_to_field_y(touch.client_y() as f32 - rect.top() as f32);
                    g.input.push(InputCommand::PointerMoved { y });
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, _time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update();
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
    use std::time::{SystemTime, UNIX_EPOCH};

    use classic_pong::sim::{GameState, InputCommand, InputQueue, tick};

    env_logger::init();
    log::info!("Classic Pong (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Run tests
    println!("\nRunning rebound checks...");
    check_paddle_rebound();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Simulating 600 frames with seed: {}", seed);

    let mut state = GameState::new(seed);
    let mut input = InputQueue::new();
    for _ in 0..600 {
        // Track the ball so the demo rallies instead of feeding every serve to the AI
        input.push(InputCommand::PointerMoved {
            y: state.ball.pos.y,
        });
        tick(&mut state, &mut input);

        if state.time_ticks % 120 == 0 {
            log::info!(
                "tick {}: ball at ({:.1}, {:.1})",
                state.time_ticks,
                state.ball.pos.x,
                state.ball.pos.y
            );
        }
    }

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn check_paddle_rebound() {
    use classic_pong::consts::BALL_SPEED;
    use classic_pong::sim::{Paddle, Side, rebound_velocity};

    let paddle = Paddle::new(20.0, 250.0);
    let vel = rebound_velocity(paddle.center_y(), &paddle, BALL_SPEED, Side::Left);
    assert_eq!(vel.x, BALL_SPEED, "center hit should rebound straight back");
    assert_eq!(vel.y, 0.0);
    println!("✓ Paddle rebound checks passed!");
}
