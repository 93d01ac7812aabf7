//! Liquid Folio entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent, Window};

    use liquid_folio::page;
    use liquid_folio::renderer::CanvasSurface;
    use liquid_folio::sim::{FluidState, InputEvent, frame};
    use liquid_folio::Settings;

    const CANVAS_ID: &str = "fluid-canvas";
    const SETTINGS_ATTR: &str = "data-fluid-settings";

    /// Animation instance shared by the frame loop and event handlers
    struct App {
        state: FluidState,
        surface: CanvasSurface,
    }

    impl App {
        fn handle(&mut self, event: InputEvent) {
            self.state.handle_input(event, &mut self.surface);
        }

        fn fit_to_window(&mut self, window: &Window) {
            let (width, height) = viewport_size(window);
            self.handle(InputEvent::Resize { width, height });
        }
    }

    fn viewport_size(window: &Window) -> (u32, u32) {
        let dim = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
        };
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {e}").into());
        }

        log::info!("Liquid Folio starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let pending = page::dom::install(&window, &document)?;

        // The canvas may not be laid out yet; wire the animation on load
        if document.ready_state() == "complete" {
            on_load(&window, &document, pending)?;
        } else {
            let w = window.clone();
            let doc = document.clone();
            let closure = Closure::once(move |_event: web_sys::Event| {
                if let Err(e) = on_load(&w, &doc, pending) {
                    log::error!("Startup failed: {:?}", e);
                }
            });
            window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn on_load(
        window: &Window,
        document: &Document,
        pending: page::dom::PendingEffects,
    ) -> Result<(), JsValue> {
        page::dom::on_load(window, document, pending)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or("no fluid canvas")?
            .dyn_into()?;

        let settings = canvas
            .get_attribute(SETTINGS_ATTR)
            .map(|json| Settings::from_json_or_default(&json))
            .unwrap_or_default();

        let seed = js_sys::Date::now() as u64;
        let (width, height) = viewport_size(window);
        let surface = CanvasSurface::new(canvas)?;
        let app = Rc::new(RefCell::new(App {
            state: FluidState::new(seed, settings, width, height),
            surface,
        }));
        app.borrow_mut().fit_to_window(window);

        log::info!("Fluid canvas initialized with seed: {}", seed);

        setup_input_handlers(window, document, app.clone())?;
        request_animation_frame(app);

        log::info!("Liquid Folio running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &Window,
        document: &Document,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        // Pointer move: maybe leave a droplet behind
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                app.borrow_mut().handle(InputEvent::PointerMove(pos));
            });
            document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Click: ring plus a burst of droplets
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                app.borrow_mut().handle(InputEvent::Click(pos));
            });
            document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Viewport resize
        {
            let w = window.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().fit_to_window(&w);
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            animation_loop(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed, animation stopped: {:?}", e);
            return;
        }
        closure.forget();
    }

    fn animation_loop(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            let App { state, surface } = &mut *a;
            frame(state, surface);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run().inspect_err(|e| log::error!("Liquid Folio failed to start: {:?}", e))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Liquid Folio (native) starting...");
    log::info!("Native mode runs the simulation headless - serve the wasm build for the page");

    headless::run(rand::random(), 1200);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use liquid_folio::renderer::RecordingSurface;
    use liquid_folio::sim::{FluidState, InputEvent, frame};
    use liquid_folio::Settings;

    const WIDTH: u32 = 1280;
    const HEIGHT: u32 = 720;

    /// Drive the simulation with a synthetic pointer for `frames` frames
    pub fn run(seed: u64, frames: u64) {
        let mut state = FluidState::new(seed, Settings::default(), WIDTH, HEIGHT);
        let mut surface = RecordingSurface::new(WIDTH, HEIGHT);
        let center = Vec2::new(WIDTH as f32, HEIGHT as f32) / 2.0;

        let mut spawned = 0;
        let mut removed = 0;
        let mut peak = 0;
        let mut commands = 0;

        for i in 0..frames {
            // Pointer circles the center, clicking every two seconds
            let t = i as f32 / 60.0;
            let pointer = center + liquid_folio::polar_to_cartesian(250.0, t * 1.5);
            spawned += state.handle_input(InputEvent::PointerMove(pointer), &mut surface);
            if i % 120 == 0 {
                spawned += state.handle_input(InputEvent::Click(pointer), &mut surface);
            }
            if i == frames / 2 {
                state.handle_input(
                    InputEvent::Resize {
                        width: WIDTH / 2,
                        height: HEIGHT / 2,
                    },
                    &mut surface,
                );
            }

            let stats = frame(&mut state, &mut surface);
            removed += stats.removed;
            peak = peak.max(stats.live);
            commands += surface.drain().len();

            if i % 60 == 0 {
                log::debug!(
                    "frame {}: {} live, {} links",
                    i,
                    stats.live,
                    stats.links
                );
            }
        }

        log::info!(
            "Ran {} frames (seed {}): {} spawned, {} expired, peak {} live, {} draw calls",
            frames,
            seed,
            spawned,
            removed,
            peak,
            commands
        );
        println!(
            "✓ {} frames, {} entities still live",
            frames,
            state.entity_count()
        );
    }
}
