//! Bouncing Sprite entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

    use bouncing_sprite::renderer::CanvasRenderer;
    use bouncing_sprite::sprite::{Sprite, SpriteError};
    use bouncing_sprite::{App, Settings};

    /// Host-side state for the browser loop
    struct Host {
        app: App,
        renderer: CanvasRenderer,
        last_time: f64,
    }

    impl Host {
        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;

            self.app.frame(dt);
            self.app.render(&mut self.renderer);
        }
    }

    /// Load the sprite image; `Err` means the glyph should be used
    async fn load_image(path: &str) -> Result<HtmlImageElement, SpriteError> {
        let image = HtmlImageElement::new().map_err(|e| SpriteError::unreadable(path, e))?;
        image.set_src(path);
        JsFuture::from(image.decode())
            .await
            .map_err(|e| SpriteError::unreadable(path, e))?;
        Ok(image)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bouncing Sprite starting...");

        let settings = Settings::load();
        settings.save();

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        document.set_title(&format!("Bouncing Sprite \u{2013} {}", settings.display_name));

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(settings.canvas_width);
        canvas.set_height(settings.canvas_height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // Try the image, fall back to the glyph
        let loaded = match settings.sprite_image_path.as_deref() {
            Some(path) => load_image(path).await,
            None => Err(SpriteError::NotFound(String::new())),
        };
        let natural_size = |_: &str| {
            loaded
                .as_ref()
                .map(|img| (img.natural_width(), img.natural_height()))
                .map_err(Clone::clone)
        };
        let sprite = Sprite::select(
            settings.sprite_image_path.as_deref(),
            &natural_size,
            settings.canvas_height,
            settings.glyph_sprite(),
        );
        let image = match (&sprite, loaded) {
            (Sprite::Image(_), Ok(img)) => Some(img),
            _ => None,
        };

        let seed = settings.seed_or_clock();
        let app = App::new(settings, sprite, seed);
        let host = Rc::new(RefCell::new(Host {
            app,
            renderer: CanvasRenderer::new(ctx, image),
            last_time: 0.0,
        }));

        setup_input_handlers(host.clone());
        setup_visibility_resync(host.clone());

        request_animation_frame(host);

        log::info!("Bouncing Sprite running!");
    }

    fn setup_input_handlers(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == " " {
                event.prevent_default();
                host.borrow_mut().app.toggle_pause();
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Coming back from a hidden tab shouldn't replay the time spent away
    fn setup_visibility_resync(host: Rc<RefCell<Host>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Visible {
                let mut h = host.borrow_mut();
                h.app.resync_clock();
                h.last_time = 0.0;
            }
        });
        let _ = document.add_event_listener_with_callback(
            "visibilitychange",
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(host, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(host: Rc<RefCell<Host>>, time: f64) {
        host.borrow_mut().update(time);
        request_animation_frame(host);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bouncing_sprite::renderer::LogRenderer;
    use bouncing_sprite::sprite::{FileDimensions, Sprite};
    use bouncing_sprite::{App, Settings};

    env_logger::init();
    log::info!("Bouncing Sprite (native, headless) starting...");

    let settings = Settings::load();
    let sprite = Sprite::select(
        settings.sprite_image_path.as_deref(),
        &FileDimensions,
        settings.canvas_height,
        settings.glyph_sprite(),
    );

    let ticks = headless_ticks(settings.ten_seconds_of_ticks());
    let seed = settings.seed_or_clock();
    let mut app = App::new(settings, sprite, seed);
    let mut renderer = LogRenderer::new();

    // One redraw per tick, like the browser loop at its target rate
    let mut recolors = 0;
    for _ in 0..ticks {
        recolors += app.run_ticks(1).recolors;
        app.render(&mut renderer);
    }

    log::info!(
        "Ran {} ticks: sprite at ({:.0}, {:.0}), {} recolors, label {}",
        app.state.time_ticks,
        app.state.sprite.pos.x,
        app.state.sprite.pos.y,
        recolors,
        app.state.label_color.to_hex()
    );
}

/// Tick count for the headless run: `BOUNCE_TICKS`, or `default`
#[cfg(not(target_arch = "wasm32"))]
fn headless_ticks(default: u32) -> u32 {
    match std::env::var("BOUNCE_TICKS") {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("BOUNCE_TICKS={raw} is not a tick count ({e}), using {default}");
            default
        }),
        Err(_) => default,
    }
}
