//! Bridge Builder entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent};

    use bridge_builder::audio::{AudioManager, SoundEffect};
    use bridge_builder::platform::{BrowserClock, Clock, DisplayRect, PlatformError, to_logical};
    use bridge_builder::renderer::{CanvasRenderer, ImageBank, SceneInput, build_scene};
    use bridge_builder::sim::{Command, MATERIALS, Session, TestStep, advance_test, apply};
    use bridge_builder::ui::Hud;
    use bridge_builder::{Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session,
        renderer: CanvasRenderer,
        settings: Settings,
        audio: AudioManager,
        clock: BrowserClock,
        document: Document,
        /// Raised by commands and image loads; forces a HUD refresh
        dirty: Rc<Cell<bool>>,
        last_hud: Option<Hud>,
    }

    impl Game {
        /// Route one player command through the session
        fn command(&mut self, command: Command) {
            let now = self.clock.now();
            let result = apply(&mut self.session, command, now);
            if let Err(e) = &result {
                log::debug!("Command {:?} rejected: {}", command, e);
            }
            if let Some(effect) = SoundEffect::for_command(&result) {
                self.audio.play(effect);
            }
            self.dirty.set(true);
        }

        fn update(&mut self) {
            let now = self.clock.now();
            if let TestStep::Finished(notice) = advance_test(&mut self.session, now) {
                if let Some(effect) = SoundEffect::for_notice(&notice) {
                    self.audio.play(effect);
                }
                self.dirty.set(true);
            }
        }

        /// Render the current frame
        fn render(&self) {
            let now = self.clock.now();
            let input = SceneInput::new(
                &self.session,
                self.renderer.images.sizes(),
                &self.settings,
                now,
            );
            self.renderer.render(&build_scene(&input));
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            if !self.dirty.replace(false) && !self.session.is_testing() {
                return;
            }
            let hud = Hud::from_session(&self.session);
            if self.last_hud.as_ref() != Some(&hud) {
                hud.apply(&self.document);
                self.last_hud = Some(hud);
            }
        }
    }

    pub async fn run() -> Result<(), PlatformError> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Bridge Builder starting...");

        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        let document = window.document().ok_or(PlatformError::NoDocument)?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or(PlatformError::MissingElement("canvas"))?
            .dyn_into()
            .map_err(|_| PlatformError::WrongElement("canvas"))?;

        let settings = Settings::load();
        let tuning = Tuning::load();
        let dirty = Rc::new(Cell::new(true));
        let renderer = CanvasRenderer::new(&canvas, ImageBank::load(dirty.clone()))?;

        let game = Rc::new(RefCell::new(Game {
            session: Session::new(tuning),
            renderer,
            audio: AudioManager::new(settings.sound),
            settings,
            clock: BrowserClock,
            document: document.clone(),
            dirty,
            last_hud: None,
        }));

        setup_canvas_click(&canvas, game.clone());
        setup_buttons(&document, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Bridge Builder running!");
        Ok(())
    }

    fn setup_canvas_click(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let display = DisplayRect {
                left: rect.left() as f32,
                top: rect.top() as f32,
                width: rect.width() as f32,
                height: rect.height() as f32,
            };
            let client = Vec2::new(event.client_x() as f32, event.client_y() as f32);
            let pos = to_logical(client, display);
            game.borrow_mut().command(Command::Click(pos));
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_click(document: &Document, id: &str, game: Rc<RefCell<Game>>, command: Command) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("Button #{} missing from page", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            game.borrow_mut().command(command);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        for i in 0..MATERIALS.len() {
            on_click(
                document,
                &format!("material-{}", i),
                game.clone(),
                Command::SelectMaterial(i),
            );
        }
        on_click(document, "test-btn", game.clone(), Command::Test);
        on_click(document, "reset-btn", game.clone(), Command::Reset);
        on_click(document, "next-level-btn", game, Command::NextLevel);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping game loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Bridge Builder failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bridge Builder (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    demo_crossing();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Build a steel arch across the span and send the first two vehicles over it
#[cfg(not(target_arch = "wasm32"))]
fn demo_crossing() {
    use bridge_builder::platform::{Clock, ManualClock};
    use bridge_builder::sim::{CONNECTION_POINTS, Command, Session, TestStep, advance_test, apply};
    use bridge_builder::ui::Hud;
    use bridge_builder::Tuning;

    let clock = ManualClock::new(0.0);
    let mut session = Session::new(Tuning::load());

    // Steel arch through every point, bank to bank
    let route = [0, 1, 1, 2, 2, 3, 3, 4, 4, 5];
    for pair in route.chunks(2) {
        for &i in pair {
            if let Err(e) = apply(&mut session, Command::Click(CONNECTION_POINTS[i]), clock.now()) {
                log::warn!("Click on point {} refused: {}", i, e);
            }
        }
    }
    log::info!(
        "Built {} beams, {} left in budget",
        session.beams.len(),
        session.budget
    );

    for _ in 0..2 {
        if let Err(e) = apply(&mut session, Command::Test, clock.now()) {
            log::warn!("Test refused: {}", e);
            return;
        }
        loop {
            clock.advance(1000.0 / 60.0);
            match advance_test(&mut session, clock.now()) {
                TestStep::Running(_) => continue,
                TestStep::Finished(notice) => {
                    println!("{}", notice);
                    break;
                }
                TestStep::Idle => break,
            }
        }
    }

    let hud = Hud::from_session(&session);
    println!(
        "Level {} | budget {} | score {} | next: {} {}",
        hud.level, hud.budget, hud.score, hud.vehicle_icon, hud.vehicle_name
    );
}
