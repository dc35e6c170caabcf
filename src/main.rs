//! Bounce Lab entry point
//!
//! In the browser this wires the page controls to the controller and runs the
//! animation loop. Natively it runs the same controller headless.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_demo {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

    use bounce_lab::platform::web::{
        CANVAS_ID, Controls, element_by_id, resize_canvas_to_display_size, settings_from_page,
    };
    use bounce_lab::sim::Field;
    use bounce_lab::{Command, Controller};

    /// Demo instance holding all state
    struct Demo {
        controller: Controller,
        window: Window,
        canvas: HtmlCanvasElement,
        context: CanvasRenderingContext2d,
        controls: Controls,
    }

    impl Demo {
        fn dispatch(&mut self, command: Command) {
            self.controller.dispatch(command);
            self.controls.sync(&self.controller);
        }

        fn frame(&mut self) {
            let size = resize_canvas_to_display_size(&self.window, &self.canvas);
            self.controller.frame(size, &mut self.context);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Bounce Lab starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = element_by_id(&document, CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no simulation canvas"))?;
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let settings = settings_from_page(&document);
        let size = resize_canvas_to_display_size(&window, &canvas);
        let controller = Controller::new(settings, size);
        let controls = Controls::find(&document);
        controls.sync(&controller);

        log::info!("Surface {}x{}", size.width, size.height);

        let demo = Rc::new(RefCell::new(Demo {
            controller,
            window: window.clone(),
            canvas,
            context,
            controls: controls.clone(),
        }));

        setup_control_handlers(&controls, demo.clone());
        setup_teardown(&window, demo.clone());

        request_animation_frame(demo);

        log::info!("Bounce Lab running!");
        Ok(())
    }

    fn listen<T: AsRef<web_sys::EventTarget>>(
        target: &T,
        event: &str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        if let Err(e) = target
            .as_ref()
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to add {event} listener: {:?}", e);
        }
        closure.forget();
    }

    fn setup_control_handlers(controls: &Controls, demo: Rc<RefCell<Demo>>) {
        // Preset dropdown: fill the fields and apply them right away
        if let Some(select) = &controls.preset {
            let demo = demo.clone();
            let select_clone = select.clone();
            listen(select, "change", move |_event| {
                let name = select_clone.value();
                demo.borrow_mut().dispatch(Command::SelectPreset(name));
            });
        }

        // Any field edit switches the selector to Custom
        for field in Field::ALL {
            if let Some(input) = controls.input(field) {
                let demo = demo.clone();
                let input_clone = input.clone();
                listen(input, "input", move |_event| {
                    let text = input_clone.value();
                    demo.borrow_mut().dispatch(Command::EditField(field, text));
                });
            }
        }

        let buttons = [
            (&controls.test_btn, Command::Test),
            (&controls.reset_btn, Command::Reset),
            (&controls.loop_btn, Command::ToggleLoop),
        ];
        for (button, command) in buttons {
            if let Some(btn) = button {
                let demo = demo.clone();
                listen(btn, "click", move |_event| {
                    demo.borrow_mut().dispatch(command.clone());
                });
            }
        }
    }

    fn setup_teardown(window: &Window, demo: Rc<RefCell<Demo>>) {
        listen(window, "pagehide", move |_event| {
            demo.borrow_mut().controller.stop();
        });
    }

    fn request_animation_frame(demo: Rc<RefCell<Demo>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(demo);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn frame_loop(demo: Rc<RefCell<Demo>>) {
        {
            let mut d = demo.borrow_mut();
            if !d.controller.is_running() {
                return;
            }
            d.frame();
        }

        request_animation_frame(demo);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_demo::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::error::Error;
    use std::path::PathBuf;

    use clap::Parser;

    use bounce_lab::platform::SurfaceSize;
    use bounce_lab::renderer::DrawLog;
    use bounce_lab::sim::Field;
    use bounce_lab::{Command, Controller, Settings};

    /// Run the bouncing ball without a browser and print where it ends up
    #[derive(Parser, Debug)]
    #[command(about = "Headless Bounce Lab runner", version)]
    pub struct Options {
        /// Preset to select before running (Moon, Earth, "Critical Damping", ...)
        pub preset: Option<String>,

        /// Number of frames to simulate
        #[arg(long, default_value_t = 600)]
        pub frames: u32,

        /// Relaunch the ball whenever it comes to rest
        #[arg(long = "loop")]
        pub loop_enabled: bool,

        /// Edit a field, then apply (gravity|restitution|velocity=TEXT)
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_edit)]
        pub edits: Vec<(Field, String)>,

        /// Surface size in device pixels
        #[arg(long, value_name = "WxH", default_value = "800x600", value_parser = parse_size)]
        pub size: SurfaceSize,

        /// Settings JSON file
        #[arg(long = "settings", value_name = "PATH")]
        pub settings_path: Option<PathBuf>,
    }

    fn parse_edit(s: &str) -> Result<(Field, String), String> {
        let (name, text) = s
            .split_once('=')
            .ok_or_else(|| format!("expected FIELD=VALUE, got {s:?}"))?;
        let field = Field::from_name(name).ok_or_else(|| format!("unknown field: {name}"))?;
        Ok((field, text.to_string()))
    }

    fn parse_size(s: &str) -> Result<SurfaceSize, String> {
        let (w, h) = s
            .split_once('x')
            .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
        let w: f32 = w.parse().map_err(|_| format!("bad width: {w}"))?;
        let h: f32 = h.parse().map_err(|_| format!("bad height: {h}"))?;
        Ok(SurfaceSize::new(w, h))
    }

    pub fn run(opts: Options) -> Result<(), Box<dyn Error>> {
        let settings = match &opts.settings_path {
            Some(path) => Settings::from_json_or_default(&std::fs::read_to_string(path)?),
            None => Settings::default(),
        };

        let mut controller = Controller::new(settings, opts.size);
        if let Some(preset) = &opts.preset {
            controller.dispatch(Command::SelectPreset(preset.clone()));
        }
        if !opts.edits.is_empty() {
            for (field, text) in &opts.edits {
                controller.dispatch(Command::EditField(*field, text.clone()));
            }
            controller.dispatch(Command::Test);
        }
        if opts.loop_enabled {
            controller.dispatch(Command::ToggleLoop);
        }

        let mut draw_log = DrawLog::default();
        let mut draw_calls = 0usize;
        for _ in 0..opts.frames {
            controller.frame(opts.size, &mut draw_log);
            draw_calls += draw_log.calls.len();
            draw_log.reset();
        }
        controller.stop();

        let state = controller.state();
        println!(
            "{} | {} frames at dt {}, {} draw calls | resting: {}",
            controller.store().selection().label(),
            state.ticks,
            controller.settings().frame_dt,
            draw_calls,
            state.is_resting(opts.size.height)
        );
        println!("{}", serde_json::to_string_pretty(state)?);
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let opts = Options::try_parse_from(["bounce-lab"]).unwrap();
            assert_eq!(opts.preset, None);
            assert_eq!(opts.frames, 600);
            assert!(!opts.loop_enabled);
            assert!(opts.edits.is_empty());
            assert_eq!(opts.size, SurfaceSize::new(800.0, 600.0));
            assert_eq!(opts.settings_path, None);
        }

        #[test]
        fn test_all_options() {
            let opts = Options::try_parse_from([
                "bounce-lab",
                "Moon",
                "--frames",
                "120",
                "--loop",
                "--set",
                "gravity=3.5",
                "--set",
                "cor=0.9",
                "--size",
                "640x480",
                "--settings",
                "demo.json",
            ])
            .unwrap();
            assert_eq!(opts.preset.as_deref(), Some("Moon"));
            assert_eq!(opts.frames, 120);
            assert!(opts.loop_enabled);
            assert_eq!(
                opts.edits,
                vec![
                    (Field::Gravity, "3.5".to_string()),
                    (Field::Restitution, "0.9".to_string())
                ]
            );
            assert_eq!(opts.size, SurfaceSize::new(640.0, 480.0));
            assert_eq!(opts.settings_path, Some(PathBuf::from("demo.json")));
        }

        #[test]
        fn test_rejects_bad_values() {
            assert!(Options::try_parse_from(["bounce-lab", "--set", "mass=3"]).is_err());
            assert!(Options::try_parse_from(["bounce-lab", "--set", "gravity"]).is_err());
            assert!(Options::try_parse_from(["bounce-lab", "--size", "800"]).is_err());
            assert!(Options::try_parse_from(["bounce-lab", "--frames", "lots"]).is_err());
            assert!(Options::try_parse_from(["bounce-lab", "--bogus"]).is_err());
        }

        #[test]
        fn test_run_with_edits() {
            let opts = Options::try_parse_from([
                "bounce-lab",
                "Earth",
                "--frames",
                "10",
                "--set",
                "velocity=2",
            ])
            .unwrap();
            run(opts).unwrap();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    env_logger::init();
    log::info!("Bounce Lab (headless) starting...");

    let opts = headless::Options::parse();
    match headless::run(opts) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
