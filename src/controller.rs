//! Top-level controller
//!
//! Owns every piece of mutable demo state. UI events arrive as `Command`s and
//! run strictly between frames; each frame steps the simulation once and then
//! renders it.

use crate::platform::SurfaceSize;
use crate::renderer::{self, DrawSurface};
use crate::settings::Settings;
use crate::sim::{Field, ParameterStore, PhysicsState, Preset, StepInput, step};

/// A UI action
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Preset selector changed (selector label, "Custom" included)
    SelectPreset(String),
    /// A numeric field was edited
    EditField(Field, String),
    /// Launch once with the current fields and turn looping off
    Test,
    /// Back to Earth with the ball at the bottom
    Reset,
    ToggleLoop,
}

pub struct Controller {
    settings: Settings,
    store: ParameterStore,
    state: PhysicsState,
    surface: SurfaceSize,
    loop_enabled: bool,
    running: bool,
}

impl Controller {
    /// Ball at bottom centre, Earth preset applied
    pub fn new(settings: Settings, surface: SurfaceSize) -> Self {
        let state = PhysicsState::new(settings.ball, surface);
        let mut controller = Self {
            settings,
            store: ParameterStore::new(),
            state,
            surface,
            loop_enabled: false,
            running: true,
        };
        controller.apply_user_parameters();
        controller
    }

    pub fn dispatch(&mut self, command: Command) {
        log::debug!("Command: {:?}", command);
        match command {
            Command::SelectPreset(name) => self.select_preset(&name),
            Command::EditField(field, text) => self.store.edit_field(field, &text),
            Command::Test => self.test(),
            Command::Reset => self.reset(),
            Command::ToggleLoop => {
                self.toggle_loop();
            }
        }
    }

    /// Preset selector handler: fill the fields, then apply them immediately
    /// so a running loop picks up the new values
    pub fn select_preset(&mut self, name: &str) {
        self.store.select_preset(name);
        self.apply_user_parameters();
    }

    /// Commit the fields and set the ball's vertical velocity to the
    /// launch velocity (assigned, not added)
    pub fn apply_user_parameters(&mut self) {
        let params = self.store.apply_user_parameters();
        self.state.vy = params.launch_velocity;
    }

    pub fn test(&mut self) {
        self.apply_user_parameters();
        self.loop_enabled = false;
    }

    pub fn reset(&mut self) {
        self.state.place_at_bottom(self.surface);
        self.store.select(Preset::Earth);
        self.apply_user_parameters();
        log::info!("Reset");
    }

    /// Flip looping, returning the new state
    pub fn toggle_loop(&mut self) -> bool {
        self.loop_enabled = !self.loop_enabled;
        log::info!("{}", self.loop_label());
        self.loop_enabled
    }

    /// Label for the loop button
    pub fn loop_label(&self) -> &'static str {
        if self.loop_enabled {
            "Loop On"
        } else {
            "Loop Off"
        }
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        if size != self.surface {
            log::debug!("Surface resized to {}x{}", size.width, size.height);
            self.surface = size;
        }
    }

    /// Step the simulation once without drawing
    pub fn advance(&mut self) {
        let params = self.store.committed();
        let input = StepInput {
            gravity: params.gravity,
            restitution: params.restitution,
            relaunch_speed: self.store.relaunch_speed(),
            loop_enabled: self.loop_enabled,
        };
        step(&mut self.state, &input, self.surface, self.settings.frame_dt);
    }

    /// One animation frame: resize, step, render, in that order.
    /// A zero-area surface (hidden or collapsed canvas) skips the frame.
    pub fn frame<S: DrawSurface + ?Sized>(&mut self, size: SurfaceSize, surface: &mut S) {
        self.resize(size);
        if self.surface.is_empty() {
            log::trace!("Skipping frame on empty surface");
            return;
        }
        self.advance();
        renderer::render(surface, &self.state, &self.settings, self.surface);
    }

    /// Stop requesting frames
    pub fn stop(&mut self) {
        self.running = false;
        log::info!("Stopped after {} ticks", self.state.ticks);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn loop_enabled(&self) -> bool {
        self.loop_enabled
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    pub fn state(&self) -> &PhysicsState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }
}
