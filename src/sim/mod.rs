//! Deterministic simulation module
//!
//! Physics and parameter logic live here. This module must stay pure:
//! - Fixed timestep only (nominal dt, never wall-clock)
//! - No rendering or platform dependencies beyond surface dimensions

pub mod params;
pub mod state;
pub mod tick;

pub use params::{Field, FieldError, ParameterStore, Parameters, Preset, PresetSelection, parse_field};
pub use state::PhysicsState;
pub use tick::{StepInput, step};
