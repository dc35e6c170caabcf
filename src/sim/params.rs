//! Presets, editable fields and the committed simulation parameters
//!
//! The UI edits three text fields. Picking a named preset fills all three;
//! editing any one of them switches the selection to Custom. Nothing reaches
//! the simulation until `apply_user_parameters` parses and clamps the fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named parameter presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    Moon,
    #[default]
    Earth,
    CriticalDamping,
    OverDamping,
    UnderDamping,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Moon,
        Preset::Earth,
        Preset::CriticalDamping,
        Preset::OverDamping,
        Preset::UnderDamping,
    ];

    /// Display name, as used by the preset selector
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Moon => "Moon",
            Preset::Earth => "Earth",
            Preset::CriticalDamping => "Critical Damping",
            Preset::OverDamping => "Over Damping",
            Preset::UnderDamping => "Under Damping",
        }
    }

    /// Look up a preset by display name (case-insensitive, `-`/`_` as spaces)
    pub fn from_name(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().to_lowercase() == normalized)
    }

    /// Gravity, restitution and launch velocity for this preset
    pub fn parameters(&self) -> Parameters {
        let (gravity, restitution, launch_velocity) = match self {
            Preset::Moon => (1.62, 0.5, 4.5),
            Preset::Earth => (9.8, 0.5, 10.0),
            Preset::CriticalDamping => (9.8, 0.99, 10.0),
            Preset::OverDamping => (9.8, 0.01, 10.0),
            Preset::UnderDamping => (9.8, 0.5, 10.0),
        };
        Parameters {
            gravity,
            restitution,
            launch_velocity,
        }
    }
}

/// What the preset selector currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresetSelection {
    Preset(Preset),
    /// At least one field was edited since the last preset selection or reset
    Custom,
}

impl PresetSelection {
    pub const CUSTOM_LABEL: &'static str = "Custom";

    pub fn label(&self) -> &'static str {
        match self {
            PresetSelection::Preset(p) => p.as_str(),
            PresetSelection::Custom => Self::CUSTOM_LABEL,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, PresetSelection::Custom)
    }
}

/// One of the three editable numeric fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Gravity,
    Restitution,
    Velocity,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Gravity, Field::Restitution, Field::Velocity];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Gravity => "gravity",
            Field::Restitution => "restitution",
            Field::Velocity => "velocity",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "gravity" | "g" => Some(Field::Gravity),
            "restitution" | "cor" => Some(Field::Restitution),
            "velocity" | "v" => Some(Field::Velocity),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Gravity => 0,
            Field::Restitution => 1,
            Field::Velocity => 2,
        }
    }
}

/// Field text that does not parse to a finite number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} is not a finite number: {text:?}", .field.as_str())]
pub struct FieldError {
    pub field: Field,
    pub text: String,
}

/// Parse field text, rejecting anything that is not a finite number
pub fn parse_field(field: Field, text: &str) -> Result<f32, FieldError> {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FieldError {
            field,
            text: text.to_string(),
        })
}

/// Committed, ball-facing parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Downward acceleration, always >= 0 once committed
    pub gravity: f32,
    /// Coefficient of restitution, always in [0, 1] once committed
    pub restitution: f32,
    /// Initial and relaunch speed (relaunch applies it upward)
    pub launch_velocity: f32,
}

impl Default for Parameters {
    fn default() -> Self {
        Preset::default().parameters().clamped()
    }
}

impl Parameters {
    pub fn clamped(self) -> Self {
        Self {
            gravity: self.gravity.max(0.0),
            restitution: self.restitution.clamp(0.0, 1.0),
            launch_velocity: self.launch_velocity,
        }
    }

    fn get(&self, field: Field) -> f32 {
        match field {
            Field::Gravity => self.gravity,
            Field::Restitution => self.restitution,
            Field::Velocity => self.launch_velocity,
        }
    }

    fn set(&mut self, field: Field, value: f32) {
        match field {
            Field::Gravity => self.gravity = value,
            Field::Restitution => self.restitution = value,
            Field::Velocity => self.launch_velocity = value,
        }
    }
}

/// Preset selection, raw field texts and committed parameters
#[derive(Debug, Clone)]
pub struct ParameterStore {
    selection: PresetSelection,
    fields: [String; 3],
    committed: Parameters,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterStore {
    /// Fields filled from Earth; parameters committed from the same values
    pub fn new() -> Self {
        let mut store = Self {
            selection: PresetSelection::Preset(Preset::Earth),
            fields: Default::default(),
            committed: Parameters::default(),
        };
        store.load_preset(Preset::Earth);
        store
    }

    pub fn selection(&self) -> PresetSelection {
        self.selection
    }

    pub fn committed(&self) -> &Parameters {
        &self.committed
    }

    /// Raw text of a field, as the UI should display it
    pub fn field_text(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }

    /// Select by selector label. "Custom" and unknown names are no-ops.
    pub fn select_preset(&mut self, name: &str) {
        if name == PresetSelection::CUSTOM_LABEL {
            return;
        }
        match Preset::from_name(name) {
            Some(preset) => self.select(preset),
            None => log::debug!("Ignoring unknown preset {name:?}"),
        }
    }

    /// Overwrite all three fields from a preset and leave Custom
    pub fn select(&mut self, preset: Preset) {
        self.load_preset(preset);
        log::info!("Preset: {}", preset.as_str());
    }

    /// Store raw text for one field and switch to Custom
    pub fn edit_field(&mut self, field: Field, text: &str) {
        self.fields[field.index()] = text.to_string();
        if !self.selection.is_custom() {
            self.selection = PresetSelection::Custom;
            log::debug!("Preset: Custom ({} edited)", field.as_str());
        }
    }

    /// Parse the current text of one field
    pub fn parse(&self, field: Field) -> Result<f32, FieldError> {
        parse_field(field, self.field_text(field))
    }

    /// Commit the fields as clamped simulation parameters.
    ///
    /// A field whose text is not a finite number keeps its previously
    /// committed value. Returns the parameters now in effect; the caller sets
    /// the ball's vertical velocity to `launch_velocity`.
    pub fn apply_user_parameters(&mut self) -> Parameters {
        let mut next = self.committed;
        for field in Field::ALL {
            match self.parse(field) {
                Ok(value) => next.set(field, value),
                Err(e) => log::warn!("{e}; keeping {}", self.committed.get(field)),
            }
        }
        self.committed = next.clamped();
        log::debug!("Applied {:?}", self.committed);
        self.committed
    }

    /// Speed for an automatic relaunch, read from the velocity field as it is
    /// now; falls back to the committed launch velocity if the text is invalid
    pub fn relaunch_speed(&self) -> f32 {
        self.parse(Field::Velocity)
            .unwrap_or(self.committed.launch_velocity)
    }

    fn load_preset(&mut self, preset: Preset) {
        let params = preset.parameters();
        for field in Field::ALL {
            self.fields[field.index()] = params.get(field).to_string();
        }
        self.selection = PresetSelection::Preset(preset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_on_earth() {
        let store = ParameterStore::new();
        assert_eq!(store.selection(), PresetSelection::Preset(Preset::Earth));
        assert_eq!(store.field_text(Field::Gravity), "9.8");
        assert_eq!(store.field_text(Field::Restitution), "0.5");
        assert_eq!(store.field_text(Field::Velocity), "10");
        assert_eq!(store.committed(), &Preset::Earth.parameters());
    }

    #[test]
    fn test_preset_table() {
        let table = [
            ("Moon", 1.62, 0.5, 4.5),
            ("Earth", 9.8, 0.5, 10.0),
            ("Critical Damping", 9.8, 0.99, 10.0),
            ("Over Damping", 9.8, 0.01, 10.0),
            ("Under Damping", 9.8, 0.5, 10.0),
        ];
        for (name, g, cor, v) in table {
            let preset = Preset::from_name(name).unwrap();
            assert_eq!(preset.as_str(), name);
            let p = preset.parameters();
            assert_eq!((p.gravity, p.restitution, p.launch_velocity), (g, cor, v));
        }
    }

    #[test]
    fn test_preset_name_lookup() {
        assert_eq!(Preset::from_name("moon"), Some(Preset::Moon));
        assert_eq!(Preset::from_name("over-damping"), Some(Preset::OverDamping));
        assert_eq!(Preset::from_name("critical_damping"), Some(Preset::CriticalDamping));
        assert_eq!(Preset::from_name("Jupiter"), None);
        assert_eq!(Preset::from_name("Custom"), None);
    }

    #[test]
    fn test_select_moon_then_apply() {
        let mut store = ParameterStore::new();
        store.select_preset("Moon");
        assert_eq!(store.selection(), PresetSelection::Preset(Preset::Moon));

        // Selecting alone commits nothing
        assert_eq!(store.committed().gravity, 9.8);

        let p = store.apply_user_parameters();
        assert_eq!(p.gravity, 1.62);
        assert_eq!(p.restitution, 0.5);
        assert_eq!(p.launch_velocity, 4.5);
    }

    #[test]
    fn test_edit_then_select_restores_preset() {
        let mut store = ParameterStore::new();
        store.select_preset("Earth");
        store.edit_field(Field::Gravity, "15");
        assert_eq!(store.selection(), PresetSelection::Custom);
        assert_eq!(store.field_text(Field::Gravity), "15");
        // Other fields retain prior values
        assert_eq!(store.field_text(Field::Restitution), "0.5");
        assert_eq!(store.field_text(Field::Velocity), "10");

        store.select_preset("Moon");
        assert_eq!(store.selection(), PresetSelection::Preset(Preset::Moon));
        assert_eq!(store.field_text(Field::Gravity), "1.62");
    }

    #[test]
    fn test_edit_is_idempotent_in_custom() {
        let mut store = ParameterStore::new();
        store.edit_field(Field::Velocity, "3");
        store.edit_field(Field::Restitution, "0.9");
        assert_eq!(store.selection(), PresetSelection::Custom);
        assert_eq!(store.field_text(Field::Velocity), "3");
        assert_eq!(store.field_text(Field::Restitution), "0.9");
        assert_eq!(store.field_text(Field::Gravity), "9.8");
    }

    #[test]
    fn test_select_custom_and_unknown_are_noops() {
        let mut store = ParameterStore::new();
        store.edit_field(Field::Gravity, "3");
        store.select_preset("Custom");
        assert_eq!(store.selection(), PresetSelection::Custom);
        assert_eq!(store.field_text(Field::Gravity), "3");

        store.select_preset("Moon");
        store.select_preset("Pluto");
        assert_eq!(store.selection(), PresetSelection::Preset(Preset::Moon));
        assert_eq!(store.field_text(Field::Gravity), "1.62");
    }

    #[test]
    fn test_apply_clamps() {
        let mut store = ParameterStore::new();
        store.edit_field(Field::Gravity, "-4");
        store.edit_field(Field::Restitution, "1.7");
        store.edit_field(Field::Velocity, "-3");
        let p = store.apply_user_parameters();
        assert_eq!(p.gravity, 0.0);
        assert_eq!(p.restitution, 1.0);
        assert_eq!(p.launch_velocity, -3.0);

        store.edit_field(Field::Restitution, "-0.2");
        assert_eq!(store.apply_user_parameters().restitution, 0.0);
    }

    #[test]
    fn test_apply_rejects_invalid_text() {
        let mut store = ParameterStore::new();
        store.edit_field(Field::Gravity, "fast");
        store.edit_field(Field::Restitution, "NaN");
        store.edit_field(Field::Velocity, " 7.5 ");
        let p = store.apply_user_parameters();
        assert_eq!(p.gravity, 9.8);
        assert_eq!(p.restitution, 0.5);
        assert_eq!(p.launch_velocity, 7.5);
        // Raw text is kept for the UI
        assert_eq!(store.field_text(Field::Gravity), "fast");
    }

    #[test]
    fn test_parse_field_errors() {
        assert_eq!(parse_field(Field::Gravity, "2.5"), Ok(2.5));
        assert!(parse_field(Field::Gravity, "").is_err());
        assert!(parse_field(Field::Gravity, "inf").is_err());
        let err = parse_field(Field::Velocity, "abc").unwrap_err();
        assert_eq!(err.field, Field::Velocity);
        assert_eq!(err.to_string(), "velocity is not a finite number: \"abc\"");
    }

    #[test]
    fn test_relaunch_speed_reads_field_live() {
        let mut store = ParameterStore::new();
        store.edit_field(Field::Velocity, "12");
        // Not applied yet, but relaunch uses the field as it is now
        assert_eq!(store.relaunch_speed(), 12.0);

        store.edit_field(Field::Velocity, "oops");
        assert_eq!(store.relaunch_speed(), 10.0);
    }

    #[test]
    fn test_field_names() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.as_str()), Some(field));
        }
        assert_eq!(Field::from_name("COR"), Some(Field::Restitution));
        assert_eq!(Field::from_name("mass"), None);
    }

    proptest! {
        #[test]
        fn prop_apply_always_clamped(g in -1e6f32..1e6, cor in -1e3f32..1e3, v in -1e3f32..1e3) {
            let mut store = ParameterStore::new();
            store.edit_field(Field::Gravity, &g.to_string());
            store.edit_field(Field::Restitution, &cor.to_string());
            store.edit_field(Field::Velocity, &v.to_string());
            let p = store.apply_user_parameters();
            prop_assert!(p.gravity >= 0.0);
            prop_assert!((0.0..=1.0).contains(&p.restitution));
            prop_assert_eq!(p.launch_velocity, v);
        }
    }
}
