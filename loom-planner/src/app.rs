// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use std::error;
use std::path::PathBuf;

use log::{debug, info};
use loom_topology::config::{
    FTSW_PER_L1_BOUNDS, FieldBounds, GPUS_PER_L1_BOUNDS, L1_UNITS_BOUNDS, NetworkConfig,
    RTSW_PER_L1_BOUNDS, STSW_RATIO_BOUNDS, SwitchSizing,
};
use loom_topology::stats::{NetworkStats, calculate_stats};

use crate::export;
use crate::lingo::Language;

mod tests;

/// Application result type.
pub type AppResult<T> = std::result::Result<T, Box<dyn error::Error>>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputState {
    Default,
    Entry,
    Help,
}

/// The control-panel fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    L1Units,
    GpusPerL1,
    RtswPerL1,
    FtswPerL1,
    StswRatio,
}

pub const FIELDS: [Field; 5] = [
    Field::L1Units,
    Field::GpusPerL1,
    Field::RtswPerL1,
    Field::FtswPerL1,
    Field::StswRatio,
];

impl Field {
    #[must_use]
    pub fn bounds(self) -> FieldBounds {
        match self {
            Field::L1Units => L1_UNITS_BOUNDS,
            Field::GpusPerL1 => GPUS_PER_L1_BOUNDS,
            Field::RtswPerL1 => RTSW_PER_L1_BOUNDS,
            Field::FtswPerL1 => FTSW_PER_L1_BOUNDS,
            Field::StswRatio => STSW_RATIO_BOUNDS,
        }
    }

    /// Whether this field holds whole numbers (all but the spine ratio).
    #[must_use]
    pub fn is_integral(self) -> bool {
        !matches!(self, Field::StswRatio)
    }
}

/// Application.
pub struct App {
    /// Is the application running?
    pub running: bool,
    config: NetworkConfig,
    stats: NetworkStats,
    lang: Language,
    input_state: InputState,
    selected: Field,

    /// Digits typed so far when entering a value directly.
    pub entry: String,

    /// One-line feedback for the user (e.g. export results).
    pub message: String,

    export_path: PathBuf,
}

impl App {
    /// Constructs a new instance of [`App`].
    #[must_use]
    pub fn new(config: NetworkConfig, lang: Language, export_path: PathBuf) -> Self {
        let stats = calculate_stats(&config);
        Self {
            running: true,
            config,
            stats,
            lang,
            input_state: InputState::Default,
            selected: Field::L1Units,
            entry: String::new(),
            message: String::new(),
            export_path,
        }
    }

    /// Handles the tick event of the terminal.
    pub fn tick(&mut self) {}

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> &NetworkStats {
        &self.stats
    }

    #[must_use]
    pub fn lang(&self) -> Language {
        self.lang
    }

    #[must_use]
    pub fn state(&self) -> InputState {
        self.input_state
    }

    pub fn set_state(&mut self, new_state: InputState) {
        self.input_state = new_state;
    }

    #[must_use]
    pub fn selected(&self) -> Field {
        self.selected
    }

    /// Replace the configuration, rederiving the stats only when the
    /// config actually changed.
    pub fn set_config(&mut self, new_config: NetworkConfig) {
        if new_config == self.config {
            return;
        }
        self.config = new_config;
        self.stats = calculate_stats(&self.config);
        debug!("config changed, stats rederived");
    }

    pub fn select_next(&mut self) {
        let index = FIELDS.iter().position(|f| *f == self.selected).unwrap();
        self.selected = FIELDS[(index + 1) % FIELDS.len()];
    }

    pub fn select_previous(&mut self) {
        let index = FIELDS.iter().position(|f| *f == self.selected).unwrap();
        self.selected = FIELDS[(index + FIELDS.len() - 1) % FIELDS.len()];
    }

    /// Whether the selected field can be edited in the current sizing
    /// mode.
    #[must_use]
    pub fn selected_is_editable(&self) -> bool {
        match self.selected {
            Field::RtswPerL1 | Field::FtswPerL1 => {
                self.config.switch_sizing != SwitchSizing::Derived
            }
            _ => true,
        }
    }

    /// The current value of a field, reading the effective per-unit
    /// switch counts from the stats when they are derived.
    #[must_use]
    pub fn field_value(&self, field: Field) -> f64 {
        match field {
            Field::L1Units => f64::from(self.config.l1_units),
            Field::GpusPerL1 => f64::from(self.config.gpus_per_l1),
            Field::RtswPerL1 => f64::from(self.stats.rtsw_per_l1),
            Field::FtswPerL1 => f64::from(self.stats.ftsw_per_l1),
            Field::StswRatio => self.config.stsw_ratio,
        }
    }

    fn set_field_value(&mut self, field: Field, value: f64) {
        let value = field.bounds().clamp(value);
        let mut config = self.config.clone();
        match field {
            Field::L1Units => config.l1_units = value as u32,
            Field::GpusPerL1 => config.gpus_per_l1 = value as u32,
            Field::RtswPerL1 => {
                if let SwitchSizing::Explicit { ftsw_per_l1, .. } = config.switch_sizing {
                    config.switch_sizing = SwitchSizing::Explicit {
                        rtsw_per_l1: value as u32,
                        ftsw_per_l1,
                    };
                }
            }
            Field::FtswPerL1 => {
                if let SwitchSizing::Explicit { rtsw_per_l1, .. } = config.switch_sizing {
                    config.switch_sizing = SwitchSizing::Explicit {
                        rtsw_per_l1,
                        ftsw_per_l1: value as u32,
                    };
                }
            }
            Field::StswRatio => config.stsw_ratio = value,
        }
        self.set_config(config);
    }

    pub fn step_selected_up(&mut self) {
        self.adjust_selected(|bounds, value| bounds.step_up(value));
    }

    pub fn step_selected_down(&mut self) {
        self.adjust_selected(|bounds, value| bounds.step_down(value));
    }

    fn adjust_selected(&mut self, adjust: impl Fn(FieldBounds, f64) -> f64) {
        if !self.selected_is_editable() {
            self.message = self.lang.labels().derived_field.to_string();
            return;
        }
        let field = self.selected;
        let value = adjust(field.bounds(), self.field_value(field));
        self.set_field_value(field, value);
        self.message.clear();
    }

    /// Start (or continue) typing a value for the selected field.
    pub fn push_entry_char(&mut self, c: char) {
        if !self.selected_is_editable() {
            self.message = self.lang.labels().derived_field.to_string();
            return;
        }
        if c.is_ascii_digit() || (c == '.' && !self.selected.is_integral()) {
            self.entry.push(c);
            self.input_state = InputState::Entry;
        }
    }

    pub fn pop_entry_char(&mut self) {
        self.entry.pop();
        if self.entry.is_empty() {
            self.input_state = InputState::Default;
        }
    }

    /// Commit the typed value to the selected field, clamped to its
    /// bounds. Unparseable input is discarded.
    pub fn commit_entry(&mut self) {
        if let Ok(value) = self.entry.parse::<f64>() {
            let value = if self.selected.is_integral() {
                value.round()
            } else {
                value
            };
            self.set_field_value(self.selected, value);
        }
        self.cancel_entry();
    }

    pub fn cancel_entry(&mut self) {
        self.entry.clear();
        self.input_state = InputState::Default;
    }

    /// Restore the default configuration.
    pub fn reset(&mut self) {
        info!("reset to default configuration");
        self.set_config(NetworkConfig::default());
        self.message.clear();
    }

    pub fn toggle_language(&mut self) {
        self.lang = self.lang.toggle();
    }

    /// Flip between explicit and derived switch sizing, preserving the
    /// effective per-unit counts when leaving derived mode.
    pub fn toggle_switch_sizing(&mut self) {
        let mut config = self.config.clone();
        config.switch_sizing = match config.switch_sizing {
            SwitchSizing::Derived => SwitchSizing::Explicit {
                rtsw_per_l1: self.stats.rtsw_per_l1,
                ftsw_per_l1: self.stats.ftsw_per_l1,
            },
            SwitchSizing::Explicit { .. } => SwitchSizing::Derived,
        };
        self.set_config(config);
    }

    /// Write the export snapshot and report the outcome in the message
    /// line.
    pub fn export(&mut self) {
        let labels = self.lang.labels();
        match export::write_snapshot(&self.config, &self.export_path) {
            Ok(()) => {
                self.message = format!("{} {}", labels.exported_to, self.export_path.display());
            }
            Err(e) => {
                self.message = format!("{}: {e}", labels.export_failed);
            }
        }
    }
}
