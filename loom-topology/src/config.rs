// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Fabric configuration: the five sizing inputs, the switch-sizing mode,
//! and the control-panel bounds that front-ends clamp the inputs to.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::TopoError;
use crate::topo_error;

/// GPU ports available on a single leaf-tier (RTSW) switch chip.
pub const GPU_PORTS_PER_RTSW: u32 = 24;

/// How the per-unit switch counts are obtained.
///
/// The two modes are numerically consistent at the default density
/// (216 GPUs per unit derives 9 RTSW and 8 FTSW, the explicit defaults).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum SwitchSizing {
    /// Leaf and aggregation switch counts are direct inputs.
    #[serde(rename_all = "camelCase")]
    Explicit { rtsw_per_l1: u32, ftsw_per_l1: u32 },
    /// Leaf count follows from GPU port density, aggregation count from
    /// the 8:9 bandwidth ratio against the leaf count.
    Derived,
}

/// The sizing inputs for a fabric. Immutable per evaluation; a fresh
/// [`NetworkStats`](crate::stats::NetworkStats) is derived from it on
/// every change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Number of first-level aggregation units (racks/pods).
    pub l1_units: u32,

    /// Compute accelerators per unit.
    pub gpus_per_l1: u32,

    /// Spine-tier switch chips per unit, applied cluster-wide.
    pub stsw_ratio: f64,

    /// Where the per-unit RTSW/FTSW counts come from.
    #[serde(default)]
    pub switch_sizing: SwitchSizing,
}

impl Default for SwitchSizing {
    fn default() -> Self {
        SwitchSizing::Explicit {
            rtsw_per_l1: 9,
            ftsw_per_l1: 8,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            l1_units: 96,
            gpus_per_l1: 216,
            stsw_ratio: 4.5,
            switch_sizing: SwitchSizing::default(),
        }
    }
}

impl NetworkConfig {
    /// Load a preset from a YAML file.
    pub fn from_file(preset_path: &Path) -> Result<Self, TopoError> {
        let s = std::fs::read_to_string(preset_path)
            .map_err(|e| TopoError(format!("Unable to read {}: {e}", preset_path.display())))?;
        debug!("loaded preset from {}", preset_path.display());
        Self::from_string(&s)
    }

    /// Load a preset from a YAML string.
    pub fn from_string(preset_str: &str) -> Result<Self, TopoError> {
        let config: Self = serde_yaml::from_str(preset_str)
            .map_err(|e| TopoError(format!("serde_yaml::from_str failed: {e}")))?;
        if !config.stsw_ratio.is_finite() || config.stsw_ratio < 0.0 {
            return topo_error!("stswRatio must be non-negative, got {}", config.stsw_ratio);
        }
        Ok(config)
    }

    /// Return a copy with every field clamped to its control-panel bounds.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let switch_sizing = match self.switch_sizing {
            SwitchSizing::Explicit {
                rtsw_per_l1,
                ftsw_per_l1,
            } => SwitchSizing::Explicit {
                rtsw_per_l1: RTSW_PER_L1_BOUNDS.clamp(f64::from(rtsw_per_l1)) as u32,
                ftsw_per_l1: FTSW_PER_L1_BOUNDS.clamp(f64::from(ftsw_per_l1)) as u32,
            },
            SwitchSizing::Derived => SwitchSizing::Derived,
        };
        Self {
            l1_units: L1_UNITS_BOUNDS.clamp(f64::from(self.l1_units)) as u32,
            gpus_per_l1: GPUS_PER_L1_BOUNDS.clamp(f64::from(self.gpus_per_l1)) as u32,
            stsw_ratio: STSW_RATIO_BOUNDS.clamp(self.stsw_ratio),
            switch_sizing,
        }
    }
}

/// Valid range and adjustment step for one control-panel field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldBounds {
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp a value into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Increase a value by one step, saturating at `max`.
    #[must_use]
    pub fn step_up(&self, value: f64) -> f64 {
        self.clamp(value + self.step)
    }

    /// Decrease a value by one step, saturating at `min`.
    #[must_use]
    pub fn step_down(&self, value: f64) -> f64 {
        self.clamp(value - self.step)
    }
}

pub const L1_UNITS_BOUNDS: FieldBounds = FieldBounds::new(1.0, 256.0, 1.0);
pub const GPUS_PER_L1_BOUNDS: FieldBounds = FieldBounds::new(8.0, 512.0, 8.0);
pub const RTSW_PER_L1_BOUNDS: FieldBounds = FieldBounds::new(1.0, 32.0, 1.0);
pub const FTSW_PER_L1_BOUNDS: FieldBounds = FieldBounds::new(1.0, 32.0, 1.0);
pub const STSW_RATIO_BOUNDS: FieldBounds = FieldBounds::new(0.5, 16.0, 0.5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_cluster() {
        let config = NetworkConfig::default();
        assert_eq!(config.l1_units, 96);
        assert_eq!(config.gpus_per_l1, 216);
        assert_eq!(config.stsw_ratio, 4.5);
        assert_eq!(
            config.switch_sizing,
            SwitchSizing::Explicit {
                rtsw_per_l1: 9,
                ftsw_per_l1: 8
            }
        );
    }

    #[test]
    fn clamp_saturates_at_bounds() {
        assert_eq!(L1_UNITS_BOUNDS.clamp(0.0), 1.0);
        assert_eq!(L1_UNITS_BOUNDS.clamp(300.0), 256.0);
        assert_eq!(STSW_RATIO_BOUNDS.clamp(0.0), 0.5);
        assert_eq!(STSW_RATIO_BOUNDS.clamp(100.0), 16.0);
    }

    #[test]
    fn step_up_and_down_use_field_step() {
        assert_eq!(GPUS_PER_L1_BOUNDS.step_up(216.0), 224.0);
        assert_eq!(GPUS_PER_L1_BOUNDS.step_down(216.0), 208.0);
        assert_eq!(STSW_RATIO_BOUNDS.step_up(4.5), 5.0);
        assert_eq!(STSW_RATIO_BOUNDS.step_down(0.5), 0.5);
        assert_eq!(L1_UNITS_BOUNDS.step_up(256.0), 256.0);
    }

    #[test]
    fn clamped_config_pulls_fields_into_range() {
        let config = NetworkConfig {
            l1_units: 1000,
            gpus_per_l1: 0,
            stsw_ratio: 32.0,
            switch_sizing: SwitchSizing::Explicit {
                rtsw_per_l1: 99,
                ftsw_per_l1: 0,
            },
        };
        let clamped = config.clamped();
        assert_eq!(clamped.l1_units, 256);
        assert_eq!(clamped.gpus_per_l1, 8);
        assert_eq!(clamped.stsw_ratio, 16.0);
        assert_eq!(
            clamped.switch_sizing,
            SwitchSizing::Explicit {
                rtsw_per_l1: 32,
                ftsw_per_l1: 1
            }
        );
    }
}
