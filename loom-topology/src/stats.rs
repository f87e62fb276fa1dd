// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Aggregate hardware counts derived from a [`NetworkConfig`].
//!
//! [`calculate_stats`] is a pure, total function: no side effects, no
//! failure modes, safe to call on every keystroke. Partial physical
//! switches cannot exist, so every derived chip count that is not an
//! exact multiple rounds up.

use serde::{Deserialize, Serialize};

use crate::config::{GPU_PORTS_PER_RTSW, NetworkConfig, SwitchSizing};

/// Aggregate hardware counts for one fabric configuration.
///
/// Always holds `grand_total_chips == total_rtsw_chips +
/// total_ftsw_chips + total_stsw_chips`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    /// Effective leaf-tier switch chips per unit.
    pub rtsw_per_l1: u32,

    /// Effective aggregation-tier switch chips per unit.
    pub ftsw_per_l1: u32,

    pub total_gpus: u64,
    pub total_rtsw_chips: u64,
    pub total_ftsw_chips: u64,
    pub total_stsw_chips: u64,
    pub grand_total_chips: u64,
}

/// Derive the aggregate counts for `config`.
///
/// In [`SwitchSizing::Derived`] mode each RTSW serves
/// [`GPU_PORTS_PER_RTSW`] GPUs and the FTSW tier holds the 8:9
/// bandwidth ratio against the RTSW tier; in
/// [`SwitchSizing::Explicit`] mode the per-unit counts are taken as
/// given. The spine count is `ceil(l1_units * stsw_ratio)` in both
/// modes.
#[must_use]
pub fn calculate_stats(config: &NetworkConfig) -> NetworkStats {
    let (rtsw_per_l1, ftsw_per_l1) = match config.switch_sizing {
        SwitchSizing::Explicit {
            rtsw_per_l1,
            ftsw_per_l1,
        } => (rtsw_per_l1, ftsw_per_l1),
        SwitchSizing::Derived => {
            let rtsw_per_l1 = config.gpus_per_l1.div_ceil(GPU_PORTS_PER_RTSW);
            let ftsw_per_l1 = (rtsw_per_l1 * 8).div_ceil(9);
            (rtsw_per_l1, ftsw_per_l1)
        }
    };

    let l1_units = u64::from(config.l1_units);
    let total_gpus = l1_units * u64::from(config.gpus_per_l1);
    let total_rtsw_chips = l1_units * u64::from(rtsw_per_l1);
    let total_ftsw_chips = l1_units * u64::from(ftsw_per_l1);

    // The ratio is the one non-integer input; multiply first, round last.
    let total_stsw_chips = (config.l1_units as f64 * config.stsw_ratio).ceil() as u64;

    NetworkStats {
        rtsw_per_l1,
        ftsw_per_l1,
        total_gpus,
        total_rtsw_chips,
        total_ftsw_chips,
        total_stsw_chips,
        grand_total_chips: total_rtsw_chips + total_ftsw_chips + total_stsw_chips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cluster_totals() {
        let stats = calculate_stats(&NetworkConfig::default());
        assert_eq!(stats.rtsw_per_l1, 9);
        assert_eq!(stats.ftsw_per_l1, 8);
        assert_eq!(stats.total_gpus, 20736);
        assert_eq!(stats.total_rtsw_chips, 864);
        assert_eq!(stats.total_ftsw_chips, 768);
        assert_eq!(stats.total_stsw_chips, 432);
        assert_eq!(stats.grand_total_chips, 2064);
    }

    #[test]
    fn derived_mode_matches_explicit_defaults() {
        let config = NetworkConfig {
            switch_sizing: SwitchSizing::Derived,
            ..NetworkConfig::default()
        };
        let stats = calculate_stats(&config);
        // ceil(216 / 24) = 9 RTSW, ceil(9 * 8/9) = 8 FTSW
        assert_eq!(stats.rtsw_per_l1, 9);
        assert_eq!(stats.ftsw_per_l1, 8);
        assert_eq!(stats, calculate_stats(&NetworkConfig::default()));
    }

    #[test]
    fn derived_mode_rounds_partial_switches_up() {
        let config = NetworkConfig {
            gpus_per_l1: 217,
            switch_sizing: SwitchSizing::Derived,
            ..NetworkConfig::default()
        };
        let stats = calculate_stats(&config);
        assert_eq!(stats.rtsw_per_l1, 10);
        // ceil(10 * 8/9) = ceil(8.88..) = 9
        assert_eq!(stats.ftsw_per_l1, 9);
    }

    #[test]
    fn spine_count_rounds_up_at_fractional_boundary() {
        let mut config = NetworkConfig::default();
        assert_eq!(calculate_stats(&config).total_stsw_chips, 432);

        // 97 * 4.5 = 436.5, which is 437 whole chips.
        config.l1_units = 97;
        assert_eq!(calculate_stats(&config).total_stsw_chips, 437);
    }

    #[test]
    fn zero_units_is_valid_and_yields_all_zero_totals() {
        let config = NetworkConfig {
            l1_units: 0,
            ..NetworkConfig::default()
        };
        let stats = calculate_stats(&config);
        assert_eq!(stats.total_gpus, 0);
        assert_eq!(stats.total_rtsw_chips, 0);
        assert_eq!(stats.total_ftsw_chips, 0);
        assert_eq!(stats.total_stsw_chips, 0);
        assert_eq!(stats.grand_total_chips, 0);
    }

    #[test]
    fn repeat_calls_are_bit_identical() {
        let config = NetworkConfig::default();
        assert_eq!(calculate_stats(&config), calculate_stats(&config));
    }
}
