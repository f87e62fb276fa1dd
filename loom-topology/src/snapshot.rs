// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Export snapshot: the configuration, its derived stats and a capture
//! timestamp, serialized as indented JSON for sharing.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::NetworkConfig;
use crate::error::TopoError;
use crate::stats::{NetworkStats, calculate_stats};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: NetworkConfig,
    pub stats: NetworkStats,

    /// RFC 3339 UTC capture time.
    pub timestamp: String,
}

impl Snapshot {
    #[must_use]
    pub fn new(config: NetworkConfig, stats: NetworkStats, timestamp: String) -> Self {
        Self {
            config,
            stats,
            timestamp,
        }
    }

    /// Capture `config` now, deriving its stats.
    #[must_use]
    pub fn capture(config: &NetworkConfig) -> Self {
        Self::new(
            config.clone(),
            calculate_stats(config),
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        )
    }

    /// Serialize with two-space indentation.
    pub fn to_json(&self) -> Result<String, TopoError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TopoError(format!("serde_json::to_string_pretty failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_json_carries_config_stats_and_timestamp() {
        let config = NetworkConfig::default();
        let snapshot = Snapshot::new(
            config.clone(),
            calculate_stats(&config),
            "2026-08-29T00:00:00Z".to_string(),
        );
        let json = snapshot.to_json().unwrap();

        assert!(json.contains("\"l1Units\": 96"));
        assert!(json.contains("\"grandTotalChips\": 2064"));
        assert!(json.contains("\"timestamp\": \"2026-08-29T00:00:00Z\""));
        // Two-space indentation, per the export format.
        assert!(json.contains("\n  \"config\""));
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = Snapshot::capture(&NetworkConfig::default());
        let json = snapshot.to_json().unwrap();
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn capture_derives_stats_from_the_config() {
        let snapshot = Snapshot::capture(&NetworkConfig::default());
        assert_eq!(snapshot.stats, calculate_stats(&snapshot.config));
    }
}
