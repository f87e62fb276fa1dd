// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Representative diagram of the topology.
//!
//! A full drawing of hundreds of racks is unreadable, so the diagram
//! shows a fixed representative set: three spine groups over three L1
//! units (the last unit standing in for the real unit count), with
//! full-mesh connectivity between the rows. The model is pure data so
//! the labelling logic can be tested without a terminal.

use itertools::Itertools;
use loom_topology::config::NetworkConfig;
use loom_topology::stats::NetworkStats;

use crate::lingo::Labels;

pub const REPRESENTATIVE_SPINES: usize = 3;
pub const REPRESENTATIVE_UNITS: usize = 3;

/// One spine-group box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpineNode {
    pub title: String,
    pub subtitle: String,
}

/// One L1-unit box with its per-unit contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitNode {
    pub title: String,
    pub ftsw_line: String,
    pub rtsw_line: String,
    pub compute_line: String,
}

/// The representative diagram for one configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagramModel {
    pub caption: String,
    pub mesh_note: String,
    pub spines: Vec<SpineNode>,
    pub units: Vec<UnitNode>,

    /// Full-mesh edges as (spine index, unit index) pairs.
    pub edges: Vec<(usize, usize)>,
}

impl DiagramModel {
    #[must_use]
    pub fn build(config: &NetworkConfig, stats: &NetworkStats, labels: &Labels) -> Self {
        let spines = (0..REPRESENTATIVE_SPINES)
            .map(|i| SpineNode {
                title: format!("{} {}", labels.spine_layer, i + 1),
                subtitle: labels.spine_switch_subtitle.to_string(),
            })
            .collect();

        let units = (0..REPRESENTATIVE_UNITS)
            .map(|i| {
                // The last box stands in for the final real unit.
                let number = if i == REPRESENTATIVE_UNITS - 1 {
                    u64::from(config.l1_units)
                } else {
                    i as u64 + 1
                };
                UnitNode {
                    title: format!("{} #{}", labels.l1_unit, number),
                    ftsw_line: format!("{}: {}", labels.ftsw_layer, stats.ftsw_per_l1),
                    rtsw_line: format!("{}: {}", labels.rtsw_layer, stats.rtsw_per_l1),
                    compute_line: format!(
                        "{}: {} {}",
                        labels.compute, config.gpus_per_l1, labels.gpus
                    ),
                }
            })
            .collect();

        let edges = (0..REPRESENTATIVE_SPINES)
            .cartesian_product(0..REPRESENTATIVE_UNITS)
            .collect::<Vec<_>>();

        Self {
            caption: labels.rep_view.to_string(),
            mesh_note: format!(
                "{} {} x {}",
                labels.full_mesh,
                stats.total_stsw_chips,
                u64::from(config.l1_units)
            ),
            spines,
            units,
            edges,
        }
    }
}
