// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Data model and sizing calculator for tiered GPU fabric topologies.
//!
//! The crate is built around one derivation: [`calculate_stats`] maps a
//! [`NetworkConfig`] (rack count, GPU density, switch sizing, spine ratio)
//! to a [`NetworkStats`] record of aggregate hardware counts. The
//! derivation is a pure, total function; front-ends call it on every
//! configuration change and display the result.

pub mod config;
pub mod error;
pub mod snapshot;
pub mod stats;

pub use config::{NetworkConfig, SwitchSizing};
pub use error::{TopoError, TopoResult};
pub use snapshot::Snapshot;
pub use stats::{NetworkStats, calculate_stats};
