// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use loom_topology::config::NetworkConfig;
use loom_topology::snapshot::Snapshot;

use crate::app::AppResult;

/// Write the `{config, stats, timestamp}` snapshot for `config` to
/// `path` as indented JSON.
pub fn write_snapshot(config: &NetworkConfig, path: &Path) -> AppResult<()> {
    let json = Snapshot::capture(config).to_json()?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;

    info!("snapshot written to {}", path.display());
    Ok(())
}

/// Print the snapshot to stdout (headless `--export` mode).
pub fn print_snapshot(config: &NetworkConfig) -> AppResult<()> {
    println!("{}", Snapshot::capture(config).to_json()?);
    Ok(())
}
