// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Interactive front-end for sizing tiered GPU cluster network fabrics.
//!
//! For example, run using:
//!   cargo run --bin loom-planner -- --preset loom-topology/presets/reference.yaml

use std::io;
use std::path::PathBuf;

use clap::Parser;
use loom_planner::app::{App, AppResult};
use loom_planner::event::{Event, EventHandler};
use loom_planner::export;
use loom_planner::handler::handle_key_events;
use loom_planner::lingo::Language;
use loom_planner::tui::Tui;
use loom_topology::config::NetworkConfig;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Command-line arguments.
#[derive(Parser)]
#[command(about = "Interactive sizing calculator for tiered GPU cluster network fabrics")]
struct Cli {
    /// YAML preset to load as the starting configuration
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Display language
    #[arg(long, value_enum, default_value = "en")]
    lang: Language,

    /// Print the export snapshot to stdout and exit without starting the
    /// TUI
    #[arg(long, default_value = "false")]
    export: bool,

    /// The filename snapshot exports are written to
    #[arg(long, default_value = "snapshot.json")]
    export_file: PathBuf,
}

fn main() -> AppResult<()> {
    env_logger::init();

    let args = Cli::parse();

    // Presets are clamped on the way in; the calculator itself accepts
    // anything.
    let config = match &args.preset {
        Some(path) => NetworkConfig::from_file(path)?.clamped(),
        None => NetworkConfig::default(),
    };

    if args.export {
        return export::print_snapshot(&config);
    }

    // Create an application.
    let mut app = App::new(config, args.lang, args.export_file);

    // Initialize the terminal user interface.
    let backend = CrosstermBackend::new(io::stderr());
    let terminal = Terminal::new(backend)?;
    let events = EventHandler::new(100);
    let mut tui = Tui::new(terminal, events);
    tui.init()?;

    // Start the main loop.
    while app.running {
        // Render the user interface.
        tui.draw(&mut app)?;
        // Handle events.
        match tui.events.next()? {
            Event::Tick => app.tick(),
            Event::Key(key_event) => handle_key_events(key_event, &mut app)?,
            Event::Mouse(_) => {}
            Event::Resize(_, _) => {}
        }
    }

    // Exit the user interface.
    tui.exit()?;
    Ok(())
}
