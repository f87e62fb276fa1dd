// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

/// Application.
pub mod app;

/// Representative topology diagram model.
pub mod diagram;

/// Terminal events handler.
pub mod event;

/// Snapshot export.
pub mod export;

/// Event handler.
pub mod handler;

/// Display languages and label tables.
pub mod lingo;

/// Terminal user interface.
pub mod tui;

/// Widget renderer.
pub mod ui;
