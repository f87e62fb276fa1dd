// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use loom_topology::config::{NetworkConfig, SwitchSizing};
    use loom_topology::stats::calculate_stats;

    use crate::app::{App, FIELDS, Field, InputState};
    use crate::lingo::Language;

    fn create_test_app() -> App {
        App::new(
            NetworkConfig::default(),
            Language::En,
            PathBuf::from("snapshot.json"),
        )
    }

    #[test]
    fn stats_are_derived_on_construction() {
        let app = create_test_app();
        assert_eq!(app.stats(), &calculate_stats(app.config()));
        assert_eq!(app.stats().grand_total_chips, 2064);
    }

    #[test]
    fn field_selection_wraps_both_ways() {
        let mut app = create_test_app();
        assert_eq!(app.selected(), Field::L1Units);

        app.select_previous();
        assert_eq!(app.selected(), Field::StswRatio);

        for _ in 0..FIELDS.len() {
            app.select_next();
        }
        assert_eq!(app.selected(), Field::StswRatio);
    }

    #[test]
    fn stepping_a_field_rederives_the_stats() {
        let mut app = create_test_app();
        app.step_selected_up();
        assert_eq!(app.config().l1_units, 97);
        assert_eq!(app.stats().total_stsw_chips, 437);
        assert_eq!(app.stats(), &calculate_stats(app.config()));
    }

    #[test]
    fn stepping_saturates_at_the_field_bounds() {
        let mut app = create_test_app();
        for _ in 0..1000 {
            app.step_selected_up();
        }
        assert_eq!(app.config().l1_units, 256);
    }

    #[test]
    fn unchanged_config_is_not_rederived() {
        let mut app = create_test_app();
        let before = app.stats().clone();
        app.set_config(NetworkConfig::default());
        assert_eq!(app.stats(), &before);
    }

    #[test]
    fn typed_entry_commits_clamped() {
        let mut app = create_test_app();
        for c in "120".chars() {
            app.push_entry_char(c);
        }
        assert_eq!(app.state(), InputState::Entry);
        app.commit_entry();
        assert_eq!(app.state(), InputState::Default);
        assert_eq!(app.config().l1_units, 120);

        for c in "9999".chars() {
            app.push_entry_char(c);
        }
        app.commit_entry();
        assert_eq!(app.config().l1_units, 256);
    }

    #[test]
    fn decimal_point_only_allowed_on_the_ratio() {
        let mut app = create_test_app();
        app.push_entry_char('1');
        app.push_entry_char('.');
        assert_eq!(app.entry, "1");
        app.cancel_entry();

        app.select_previous(); // StswRatio
        for c in "2.5".chars() {
            app.push_entry_char(c);
        }
        app.commit_entry();
        assert_eq!(app.config().stsw_ratio, 2.5);
    }

    #[test]
    fn cancelled_entry_leaves_the_config_alone() {
        let mut app = create_test_app();
        app.push_entry_char('7');
        app.cancel_entry();
        assert_eq!(app.config().l1_units, 96);
        assert_eq!(app.state(), InputState::Default);
    }

    #[test]
    fn derived_switch_fields_are_not_editable() {
        let mut app = create_test_app();
        app.toggle_switch_sizing();
        assert_eq!(app.config().switch_sizing, SwitchSizing::Derived);

        app.select_next();
        app.select_next(); // RtswPerL1
        assert_eq!(app.selected(), Field::RtswPerL1);
        assert!(!app.selected_is_editable());

        let before = app.stats().clone();
        app.step_selected_up();
        assert_eq!(app.stats(), &before);
        assert!(!app.message.is_empty());

        app.push_entry_char('5');
        assert_eq!(app.entry, "");
    }

    #[test]
    fn leaving_derived_mode_preserves_effective_counts() {
        let mut app = create_test_app();
        app.toggle_switch_sizing();
        app.toggle_switch_sizing();
        assert_eq!(
            app.config().switch_sizing,
            SwitchSizing::Explicit {
                rtsw_per_l1: 9,
                ftsw_per_l1: 8
            }
        );
    }

    #[test]
    fn reset_restores_the_default_configuration() {
        let mut app = create_test_app();
        app.step_selected_up();
        app.toggle_switch_sizing();
        app.reset();
        assert_eq!(app.config(), &NetworkConfig::default());
        assert_eq!(app.stats().grand_total_chips, 2064);
    }

    #[test]
    fn language_toggle_round_trips() {
        let mut app = create_test_app();
        app.toggle_language();
        assert_eq!(app.lang(), Language::Zh);
        app.toggle_language();
        assert_eq!(app.lang(), Language::En);
    }

    #[test]
    fn export_writes_the_snapshot_and_reports_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        let mut app = App::new(NetworkConfig::default(), Language::En, path.clone());

        app.export();
        assert!(path.exists());
        assert!(app.message.contains("snapshot.json"));
    }

    #[test]
    fn failed_export_reports_the_error() {
        let mut app = App::new(
            NetworkConfig::default(),
            Language::En,
            PathBuf::from("no/such/dir/snapshot.json"),
        );
        app.export();
        assert!(app.message.contains("Export failed"));
    }

    #[test]
    fn quit_stops_the_application() {
        let mut app = create_test_app();
        assert!(app.running);
        app.quit();
        assert!(!app.running);
    }
}
