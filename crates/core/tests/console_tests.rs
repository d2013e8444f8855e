use lumen_core::{Category, Console, ConsoleCommand, ConsoleError, Kind, Target};

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// A small rig: three spots, a group of two, an intensity pool, and
/// one cue list with two cues.
fn rig() -> Console {
    let mut console = Console::new();
    console
        .record_fixture(&ids(&["f1"]), "generic-spot-60w", 1, 1)
        .unwrap();
    console
        .record_fixture(&ids(&["f2"]), "generic-spot-60w", 1, 10)
        .unwrap();
    console
        .record_fixture(&ids(&["f3"]), "generic-spot-60w", 1, 19)
        .unwrap();
    console.record_group(&ids(&["g1"])).unwrap();
    console
        .add_group_fixtures("g1", &ids(&["f1", "f3"]))
        .unwrap();
    console.record_intensity(&ids(&["50"]), 50.0).unwrap();
    console.record_intensity(&ids(&["100"]), 100.0).unwrap();
    console.record_cue_list(&ids(&["main"])).unwrap();
    console.record_cue(&ids(&["1", "2"]), "main").unwrap();
    console
}

#[test]
fn record_and_get_round_trip_position() {
    let mut console = Console::new();
    console
        .record_position(&ids(&["7"]), -180.0, 90.0)
        .unwrap();

    let position = console.positions().get("7").unwrap();
    assert_eq!(position.pan, -180.0);
    assert_eq!(position.tilt, 90.0);
    assert_eq!(console.positions().row("7"), Some(0));
}

#[test]
fn out_of_range_record_leaves_existing_entity_unchanged() {
    let mut console = Console::new();
    console.record_position(&ids(&["7"]), 10.0, 20.0).unwrap();

    let err = console
        .record_position(&ids(&["7"]), 200.0, 0.0)
        .unwrap_err();
    assert!(matches!(err, ConsoleError::OutOfRange { .. }));

    let position = console.positions().get("7").unwrap();
    assert_eq!(position.pan, 10.0);
    assert_eq!(position.tilt, 20.0);
}

#[test]
fn range_checks_run_before_any_mutation_in_a_batch() {
    let mut console = Console::new();
    console.record_position(&ids(&["1"]), 0.0, 0.0).unwrap();

    // The bad tilt fails the whole batch; "1" must keep its values
    // even though it comes first in the id list.
    let err = console
        .record_position(&ids(&["1", "2"]), 15.0, 95.0)
        .unwrap_err();
    assert!(matches!(err, ConsoleError::OutOfRange { .. }));
    assert_eq!(console.positions().get("1").unwrap().pan, 0.0);
    assert!(console.positions().get("2").is_none());
}

#[test]
fn copy_to_occupied_target_is_a_conflict() {
    let mut console = Console::new();
    console.record_intensity(&ids(&["a"]), 25.0).unwrap();
    console.record_intensity(&ids(&["b"]), 75.0).unwrap();

    let err = console.copy(Kind::Intensity, &ids(&["a"]), "b").unwrap_err();
    assert!(matches!(err, ConsoleError::Conflict { .. }));
    assert_eq!(console.intensities().get("b").unwrap().dimmer, 75.0);

    let message = err.to_string();
    assert!(message.contains("already used"), "got: {message}");
}

#[test]
fn move_renames_and_keeps_attributes() {
    let mut console = Console::new();
    console
        .record_color(&ids(&["red"]), 0.0, 100.0, 100.0)
        .unwrap();

    console.move_to(Kind::Color, &ids(&["red"]), "warm").unwrap();
    assert!(console.colors().get("red").is_none());
    assert_eq!(console.colors().get("warm").unwrap().saturation, 100.0);
}

#[test]
fn label_batch_reports_missing_id_but_keeps_earlier_labels() {
    let mut console = Console::new();
    console.record_intensity(&ids(&["x"]), 10.0).unwrap();

    let err = console
        .label(Kind::Intensity, &ids(&["x", "y"]), "Blinders")
        .unwrap_err();
    assert!(matches!(err, ConsoleError::NotFound { .. }));
    assert_eq!(console.intensities().get("x").unwrap().label, "Blinders");
}

#[test]
fn deleting_a_position_scrubs_cue_references() {
    let mut console = rig();
    console.record_position(&ids(&["ctr"]), 0.0, 45.0).unwrap();
    console
        .set_cue_entry(
            "1",
            Category::Positions,
            Target::Fixture("f1".to_string()),
            "ctr",
        )
        .unwrap();

    console.delete(Kind::Position, &ids(&["ctr"])).unwrap();
    assert!(console.cues().get("1").unwrap().positions.is_empty());
}

#[test]
fn deleting_a_fixture_scrubs_groups_and_cue_targets() {
    let mut console = rig();
    console
        .set_cue_entry(
            "1",
            Category::Intensities,
            Target::Fixture("f1".to_string()),
            "100",
        )
        .unwrap();

    console.delete(Kind::Fixture, &ids(&["f1"])).unwrap();
    assert!(!console.groups().get("g1").unwrap().contains("f1"));
    assert!(console.cues().get("1").unwrap().intensities.is_empty());
}

#[test]
fn deleting_a_group_leaves_member_fixtures_alone() {
    let mut console = rig();
    console
        .set_cue_entry(
            "1",
            Category::Intensities,
            Target::Group("g1".to_string()),
            "50",
        )
        .unwrap();

    console.delete(Kind::Group, &ids(&["g1"])).unwrap();
    assert!(console.cues().get("1").unwrap().intensities.is_empty());
    assert!(console.fixtures().get("f1").is_some());
    assert!(console.fixtures().get("f3").is_some());
}

#[test]
fn renaming_a_fixture_rewrites_references() {
    let mut console = rig();
    console
        .set_cue_entry(
            "1",
            Category::Intensities,
            Target::Fixture("f1".to_string()),
            "100",
        )
        .unwrap();

    console.move_to(Kind::Fixture, &ids(&["f1"]), "f9").unwrap();
    assert!(console.groups().get("g1").unwrap().contains("f9"));
    let cue = console.cues().get("1").unwrap();
    assert_eq!(cue.intensities[0].target, Target::Fixture("f9".to_string()));
}

#[test]
fn cue_entry_validation_rejects_dangling_references() {
    let mut console = rig();

    let err = console
        .set_cue_entry(
            "1",
            Category::Intensities,
            Target::Fixture("ghost".to_string()),
            "100",
        )
        .unwrap_err();
    assert!(matches!(err, ConsoleError::ReferenceIntegrity(_)));

    let err = console
        .set_cue_entry(
            "1",
            Category::Intensities,
            Target::Fixture("f1".to_string()),
            "missing-value",
        )
        .unwrap_err();
    assert!(matches!(err, ConsoleError::ReferenceIntegrity(_)));
}

#[test]
fn composition_specificity_direct_beats_group() {
    let mut console = rig();
    console
        .set_cue_entry(
            "1",
            Category::Intensities,
            Target::Group("g1".to_string()),
            "50",
        )
        .unwrap();
    console
        .set_cue_entry(
            "1",
            Category::Intensities,
            Target::Fixture("f3".to_string()),
            "100",
        )
        .unwrap();

    let f3 = console.compute_effective("1", "f3").unwrap();
    assert_eq!(f3.intensity.unwrap().dimmer, 100.0);

    let f1 = console.compute_effective("1", "f1").unwrap();
    assert_eq!(f1.intensity.unwrap().dimmer, 50.0);

    // f2 is outside the cue entirely: prior state holds.
    let f2 = console.compute_effective("1", "f2").unwrap();
    assert!(f2.intensity.is_none());
}

#[test]
fn resolve_expands_groups_to_fixture_ids() {
    let console = rig();
    assert_eq!(
        console.resolve(&Target::Group("g1".to_string())),
        vec!["f1".to_string(), "f3".to_string()]
    );
}

#[test]
fn deleting_a_cue_list_cascades_to_its_cues() {
    let mut console = rig();
    console.go_to_cue("main", "1").unwrap();

    console.delete(Kind::CueList, &ids(&["main"])).unwrap();
    assert!(console.cues().get("1").is_none());
    assert!(console.cues().get("2").is_none());
    assert!(!console.playback().is_active("main"));
}

#[test]
fn deleting_the_current_cue_clears_the_pointer() {
    let mut console = rig();
    console.go_to_cue("main", "1").unwrap();

    console.delete(Kind::Cue, &ids(&["1"])).unwrap();
    assert_eq!(console.playback().current_cue("main"), None);
    let list = console.cue_lists().get("main").unwrap();
    assert_eq!(list.cues, vec!["2".to_string()]);
}

#[test]
fn next_and_previous_clamp_at_sequence_ends() {
    let mut console = rig();

    assert_eq!(console.next_cue("main").unwrap(), "1");
    assert_eq!(console.next_cue("main").unwrap(), "2");
    assert_eq!(console.next_cue("main").unwrap(), "2");
    assert_eq!(console.previous_cue("main").unwrap(), "1");
    assert_eq!(console.previous_cue("main").unwrap(), "1");
}

#[test]
fn commands_apply_through_the_message_surface() {
    let mut console = Console::new();
    console
        .apply(ConsoleCommand::RecordPosition {
            ids: ids(&["5"]),
            pan: 12.0,
            tilt: -30.0,
        })
        .unwrap();
    console
        .apply(ConsoleCommand::Label {
            kind: Kind::Position,
            ids: ids(&["5"]),
            text: "Drummer".to_string(),
        })
        .unwrap();

    assert_eq!(console.positions().get("5").unwrap().label, "Drummer");

    let err = console
        .apply(ConsoleCommand::Delete {
            kind: Kind::Position,
            ids: ids(&["404"]),
        })
        .unwrap_err();
    assert!(matches!(err, ConsoleError::NotFound { .. }));
}

#[test]
fn fixture_rotation_requires_existing_fixtures() {
    let mut console = rig();

    console
        .record_fixture_rotation(&ids(&["f1"]), 90.0)
        .unwrap();
    assert_eq!(console.fixtures().get("f1").unwrap().rotation, 90.0);

    let err = console
        .record_fixture_rotation(&ids(&["ghost"]), 10.0)
        .unwrap_err();
    assert!(matches!(err, ConsoleError::NotFound { .. }));

    let err = console
        .record_fixture_rotation(&ids(&["f1"]), 400.0)
        .unwrap_err();
    assert!(matches!(err, ConsoleError::OutOfRange { .. }));
}

#[test]
fn clamped_position_respects_model_travel_range() {
    let mut console = rig();
    console
        .record_position(&ids(&["wide"]), 180.0, -90.0)
        .unwrap();

    // The spot's tilt range is (-135, 135), pan (-270, 270); this
    // position is within both, so it passes through unchanged.
    let position = console.positions().get("wide").unwrap().clone();
    let clamped = console.clamped_position("f1", &position);
    assert_eq!(clamped.pan, 180.0);
    assert_eq!(clamped.tilt, -90.0);
}

#[test]
fn dark_moves_through_facade() {
    let mut console = rig();
    console.set_cue_list_move_while_dark("main", true).unwrap();
    console.record_intensity(&ids(&["zero"]), 0.0).unwrap();
    console.record_position(&ids(&["park"]), 60.0, 20.0).unwrap();

    let target = Target::Fixture("f1".to_string());
    console
        .set_cue_entry("1", Category::Intensities, target.clone(), "zero")
        .unwrap();
    console
        .set_cue_entry("2", Category::Intensities, target.clone(), "zero")
        .unwrap();
    console
        .set_cue_entry("2", Category::Positions, target, "park")
        .unwrap();

    let moves = console.dark_moves("main", "1", "2").unwrap();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].0, "f1");
    assert_eq!(moves[0].1.pan, 60.0);
}

#[test]
fn show_round_trip_through_facade() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let mut settings = lumen_core::Settings::default();
    settings.shows_directory = Some(temp_dir.path().to_path_buf());

    let config_path = temp_dir.path().join("config.json");
    let mut config = lumen_core::ConfigManager::new(Some(config_path));
    config.update_settings(settings).unwrap();

    let mut console = Console::with_config(config);
    console.new_show("Friday".to_string());
    console.record_intensity(&ids(&["full"]), 100.0).unwrap();
    let path = console.save_show().unwrap();

    let mut other = Console::new();
    other.load_show(&path).unwrap();
    assert_eq!(other.show_name(), "Friday");
    assert_eq!(other.intensities().get("full").unwrap().dimmer, 100.0);
}
