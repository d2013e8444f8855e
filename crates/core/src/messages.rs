use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::console::{Console, Kind};
use crate::cue::cue::{Category, Target};
use crate::ConsoleError;

/// Edit intents sent from presentation adapters to the console.
/// Every command maps onto one facade call, so adapters can queue or
/// replay edits as plain values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConsoleCommand {
    // Show management
    NewShow {
        name: String,
    },
    LoadShow {
        path: PathBuf,
    },
    SaveShow,
    SaveShowAs {
        path: PathBuf,
    },

    // Recording
    RecordFixture {
        ids: Vec<String>,
        model: String,
        universe: u16,
        address: u16,
    },
    RecordFixtureRotation {
        ids: Vec<String>,
        rotation: f64,
    },
    RecordFixtureInvertPan {
        ids: Vec<String>,
        invert: bool,
    },
    RecordGroup {
        ids: Vec<String>,
    },
    AddGroupFixtures {
        group: String,
        fixtures: Vec<String>,
    },
    RemoveGroupFixtures {
        group: String,
        fixtures: Vec<String>,
    },
    RecordPosition {
        ids: Vec<String>,
        pan: f64,
        tilt: f64,
    },
    RecordPositionPan {
        ids: Vec<String>,
        pan: f64,
    },
    RecordPositionTilt {
        ids: Vec<String>,
        tilt: f64,
    },
    RecordColor {
        ids: Vec<String>,
        hue: f64,
        saturation: f64,
        quality: f64,
    },
    RecordIntensity {
        ids: Vec<String>,
        dimmer: f64,
    },
    RecordEffect {
        ids: Vec<String>,
        steps: u32,
    },
    RecordCue {
        ids: Vec<String>,
        list: String,
    },
    RecordCueList {
        ids: Vec<String>,
    },
    SetCueListPriority {
        id: String,
        priority: u8,
    },
    SetCueListMoveWhileDark {
        id: String,
        enabled: bool,
    },
    SetCueEntry {
        cue: String,
        category: Category,
        target: Target,
        value: String,
    },
    RemoveCueEntry {
        cue: String,
        category: Category,
        target: Target,
    },

    // Uniform list edits
    Label {
        kind: Kind,
        ids: Vec<String>,
        text: String,
    },
    Copy {
        kind: Kind,
        ids: Vec<String>,
        target: String,
    },
    Move {
        kind: Kind,
        ids: Vec<String>,
        target: String,
    },
    Delete {
        kind: Kind,
        ids: Vec<String>,
    },

    // Playback
    GoToCue {
        list: String,
        cue: String,
    },
    NextCue {
        list: String,
    },
    PreviousCue {
        list: String,
    },
    Release {
        list: String,
    },
}

impl Console {
    /// Execute one command against the console. Errors come back as
    /// values for the adapter to surface; nothing aborts a running
    /// show.
    pub fn apply(&mut self, command: ConsoleCommand) -> Result<(), ConsoleError> {
        match command {
            ConsoleCommand::NewShow { name } => {
                self.new_show(name);
                Ok(())
            }
            ConsoleCommand::LoadShow { path } => self.load_show(&path),
            ConsoleCommand::SaveShow => self.save_show().map(|_| ()),
            ConsoleCommand::SaveShowAs { path } => self.save_show_as(path).map(|_| ()),

            ConsoleCommand::RecordFixture {
                ids,
                model,
                universe,
                address,
            } => self.record_fixture(&ids, &model, universe, address),
            ConsoleCommand::RecordFixtureRotation { ids, rotation } => {
                self.record_fixture_rotation(&ids, rotation)
            }
            ConsoleCommand::RecordFixtureInvertPan { ids, invert } => {
                self.record_fixture_invert_pan(&ids, invert)
            }
            ConsoleCommand::RecordGroup { ids } => self.record_group(&ids),
            ConsoleCommand::AddGroupFixtures { group, fixtures } => {
                self.add_group_fixtures(&group, &fixtures)
            }
            ConsoleCommand::RemoveGroupFixtures { group, fixtures } => {
                self.remove_group_fixtures(&group, &fixtures)
            }
            ConsoleCommand::RecordPosition { ids, pan, tilt } => {
                self.record_position(&ids, pan, tilt)
            }
            ConsoleCommand::RecordPositionPan { ids, pan } => self.record_position_pan(&ids, pan),
            ConsoleCommand::RecordPositionTilt { ids, tilt } => {
                self.record_position_tilt(&ids, tilt)
            }
            ConsoleCommand::RecordColor {
                ids,
                hue,
                saturation,
                quality,
            } => self.record_color(&ids, hue, saturation, quality),
            ConsoleCommand::RecordIntensity { ids, dimmer } => self.record_intensity(&ids, dimmer),
            ConsoleCommand::RecordEffect { ids, steps } => self.record_effect(&ids, steps),
            ConsoleCommand::RecordCue { ids, list } => self.record_cue(&ids, &list),
            ConsoleCommand::RecordCueList { ids } => self.record_cue_list(&ids),
            ConsoleCommand::SetCueListPriority { id, priority } => {
                self.set_cue_list_priority(&id, priority)
            }
            ConsoleCommand::SetCueListMoveWhileDark { id, enabled } => {
                self.set_cue_list_move_while_dark(&id, enabled)
            }
            ConsoleCommand::SetCueEntry {
                cue,
                category,
                target,
                value,
            } => self.set_cue_entry(&cue, category, target, &value),
            ConsoleCommand::RemoveCueEntry {
                cue,
                category,
                target,
            } => self.remove_cue_entry(&cue, category, &target).map(|_| ()),

            ConsoleCommand::Label { kind, ids, text } => self.label(kind, &ids, &text),
            ConsoleCommand::Copy { kind, ids, target } => self.copy(kind, &ids, &target),
            ConsoleCommand::Move { kind, ids, target } => self.move_to(kind, &ids, &target),
            ConsoleCommand::Delete { kind, ids } => self.delete(kind, &ids),

            ConsoleCommand::GoToCue { list, cue } => self.go_to_cue(&list, &cue),
            ConsoleCommand::NextCue { list } => self.next_cue(&list).map(|_| ()),
            ConsoleCommand::PreviousCue { list } => self.previous_cue(&list).map(|_| ()),
            ConsoleCommand::Release { list } => {
                self.release(&list);
                Ok(())
            }
        }
    }
}
