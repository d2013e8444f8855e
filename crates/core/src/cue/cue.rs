use serde::{Deserialize, Serialize};

use crate::registry::entity_list::Entity;

/// What a cue entry applies to. Targets are typed so that a Fixture
/// "1" and a Group "1" stay distinct.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Fixture(String),
    Group(String),
}

impl Target {
    pub fn id(&self) -> &str {
        match self {
            Target::Fixture(id) => id,
            Target::Group(id) => id,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Fixture(id) => write!(f, "Fixture {}", id),
            Target::Group(id) => write!(f, "Group {}", id),
        }
    }
}

/// The three attribute categories a cue can override.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Intensities,
    Colors,
    Positions,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Intensities, Category::Colors, Category::Positions];

    /// Kind name of the value pool this category draws from.
    pub fn value_kind(&self) -> &'static str {
        match self {
            Category::Intensities => "Intensity",
            Category::Colors => "Color",
            Category::Positions => "Position",
        }
    }
}

/// One override: when this cue plays, `target` takes the value stored
/// under `value` in the category's pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CueEntry {
    pub target: Target,
    pub value: String,
}

/// A recorded look, scoped to one cue list. Each category holds an
/// insertion-ordered list of target -> value-id overrides; entry
/// order matters for composition precedence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    pub id: String,
    pub label: String,
    pub list: String,
    pub intensities: Vec<CueEntry>,
    pub colors: Vec<CueEntry>,
    pub positions: Vec<CueEntry>,
}

impl Cue {
    pub fn new(id: String, list: String) -> Self {
        Self {
            id,
            label: String::new(),
            list,
            intensities: Vec::new(),
            colors: Vec::new(),
            positions: Vec::new(),
        }
    }

    pub fn entries(&self, category: Category) -> &[CueEntry] {
        match category {
            Category::Intensities => &self.intensities,
            Category::Colors => &self.colors,
            Category::Positions => &self.positions,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<CueEntry> {
        match category {
            Category::Intensities => &mut self.intensities,
            Category::Colors => &mut self.colors,
            Category::Positions => &mut self.positions,
        }
    }

    /// Record an override. An existing entry for the same target is
    /// updated in place, keeping its position in the order.
    pub fn set_entry(&mut self, category: Category, target: Target, value: String) {
        let entries = self.entries_mut(category);
        if let Some(existing) = entries.iter_mut().find(|e| e.target == target) {
            existing.value = value;
        } else {
            entries.push(CueEntry { target, value });
        }
    }

    /// Returns true if an entry was removed.
    pub fn remove_entry(&mut self, category: Category, target: &Target) -> bool {
        let entries = self.entries_mut(category);
        let before = entries.len();
        entries.retain(|e| &e.target != target);
        entries.len() < before
    }

    /// Drop every entry in `category` whose value id matches. Used
    /// when a Position/Color/Intensity row is deleted. Returns the
    /// number of entries removed.
    pub fn scrub_value(&mut self, category: Category, value_id: &str) -> usize {
        let entries = self.entries_mut(category);
        let before = entries.len();
        entries.retain(|e| e.value != value_id);
        before - entries.len()
    }

    /// Drop every entry, in all categories, aimed at `target`. Used
    /// when a fixture or group is deleted.
    pub fn scrub_target(&mut self, target: &Target) -> usize {
        let mut removed = 0;
        for category in Category::ALL {
            let entries = self.entries_mut(category);
            let before = entries.len();
            entries.retain(|e| &e.target != target);
            removed += before - entries.len();
        }
        removed
    }

    /// Rewrite references after an entity rename.
    pub fn rename_target(&mut self, old: &Target, new: &Target) {
        for category in Category::ALL {
            for entry in self.entries_mut(category) {
                if &entry.target == old {
                    entry.target = new.clone();
                }
            }
        }
    }

    pub fn rename_value(&mut self, category: Category, old: &str, new: &str) {
        for entry in self.entries_mut(category) {
            if entry.value == old {
                entry.value = new.to_string();
            }
        }
    }
}

/// An ordered sequence of cues with playback policy. Higher priority
/// wins when several lists drive the same fixture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CueList {
    pub id: String,
    pub label: String,
    pub cues: Vec<String>,
    pub priority: u8,
    pub move_while_dark: bool,
}

impl CueList {
    pub fn new(id: String) -> Self {
        Self {
            id,
            label: String::new(),
            cues: Vec::new(),
            priority: 0,
            move_while_dark: false,
        }
    }

    pub fn cue_index(&self, cue_id: &str) -> Option<usize> {
        self.cues.iter().position(|c| c == cue_id)
    }

    pub fn remove_cue(&mut self, cue_id: &str) {
        self.cues.retain(|c| c != cue_id);
    }
}

impl Entity for Cue {
    const KIND: &'static str = "Cue";

    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
    fn label(&self) -> &str {
        &self.label
    }
    fn set_label(&mut self, label: String) {
        self.label = label;
    }
}

impl Entity for CueList {
    const KIND: &'static str = "Cue List";

    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
    fn label(&self) -> &str {
        &self.label
    }
    fn set_label(&mut self, label: String) {
        self.label = label;
    }
}
