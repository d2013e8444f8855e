use std::time::SystemTime;

use lumen_fixtures::Fixture;
use serde::{Deserialize, Serialize};

use crate::cue::cue::{Cue, CueList};
use crate::preset::preset::{Color, Effect, Intensity, Position};
use crate::registry::entity_list::EntityList;
use crate::registry::group::Group;

/// A complete snapshot of the console's registries, as written to a
/// `*.lumen` show file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Show {
    pub name: String,
    pub created_at: SystemTime,
    pub modified_at: SystemTime,
    pub fixtures: EntityList<Fixture>,
    pub groups: EntityList<Group>,
    pub positions: EntityList<Position>,
    pub colors: EntityList<Color>,
    pub intensities: EntityList<Intensity>,
    pub effects: EntityList<Effect>,
    pub cues: EntityList<Cue>,
    pub cue_lists: EntityList<CueList>,
}

impl Show {
    pub fn new(name: String) -> Self {
        let now = SystemTime::now();
        Self {
            name,
            created_at: now,
            modified_at: now,
            fixtures: EntityList::new(),
            groups: EntityList::new(),
            positions: EntityList::new(),
            colors: EntityList::new(),
            intensities: EntityList::new(),
            effects: EntityList::new(),
            cues: EntityList::new(),
            cue_lists: EntityList::new(),
        }
    }
}
