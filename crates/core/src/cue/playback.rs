use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cue::cue::{Cue, CueList};
use crate::cue::cue_resolver::{CueResolver, EffectiveState};
use crate::preset::preset::Position;
use crate::registry::entity_list::{Entity, EntityList};
use crate::ConsoleError;

/// Explicit playback state, passed into every sequencer call instead
/// of living as ambient console state. Tracks which cue each list is
/// sitting on; vector order is activation order, most recent last,
/// which is the priority tie-break.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackContext {
    active: Vec<ActiveList>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct ActiveList {
    list: String,
    cue: String,
}

impl PlaybackContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_cue(&self, list_id: &str) -> Option<&str> {
        self.active
            .iter()
            .find(|a| a.list == list_id)
            .map(|a| a.cue.as_str())
    }

    pub fn is_active(&self, list_id: &str) -> bool {
        self.active.iter().any(|a| a.list == list_id)
    }

    /// Active list ids in activation order, oldest first.
    pub fn activation_order(&self) -> Vec<&str> {
        self.active.iter().map(|a| a.list.as_str()).collect()
    }

    /// Point `list_id` at `cue_id` and mark it most recently
    /// activated.
    fn activate(&mut self, list_id: &str, cue_id: &str) {
        self.active.retain(|a| a.list != list_id);
        self.active.push(ActiveList {
            list: list_id.to_string(),
            cue: cue_id.to_string(),
        });
    }

    fn deactivate(&mut self, list_id: &str) {
        self.active.retain(|a| a.list != list_id);
    }

    /// Drop any pointer at a deleted cue without touching the list's
    /// activation slot ordering for other lists.
    pub fn forget_cue(&mut self, cue_id: &str) {
        self.active.retain(|a| a.cue != cue_id);
    }

    pub fn forget_list(&mut self, list_id: &str) {
        self.active.retain(|a| a.list != list_id);
    }

    pub fn rename_cue(&mut self, old: &str, new: &str) {
        for a in &mut self.active {
            if a.cue == old {
                a.cue = new.to_string();
            }
        }
    }

    pub fn rename_list(&mut self, old: &str, new: &str) {
        for a in &mut self.active {
            if a.list == old {
                a.list = new.to_string();
            }
        }
    }
}

/// Steps cue lists and arbitrates between concurrently active lists.
/// Borrows the cue registries; all mutable state lives in the
/// [`PlaybackContext`] handed to each call.
pub struct Sequencer<'a> {
    cue_lists: &'a EntityList<CueList>,
    cues: &'a EntityList<Cue>,
}

impl<'a> Sequencer<'a> {
    pub fn new(cue_lists: &'a EntityList<CueList>, cues: &'a EntityList<Cue>) -> Self {
        Self { cue_lists, cues }
    }

    fn list(&self, list_id: &str) -> Result<&CueList, ConsoleError> {
        self.cue_lists
            .get(list_id)
            .ok_or_else(|| ConsoleError::not_found(CueList::KIND, list_id, "played"))
    }

    /// Jump straight to a cue in the list's sequence.
    pub fn go_to_cue(
        &self,
        context: &mut PlaybackContext,
        list_id: &str,
        cue_id: &str,
    ) -> Result<(), ConsoleError> {
        let list = self.list(list_id)?;
        if list.cue_index(cue_id).is_none() {
            return Err(ConsoleError::not_found(Cue::KIND, cue_id, "played"));
        }
        log::info!("cue list {}: go to cue {}", list_id, cue_id);
        context.activate(list_id, cue_id);
        Ok(())
    }

    /// Step to the following cue. On an inactive list this activates
    /// the first cue. At the end of the sequence the pointer clamps,
    /// staying on the last cue.
    pub fn next(
        &self,
        context: &mut PlaybackContext,
        list_id: &str,
    ) -> Result<String, ConsoleError> {
        let list = self.list(list_id)?;
        if list.cues.is_empty() {
            return Err(ConsoleError::ReferenceIntegrity(format!(
                "Cue List \"{}\" has no cues to play.",
                list_id
            )));
        }

        let index = match context.current_cue(list_id) {
            Some(current) => {
                let current_index = list.cue_index(current).unwrap_or(0);
                (current_index + 1).min(list.cues.len() - 1)
            }
            None => 0,
        };

        let cue_id = list.cues[index].clone();
        context.activate(list_id, &cue_id);
        Ok(cue_id)
    }

    /// Step back one cue, clamping at the first. Errors on an
    /// inactive list since there is no pointer to step back from.
    pub fn previous(
        &self,
        context: &mut PlaybackContext,
        list_id: &str,
    ) -> Result<String, ConsoleError> {
        let list = self.list(list_id)?;
        let current = context.current_cue(list_id).ok_or_else(|| {
            ConsoleError::ReferenceIntegrity(format!(
                "Cue List \"{}\" has no current cue.",
                list_id
            ))
        })?;

        let index = list.cue_index(current).unwrap_or(0).saturating_sub(1);
        let cue_id = list.cues[index].clone();
        context.activate(list_id, &cue_id);
        Ok(cue_id)
    }

    /// Take the list out of the arbitration entirely.
    pub fn release(&self, context: &mut PlaybackContext, list_id: &str) {
        log::info!("cue list {}: release", list_id);
        context.deactivate(list_id);
    }

    /// Merge every active list's current cue into one per-fixture
    /// state. Higher list priority wins per category; on a tie the
    /// most recently activated list wins.
    pub fn stage_output(
        &self,
        context: &PlaybackContext,
        resolver: &CueResolver,
    ) -> BTreeMap<String, EffectiveState> {
        // Sort so that the winner is applied last: ascending priority,
        // then ascending activation recency.
        let mut active: Vec<(&CueList, &Cue)> = Vec::new();
        for list_id in context.activation_order() {
            let Some(list) = self.cue_lists.get(list_id) else {
                continue;
            };
            let Some(cue_id) = context.current_cue(list_id) else {
                continue;
            };
            if let Some(cue) = self.cues.get(cue_id) {
                active.push((list, cue));
            }
        }
        active.sort_by_key(|(list, _)| list.priority);

        let mut output = BTreeMap::new();
        for fixture in resolver.fixtures().iter() {
            let mut state = EffectiveState::default();
            for (_, cue) in &active {
                let overlay = resolver.compute_effective(cue, &fixture.id);
                state.merge_over(&overlay);
            }
            output.insert(fixture.id.clone(), state);
        }
        output
    }

    /// Position changes that may be applied immediately in a
    /// transition from `from_cue` to `to_cue`: the list allows
    /// move-while-dark and the fixture's intensity is an explicit
    /// zero on both sides. An unset intensity keeps prior state,
    /// which may be lit, so it does not count as dark.
    pub fn dark_moves(
        &self,
        resolver: &CueResolver,
        list_id: &str,
        from_cue_id: &str,
        to_cue_id: &str,
    ) -> Result<Vec<(String, Position)>, ConsoleError> {
        let list = self.list(list_id)?;
        if !list.move_while_dark {
            return Ok(Vec::new());
        }
        let from_cue = self
            .cues
            .get(from_cue_id)
            .ok_or_else(|| ConsoleError::not_found(Cue::KIND, from_cue_id, "played"))?;
        let to_cue = self
            .cues
            .get(to_cue_id)
            .ok_or_else(|| ConsoleError::not_found(Cue::KIND, to_cue_id, "played"))?;

        let mut moves = Vec::new();
        for fixture in resolver.fixtures().iter() {
            let before = resolver.compute_effective(from_cue, &fixture.id);
            let after = resolver.compute_effective(to_cue, &fixture.id);

            let dark = |state: &EffectiveState| {
                state.intensity.as_ref().is_some_and(|i| i.dimmer == 0.0)
            };
            if dark(&before) && dark(&after) {
                if let Some(position) = after.position {
                    moves.push((fixture.id.clone(), position));
                }
            }
        }
        Ok(moves)
    }
}
