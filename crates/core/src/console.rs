use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use lumen_fixtures::{Fixture, ModelLibrary};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, Settings};
use crate::cue::cue::{Category, Cue, CueList, Target};
use crate::cue::cue_resolver::{CueResolver, EffectiveState};
use crate::cue::playback::{PlaybackContext, Sequencer};
use crate::preset::preset::{Color, Effect, Intensity, Position};
use crate::registry::entity_list::{Entity, EntityList};
use crate::registry::group::Group;
use crate::show::show::Show;
use crate::show::show_manager::ShowManager;
use crate::ConsoleError;

/// The entity kinds the console manages. Ids are unique within a
/// kind only; Fixture "1" and Group "1" are different entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    Fixture,
    Group,
    Position,
    Color,
    Intensity,
    Effect,
    Cue,
    CueList,
}

/// The lighting console core: owns every registry plus playback
/// state, and exposes the command/query surface the presentation
/// adapters talk to. All mutation goes through here so referential
/// integrity (cascades on delete, rewrites on rename) stays in one
/// place.
pub struct Console {
    library: ModelLibrary,
    fixtures: EntityList<Fixture>,
    groups: EntityList<Group>,
    positions: EntityList<Position>,
    colors: EntityList<Color>,
    intensities: EntityList<Intensity>,
    effects: EntityList<Effect>,
    cues: EntityList<Cue>,
    cue_lists: EntityList<CueList>,
    playback: PlaybackContext,
    config: ConfigManager,
    show_manager: ShowManager,
    show_name: String,
    show_created_at: SystemTime,
}

impl Console {
    pub fn new() -> Self {
        Self::with_config(ConfigManager::new(None))
    }

    pub fn with_config(config: ConfigManager) -> Self {
        let shows_directory = config.settings().shows_directory.clone();
        Self {
            library: ModelLibrary::new(),
            fixtures: EntityList::new(),
            groups: EntityList::new(),
            positions: EntityList::new(),
            colors: EntityList::new(),
            intensities: EntityList::new(),
            effects: EntityList::new(),
            cues: EntityList::new(),
            cue_lists: EntityList::new(),
            playback: PlaybackContext::new(),
            config,
            show_manager: ShowManager::new(shows_directory),
            show_name: "Untitled Show".to_string(),
            show_created_at: SystemTime::now(),
        }
    }

    // --- queries ---

    pub fn library(&self) -> &ModelLibrary {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut ModelLibrary {
        &mut self.library
    }

    pub fn settings(&self) -> &Settings {
        self.config.settings()
    }

    pub fn fixtures(&self) -> &EntityList<Fixture> {
        &self.fixtures
    }

    pub fn groups(&self) -> &EntityList<Group> {
        &self.groups
    }

    pub fn positions(&self) -> &EntityList<Position> {
        &self.positions
    }

    pub fn colors(&self) -> &EntityList<Color> {
        &self.colors
    }

    pub fn intensities(&self) -> &EntityList<Intensity> {
        &self.intensities
    }

    pub fn effects(&self) -> &EntityList<Effect> {
        &self.effects
    }

    pub fn cues(&self) -> &EntityList<Cue> {
        &self.cues
    }

    pub fn cue_lists(&self) -> &EntityList<CueList> {
        &self.cue_lists
    }

    pub fn playback(&self) -> &PlaybackContext {
        &self.playback
    }

    pub fn show_name(&self) -> &str {
        &self.show_name
    }

    /// Ordered (id, label) pairs for a kind, for list views.
    pub fn list(&self, kind: Kind) -> Vec<(String, String)> {
        match kind {
            Kind::Fixture => self.fixtures.entries(),
            Kind::Group => self.groups.entries(),
            Kind::Position => self.positions.entries(),
            Kind::Color => self.colors.entries(),
            Kind::Intensity => self.intensities.entries(),
            Kind::Effect => self.effects.entries(),
            Kind::Cue => self.cues.entries(),
            Kind::CueList => self.cue_lists.entries(),
        }
    }

    fn resolver(&self) -> CueResolver<'_> {
        CueResolver::new(
            &self.fixtures,
            &self.groups,
            &self.intensities,
            &self.colors,
            &self.positions,
        )
    }

    /// Expand a target to the fixture ids it denotes.
    pub fn resolve(&self, target: &Target) -> Vec<String> {
        self.resolver().resolve(target)
    }

    /// The effective intensity/color/position a cue produces for one
    /// fixture. A `None` category keeps its prior state.
    pub fn compute_effective(
        &self,
        cue_id: &str,
        fixture_id: &str,
    ) -> Result<EffectiveState, ConsoleError> {
        let cue = self
            .cues
            .get(cue_id)
            .ok_or_else(|| ConsoleError::not_found(Cue::KIND, cue_id, "resolved"))?;
        if !self.fixtures.contains(fixture_id) {
            return Err(ConsoleError::not_found(
                Fixture::KIND,
                fixture_id,
                "resolved",
            ));
        }
        Ok(self.resolver().compute_effective(cue, fixture_id))
    }

    /// Merge all active cue lists into a per-fixture stage state,
    /// applying list priority and the activation-recency tie-break.
    pub fn stage_output(&self) -> BTreeMap<String, EffectiveState> {
        let sequencer = Sequencer::new(&self.cue_lists, &self.cues);
        sequencer.stage_output(&self.playback, &self.resolver())
    }

    /// Same, but against a caller-supplied context (previews, blind
    /// editing).
    pub fn stage_output_with(&self, context: &PlaybackContext) -> BTreeMap<String, EffectiveState> {
        let sequencer = Sequencer::new(&self.cue_lists, &self.cues);
        sequencer.stage_output(context, &self.resolver())
    }

    /// Clamp a recorded position to a fixture's physical travel
    /// range, when limit enforcement is enabled.
    pub fn clamped_position(&self, fixture_id: &str, position: &Position) -> Position {
        let mut clamped = position.clone();
        if !self.config.settings().enforce_pan_tilt_limits {
            return clamped;
        }
        let model = self
            .fixtures
            .get(fixture_id)
            .and_then(|f| self.library.get(&f.model));
        if let Some(model) = model {
            if let Some((min, max)) = model.pan_range {
                clamped.pan = clamped.pan.clamp(min, max);
            }
            if let Some((min, max)) = model.tilt_range {
                clamped.tilt = clamped.tilt.clamp(min, max);
            }
        }
        clamped
    }

    // --- record ---

    pub fn record_fixture(
        &mut self,
        ids: &[String],
        model: &str,
        universe: u16,
        address: u16,
    ) -> Result<(), ConsoleError> {
        if !self.library.contains(model) {
            return Err(ConsoleError::ReferenceIntegrity(format!(
                "Fixture Model \"{}\" doesn't exist.",
                model
            )));
        }
        if universe < 1 {
            return Err(ConsoleError::out_of_range(
                Fixture::KIND,
                "universe",
                universe as f64,
                1.0,
                u16::MAX as f64,
            ));
        }
        if !(1..=512).contains(&address) {
            return Err(ConsoleError::out_of_range(
                Fixture::KIND,
                "address",
                address as f64,
                1.0,
                512.0,
            ));
        }
        for id in ids {
            let fixture = self
                .fixtures
                .ensure(id, |id| Fixture::new(&id, model, universe, address));
            fixture.model = model.to_string();
            fixture.universe = universe;
            fixture.address = address;
        }
        Ok(())
    }

    /// Rotation and invert-pan only mutate existing fixtures; there
    /// is no sensible fixture to create from a rotation alone.
    pub fn record_fixture_rotation(
        &mut self,
        ids: &[String],
        rotation: f64,
    ) -> Result<(), ConsoleError> {
        if !(-360.0..=360.0).contains(&rotation) {
            return Err(ConsoleError::out_of_range(
                Fixture::KIND,
                "rotation",
                rotation,
                -360.0,
                360.0,
            ));
        }
        for id in ids {
            if !self.fixtures.contains(id) {
                return Err(ConsoleError::not_found(Fixture::KIND, id, "recorded"));
            }
        }
        for id in ids {
            if let Some(fixture) = self.fixtures.get_mut(id) {
                fixture.rotation = rotation;
            }
        }
        Ok(())
    }

    pub fn record_fixture_invert_pan(
        &mut self,
        ids: &[String],
        invert: bool,
    ) -> Result<(), ConsoleError> {
        for id in ids {
            if !self.fixtures.contains(id) {
                return Err(ConsoleError::not_found(Fixture::KIND, id, "recorded"));
            }
        }
        for id in ids {
            if let Some(fixture) = self.fixtures.get_mut(id) {
                fixture.invert_pan = invert;
            }
        }
        Ok(())
    }

    pub fn record_group(&mut self, ids: &[String]) -> Result<(), ConsoleError> {
        for id in ids {
            self.groups.ensure(id, Group::new);
        }
        Ok(())
    }

    pub fn add_group_fixtures(
        &mut self,
        group_id: &str,
        fixture_ids: &[String],
    ) -> Result<(), ConsoleError> {
        if !self.groups.contains(group_id) {
            return Err(ConsoleError::not_found(Group::KIND, group_id, "recorded"));
        }
        for id in fixture_ids {
            if !self.fixtures.contains(id) {
                return Err(ConsoleError::not_found(Fixture::KIND, id, "added"));
            }
        }
        if let Some(group) = self.groups.get_mut(group_id) {
            for id in fixture_ids {
                group.add_fixture(id);
            }
        }
        Ok(())
    }

    pub fn remove_group_fixtures(
        &mut self,
        group_id: &str,
        fixture_ids: &[String],
    ) -> Result<(), ConsoleError> {
        let group = self
            .groups
            .get_mut(group_id)
            .ok_or_else(|| ConsoleError::not_found(Group::KIND, group_id, "recorded"))?;
        for id in fixture_ids {
            group.remove_fixture(id);
        }
        Ok(())
    }

    pub fn record_position(
        &mut self,
        ids: &[String],
        pan: f64,
        tilt: f64,
    ) -> Result<(), ConsoleError> {
        Position::validate(pan, tilt)?;
        for id in ids {
            let position = self.positions.ensure(id, Position::new);
            position.pan = pan;
            position.tilt = tilt;
        }
        Ok(())
    }

    pub fn record_position_pan(&mut self, ids: &[String], pan: f64) -> Result<(), ConsoleError> {
        Position::validate(pan, 0.0)?;
        for id in ids {
            self.positions.ensure(id, Position::new).pan = pan;
        }
        Ok(())
    }

    pub fn record_position_tilt(&mut self, ids: &[String], tilt: f64) -> Result<(), ConsoleError> {
        Position::validate(0.0, tilt)?;
        for id in ids {
            self.positions.ensure(id, Position::new).tilt = tilt;
        }
        Ok(())
    }

    pub fn record_color(
        &mut self,
        ids: &[String],
        hue: f64,
        saturation: f64,
        quality: f64,
    ) -> Result<(), ConsoleError> {
        Color::validate(hue, saturation, quality)?;
        for id in ids {
            let color = self.colors.ensure(id, Color::new);
            color.hue = hue;
            color.saturation = saturation;
            color.quality = quality;
        }
        Ok(())
    }

    pub fn record_intensity(&mut self, ids: &[String], dimmer: f64) -> Result<(), ConsoleError> {
        Intensity::validate(dimmer)?;
        for id in ids {
            self.intensities.ensure(id, Intensity::new).dimmer = dimmer;
        }
        Ok(())
    }

    pub fn record_effect(&mut self, ids: &[String], steps: u32) -> Result<(), ConsoleError> {
        Effect::validate(steps)?;
        for id in ids {
            self.effects.ensure(id, Effect::new).steps = steps;
        }
        Ok(())
    }

    /// Record cues into a list. A new cue is appended to the list's
    /// sequence; re-recording an existing cue of the same list is a
    /// no-op here (its entries are edited separately).
    pub fn record_cue(&mut self, ids: &[String], list_id: &str) -> Result<(), ConsoleError> {
        if !self.cue_lists.contains(list_id) {
            return Err(ConsoleError::not_found(CueList::KIND, list_id, "recorded"));
        }
        for id in ids {
            if let Some(existing) = self.cues.get(id) {
                if existing.list != list_id {
                    return Err(ConsoleError::ReferenceIntegrity(format!(
                        "Cue \"{}\" already belongs to Cue List \"{}\".",
                        id, existing.list
                    )));
                }
            }
        }
        for id in ids {
            self.cues.ensure(id, |id| Cue::new(id, list_id.to_string()));
            if let Some(list) = self.cue_lists.get_mut(list_id) {
                if list.cue_index(id).is_none() {
                    list.cues.push(id.clone());
                }
            }
        }
        Ok(())
    }

    pub fn record_cue_list(&mut self, ids: &[String]) -> Result<(), ConsoleError> {
        let default_mwd = self.config.settings().default_move_while_dark;
        for id in ids {
            self.cue_lists.ensure(id, |id| {
                let mut list = CueList::new(id);
                list.move_while_dark = default_mwd;
                list
            });
        }
        Ok(())
    }

    pub fn set_cue_list_priority(&mut self, id: &str, priority: u8) -> Result<(), ConsoleError> {
        let list = self
            .cue_lists
            .get_mut(id)
            .ok_or_else(|| ConsoleError::not_found(CueList::KIND, id, "recorded"))?;
        list.priority = priority;
        Ok(())
    }

    pub fn set_cue_list_move_while_dark(
        &mut self,
        id: &str,
        enabled: bool,
    ) -> Result<(), ConsoleError> {
        let list = self
            .cue_lists
            .get_mut(id)
            .ok_or_else(|| ConsoleError::not_found(CueList::KIND, id, "recorded"))?;
        list.move_while_dark = enabled;
        Ok(())
    }

    /// Record one cue override. Both ends of the reference are
    /// validated now so a dangling id can never be committed.
    pub fn set_cue_entry(
        &mut self,
        cue_id: &str,
        category: Category,
        target: Target,
        value_id: &str,
    ) -> Result<(), ConsoleError> {
        if !self.cues.contains(cue_id) {
            return Err(ConsoleError::not_found(Cue::KIND, cue_id, "recorded"));
        }
        let target_ok = match &target {
            Target::Fixture(id) => self.fixtures.contains(id),
            Target::Group(id) => self.groups.contains(id),
        };
        if !target_ok {
            return Err(ConsoleError::ReferenceIntegrity(format!(
                "{} doesn't exist.",
                target
            )));
        }
        let value_ok = match category {
            Category::Intensities => self.intensities.contains(value_id),
            Category::Colors => self.colors.contains(value_id),
            Category::Positions => self.positions.contains(value_id),
        };
        if !value_ok {
            return Err(ConsoleError::ReferenceIntegrity(format!(
                "{} \"{}\" doesn't exist.",
                category.value_kind(),
                value_id
            )));
        }
        if let Some(cue) = self.cues.get_mut(cue_id) {
            cue.set_entry(category, target, value_id.to_string());
        }
        Ok(())
    }

    pub fn remove_cue_entry(
        &mut self,
        cue_id: &str,
        category: Category,
        target: &Target,
    ) -> Result<bool, ConsoleError> {
        let cue = self
            .cues
            .get_mut(cue_id)
            .ok_or_else(|| ConsoleError::not_found(Cue::KIND, cue_id, "recorded"))?;
        Ok(cue.remove_entry(category, target))
    }

    // --- label / copy / move / delete ---

    pub fn label(&mut self, kind: Kind, ids: &[String], text: &str) -> Result<(), ConsoleError> {
        match kind {
            Kind::Fixture => self.fixtures.label(ids, text),
            Kind::Group => self.groups.label(ids, text),
            Kind::Position => self.positions.label(ids, text),
            Kind::Color => self.colors.label(ids, text),
            Kind::Intensity => self.intensities.label(ids, text),
            Kind::Effect => self.effects.label(ids, text),
            Kind::Cue => self.cues.label(ids, text),
            Kind::CueList => self.cue_lists.label(ids, text),
        }
    }

    pub fn copy(&mut self, kind: Kind, ids: &[String], target: &str) -> Result<(), ConsoleError> {
        match kind {
            Kind::Fixture => self.fixtures.copy(ids, target),
            Kind::Group => self.groups.copy(ids, target),
            Kind::Position => self.positions.copy(ids, target),
            Kind::Color => self.colors.copy(ids, target),
            Kind::Intensity => self.intensities.copy(ids, target),
            Kind::Effect => self.effects.copy(ids, target),
            Kind::Cue => {
                // A copied cue stays in its source's list and joins
                // that list's sequence.
                let result = self.cues.copy(ids, target);
                if let Some(cue) = self.cues.get(target) {
                    let list_id = cue.list.clone();
                    if let Some(list) = self.cue_lists.get_mut(&list_id) {
                        if list.cue_index(target).is_none() {
                            list.cues.push(target.to_string());
                        }
                    }
                }
                result
            }
            Kind::CueList => {
                // Cues belong to exactly one list, so the copy takes
                // the policy (priority, move-while-dark) but starts
                // with an empty sequence.
                let result = self.cue_lists.copy(ids, target);
                if let Some(list) = self.cue_lists.get_mut(target) {
                    list.cues.clear();
                }
                result
            }
        }
    }

    pub fn move_to(&mut self, kind: Kind, ids: &[String], target: &str) -> Result<(), ConsoleError> {
        match kind {
            Kind::Fixture => {
                let Self {
                    fixtures,
                    groups,
                    cues,
                    ..
                } = self;
                fixtures.move_to(ids, target, |old, new| {
                    for group in groups.iter_mut() {
                        for member in &mut group.fixtures {
                            if member == old {
                                *member = new.to_string();
                            }
                        }
                    }
                    let old_target = Target::Fixture(old.to_string());
                    let new_target = Target::Fixture(new.to_string());
                    for cue in cues.iter_mut() {
                        cue.rename_target(&old_target, &new_target);
                    }
                })
            }
            Kind::Group => {
                let Self { groups, cues, .. } = self;
                groups.move_to(ids, target, |old, new| {
                    let old_target = Target::Group(old.to_string());
                    let new_target = Target::Group(new.to_string());
                    for cue in cues.iter_mut() {
                        cue.rename_target(&old_target, &new_target);
                    }
                })
            }
            Kind::Position => {
                let Self {
                    positions, cues, ..
                } = self;
                positions.move_to(ids, target, |old, new| {
                    for cue in cues.iter_mut() {
                        cue.rename_value(Category::Positions, old, new);
                    }
                })
            }
            Kind::Color => {
                let Self { colors, cues, .. } = self;
                colors.move_to(ids, target, |old, new| {
                    for cue in cues.iter_mut() {
                        cue.rename_value(Category::Colors, old, new);
                    }
                })
            }
            Kind::Intensity => {
                let Self {
                    intensities, cues, ..
                } = self;
                intensities.move_to(ids, target, |old, new| {
                    for cue in cues.iter_mut() {
                        cue.rename_value(Category::Intensities, old, new);
                    }
                })
            }
            Kind::Effect => self.effects.move_to(ids, target, |_, _| {}),
            Kind::Cue => {
                let Self {
                    cues,
                    cue_lists,
                    playback,
                    ..
                } = self;
                cues.move_to(ids, target, |old, new| {
                    for list in cue_lists.iter_mut() {
                        for cue_id in &mut list.cues {
                            if cue_id == old {
                                *cue_id = new.to_string();
                            }
                        }
                    }
                    playback.rename_cue(old, new);
                })
            }
            Kind::CueList => {
                let Self {
                    cues,
                    cue_lists,
                    playback,
                    ..
                } = self;
                cue_lists.move_to(ids, target, |old, new| {
                    for cue in cues.iter_mut() {
                        if cue.list == old {
                            cue.list = new.to_string();
                        }
                    }
                    playback.rename_list(old, new);
                })
            }
        }
    }

    pub fn delete(&mut self, kind: Kind, ids: &[String]) -> Result<(), ConsoleError> {
        match kind {
            Kind::Fixture => {
                let Self {
                    fixtures,
                    groups,
                    cues,
                    ..
                } = self;
                fixtures.delete(ids, |fixture| {
                    let mut scrubbed = 0;
                    for group in groups.iter_mut() {
                        let before = group.fixtures.len();
                        group.remove_fixture(&fixture.id);
                        scrubbed += before - group.fixtures.len();
                    }
                    let target = Target::Fixture(fixture.id.clone());
                    for cue in cues.iter_mut() {
                        scrubbed += cue.scrub_target(&target);
                    }
                    if scrubbed > 0 {
                        log::info!(
                            "deleted fixture {}: scrubbed {} references",
                            fixture.id,
                            scrubbed
                        );
                    }
                })
            }
            Kind::Group => {
                let Self { groups, cues, .. } = self;
                groups.delete(ids, |group| {
                    let target = Target::Group(group.id.clone());
                    let mut scrubbed = 0;
                    for cue in cues.iter_mut() {
                        scrubbed += cue.scrub_target(&target);
                    }
                    if scrubbed > 0 {
                        log::info!(
                            "deleted group {}: scrubbed {} cue entries",
                            group.id,
                            scrubbed
                        );
                    }
                })
            }
            Kind::Position => {
                let Self {
                    positions, cues, ..
                } = self;
                positions.delete(ids, |position| {
                    let mut scrubbed = 0;
                    for cue in cues.iter_mut() {
                        scrubbed += cue.scrub_value(Category::Positions, &position.id);
                    }
                    if scrubbed > 0 {
                        log::info!(
                            "deleted position {}: scrubbed {} cue entries",
                            position.id,
                            scrubbed
                        );
                    }
                })
            }
            Kind::Color => {
                let Self { colors, cues, .. } = self;
                colors.delete(ids, |color| {
                    let mut scrubbed = 0;
                    for cue in cues.iter_mut() {
                        scrubbed += cue.scrub_value(Category::Colors, &color.id);
                    }
                    if scrubbed > 0 {
                        log::info!("deleted color {}: scrubbed {} cue entries", color.id, scrubbed);
                    }
                })
            }
            Kind::Intensity => {
                let Self {
                    intensities, cues, ..
                } = self;
                intensities.delete(ids, |intensity| {
                    let mut scrubbed = 0;
                    for cue in cues.iter_mut() {
                        scrubbed += cue.scrub_value(Category::Intensities, &intensity.id);
                    }
                    if scrubbed > 0 {
                        log::info!(
                            "deleted intensity {}: scrubbed {} cue entries",
                            intensity.id,
                            scrubbed
                        );
                    }
                })
            }
            Kind::Effect => self.effects.delete(ids, |_| {}),
            Kind::Cue => {
                let Self {
                    cues,
                    cue_lists,
                    playback,
                    ..
                } = self;
                cues.delete(ids, |cue| {
                    if let Some(list) = cue_lists.get_mut(&cue.list) {
                        list.remove_cue(&cue.id);
                    }
                    playback.forget_cue(&cue.id);
                })
            }
            Kind::CueList => {
                for id in ids {
                    if !self.cue_lists.contains(id) {
                        return Err(ConsoleError::not_found(CueList::KIND, id, "deleted"));
                    }
                }
                for id in ids {
                    // Cues can't outlive their list; delete them first.
                    let owned: Vec<String> = self
                        .cues
                        .iter()
                        .filter(|c| c.list == *id)
                        .map(|c| c.id.clone())
                        .collect();
                    self.cues.delete(&owned, |_| {})?;
                    self.playback.forget_list(id);
                    self.cue_lists.delete(std::slice::from_ref(id), |_| {})?;
                    log::info!("deleted cue list {} and its {} cues", id, owned.len());
                }
                Ok(())
            }
        }
    }

    // --- playback ---

    pub fn go_to_cue(&mut self, list_id: &str, cue_id: &str) -> Result<(), ConsoleError> {
        let Self {
            cues,
            cue_lists,
            playback,
            ..
        } = self;
        Sequencer::new(cue_lists, cues).go_to_cue(playback, list_id, cue_id)
    }

    pub fn next_cue(&mut self, list_id: &str) -> Result<String, ConsoleError> {
        let Self {
            cues,
            cue_lists,
            playback,
            ..
        } = self;
        Sequencer::new(cue_lists, cues).next(playback, list_id)
    }

    pub fn previous_cue(&mut self, list_id: &str) -> Result<String, ConsoleError> {
        let Self {
            cues,
            cue_lists,
            playback,
            ..
        } = self;
        Sequencer::new(cue_lists, cues).previous(playback, list_id)
    }

    pub fn release(&mut self, list_id: &str) {
        let Self {
            cues,
            cue_lists,
            playback,
            ..
        } = self;
        Sequencer::new(cue_lists, cues).release(playback, list_id);
    }

    /// Position changes that may run immediately when transitioning
    /// between two cues of a move-while-dark list.
    pub fn dark_moves(
        &self,
        list_id: &str,
        from_cue_id: &str,
        to_cue_id: &str,
    ) -> Result<Vec<(String, Position)>, ConsoleError> {
        let sequencer = Sequencer::new(&self.cue_lists, &self.cues);
        sequencer.dark_moves(&self.resolver(), list_id, from_cue_id, to_cue_id)
    }

    // --- show persistence ---

    fn snapshot(&self) -> Show {
        let mut show = Show::new(self.show_name.clone());
        show.created_at = self.show_created_at;
        show.fixtures = self.fixtures.clone();
        show.groups = self.groups.clone();
        show.positions = self.positions.clone();
        show.colors = self.colors.clone();
        show.intensities = self.intensities.clone();
        show.effects = self.effects.clone();
        show.cues = self.cues.clone();
        show.cue_lists = self.cue_lists.clone();
        show
    }

    fn apply_show(&mut self, show: Show) {
        self.show_name = show.name;
        self.show_created_at = show.created_at;
        self.fixtures = show.fixtures;
        self.groups = show.groups;
        self.positions = show.positions;
        self.colors = show.colors;
        self.intensities = show.intensities;
        self.effects = show.effects;
        self.cues = show.cues;
        self.cue_lists = show.cue_lists;
        self.playback = PlaybackContext::new();
    }

    pub fn new_show(&mut self, name: String) {
        let show = self.show_manager.new_show(name);
        self.apply_show(show);
    }

    pub fn save_show(&mut self) -> Result<PathBuf, ConsoleError> {
        let mut show = self.snapshot();
        self.show_manager.save_show(&mut show)
    }

    pub fn save_show_as(&mut self, path: PathBuf) -> Result<PathBuf, ConsoleError> {
        let mut show = self.snapshot();
        self.show_manager.save_show_as(&mut show, path)
    }

    pub fn load_show(&mut self, path: &Path) -> Result<(), ConsoleError> {
        let show = self.show_manager.load_show(path)?;
        self.apply_show(show);
        Ok(())
    }

    pub fn list_shows(&self) -> Result<Vec<PathBuf>, ConsoleError> {
        self.show_manager.list_shows()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
