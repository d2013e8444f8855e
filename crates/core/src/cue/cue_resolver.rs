use lumen_fixtures::Fixture;

use crate::cue::cue::{Category, Cue, CueEntry, Target};
use crate::preset::preset::{Color, Intensity, Position};
use crate::registry::entity_list::EntityList;
use crate::registry::group::Group;

/// The composed output for one fixture: per category, the value the
/// winning cue entry supplies, or None when no entry applies and the
/// fixture keeps its prior state. An untouched category is never an
/// implicit blackout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectiveState {
    pub intensity: Option<Intensity>,
    pub color: Option<Color>,
    pub position: Option<Position>,
}

impl EffectiveState {
    /// Overlay `other` on top of self; categories `other` doesn't set
    /// are kept.
    pub fn merge_over(&mut self, other: &EffectiveState) {
        if other.intensity.is_some() {
            self.intensity = other.intensity.clone();
        }
        if other.color.is_some() {
            self.color = other.color.clone();
        }
        if other.position.is_some() {
            self.position = other.position.clone();
        }
    }
}

/// Resolves cue targets down to fixtures and composes per-fixture
/// output values. Borrows the registries; holds no state of its own.
pub struct CueResolver<'a> {
    fixtures: &'a EntityList<Fixture>,
    groups: &'a EntityList<Group>,
    intensities: &'a EntityList<Intensity>,
    colors: &'a EntityList<Color>,
    positions: &'a EntityList<Position>,
}

impl<'a> CueResolver<'a> {
    pub fn new(
        fixtures: &'a EntityList<Fixture>,
        groups: &'a EntityList<Group>,
        intensities: &'a EntityList<Intensity>,
        colors: &'a EntityList<Color>,
        positions: &'a EntityList<Position>,
    ) -> Self {
        Self {
            fixtures,
            groups,
            intensities,
            colors,
            positions,
        }
    }

    pub fn fixtures(&self) -> &EntityList<Fixture> {
        self.fixtures
    }

    /// Expand a target to the fixtures it denotes, in membership
    /// order. Groups are flat, so no recursive expansion is needed.
    pub fn resolve(&self, target: &Target) -> Vec<String> {
        match target {
            Target::Fixture(id) => {
                if self.fixtures.contains(id) {
                    vec![id.clone()]
                } else {
                    Vec::new()
                }
            }
            Target::Group(id) => self
                .groups
                .get(id)
                .map(|g| g.fixtures.clone())
                .unwrap_or_default(),
        }
    }

    /// Compute the cue's effective output for one fixture.
    pub fn compute_effective(&self, cue: &Cue, fixture_id: &str) -> EffectiveState {
        EffectiveState {
            intensity: self
                .winning_value(cue.entries(Category::Intensities), fixture_id)
                .and_then(|v| self.intensities.get(v))
                .cloned(),
            color: self
                .winning_value(cue.entries(Category::Colors), fixture_id)
                .and_then(|v| self.colors.get(v))
                .cloned(),
            position: self
                .winning_value(cue.entries(Category::Positions), fixture_id)
                .and_then(|v| self.positions.get(v))
                .cloned(),
        }
    }

    /// Pick the value id that applies to `fixture_id` among a
    /// category's entries. A direct fixture target always beats a
    /// group target; among equally specific entries the last one in
    /// insertion order wins.
    fn winning_value<'e>(&self, entries: &'e [CueEntry], fixture_id: &str) -> Option<&'e str> {
        let mut direct: Option<&str> = None;
        let mut via_group: Option<&str> = None;

        for entry in entries {
            match &entry.target {
                Target::Fixture(id) if id == fixture_id => direct = Some(&entry.value),
                Target::Group(id) => {
                    if self.groups.get(id).is_some_and(|g| g.contains(fixture_id)) {
                        via_group = Some(&entry.value);
                    }
                }
                _ => {}
            }
        }

        direct.or(via_group)
    }
}
