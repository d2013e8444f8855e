use serde::{Deserialize, Serialize};

use crate::registry::entity_list::Entity;

/// An ordered set of fixture ids addressed as one unit. Membership is
/// by id only: the group never owns the fixtures, and a deleted
/// fixture is scrubbed from every group's membership. Groups are flat
/// and cannot contain other groups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub label: String,
    pub fixtures: Vec<String>,
}

impl Group {
    pub fn new(id: String) -> Self {
        Self {
            id,
            label: String::new(),
            fixtures: Vec::new(),
        }
    }

    pub fn contains(&self, fixture_id: &str) -> bool {
        self.fixtures.iter().any(|f| f == fixture_id)
    }

    /// Appends a fixture id unless it is already a member.
    pub fn add_fixture(&mut self, fixture_id: &str) -> bool {
        if self.contains(fixture_id) {
            return false;
        }
        self.fixtures.push(fixture_id.to_string());
        true
    }

    pub fn remove_fixture(&mut self, fixture_id: &str) {
        self.fixtures.retain(|f| f != fixture_id);
    }
}

impl Entity for Group {
    const KIND: &'static str = "Group";

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
