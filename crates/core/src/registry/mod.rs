pub mod entity_list;
pub mod group;

use entity_list::Entity;
use lumen_fixtures::Fixture;

impl Entity for Fixture {
    const KIND: &'static str = "Fixture";

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
