use serde::{Deserialize, Serialize};

use crate::ConsoleError;

/// Implemented by everything that lives in an [`EntityList`]: a
/// user-chosen id, unique within its own list, and an optional
/// display label.
pub trait Entity: Clone {
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn label(&self) -> &str;
    fn set_label(&mut self, label: String);
}

/// An ordered collection of one entity kind. All per-kind pools
/// (positions, colors, cues, ...) share this one implementation so
/// that validation and error messages stay identical across kinds.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EntityList<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> EntityList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|e| e.id() == id)
    }

    /// Insertion-order index of an id.
    pub fn row(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|e| e.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.row(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Ordered (id, label) pairs for list views.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.items
            .iter()
            .map(|e| (e.id().to_string(), e.label().to_string()))
            .collect()
    }

    /// Returns the entity at `id`, creating it first if absent.
    /// Backs the create-if-absent half of every record operation.
    pub fn ensure(&mut self, id: &str, make: impl FnOnce(String) -> T) -> &mut T {
        let row = match self.row(id) {
            Some(row) => row,
            None => {
                self.items.push(make(id.to_string()));
                self.items.len() - 1
            }
        };
        &mut self.items[row]
    }

    /// Set the label on each id in turn. Stops at the first missing
    /// id; labels already applied in the same call are kept.
    pub fn label(&mut self, ids: &[String], text: &str) -> Result<(), ConsoleError> {
        for id in ids {
            match self.get_mut(id) {
                Some(entity) => entity.set_label(text.to_string()),
                None => return Err(ConsoleError::not_found(T::KIND, id, "labeled")),
            }
        }
        Ok(())
    }

    /// Deep-copy each id to `target`. Fails on a missing source or an
    /// occupied target; processing stops at the first failure.
    pub fn copy(&mut self, ids: &[String], target: &str) -> Result<(), ConsoleError> {
        for id in ids {
            let source = match self.get(id) {
                Some(entity) => entity.clone(),
                None => return Err(ConsoleError::not_found(T::KIND, id, "copied")),
            };
            if self.contains(target) {
                return Err(ConsoleError::conflict(T::KIND, id, "copied", target));
            }
            let mut duplicate = source;
            duplicate.set_id(target.to_string());
            duplicate.set_label(String::new());
            self.items.push(duplicate);
        }
        Ok(())
    }

    /// Rename each id to `target` in place. Same guards as copy;
    /// `on_rename` runs after each successful rename so the caller
    /// can rewrite references to the old id.
    pub fn move_to(
        &mut self,
        ids: &[String],
        target: &str,
        mut on_rename: impl FnMut(&str, &str),
    ) -> Result<(), ConsoleError> {
        for id in ids {
            if !self.contains(id) {
                return Err(ConsoleError::not_found(T::KIND, id, "moved"));
            }
            if self.contains(target) {
                return Err(ConsoleError::conflict(T::KIND, id, "moved", target));
            }
            if let Some(entity) = self.get_mut(id) {
                entity.set_id(target.to_string());
            }
            on_rename(id, target);
        }
        Ok(())
    }

    /// Remove each id. Every id is checked for existence before
    /// anything is removed, so a bad id leaves the list untouched.
    /// `on_delete` runs per removed entity for cascade cleanup.
    pub fn delete(
        &mut self,
        ids: &[String],
        mut on_delete: impl FnMut(&T),
    ) -> Result<(), ConsoleError> {
        for id in ids {
            if !self.contains(id) {
                return Err(ConsoleError::not_found(T::KIND, id, "deleted"));
            }
        }
        for id in ids {
            if let Some(row) = self.row(id) {
                let removed = self.items.remove(row);
                on_delete(&removed);
            }
        }
        Ok(())
    }
}

impl<T: Entity> Default for EntityList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Dimmer {
        id: String,
        label: String,
        level: f64,
    }

    impl Entity for Dimmer {
        const KIND: &'static str = "Dimmer";

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

    fn list_with(ids: &[&str]) -> EntityList<Dimmer> {
        let mut list = EntityList::new();
        for id in ids {
            list.ensure(id, |id| Dimmer {
                id,
                label: String::new(),
                level: 0.0,
            });
        }
        list
    }

    #[test]
    fn ensure_creates_then_updates() {
        let mut list = list_with(&[]);
        list.ensure("1", |id| Dimmer {
            id,
            label: String::new(),
            level: 40.0,
        })
        .level = 40.0;
        assert_eq!(list.get("1").unwrap().level, 40.0);

        list.ensure("1", |id| Dimmer {
            id,
            label: String::new(),
            level: 0.0,
        })
        .level = 75.0;
        assert_eq!(list.len(), 1);
        assert_eq!(list.get("1").unwrap().level, 75.0);
    }

    #[test]
    fn row_follows_insertion_order() {
        let list = list_with(&["5", "2", "9"]);
        assert_eq!(list.row("5"), Some(0));
        assert_eq!(list.row("9"), Some(2));
        assert_eq!(list.row("404"), None);
    }

    #[test]
    fn label_batch_stops_at_first_missing_id() {
        let mut list = list_with(&["1"]);
        let err = list
            .label(&["1".to_string(), "2".to_string()], "Front Wash")
            .unwrap_err();
        assert!(matches!(err, ConsoleError::NotFound { .. }));
        // The first id was processed before the failure and keeps its label.
        assert_eq!(list.get("1").unwrap().label, "Front Wash");
    }

    #[test]
    fn copy_rejects_occupied_target() {
        let mut list = list_with(&["1", "2"]);
        list.get_mut("2").unwrap().level = 60.0;
        let err = list.copy(&["1".to_string()], "2").unwrap_err();
        assert!(matches!(err, ConsoleError::Conflict { .. }));
        assert_eq!(list.get("2").unwrap().level, 60.0);
    }

    #[test]
    fn copy_duplicates_values_not_label() {
        let mut list = list_with(&["1"]);
        list.get_mut("1").unwrap().level = 80.0;
        list.get_mut("1").unwrap().label = "Original".to_string();
        list.copy(&["1".to_string()], "3").unwrap();
        let copy = list.get("3").unwrap();
        assert_eq!(copy.level, 80.0);
        assert_eq!(copy.label, "");
    }

    #[test]
    fn move_renames_in_place() {
        let mut list = list_with(&["1"]);
        list.get_mut("1").unwrap().level = 30.0;
        let mut renames = Vec::new();
        list.move_to(&["1".to_string()], "7", |old, new| {
            renames.push((old.to_string(), new.to_string()));
        })
        .unwrap();
        assert!(list.get("1").is_none());
        assert_eq!(list.get("7").unwrap().level, 30.0);
        assert_eq!(renames, vec![("1".to_string(), "7".to_string())]);
    }

    #[test]
    fn delete_validates_all_ids_before_removing() {
        let mut list = list_with(&["1", "2"]);
        let err = list
            .delete(&["1".to_string(), "404".to_string()], |_| {})
            .unwrap_err();
        assert!(matches!(err, ConsoleError::NotFound { .. }));
        assert_eq!(list.len(), 2);

        list.delete(&["1".to_string(), "2".to_string()], |_| {})
            .unwrap();
        assert!(list.is_empty());
    }
}
