use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A patched fixture: a model placed at a DMX address on the stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: String,
    pub label: String,
    pub model: String,
    pub universe: u16,
    pub address: u16,
    pub rotation: f64,
    pub invert_pan: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ModelKind {
    MovingHead,
    PAR,
    Wash,
    Pinspot,
}

/// Describes a fixture model: how many channels it occupies and the
/// physical ranges the head can reach.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixtureModel {
    pub kind: ModelKind,
    pub manufacturer: String,
    pub name: String,
    pub channel_count: u16,
    /// Degrees of pan travel, symmetric around home. None for static fixtures.
    pub pan_range: Option<(f64, f64)>,
    pub tilt_range: Option<(f64, f64)>,
    pub zoom_range: Option<(f64, f64)>,
}

pub struct ModelLibrary {
    pub models: HashMap<String, FixtureModel>,
}

impl ModelLibrary {
    pub fn new() -> Self {
        let mut models = HashMap::new();

        // Built-in model definitions. Additional models can be merged in from disk.
        models.insert(
            "generic-rgbw-par".to_string(),
            FixtureModel {
                kind: ModelKind::PAR,
                manufacturer: "Generic".to_string(),
                name: "LED Flat PAR RGBW".to_string(),
                channel_count: 8,
                pan_range: None,
                tilt_range: None,
                zoom_range: None,
            },
        );

        models.insert(
            "generic-spot-60w".to_string(),
            FixtureModel {
                kind: ModelKind::MovingHead,
                manufacturer: "Generic".to_string(),
                name: "LED Spot 60W".to_string(),
                channel_count: 9,
                pan_range: Some((-270.0, 270.0)),
                tilt_range: Some((-135.0, 135.0)),
                zoom_range: None,
            },
        );

        models.insert(
            "generic-wash-7x18w".to_string(),
            FixtureModel {
                kind: ModelKind::Wash,
                manufacturer: "Generic".to_string(),
                name: "LED Wash 7x18W".to_string(),
                channel_count: 10,
                pan_range: Some((-270.0, 270.0)),
                tilt_range: Some((-110.0, 110.0)),
                zoom_range: Some((4.0, 40.0)),
            },
        );

        models.insert(
            "generic-pinspot-10w".to_string(),
            FixtureModel {
                kind: ModelKind::Pinspot,
                manufacturer: "Generic".to_string(),
                name: "Mini LED Pinspot 10W".to_string(),
                channel_count: 6,
                pan_range: None,
                tilt_range: None,
                zoom_range: None,
            },
        );

        ModelLibrary { models }
    }

    pub fn get(&self, key: &str) -> Option<&FixtureModel> {
        self.models.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.models.contains_key(key)
    }

    /// Merge model definitions from a JSON file into the library.
    /// Entries with an existing key replace the built-in definition.
    pub fn load_from_file(&mut self, path: &Path) -> Result<usize, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        let loaded: HashMap<String, FixtureModel> = serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let count = loaded.len();
        self.models.extend(loaded);
        Ok(count)
    }
}

impl Default for ModelLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    pub fn new(id: &str, model: &str, universe: u16, address: u16) -> Self {
        Fixture {
            id: id.to_string(),
            label: String::new(),
            model: model.to_string(),
            universe,
            address,
            rotation: 0.0,
            invert_pan: false,
        }
    }

    /// The DMX footprint of this fixture given its model definition.
    pub fn address_span(&self, model: &FixtureModel) -> (u16, u16) {
        (self.address, self.address + model.channel_count - 1)
    }
}
