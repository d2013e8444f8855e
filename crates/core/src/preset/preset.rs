use serde::{Deserialize, Serialize};

use crate::registry::entity_list::Entity;
use crate::ConsoleError;

pub const PAN_MIN: f64 = -180.0;
pub const PAN_MAX: f64 = 180.0;
pub const TILT_MIN: f64 = -90.0;
pub const TILT_MAX: f64 = 90.0;

/// A recorded pan/tilt target in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub label: String,
    pub pan: f64,
    pub tilt: f64,
}

impl Position {
    pub fn new(id: String) -> Self {
        Self {
            id,
            label: String::new(),
            pan: 0.0,
            tilt: 0.0,
        }
    }

    pub fn validate(pan: f64, tilt: f64) -> Result<(), ConsoleError> {
        if !(PAN_MIN..=PAN_MAX).contains(&pan) {
            return Err(ConsoleError::out_of_range(
                Self::KIND,
                "pan",
                pan,
                PAN_MIN,
                PAN_MAX,
            ));
        }
        if !(TILT_MIN..=TILT_MAX).contains(&tilt) {
            return Err(ConsoleError::out_of_range(
                Self::KIND,
                "tilt",
                tilt,
                TILT_MIN,
                TILT_MAX,
            ));
        }
        Ok(())
    }
}

/// Hue/saturation color with a quality term for fixtures that carry a
/// white or CTO channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub id: String,
    pub label: String,
    pub hue: f64,
    pub saturation: f64,
    pub quality: f64,
}

impl Color {
    pub fn new(id: String) -> Self {
        Self {
            id,
            label: String::new(),
            hue: 0.0,
            saturation: 0.0,
            quality: 100.0,
        }
    }

    pub fn validate(hue: f64, saturation: f64, quality: f64) -> Result<(), ConsoleError> {
        if !(0.0..360.0).contains(&hue) {
            return Err(ConsoleError::out_of_range(
                Self::KIND,
                "hue",
                hue,
                0.0,
                360.0,
            ));
        }
        if !(0.0..=100.0).contains(&saturation) {
            return Err(ConsoleError::out_of_range(
                Self::KIND,
                "saturation",
                saturation,
                0.0,
                100.0,
            ));
        }
        if !(0.0..=100.0).contains(&quality) {
            return Err(ConsoleError::out_of_range(
                Self::KIND,
                "quality",
                quality,
                0.0,
                100.0,
            ));
        }
        Ok(())
    }
}

/// A dimmer level in percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intensity {
    pub id: String,
    pub label: String,
    pub dimmer: f64,
}

impl Intensity {
    pub fn new(id: String) -> Self {
        Self {
            id,
            label: String::new(),
            dimmer: 0.0,
        }
    }

    pub fn validate(dimmer: f64) -> Result<(), ConsoleError> {
        if !(0.0..=100.0).contains(&dimmer) {
            return Err(ConsoleError::out_of_range(
                Self::KIND,
                "dimmer",
                dimmer,
                0.0,
                100.0,
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub id: String,
    pub label: String,
    pub steps: u32,
}

impl Effect {
    pub fn new(id: String) -> Self {
        Self {
            id,
            label: String::new(),
            steps: 2,
        }
    }

    pub fn validate(steps: u32) -> Result<(), ConsoleError> {
        if steps < 1 {
            return Err(ConsoleError::out_of_range(
                Self::KIND,
                "steps",
                steps as f64,
                1.0,
                u32::MAX as f64,
            ));
        }
        Ok(())
    }
}

macro_rules! impl_entity {
    ($type:ty, $kind:expr) => {
        impl Entity for $type {
            const KIND: &'static str = $kind;

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
    };
}

impl_entity!(Position, "Position");
impl_entity!(Color, "Color");
impl_entity!(Intensity, "Intensity");
impl_entity!(Effect, "Effect");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_range_limits() {
        assert!(Position::validate(-180.0, 90.0).is_ok());
        assert!(Position::validate(180.0, -90.0).is_ok());
        assert!(matches!(
            Position::validate(200.0, 0.0),
            Err(ConsoleError::OutOfRange { field: "pan", .. })
        ));
        assert!(matches!(
            Position::validate(0.0, 91.0),
            Err(ConsoleError::OutOfRange { field: "tilt", .. })
        ));
    }

    #[test]
    fn hue_excludes_360() {
        assert!(Color::validate(359.9, 100.0, 100.0).is_ok());
        assert!(Color::validate(360.0, 100.0, 100.0).is_err());
    }

    #[test]
    fn effect_needs_at_least_one_step() {
        assert!(Effect::validate(1).is_ok());
        assert!(Effect::validate(0).is_err());
    }
}
