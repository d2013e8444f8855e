pub use config::{ConfigManager, ConfigOption, ConfigSchema, Settings};
pub use console::{Console, Kind};
pub use cue::cue::{Category, Cue, CueEntry, CueList, Target};
pub use cue::cue_resolver::{CueResolver, EffectiveState};
pub use cue::playback::{PlaybackContext, Sequencer};
pub use error::ConsoleError;
pub use messages::ConsoleCommand;
pub use preset::preset::{Color, Effect, Intensity, Position};
pub use registry::entity_list::{Entity, EntityList};
pub use registry::group::Group;
pub use show::show::Show;
pub use show::show_manager::ShowManager;

mod config;
mod console;
mod cue;
mod error;
pub mod messages;
mod preset;
mod registry;
mod show;
