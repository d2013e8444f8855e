pub mod cue;
pub mod cue_resolver;
pub mod playback;
