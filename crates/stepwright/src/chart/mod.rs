mod enums;
mod song;
mod steps;

pub use enums::{
    Difficulty, DisplayBpm, RadarCategory, RadarValues, Selectable, StepsType, NUM_PLAYERS,
};
pub use song::{BackgroundChange, InstrumentTrack, Song, BACKGROUND_LAYERS};
pub use steps::Steps;
