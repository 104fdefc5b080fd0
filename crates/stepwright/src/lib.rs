pub mod chart;
pub mod error;
pub mod timing;
pub mod util;
pub mod writer;

pub use chart::{
    BackgroundChange, Difficulty, DisplayBpm, InstrumentTrack, RadarCategory, RadarValues,
    Selectable, Song, Steps, StepsType, BACKGROUND_LAYERS, NUM_PLAYERS,
};
pub use error::{Error, Result};
pub use timing::{row_to_beat, SpeedUnit, TimingData, TimingSegment, ROWS_PER_BEAT};
pub use writer::edit::{edit_file_contents, edit_file_name, write_edit_file};
pub use writer::ssc::write_song;
