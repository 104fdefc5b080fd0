use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::chart::enums::{Difficulty, DisplayBpm, RadarValues, StepsType, NUM_PLAYERS};
use crate::timing::TimingData;

/// One playable chart: a difficulty/style rendition of a song.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Steps {
    pub steps_type: StepsType,
    pub chart_name: String,
    pub description: String,
    pub chart_style: String,
    pub difficulty: Difficulty,
    pub meter: i32,
    pub radar_values: [RadarValues; NUM_PLAYERS],
    pub credit: String,

    /// The chart's timing. Equal by value to the song's timing means "no
    /// override"; any difference makes the writer re-emit the full block.
    pub timing: TimingData,
    pub attacks: String,
    pub display_bpm: DisplayBpm,

    /// Raw note grid, newline separated measures of tap characters.
    pub note_data: String,

    /// Where this chart was last saved, if it ever was.
    pub filename: Option<PathBuf>,
    pub saved_to_disk: bool,
}

impl Steps {
    pub fn new() -> Self {
        Self::default()
    }
}
