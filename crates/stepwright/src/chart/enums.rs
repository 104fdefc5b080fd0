use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// Number of player slots a chart carries radar values for.
pub const NUM_PLAYERS: usize = 2;

/// Style identifier of a chart, spelled the way the file format expects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, IntoStaticStr,
)]
pub enum StepsType {
    #[default]
    #[strum(serialize = "dance-single")]
    DanceSingle,
    #[strum(serialize = "dance-double")]
    DanceDouble,
    #[strum(serialize = "dance-solo")]
    DanceSolo,
    #[strum(serialize = "dance-couple")]
    DanceCouple,
    #[strum(serialize = "pump-single")]
    PumpSingle,
    #[strum(serialize = "pump-double")]
    PumpDouble,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    IntoStaticStr,
)]
pub enum Difficulty {
    #[default]
    #[strum(serialize = "Beginner")]
    Beginner,
    #[strum(serialize = "Easy")]
    Easy,
    #[strum(serialize = "Medium")]
    Medium,
    #[strum(serialize = "Hard")]
    Hard,
    #[strum(serialize = "Challenge")]
    Challenge,
    #[strum(serialize = "Edit")]
    Edit,
}

/// What the song wheel shows as the tempo.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DisplayBpm {
    /// Show the real tempo; no tag is written.
    #[default]
    Actual,
    /// Show a fixed value or range.
    Specified { min: f32, max: f32 },
    /// Show a randomly cycling tempo.
    Random,
}

/// Whether the song can be picked on the song wheel.
///
/// Closed on purpose: the format accepts exactly YES and NO, so any other
/// state is unrepresentable rather than a runtime assert.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, IntoStaticStr,
)]
pub enum Selectable {
    #[default]
    #[strum(serialize = "YES")]
    Always,
    #[strum(serialize = "NO")]
    Never,
}

/// Radar categories, in the fixed order they are serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum RadarCategory {
    Stream = 0,
    Voltage,
    Air,
    Freeze,
    Chaos,
    Notes,
    TapsAndHolds,
    Jumps,
    Holds,
    Mines,
    Hands,
    Rolls,
    Lifts,
    Fakes,
}

impl RadarCategory {
    pub const COUNT: usize = 14;
}

/// One player's difficulty-radar summary, one value per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarValues([f32; RadarCategory::COUNT]);

impl RadarValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[f32] {
        &self.0
    }
}

impl Index<RadarCategory> for RadarValues {
    type Output = f32;

    fn index(&self, category: RadarCategory) -> &f32 {
        &self.0[category as usize]
    }
}

impl IndexMut<RadarCategory> for RadarValues {
    fn index_mut(&mut self, category: RadarCategory) -> &mut f32 {
        &mut self.0[category as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_type_names() {
        assert_eq!(StepsType::DanceSingle.to_string(), "dance-single");
        assert_eq!(StepsType::DanceDouble.to_string(), "dance-double");
        assert_eq!(StepsType::PumpSingle.to_string(), "pump-single");
    }

    #[test]
    fn test_difficulty_names() {
        assert_eq!(Difficulty::Beginner.to_string(), "Beginner");
        assert_eq!(Difficulty::Challenge.to_string(), "Challenge");
        assert_eq!(Difficulty::Edit.to_string(), "Edit");
    }

    #[test]
    fn test_selectable_names() {
        assert_eq!(Selectable::Always.to_string(), "YES");
        assert_eq!(Selectable::Never.to_string(), "NO");
    }

    #[test]
    fn test_radar_values_index() {
        let mut rv = RadarValues::new();
        rv[RadarCategory::Voltage] = 0.75;
        assert_eq!(rv[RadarCategory::Voltage], 0.75);
        assert_eq!(rv[RadarCategory::Stream], 0.0);
        assert_eq!(rv.values().len(), RadarCategory::COUNT);
    }
}
