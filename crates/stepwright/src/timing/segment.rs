use serde::{Deserialize, Serialize};

/// Quantization of the musical timeline: 48 rows per beat.
pub const ROWS_PER_BEAT: i32 = 48;

/// Convert a quantized row index to its beat position.
pub fn row_to_beat(row: i32) -> f32 {
    row as f32 / ROWS_PER_BEAT as f32
}

/// Tempo change, in beats per minute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BpmSegment {
    pub row: i32,
    pub bpm: f32,
}

/// Pause after the notes on its row have been hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopSegment {
    pub row: i32,
    pub seconds: f32,
}

/// Pause before the notes on its row become hittable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DelaySegment {
    pub row: i32,
    pub seconds: f32,
}

/// Span of beats skipped over instantly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WarpSegment {
    pub row: i32,
    pub length: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSignatureSegment {
    pub row: i32,
    pub numerator: i32,
    pub denominator: i32,
}

/// Hold-scoring checkpoint density, in ticks per beat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickcountSegment {
    pub row: i32,
    pub ticks: i32,
}

/// Combo multipliers for hits and misses from this row on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComboSegment {
    pub row: i32,
    pub combo: i32,
    pub miss_combo: i32,
}

/// Unit of a speed segment's approach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u16)]
pub enum SpeedUnit {
    #[default]
    Beats = 0,
    Seconds = 1,
}

/// Scroll-rate multiplier eased in over a delay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedSegment {
    pub row: i32,
    pub ratio: f32,
    pub delay: f32,
    pub unit: SpeedUnit,
}

/// Instant scroll-rate multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollSegment {
    pub row: i32,
    pub ratio: f32,
}

/// Span of beats whose notes are not judged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FakeSegment {
    pub row: i32,
    pub length: f32,
}

/// Named position on the timeline. The label text is written verbatim, so it
/// must not contain `;` or `,`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSegment {
    pub row: i32,
    pub label: String,
}

/// One timing event of any category.
///
/// A closed sum over the eleven segment categories; `match` dispatch replaces
/// the downcast chains a class hierarchy would need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimingSegment {
    Bpm(BpmSegment),
    Stop(StopSegment),
    Delay(DelaySegment),
    Warp(WarpSegment),
    TimeSignature(TimeSignatureSegment),
    Tickcount(TickcountSegment),
    Combo(ComboSegment),
    Speed(SpeedSegment),
    Scroll(ScrollSegment),
    Fake(FakeSegment),
    Label(LabelSegment),
}

impl TimingSegment {
    pub fn row(&self) -> i32 {
        match self {
            Self::Bpm(s) => s.row,
            Self::Stop(s) => s.row,
            Self::Delay(s) => s.row,
            Self::Warp(s) => s.row,
            Self::TimeSignature(s) => s.row,
            Self::Tickcount(s) => s.row,
            Self::Combo(s) => s.row,
            Self::Speed(s) => s.row,
            Self::Scroll(s) => s.row,
            Self::Fake(s) => s.row,
            Self::Label(s) => s.row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_beat() {
        assert_eq!(row_to_beat(0), 0.0);
        assert_eq!(row_to_beat(48), 1.0);
        assert_eq!(row_to_beat(24), 0.5);
        assert_eq!(row_to_beat(96), 2.0);
    }

    #[test]
    fn test_segment_row_accessor() {
        let seg = TimingSegment::Bpm(BpmSegment { row: 96, bpm: 150.0 });
        assert_eq!(seg.row(), 96);

        let seg = TimingSegment::Label(LabelSegment {
            row: 12,
            label: "chorus".to_string(),
        });
        assert_eq!(seg.row(), 12);
    }
}
