mod data;
mod segment;

pub use data::TimingData;
pub use segment::{
    row_to_beat, BpmSegment, ComboSegment, DelaySegment, FakeSegment, LabelSegment, ScrollSegment,
    SpeedSegment, SpeedUnit, StopSegment, TickcountSegment, TimeSignatureSegment, TimingSegment,
    WarpSegment, ROWS_PER_BEAT,
};
