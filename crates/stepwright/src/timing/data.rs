use serde::{Deserialize, Serialize};

use crate::timing::segment::{
    BpmSegment, ComboSegment, DelaySegment, FakeSegment, LabelSegment, ScrollSegment, SpeedSegment,
    StopSegment, TickcountSegment, TimeSignatureSegment, TimingSegment, WarpSegment,
};

/// All timing events of a song or of one chart, one ordered list per
/// category, plus the offset of beat 0 from the start of the music.
///
/// Structural equality (`==`) is the single definition of "this chart carries
/// its own timing": a chart whose `TimingData` compares equal to the song's
/// has no override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingData {
    pub beat0_offset_seconds: f32,
    pub bpms: Vec<BpmSegment>,
    pub stops: Vec<StopSegment>,
    pub delays: Vec<DelaySegment>,
    pub warps: Vec<WarpSegment>,
    pub time_signatures: Vec<TimeSignatureSegment>,
    pub tickcounts: Vec<TickcountSegment>,
    pub combos: Vec<ComboSegment>,
    pub speeds: Vec<SpeedSegment>,
    pub scrolls: Vec<ScrollSegment>,
    pub fakes: Vec<FakeSegment>,
    pub labels: Vec<LabelSegment>,
}

impl TimingData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a segment into its category list, preserving insertion order.
    pub fn push(&mut self, segment: TimingSegment) {
        match segment {
            TimingSegment::Bpm(s) => self.bpms.push(s),
            TimingSegment::Stop(s) => self.stops.push(s),
            TimingSegment::Delay(s) => self.delays.push(s),
            TimingSegment::Warp(s) => self.warps.push(s),
            TimingSegment::TimeSignature(s) => self.time_signatures.push(s),
            TimingSegment::Tickcount(s) => self.tickcounts.push(s),
            TimingSegment::Combo(s) => self.combos.push(s),
            TimingSegment::Speed(s) => self.speeds.push(s),
            TimingSegment::Scroll(s) => self.scrolls.push(s),
            TimingSegment::Fake(s) => self.fakes.push(s),
            TimingSegment::Label(s) => self.labels.push(s),
        }
    }

    /// Normalize every category for encoding: sort by row (stable), keep the
    /// last segment declared for any duplicated row, and make sure the
    /// categories that must never be empty carry their row-0 defaults.
    pub fn tidy(&mut self) {
        tidy_rows(&mut self.bpms, |s| s.row);
        tidy_rows(&mut self.stops, |s| s.row);
        tidy_rows(&mut self.delays, |s| s.row);
        tidy_rows(&mut self.warps, |s| s.row);
        tidy_rows(&mut self.time_signatures, |s| s.row);
        tidy_rows(&mut self.tickcounts, |s| s.row);
        tidy_rows(&mut self.combos, |s| s.row);
        tidy_rows(&mut self.speeds, |s| s.row);
        tidy_rows(&mut self.scrolls, |s| s.row);
        tidy_rows(&mut self.fakes, |s| s.row);
        tidy_rows(&mut self.labels, |s| s.row);

        if self.time_signatures.is_empty() {
            self.time_signatures.push(TimeSignatureSegment {
                row: 0,
                numerator: 4,
                denominator: 4,
            });
        }
        if self.tickcounts.is_empty() {
            self.tickcounts.push(TickcountSegment { row: 0, ticks: 4 });
        }
        if self.combos.is_empty() {
            self.combos.push(ComboSegment {
                row: 0,
                combo: 1,
                miss_combo: 1,
            });
        }
    }
}

fn tidy_rows<T>(segments: &mut Vec<T>, row: impl Fn(&T) -> i32) {
    segments.sort_by_key(&row);
    let mut i = segments.len();
    while i > 1 {
        i -= 1;
        if row(&segments[i]) == row(&segments[i - 1]) {
            segments.remove(i - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_routes_by_category() {
        let mut timing = TimingData::new();
        timing.push(TimingSegment::Bpm(BpmSegment { row: 0, bpm: 120.0 }));
        timing.push(TimingSegment::Stop(StopSegment {
            row: 48,
            seconds: 0.5,
        }));
        assert_eq!(timing.bpms.len(), 1);
        assert_eq!(timing.stops.len(), 1);
        assert!(timing.delays.is_empty());
    }

    #[test]
    fn test_tidy_sorts_and_dedupes_keeping_last() {
        let mut timing = TimingData::new();
        timing.bpms = vec![
            BpmSegment { row: 96, bpm: 180.0 },
            BpmSegment { row: 0, bpm: 120.0 },
            BpmSegment { row: 0, bpm: 140.0 },
        ];
        timing.tidy();
        assert_eq!(timing.bpms.len(), 2);
        assert_eq!(timing.bpms[0].row, 0);
        assert_eq!(timing.bpms[0].bpm, 140.0);
        assert_eq!(timing.bpms[1].row, 96);
    }

    #[test]
    fn test_tidy_fills_required_categories() {
        let mut timing = TimingData::new();
        timing.tidy();
        assert_eq!(timing.time_signatures.len(), 1);
        assert_eq!(timing.time_signatures[0].numerator, 4);
        assert_eq!(timing.tickcounts.len(), 1);
        assert_eq!(timing.combos.len(), 1);
        assert_eq!(timing.combos[0].combo, 1);
        // Optional categories stay empty.
        assert!(timing.bpms.is_empty());
        assert!(timing.labels.is_empty());
    }

    #[test]
    fn test_structural_equality() {
        let mut a = TimingData::new();
        a.push(TimingSegment::Bpm(BpmSegment { row: 0, bpm: 120.0 }));
        let b = a.clone();
        assert_eq!(a, b);

        let mut c = b.clone();
        c.bpms[0].row = 1;
        assert_ne!(a, c);

        let mut d = b.clone();
        d.beat0_offset_seconds = 0.01;
        assert_ne!(a, d);
    }
}
