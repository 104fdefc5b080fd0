use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chart::enums::{DisplayBpm, Selectable};
use crate::chart::steps::Steps;
use crate::timing::TimingData;

/// Number of background layers a song can carry. Layer 0 is the song
/// background proper; higher layers are overlays.
pub const BACKGROUND_LAYERS: usize = 2;

/// One background (or foreground) change event, anchored to a beat.
///
/// The string form is `beat=file=rate=crossfade=stretchrewind=stretchnoloop`
/// and is embedded verbatim in the BGCHANGES/FGCHANGES tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundChange {
    pub start_beat: f32,
    pub file: String,
    pub rate: f32,
    pub crossfade: bool,
    pub stretch_rewind: bool,
    pub stretch_no_loop: bool,
}

impl Default for BackgroundChange {
    fn default() -> Self {
        Self {
            start_beat: 0.0,
            file: String::new(),
            rate: 1.0,
            crossfade: false,
            stretch_rewind: false,
            stretch_no_loop: false,
        }
    }
}

impl fmt::Display for BackgroundChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3}={}={:.3}={}={}={}",
            self.start_beat,
            self.file,
            self.rate,
            self.crossfade as u8,
            self.stretch_rewind as u8,
            self.stretch_no_loop as u8
        )
    }
}

/// One instrument track: an instrument name mapped to its audio file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentTrack {
    pub instrument: String,
    pub file: String,
}

impl fmt::Display for InstrumentTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.instrument, self.file)
    }
}

/// Global metadata of one song plus the charts that belong to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub main_title: String,
    pub subtitle: String,
    pub artist: String,
    pub main_title_translit: String,
    pub subtitle_translit: String,
    pub artist_translit: String,
    pub genre: String,
    pub origin: String,
    pub credit: String,

    pub banner_file: String,
    pub background_file: String,
    pub lyrics_file: String,
    pub cd_title_file: String,
    pub music_file: String,
    pub instrument_tracks: Vec<InstrumentTrack>,

    pub sample_start_seconds: f32,
    pub sample_length_seconds: f32,
    pub selectable: Selectable,
    pub display_bpm: DisplayBpm,
    pub timing: TimingData,

    pub background_changes: [Vec<BackgroundChange>; BACKGROUND_LAYERS],
    pub foreground_changes: Vec<BackgroundChange>,
    pub keysound_files: Vec<String>,
    pub attacks: String,

    // Cache-derived fields, written only in cache snapshots.
    pub first_second: f32,
    pub last_second: f32,
    /// Author-specified playable end, in seconds. Written as LASTSECONDHINT
    /// only when positive.
    pub specified_last_second: f32,
    pub music_length_seconds: f32,
    pub song_file_name: String,
    pub has_music: bool,
    pub has_banner: bool,

    /// Directory the song lives in, e.g. `Songs/Pack/Title/`.
    pub song_dir: String,
    pub charts: Vec<Steps>,
}

impl Default for Song {
    fn default() -> Self {
        Self {
            main_title: String::new(),
            subtitle: String::new(),
            artist: String::new(),
            main_title_translit: String::new(),
            subtitle_translit: String::new(),
            artist_translit: String::new(),
            genre: String::new(),
            origin: String::new(),
            credit: String::new(),
            banner_file: String::new(),
            background_file: String::new(),
            lyrics_file: String::new(),
            cd_title_file: String::new(),
            music_file: String::new(),
            instrument_tracks: Vec::new(),
            sample_start_seconds: 0.0,
            sample_length_seconds: 0.0,
            selectable: Selectable::Always,
            display_bpm: DisplayBpm::Actual,
            timing: TimingData::new(),
            background_changes: Default::default(),
            foreground_changes: Vec::new(),
            keysound_files: Vec::new(),
            attacks: String::new(),
            first_second: -1.0,
            last_second: -1.0,
            specified_last_second: -1.0,
            music_length_seconds: 0.0,
            song_file_name: String::new(),
            has_music: false,
            has_banner: false,
            song_dir: String::new(),
            charts: Vec::new(),
        }
    }
}

impl Song {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transliterated full title, falling back to the display title where no
    /// transliteration exists. Used to derive edit-file names.
    pub fn translit_full_title(&self) -> String {
        let title = if self.main_title_translit.is_empty() {
            &self.main_title
        } else {
            &self.main_title_translit
        };
        let subtitle = if self.subtitle_translit.is_empty() {
            &self.subtitle
        } else {
            &self.subtitle_translit
        };
        if subtitle.is_empty() {
            title.clone()
        } else {
            format!("{title} {subtitle}")
        }
    }

    /// Whether any keysound file is declared; switches NOTES to NOTES2.
    pub fn has_keysounds(&self) -> bool {
        !self.keysound_files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_change_display() {
        let change = BackgroundChange {
            start_beat: 16.0,
            file: "flash.avi".to_string(),
            rate: 1.0,
            crossfade: true,
            stretch_rewind: false,
            stretch_no_loop: false,
        };
        assert_eq!(change.to_string(), "16.000=flash.avi=1.000=1=0=0");
    }

    #[test]
    fn test_translit_full_title_fallbacks() {
        let mut song = Song::new();
        song.main_title = "曲名".to_string();
        song.subtitle = "(副題)".to_string();
        assert_eq!(song.translit_full_title(), "曲名 (副題)");

        song.main_title_translit = "Kyokumei".to_string();
        assert_eq!(song.translit_full_title(), "Kyokumei (副題)");

        song.subtitle_translit = "(subtitle)".to_string();
        assert_eq!(song.translit_full_title(), "Kyokumei (subtitle)");

        song.subtitle.clear();
        song.subtitle_translit.clear();
        assert_eq!(song.translit_full_title(), "Kyokumei");
    }

    #[test]
    fn test_instrument_track_display() {
        let track = InstrumentTrack {
            instrument: "guitar".to_string(),
            file: "guitar.ogg".to_string(),
        };
        assert_eq!(track.to_string(), "guitar=guitar.ogg");
    }
}
