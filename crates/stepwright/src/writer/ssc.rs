use std::fs::File;
use std::io::Write as _;
use std::path::Path;

use tracing::{debug, info};

use crate::chart::{DisplayBpm, Song, Steps};
use crate::error::{Error, Result};
use crate::timing::TimingData;
use crate::util::escape;
use crate::writer::tag::TagWriter;

/// Format version written to the VERSION tag.
pub const STEPFILE_VERSION: f32 = 0.83;

/// Sentinel appended to a non-empty background layer 0, telling a reader not
/// to synthesize a trailing song-background entry. Anchored at a beat far
/// past any real chart.
const NO_SONG_BG_SENTINEL: &str =
    "99999=-nosongbg-=1.000=0=0=0 // don't automatically add -songbackground-";

/// Emit the eleven timing tags of `timing` in format order. The FAKES tag is
/// chart-level only and suppressed when `song_level` is set.
pub fn timing_tags(lines: &mut Vec<String>, timing: &TimingData, song_level: bool) {
    let mut w = TagWriter::new(lines);

    w.begin("BPMS");
    for s in &timing.bpms {
        w.put_f32(s.row, s.bpm);
    }
    w.end();

    w.begin("STOPS");
    for s in &timing.stops {
        w.put_f32(s.row, s.seconds);
    }
    w.end();

    w.begin("DELAYS");
    for s in &timing.delays {
        w.put_f32(s.row, s.seconds);
    }
    w.end();

    w.begin("WARPS");
    for s in &timing.warps {
        w.put_f32(s.row, s.length);
    }
    w.end();

    w.begin("TIMESIGNATURES");
    for s in &timing.time_signatures {
        w.put_int_pair(s.row, s.numerator, s.denominator);
    }
    w.end();

    w.begin("TICKCOUNTS");
    for s in &timing.tickcounts {
        w.put_i32(s.row, s.ticks);
    }
    w.end();

    w.begin("COMBOS");
    for s in &timing.combos {
        // Equal hit and miss multipliers collapse to a single value.
        if s.combo == s.miss_combo {
            w.put_i32(s.row, s.combo);
        } else {
            w.put_int_pair(s.row, s.combo, s.miss_combo);
        }
    }
    w.end();

    w.begin("SPEEDS");
    for s in &timing.speeds {
        w.put_float_pair_unit(s.row, s.ratio, s.delay, s.unit as u16);
    }
    w.end();

    w.begin("SCROLLS");
    for s in &timing.scrolls {
        w.put_f32(s.row, s.ratio);
    }
    w.end();

    if !song_level {
        w.begin("FAKES");
        for s in &timing.fakes {
            w.put_f32(s.row, s.length);
        }
        w.end();
    }

    w.begin("LABELS");
    for s in &timing.labels {
        w.put(s.row, &s.label);
    }
    w.end();
}

fn display_bpm_tag(lines: &mut Vec<String>, display_bpm: DisplayBpm) {
    match display_bpm {
        // Actual tempo: the tag is omitted entirely.
        DisplayBpm::Actual => {}
        DisplayBpm::Specified { min, max } => {
            if min == max {
                lines.push(format!("#DISPLAYBPM:{min:.3};"));
            } else {
                lines.push(format!("#DISPLAYBPM:{min:.3}:{max:.3};"));
            }
        }
        DisplayBpm::Random => lines.push("#DISPLAYBPM:*;".to_string()),
    }
}

/// Emit the song-level metadata block, in the fixed tag order of the format.
pub fn global_tags(song: &Song) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("#VERSION:{STEPFILE_VERSION:.2};"));
    lines.push(format!("#TITLE:{};", escape(&song.main_title)));
    lines.push(format!("#SUBTITLE:{};", escape(&song.subtitle)));
    lines.push(format!("#ARTIST:{};", escape(&song.artist)));
    lines.push(format!(
        "#TITLETRANSLIT:{};",
        escape(&song.main_title_translit)
    ));
    lines.push(format!(
        "#SUBTITLETRANSLIT:{};",
        escape(&song.subtitle_translit)
    ));
    lines.push(format!("#ARTISTTRANSLIT:{};", escape(&song.artist_translit)));
    lines.push(format!("#GENRE:{};", escape(&song.genre)));
    lines.push(format!("#ORIGIN:{};", escape(&song.origin)));
    lines.push(format!("#CREDIT:{};", escape(&song.credit)));
    lines.push(format!("#BANNER:{};", escape(&song.banner_file)));
    lines.push(format!("#BACKGROUND:{};", escape(&song.background_file)));
    lines.push(format!("#LYRICSPATH:{};", escape(&song.lyrics_file)));
    lines.push(format!("#CDTITLE:{};", escape(&song.cd_title_file)));
    lines.push(format!("#MUSIC:{};", escape(&song.music_file)));

    if !song.instrument_tracks.is_empty() {
        let tracks: Vec<String> = song
            .instrument_tracks
            .iter()
            .map(ToString::to_string)
            .collect();
        lines.push(format!("#INSTRUMENTTRACK:{};", tracks.join(",")));
    }

    lines.push(format!(
        "#OFFSET:{:.3};",
        song.timing.beat0_offset_seconds
    ));
    lines.push(format!("#SAMPLESTART:{:.3};", song.sample_start_seconds));
    lines.push(format!("#SAMPLELENGTH:{:.3};", song.sample_length_seconds));
    lines.push(format!("#SELECTABLE:{};", song.selectable));

    display_bpm_tag(&mut lines, song.display_bpm);
    timing_tags(&mut lines, &song.timing, true);

    if song.specified_last_second > 0.0 {
        lines.push(format!(
            "#LASTSECONDHINT:{:.3};",
            song.specified_last_second
        ));
    }

    for (layer, changes) in song.background_changes.iter().enumerate() {
        // Layer 0 is always written; higher layers only when non-empty.
        if layer > 0 && changes.is_empty() {
            continue;
        }
        let header = if layer == 0 {
            "#BGCHANGES:".to_string()
        } else {
            format!("#BGCHANGES{}:", layer + 1)
        };
        let mut iter = changes.iter();
        match iter.next() {
            None => lines.push(format!("{header};")),
            Some(first) => {
                lines.push(format!("{header}{first},"));
                for change in iter {
                    lines.push(format!("{change},"));
                }
                if layer == 0 {
                    lines.push(NO_SONG_BG_SENTINEL.to_string());
                }
                lines.push(";".to_string());
            }
        }
    }

    if !song.foreground_changes.is_empty() {
        let mut iter = song.foreground_changes.iter();
        if let Some(first) = iter.next() {
            lines.push(format!("#FGCHANGES:{first},"));
        }
        for change in iter {
            lines.push(format!("{change},"));
        }
        lines.push(";".to_string());
    }

    lines.push(format!("#KEYSOUNDS:{};", song.keysound_files.join(",")));
    lines.push(format!("#ATTACKS:{};", song.attacks));

    lines
}

/// Right-trim every line, drop leading and trailing blank lines, and join
/// with the canonical line terminator.
fn join_line_list(mut lines: Vec<String>) -> String {
    for line in &mut lines {
        let trimmed = line.trim_end().len();
        line.truncate(trimmed);
    }
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(0);
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
    lines[start..end].join("\r\n")
}

/// Serialize one chart block. In cache mode the note grid is replaced by a
/// STEPFILENAME reference.
pub fn chart_block(song: &Song, steps: &Steps, saving_cache: bool) -> String {
    let mut lines: Vec<String> = Vec::new();

    // Banner comment; the description is escaped so it can't smuggle a "\r\n;".
    lines.push(format!(
        "//---------------{} - {}----------------",
        steps.steps_type,
        escape(&steps.description)
    ));
    lines.push("#NOTEDATA:;".to_string());
    lines.push(format!("#CHARTNAME:{};", escape(&steps.chart_name)));
    lines.push(format!("#STEPSTYPE:{};", steps.steps_type));
    lines.push(format!("#DESCRIPTION:{};", escape(&steps.description)));
    lines.push(format!("#CHARTSTYLE:{};", escape(&steps.chart_style)));
    lines.push(format!("#DIFFICULTY:{};", steps.difficulty));
    lines.push(format!("#METER:{};", steps.meter));

    let mut radar_values = Vec::new();
    for player in &steps.radar_values {
        for value in player.values() {
            radar_values.push(format!("{value:.3}"));
        }
    }
    lines.push(format!("#RADARVALUES:{};", radar_values.join(",")));
    lines.push(format!("#CREDIT:{};", escape(&steps.credit)));

    if steps.timing != song.timing {
        lines.push(format!(
            "#OFFSET:{:.3};",
            steps.timing.beat0_offset_seconds
        ));
        timing_tags(&mut lines, &steps.timing, false);
    }
    if steps.attacks != song.attacks {
        lines.push(format!("#ATTACKS:{};", steps.attacks));
    }

    display_bpm_tag(&mut lines, steps.display_bpm);

    if saving_cache {
        let filename = steps
            .filename
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        lines.push(format!("#STEPFILENAME:{filename};"));
    } else {
        lines.push(if song.has_keysounds() { "#NOTES2:" } else { "#NOTES:" }.to_string());
        for note_line in steps.note_data.trim_start().split('\n') {
            if !note_line.is_empty() {
                lines.push(note_line.to_string());
            }
        }
        lines.push(";".to_string());
    }

    join_line_list(lines)
}

/// Write `song` and the selected charts to `path` as one document.
///
/// Real saves flush all the way to disk before returning; cache snapshots
/// skip the durable flush for speed. Charts are written in caller order,
/// never reordered or deduplicated here.
pub fn write_song(
    path: impl AsRef<Path>,
    song: &Song,
    charts: &[&Steps],
    saving_cache: bool,
) -> Result<()> {
    let path = path.as_ref();
    debug!("writing {} chart(s) to {}", charts.len(), path.display());

    let mut lines = global_tags(song);

    if saving_cache {
        lines.push("// cache tags:".to_string());
        lines.push(format!("#FIRSTSECOND:{:.3};", song.first_second));
        lines.push(format!("#LASTSECOND:{:.3};", song.last_second));
        lines.push(format!("#SONGFILENAME:{};", song.song_file_name));
        lines.push(format!("#HASMUSIC:{};", song.has_music as i32));
        lines.push(format!("#HASBANNER:{};", song.has_banner as i32));
        lines.push(format!("#MUSICLENGTH:{:.3};", song.music_length_seconds));
        lines.push("// end cache tags".to_string());
    }

    for steps in charts {
        lines.push(chart_block(song, steps, saving_cache));
    }

    let mut document = lines.join("\r\n");
    document.push_str("\r\n");

    write_document(path, &document, !saving_cache)
}

/// Create `path`, write `document`, and flush. When `durable`, the data is
/// synced to the device before returning so a crash can't lose the save.
pub(crate) fn write_document(path: &Path, document: &str, durable: bool) -> Result<()> {
    let mut file = File::create(path).map_err(|e| Error::OpenFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    file.write_all(document.as_bytes())
        .and_then(|()| file.flush())
        .and_then(|()| if durable { file.sync_all() } else { Ok(()) })
        .map_err(|e| Error::WriteFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!("wrote {}", path.display());
    Ok(())
}
