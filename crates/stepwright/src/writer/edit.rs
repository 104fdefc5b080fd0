use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::chart::{Song, Steps, StepsType};
use crate::error::{Error, Result};
use crate::util::make_valid_filename;
use crate::writer::ssc::{chart_block, write_document};

/// Derive the on-disk name of a chart's edit file.
///
/// Not guaranteed unique: descriptions are case-sensitive, filesystems
/// usually aren't, and invalid characters are decimated.
pub fn edit_file_name(song: &Song, steps: &Steps) -> String {
    let mut name = format!("{} - {}", song.translit_full_title(), steps.description);

    // Single and double charts of the same song share descriptions often
    // enough that doubles get a disambiguating suffix.
    if steps.steps_type == StepsType::DanceDouble {
        name.push_str(" (doubles)");
    }

    name.push_str(".edit");
    make_valid_filename(&name)
}

/// Full text of an edit file: the song reference followed by one chart block.
pub fn edit_file_contents(song: &Song, steps: &Steps) -> String {
    // "Songs/foo/bar" carries its group directory; strip the leading "Songs/".
    let dir = match song.song_dir.split_once('/') {
        Some((_, rest)) => rest,
        None => song.song_dir.as_str(),
    };
    format!("#SONG:{dir};\r\n{}", chart_block(song, steps, false))
}

/// Save a chart's edit file under `dir`, replacing any previously saved copy
/// at a different name only after the new file is safely on disk.
///
/// If the computed name changed since the last save and a file already exists
/// there, the save fails before writing anything. On success the chart's
/// recorded filename is updated to the new path.
pub fn write_edit_file(dir: impl AsRef<Path>, song: &Song, steps: &mut Steps) -> Result<()> {
    let path = dir.as_ref().join(edit_file_name(song, steps));

    // Renaming is in play only when this chart was saved before, elsewhere.
    let renaming = steps.saved_to_disk && steps.filename.as_deref() != Some(path.as_path());
    if renaming && path.exists() {
        return Err(Error::DestinationExists(path));
    }

    let mut document = edit_file_contents(song, steps);
    document.push_str("\r\n");
    write_document(&path, &document, true)?;

    // Delete the old copy strictly after the new one is persisted, so no
    // failure window leaves zero copies on disk.
    if renaming {
        if let Some(old) = steps.filename.take() {
            if let Err(e) = fs::remove_file(&old) {
                warn!("couldn't remove stale edit file {}: {}", old.display(), e);
            } else {
                info!("removed stale edit file {}", old.display());
            }
        }
    }

    steps.filename = Some(path);
    steps.saved_to_disk = true;
    Ok(())
}
