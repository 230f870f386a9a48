//! Copy and download of the rendered result

use crate::error::{AppError, AppResult};
use arboard::Clipboard;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name used for downloaded results
pub const DOWNLOAD_FILE_NAME: &str = "debate-analysis.txt";

/// Something that can take text for the system clipboard
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> AppResult<()>;
}

/// The OS clipboard via arboard
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> AppResult<()> {
        let mut clipboard = Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}

/// Copy `text` to the clipboard. Returns `None` when there is nothing to copy.
pub fn copy_text(text: Option<&str>, clipboard: &mut dyn ClipboardWriter) -> Option<AppResult<()>> {
    let text = text.filter(|t| !t.is_empty())?;
    Some(clipboard.write_text(text))
}

/// Write `text` to `dir/debate-analysis.txt`, replacing any previous file
///
/// The content goes to a temporary file in the same directory first and is
/// then persisted under the final name, so a failed write never leaves a
/// truncated download behind.
pub fn save_text(text: &str, dir: &Path) -> AppResult<PathBuf> {
    let target = dir.join(DOWNLOAD_FILE_NAME);

    let mut temp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| AppError::Download(format!("{}: {e}", dir.display())))?;
    temp.write_all(text.as_bytes())
        .map_err(|e| AppError::Download(e.to_string()))?;
    temp.persist(&target)
        .map_err(|e| AppError::Download(e.error.to_string()))?;

    Ok(target)
}
