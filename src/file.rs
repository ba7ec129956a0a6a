// src/file.rs

use std::{fs, path::Path};

use crate::error::{Result, SpoilerError};

fn read_error(path: &Path, source: std::io::Error) -> SpoilerError {
    SpoilerError::Read { path: path.to_path_buf(), source }
}

/// Whole file as UTF-8 text (card database and request list alike).
pub fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|e| read_error(path, e))?;
    logd!("Read {} ({} bytes)", path.display(), text.len());
    Ok(text)
}
