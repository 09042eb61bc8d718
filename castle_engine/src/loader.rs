//! Loader for the text table.
//!
//! The table is read from `text.toml` in the data directory when one exists, so
//! wording can be changed without a rebuild; otherwise the copy compiled into the
//! binary is used.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::data_paths::data_path;
use crate::text::{TextError, TextTable};

/// Text table shipped inside the binary.
pub const EMBEDDED_TEXT: &str = include_str!("../data/text.toml");

/// Load the text table from the data directory, falling back to the embedded copy.
///
/// # Errors
/// Errors bubble up from file IO, TOML parsing, or validation of an on-disk table.
pub fn load_text_table() -> Result<TextTable> {
    let path = data_path("text.toml");
    if path.is_file() {
        load_text_table_from(&path)
    } else {
        info!("no text table at '{}', using embedded copy", path.display());
        embedded_text_table().context("while loading embedded text table")
    }
}

/// Load and validate a text table from a specific file.
///
/// # Errors
/// - on file IO error, TOML parsing error, or validation failure.
pub fn load_text_table_from(path: &Path) -> Result<TextTable> {
    let source =
        fs::read_to_string(path).with_context(|| format!("reading text table from '{}'", path.display()))?;
    let table = TextTable::from_toml(&source).with_context(|| format!("parsing text table '{}'", path.display()))?;
    info!("text table loaded from '{}'", path.display());
    Ok(table)
}

/// Parse the embedded text table.
///
/// # Errors
/// - only if the embedded file itself is broken.
pub fn embedded_text_table() -> Result<TextTable, TextError> {
    TextTable::from_toml(EMBEDDED_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_table_is_valid() {
        assert!(embedded_text_table().is_ok());
    }

    #[test]
    fn loads_an_edited_copy_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let edited = EMBEDDED_TEXT.replace("Go where?", "Which way?");
        file.write_all(edited.as_bytes()).unwrap();
        let table = load_text_table_from(file.path()).unwrap();
        assert_eq!(table.message(castle_data::MessageKey::GoWhere), "Which way?");
    }

    #[test]
    fn reports_the_failing_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"intro = \"only\"\n").unwrap();
        let err = load_text_table_from(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains(&file.path().display().to_string()));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_text_table_from(Path::new("/definitely/not/here/text.toml")).is_err());
    }
}
