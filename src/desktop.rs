use crate::model::Entry;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesktopError {
    #[error("reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0:?} has no Name= key")]
    MissingName(PathBuf),
    #[error("{0:?} has no Exec= key")]
    MissingExec(PathBuf),
}

/// Parse one freedesktop `.desktop` file into an app [`Entry`].
///
/// `Ok(None)` means the file is valid but hidden (`NoDisplay=true` or
/// `Hidden=true`) and should be silently left out of the index.
pub fn entry_from_desktop_file(path: &Path) -> Result<Option<Entry>, DesktopError> {
    let content = fs::read_to_string(path).map_err(|source| DesktopError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut name = None;
    let mut exec = None;
    let mut icon = None;
    let mut hidden = false;
    let mut in_desktop_entry = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line == "[Desktop Entry]" {
            in_desktop_entry = true;
            continue;
        }
        if line.starts_with('[') {
            // Only the main group matters; actions and such are ignored.
            in_desktop_entry = false;
            continue;
        }
        if !in_desktop_entry {
            continue;
        }

        if let Some(value) = line.strip_prefix("Name=") {
            if name.is_none() {
                name = Some(value.to_string());
            }
        } else if let Some(value) = line.strip_prefix("Exec=") {
            // Strip %-field codes; the launcher never substitutes them.
            let clean: String = value
                .split_whitespace()
                .filter(|part| !part.starts_with('%'))
                .collect::<Vec<_>>()
                .join(" ");
            exec = Some(clean);
        } else if let Some(value) = line.strip_prefix("Icon=") {
            icon = Some(value.to_string());
        } else if line.strip_prefix("NoDisplay=") == Some("true")
            || line.strip_prefix("Hidden=") == Some("true")
        {
            hidden = true;
        }
    }

    if hidden {
        return Ok(None);
    }

    let name = name.ok_or_else(|| DesktopError::MissingName(path.to_path_buf()))?;
    let exec = exec.ok_or_else(|| DesktopError::MissingExec(path.to_path_buf()))?;
    Ok(Some(Entry::app(name, exec, icon)))
}
