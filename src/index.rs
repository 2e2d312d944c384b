use crate::desktop;
use crate::model::{self, EntryList};
use directories::BaseDirs;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Desktop files above this size are assumed corrupt and skipped.
pub const MAX_DESKTOP_FILE_SIZE: u64 = 1024 * 1024;

/// The fixed scan set: system-wide applications first, then the user's.
pub fn application_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![Path::new("/usr/share/applications").to_path_buf()];
    if let Some(base_dirs) = BaseDirs::new() {
        dirs.push(base_dirs.data_dir().join("applications"));
    }
    dirs
}

/// Build the application index by scanning the default directories once.
/// Every failure is logged and skipped; a missing system directory must not
/// prevent indexing the user directory.
pub fn build() -> EntryList {
    build_from_dirs(&application_dirs())
}

pub fn build_from_dirs(dirs: &[PathBuf]) -> EntryList {
    let mut entries = Vec::new();

    for dir in dirs {
        let read_dir = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(err) => {
                warn!("skipping application directory {:?}: {}", dir, err);
                continue;
            }
        };
        debug!("scanning desktop files in {:?}", dir);

        for item in read_dir {
            let path = match item {
                Ok(item) => item.path(),
                Err(err) => {
                    warn!("skipping unreadable entry in {:?}: {}", dir, err);
                    continue;
                }
            };
            if path.extension().and_then(|s| s.to_str()) != Some("desktop") {
                continue;
            }
            let meta = match fs::metadata(&path) {
                Ok(meta) => meta,
                Err(err) => {
                    warn!("skipping entry file {:?}: {}", path, err);
                    continue;
                }
            };
            if meta.is_dir() {
                continue;
            }
            if meta.len() > MAX_DESKTOP_FILE_SIZE {
                warn!("skipping oversized desktop file {:?}", path);
                continue;
            }

            match desktop::entry_from_desktop_file(&path) {
                Ok(Some(entry)) => entries.push(entry),
                Ok(None) => {}
                Err(err) => debug!("skipping desktop file: {}", err),
            }
        }
    }

    model::sort_by_name(&mut entries);
    info!("indexed {} application entries", entries.len());
    entries
}
