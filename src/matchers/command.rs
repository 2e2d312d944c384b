use crate::matchers::is_executable;
use crate::model::{Entry, EntryList};
use crate::query;
use std::fs;

/// Fallback "run this as a shell command" candidate.
///
/// A path query pointing at an existing directory or non-executable file
/// suppresses the entry; typing such a path should not offer to "run" it.
pub fn search(query: &str) -> EntryList {
    if query.is_empty() {
        return Vec::new();
    }

    let Some(resolved) = query::expand(query) else {
        return vec![Entry::command(query)];
    };

    match fs::metadata(&resolved) {
        Ok(meta) if is_executable(&meta) => vec![Entry::command(query)],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    #[test]
    fn empty_query_matches_nothing() {
        assert!(search("").is_empty());
    }

    #[test]
    fn non_path_query_yields_one_verbatim_entry() {
        let results = search("echo hi");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].command, "echo hi");
        assert_eq!(results[0].completion, "echo hi");
    }

    #[test]
    fn existing_directory_suppresses_the_entry() {
        let dir = TempDir::new().expect("tempdir");
        assert!(search(&dir.path().to_string_lossy()).is_empty());
    }

    #[test]
    fn non_executable_file_suppresses_the_entry() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("notes.txt");
        fs::write(&path, "x").expect("write");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).expect("chmod");
        assert!(search(&path.to_string_lossy()).is_empty());
    }

    #[test]
    fn missing_path_suppresses_the_entry() {
        let dir = TempDir::new().expect("tempdir");
        let raw = format!("{}/missing", dir.path().to_string_lossy());
        assert!(search(&raw).is_empty());
    }

    #[test]
    fn executable_file_yields_the_entry() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("script");
        fs::write(&path, "#!/bin/sh\n").expect("write");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");

        let raw = path.to_string_lossy().into_owned();
        let results = search(&raw);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].command, raw);
    }
}
