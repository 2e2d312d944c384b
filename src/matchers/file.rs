use crate::matchers::is_executable;
use crate::model::{Entry, EntryList, Label};
use crate::query::{self, PathQuery};
use log::warn;
use std::fs;
use std::io;

/// Match a path query against the filesystem.
///
/// Produces an "open this path" entry when the query names an existing
/// non-executable path, followed by prefix completions from listing the
/// containing directory. Non-path queries match nothing.
pub fn search(query: &str) -> EntryList {
    match query::resolve(query) {
        Some(pq) => search_resolved(&pq),
        None => Vec::new(),
    }
}

fn search_resolved(pq: &PathQuery) -> EntryList {
    let mut results = Vec::new();

    if let Ok(meta) = fs::metadata(&pq.resolved) {
        if !is_executable(&meta) {
            let label = Label::highlighted(pq.original.clone(), 0, pq.original.len());
            match Entry::for_file(&pq.resolved, label, pq.original.clone()) {
                Ok(entry) => results.push(entry),
                Err(err) => warn!("skipping file entry {:?}: {}", pq.resolved, err),
            }
        }
    }

    let names = match list_directory(&pq.dir_path) {
        Ok(names) => names,
        Err(err) => {
            warn!("skipping directory listing {:?}: {}", pq.dir_path, err);
            return results;
        }
    };

    for name in names {
        if !name.starts_with(&pq.prefix) {
            continue;
        }
        let full_path = format!("{}{}", pq.dir_path, name);
        if full_path == pq.resolved {
            // Already covered by the "open this path" entry above.
            continue;
        }

        let mut completion = format!("{}{}", pq.display_dir, name);
        let is_dir = fs::metadata(&full_path)
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        if is_dir {
            completion.push('/');
        }

        // `starts_with` guarantees the name is at least prefix-length long
        // and that the cut lands on a char boundary.
        let label = Label::highlighted(format!(".../{name}"), 4, pq.prefix.len());
        match Entry::for_file(&full_path, label, completion) {
            Ok(entry) => results.push(entry),
            Err(err) => warn!("skipping file entry {:?}: {}", full_path, err),
        }
    }

    results
}

/// Directory entry names, sorted lexicographically. This sort is the only
/// ordering applied to filename matches.
fn list_directory(dir: &str) -> io::Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|item| item.ok())
        .filter_map(|item| item.file_name().into_string().ok())
        .collect();
    names.sort();
    Ok(names)
}
