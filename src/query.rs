use directories::BaseDirs;
use std::fs;

/// A query parsed as an absolute path plus a filename prefix to complete.
///
/// `dir_path` always ends with `/`. `display_dir` is the same directory
/// portion computed from the raw query, so a typed `~` survives into
/// completion strings instead of expanding in the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuery {
    pub original: String,
    pub resolved: String,
    pub dir_path: String,
    pub prefix: String,
    pub display_dir: String,
}

fn home_dir() -> Option<String> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_string_lossy().into_owned())
}

/// Expand a leading `~` to the home directory. `None` means the query is
/// not a path query at all (empty, or starting with neither `/` nor `~`).
pub fn expand(query: &str) -> Option<String> {
    match *query.as_bytes().first()? {
        b'/' => Some(query.to_string()),
        b'~' => Some(format!("{}{}", home_dir()?, &query[1..])),
        _ => None,
    }
}

/// Parse `query` into a [`PathQuery`], or `None` if it is not a path query.
pub fn resolve(query: &str) -> Option<PathQuery> {
    let resolved = expand(query)?;

    // One stat decides directory-vs-file for both the expanded and the
    // display split, keeping the two structurally consistent.
    let is_dir = fs::metadata(&resolved)
        .map(|meta| meta.is_dir())
        .unwrap_or(false);

    let (dir_path, prefix) = if is_dir {
        (with_trailing_slash(&resolved), String::new())
    } else {
        // Expansion always yields a leading '/', so the split cannot fail.
        let cut = resolved.rfind('/')?;
        (
            resolved[..=cut].to_string(),
            resolved[cut + 1..].to_string(),
        )
    };

    let display_dir = if is_dir {
        with_trailing_slash(query)
    } else {
        match query.rfind('/') {
            Some(cut) => query[..=cut].to_string(),
            None => query.to_string(),
        }
    };

    Some(PathQuery {
        original: query.to_string(),
        resolved,
        dir_path,
        prefix,
        display_dir,
    })
}

fn with_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}
