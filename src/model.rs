use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Display text with an optional highlighted byte range (offset, length).
///
/// Rendering is the host's job; `markup` produces the `<b>…</b>` form the
/// CLI printer uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub highlight: Option<(usize, usize)>,
}

impl Label {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: None,
        }
    }

    pub fn highlighted(text: impl Into<String>, offset: usize, len: usize) -> Self {
        Self {
            text: text.into(),
            highlight: Some((offset, len)),
        }
    }

    /// Render with the highlighted range wrapped in `<b>` tags. A range that
    /// does not fall on char boundaries renders as plain text instead of
    /// panicking.
    pub fn markup(&self) -> String {
        if let Some((offset, len)) = self.highlight {
            let end = offset.saturating_add(len);
            if let (Some(head), Some(hit), Some(tail)) = (
                self.text.get(..offset),
                self.text.get(offset..end),
                self.text.get(end..),
            ) {
                return format!("{head}<b>{hit}</b>{tail}");
            }
        }
        self.text.clone()
    }
}

/// One launchable candidate: an application, a file, or a shell command.
#[derive(Debug, Clone)]
pub struct Entry {
    pub icon: String,                // Icon name for the host to resolve
    pub label: Label,                // Display text with match highlight
    pub completion: String,          // Replaces the query on tab-completion
    pub command: String,             // Command line to run on activation
    pub search_key: String,          // Lowercased name; app entries only
    pub match_offset: Option<usize>, // Set by the app matcher per query
}

impl Entry {
    pub fn app(name: String, exec: String, icon: Option<String>) -> Self {
        Self {
            icon: icon.unwrap_or_else(|| "application-x-executable".to_string()),
            search_key: name.to_lowercase(),
            completion: name.clone(),
            label: Label::plain(name),
            command: exec,
            match_offset: None,
        }
    }

    /// Entry that opens `path` with the platform handler. Fails when the
    /// path cannot be stat'ed, which callers log and skip.
    pub fn for_file(path: &str, label: Label, completion: String) -> io::Result<Self> {
        let meta = fs::metadata(Path::new(path))?;
        let icon = if meta.is_dir() {
            "folder"
        } else if meta.permissions().mode() & 0o111 != 0 {
            "application-x-executable"
        } else {
            "text-x-generic"
        };
        Ok(Self {
            icon: icon.to_string(),
            label,
            completion,
            command: format!("xdg-open {path}"),
            search_key: String::new(),
            match_offset: None,
        })
    }

    /// Entry that runs `query` verbatim as a shell command.
    pub fn command(query: &str) -> Self {
        Self {
            icon: "utilities-terminal".to_string(),
            label: Label::highlighted(query.to_string(), 0, query.len()),
            completion: query.to_string(),
            command: query.to_string(),
            search_key: String::new(),
            match_offset: None,
        }
    }
}

pub type EntryList = Vec<Entry>;

/// Index order: case-insensitive name ascending. The sort is stable, so
/// entries with equal names keep their scan order.
pub fn sort_by_name(entries: &mut [Entry]) {
    entries.sort_by(|a, b| a.search_key.cmp(&b.search_key));
}

/// Query-result order: earliest match first, ties broken alphabetically.
pub fn sort_by_match(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        let a_offset = a.match_offset.unwrap_or(usize::MAX);
        let b_offset = b.match_offset.unwrap_or(usize::MAX);
        a_offset
            .cmp(&b_offset)
            .then_with(|| a.search_key.cmp(&b.search_key))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_wraps_highlight_in_bold() {
        let label = Label::highlighted("Firefox", 0, 2);
        assert_eq!(label.markup(), "<b>Fi</b>refox");
    }

    #[test]
    fn markup_without_highlight_is_plain() {
        assert_eq!(Label::plain("Files").markup(), "Files");
    }

    #[test]
    fn markup_refuses_out_of_bounds_highlight() {
        let label = Label::highlighted("ab", 1, 5);
        assert_eq!(label.markup(), "ab");
    }

    #[test]
    fn markup_refuses_split_char_boundary() {
        // 'é' is two bytes; a highlight ending inside it must not panic.
        let label = Label::highlighted("café", 3, 1);
        assert_eq!(label.markup(), "café");
    }

    #[test]
    fn sort_by_match_ranks_offset_before_alphabet() {
        let mut entries = vec![
            Entry::app("zebra".into(), "zebra".into(), None),
            Entry::app("apple".into(), "apple".into(), None),
        ];
        entries[0].match_offset = Some(0);
        entries[1].match_offset = Some(3);
        sort_by_match(&mut entries);
        assert_eq!(entries[0].search_key, "zebra");
        assert_eq!(entries[1].search_key, "apple");
    }

    #[test]
    fn sort_by_match_breaks_offset_ties_alphabetically() {
        let mut entries = vec![
            Entry::app("Firefox".into(), "firefox".into(), None),
            Entry::app("Files".into(), "nautilus".into(), None),
        ];
        entries[0].match_offset = Some(0);
        entries[1].match_offset = Some(0);
        sort_by_match(&mut entries);
        assert_eq!(entries[0].search_key, "files");
        assert_eq!(entries[1].search_key, "firefox");
    }

    #[test]
    fn command_entry_runs_query_verbatim() {
        let entry = Entry::command("echo hi");
        assert_eq!(entry.command, "echo hi");
        assert_eq!(entry.completion, "echo hi");
        assert_eq!(entry.match_offset, None);
    }
}
