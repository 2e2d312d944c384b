use crate::model::{self, Entry, EntryList, Label};

/// Substring-search the application index.
///
/// Plain case-insensitive substring match; results carry the offset of the
/// first occurrence and a label highlighting the matched run. An empty
/// query matches nothing, never the full index.
pub fn search(query: &str, index: &[Entry]) -> EntryList {
    if query.is_empty() {
        return Vec::new();
    }

    let lo_query = query.to_lowercase();
    let mut results: EntryList = Vec::new();

    for entry in index {
        let Some(offset) = entry.search_key.find(&lo_query) else {
            continue;
        };
        // Clone before touching match state; the index entry stays pristine.
        let mut hit = entry.clone();
        hit.match_offset = Some(offset);
        // Highlight length is the original query's byte length so the
        // label keeps the name's own casing.
        hit.label = Label::highlighted(hit.label.text, offset, query.len());
        results.push(hit);
    }

    model::sort_by_match(&mut results);
    results
}
