use std::sync::LazyLock;

use regex::Regex;

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*@\s*[A-Za-z]+\s*\{").unwrap());
static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*@\s*[A-Za-z]+\s*\{\s*([^,\s}]+)\s*,").unwrap());

/// Split a `.bib` file into entries. An entry starts at a `@type{` header
/// line and runs up to the next one. Text before the first entry is dropped.
pub fn split_entries(text: &str) -> Vec<&str> {
    let mut starts = Vec::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if HEADER_RE.is_match(line) {
            starts.push(offset);
        }
        offset += line.len();
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            &text[start..end]
        })
        .collect()
}

/// Citation key from the `@type{key,` header, if the entry has one.
pub fn citation_key(entry: &str) -> Option<&str> {
    let caps = KEY_RE.captures(entry)?;
    caps.get(1).map(|m| m.as_str())
}
