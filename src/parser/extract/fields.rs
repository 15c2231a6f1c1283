use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::parser::text::EntryText;

pub const TITLE: &str = "title";
pub const YEAR: &str = "year";
pub const URL: &str = "url";
pub const AUTHOR: &str = "author";
pub const KEYWORDS: &str = "keywords";

// Unbraced values such as `year = 2020,`
static BARE_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([^{},]+?)\s*,?\s*$").unwrap());

/// Value of the first line containing `<key> = `, or `None` when no line
/// carries the key.
pub fn scan(text: &EntryText, key: &str) -> Option<String> {
    let marker = marker(key);
    let found = text
        .first_matching(|l| l.contains(&marker))
        .and_then(|line| value_on_line(line, &marker));
    if found.is_none() {
        debug!(field = key, "field not found");
    }
    found
}

/// Like [`scan`], but the last matching line wins.
pub fn scan_last(text: &EntryText, key: &str) -> Option<String> {
    let marker = marker(key);
    text.last_matching(|l| l.contains(&marker))
        .and_then(|line| value_on_line(line, &marker))
}

/// Title with every literal brace removed.
pub fn title(text: &EntryText) -> Option<String> {
    scan(text, TITLE)
        .map(|t| t.replace(['{', '}'], ""))
        .filter(|t| !t.is_empty())
}

pub fn year(text: &EntryText) -> Option<String> {
    scan(text, YEAR)
}

pub fn url(text: &EntryText) -> Option<String> {
    scan(text, URL)
}

fn marker(key: &str) -> String {
    format!("{} = ", key)
}

/// Text between the first `{` after the marker and the last `}` on the line.
fn value_on_line(line: &str, marker: &str) -> Option<String> {
    let start = line.find(marker)? + marker.len();
    let rest = &line[start..];

    let value = match rest.find('{') {
        Some(open) => {
            let inner = &rest[open + 1..];
            let Some(close) = inner.rfind('}') else {
                debug!(line, "braced value not closed on its line");
                return None;
            };
            inner[..close].to_string()
        }
        None => BARE_VALUE_RE.captures(rest)?[1].to_string(),
    };

    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
