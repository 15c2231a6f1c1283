use std::collections::HashMap;

use crate::parser::extract::fields;
use crate::parser::text::EntryText;

const TAG_SEPARATOR: &str = ", ";
pub const DEFAULT_STATUS: &str = "not-read";

/// Built-in vocabulary: source keyword → status tag, `None` drops the keyword.
pub const BUILTIN_RULES: &[(&str, Option<&str>)] = &[
    ("To Read - Low Priority", Some("low-priority")),
    ("To Read - Mid Priority", Some("mid-priority")),
    ("To Read - High Priority", Some("high-priority")),
    ("1st Pass", Some("first-pass")),
    ("2nd Pass", Some("second-pass")),
    ("3rd Pass", Some("third-pass")),
    ("Important", Some("important")),
    ("Archived", None),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagAction {
    Status(String),
    Drop,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedTags {
    pub status: Vec<String>,
    pub topics: Vec<String>,
}

/// Exact-match table for keywords with special meaning. Everything else is a
/// topic tag.
#[derive(Debug, Clone)]
pub struct TagTable {
    actions: HashMap<String, TagAction>,
    default_status: String,
}

impl TagTable {
    pub fn empty(default_status: impl Into<String>) -> Self {
        TagTable {
            actions: HashMap::new(),
            default_status: default_status.into(),
        }
    }

    pub fn with_default_status(mut self, default_status: impl Into<String>) -> Self {
        self.default_status = default_status.into();
        self
    }

    pub fn insert(&mut self, source: impl Into<String>, action: TagAction) {
        self.actions.insert(source.into(), action);
    }

    pub fn lookup(&self, tag: &str) -> Option<&TagAction> {
        self.actions.get(tag)
    }

    pub fn default_status(&self) -> &str {
        &self.default_status
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Split a `keywords` value and sort each keyword into status or topic.
    pub fn classify(&self, raw: &str) -> ClassifiedTags {
        let mut tags = ClassifiedTags::default();

        for tag in raw.split(TAG_SEPARATOR).map(str::trim) {
            if tag.is_empty() {
                continue;
            }
            match self.lookup(tag) {
                Some(TagAction::Status(status)) => tags.status.push(status.clone()),
                Some(TagAction::Drop) => {}
                None => tags.topics.push(topic_tag(tag)),
            }
        }

        if tags.status.is_empty() {
            tags.status.push(self.default_status.clone());
        }
        tags
    }
}

impl Default for TagTable {
    fn default() -> Self {
        let mut table = TagTable::empty(DEFAULT_STATUS);
        for (source, status) in BUILTIN_RULES {
            let action = match status {
                Some(s) => TagAction::Status(s.to_string()),
                None => TagAction::Drop,
            };
            table.insert(*source, action);
        }
        table
    }
}

pub fn topic_tag(tag: &str) -> String {
    tag.to_lowercase().replace(' ', "-")
}

pub fn extract(text: &EntryText, table: &TagTable) -> ClassifiedTags {
    let raw = fields::scan(text, fields::KEYWORDS).unwrap_or_default();
    table.classify(&raw)
}
