use serde::Serialize;

pub const NOTE_EXTENSION: &str = "md";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub first: String,
    pub last: String,
}

impl Author {
    /// "First Last"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// Display name with spaces replaced by underscores, used as a link target.
    pub fn link_target(&self) -> String {
        self.display_name().replace(' ', "_")
    }
}

/// Everything extracted from one bibliographic entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BibRecord {
    pub title: Option<String>,
    pub authors: Vec<Author>,
    pub year: Option<String>,
    pub url: Option<String>,
    pub status_tags: Vec<String>,
    pub topic_tags: Vec<String>,
    pub notes: Vec<String>,
}

impl BibRecord {
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Note filename: alphanumeric characters of the title plus `.md`.
    pub fn filename(&self) -> String {
        note_filename(self.title_or_empty())
    }
}

pub fn note_filename(title: &str) -> String {
    let stem: String = title.chars().filter(|c| c.is_alphanumeric()).collect();
    format!("{}.{}", stem, NOTE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: Option<&str>) -> BibRecord {
        BibRecord {
            title: title.map(str::to_string),
            authors: Vec::new(),
            year: None,
            url: None,
            status_tags: vec!["not-read".into()],
            topic_tags: Vec::new(),
            notes: Vec::new(),
        }
    }

    #[test]
    fn filename_strips_punctuation() {
        assert_eq!(record(Some("A Study: Part 2!")).filename(), "AStudyPart2.md");
    }

    #[test]
    fn filename_is_idempotent() {
        let once = note_filename("A Study: Part 2!");
        let stem = once.trim_end_matches(".md");
        assert_eq!(note_filename(stem), once);
    }

    #[test]
    fn filename_keeps_unicode_letters() {
        assert_eq!(note_filename("Über Café-Theorie"), "ÜberCaféTheorie.md");
    }

    #[test]
    fn untitled_record() {
        assert_eq!(record(None).filename(), ".md");
        assert_eq!(record(None).title_or_empty(), "");
    }

    #[test]
    fn author_names() {
        let a = Author {
            first: "Mary Ann".into(),
            last: "van Dyke".into(),
        };
        assert_eq!(a.display_name(), "Mary Ann van Dyke");
        assert_eq!(a.link_target(), "Mary_Ann_van_Dyke");
    }
}
