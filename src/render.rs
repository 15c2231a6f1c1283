use crate::record::BibRecord;
use crate::settings::RenderSettings;

const PLACEHOLDER_SECTIONS: &[&str] = &["Summary", "Key Takeaways", "Relevance (or lack thereof)"];

/// Serialize a record as a markdown note. Output depends only on the record
/// and the render settings.
pub fn render_note(record: &BibRecord, settings: &RenderSettings) -> String {
    let mut out = String::new();

    out.push_str("# ");
    out.push_str(record.title_or_empty());
    if let Some(year) = &record.year {
        out.push_str(&format!(" ({})", year));
    }
    out.push_str("\n\n");

    match &record.url {
        Some(url) => out.push_str(&format!("[Link]({})\n", url)),
        None => {
            out.push_str(&settings.missing_url);
            out.push('\n');
        }
    }
    out.push('\n');

    out.push_str("## Tags\n\n");
    push_tag_block(&mut out, &record.status_tags);
    push_tag_block(&mut out, &record.topic_tags);

    out.push_str("## Authors\n\n");
    for author in &record.authors {
        out.push_str(&format!(
            "- [[{}{}|{}]]\n",
            settings.link_prefix,
            author.link_target(),
            author.display_name()
        ));
    }
    if !record.authors.is_empty() {
        out.push('\n');
    }

    for heading in PLACEHOLDER_SECTIONS {
        out.push_str(&format!("## {}\n\n", heading));
    }

    if !record.notes.is_empty() {
        out.push_str("## Imported Notes\n\n");
        for line in &record.notes {
            out.push_str(&format!("- {}\n", line));
        }
        out.push('\n');
    }

    out.push_str("---\n");
    out.push_str(&settings.signature);
    out.push('\n');
    out
}

fn push_tag_block(out: &mut String, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    for tag in tags {
        out.push_str(&format!("#{}\n", tag));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Author;

    fn record() -> BibRecord {
        BibRecord {
            title: Some("Attention Is All You Need".into()),
            authors: vec![
                Author { first: "Ashish".into(), last: "Vaswani".into() },
                Author { first: "Noam".into(), last: "Shazeer".into() },
            ],
            year: Some("2017".into()),
            url: Some("https://arxiv.org/abs/1706.03762".into()),
            status_tags: vec!["high-priority".into()],
            topic_tags: vec!["machine-learning".into(), "transformers".into()],
            notes: vec!["Introduces the transformer.".into()],
        }
    }

    #[test]
    fn full_note_layout() {
        let note = render_note(&record(), &RenderSettings::default());
        let expected = "\
# Attention Is All You Need (2017)

[Link](https://arxiv.org/abs/1706.03762)

## Tags

#high-priority

#machine-learning
#transformers

## Authors

- [[@Ashish_Vaswani|Ashish Vaswani]]
- [[@Noam_Shazeer|Noam Shazeer]]

## Summary

## Key Takeaways

## Relevance (or lack thereof)

## Imported Notes

- Introduces the transformer.

---
*Generated by bib_notes*
";
        assert_eq!(note, expected);
    }

    #[test]
    fn missing_url_uses_placeholder() {
        let mut r = record();
        r.url = None;
        let note = render_note(&r, &RenderSettings::default());
        assert!(note.contains("\n\nNo link available.\n\n## Tags"));
        assert!(!note.contains("[Link]"));
    }

    #[test]
    fn optional_sections_omitted() {
        let mut r = record();
        r.topic_tags.clear();
        r.notes.clear();
        r.year = None;
        let note = render_note(&r, &RenderSettings::default());
        assert!(note.starts_with("# Attention Is All You Need\n\n"));
        assert!(note.contains("## Tags\n\n#high-priority\n\n## Authors"));
        assert!(!note.contains("## Imported Notes"));
        assert!(note.ends_with("## Relevance (or lack thereof)\n\n---\n*Generated by bib_notes*\n"));
    }

    #[test]
    fn untitled_heading() {
        let mut r = record();
        r.title = None;
        let note = render_note(&r, &RenderSettings::default());
        assert!(note.starts_with("#  (2017)\n"));
    }

    #[test]
    fn custom_render_settings() {
        let settings = RenderSettings {
            link_prefix: "people/".into(),
            missing_url: "n/a".into(),
            signature: "-- me".into(),
        };
        let mut r = record();
        r.url = None;
        let note = render_note(&r, &settings);
        assert!(note.contains("- [[people/Noam_Shazeer|Noam Shazeer]]"));
        assert!(note.contains("\nn/a\n"));
        assert!(note.ends_with("---\n-- me\n"));
    }

    #[test]
    fn deterministic() {
        let s = RenderSettings::default();
        assert_eq!(render_note(&record(), &s), render_note(&record(), &s));
    }
}
