pub mod authors;
pub mod fields;
pub mod notes;
pub mod tags;

use crate::error::Result;
use crate::parser::text::EntryText;
use crate::record::BibRecord;
use tags::TagTable;

/// Run every extractor over one entry and assemble the record. Only a
/// malformed author list fails the entry.
pub fn extract_all(text: &EntryText, table: &TagTable) -> Result<BibRecord> {
    let title = fields::title(text);
    let year = fields::year(text);
    let url = fields::url(text);
    let authors = authors::extract(text)?;
    let tags = tags::extract(text, table);
    let notes = notes::extract(text);

    Ok(BibRecord {
        title,
        authors,
        year,
        url,
        status_tags: tags.status,
        topic_tags: tags.topics,
        notes,
    })
}

// ── Tests ──
