pub mod entries;
pub mod extract;
pub mod text;

use crate::error::Result;
use crate::record::BibRecord;
use extract::tags::TagTable;
use text::EntryText;

/// Raw entry text → record.
pub fn parse_entry(raw: &str, table: &TagTable) -> Result<BibRecord> {
    let text = EntryText::from_raw(raw);
    extract::extract_all(&text, table)
}

/// Parse every entry of a `.bib` file. A single-entry file without an `@`
/// header is parsed as one entry.
pub fn parse_file(raw: &str, table: &TagTable) -> Vec<Result<BibRecord>> {
    let entries = entries::split_entries(raw);
    if entries.is_empty() {
        if EntryText::from_raw(raw).is_blank() {
            return Vec::new();
        }
        return vec![parse_entry(raw, table)];
    }
    entries.into_iter().map(|e| parse_entry(e, table)).collect()
}
