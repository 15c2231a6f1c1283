use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::parser::entries::{citation_key, split_entries};
use crate::parser::extract::tags::TagTable;
use crate::parser::parse_entry;
use crate::record::BibRecord;
use crate::render::render_note;
use crate::settings::RenderSettings;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

const BIB_EXTENSION: &str = "bib";
const CHUNK_SIZE: usize = 500;

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Render the note in memory and write it with a single call. An existing
/// note with the same filename is overwritten.
pub fn write_note(dir: &Path, record: &BibRecord, settings: &RenderSettings) -> Result<PathBuf> {
    let filename = record.filename();
    if record.title.is_none() {
        warn!(%filename, "entry has no title");
    }
    let note = render_note(record, settings);
    let path = dir.join(filename);
    fs::write(&path, note).map_err(|e| Error::io(&path, e))?;
    debug!(path = %path.display(), "note written");
    Ok(path)
}

pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

/// `*.bib` files directly inside `dir`, sorted by name.
pub fn list_bib_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        let is_bib = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(BIB_EXTENSION));
        if is_bib && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Write each entry of a multi-entry file to `{citation_key}.bib`, or
/// `entry_{n}.bib` when the header has no key.
pub fn split_into_files(raw: &str, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (i, entry) in split_entries(raw).into_iter().enumerate() {
        let name = match citation_key(entry) {
            Some(key) => format!("{}.{}", sanitize_key(key), BIB_EXTENSION),
            None => format!("entry_{}.{}", i + 1, BIB_EXTENSION),
        };
        let path = dir.join(name);
        if written.contains(&path) {
            warn!(path = %path.display(), "duplicate citation key, overwriting");
        }
        fs::write(&path, entry).map_err(|e| Error::io(&path, e))?;
        written.push(path);
    }
    Ok(written)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertCounts {
    pub files: usize,
    pub entries: usize,
    pub written: usize,
    pub failed: usize,
    pub collisions: usize,
}

impl ConvertCounts {
    pub fn print(&self) {
        println!(
            "Wrote {} notes from {} entries in {} files ({} failed, {} overwritten).",
            self.written, self.entries, self.files, self.failed, self.collisions,
        );
    }
}

/// One entry of some input file, tagged with its origin for diagnostics.
struct PendingEntry {
    source: PathBuf,
    index: usize,
    text: String,
}

type Parsed = (PendingEntry, Result<BibRecord>);

#[cfg(feature = "rayon")]
fn parse_all(entries: Vec<PendingEntry>, table: &TagTable) -> Vec<Parsed> {
    entries
        .into_par_iter()
        .map(|e| {
            let result = parse_entry(&e.text, table);
            (e, result)
        })
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn parse_all(entries: Vec<PendingEntry>, table: &TagTable) -> Vec<Parsed> {
    entries
        .into_iter()
        .map(|e| {
            let result = parse_entry(&e.text, table);
            (e, result)
        })
        .collect()
}

fn load_entries(paths: &[PathBuf]) -> Result<Vec<PendingEntry>> {
    let mut pending = Vec::new();
    for path in paths {
        let raw = read_text(path)?;
        let entries = split_entries(&raw);
        if entries.is_empty() && !raw.trim().is_empty() {
            pending.push(PendingEntry {
                source: path.clone(),
                index: 1,
                text: raw,
            });
            continue;
        }
        for (i, text) in entries.into_iter().enumerate() {
            pending.push(PendingEntry {
                source: path.clone(),
                index: i + 1,
                text: text.to_string(),
            });
        }
    }
    Ok(pending)
}

/// Parse every entry of `paths` in parallel, then write notes into `out` in
/// input order. A failed entry writes nothing. Notes whose filenames collide
/// overwrite each other; the later entry wins.
pub fn convert_files(
    paths: &[PathBuf],
    out: &Path,
    settings: &RenderSettings,
    table: &TagTable,
    pb: &ProgressBar,
) -> Result<ConvertCounts> {
    let mut pending = load_entries(paths)?;
    let mut counts = ConvertCounts {
        files: paths.len(),
        entries: pending.len(),
        ..ConvertCounts::default()
    };
    pb.set_length(pending.len() as u64);

    let mut seen: HashMap<String, String> = HashMap::new();
    while !pending.is_empty() {
        let rest = pending.split_off(pending.len().min(CHUNK_SIZE));
        let chunk = std::mem::replace(&mut pending, rest);
        let chunk_len = chunk.len() as u64;

        for (entry, result) in parse_all(chunk, table) {
            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    warn!(
                        file = %entry.source.display(),
                        entry = entry.index,
                        "skipping entry: {}", e
                    );
                    counts.failed += 1;
                    continue;
                }
            };

            let filename = record.filename();
            let title = record.title_or_empty().to_string();
            if let Some(previous) = seen.insert(filename.clone(), title.clone()) {
                warn!(%filename, previous = %previous, current = %title, "filename collision, overwriting");
                counts.collisions += 1;
            }

            write_note(out, &record, settings)?;
            counts.written += 1;
        }
        pb.inc(chunk_len);
    }

    pb.finish_and_clear();
    info!(written = counts.written, failed = counts.failed, "conversion finished");
    Ok(counts)
}

// Citation keys may carry ':' or '/', which are not portable in filenames.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
