//! Convert BibTeX entries into linked markdown notes.
//!
//! Pipeline: entry text → extracted fields → [`BibRecord`] → rendered note.

pub mod error;
pub mod files;
pub mod parser;
pub mod record;
pub mod render;
pub mod settings;

pub use error::{Error, Result};
pub use parser::extract::tags::{TagAction, TagTable};
pub use parser::{parse_entry, parse_file};
pub use record::{Author, BibRecord};
pub use render::render_note;
pub use settings::Settings;
