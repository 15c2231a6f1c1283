use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use bib_notes::files;
use bib_notes::{parse_file, render_note, Settings};

#[derive(Parser)]
#[command(name = "bib_notes", about = "Turn BibTeX entries into linked markdown notes")]
struct Cli {
    /// Settings file (default: ./bib_notes.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one note per entry of a .bib file
    Convert {
        file: PathBuf,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Convert every .bib file in a directory
    Batch {
        dir: PathBuf,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
        /// Max files to convert (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Split a multi-entry .bib file into one file per entry
    Split {
        file: PathBuf,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Print rendered notes (or parsed records) without writing files
    Show {
        file: PathBuf,
        /// Print records as JSON instead of markdown
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    let table = settings.tag_table();
    info!(rules = table.len(), default_status = table.default_status(), "settings loaded");

    match cli.command {
        Commands::Convert { file, out } => {
            files::ensure_dir(&out)?;
            let counts =
                files::convert_files(&[file], &out, &settings.render, &table, &progress_bar()?)?;
            counts.print();
            if counts.entries > 0 && counts.written == 0 {
                bail!("no entry could be converted");
            }
        }
        Commands::Batch { dir, out, limit } => {
            let mut bib_files = files::list_bib_files(&dir)?;
            if let Some(n) = limit {
                bib_files.truncate(n);
            }
            if bib_files.is_empty() {
                println!("No .bib files in {}.", dir.display());
                return Ok(());
            }
            files::ensure_dir(&out)?;
            println!("Converting {} files...", bib_files.len());
            let counts =
                files::convert_files(&bib_files, &out, &settings.render, &table, &progress_bar()?)?;
            counts.print();
        }
        Commands::Split { file, out } => {
            let raw = files::read_text(&file)?;
            files::ensure_dir(&out)?;
            let written = files::split_into_files(&raw, &out)?;
            println!("Split {} into {} entries.", file.display(), written.len());
        }
        Commands::Show { file, json } => {
            let raw = files::read_text(&file)?;
            let mut records = Vec::new();
            for (i, result) in parse_file(&raw, &table).into_iter().enumerate() {
                match result {
                    Ok(record) => records.push(record),
                    Err(e) => warn!(entry = i + 1, "skipping entry: {}", e),
                }
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                let notes: Vec<String> = records
                    .iter()
                    .map(|r| render_note(r, &settings.render))
                    .collect();
                print!("{}", notes.join("\n"));
            }
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }
    Ok(())
}

fn progress_bar() -> Result<ProgressBar> {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
