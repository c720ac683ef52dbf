// Command-line front end: read text from an argument, a file or stdin and
// print its TF-IDF extractive summary. `batch` summarizes every document in
// a directory independently.
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use tfidf_summarizer::input::{decode_text, is_supported, read_document};
use tfidf_summarizer::{Config, Summarizer};

#[derive(Parser)]
#[command(name = "tfsum", about = "Extractive text summarizer using sentence-level TF-IDF")]
struct Cli {
    /// JSON config file (language, stopword list, default sentence count)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize one text. Reads stdin when neither --file nor --text is given.
    Summarize {
        /// .txt, .md, .pdf or .docx document
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Text to summarize
        #[arg(short, long)]
        text: Option<String>,
        /// Number of summary sentences
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
        sentences: Option<u64>,
        /// Print selected indices and scores as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarize every supported document under a directory.
    Batch {
        #[arg(short, long)]
        dir: PathBuf,
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
        sentences: Option<u64>,
        #[arg(short, long, default_value = "summaries.json")]
        out: PathBuf,
    },
}

#[derive(Serialize, Debug)]
struct BatchEntry {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(p) => Config::load(p)?,
        None => Config::default(),
    };
    Ok(config.with_env_overrides())
}

fn read_input(file: Option<&Path>, text: Option<String>) -> Result<String> {
    if let Some(p) = file {
        return read_document(p);
    }
    if let Some(t) = text {
        return Ok(t);
    }
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes).context("failed to read stdin")?;
    Ok(decode_text(bytes)?)
}

fn print_summary(summary: &str) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    writeln!(stdout, "Summary:")?;
    stdout.reset()?;
    writeln!(stdout, "{}", summary)?;
    Ok(())
}

fn summarize_input(
    summarizer: &Summarizer,
    file: Option<&Path>,
    text: Option<String>,
    sentences: usize,
    json: bool,
) -> Result<()> {
    let text = read_input(file, text)?;
    if json {
        println!("{}", summary_json(summarizer, &text, sentences)?);
        return Ok(());
    }
    if text.trim().is_empty() {
        eprintln!("Nothing to summarize: provide text with --text, --file or stdin.");
        return Ok(());
    }
    print_summary(&summarizer.summarize(&text, sentences))
}

/// Blank input still produces a document, with an empty `summary`.
fn summary_json(summarizer: &Summarizer, text: &str, sentences: usize) -> Result<String> {
    let summary = summarizer.summarize_detailed(text, sentences);
    Ok(serde_json::to_string_pretty(&summary)?)
}

fn collect_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_supported(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

fn summarize_files(
    summarizer: &Summarizer,
    files: &[PathBuf],
    sentences: usize,
    pb: &ProgressBar,
) -> Vec<BatchEntry> {
    files
        .par_iter()
        .map(|p| {
            let path = p.to_string_lossy().to_string();
            let entry = match read_document(p) {
                Ok(text) => BatchEntry {
                    path,
                    summary: Some(summarizer.summarize(&text, sentences)),
                    error: None,
                },
                Err(e) => {
                    warn!(path = %p.display(), error = %e, "skipping document");
                    BatchEntry {
                        path,
                        summary: None,
                        error: Some(format!("{:#}", e)),
                    }
                }
            };
            pb.inc(1);
            entry
        })
        .collect()
}

fn summarize_dir(summarizer: &Summarizer, dir: &Path, sentences: usize, out: &Path) -> Result<()> {
    let files = collect_files(dir);
    info!(dir = %dir.display(), files = files.len(), "summarizing directory");

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {wide_bar} {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );
    let entries = summarize_files(summarizer, &files, sentences, &pb);
    pb.finish_with_message("summarizing files");

    let failed = entries.iter().filter(|e| e.error.is_some()).count();
    debug!(total = entries.len(), failed, "batch finished");

    let fout = File::create(out).with_context(|| format!("failed to create {}", out.display()))?;
    serde_json::to_writer_pretty(fout, &entries)?;
    println!("Wrote {} summaries to {}", entries.len() - failed, out.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // stopwords are loaded once, before any text is summarized
    let config = load_config(cli.config.as_deref())?;
    let summarizer = config.summarizer()?;

    match cli.command {
        Commands::Summarize { file, text, sentences, json } => {
            let n = sentences.map(|n| n as usize).unwrap_or(config.sentences);
            summarize_input(&summarizer, file.as_deref(), text, n, json)?
        }
        Commands::Batch { dir, sentences, out } => {
            let n = sentences.map(|n| n as usize).unwrap_or(config.sentences);
            summarize_dir(&summarizer, &dir, n, &out)?
        }
    }
    Ok(())
}
