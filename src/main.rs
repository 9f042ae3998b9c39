mod diag;
mod discover;
mod index;
mod page;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::warn;

use diag::Diagnostics;

#[derive(Parser)]
#[command(
    name = "scaladoc_extract",
    about = "Extract comment and function records from generated Scaladoc sites"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse member comment blocks out of every .html page under a root
    Pages {
        /// Documentation root to walk recursively
        root: PathBuf,
        /// Write JSON lines here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Flatten a generated index.js into enriched function records
    Index {
        /// Path to the generated index.js artifact
        file: PathBuf,
        /// Write JSON lines here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Pages { root, out } => run_pages(&root, out.as_deref())?,
        Commands::Index { file, out } => run_index(&file, out.as_deref())?,
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}

struct PageCounts {
    pages: usize,
    parsed: usize,
    skipped: usize,
    blocks: usize,
    warnings: usize,
}

impl PageCounts {
    fn print(&self) {
        println!(
            "Parsed {}/{} pages ({} skipped), {} comment blocks, {} warnings.",
            self.parsed, self.pages, self.skipped, self.blocks, self.warnings,
        );
    }
}

fn run_pages(root: &Path, out: Option<&Path>) -> Result<()> {
    let pages = discover::html_pages(root);
    if pages.is_empty() {
        println!("No .html pages under {}", root.display());
        return Ok(());
    }
    println!("Parsing {} pages...", pages.len());

    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
            .progress_chars("=> "),
    );

    // Pages are independent; fan out across them. Block order within each
    // page is preserved, and collect keeps the discovery order.
    let results: Vec<_> = pages
        .par_iter()
        .map(|path| {
            let mut diags = Diagnostics::new();
            let parsed = page::extract_page(path, &mut diags);
            pb.inc(1);
            (path, parsed, diags)
        })
        .collect();
    pb.finish_and_clear();

    let mut counts = PageCounts {
        pages: results.len(),
        parsed: 0,
        skipped: 0,
        blocks: 0,
        warnings: 0,
    };
    let mut all_diags = Diagnostics::new();
    let mut lines = Vec::new();

    for (path, parsed, diags) in results {
        match parsed {
            Ok(blocks) => {
                counts.parsed += 1;
                counts.blocks += blocks.len();
                for block in &blocks {
                    lines.push(serde_json::to_string(block).unwrap_or_default());
                }
            }
            Err(e) => {
                counts.skipped += 1;
                warn!("{}: {}", path.display(), e);
            }
        }
        all_diags.merge(diags);
    }
    counts.warnings = all_diags.len();
    all_diags.emit();

    write_lines(&lines, out)?;
    counts.print();
    Ok(())
}

fn run_index(file: &Path, out: Option<&Path>) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("reading index artifact {}", file.display()))?;

    let mut diags = Diagnostics::new();
    let blocks = index::extract_index(&raw, &mut diags)?;
    let lines: Vec<String> = blocks.iter().map(index::encode::encode).collect();
    diags.emit();

    write_lines(&lines, out)?;
    println!(
        "Extracted {} function records ({} warnings).",
        blocks.len(),
        diags.len()
    );
    Ok(())
}

fn write_lines(lines: &[String], out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            let mut text = lines.join("\n");
            if !text.is_empty() {
                text.push('\n');
            }
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {} lines to {}", lines.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut w = stdout.lock();
            for line in lines {
                writeln!(w, "{}", line)?;
            }
        }
    }
    Ok(())
}
