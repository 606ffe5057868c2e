//! Command-line interface for projsnap.
//!
//! By default the snapshot is written as two Markdown files into the scanned
//! directory: one with the tree diagram and file contents, one with the tree
//! only. With `--stdout` the snapshot is printed instead.

use clap::{Parser, ValueEnum};
use projsnap::{SnapshotBuilder, SnapshotOptions, output, snapshot};
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

/// projsnap — project structure and content snapshot tool
#[derive(Parser)]
#[command(name = "projsnap", version, about, long_about = None)]
struct Cli {
    /// Root directory to scan (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Extra ignore glob patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// File size limit in bytes for the content section (default 1 MiB)
    #[arg(long)]
    file_size_limit: Option<u64>,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Print to stdout instead of writing the Markdown files
    #[arg(long)]
    stdout: bool,

    /// Stdout format (only with --stdout)
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Markdown,
    Tree,
    Json,
}

impl Format {
    fn into_output(self) -> output::OutputFormat {
        match self {
            Format::Markdown => output::OutputFormat::Markdown,
            Format::Tree => output::OutputFormat::Tree,
            Format::Json => output::OutputFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> (SnapshotOptions, bool, Format, bool) {
        let mut builder = SnapshotBuilder::new(self.root)
            .ignore_patterns(self.ignore_patterns)
            .follow_links(self.follow_links);
        if let Some(limit) = self.file_size_limit {
            builder = builder.file_size_limit(Some(limit));
        }
        (builder.build(), self.stdout, self.format, self.pretty)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let (options, to_stdout, format, pretty) = cli.into_options();
    let output_path = options.root.join(&options.output_file);
    let structure_path = options.root.join(&options.structure_file);

    let result = match snapshot(options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if to_stdout {
        print!("{}", output::format_snapshot(&result, format.into_output(), pretty));
        return;
    }

    if let Err(e) = output::write_markdown(&result, &output_path) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    if let Err(e) = output::write_structure_only(&result, &structure_path) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    println!("Snapshot written to {}", output_path.display());
    println!("Structure written to {}", structure_path.display());
}
