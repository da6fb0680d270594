//! fas2nex - FASTA to NEXUS/MrBayes converter
//!
//! ## Usage
//!
//! ```bash
//! fas2nex <fasta_file> [ngen] [outgroup]
//! fas2nex primates.fasta 100000 Lemur -o primates.nex
//! fas2nex primates.fasta --keyword-case lower --delimiter space
//! ```
//!
//! The NEXUS document is written to stdout unless `-o` or `--auto-output`
//! is given.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use fas2nex::convert::{convert_file, ConvertOptions};
use fas2nex::formats::mrbayes::{base_filename, MrBayesParams, DEFAULT_NGEN, DEFAULT_OUTGROUP};
use fas2nex::formats::nexus::{Delimiter, KeywordCase, NexusStyle};

/// Keyword case for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CaseArg {
    /// BEGIN DATA; ... END;
    Upper,
    /// begin data; ... end;
    Lower,
}

impl From<CaseArg> for KeywordCase {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Upper => KeywordCase::Upper,
            CaseArg::Lower => KeywordCase::Lower,
        }
    }
}

/// Matrix delimiter for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DelimiterArg {
    /// Tab between name and sequence
    Tab,
    /// Single space between name and sequence
    Space,
}

impl From<DelimiterArg> for Delimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Tab => Delimiter::Tab,
            DelimiterArg::Space => Delimiter::Space,
        }
    }
}

/// fas2nex - Convert a FASTA alignment into a NEXUS file with a MrBayes block
///
/// Sequences must already be aligned. The MrBayes output files are named
/// after the input file with its extension removed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Aligned FASTA file
    file: PathBuf,

    /// Number of MCMC generations
    #[arg(default_value_t = DEFAULT_NGEN)]
    ngen: u64,

    /// Taxon used to root the tree (checked against the input taxa when given)
    outgroup: Option<String>,

    /// Output file. Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "-", conflicts_with = "auto_output")]
    output: String,

    /// Write to <input without extension>.nex instead of stdout
    #[arg(long = "auto-output")]
    auto_output: bool,

    /// Case of NEXUS keywords in the DATA block
    #[arg(long = "keyword-case", value_enum, default_value = "upper")]
    keyword_case: CaseArg,

    /// Separator between taxon names and sequences
    #[arg(long = "delimiter", value_enum, default_value = "tab")]
    delimiter: DelimiterArg,

    /// Do not put a blank line between the DATA and MrBayes blocks
    #[arg(long = "no-blank-line")]
    no_blank_line: bool,

    /// Fail when sequences have different lengths
    #[arg(long = "strict")]
    strict: bool,

    /// Accept an outgroup that is not one of the input taxa
    #[arg(long = "no-outgroup-check")]
    no_outgroup_check: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn options(&self) -> ConvertOptions {
        let explicit_outgroup = self.outgroup.is_some();
        if !explicit_outgroup {
            warn!(
                "No outgroup given; writing '{}' as a placeholder to edit before running MrBayes",
                DEFAULT_OUTGROUP
            );
        }

        ConvertOptions {
            params: MrBayesParams {
                ngen: self.ngen,
                outgroup: self
                    .outgroup
                    .clone()
                    .unwrap_or_else(|| DEFAULT_OUTGROUP.to_string()),
            },
            style: NexusStyle {
                keyword_case: self.keyword_case.into(),
                delimiter: self.delimiter.into(),
                leading_blank_line: !self.no_blank_line,
            },
            strict_lengths: self.strict,
            check_outgroup: explicit_outgroup && !self.no_outgroup_check,
        }
    }

    /// Output destination, `None` for stdout.
    fn destination(&self) -> Option<PathBuf> {
        if self.auto_output {
            let base = base_filename(&self.file.to_string_lossy());
            Some(PathBuf::from(format!("{}.nex", base)))
        } else if self.output == "-" {
            None
        } else {
            Some(PathBuf::from(&self.output))
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn write_output(document: &str, destination: Option<&Path>) -> Result<()> {
    match destination {
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(document.as_bytes())?;
            handle.flush()?;
        }
        Some(path) => {
            std::fs::write(path, document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
    }
    Ok(())
}

/// Returns true if both paths name the same file.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let destination = args.destination();
    if let Some(path) = &destination {
        if same_file(path, &args.file) {
            anyhow::bail!(
                "Output {} would overwrite the input file; choose another path with -o",
                path.display()
            );
        }
    }

    let options = args.options();
    let document = convert_file(&args.file, &options)
        .with_context(|| format!("Failed to convert {}", args.file.display()))?;

    write_output(&document.to_string(), destination.as_deref())?;

    if let Some(path) = destination {
        info!(
            "Wrote {} taxa x {} characters to {}",
            document.ntax(),
            document.nchar(),
            path.display()
        );
    }

    Ok(())
}
