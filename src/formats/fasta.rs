//! FASTA file parser.
//!
//! This module reads FASTA records into a [`SequenceSet`].
//! It supports both single-line and multi-line sequences.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! >another_sequence
//! TGCATGCATGCA...
//! ```
//!
//! Only the identifier (first word after `>`) is kept, truncated to
//! [`MAX_TAXON_NAME_LEN`] characters.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};
use thiserror::Error;

use crate::model::SequenceSet;

/// Maximum number of characters kept from a record identifier.
pub const MAX_TAXON_NAME_LEN: usize = 99;

/// Errors that can occur during FASTA parsing.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("No FASTA records found (expected lines starting with '>')")]
    EmptyFile,

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Truncates an identifier to its first [`MAX_TAXON_NAME_LEN`] characters.
pub fn truncate_name(id: &str) -> &str {
    match id.char_indices().nth(MAX_TAXON_NAME_LEN) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// Parses a FASTA file into a [`SequenceSet`].
///
/// # Arguments
///
/// * `path` - Path to the FASTA file
///
/// # Returns
///
/// A `SequenceSet` with one entry per record, in file order.
///
/// # Examples
///
/// ```no_run
/// use fas2nex::formats::fasta::parse_fasta_file;
///
/// let sequences = parse_fasta_file("sequences.fasta").unwrap();
/// println!("Loaded {} taxa", sequences.len());
/// ```
pub fn parse_fasta_file<P: AsRef<Path>>(path: P) -> FastaResult<SequenceSet> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let sequences = parse_fasta(BufReader::new(file))?;
    info!("Parsed {} taxa from {}", sequences.len(), path.display());
    Ok(sequences)
}

/// Parses FASTA content from a reader.
///
/// Records sharing a (truncated) identifier overwrite each other; the later
/// sequence wins and keeps the position of the first occurrence.
pub fn parse_fasta<R: BufRead>(reader: R) -> FastaResult<SequenceSet> {
    let mut sequences = SequenceSet::new();
    // truncated name -> raw identifier that produced it
    let mut raw_ids: HashMap<String, String> = HashMap::new();
    let mut current_id: Option<String> = None;
    let mut current_seq = String::new();
    let mut line_number = 0;

    for line_result in reader.lines() {
        line_number += 1;
        let line = line_result?;
        let line = line.trim();

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(id) = current_id.take() {
                store_record(&mut sequences, &mut raw_ids, id, std::mem::take(&mut current_seq));
            }

            let id = header.split_whitespace().next().unwrap_or_default();
            if id.is_empty() {
                return Err(FastaError::InvalidFormat(format!(
                    "Empty sequence identifier at line {}",
                    line_number
                )));
            }

            current_id = Some(id.to_string());
        } else {
            if current_id.is_none() {
                warn!("Skipping line {} before the first '>' record", line_number);
                continue;
            }

            if line.bytes().all(|b| !b.is_ascii_whitespace()) {
                current_seq.push_str(line);
            } else {
                current_seq.extend(line.chars().filter(|c| !c.is_whitespace()));
            }
        }
    }

    // Don't forget the last record
    if let Some(id) = current_id {
        store_record(&mut sequences, &mut raw_ids, id, current_seq);
    }

    if sequences.is_empty() {
        return Err(FastaError::EmptyFile);
    }

    Ok(sequences)
}

/// Parses FASTA content from a string.
///
/// Useful for testing or processing in-memory data.
pub fn parse_fasta_str(content: &str) -> FastaResult<SequenceSet> {
    parse_fasta(content.as_bytes())
}

fn store_record(
    sequences: &mut SequenceSet,
    raw_ids: &mut HashMap<String, String>,
    raw_id: String,
    sequence: String,
) {
    let name = truncate_name(&raw_id).to_string();
    debug!("Record '{}' ({} characters)", name, sequence.chars().count());

    if let Some(previous_raw) = raw_ids.get(&name) {
        if *previous_raw == raw_id {
            warn!("Duplicate identifier '{}': later record replaces the earlier one", name);
        } else {
            warn!(
                "Identifiers '{}' and '{}' collide after truncation to {} characters; keeping the later sequence",
                previous_raw, raw_id, MAX_TAXON_NAME_LEN
            );
        }
    }

    sequences.insert(name.clone(), sequence);
    raw_ids.insert(name, raw_id);
}
