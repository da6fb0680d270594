//! Sequence file formats.
//!
//! - FASTA (input): records read into a [`SequenceSet`](crate::model::SequenceSet)
//! - NEXUS (output): DATA block header and matrix
//! - MrBayes (output): command block appended after the DATA block

pub mod fasta;
pub mod mrbayes;
pub mod nexus;

use thiserror::Error;

pub use fasta::{parse_fasta_file, FastaError};
pub use mrbayes::{mrbayes_block, MrBayesParams};
pub use nexus::{nexus_header, nexus_matrix, Delimiter, KeywordCase, NexusError, NexusStyle};

/// Errors that can occur while converting FASTA to NEXUS.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("FASTA error: {0}")]
    FastaError(#[from] FastaError),

    #[error("NEXUS error: {0}")]
    NexusError(#[from] NexusError),

    #[error("Sequence '{name}' has length {found}, expected {expected} (NCHAR taken from the first sequence)")]
    InconsistentLengths {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Outgroup '{outgroup}' is not one of the {ntax} taxa in the input")]
    UnknownOutgroup { outgroup: String, ntax: usize },
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
