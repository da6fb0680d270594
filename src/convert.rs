//! FASTA to NEXUS conversion.
//!
//! This module orchestrates a conversion:
//! - FASTA parsing into a [`SequenceSet`]
//! - Input checks (empty input, sequence lengths, outgroup membership)
//! - Assembly of the header, matrix and MrBayes segments into a [`NexusDocument`]

use std::fmt;
use std::path::Path;

use log::{info, warn};

use crate::formats::mrbayes::MrBayesParams;
use crate::formats::nexus::{nexus_header_with_style, nexus_matrix_with_style, NexusError, NexusStyle};
use crate::formats::{parse_fasta_file, ConvertError, ConvertResult};
use crate::model::SequenceSet;

/// Options for a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Generation count and outgroup for the MrBayes block
    pub params: MrBayesParams,
    /// Keyword case, delimiter and block spacing
    pub style: NexusStyle,
    /// Reject sequences of unequal length instead of warning
    pub strict_lengths: bool,
    /// Require the outgroup to be one of the taxa
    pub check_outgroup: bool,
}

/// A complete output document: DATA block header and matrix, then the MrBayes block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NexusDocument {
    pub header: String,
    pub matrix: String,
    pub mrbayes: String,
    ntax: usize,
    nchar: usize,
}

impl NexusDocument {
    /// Number of taxa written to the matrix.
    pub fn ntax(&self) -> usize {
        self.ntax
    }

    /// Character count reported in the header.
    pub fn nchar(&self) -> usize {
        self.nchar
    }
}

impl fmt::Display for NexusDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.header, self.matrix, self.mrbayes)
    }
}

/// Builds the document for an already parsed sequence set.
///
/// `filename` only feeds the MrBayes `filename=` arguments.
pub fn build_document(
    sequences: &SequenceSet,
    filename: &str,
    options: &ConvertOptions,
) -> ConvertResult<NexusDocument> {
    let nchar = sequences.first_length().ok_or(NexusError::EmptyInput)?;

    if let Some(mismatch) = sequences.length_mismatch() {
        if options.strict_lengths {
            return Err(ConvertError::InconsistentLengths {
                name: mismatch.name,
                expected: mismatch.expected,
                found: mismatch.found,
            });
        }
        warn!(
            "Sequence '{}' has length {} but NCHAR={} (from the first sequence); the alignment is not rectangular",
            mismatch.name, mismatch.found, mismatch.expected
        );
    }

    let outgroup = &options.params.outgroup;
    if options.check_outgroup && !sequences.contains(outgroup) {
        return Err(ConvertError::UnknownOutgroup {
            outgroup: outgroup.clone(),
            ntax: sequences.len(),
        });
    }

    let document = NexusDocument {
        header: nexus_header_with_style(sequences, &options.style)?,
        matrix: nexus_matrix_with_style(sequences, &options.style),
        mrbayes: options.params.block(filename, &options.style),
        ntax: sequences.len(),
        nchar,
    };
    info!(
        "Built NEXUS document: NTAX={} NCHAR={} ngen={} outgroup '{}'",
        document.ntax, document.nchar, options.params.ngen, outgroup
    );
    Ok(document)
}

/// Parses a FASTA file and builds its NEXUS document.
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> ConvertResult<NexusDocument> {
    let path = path.as_ref();
    let sequences = parse_fasta_file(path)?;
    build_document(&sequences, &path.to_string_lossy(), options)
}
