//! NEXUS DATA block writer.
//!
//! Produces the two halves of a NEXUS DATA block from a [`SequenceSet`]:
//! the header (dimensions and format declaration) and the matrix body.
//!
//! ## NEXUS Format
//!
//! ```text
//! #NEXUS
//!
//! BEGIN DATA;
//! DIMENSIONS NTAX=2 NCHAR=4;
//! FORMAT DATATYPE=DNA MISSING=N GAP=-;
//! MATRIX
//! seq1	ATGC
//! seq2	A--C
//! ;
//! END;
//! ```
//!
//! Keyword case and the name/sequence delimiter are controlled by a single
//! [`NexusStyle`], so header and matrix always agree with each other.

use thiserror::Error;

use crate::model::SequenceSet;

/// Errors that can occur while building NEXUS blocks.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NexusError {
    #[error("No sequences to write: NCHAR cannot be derived from an empty input")]
    EmptyInput,
}

/// Result type for NEXUS operations.
pub type NexusResult<T> = Result<T, NexusError>;

/// Case used for NEXUS keywords of the DATA block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordCase {
    /// `BEGIN DATA;`, `END;`
    #[default]
    Upper,
    /// `begin data;`, `end;`
    Lower,
}

/// Separator between a taxon name and its sequence in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Tab,
    Space,
}

impl Delimiter {
    fn as_str(self) -> &'static str {
        match self {
            Delimiter::Tab => "\t",
            Delimiter::Space => " ",
        }
    }
}

/// Presentation options shared by every block of the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NexusStyle {
    pub keyword_case: KeywordCase,
    pub delimiter: Delimiter,
    /// Separate the DATA block from the MrBayes block with a blank line
    pub leading_blank_line: bool,
}

impl Default for NexusStyle {
    fn default() -> Self {
        Self {
            keyword_case: KeywordCase::Upper,
            delimiter: Delimiter::Tab,
            leading_blank_line: true,
        }
    }
}

impl NexusStyle {
    /// Renders a keyword (written uppercase at call sites) in the chosen case.
    fn kw(&self, keyword: &str) -> String {
        match self.keyword_case {
            KeywordCase::Upper => keyword.to_string(),
            KeywordCase::Lower => keyword.to_ascii_lowercase(),
        }
    }
}

/// Builds the NEXUS header with the default style.
///
/// NCHAR is the length of the first sequence in iteration order; the
/// sequences are not checked for equal length here.
///
/// # Errors
///
/// Returns [`NexusError::EmptyInput`] if `sequences` is empty.
pub fn nexus_header(sequences: &SequenceSet) -> NexusResult<String> {
    nexus_header_with_style(sequences, &NexusStyle::default())
}

/// Builds the NEXUS header with an explicit style.
pub fn nexus_header_with_style(sequences: &SequenceSet, style: &NexusStyle) -> NexusResult<String> {
    let nchar = sequences.first_length().ok_or(NexusError::EmptyInput)?;
    let ntax = sequences.len();

    Ok(format!(
        "#NEXUS\n\n\
         {begin};\n\
         {dimensions} {ntax_kw}={ntax} {nchar_kw}={nchar};\n\
         {format} {datatype}={dna} {missing}=N {gap}=-;\n\
         {matrix}\n",
        begin = style.kw("BEGIN DATA"),
        dimensions = style.kw("DIMENSIONS"),
        ntax_kw = style.kw("NTAX"),
        nchar_kw = style.kw("NCHAR"),
        format = style.kw("FORMAT"),
        datatype = style.kw("DATATYPE"),
        dna = style.kw("DNA"),
        missing = style.kw("MISSING"),
        gap = style.kw("GAP"),
        matrix = style.kw("MATRIX"),
    ))
}

/// Builds the NEXUS matrix body with the default style.
pub fn nexus_matrix(sequences: &SequenceSet) -> String {
    nexus_matrix_with_style(sequences, &NexusStyle::default())
}

/// Builds the NEXUS matrix body with an explicit style.
///
/// One line per taxon, in set order, followed by the `;` terminator and the
/// block-closing `END;`.
pub fn nexus_matrix_with_style(sequences: &SequenceSet, style: &NexusStyle) -> String {
    let delimiter = style.delimiter.as_str();
    let body_len: usize = sequences.iter().map(|(name, seq)| name.len() + seq.len() + 2).sum();
    let mut matrix = String::with_capacity(body_len + 8);

    for (name, seq) in sequences.iter() {
        matrix.push_str(name);
        matrix.push_str(delimiter);
        matrix.push_str(seq);
        matrix.push('\n');
    }
    matrix.push_str(";\n");
    matrix.push_str(&style.kw("END"));
    matrix.push_str(";\n");
    matrix
}
