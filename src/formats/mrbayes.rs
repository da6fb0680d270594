//! MrBayes command block writer.
//!
//! The block configures a single MCMC run and the summary of its trees.
//! Trace and tree files written by MrBayes are named after the input file
//! with its extension removed.

use std::fmt::Display;
use std::path::Path;

use super::nexus::NexusStyle;

/// Default number of MCMC generations.
pub const DEFAULT_NGEN: u64 = 5000;

/// Outgroup used when none is given.
pub const DEFAULT_OUTGROUP: &str = "Placeholder Outgroup";

/// Parameters interpolated into the MrBayes block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MrBayesParams {
    pub ngen: u64,
    pub outgroup: String,
}

impl Default for MrBayesParams {
    fn default() -> Self {
        Self {
            ngen: DEFAULT_NGEN,
            outgroup: DEFAULT_OUTGROUP.to_string(),
        }
    }
}

/// Strips the final extension from `filename`, keeping any directory part.
///
/// `data.fasta` becomes `data`, `run/a.tar.gz` becomes `run/a.tar`; names
/// without an extension (including dotfiles such as `.hidden` or `..fasta`)
/// are unchanged.
pub fn base_filename(filename: &str) -> String {
    let path = Path::new(filename);
    // Leading dots belong to the name: `..fasta` has no extension.
    let has_extension = path
        .file_name()
        .map(|name| name.to_string_lossy().trim_start_matches('.').contains('.'))
        .unwrap_or(false);
    if !has_extension {
        return filename.to_string();
    }
    path.with_extension("").to_string_lossy().into_owned()
}

/// Builds the MrBayes block with the default style.
pub fn mrbayes_block(filename: &str, ngen: impl Display, outgroup: &str) -> String {
    mrbayes_block_with_style(filename, ngen, outgroup, &NexusStyle::default())
}

/// Builds the MrBayes block with an explicit style.
///
/// `ngen` and `outgroup` are written verbatim; the outgroup is not checked
/// against the taxa of the matrix here.
pub fn mrbayes_block_with_style(
    filename: &str,
    ngen: impl Display,
    outgroup: &str,
    style: &NexusStyle,
) -> String {
    let base = base_filename(filename);
    let lead = if style.leading_blank_line { "\n" } else { "" };

    format!(
        "{lead}begin mrbayes;\n  \
         set autoclose=yes;\n  \
         outgroup {outgroup};\n  \
         mcmcp ngen={ngen} printfreq=1000 samplefreq=100 diagnfreq=1000 nchains=4 savebrlens=yes filename={base};\n  \
         mcmc;\n  \
         sumt filename={base};\n\
         end;\n"
    )
}

impl MrBayesParams {
    /// Builds the block for `filename` from these parameters.
    pub fn block(&self, filename: &str, style: &NexusStyle) -> String {
        mrbayes_block_with_style(filename, self.ngen, &self.outgroup, style)
    }
}
