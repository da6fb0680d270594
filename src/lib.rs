//! # fas2nex - FASTA to NEXUS converter
//!
//! Converts a FASTA alignment into a NEXUS document made of a DATA block
//! and a MrBayes command block, ready for Bayesian tree inference.
//!
//! ## Architecture
//!
//! The conversion is a single pass with clear separation:
//! - `model`: the ordered taxon name to sequence mapping
//! - `formats`: FASTA reading, NEXUS DATA block and MrBayes block writing
//! - `convert`: input checks and assembly of the output document
//!
//! ## Example
//!
//! ```
//! use fas2nex::convert::{build_document, ConvertOptions};
//! use fas2nex::formats::fasta::parse_fasta_str;
//!
//! let sequences = parse_fasta_str(">seq1\nATGC\n>seq2\nA--C\n").unwrap();
//! let document = build_document(&sequences, "Test.fasta", &ConvertOptions::default()).unwrap();
//!
//! assert!(document.to_string().contains("DIMENSIONS NTAX=2 NCHAR=4;"));
//! assert!(document.to_string().contains("sumt filename=Test;"));
//! ```

pub mod convert;
pub mod formats;
pub mod model;
