//! Data model for the converter.
//!
//! A [`SequenceSet`] is the ordered taxon name to sequence mapping produced
//! by the FASTA reader and consumed by the NEXUS and MrBayes builders.
//! It is built once per input file and never mutated afterwards.

use indexmap::IndexMap;

/// First sequence whose length differs from the first sequence of the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthMismatch {
    /// Name of the offending taxon
    pub name: String,
    /// Length of the first sequence (the reported NCHAR)
    pub expected: usize,
    /// Length of the offending sequence
    pub found: usize,
}

/// Ordered mapping from taxon name to sequence.
///
/// Iteration order is insertion order, which is file order for parsed input
/// and decides the row order of the NEXUS matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceSet {
    sequences: IndexMap<String, String>,
}

impl SequenceSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a sequence under `name`.
    ///
    /// An existing name keeps its position and gets the new sequence;
    /// the replaced sequence is returned.
    pub fn insert(&mut self, name: impl Into<String>, sequence: impl Into<String>) -> Option<String> {
        self.sequences.insert(name.into(), sequence.into())
    }

    /// Returns the number of taxa.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Returns true if the set holds no taxa.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Gets the sequence of a taxon.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.sequences.get(name).map(String::as_str)
    }

    /// Returns true if `name` is a taxon of the set.
    pub fn contains(&self, name: &str) -> bool {
        self.sequences.contains_key(name)
    }

    /// Iterates over `(name, sequence)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sequences.iter().map(|(name, seq)| (name.as_str(), seq.as_str()))
    }

    /// Iterates over taxon names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sequences.keys().map(String::as_str)
    }

    /// Length of the first sequence in order, `None` for an empty set.
    ///
    /// This is the value reported as NCHAR. Lengths count characters, so a
    /// set of unequal sequences reports the first one's length.
    pub fn first_length(&self) -> Option<usize> {
        self.sequences.values().next().map(|seq| seq.chars().count())
    }

    /// Finds the first sequence whose length differs from the first one.
    pub fn length_mismatch(&self) -> Option<LengthMismatch> {
        let expected = self.first_length()?;
        self.iter().find_map(|(name, seq)| {
            let found = seq.chars().count();
            (found != expected).then(|| LengthMismatch {
                name: name.to_string(),
                expected,
                found,
            })
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SequenceSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = SequenceSet::new();
        for (name, seq) in iter {
            set.insert(name, seq);
        }
        set
    }
}
