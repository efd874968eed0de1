//! Error types for the VCF writer library.

use thiserror::Error;

/// Errors that can occur while rendering or writing VCF output.
#[derive(Error, Debug)]
pub enum VcfWriterError {
    /// A variant has an empty alternate allele string.
    #[error("empty alternate allele in record {record} (pos {pos}, allele index {allele})")]
    EmptyAltAllele {
        record: usize,
        pos: u64,
        allele: usize,
    },

    /// A variant's genotype call count does not match the number of
    /// registered samples.
    #[error(
        "record {record} (pos {pos}) has {actual} genotype call(s) but {expected} sample(s) are registered"
    )]
    CallCountMismatch {
        record: usize,
        pos: u64,
        expected: usize,
        actual: usize,
    },

    /// A variant has fewer than the two alleles (reference + one alternate)
    /// a record line requires.
    #[error("record {record} (pos {pos}) has {found} allele(s), need at least 2")]
    MissingAlleles {
        record: usize,
        pos: u64,
        found: usize,
    },

    /// Failed to write to the output destination.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for VCF writer operations.
pub type Result<T> = std::result::Result<T, VcfWriterError>;
