//! # VCF Writer Library
//!
//! A small library for writing genomic variant records in the VCF
//! (Variant Call Format) v4.2 text representation.
//!
//! ## Features
//!
//! - Accumulate variant records and sample names in memory
//! - Render a spec-compliant header and one tab-delimited line per record
//! - 0-based input positions rendered 1-based per the format convention
//! - Comma-joined alternate alleles, semicolon-joined INFO entries in
//!   insertion order, per-sample genotype columns
//! - Whole-document buffering: the destination is opened only after
//!   rendering succeeds, so malformed input never clobbers an existing file
//!
//! ## Example
//!
//! ```rust
//! use vcf_writer::{VcfWriter, Variant};
//!
//! // "-" means standard output; any other value is a file path.
//! let mut writer = VcfWriter::new("-");
//! writer.chrom = "chr1".to_string();
//! writer.add_sample_name("S1");
//! writer.add_sample_name("S2");
//!
//! // Positions are 0-based; this variant is written at POS 100.
//! let mut var = Variant::new(99, vec!["A".to_string(), "T".to_string()]);
//! var.add_info("FEATURE", "exon");
//! var.add_call("0/1");
//! var.add_call("1/1");
//! writer.add_variant(var);
//!
//! let text = writer.render().unwrap();
//! assert!(text.starts_with("##fileformat=VCFv4.2\n"));
//! assert!(text.ends_with("chr1\t100\t.\tA\tT\t0\t.\tFEATURE=exon\tGT\t0/1\t1/1\n"));
//! ```
//!
//! ## Output layout
//!
//! The header block consists of the fileformat line, one contig line, the
//! two recognized INFO declarations (`FEATURE`, `FEATURE_NUM`), the `GT`
//! FORMAT declaration, and the column header with one column per sample.
//! When no chromosome name is set, the contig label falls back to a label
//! derived from the first sample name, or `chr1` when there are no samples.

/// Embedded README.md documentation
const README: &str = include_str!("../README.md");

/// Returns the embedded README.md documentation.
///
/// # Example
///
/// ```rust
/// use vcf_writer::docs;
///
/// let documentation = docs();
/// println!("{}", documentation);
/// ```
pub fn docs() -> &'static str {
    README
}

pub mod error;
pub mod render;
pub mod variant;
pub mod writer;

pub use error::{Result, VcfWriterError};
pub use render::{DEFAULT_CONTIG, contig_label};
pub use variant::Variant;
pub use writer::{STDOUT_SENTINEL, VcfWriter};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn variant(pos: u64, alleles: &[&str], calls: &[&str]) -> Variant {
        let mut var = Variant::new(pos, alleles.iter().map(|s| s.to_string()).collect());
        for call in calls {
            var.add_call(*call);
        }
        var
    }

    #[test]
    fn test_full_document_scenario() {
        let mut writer = VcfWriter::new("-");
        writer.chrom = "chr1".to_string();
        writer.add_sample_name("S1");
        writer.add_sample_name("S2");

        let mut var = variant(99, &["A", "T"], &["0/1", "1/1"]);
        var.add_info("FEATURE", "exon");
        writer.add_variant(var);

        let text = writer.render().unwrap();
        assert_eq!(
            text,
            "##fileformat=VCFv4.2\n\
             ##contig=<ID=chr1>\n\
             ##INFO=<ID=FEATURE,Number=1,Type=String,Description=\"Gene feature.\">\n\
             ##INFO=<ID=FEATURE_NUM,Number=1,Type=String,Description=\"Gene feature number.\">\n\
             ##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">\n\
             #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\tS2\n\
             chr1\t100\t.\tA\tT\t0\t.\tFEATURE=exon\tGT\t0/1\t1/1\n"
        );
    }

    #[test]
    fn test_no_info_renders_missing_placeholder() {
        let mut writer = VcfWriter::new("-");
        writer.chrom = "chr1".to_string();
        writer.add_sample_name("S1");
        writer.add_variant(variant(0, &["A", "G"], &["0/1"]));

        let text = writer.render().unwrap();
        assert_eq!(text.lines().last().unwrap(), "chr1\t1\t.\tA\tG\t0\t.\t.\tGT\t0/1");
    }

    #[test]
    fn test_multi_allele_alt_column() {
        let mut writer = VcfWriter::new("-");
        writer.chrom = "chr1".to_string();
        writer.add_sample_name("S1");
        writer.add_variant(variant(0, &["A", "T", "G"], &["1/2"]));

        let text = writer.render().unwrap();
        let alt = text.lines().last().unwrap().split('\t').nth(4).unwrap();
        assert_eq!(alt, "T,G");
    }

    #[test]
    fn test_contig_fallback_consistent_between_header_and_records() {
        let mut writer = VcfWriter::new("-");
        writer.add_sample_name("S1");
        writer.add_variant(variant(0, &["A", "T"], &["0/1"]));

        let text = writer.render().unwrap();
        assert!(text.contains("##contig=<ID=NS1>\n"));
        assert!(text.lines().last().unwrap().starts_with("NS1\t"));
    }

    #[test]
    fn test_default_contig_without_samples_or_chrom() {
        let writer = VcfWriter::new("-");
        let text = writer.render().unwrap();
        assert!(text.contains("##contig=<ID=chr1>\n"));
    }

    #[test]
    fn test_reference_field_does_not_affect_output() {
        let mut plain = VcfWriter::new("-");
        plain.add_sample_name("S1");
        plain.add_variant(variant(0, &["A", "T"], &["0/1"]));

        let mut labelled = plain.clone();
        labelled.reference = "GRCh38".to_string();

        assert_eq!(plain.render().unwrap(), labelled.render().unwrap());
    }

    #[test]
    fn test_empty_alternate_aborts_with_no_output() {
        let mut writer = VcfWriter::new("-");
        writer.add_sample_name("S1");
        writer.add_variant(variant(7, &["A", ""], &["0/1"]));

        let err = writer.render().unwrap_err();
        assert!(matches!(err, VcfWriterError::EmptyAltAllele { pos: 7, .. }));
    }

    #[test]
    fn test_mismatched_call_count_is_reported() {
        let mut writer = VcfWriter::new("-");
        writer.add_sample_name("S1");
        writer.add_sample_name("S2");
        writer.add_variant(variant(3, &["A", "T"], &["0/1"]));

        let err = writer.render().unwrap_err();
        match err {
            VcfWriterError::CallCountMismatch { expected, actual, pos, .. } => {
                assert_eq!((expected, actual, pos), (2, 1, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_docs_returns_readme() {
        assert!(docs().contains("vcf-writer"));
    }
}
