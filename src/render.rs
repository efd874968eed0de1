//! Pure rendering of the VCF header and record lines.
//!
//! All format knowledge lives here: the fixed header lines, the contig
//! fallback, 0-based to 1-based position conversion, comma-joined alternate
//! alleles, semicolon-joined INFO entries, and the per-sample genotype
//! columns. Rendering never performs I/O; it appends to a caller-supplied
//! `String` buffer and reports malformed input through structured errors.

use crate::error::{Result, VcfWriterError};
use crate::variant::Variant;

/// Contig label used when neither a chromosome name nor any sample is set.
pub const DEFAULT_CONTIG: &str = "chr1";

/// Prefix for the synthetic contig label derived from the first sample name.
const SAMPLE_CONTIG_PREFIX: &str = "N";

/// Derive the contig label from the current writer state.
///
/// Uses `chrom` when non-empty, else a synthetic label built from the first
/// sample name, else [`DEFAULT_CONTIG`]. Re-derived on every call so header
/// and record lines stay consistent with the current state.
pub fn contig_label(chrom: &str, sample_names: &[String]) -> String {
    if !chrom.is_empty() {
        chrom.to_string()
    } else if let Some(first) = sample_names.first() {
        format!("{SAMPLE_CONTIG_PREFIX}{first}")
    } else {
        DEFAULT_CONTIG.to_string()
    }
}

/// Append the VCF header block to `out`.
///
/// Emits the fileformat line, one contig line, the two recognized INFO
/// declarations, the GT FORMAT declaration, and the column header line with
/// one column per registered sample.
pub fn render_header(out: &mut String, chrom: &str, sample_names: &[String]) {
    out.push_str("##fileformat=VCFv4.2\n");
    out.push_str("##contig=<ID=");
    out.push_str(&contig_label(chrom, sample_names));
    out.push_str(">\n");
    out.push_str(
        "##INFO=<ID=FEATURE,Number=1,Type=String,Description=\"Gene feature.\">\n",
    );
    out.push_str(
        "##INFO=<ID=FEATURE_NUM,Number=1,Type=String,Description=\"Gene feature number.\">\n",
    );
    out.push_str("##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">\n");
    out.push_str("#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT");

    for name in sample_names {
        out.push('\t');
        out.push_str(name);
    }

    out.push('\n');
}

/// Append one VCF record line for `var` to `out`.
///
/// # Arguments
///
/// * `out` - the buffer to append to
/// * `var` - the variant to render
/// * `record` - the variant's index in the writer, used in error reports
/// * `chrom` - the chromosome override (empty means unset)
/// * `sample_names` - the registered sample names
///
/// # Errors
///
/// * [`VcfWriterError::CallCountMismatch`] if the variant's call count does
///   not match the number of registered samples
/// * [`VcfWriterError::MissingAlleles`] if the variant has fewer than two
///   alleles
/// * [`VcfWriterError::EmptyAltAllele`] if any alternate allele is empty
///
/// On error nothing useful is in `out`; callers discard the buffer.
pub fn render_record(
    out: &mut String,
    var: &Variant,
    record: usize,
    chrom: &str,
    sample_names: &[String],
) -> Result<()> {
    if var.calls.len() != sample_names.len() {
        return Err(VcfWriterError::CallCountMismatch {
            record,
            pos: var.pos,
            expected: sample_names.len(),
            actual: var.calls.len(),
        });
    }

    if var.alleles.len() < 2 {
        return Err(VcfWriterError::MissingAlleles {
            record,
            pos: var.pos,
            found: var.alleles.len(),
        });
    }

    for (i, alt) in var.alleles[1..].iter().enumerate() {
        if alt.is_empty() {
            return Err(VcfWriterError::EmptyAltAllele {
                record,
                pos: var.pos,
                allele: i + 1,
            });
        }
    }

    out.push_str(&contig_label(chrom, sample_names));

    // CHROM POS ID REF ALT; POS is 1-based in the output.
    out.push('\t');
    out.push_str(&(var.pos + 1).to_string());
    out.push_str("\t.\t");
    out.push_str(&var.alleles[0]);
    out.push('\t');
    out.push_str(&var.alleles[1]);

    for alt in &var.alleles[2..] {
        out.push(',');
        out.push_str(alt);
    }

    // QUAL and FILTER are fixed placeholders.
    out.push_str("\t0\t.\t");

    if var.infos.is_empty() {
        out.push('.');
    } else {
        for (i, (key, value)) in var.infos.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            out.push_str(key);
            if !value.is_empty() {
                out.push('=');
                out.push_str(value);
            }
        }
    }

    out.push_str("\tGT");

    for call in &var.calls {
        out.push('\t');
        out.push_str(call);
    }

    out.push('\n');
    Ok(())
}
