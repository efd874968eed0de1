//! The variant record type accepted by the writer.
//!
//! A `Variant` carries a 0-based position, an ordered allele list where
//! index 0 is the reference allele, an insertion-ordered set of INFO
//! key/value pairs, and one genotype call string per sample.

/// A single variant record to be written as one VCF line.
///
/// Fields are public so callers can build records directly; the
/// convenience methods below cover the common incremental case.
///
/// # Example
///
/// ```rust
/// use vcf_writer::Variant;
///
/// let mut var = Variant::new(99, vec!["A".to_string(), "T".to_string()]);
/// var.add_info("FEATURE", "exon");
/// var.add_call("0/1");
/// assert_eq!(var.pos, 99);
/// assert_eq!(var.alleles[0], "A");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    /// 0-based position; written as `pos + 1` per the VCF convention.
    pub pos: u64,
    /// Allele sequences: index 0 is the reference, the rest are alternates.
    pub alleles: Vec<String>,
    /// INFO entries in insertion order. An empty value renders the key as a
    /// flag (`KEY` rather than `KEY=value`).
    pub infos: Vec<(String, String)>,
    /// Genotype call strings, one per registered sample, in sample order.
    pub calls: Vec<String>,
}

impl Variant {
    /// Create a variant at a 0-based position with the given alleles.
    ///
    /// # Arguments
    ///
    /// * `pos` - 0-based coordinate
    /// * `alleles` - reference allele first, then alternates
    pub fn new(pos: u64, alleles: Vec<String>) -> Self {
        Self {
            pos,
            alleles,
            infos: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Append an INFO entry. Entries render in the order they were added.
    ///
    /// Pass an empty `value` for a flag-style entry with no `=value` suffix.
    pub fn add_info(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.infos.push((key.into(), value.into()));
    }

    /// Append a genotype call string (e.g. `"0/1"`).
    pub fn add_call(&mut self, call: impl Into<String>) {
        self.calls.push(call.into());
    }

    /// The reference allele, if any alleles are present.
    pub fn ref_allele(&self) -> Option<&str> {
        self.alleles.first().map(String::as_str)
    }

    /// The alternate alleles (everything after the reference).
    pub fn alt_alleles(&self) -> &[String] {
        if self.alleles.is_empty() {
            &[]
        } else {
            &self.alleles[1..]
        }
    }
}
