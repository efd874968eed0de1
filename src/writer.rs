//! The accumulator and write orchestrator.
//!
//! `VcfWriter` collects sample names and variant records, then renders the
//! whole output into one buffer and delivers it to the destination in a
//! single pass. The destination is opened only after rendering succeeds, so
//! a malformed variant never truncates an existing file.

use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::render::{render_header, render_record};
use crate::variant::Variant;

/// Destination value meaning "write to standard output".
pub const STDOUT_SENTINEL: &str = "-";

/// Accumulates variant records and sample names, then writes them as a
/// complete VCF document.
///
/// Registration order is preserved: sample columns appear in the order the
/// names were added, and record lines in the order the variants were added.
///
/// # Example
///
/// ```rust
/// use vcf_writer::{VcfWriter, Variant};
///
/// let mut writer = VcfWriter::new("-");
/// writer.chrom = "chr1".to_string();
/// writer.add_sample_name("S1");
///
/// let mut var = Variant::new(99, vec!["A".to_string(), "T".to_string()]);
/// var.add_call("0/1");
/// writer.add_variant(var);
///
/// let text = writer.render().unwrap();
/// assert!(text.ends_with("chr1\t100\t.\tA\tT\t0\t.\t.\tGT\t0/1\n"));
/// ```
#[derive(Debug, Clone)]
pub struct VcfWriter {
    destination: String,
    /// Chromosome name used as the contig label. Empty means unset; the
    /// renderer then falls back to a label derived from the first sample
    /// name, or a fixed default. Settable any time before [`write`](Self::write).
    pub chrom: String,
    /// Reference sequence label. Stored for callers; not consulted by the
    /// renderer.
    pub reference: String,
    variants: Vec<Variant>,
    sample_names: Vec<String>,
}

impl VcfWriter {
    /// Create a writer targeting `destination`.
    ///
    /// Pass [`STDOUT_SENTINEL`] (`"-"`) to write to standard output; any
    /// other value is treated as a filesystem path to create or overwrite.
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            chrom: String::new(),
            reference: String::new(),
            variants: Vec::new(),
            sample_names: Vec::new(),
        }
    }

    /// Register a sample name, appending a genotype column to the output.
    ///
    /// No uniqueness check is performed; a duplicate name simply produces a
    /// duplicate column.
    pub fn add_sample_name(&mut self, name: impl Into<String>) {
        self.sample_names.push(name.into());
    }

    /// Add a variant record. Records are written in the order added.
    pub fn add_variant(&mut self, var: Variant) {
        self.variants.push(var);
    }

    /// The registered sample names, in registration order.
    pub fn sample_names(&self) -> &[String] {
        &self.sample_names
    }

    /// The accumulated variants, in insertion order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Render the complete VCF document (header plus one line per variant)
    /// into a string.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed variant (empty alternate allele, too few
    /// alleles, or a genotype call count that does not match the registered
    /// sample count), producing no output. Rendering does not mutate the
    /// writer, so repeated calls yield byte-identical results.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        render_header(&mut out, &self.chrom, &self.sample_names);

        for (i, var) in self.variants.iter().enumerate() {
            render_record(&mut out, var, i, &self.chrom, &self.sample_names)?;
        }

        Ok(out)
    }

    /// Render the document and deliver it to the destination.
    ///
    /// The destination is opened only after rendering succeeds, so a render
    /// failure leaves any pre-existing file at the path untouched. May be
    /// called more than once; each call re-renders the current state.
    ///
    /// # Errors
    ///
    /// Any [`render`](Self::render) error, or an
    /// [`Io`](crate::VcfWriterError::Io) error from the sink.
    pub fn write(&self) -> Result<()> {
        let out = self.render()?;

        if self.destination == STDOUT_SENTINEL {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(out.as_bytes())?;
        } else {
            let mut file = File::create(&self.destination)?;
            file.write_all(out.as_bytes())?;
        }

        Ok(())
    }
}
