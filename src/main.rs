//! Example usage of the vcf-writer library.

use vcf_writer::{VcfWriter, Variant, docs};

fn main() {
    // Build a writer targeting stdout with two samples.
    let mut writer = VcfWriter::new("-");
    writer.chrom = "chr1".to_string();
    writer.add_sample_name("SAMPLE_A");
    writer.add_sample_name("SAMPLE_B");

    // A simple SNV with INFO annotations (positions are 0-based).
    let mut snv = Variant::new(99, vec!["A".to_string(), "T".to_string()]);
    snv.add_info("FEATURE", "exon");
    snv.add_info("FEATURE_NUM", "2");
    snv.add_call("0/1");
    snv.add_call("1/1");
    writer.add_variant(snv);

    // A multi-allelic site with a flag-style INFO entry.
    let mut multi = Variant::new(
        149,
        vec!["G".to_string(), "C".to_string(), "GT".to_string()],
    );
    multi.add_info("SOMATIC", "");
    multi.add_call("1/2");
    multi.add_call("0/0");
    writer.add_variant(multi);

    println!("VCF Writer Demo");
    println!("===============\n");

    match writer.write() {
        Ok(()) => eprintln!("\nwrote {} variant(s)", writer.variants().len()),
        Err(e) => {
            eprintln!("failed to write VCF: {e}");
            std::process::exit(1);
        }
    }

    // Demonstrate the docs() function
    println!("\nEmbedded Documentation Preview");
    println!("==============================");
    let documentation = docs();
    let preview: String = documentation
        .lines()
        .take(10)
        .collect::<Vec<_>>()
        .join("\n");
    println!("{}", preview);
    println!(
        "...\n(Total documentation length: {} bytes)",
        documentation.len()
    );
}
