use invsheet_core::export;
use invsheet_core::extraction::pdftotext::PdftotextExtractor;
use invsheet_core::model::Batch;
use std::path::PathBuf;

use super::{display_name, load_deployment, read_document};
use crate::output;
use crate::DeploymentArgs;

pub fn run(
    input_files: Vec<PathBuf>,
    out: PathBuf,
    output_format: &str,
    debug_text: Option<PathBuf>,
    deployment: DeploymentArgs,
) -> Result<(), invsheet_core::error::InvoiceError> {
    let deployment = load_deployment(deployment)?;
    let banks = deployment.bank_table()?;

    let extractor = PdftotextExtractor::new();
    let party_name = deployment.party_name.as_str();

    // An unreadable input file takes its slot as a failed row.
    let documents = input_files
        .iter()
        .map(|path| match read_document(path) {
            Ok(doc) => invsheet_core::convert_document(&doc, &extractor, &banks, party_name),
            Err(e) => invsheet_core::failed_document(&display_name(path), party_name, &e),
        })
        .collect();
    let batch = Batch { documents };

    match output_format {
        "json" => output::json::print(&batch)?,
        _ => output::table::print_batch(&batch),
    }

    export::xlsx::write_workbook_to(&out, &batch)?;
    eprintln!(
        "Converted {} of {} invoice(s), written to {}",
        batch.parsed_count(),
        batch.len(),
        out.display()
    );

    let failed: Vec<&str> = batch.failed().map(|d| d.source.as_str()).collect();
    if !failed.is_empty() {
        eprintln!("  failed: {}", failed.join(", "));
    }

    if let Some(path) = debug_text {
        std::fs::write(&path, export::render_debug_text(&batch))?;
        eprintln!("  extracted text written to {}", path.display());
    }

    Ok(())
}
