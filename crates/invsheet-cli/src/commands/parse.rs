use invsheet_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use super::{load_deployment, read_document};
use crate::output;
use crate::DeploymentArgs;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    deployment: DeploymentArgs,
) -> Result<(), invsheet_core::error::InvoiceError> {
    let deployment = load_deployment(deployment)?;
    let banks = deployment.bank_table()?;
    let doc = read_document(&pdf_file)?;

    let extractor = PdftotextExtractor::new();
    // A single document is reported as an error rather than a failed row.
    let processed =
        invsheet_core::process_document(&doc, &extractor, &banks, &deployment.party_name)?;

    match output_format {
        "json" => output::json::print(&processed)?,
        _ => output::table::print_document(&processed),
    }

    Ok(())
}
