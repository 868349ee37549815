use invsheet_core::export::xlsx::read_workbook_from;
use std::path::PathBuf;

use crate::output;

pub fn run(
    xlsx_file: PathBuf,
    output_format: &str,
) -> Result<(), invsheet_core::error::InvoiceError> {
    let records = read_workbook_from(&xlsx_file)?;

    match output_format {
        "json" => output::json::print(&records)?,
        _ => output::table::print_records(&records),
    }

    eprintln!("{} row(s) in {}", records.len(), xlsx_file.display());
    Ok(())
}
