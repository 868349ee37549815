use invsheet_core::banks;
use invsheet_core::error::InvoiceError;
use std::path::{Path, PathBuf};

use super::bank_table;

pub fn list(files: Vec<PathBuf>, presets: Vec<String>) -> Result<(), InvoiceError> {
    let table = bank_table(files, presets)?;

    println!("Bank codes ({}):\n", table.len());
    for (prefix, name) in table.iter() {
        println!("  {prefix}  {name}");
    }

    Ok(())
}

pub fn resolve(ifsc: &str, files: Vec<PathBuf>, presets: Vec<String>) -> Result<(), InvoiceError> {
    let table = bank_table(files, presets)?;
    let name = table.resolve(ifsc);

    if name.is_empty() {
        println!("{}: no bank name (unknown or too-short code)", ifsc.trim());
    } else {
        println!("{}: {name}", ifsc.trim());
    }

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), InvoiceError> {
    let def = banks::load_table(file)?;
    println!(
        "Valid bank table: {} ({} code(s))",
        def.name,
        def.banks.len()
    );
    Ok(())
}
