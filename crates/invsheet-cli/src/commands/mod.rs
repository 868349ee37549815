pub mod banks;
pub mod convert;
pub mod parse;
pub mod read;

use invsheet_core::config::{self, DeploymentConfig};
use invsheet_core::error::InvoiceError;
use invsheet_core::model::SourceDocument;
use std::path::{Path, PathBuf};

use crate::DeploymentArgs;

/// Merge the config file (if any) with command-line overrides.
pub fn load_deployment(args: DeploymentArgs) -> Result<DeploymentConfig, InvoiceError> {
    let mut deployment = match &args.config {
        Some(path) => config::load_config(path)?,
        None => DeploymentConfig::default(),
    };

    if let Some(name) = args.party_name {
        deployment.party_name = name;
    }
    deployment.bank_presets.extend(args.bank_presets);
    deployment.bank_tables.extend(args.banks);

    if deployment.party_name.trim().is_empty() {
        return Err(InvoiceError::ConfigInvalid(
            "no party name configured. Pass --party-name or a --config file with party_name"
                .into(),
        ));
    }
    config::validate_config(&deployment)?;

    Ok(deployment)
}

pub fn read_document(path: &Path) -> Result<SourceDocument, InvoiceError> {
    let bytes = std::fs::read(path)?;
    Ok(SourceDocument::new(display_name(path), bytes))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Bank table for the `banks` subcommands: builtin, presets, then files.
pub fn bank_table(
    banks: Vec<PathBuf>,
    bank_presets: Vec<String>,
) -> Result<invsheet_core::banks::BankCodeTable, InvoiceError> {
    DeploymentConfig {
        bank_tables: banks,
        bank_presets,
        ..Default::default()
    }
    .bank_table()
}
