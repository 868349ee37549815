pub mod builtin;

use crate::error::InvoiceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A bank-code table as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankTableDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// IFSC bank code (first four characters) -> display name.
    pub banks: BTreeMap<String, String>,
}

/// Immutable prefix -> bank name lookup, built once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankCodeTable {
    entries: BTreeMap<String, String>,
}

impl BankCodeTable {
    pub fn from_def(def: &BankTableDef) -> Self {
        let mut table = BankCodeTable::default();
        table.extend(def);
        table
    }

    /// Merge another table; its entries override existing prefixes.
    pub fn extend(&mut self, def: &BankTableDef) {
        for (prefix, name) in &def.banks {
            self.entries
                .insert(prefix.to_ascii_uppercase(), name.trim().to_string());
        }
    }

    /// Bank display name for an IFSC code.
    ///
    /// Returns an empty string for empty or short codes and unknown prefixes.
    pub fn resolve(&self, ifsc: &str) -> String {
        match ifsc.trim().get(..4) {
            Some(prefix) => self
                .entries
                .get(&prefix.to_ascii_uppercase())
                .cloned()
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load a bank table from a JSON file.
pub fn load_table(path: &Path) -> Result<BankTableDef, InvoiceError> {
    let content = std::fs::read_to_string(path).map_err(|e| InvoiceError::BankTableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let def: BankTableDef =
        serde_json::from_str(&content).map_err(|e| InvoiceError::BankTableLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_table(&def)?;
    Ok(def)
}

/// Parse a bank table from a JSON string (no file path context).
pub fn parse_table_str(json: &str) -> Result<BankTableDef, InvoiceError> {
    let def: BankTableDef = serde_json::from_str(json)?;
    validate_table(&def)?;
    Ok(def)
}

/// Validate that a bank table is well-formed.
pub fn validate_table(def: &BankTableDef) -> Result<(), InvoiceError> {
    if def.banks.is_empty() {
        return Err(InvoiceError::BankTableInvalid(format!(
            "table '{}' has no banks",
            def.name
        )));
    }

    for (prefix, name) in &def.banks {
        if prefix.len() != 4 || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InvoiceError::BankTableInvalid(format!(
                "bank code '{}' must be exactly four letters or digits",
                prefix
            )));
        }
        if name.trim().is_empty() {
            return Err(InvoiceError::BankTableInvalid(format!(
                "bank code '{}' has an empty name",
                prefix
            )));
        }
    }

    Ok(())
}
