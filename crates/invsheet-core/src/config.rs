use crate::banks::{self, builtin, BankCodeTable};
use crate::error::InvoiceError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Static deployment data: who the invoices are for and which bank tables
/// to merge over the builtin one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeploymentConfig {
    pub party_name: String,
    /// Extra bank table files, merged in order over the builtin table.
    #[serde(default)]
    pub bank_tables: Vec<PathBuf>,
    /// Bundled bank tables merged before `bank_tables`.
    #[serde(default)]
    pub bank_presets: Vec<String>,
}

impl DeploymentConfig {
    pub fn new(party_name: impl Into<String>) -> Self {
        DeploymentConfig {
            party_name: party_name.into(),
            ..Default::default()
        }
    }

    /// Build the run's bank table: builtin first, then presets, then files.
    pub fn bank_table(&self) -> Result<BankCodeTable, InvoiceError> {
        let mut table = BankCodeTable::from_def(&builtin::default_table()?);
        for preset in &self.bank_presets {
            table.extend(&builtin::load_preset(preset)?);
        }
        for path in &self.bank_tables {
            table.extend(&banks::load_table(path)?);
        }
        Ok(table)
    }
}

/// Load a deployment config from a JSON file.
///
/// Relative `bank_tables` paths are resolved against the config's directory.
pub fn load_config(path: &Path) -> Result<DeploymentConfig, InvoiceError> {
    let content = std::fs::read_to_string(path).map_err(|e| InvoiceError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let mut config: DeploymentConfig =
        serde_json::from_str(&content).map_err(|e| InvoiceError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if let Some(dir) = path.parent() {
        config.bank_tables = config
            .bank_tables
            .into_iter()
            .map(|p| if p.is_relative() { dir.join(p) } else { p })
            .collect();
    }

    validate_config(&config)?;
    Ok(config)
}

/// Parse a deployment config from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<DeploymentConfig, InvoiceError> {
    let config: DeploymentConfig = serde_json::from_str(json)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &DeploymentConfig) -> Result<(), InvoiceError> {
    if config.party_name.trim().is_empty() {
        return Err(InvoiceError::ConfigInvalid(
            "party_name must not be empty".into(),
        ));
    }

    for preset in &config.bank_presets {
        if !builtin::PRESETS.contains(&preset.as_str()) {
            return Err(InvoiceError::ConfigInvalid(format!(
                "unknown bank preset '{}'. Available: {}",
                preset,
                builtin::PRESETS.join(", ")
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let c = parse_config_str(r#"{ "party_name": "Acme Traders" }"#).unwrap();
        assert_eq!(c.party_name, "Acme Traders");
        assert!(c.bank_tables.is_empty());
    }

    #[test]
    fn test_blank_party_name_rejected() {
        assert!(parse_config_str(r#"{ "party_name": "   " }"#).is_err());
        assert!(parse_config_str(r#"{}"#).is_err());
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let json = r#"{ "party_name": "Acme", "bank_presets": ["nope"] }"#;
        assert!(parse_config_str(json).is_err());
    }

    #[test]
    fn test_bank_table_with_preset() {
        let c = parse_config_str(
            r#"{ "party_name": "Acme", "bank_presets": ["india-extended"] }"#,
        )
        .unwrap();
        let table = c.bank_table().unwrap();
        assert_eq!(table.resolve("HDFC0001234"), "HDFC Bank");
        assert_eq!(table.resolve("KKBK0000958"), "Kotak Mahindra Bank");
    }

    #[test]
    fn test_load_config_resolves_relative_tables() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("extra.json"),
            r#"{ "name": "Extra", "banks": { "UTIB": "Axis Bank" } }"#,
        )
        .unwrap();
        let config_path = dir.path().join("invsheet.json");
        std::fs::write(
            &config_path,
            r#"{ "party_name": "Acme", "bank_tables": ["extra.json"] }"#,
        )
        .unwrap();

        let c = load_config(&config_path).unwrap();
        assert_eq!(c.bank_tables, vec![dir.path().join("extra.json")]);
        assert_eq!(c.bank_table().unwrap().resolve("UTIB0000378"), "Axis Bank");
    }

    #[test]
    fn test_load_missing_config() {
        let err = load_config(Path::new("/nonexistent/invsheet.json")).unwrap_err();
        assert!(matches!(err, InvoiceError::ConfigLoad { .. }));
    }
}
