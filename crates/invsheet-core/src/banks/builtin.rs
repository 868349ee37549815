use crate::banks::{parse_table_str, BankTableDef};
use crate::error::InvoiceError;

const DEFAULT_JSON: &str = include_str!("../../../../banks/default.json");
const INDIA_EXTENDED_JSON: &str = include_str!("../../../../banks/india-extended.json");

/// Bundled bank tables that can be selected by name.
pub const PRESETS: &[&str] = &["default", "india-extended"];

/// The table every run starts from.
pub fn default_table() -> Result<BankTableDef, InvoiceError> {
    parse_table_str(DEFAULT_JSON)
}

/// Load a bundled table by name.
pub fn load_preset(name: &str) -> Result<BankTableDef, InvoiceError> {
    match name {
        "default" => parse_table_str(DEFAULT_JSON),
        "india-extended" => parse_table_str(INDIA_EXTENDED_JSON),
        _ => Err(InvoiceError::BankTableInvalid(format!(
            "unknown bank table '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
