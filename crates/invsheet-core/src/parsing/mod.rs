pub mod identifiers;
pub mod labels;
pub mod values;

use crate::model::{Column, InvoiceRecord};
use identifiers::{find_token, is_gst, is_pan};
use labels::{scan_labels, LabelHit, LabelKind};
use log::debug;

/// How a captured label value becomes a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Trimmed text as printed.
    Text,
    /// Currency markers and digit grouping removed.
    Amount,
    /// Digit groups collapsed.
    AccountNumber,
    /// First token, uppercased.
    Code,
}

impl FieldRule {
    /// Returns None when nothing usable remains.
    pub fn apply(self, raw: &str) -> Option<String> {
        let value = match self {
            FieldRule::Text => raw.trim().to_string(),
            FieldRule::Amount => values::clean_amount(raw),
            FieldRule::AccountNumber => values::clean_account_number(raw),
            FieldRule::Code => values::first_token(raw).to_ascii_uppercase(),
        };
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

/// A parsed field: the labels that announce it and how its value is read.
pub struct FieldSpec {
    pub column: Column,
    pub label: LabelKind,
    pub rule: FieldRule,
}

/// Label-anchored fields, evaluated independently of each other.
/// PAN/GST is resolved separately by `select_tax_id`.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        column: Column::InvoiceDate,
        label: LabelKind::InvoiceDate,
        rule: FieldRule::Text,
    },
    FieldSpec {
        column: Column::InvoiceNo,
        label: LabelKind::InvoiceNo,
        rule: FieldRule::Text,
    },
    FieldSpec {
        column: Column::Amount,
        label: LabelKind::Amount,
        rule: FieldRule::Amount,
    },
    FieldSpec {
        column: Column::BankAccountNo,
        label: LabelKind::AccountNo,
        rule: FieldRule::AccountNumber,
    },
    FieldSpec {
        column: Column::IfscCode,
        label: LabelKind::Ifsc,
        rule: FieldRule::Code,
    },
];

/// Parse the full text of one invoice into a record.
///
/// Every field is best-effort: a missing label or an empty value leaves the
/// field as an empty string. `bank_name` is left empty here; it is derived
/// from the IFSC code by the bank table.
pub fn parse_invoice(text: &str, party_name: &str) -> InvoiceRecord {
    let hits = scan_labels(text);

    let mut record = InvoiceRecord {
        party_name: party_name.to_string(),
        ..Default::default()
    };

    for field in FIELDS {
        if let Some(value) = first_value(&hits, field.label, field.rule) {
            debug!("{}: {:?}", field.column, value);
            record.set(field.column, value);
        }
    }

    record.pan_or_gst = select_tax_id(&hits);

    for hit in hits.iter().filter(|h| h.kind == LabelKind::Excluded) {
        debug!(
            "dropping '{}' value {:?} (line {})",
            hit.label,
            hit.value,
            hit.line_index + 1
        );
    }

    record
}

/// The value of the first hit of `kind` in document order. A first hit with
/// no usable value leaves the field empty; later hits are not consulted.
fn first_value(hits: &[LabelHit<'_>], kind: LabelKind, rule: FieldRule) -> Option<String> {
    hits.iter()
        .find(|h| h.kind == kind)
        .and_then(|h| rule.apply(h.value))
}

/// Pick the PAN if one is printed; otherwise the GSTIN; never both.
fn select_tax_id(hits: &[LabelHit<'_>]) -> String {
    let pan = hits
        .iter()
        .filter(|h| matches!(h.kind, LabelKind::Pan | LabelKind::TaxId))
        .find_map(|h| find_token(h.value, is_pan));
    if let Some(pan) = pan {
        return pan;
    }

    hits.iter()
        .filter(|h| matches!(h.kind, LabelKind::Gst | LabelKind::TaxId))
        .find_map(|h| find_token(h.value, is_gst))
        .unwrap_or_default()
}
