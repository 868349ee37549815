use crate::model::InvoiceRecord;
use crate::parsing::identifiers::is_ifsc;
use crate::parsing::values::parse_amount;

const MAX_INVOICE_NO_LEN: usize = 20;

/// Cross-field review warnings for a parsed record.
///
/// These never block a record; they point the reviewer at fields worth a
/// second look before export. Failed records get no review warnings.
pub fn validate_record(record: &InvoiceRecord) -> Vec<String> {
    let mut warnings = Vec::new();

    if record.is_failed() {
        return warnings;
    }

    if !record.amount.is_empty() && record.bank_account_no.is_empty() {
        warnings.push("Amount found but no bank account number detected".to_string());
    }

    if !record.bank_account_no.is_empty() && record.ifsc_code.is_empty() {
        warnings.push("Account number found but no IFSC code detected".to_string());
    }

    if !record.ifsc_code.is_empty() {
        if !is_ifsc(&record.ifsc_code) {
            warnings.push(format!(
                "IFSC code '{}' does not match the expected format (4 letters, 0, 6 characters)",
                record.ifsc_code
            ));
        }
        if record.bank_name.is_empty() {
            warnings.push(format!(
                "No bank name known for IFSC code '{}'",
                record.ifsc_code
            ));
        }
    }

    if !record.amount.is_empty() && parse_amount(&record.amount).is_none() {
        warnings.push(format!("Amount '{}' is not a number", record.amount));
    }

    if record.invoice_no.chars().count() > MAX_INVOICE_NO_LEN {
        warnings.push(format!(
            "Invoice No. '{}' is unusually long and may be misread",
            record.invoice_no
        ));
    }

    for (value, name) in [
        (&record.invoice_date, "Invoice date"),
        (&record.invoice_no, "Invoice number"),
        (&record.amount, "Amount"),
    ] {
        if value.is_empty() {
            warnings.push(format!("{name} could not be detected"));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> InvoiceRecord {
        InvoiceRecord {
            party_name: "Acme".into(),
            invoice_date: "01/02/2025".into(),
            invoice_no: "17".into(),
            amount: "1500.00".into(),
            bank_name: "HDFC Bank".into(),
            bank_account_no: "50100234567891".into(),
            ifsc_code: "HDFC0001234".into(),
            pan_or_gst: "ABCDE1234F".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_record_has_no_warnings() {
        assert!(validate_record(&complete()).is_empty());
    }

    #[test]
    fn test_amount_without_account() {
        let r = InvoiceRecord {
            bank_account_no: String::new(),
            ifsc_code: String::new(),
            bank_name: String::new(),
            ..complete()
        };
        let w = validate_record(&r);
        assert_eq!(w, vec!["Amount found but no bank account number detected"]);
    }

    #[test]
    fn test_account_without_ifsc() {
        let r = InvoiceRecord {
            ifsc_code: String::new(),
            bank_name: String::new(),
            ..complete()
        };
        assert_eq!(
            validate_record(&r),
            vec!["Account number found but no IFSC code detected"]
        );
    }

    #[test]
    fn test_unmapped_and_malformed_ifsc() {
        let r = InvoiceRecord {
            ifsc_code: "ABCD1234".into(),
            bank_name: String::new(),
            ..complete()
        };
        let w = validate_record(&r);
        assert_eq!(w.len(), 2);
        assert!(w[0].contains("expected format"));
        assert!(w[1].contains("No bank name"));
    }

    #[test]
    fn test_missing_core_fields() {
        let r = InvoiceRecord {
            party_name: "Acme".into(),
            ..Default::default()
        };
        assert_eq!(
            validate_record(&r),
            vec![
                "Invoice date could not be detected",
                "Invoice number could not be detected",
                "Amount could not be detected",
            ]
        );
    }

    #[test]
    fn test_non_numeric_amount() {
        let r = InvoiceRecord {
            amount: "Three thousand".into(),
            ..complete()
        };
        assert_eq!(validate_record(&r), vec!["Amount 'Three thousand' is not a number"]);
    }

    #[test]
    fn test_failed_record_not_reviewed() {
        assert!(validate_record(&InvoiceRecord::failed("Acme", "corrupt")).is_empty());
    }
}
