//! Integration tests for convert_documents() end-to-end pipeline.
//!
//! Uses a MockExtractor that returns pre-built PageContent without
//! invoking pdftotext, so these tests run without poppler-utils. Documents
//! whose bytes start with `CORRUPT` make the mock fail the way pdftotext
//! does on a broken file.

use invsheet_core::banks::builtin::default_table;
use invsheet_core::banks::BankCodeTable;
use invsheet_core::convert_documents;
use invsheet_core::error::InvoiceError;
use invsheet_core::export::xlsx::{read_workbook, write_workbook};
use invsheet_core::extraction::{PageContent, PdfExtractor};
use invsheet_core::model::{Column, SourceDocument};
use invsheet_core::parsing::identifiers::{is_gst, is_pan};

const PARTY: &str = "Sharma Logistics";

/// Treats the document bytes as UTF-8 text, pages separated by form feeds.
struct MockExtractor;

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, InvoiceError> {
        if pdf_bytes.starts_with(b"CORRUPT") {
            return Err(InvoiceError::PdftotextFailed {
                code: 1,
                stderr: "Syntax Error: Couldn't find trailer dictionary".into(),
            });
        }
        let text = String::from_utf8_lossy(pdf_bytes);
        Ok(text
            .split('\x0c')
            .enumerate()
            .map(|(i, page)| PageContent {
                page_number: i + 1,
                lines: page.lines().map(|l| l.to_string()).collect(),
            })
            .collect())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn doc(name: &str, text: &str) -> SourceDocument {
    SourceDocument::new(name, text.as_bytes().to_vec())
}

fn banks() -> BankCodeTable {
    BankCodeTable::from_def(&default_table().unwrap())
}

const HDFC_INVOICE: &str = "\
SHARMA LOGISTICS
TAX INVOICE
Invoice No.: 1043                     Invoice Date: 28-Nov-25
Submission Date: 02-Dec-25
Description of service                Charges
Transport charges                     12,000.00
Total Amount: Rs. 12,500.00/-
Bank Name: HDFC Bank
Account No: 5010 0234 5678 91
IFSC: hdfc0001234
PAN: ABCDE1234F
GST: 22AAAAA0000A1Z5";

const SBI_INVOICE: &str = "\
Bill No: 88
Dated 05.12.2024
Grand Total: INR 3,000
A/C No.- 32145698712\x0cIFSC Code: SBIN0005943
GSTIN: 06AAFCI1834E1ZX";

// ---------------------------------------------------------------------------
// Test 1: A complete invoice produces every field
// ---------------------------------------------------------------------------
#[test]
fn complete_invoice_extracts_all_fields() {
    let batch = convert_documents(&[doc("a.pdf", HDFC_INVOICE)], &MockExtractor, &banks(), PARTY);

    assert_eq!(batch.len(), 1);
    let r = &batch.documents[0].record;
    assert_eq!(r.party_name, PARTY);
    assert_eq!(r.invoice_no, "1043");
    assert_eq!(r.invoice_date, "28-Nov-25");
    assert_eq!(r.amount, "12500.00");
    assert_eq!(r.bank_name, "HDFC Bank");
    assert_eq!(r.bank_account_no, "50100234567891");
    assert_eq!(r.ifsc_code, "HDFC0001234");
    assert_eq!(r.pan_or_gst, "ABCDE1234F");
    assert!(batch.documents[0].warnings.is_empty());
}

// ---------------------------------------------------------------------------
// Test 2: Fields split across pages, GST used without PAN
// ---------------------------------------------------------------------------
#[test]
fn multi_page_invoice_with_gst_only() {
    let batch = convert_documents(&[doc("b.pdf", SBI_INVOICE)], &MockExtractor, &banks(), PARTY);

    let r = &batch.documents[0].record;
    assert_eq!(r.invoice_no, "88");
    assert_eq!(r.invoice_date, "05.12.2024");
    assert_eq!(r.amount, "3000");
    assert_eq!(r.bank_account_no, "32145698712");
    assert_eq!(r.ifsc_code, "SBIN0005943");
    assert_eq!(r.bank_name, "SBI");
    assert_eq!(r.pan_or_gst, "06AAFCI1834E1ZX");
}

// ---------------------------------------------------------------------------
// Test 3: Corrupt document in the middle of a batch
// ---------------------------------------------------------------------------
#[test]
fn corrupt_document_is_flagged_and_batch_continues() {
    let docs = vec![
        doc("first.pdf", HDFC_INVOICE),
        doc("broken.pdf", "CORRUPT%PDF-1.4"),
        doc("third.pdf", SBI_INVOICE),
    ];
    let batch = convert_documents(&docs, &MockExtractor, &banks(), PARTY);

    assert_eq!(batch.len(), 3);
    let names: Vec<&str> = batch.documents.iter().map(|d| d.source.as_str()).collect();
    assert_eq!(names, vec!["first.pdf", "broken.pdf", "third.pdf"]);

    assert!(!batch.documents[0].record.is_failed());
    assert!(batch.documents[1].record.is_failed());
    assert!(!batch.documents[2].record.is_failed());
    assert_eq!(batch.parsed_count(), 2);

    let failed = &batch.documents[1].record;
    for column in Column::ALL.iter().skip(1) {
        assert_eq!(failed.get(*column), "");
    }
    assert!(batch.documents[1].warnings[0].contains("could not be read"));

    assert_eq!(batch.documents[0].record.invoice_no, "1043");
    assert_eq!(batch.documents[2].record.invoice_no, "88");
}

// ---------------------------------------------------------------------------
// Test 4: Scanned (text-less) document still yields a record
// ---------------------------------------------------------------------------
#[test]
fn blank_document_yields_empty_record_with_warning() {
    let batch = convert_documents(&[doc("scan.pdf", "  \n \x0c\n")], &MockExtractor, &banks(), PARTY);

    let d = &batch.documents[0];
    assert!(!d.record.is_failed());
    assert_eq!(d.record.party_name, PARTY);
    assert_eq!(d.record.invoice_no, "");
    assert_eq!(d.record.amount, "");
    assert_eq!(d.warnings.len(), 1);
    assert!(d.warnings[0].contains("scanned image"));
}

// ---------------------------------------------------------------------------
// Test 5: Batch-wide invariants
// ---------------------------------------------------------------------------
#[test]
fn party_name_constant_and_tax_ids_exclusive() {
    let docs = vec![
        doc("a.pdf", HDFC_INVOICE),
        doc("b.pdf", SBI_INVOICE),
        doc("c.pdf", "Party: Someone Else Pvt Ltd\nPAN: ZZZZZ9999Z"),
        doc("d.pdf", "CORRUPT"),
    ];
    let batch = convert_documents(&docs, &MockExtractor, &banks(), PARTY);

    for r in batch.records() {
        assert_eq!(r.party_name, PARTY);
        // One identifier at most: a PAN, a GSTIN, or nothing.
        assert!(r.pan_or_gst.is_empty() || is_pan(&r.pan_or_gst) || is_gst(&r.pan_or_gst));
    }
    assert_eq!(batch.documents[2].record.pan_or_gst, "ZZZZZ9999Z");
}

// ---------------------------------------------------------------------------
// Test 6: Submission date is never reported as the invoice date
// ---------------------------------------------------------------------------
#[test]
fn submission_date_is_dropped() {
    let batch = convert_documents(
        &[doc("s.pdf", "Submission Date: 02-Dec-25\nAmount: 500")],
        &MockExtractor,
        &banks(),
        PARTY,
    );
    let r = &batch.documents[0].record;
    assert_eq!(r.invoice_date, "");
    assert_eq!(r.amount, "500");
}

// ---------------------------------------------------------------------------
// Test 7: Export then re-read reproduces the records in order
// ---------------------------------------------------------------------------
#[test]
fn export_round_trip_preserves_values_and_order() {
    let docs = vec![
        doc("a.pdf", HDFC_INVOICE),
        doc("broken.pdf", "CORRUPT"),
        doc("b.pdf", SBI_INVOICE),
    ];
    let batch = convert_documents(&docs, &MockExtractor, &banks(), PARTY);

    let bytes = write_workbook(&batch).unwrap();
    let read_back = read_workbook(&bytes).unwrap();

    assert_eq!(read_back.len(), batch.len());
    for (original, reread) in batch.records().zip(&read_back) {
        for column in Column::ALL {
            assert_eq!(original.get(column), reread.get(column), "{column}");
        }
    }
}

// ---------------------------------------------------------------------------
// Test 8: Empty upload
// ---------------------------------------------------------------------------
#[test]
fn empty_batch() {
    let batch = convert_documents(&[], &MockExtractor, &banks(), PARTY);
    assert!(batch.is_empty());
    assert_eq!(batch.parsed_count(), 0);
}
