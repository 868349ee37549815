pub mod banks;
pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod validate;

use banks::BankCodeTable;
use error::InvoiceError;
use extraction::PdfExtractor;
use log::{info, warn};
use model::{Batch, InvoiceRecord, ProcessedDocument, SourceDocument};

const NO_TEXT_WARNING: &str =
    "No text extracted; the PDF may be a scanned image. Fill in the fields by hand";

/// Main API entry point: convert uploaded documents into invoice records.
///
/// Documents are processed one after another in the given order. A document
/// that cannot be read becomes a failed record in its slot; it never stops
/// the batch.
pub fn convert_documents(
    docs: &[SourceDocument],
    extractor: &dyn PdfExtractor,
    banks: &BankCodeTable,
    party_name: &str,
) -> Batch {
    let documents = docs
        .iter()
        .map(|doc| convert_document(doc, extractor, banks, party_name))
        .collect();

    Batch { documents }
}

/// One batch slot: the processed document, or a failed record in its place.
pub fn convert_document(
    doc: &SourceDocument,
    extractor: &dyn PdfExtractor,
    banks: &BankCodeTable,
    party_name: &str,
) -> ProcessedDocument {
    process_document(doc, extractor, banks, party_name)
        .unwrap_or_else(|e| failed_document(&doc.name, party_name, &e))
}

/// The failed slot for a document that could not be read, whatever the cause.
pub fn failed_document(name: &str, party_name: &str, error: &InvoiceError) -> ProcessedDocument {
    warn!("{name}: {error}");
    ProcessedDocument {
        source: name.to_string(),
        record: InvoiceRecord::failed(party_name, error.to_string()),
        warnings: vec![format!("Document could not be read: {error}")],
        raw_text: String::new(),
    }
}

/// Extract, parse, resolve the bank and review a single document.
pub fn process_document(
    doc: &SourceDocument,
    extractor: &dyn PdfExtractor,
    banks: &BankCodeTable,
    party_name: &str,
) -> Result<ProcessedDocument, InvoiceError> {
    let pages = extractor.extract_pages(&doc.bytes)?;
    let text = extraction::document_text(&pages);

    let record = parse_text(&text, banks, party_name);

    let mut warnings = Vec::new();
    if text.trim().is_empty() {
        warnings.push(NO_TEXT_WARNING.to_string());
    } else {
        warnings.extend(validate::validate_record(&record));
    }

    info!(
        "{}: {} page(s) via {}, {} warning(s)",
        doc.name,
        pages.len(),
        extractor.backend_name(),
        warnings.len()
    );

    Ok(ProcessedDocument {
        source: doc.name.clone(),
        record,
        warnings,
        raw_text: text,
    })
}

/// Field Parser followed by the Bank Code Resolver, on already extracted text.
pub fn parse_text(text: &str, banks: &BankCodeTable, party_name: &str) -> InvoiceRecord {
    let mut record = parsing::parse_invoice(text, party_name);
    record.bank_name = banks.resolve(&record.ifsc_code);
    record
}
