use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Parsed,
    Failed {
        reason: String,
    },
}

impl RecordStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, RecordStatus::Failed { .. })
    }
}

/// The structured output of parsing one invoice document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub party_name: String,
    pub invoice_date: String,
    pub invoice_no: String,
    pub amount: String,
    pub bank_name: String,
    pub bank_account_no: String,
    pub ifsc_code: String,
    pub pan_or_gst: String,
    #[serde(default)]
    pub status: RecordStatus,
}

impl InvoiceRecord {
    /// A record for a document that could not be read: every parsed field
    /// empty, the deployment's party name kept.
    pub fn failed(party_name: &str, reason: impl Into<String>) -> Self {
        InvoiceRecord {
            party_name: party_name.to_string(),
            status: RecordStatus::Failed {
                reason: reason.into(),
            },
            ..Default::default()
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status.is_failed()
    }

    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::PartyName => &self.party_name,
            Column::InvoiceDate => &self.invoice_date,
            Column::InvoiceNo => &self.invoice_no,
            Column::Amount => &self.amount,
            Column::BankName => &self.bank_name,
            Column::BankAccountNo => &self.bank_account_no,
            Column::IfscCode => &self.ifsc_code,
            Column::PanOrGst => &self.pan_or_gst,
        }
    }

    pub fn set(&mut self, column: Column, value: String) {
        let slot = match column {
            Column::PartyName => &mut self.party_name,
            Column::InvoiceDate => &mut self.invoice_date,
            Column::InvoiceNo => &mut self.invoice_no,
            Column::Amount => &mut self.amount,
            Column::BankName => &mut self.bank_name,
            Column::BankAccountNo => &mut self.bank_account_no,
            Column::IfscCode => &mut self.ifsc_code,
            Column::PanOrGst => &mut self.pan_or_gst,
        };
        *slot = value;
    }
}

/// Export columns, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    PartyName,
    InvoiceDate,
    InvoiceNo,
    Amount,
    BankName,
    BankAccountNo,
    IfscCode,
    PanOrGst,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::PartyName,
        Column::InvoiceDate,
        Column::InvoiceNo,
        Column::Amount,
        Column::BankName,
        Column::BankAccountNo,
        Column::IfscCode,
        Column::PanOrGst,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::PartyName => "Party name",
            Column::InvoiceDate => "Invoice Date",
            Column::InvoiceNo => "Invoice No.",
            Column::Amount => "Amount",
            Column::BankName => "Bank Name",
            Column::BankAccountNo => "Bank Account No",
            Column::IfscCode => "IFSC Code",
            Column::PanOrGst => "PAN Number / GST",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// One uploaded document.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        SourceDocument {
            name: name.into(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// Display name of the source document (usually the file name).
    pub source: String,
    pub record: InvoiceRecord,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Extracted text, kept for the troubleshooting dump.
    #[serde(skip)]
    pub raw_text: String,
}

/// Records for one conversion run, in upload order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Batch {
    pub documents: Vec<ProcessedDocument>,
}

impl Batch {
    pub fn records(&self) -> impl Iterator<Item = &InvoiceRecord> {
        self.documents.iter().map(|d| &d.record)
    }

    pub fn failed(&self) -> impl Iterator<Item = &ProcessedDocument> {
        self.documents.iter().filter(|d| d.record.is_failed())
    }

    pub fn parsed_count(&self) -> usize {
        self.documents.len() - self.failed().count()
    }

    pub fn has_warnings(&self) -> bool {
        self.documents.iter().any(|d| !d.warnings.is_empty())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
