use once_cell::sync::Lazy;

/// What a label on the invoice announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    InvoiceDate,
    InvoiceNo,
    Amount,
    AccountNo,
    Ifsc,
    Pan,
    Gst,
    /// A combined "PAN / GST" label; the value shape decides which it is.
    TaxId,
    /// Recognised and captured, but never copied into the record
    /// (submission and upload dates).
    Excluded,
    /// Known labels that only end the value of the label before them.
    Boundary,
}

/// Label spellings. Matching is ASCII case-insensitive and word-bounded;
/// the longest spelling wins at any position.
const LABELS: &[(&str, LabelKind)] = &[
    ("Invoice Date", LabelKind::InvoiceDate),
    ("Bill Date", LabelKind::InvoiceDate),
    ("Dated", LabelKind::InvoiceDate),
    ("Date", LabelKind::InvoiceDate),
    ("Invoice No.", LabelKind::InvoiceNo),
    ("Invoice No", LabelKind::InvoiceNo),
    ("Invoice Number", LabelKind::InvoiceNo),
    ("Invoice #", LabelKind::InvoiceNo),
    ("Inv No.", LabelKind::InvoiceNo),
    ("Inv No", LabelKind::InvoiceNo),
    ("Bill No.", LabelKind::InvoiceNo),
    ("Bill No", LabelKind::InvoiceNo),
    ("Total Amount", LabelKind::Amount),
    ("Grand Total", LabelKind::Amount),
    ("Net Amount", LabelKind::Amount),
    ("Amount Payable", LabelKind::Amount),
    ("Total Payable", LabelKind::Amount),
    ("Amount", LabelKind::Amount),
    ("Bank Account No.", LabelKind::AccountNo),
    ("Bank Account No", LabelKind::AccountNo),
    ("Bank Account Number", LabelKind::AccountNo),
    ("Account No.", LabelKind::AccountNo),
    ("Account No", LabelKind::AccountNo),
    ("Account Number", LabelKind::AccountNo),
    ("A/C No.", LabelKind::AccountNo),
    ("A/C No", LabelKind::AccountNo),
    ("Acc No.", LabelKind::AccountNo),
    ("Acc No", LabelKind::AccountNo),
    ("IFSC Code", LabelKind::Ifsc),
    ("IFSC", LabelKind::Ifsc),
    ("PAN Number / GST", LabelKind::TaxId),
    ("PAN / GST", LabelKind::TaxId),
    ("PAN/GST", LabelKind::TaxId),
    ("PAN No.", LabelKind::Pan),
    ("PAN No", LabelKind::Pan),
    ("PAN Number", LabelKind::Pan),
    ("PAN", LabelKind::Pan),
    ("GSTIN", LabelKind::Gst),
    ("GST No.", LabelKind::Gst),
    ("GST No", LabelKind::Gst),
    ("GST Number", LabelKind::Gst),
    ("GST", LabelKind::Gst),
    ("Submission Date", LabelKind::Excluded),
    ("Date of Submission", LabelKind::Excluded),
    ("Submitted On", LabelKind::Excluded),
    ("Upload Date", LabelKind::Excluded),
    ("Uploaded On", LabelKind::Excluded),
    ("Date of Upload", LabelKind::Excluded),
    ("Due Date", LabelKind::Boundary),
    ("Amount in Words", LabelKind::Boundary),
    ("GST Amount", LabelKind::Boundary),
    ("Tax Amount", LabelKind::Boundary),
    ("Bank Name", LabelKind::Boundary),
    ("Branch", LabelKind::Boundary),
    ("Account Holder", LabelKind::Boundary),
    ("Account Name", LabelKind::Boundary),
    ("Phone", LabelKind::Boundary),
    ("Mobile", LabelKind::Boundary),
    ("Email", LabelKind::Boundary),
    ("Place of Supply", LabelKind::Boundary),
    ("Bill To", LabelKind::Boundary),
    ("Ship To", LabelKind::Boundary),
];

const COLUMN_GAP: &str = "   ";

/// Lowercased labels, longest first.
static MATCH_ORDER: Lazy<Vec<(String, &'static str, LabelKind)>> = Lazy::new(|| {
    let mut labels: Vec<(String, &'static str, LabelKind)> = LABELS
        .iter()
        .map(|&(label, kind)| (label.to_ascii_lowercase(), label, kind))
        .collect();
    labels.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    labels
});

/// One occurrence of a known label and the text it announces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelHit<'a> {
    pub kind: LabelKind,
    pub label: &'static str,
    pub line_index: usize,
    pub value: &'a str,
}

/// Find every label occurrence in `text`, in document order.
pub fn scan_labels(text: &str) -> Vec<LabelHit<'_>> {
    let mut hits = Vec::new();

    for (line_index, line) in text.lines().enumerate() {
        let found = find_in_line(line);
        for (n, &(_, end, label, kind)) in found.iter().enumerate() {
            let value_end = found.get(n + 1).map(|next| next.0).unwrap_or(line.len());
            hits.push(LabelHit {
                kind,
                label,
                line_index,
                value: clean_value(&line[end..value_end]),
            });
        }
    }

    hits
}

/// Returns `(start, end, label, kind)` for each label in the line.
fn find_in_line(line: &str) -> Vec<(usize, usize, &'static str, LabelKind)> {
    // ASCII lowercasing keeps byte offsets aligned with `line`.
    let lower = line.to_ascii_lowercase();
    let mut found = Vec::new();
    let mut i = 0;

    while i < line.len() {
        if !line.is_char_boundary(i) {
            i += 1;
            continue;
        }

        let boundary_before = line[..i]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());

        let matched = if boundary_before {
            MATCH_ORDER.iter().find(|(needle, _, _)| {
                lower[i..].starts_with(needle.as_str()) && ends_on_boundary(line, i, needle)
            })
        } else {
            None
        };

        match matched {
            Some((needle, label, kind)) => {
                let end = i + needle.len();
                found.push((i, end, *label, *kind));
                i = end;
            }
            None => i += 1,
        }
    }

    found
}

fn ends_on_boundary(line: &str, start: usize, needle: &str) -> bool {
    let last_is_word = needle
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric());
    if !last_is_word {
        return true;
    }
    line[start + needle.len()..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric())
}

/// Strip the separator after a label and cut at the next wide gap.
///
/// Truncates at a run of 3+ spaces, which is how `pdftotext -layout`
/// separates side-by-side columns. A gap right after the label means the
/// label heads a column and has no value of its own.
fn clean_value(raw: &str) -> &str {
    if raw.starts_with(COLUMN_GAP) {
        return "";
    }
    let trimmed = raw.trim_start_matches(|c: char| {
        matches!(c, ':' | '-' | '–' | '—' | '#' | '.' | '=') || c.is_whitespace()
    });
    let value = match trimmed.find(COLUMN_GAP) {
        Some(gap_pos) => &trimmed[..gap_pos],
        None => trimmed,
    };
    value.trim()
}
