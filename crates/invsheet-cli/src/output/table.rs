use invsheet_core::model::{Batch, Column, InvoiceRecord, ProcessedDocument, RecordStatus};

const MAX_CELL: usize = 30;

/// Preview of a converted batch: one row per document, then review notes.
pub fn print_batch(batch: &Batch) {
    if batch.is_empty() {
        println!("No documents.");
        return;
    }

    let records: Vec<&InvoiceRecord> = batch.records().collect();
    let sources: Vec<&str> = batch.documents.iter().map(|d| d.source.as_str()).collect();
    print_grid(&records, Some(sources.as_slice()));

    let noted: Vec<&ProcessedDocument> = batch
        .documents
        .iter()
        .filter(|d| !d.warnings.is_empty())
        .collect();
    if !noted.is_empty() {
        println!("\nReview:");
        for doc in noted {
            println!("  {}:", doc.source);
            for w in &doc.warnings {
                println!("    - {w}");
            }
        }
    }
}

/// A single document as a field list.
pub fn print_document(doc: &ProcessedDocument) {
    println!("=== {} ===\n", doc.source);

    let width = Column::ALL
        .iter()
        .map(|c| c.header().len())
        .max()
        .unwrap_or(10);

    for column in Column::ALL {
        println!(
            "  {:<width$}  {}",
            column.header(),
            doc.record.get(column),
            width = width
        );
    }

    if let RecordStatus::Failed { reason } = &doc.record.status {
        println!("\n  FAILED: {reason}");
    }

    if !doc.warnings.is_empty() {
        println!();
        for w in &doc.warnings {
            println!("  warning: {w}");
        }
    }
}

/// Rows read back from a workbook.
pub fn print_records(records: &[InvoiceRecord]) {
    if records.is_empty() {
        println!("No rows.");
        return;
    }
    let refs: Vec<&InvoiceRecord> = records.iter().collect();
    print_grid(&refs, None);
}

fn print_grid(records: &[&InvoiceRecord], sources: Option<&[&str]>) {
    let mut headers: Vec<String> = Vec::new();
    if sources.is_some() {
        headers.push("File".into());
    }
    headers.extend(Column::ALL.iter().map(|c| c.header().to_string()));

    let rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let mut cells = Vec::new();
            if let Some(sources) = sources {
                let marker = if r.is_failed() { " (failed)" } else { "" };
                cells.push(format!("{}{}", sources[i], marker));
            }
            cells.extend(Column::ALL.iter().map(|c| truncate(r.get(*c))));
            cells
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(headers[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    print_row(&headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    print_row(&rule, &widths);
    for row in &rows {
        print_row(row, &widths);
    }
}

fn print_row(cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    println!("{}", line.join("  ").trim_end());
}

fn truncate(value: &str) -> String {
    if value.chars().count() <= MAX_CELL {
        value.to_string()
    } else {
        let head: String = value.chars().take(MAX_CELL - 3).collect();
        format!("{head}...")
    }
}
