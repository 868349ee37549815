use std::io::Cursor;
use std::path::Path;

use calamine::{Reader, Xlsx};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::error::InvoiceError;
use crate::model::{Batch, Column, InvoiceRecord};

pub const INVOICES_SHEET: &str = "Invoices";
pub const WARNINGS_SHEET: &str = "Warnings";

const MAX_COLUMN_WIDTH: usize = 50;

/// Build the workbook in memory and return the xlsx bytes.
pub fn write_workbook(batch: &Batch) -> Result<Vec<u8>, InvoiceError> {
    let mut workbook = build_workbook(batch)?;
    Ok(workbook.save_to_buffer()?)
}

/// Build the workbook and save it to `path`.
pub fn write_workbook_to(path: &Path, batch: &Batch) -> Result<(), InvoiceError> {
    let mut workbook = build_workbook(batch)?;
    workbook.save(path)?;
    Ok(())
}

fn build_workbook(batch: &Batch) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let records: Vec<&InvoiceRecord> = batch.records().collect();
    write_invoices_sheet(workbook.add_worksheet(), &records, &header_format)?;

    if batch.has_warnings() {
        let rows: Vec<[&str; 2]> = batch
            .documents
            .iter()
            .flat_map(|d| d.warnings.iter().map(|w| [d.source.as_str(), w.as_str()]))
            .collect();
        write_warnings_sheet(workbook.add_worksheet(), &rows, &header_format)?;
    }

    Ok(workbook)
}

/// One row per record, eight text columns in fixed order, header frozen.
fn write_invoices_sheet(
    worksheet: &mut Worksheet,
    records: &[&InvoiceRecord],
    header_format: &Format,
) -> Result<(), XlsxError> {
    worksheet.set_name(INVOICES_SHEET)?;

    for (col, column) in Column::ALL.iter().enumerate() {
        let width = records
            .iter()
            .map(|r| r.get(*column).chars().count())
            .chain(std::iter::once(column.header().chars().count()))
            .max()
            .unwrap_or(0);
        worksheet.set_column_width(col as u16, column_width(width))?;
        worksheet.write_string_with_format(0, col as u16, column.header(), header_format)?;
    }

    for (row_idx, record) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col, column) in Column::ALL.iter().enumerate() {
            let value = record.get(*column);
            if !value.is_empty() {
                worksheet.write_string(row, col as u16, value)?;
            }
        }
    }

    worksheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn write_warnings_sheet(
    worksheet: &mut Worksheet,
    rows: &[[&str; 2]],
    header_format: &Format,
) -> Result<(), XlsxError> {
    worksheet.set_name(WARNINGS_SHEET)?;

    for (col, header) in ["File", "Warning"].iter().enumerate() {
        let width = rows
            .iter()
            .map(|r| r[col].chars().count())
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);
        worksheet.set_column_width(col as u16, column_width(width))?;
        worksheet.write_string_with_format(0, col as u16, *header, header_format)?;
    }

    for (row_idx, [file, warning]) in rows.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        worksheet.write_string(row, 0, *file)?;
        worksheet.write_string(row, 1, *warning)?;
    }

    Ok(())
}

/// Content width plus padding, capped.
fn column_width(content_chars: usize) -> f64 {
    (content_chars + 2).min(MAX_COLUMN_WIDTH) as f64
}

/// Read the invoice rows back from a workbook written by `write_workbook`.
pub fn read_workbook(bytes: &[u8]) -> Result<Vec<InvoiceRecord>, InvoiceError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| InvoiceError::Workbook(format!("failed to open xlsx: {e}")))?;

    let sheet = workbook.worksheet_range(INVOICES_SHEET).map_err(|e| {
        InvoiceError::Workbook(format!("sheet '{INVOICES_SHEET}' not found: {e}"))
    })?;

    let mut rows = sheet.rows();

    let header: Vec<String> = rows
        .next()
        .map(|r| r.iter().map(cell_as_string).collect())
        .unwrap_or_default();
    let expected: Vec<&str> = Column::ALL.iter().map(|c| c.header()).collect();
    if header != expected {
        return Err(InvoiceError::Workbook(format!(
            "unexpected header row {:?} (expected {:?})",
            header, expected
        )));
    }

    let records = rows
        .map(|row| {
            let mut record = InvoiceRecord::default();
            for (col, column) in Column::ALL.iter().enumerate() {
                let value = row.get(col).map(cell_as_string).unwrap_or_default();
                record.set(*column, value);
            }
            record
        })
        .collect();

    Ok(records)
}

/// Read an exported workbook from disk.
pub fn read_workbook_from(path: &Path) -> Result<Vec<InvoiceRecord>, InvoiceError> {
    let bytes = std::fs::read(path)?;
    read_workbook(&bytes)
}

fn cell_as_string(cell: &calamine::Data) -> String {
    match cell {
        calamine::Data::String(s) => s.clone(),
        calamine::Data::Float(f) => f.to_string(),
        calamine::Data::Int(i) => i.to_string(),
        calamine::Data::Empty => String::new(),
        _ => format!("{cell}"),
    }
}
