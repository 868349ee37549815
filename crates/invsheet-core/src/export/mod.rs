pub mod xlsx;

use crate::model::Batch;

/// Render every document's extracted text under a file banner, for
/// troubleshooting labels that were not picked up.
pub fn render_debug_text(batch: &Batch) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();

    for doc in &batch.documents {
        out.push_str(&format!("{rule}\nFILE: {}\n{rule}\n", doc.source));
        match &doc.record.status {
            crate::model::RecordStatus::Failed { reason } => {
                out.push_str(&format!("(not readable: {reason})\n"));
            }
            crate::model::RecordStatus::Parsed => {
                out.push_str(&doc.raw_text);
                out.push('\n');
            }
        }
        out.push('\n');
    }

    out
}
