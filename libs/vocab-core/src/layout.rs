//! Reading-order reconstruction for positioned page text.
//!
//! Fragments are clustered into rows by baseline, rows are ordered top to
//! bottom (descending y) and fragments left to right (ascending x). Each row
//! becomes one line of the page block.

use crate::types::{ExtractionConfig, Fragment, Row, RowClustering};

/// Cluster a page's fragments into rows in reading order.
///
/// A row's baseline is fixed by its first fragment and never re-averaged.
/// Sorting is stable, so fragments with equal x keep their input order.
pub fn reconstruct_rows(fragments: &[Fragment], tolerance: f64, policy: RowClustering) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();

    for fragment in fragments {
        match find_row(&rows, fragment.y, tolerance, policy) {
            Some(idx) => rows[idx].fragments.push(fragment.clone()),
            None => rows.push(Row {
                y: fragment.y,
                fragments: vec![fragment.clone()],
            }),
        }
    }

    rows.sort_by(|a, b| b.y.total_cmp(&a.y));
    for row in &mut rows {
        row.fragments.sort_by(|a, b| a.x.total_cmp(&b.x));
    }
    rows
}

fn find_row(rows: &[Row], y: f64, tolerance: f64, policy: RowClustering) -> Option<usize> {
    let within = |row: &Row| (row.y - y).abs() < tolerance;
    match policy {
        RowClustering::FirstMatch => rows.iter().position(within),
        RowClustering::NearestBaseline => {
            let mut best: Option<(usize, f64)> = None;
            for (idx, row) in rows.iter().enumerate().filter(|(_, r)| within(r)) {
                let distance = (row.y - y).abs();
                if best.map_or(true, |(_, d)| distance < d) {
                    best = Some((idx, distance));
                }
            }
            best.map(|(idx, _)| idx)
        }
    }
}

/// Render rows as a page block: one newline-terminated line per row.
pub fn page_block(rows: &[Row]) -> String {
    let mut block = String::new();
    for row in rows {
        block.push_str(&row.text());
        block.push('\n');
    }
    block
}

/// Reconstruct rows for one page and render its block.
pub fn page_text(fragments: &[Fragment], config: &ExtractionConfig) -> String {
    let rows = reconstruct_rows(fragments, config.row_tolerance, config.row_clustering);
    tracing::debug!(fragments = fragments.len(), rows = rows.len(), "reconstructed page rows");
    page_block(&rows)
}

/// Join page blocks, in page order, into the document text stream.
pub fn document_text<S: AsRef<str>>(blocks: &[S]) -> String {
    blocks
        .iter()
        .map(|b| b.as_ref())
        .collect::<Vec<_>>()
        .join("\n")
}
