//! JSON output.
//!
//! The table is an array of objects. Keys follow the projection's column order.

use crate::error::Result;
use crate::models::{Projection, ProjectedRow, ResultRow};

/// Render the table as pretty-printed JSON bytes.
pub fn render(projection: &Projection, rows: &[ResultRow]) -> Result<Vec<u8>> {
    let views: Vec<ProjectedRow<'_>> = rows.iter().map(|r| projection.view(r)).collect();
    Ok(serde_json::to_vec_pretty(&views)?)
}
