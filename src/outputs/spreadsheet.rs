//! XLSX output via rust_xlsxwriter.

use crate::error::Result;
use crate::models::{CellValue, Projection, ResultRow};
use rust_xlsxwriter::Workbook;

/// Render the table as an XLSX workbook with a single worksheet.
pub fn render(projection: &Projection, rows: &[ResultRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in projection.headers().into_iter().enumerate() {
        sheet.write_string(0, col as u16, header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, cell) in projection.project(row).into_iter().enumerate() {
            let c = col as u16;
            match cell {
                CellValue::Text(s) => sheet.write_string(r, c, s)?,
                CellValue::Count(n) => sheet.write_number(r, c, n as f64)?,
                CellValue::Number(x) => sheet.write_number(r, c, x)?,
            };
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_row;
    use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
    use std::io::Cursor;

    #[test]
    fn test_render_reads_back_with_calamine() {
        let bytes = render(&Projection::metrics_only(), &[sample_row(), sample_row()]).unwrap();

        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        let rows: Vec<_> = range.rows().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 13);
        assert_eq!(rows[0][0], Data::String("positive_score".into()));
        assert_eq!(rows[0][12], Data::String("avg_word_length".into()));
        assert_eq!(rows[1][0], Data::Float(3.0));
        assert_eq!(rows[2][12], Data::Float(5.25));
    }
}
