//! CSV output.

use crate::error::{AnalyzerError, Result};
use crate::models::{Projection, ResultRow};
use csv::Writer;

/// Render the table as CSV bytes: a header record, then one record per row.
pub fn render(projection: &Projection, rows: &[ResultRow]) -> Result<Vec<u8>> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(projection.headers())?;
    for row in rows {
        writer.write_record(projection.project(row).iter().map(|c| c.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| AnalyzerError::io("<csv buffer>", e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_row;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_with_source_columns_quotes_text() {
        let mut row = sample_row();
        row.title = "Rates, again".to_string();

        let bytes = render(&Projection::with_source_columns(), &[row]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Title,URL,positive_score,negative_score,polarity_score,subjectivity_score,\
             avg_sentence_length,percentage_complex_words,fog_index,avg_words_per_sentence,\
             complex_word_count,word_count,syllables_per_word,personal_pronouns,avg_word_length"
        );
        assert_eq!(
            lines.next().unwrap(),
            "\"Rates, again\",https://example.com/outlook,3,1,0.4,0.2,6.5,10,6.6,6.5,2,19,1.5,4,5.25"
        );
    }

    #[test]
    fn test_render_empty_table_has_header_only() {
        let bytes = render(&Projection::metrics_only(), &[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
