//! Data models for scraped articles and their computed metrics.
//!
//! - [`Article`]: title and body text scraped from a single URL
//! - [`MetricsRecord`]: the thirteen readability and sentiment metrics of an article
//! - [`ResultRow`]: an article's title and URL together with its metrics
//! - [`Column`] / [`Projection`]: the fixed column order used when writing tables

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// A scraped article.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// Text of the first `h1`, or `"No Title"`.
    pub title: String,
    /// The URL the article was fetched from.
    pub url: String,
    /// Every paragraph's trimmed text joined with single spaces.
    pub body_text: String,
}

/// Readability and sentiment metrics for one article.
///
/// Field names double as output column names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRecord {
    pub positive_score: usize,
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    pub avg_sentence_length: f64,
    pub percentage_complex_words: f64,
    pub fog_index: f64,
    /// Always equal to `avg_sentence_length`; kept as its own column.
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
    pub word_count: usize,
    pub syllables_per_word: f64,
    pub personal_pronouns: usize,
    pub avg_word_length: f64,
}

/// One row of the result table, in input URL order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub title: String,
    pub url: String,
    pub metrics: MetricsRecord,
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Count(usize),
    Number(f64),
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Count(n) => write!(f, "{n}"),
            CellValue::Number(x) => write!(f, "{x}"),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Count(n) => serializer.serialize_u64(*n as u64),
            CellValue::Number(x) => serializer.serialize_f64(*x),
        }
    }
}

/// A column of the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Title,
    Url,
    PositiveScore,
    NegativeScore,
    PolarityScore,
    SubjectivityScore,
    AvgSentenceLength,
    PercentageComplexWords,
    FogIndex,
    AvgWordsPerSentence,
    ComplexWordCount,
    WordCount,
    SyllablesPerWord,
    PersonalPronouns,
    AvgWordLength,
}

impl Column {
    /// The thirteen metric columns, in output order.
    pub const METRICS: [Column; 13] = [
        Column::PositiveScore,
        Column::NegativeScore,
        Column::PolarityScore,
        Column::SubjectivityScore,
        Column::AvgSentenceLength,
        Column::PercentageComplexWords,
        Column::FogIndex,
        Column::AvgWordsPerSentence,
        Column::ComplexWordCount,
        Column::WordCount,
        Column::SyllablesPerWord,
        Column::PersonalPronouns,
        Column::AvgWordLength,
    ];

    /// Header text written for this column.
    pub fn name(self) -> &'static str {
        match self {
            Column::Title => "Title",
            Column::Url => "URL",
            Column::PositiveScore => "positive_score",
            Column::NegativeScore => "negative_score",
            Column::PolarityScore => "polarity_score",
            Column::SubjectivityScore => "subjectivity_score",
            Column::AvgSentenceLength => "avg_sentence_length",
            Column::PercentageComplexWords => "percentage_complex_words",
            Column::FogIndex => "fog_index",
            Column::AvgWordsPerSentence => "avg_words_per_sentence",
            Column::ComplexWordCount => "complex_word_count",
            Column::WordCount => "word_count",
            Column::SyllablesPerWord => "syllables_per_word",
            Column::PersonalPronouns => "personal_pronouns",
            Column::AvgWordLength => "avg_word_length",
        }
    }
}

impl ResultRow {
    /// Value of `column` for this row.
    pub fn cell(&self, column: Column) -> CellValue {
        let m = &self.metrics;
        match column {
            Column::Title => CellValue::Text(self.title.clone()),
            Column::Url => CellValue::Text(self.url.clone()),
            Column::PositiveScore => CellValue::Count(m.positive_score),
            Column::NegativeScore => CellValue::Count(m.negative_score),
            Column::PolarityScore => CellValue::Number(m.polarity_score),
            Column::SubjectivityScore => CellValue::Number(m.subjectivity_score),
            Column::AvgSentenceLength => CellValue::Number(m.avg_sentence_length),
            Column::PercentageComplexWords => CellValue::Number(m.percentage_complex_words),
            Column::FogIndex => CellValue::Number(m.fog_index),
            Column::AvgWordsPerSentence => CellValue::Number(m.avg_words_per_sentence),
            Column::ComplexWordCount => CellValue::Count(m.complex_word_count),
            Column::WordCount => CellValue::Count(m.word_count),
            Column::SyllablesPerWord => CellValue::Number(m.syllables_per_word),
            Column::PersonalPronouns => CellValue::Count(m.personal_pronouns),
            Column::AvgWordLength => CellValue::Number(m.avg_word_length),
        }
    }
}

/// The ordered set of columns written to the output table.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    columns: Vec<Column>,
}

impl Projection {
    /// The thirteen metric columns. `Title` and `URL` are dropped.
    pub fn metrics_only() -> Self {
        Self {
            columns: Column::METRICS.to_vec(),
        }
    }

    /// `Title` and `URL` followed by the thirteen metric columns.
    pub fn with_source_columns() -> Self {
        let mut columns = vec![Column::Title, Column::Url];
        columns.extend_from_slice(&Column::METRICS);
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    pub fn project(&self, row: &ResultRow) -> Vec<CellValue> {
        self.columns.iter().map(|c| row.cell(*c)).collect()
    }

    /// Borrowing view of `row` that serializes as a map in column order.
    pub fn view<'a>(&'a self, row: &'a ResultRow) -> ProjectedRow<'a> {
        ProjectedRow {
            projection: self,
            row,
        }
    }
}

/// A row serialized as `{column: value}` with keys in projection order.
pub struct ProjectedRow<'a> {
    projection: &'a Projection,
    row: &'a ResultRow,
}

impl Serialize for ProjectedRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let columns = self.projection.columns();
        let mut map = serializer.serialize_map(Some(columns.len()))?;
        for column in columns {
            map.serialize_entry(column.name(), &self.row.cell(*column))?;
        }
        map.end()
    }
}

#[cfg(test)]
pub(crate) fn sample_row() -> ResultRow {
    ResultRow {
        title: "Quarterly Outlook".to_string(),
        url: "https://example.com/outlook".to_string(),
        metrics: MetricsRecord {
            positive_score: 3,
            negative_score: 1,
            polarity_score: 0.4,
            subjectivity_score: 0.2,
            avg_sentence_length: 6.5,
            percentage_complex_words: 10.0,
            fog_index: 6.6,
            avg_words_per_sentence: 6.5,
            complex_word_count: 2,
            word_count: 19,
            syllables_per_word: 1.5,
            personal_pronouns: 4,
            avg_word_length: 5.25,
        },
    }
}
