use chrono::NaiveDate;
use std::fmt;

pub const START_COLUMN: &str = "Start Date and Time";
pub const END_COLUMN: &str = "End Date and Time";

/// A single field of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// A date-time that has been truncated to its calendar date.
    Date(NaiveDate),
    /// An empty value in a normalized date column.
    Missing,
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Cell::Missing => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

/// In-memory report: a header plus rows that all have one cell per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Builds a table, padding short rows with empty text cells.
    ///
    /// Callers are expected to reject rows wider than the header before this point.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.truncate(width);
                row.resize(width, Cell::Text(String::new()));
                row
            })
            .collect();

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(index))
    }

    /// Mutable access to every cell of one column, in row order.
    pub fn column_mut(&mut self, name: &str) -> Option<impl Iterator<Item = &mut Cell>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter_mut().map(move |row| &mut row[index]))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    Transformed { rows: usize },
    SkippedTransform { missing_column: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub output_path: String,
    pub rows: usize,
    pub outcome: TransformOutcome,
}
