use crate::domain::model::{Cell, Table};
use crate::utils::error::{ConvertError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

// Slash dates are month-first, as the reporting system exports them.
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S%.f",
];

const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%Y/%m/%d", "%d-%b-%Y", "%b %d, %Y"];

// Placeholders the report tooling uses for "no value"; these become empty fields.
const MISSING_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || MISSING_TOKENS.contains(&value)
}

/// Parses a date-time (or plain date) and returns its calendar date.
///
/// Values carrying a UTC offset keep the date as written in that offset.
pub fn parse_date_part(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return Some(d);
        }
    }

    None
}

/// Replaces every cell of `column` with its date-only value.
///
/// Blank cells and placeholders like `N/A` become [`Cell::Missing`]; the first unparseable value aborts the
/// whole column. Returns the number of cells converted to dates.
pub fn normalize_column(table: &mut Table, column: &str) -> Result<usize> {
    let cells = table
        .column_mut(column)
        .ok_or_else(|| ConvertError::ColumnNotFound {
            column: column.to_string(),
        })?;

    let mut converted = 0;
    for (index, cell) in cells.enumerate() {
        let text = match cell {
            Cell::Text(text) => text,
            Cell::Date(_) => {
                converted += 1;
                continue;
            }
            Cell::Missing => continue,
        };

        if is_missing(text) {
            *cell = Cell::Missing;
            continue;
        }

        match parse_date_part(text) {
            Some(date) => {
                *cell = Cell::Date(date);
                converted += 1;
            }
            None => {
                return Err(ConvertError::DateParse {
                    column: column.to_string(),
                    row: index + 1,
                    value: text.clone(),
                })
            }
        }
    }

    tracing::debug!("Normalized {} dates in column '{}'", converted, column);
    Ok(converted)
}
