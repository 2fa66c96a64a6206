use crate::domain::model::{Cell, Table};
use crate::utils::error::{ConvertError, Result};
use std::borrow::Cow;
use std::collections::HashSet;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parses a report export: drops `skip_rows` metadata lines, then reads a header
/// row and the data rows beneath it.
pub fn parse_table(data: &[u8], skip_rows: usize) -> Result<Table> {
    let body = skip_lines(data, skip_rows);
    let text = decode(body);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let raw_headers = reader.headers()?.clone();
    if raw_headers.is_empty() {
        return Err(ConvertError::NoHeader { skipped: skip_rows });
    }
    let headers = dedupe_headers(raw_headers.iter());
    let width = headers.len();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or(0) + skip_rows as u64;
            return Err(ConvertError::RaggedRow {
                line,
                expected: width,
                found: record.len(),
            });
        }
        rows.push(record.iter().map(Cell::from).collect());
    }

    tracing::debug!(
        "Parsed {} columns and {} rows after skipping {} lines",
        width,
        rows.len(),
        skip_rows
    );

    Ok(Table::new(headers, rows))
}

/// Serializes a table with a header row and minimal quoting.
pub fn write_table(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ConvertError::Io(e.into_error()))
}

fn skip_lines(data: &[u8], count: usize) -> &[u8] {
    let mut rest = data;
    for _ in 0..count {
        match rest.iter().position(|&b| b == b'\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return &[],
        }
    }
    rest
}

fn decode(data: &[u8]) -> Cow<'_, str> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    match std::str::from_utf8(data) {
        Ok(text) => Cow::Borrowed(text),
        Err(e) => {
            tracing::warn!(
                "Input is not valid UTF-8 (at byte {}), decoding as Latin-1",
                e.valid_up_to()
            );
            Cow::Owned(data.iter().map(|&b| b as char).collect())
        }
    }
}

/// Empty names become `Unnamed: <index>`; repeated names get a numeric suffix:
/// `Agent`, `Agent.1`, `Agent.2`.
fn dedupe_headers<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let names: Vec<&str> = names.collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut headers = Vec::with_capacity(names.len());

    for (index, name) in names.into_iter().enumerate() {
        let name = if name.is_empty() {
            format!("Unnamed: {}", index)
        } else {
            name.to_string()
        };
        let mut candidate = name.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", name, suffix);
            suffix += 1;
        }
        seen.insert(candidate.clone());
        headers.push(candidate);
    }

    headers
}
