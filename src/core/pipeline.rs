use crate::core::csv_codec::{parse_table, write_table};
use crate::core::dates::normalize_column;
use crate::core::{ConfigProvider, Pipeline, Storage, Table, TransformOutcome};
use crate::domain::model::{END_COLUMN, START_COLUMN};
use crate::utils::error::Result;

/// Reads the call report, truncates its date-time columns and writes it back out.
pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    fn extract(&self) -> Result<Table> {
        let data = self.storage.read_file(self.config.input_path())?;
        tracing::debug!(
            "Read {} bytes from {}",
            data.len(),
            self.config.input_path()
        );

        parse_table(&data, self.config.skip_rows())
    }

    fn transform(&self, table: &mut Table) -> Result<TransformOutcome> {
        // Only the end column is checked; a missing start column is a hard error below.
        if !table.has_column(END_COLUMN) {
            tracing::warn!("Column '{}' missing, leaving rows unchanged", END_COLUMN);
            return Ok(TransformOutcome::SkippedTransform {
                missing_column: END_COLUMN.to_string(),
            });
        }

        for column in [END_COLUMN, START_COLUMN] {
            normalize_column(table, column)?;
        }

        Ok(TransformOutcome::Transformed { rows: table.len() })
    }

    fn load(&self, table: &Table) -> Result<String> {
        let output_path = self.config.output_path();

        // Serialize fully before touching the output so failures leave it untouched.
        let data = write_table(table)?;
        tracing::debug!("Writing {} bytes to {}", data.len(), output_path);
        self.storage.write_file(output_path, &data)?;

        Ok(output_path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConverterConfig;
    use crate::domain::model::Cell;
    use crate::utils::error::ConvertError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .borrow_mut()
                .insert(path.to_string(), data.as_bytes().to_vec());
            storage
        }

        fn get_file(&self, path: &str) -> Option<String> {
            self.files
                .borrow()
                .get(path)
                .map(|data| String::from_utf8(data.clone()).unwrap())
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| ConvertError::InputNotFound {
                    path: path.to_string(),
                })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    const METADATA: &str = "Report\nAccount\nPeriod\nGenerated\nFilters\n";

    fn pipeline(body: &str) -> ReportPipeline<MockStorage, ConverterConfig> {
        let input = format!("{}{}", METADATA, body);
        ReportPipeline::new(
            MockStorage::with_file("in.csv", &input),
            ConverterConfig::new("in.csv", "out.csv"),
        )
    }

    #[test]
    fn test_transform_truncates_both_columns() {
        let pipeline = pipeline(
            "Start Date and Time,End Date and Time,Agent\n01/02/2024 08:15:00,01/02/2024 09:30:00,Alice\n",
        );
        let mut table = pipeline.extract().unwrap();
        let outcome = pipeline.transform(&mut table).unwrap();

        assert_eq!(outcome, TransformOutcome::Transformed { rows: 1 });
        assert_eq!(table.get(0, START_COLUMN).unwrap().to_string(), "2024-01-02");
        assert_eq!(table.get(0, END_COLUMN).unwrap().to_string(), "2024-01-02");
        assert_eq!(table.get(0, "Agent"), Some(&Cell::from("Alice")));
    }

    #[test]
    fn test_transform_skips_without_end_column() {
        let pipeline = pipeline("Start Date and Time,Agent\n01/02/2024 08:15:00,Alice\n");
        let mut table = pipeline.extract().unwrap();
        let before = table.clone();

        let outcome = pipeline.transform(&mut table).unwrap();

        assert_eq!(
            outcome,
            TransformOutcome::SkippedTransform {
                missing_column: END_COLUMN.to_string()
            }
        );
        assert_eq!(table, before);
    }

    #[test]
    fn test_transform_requires_start_once_end_present() {
        let pipeline = pipeline("End Date and Time,Agent\n01/02/2024 09:30:00,Alice\n");
        let mut table = pipeline.extract().unwrap();

        let err = pipeline.transform(&mut table).unwrap_err();
        assert!(matches!(err, ConvertError::ColumnNotFound { ref column } if column == START_COLUMN));
    }

    #[test]
    fn test_end_column_is_checked_first() {
        let pipeline = pipeline(
            "Start Date and Time,End Date and Time\nnot-a-date,also-bad\n",
        );
        let mut table = pipeline.extract().unwrap();

        match pipeline.transform(&mut table).unwrap_err() {
            ConvertError::DateParse { column, value, .. } => {
                assert_eq!(column, END_COLUMN);
                assert_eq!(value, "also-bad");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_writes_output_path() {
        let pipeline = pipeline("Agent,Queue\nAlice,Sales\n");
        let table = pipeline.extract().unwrap();

        let path = pipeline.load(&table).unwrap();

        assert_eq!(path, "out.csv");
        assert_eq!(
            pipeline.storage.get_file("out.csv").unwrap(),
            "Agent,Queue\nAlice,Sales\n"
        );
    }

    #[test]
    fn test_extract_missing_input() {
        let pipeline = ReportPipeline::new(
            MockStorage::default(),
            ConverterConfig::default(),
        );
        let err = pipeline.extract().unwrap_err();
        assert!(matches!(err, ConvertError::InputNotFound { .. }));
    }
}
