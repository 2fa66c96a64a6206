#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};

pub const DEFAULT_INPUT_FILE: &str = "Month_to_Date.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "Modified_Calls_Report_Simple.csv";
/// Metadata lines the reporting system writes above the header.
pub const DEFAULT_SKIP_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub input_path: String,
    pub output_path: String,
    pub skip_rows: usize,
}

impl ConverterConfig {
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            skip_rows: DEFAULT_SKIP_ROWS,
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE)
    }
}

impl ConfigProvider for ConverterConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn skip_rows(&self) -> usize {
        self.skip_rows
    }
}

impl Validate for ConverterConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_report_file_names() {
        let config = ConverterConfig::default();
        assert_eq!(config.input_path(), "Month_to_Date.csv");
        assert_eq!(config.output_path(), "Modified_Calls_Report_Simple.csv");
        assert_eq!(config.skip_rows(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_output() {
        let config = ConverterConfig::new("Month_to_Date.csv", "");
        assert!(config.validate().is_err());
    }
}
