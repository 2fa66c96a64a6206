use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Unable to read input file {path}: {source}")]
    InputUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No header row found after skipping {skipped} metadata lines")]
    NoHeader { skipped: usize },

    #[error("Expected {expected} fields on line {line}, saw {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Column '{column}' not found")]
    ColumnNotFound { column: String },

    #[error("Unable to parse '{value}' as a date-time in column '{column}' (data row {row})")]
    DateParse {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Unable to write output file {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Input,
    Data,
    Output,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::InvalidConfigValue { .. } => ErrorCategory::Config,
            ConvertError::InputNotFound { .. } | ConvertError::InputUnreadable { .. } => {
                ErrorCategory::Input
            }
            ConvertError::NoHeader { .. }
            | ConvertError::RaggedRow { .. }
            | ConvertError::ColumnNotFound { .. }
            | ConvertError::DateParse { .. }
            | ConvertError::Csv(_) => ErrorCategory::Data,
            ConvertError::WriteError { .. } | ConvertError::Io(_) => ErrorCategory::Output,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config => 2,
            ErrorCategory::Input => 3,
            ErrorCategory::Data => 4,
            ErrorCategory::Output => 5,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConvertError::InputNotFound { path } => format!(
                "Place the exported report at '{}' or pass --input with its location",
                path
            ),
            ConvertError::InputUnreadable { .. } => {
                "Check the file permissions of the input report".to_string()
            }
            ConvertError::NoHeader { skipped } => format!(
                "The report must contain {} metadata lines followed by a header row; adjust --skip-rows if the export layout changed",
                skipped
            ),
            ConvertError::RaggedRow { line, .. } => {
                format!("Line {} has more fields than the header; check its quoting", line)
            }
            ConvertError::ColumnNotFound { column } => {
                format!("Re-export the report including the '{}' column", column)
            }
            ConvertError::DateParse { column, .. } => format!(
                "Fix or clear the offending value in '{}' and run the conversion again",
                column
            ),
            ConvertError::WriteError { .. } | ConvertError::Io(_) => {
                "Make sure the output directory exists and the file is not open elsewhere"
                    .to_string()
            }
            ConvertError::Csv(_) => "Make sure the report is a valid CSV export".to_string(),
            ConvertError::InvalidConfigValue { field, .. } => {
                format!("Provide a valid value for {}", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
