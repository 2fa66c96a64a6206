pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::ConverterConfig;
pub use self::core::{convert, convert_with, engine::ConversionEngine, pipeline::ReportPipeline};
pub use domain::model::{Cell, ConversionReport, Table, TransformOutcome, END_COLUMN, START_COLUMN};
pub use utils::error::{ConvertError, Result};
