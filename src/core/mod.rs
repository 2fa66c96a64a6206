pub mod csv_codec;
pub mod dates;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{ConversionReport, Table, TransformOutcome};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

use crate::adapters::storage::LocalStorage;
use crate::config::ConverterConfig;
use crate::utils::validation::Validate;
use engine::ConversionEngine;
use pipeline::ReportPipeline;

/// Converts `input_path` into `output_path`, both relative to the working directory.
pub fn convert(input_path: &str, output_path: &str) -> Result<ConversionReport> {
    convert_with(LocalStorage::current_dir(), ConverterConfig::new(input_path, output_path))
}

pub fn convert_with<S: Storage>(storage: S, config: ConverterConfig) -> Result<ConversionReport> {
    config.validate()?;
    ConversionEngine::new(ReportPipeline::new(storage, config)).run()
}
