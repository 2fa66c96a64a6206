use crate::core::{ConversionReport, Pipeline, TransformOutcome};
use crate::domain::model::{END_COLUMN, START_COLUMN};
use crate::utils::error::Result;

pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs load, transform and save once, printing the user-facing status lines.
    pub fn run(&self) -> Result<ConversionReport> {
        tracing::info!("Loading report");
        let mut table = self.pipeline.extract()?;
        tracing::info!(
            "Loaded {} rows with {} columns",
            table.len(),
            table.headers().len()
        );

        let outcome = self.pipeline.transform(&mut table)?;
        match &outcome {
            TransformOutcome::Transformed { rows } => {
                tracing::info!("Truncated date-times to dates in {} rows", rows);
            }
            TransformOutcome::SkippedTransform { .. } => {
                println!(
                    "Column '{}' or '{}' not found",
                    END_COLUMN, START_COLUMN
                );
            }
        }

        let output_path = self.pipeline.load(&table)?;
        println!(
            "Conversion complete. Modified file saved as: {}",
            output_path
        );

        Ok(ConversionReport {
            output_path,
            rows: table.len(),
            outcome,
        })
    }
}
