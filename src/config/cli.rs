use crate::config::{ConverterConfig, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_SKIP_ROWS};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "calls-report-converter")]
#[command(about = "Truncates the call report's start/end date-times to dates")]
pub struct CliConfig {
    /// Report export to read
    #[arg(long, default_value = DEFAULT_INPUT_FILE)]
    pub input: String,

    /// Where to write the converted report
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Metadata lines above the header row
    #[arg(long, default_value_t = DEFAULT_SKIP_ROWS)]
    pub skip_rows: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl From<&CliConfig> for ConverterConfig {
    fn from(cli: &CliConfig) -> Self {
        Self {
            input_path: cli.input.clone(),
            output_path: cli.output.clone(),
            skip_rows: cli.skip_rows,
        }
    }
}
