use calls_report_converter::utils::logger;
use calls_report_converter::{convert_with, CliConfig, ConverterConfig, LocalStorage};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting calls-report-converter");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = ConverterConfig::from(&cli);
    tracing::info!("Converting {} -> {}", config.input_path, config.output_path);

    match convert_with(LocalStorage::current_dir(), config) {
        Ok(report) => {
            tracing::info!(
                "Wrote {} rows to {} ({:?})",
                report.rows,
                report.output_path,
                report.outcome
            );
        }
        Err(e) => {
            tracing::error!("Conversion failed: {} (Category: {:?})", e, e.category());
            eprintln!("Error: {}", e);
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
