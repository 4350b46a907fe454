use clap::Parser;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use graphexport::cli::{self, Args, CliConfig, CliUtils};
use graphexport::conversion::Exporter;
use graphexport::error::ExportResult;

fn main() -> Result<()> {
    let args = Args::parse();

    // Create export configuration
    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            cli::handle_error(&e);
            std::process::exit(2);
        }
    };

    // Set up logging
    init_tracing(&config)?;

    if let Err(e) = run(&config) {
        cli::handle_error(&e);
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(config: &CliConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}

fn run(config: &CliConfig) -> ExportResult<()> {
    let exporter = Exporter::new(config.export_config.clone());
    let spinner = CliUtils::create_spinner(config.is_quiet());

    spinner.set_message("Reading tables");
    let tables = match exporter.load_tables() {
        Ok(tables) => tables,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };

    spinner.set_message(format!("Writing to {}", config.output_description()));
    let report = exporter.write(tables);
    spinner.finish_and_clear();
    let report = report?;

    cli::report_missing_columns(&report.statistics, config.is_quiet());
    CliUtils::show_success(
        &format!("Exported to {}", report.output_dir.display()),
        config.is_quiet(),
    );

    if config.want_stats() {
        cli::output_statistics(&report.statistics, config.is_quiet());
    }

    Ok(())
}
