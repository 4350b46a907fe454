//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::config::{ExportConfig, ValuePolicy, DEFAULT_OUTPUT_DIR};
use crate::conversion::stats::ExportStatistics;
use crate::error::{ExportError, ExportErrorKind, ExportResult};
use crate::parser::TableKind;

pub mod path_mapping;

/// Main CLI arguments
///
/// With no arguments the tool reads `output/*.parquet` and writes to the
/// backend's `graphrag_export` directory.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "graphexport")]
#[command(about = "Export GraphRAG Parquet tables to communities.json and graph.json")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Directory holding communities/entities/relationships.parquet (default: output)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Communities table (overrides --input-dir)
    #[arg(long)]
    pub communities: Option<PathBuf>,

    /// Entities table (overrides --input-dir)
    #[arg(long)]
    pub entities: Option<PathBuf>,

    /// Relationships table (overrides --input-dir)
    #[arg(long)]
    pub relationships: Option<PathBuf>,

    /// Output directory (default: ../../memeED-backend/graphrag_export)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Comma-separated columns kept from the communities table
    #[arg(long, value_delimiter = ',')]
    pub community_fields: Option<Vec<String>>,

    /// Comma-separated columns kept from the entities table
    #[arg(long, value_delimiter = ',')]
    pub entity_fields: Option<Vec<String>>,

    /// Comma-separated columns kept from the relationships table
    #[arg(long, value_delimiter = ',')]
    pub relationship_fields: Option<Vec<String>>,

    /// Handling of cells with no JSON form (default: reject)
    #[arg(long, value_enum)]
    pub on_unsupported: Option<UnsupportedValues>,

    /// Do not lock the output directory while writing
    #[arg(long)]
    pub no_lock: bool,

    /// Output export statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// Unsupported value handling for CLI
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum UnsupportedValues {
    #[value(name = "reject")]
    Reject,
    #[value(name = "stringify", alias = "string")]
    Stringify,
    #[value(name = "null")]
    Null,
}

impl From<UnsupportedValues> for ValuePolicy {
    fn from(value: UnsupportedValues) -> Self {
        match value {
            UnsupportedValues::Reject => ValuePolicy::Reject,
            UnsupportedValues::Stringify => ValuePolicy::Stringify,
            UnsupportedValues::Null => ValuePolicy::Null,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub export_config: ExportConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ExportResult<Self> {
        let export_config = Self::create_export_config(&args)?;

        Ok(Self {
            args,
            export_config,
        })
    }

    /// Create export configuration from CLI arguments
    fn create_export_config(args: &Args) -> ExportResult<ExportConfig> {
        let input_paths = path_mapping::resolve_input_paths(
            args.input_dir.as_deref(),
            args.communities.as_ref(),
            args.entities.as_ref(),
            args.relationships.as_ref(),
        );

        let mut config = ExportConfig::default()
            .with_input_paths(input_paths)
            .with_output_dir(
                args.output_dir
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            )
            .with_value_policy(args.on_unsupported.map(Into::into).unwrap_or_default())
            .with_output_lock(!args.no_lock);

        let overrides = [
            (TableKind::Communities, &args.community_fields),
            (TableKind::Entities, &args.entity_fields),
            (TableKind::Relationships, &args.relationship_fields),
        ];
        for (table, fields) in overrides {
            if let Some(fields) = fields {
                let fields: Vec<&str> = fields.iter().map(|f| f.trim()).collect();
                config = config.with_fields(table, &fields);
            }
        }

        // Validate configuration
        config
            .validate()
            .map_err(|e| ExportError::export(ExportErrorKind::configuration(e)))?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Default tracing filter when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        if self.args.verbose {
            "graphexport=debug"
        } else if self.args.quiet {
            "graphexport=warn"
        } else {
            "graphexport=info"
        }
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        format!("'{}'", self.export_config.output_dir.display())
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a spinner for the export stages, hidden when it would only add noise
    pub fn create_spinner(quiet: bool) -> indicatif::ProgressBar {
        if quiet || !atty::is(atty::Stream::Stderr) {
            return indicatif::ProgressBar::hidden();
        }

        let pb = indicatif::ProgressBar::new_spinner();
        pb.set_style(
            indicatif::ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    fn paint(symbol: &str, color: console::Color) -> String {
        if Self::should_use_color() {
            console::style(symbol).fg(color).bold().to_string()
        } else {
            symbol.to_string()
        }
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", Self::paint("✓", console::Color::Green), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", Self::paint("✗", console::Color::Red), message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", Self::paint("⚠", console::Color::Yellow), message);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        // Check if stdout is a terminal and supports color
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }
}

/// Print the statistics of an export run
pub fn output_statistics(stats: &ExportStatistics, quiet: bool) {
    if quiet {
        return;
    }

    println!("\nExport Statistics:");
    for table in &stats.tables {
        println!(
            "{:<14} {} records, {} columns kept, {} dropped",
            format!("{}:", table.table),
            table.rows,
            table.kept_columns.len(),
            table.dropped_columns.len()
        );
    }
    println!(
        "communities.json: {}",
        CliUtils::format_file_size(stats.communities_bytes)
    );
    println!("graph.json: {}", CliUtils::format_file_size(stats.graph_bytes));
    println!(
        "Processing time: {}",
        CliUtils::format_duration(Duration::from_millis(stats.processing_time_ms))
    );
}

/// Warn about allow-listed columns that none of the inputs carried
pub fn report_missing_columns(stats: &ExportStatistics, quiet: bool) {
    for table in stats.tables.iter().filter(|t| !t.missing_columns.is_empty()) {
        CliUtils::show_warning(
            &format!(
                "{} table has no column(s): {}",
                table.table,
                table.missing_columns.join(", ")
            ),
            quiet,
        );
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ExportError) {
    let message = error.user_message();
    CliUtils::show_error(&message);

    // Provide helpful suggestions
    match error.kind() {
        Some(ExportErrorKind::InputMissing { .. }) => {
            eprintln!("\nTip: Run the indexing pipeline first, or point --input-dir at its output");
        }
        Some(ExportErrorKind::OutputLocked { path }) => {
            eprintln!(
                "\nTip: Wait for the export holding {} to finish, or use --no-lock",
                path.display()
            );
        }
        Some(ExportErrorKind::UnsupportedValue { .. }) => {
            eprintln!("\nTip: Use --on-unsupported stringify or --on-unsupported null");
        }
        _ => {}
    }

    // Show usage hint
    eprintln!("\nTry 'graphexport --help' for usage information.");
}
