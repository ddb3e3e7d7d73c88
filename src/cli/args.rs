//! CLI argument definitions for `currprogress`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use curriculum_progress::config::ConfigOverrides;
use curriculum_progress::core::report::ReportFormat;
use curriculum_progress::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to [`Level`] for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// A `NAME=VALUE` grade edit given on the command line
///
/// The value is kept raw; the engine coerces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeEdit {
    /// Course name
    pub course: String,
    /// Raw grade text
    pub value: String,
}

/// Parse `NAME=VALUE`, splitting on the last `=` so names may contain one
///
/// # Errors
/// Returns an error if there is no `=` or the name is empty
pub fn parse_grade_edit(s: &str) -> Result<GradeEdit, String> {
    let (course, value) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let course = course.trim();
    if course.is_empty() {
        return Err(format!("missing course name in '{s}'"));
    }
    Ok(GradeEdit {
        course: course.to_string(),
        value: value.trim().to_string(),
    })
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show curriculum progress.
    ///
    /// Loads a catalog, applies the grade edits in order (grades first, then
    /// clears), and prints the year/term view with the weighted average and
    /// progress percentage.
    Status {
        /// Catalog file (.toml or .csv); defaults to config `catalog`
        #[arg(value_name = "CATALOG")]
        catalog: Option<PathBuf>,

        /// Record a grade, e.g. `-g "Cálculo I=70"` (repeatable)
        #[arg(short = 'g', long = "grade", value_name = "NAME=VALUE", value_parser = parse_grade_edit)]
        grades: Vec<GradeEdit>,

        /// Clear a recorded grade (repeatable)
        #[arg(long = "clear", value_name = "NAME")]
        clear: Vec<String>,
    },
    /// Write a progress report.
    ///
    /// Applies the same edits as `status`, then renders a Markdown or HTML report.
    Report {
        /// Catalog file (.toml or .csv); defaults to config `catalog`
        #[arg(value_name = "CATALOG")]
        catalog: Option<PathBuf>,

        /// Record a grade, e.g. `-g "Cálculo I=70"` (repeatable)
        #[arg(short = 'g', long = "grade", value_name = "NAME=VALUE", value_parser = parse_grade_edit)]
        grades: Vec<GradeEdit>,

        /// Clear a recorded grade (repeatable)
        #[arg(long = "clear", value_name = "NAME")]
        clear: Vec<String>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "md")]
        format: ReportFormat,

        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "currprogress",
    about = "Curriculum progress tracker",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config default catalog file
    #[arg(long = "catalog-file", value_name = "PATH")]
    pub catalog_file: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            catalog: self
                .catalog_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
