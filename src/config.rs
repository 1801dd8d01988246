use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_DATA_FILE: &str = "data/chic_lighting_and_design.json";
pub const DEFAULT_LOG_FILE: &str = "chic.log";
pub const DEFAULT_EXPORT_FILE: &str = "finance_schedule.csv";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const DATA_FILE_ENV: &str = "CHIC_DATA_FILE";
pub const LOG_FILE_ENV: &str = "CHIC_LOG_FILE";
pub const LOG_FILTER_ENV: &str = "CHIC_LOG";

/// Command line of the `chic` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "chic", version, about = "Chic Lighting & Design storefront and finance calculator")]
pub struct Cli {
    /// Catalog JSON file to browse.
    #[arg(value_name = "DATA_FILE", env = "CHIC_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Where log output is written.
    #[arg(long, value_name = "PATH", env = "CHIC_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `chic_storefront=trace`.
    #[arg(long, value_name = "FILTER", env = "CHIC_LOG")]
    pub log_filter: Option<String>,

    /// Destination of the amortization CSV export.
    #[arg(long, value_name = "PATH")]
    pub export_file: Option<PathBuf>,
}

/// Runtime settings for the `chic` binary.
///
/// The catalog path comes from the positional argument, then
/// `CHIC_DATA_FILE`, then [`DEFAULT_DATA_FILE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_file: PathBuf,
    pub log_filter: String,
    pub export_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let defaults = Self::default();
        Self {
            data_file: non_empty(cli.data_file).unwrap_or(defaults.data_file),
            log_file: non_empty(cli.log_file).unwrap_or(defaults.log_file),
            log_filter: cli
                .log_filter
                .filter(|f| !f.is_empty())
                .unwrap_or(defaults.log_filter),
            export_file: non_empty(cli.export_file).unwrap_or(defaults.export_file),
        }
    }
}

impl Config {
    /// Parse the process arguments. Prints usage and exits on `--help`,
    /// `--version` or a bad argument.
    pub fn from_env_and_args() -> Self {
        Cli::parse().into()
    }

    /// Parse an explicit argument list, program name first.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Self::from)
    }
}
