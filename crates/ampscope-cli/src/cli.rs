use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "AMPScope Developers",
    version,
    about = "AMPScope CLI - Physicochemical profiling and consensus screening of antimicrobial peptide candidates.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Profile, score and filter a batch of peptide sequences.
    Profile(ProfileArgs),
    /// Print the titration curve and isoelectric point of a single sequence.
    Titrate(TitrateArgs),
}

/// Output formats for screened reports.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    Fasta,
}

/// Arguments for the `profile` subcommand.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    // --- Input / Output ---
    /// Sequences to screen, as FASTA or one sequence per line.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// CSV of classifier scores keyed by a `sequence` column.
    #[arg(short, long, value_name = "PATH")]
    pub scores: Option<PathBuf>,

    /// Where to write the accepted reports. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Source label for sequences whose scores row does not name one.
    #[arg(long, value_name = "NAME")]
    pub source: Option<String>,

    /// Also write per-source summary statistics of the accepted reports as JSON.
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Profiler Overrides ---
    /// pH at which the reported net charge is evaluated.
    #[arg(long = "ph", value_name = "FLOAT")]
    pub reference_ph: Option<f64>,

    /// Width of the pH bracket at which the isoelectric point search stops.
    #[arg(long = "tolerance", value_name = "FLOAT")]
    pub pi_tolerance: Option<f64>,

    // --- Filter Overrides ---
    #[arg(long, value_name = "INT")]
    pub min_length: Option<usize>,

    #[arg(long, value_name = "INT")]
    pub max_length: Option<usize>,

    /// Minimum consensus score in [0, 1]. Peptides with no scores only pass at 0.
    #[arg(short, long, value_name = "FLOAT")]
    pub threshold: Option<f64>,

    /// Reject peptides containing any of these residues (e.g. 'CM').
    #[arg(short = 'x', long, value_name = "CODES")]
    pub exclude: Option<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S filter.threshold=0.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `titrate` subcommand.
#[derive(Args, Debug)]
pub struct TitrateArgs {
    /// The peptide sequence in one-letter codes.
    #[arg(required = true)]
    pub sequence: String,

    #[arg(long, default_value_t = 0.0, value_name = "PH")]
    pub from: f64,

    #[arg(long, default_value_t = 14.0, value_name = "PH")]
    pub to: f64,

    #[arg(long, default_value_t = 0.5, value_name = "PH")]
    pub step: f64,

    /// Width of the pH bracket at which the isoelectric point search stops.
    #[arg(long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,
}
