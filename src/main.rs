use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use deepaffects_summary::{
    collect_inputs, process_batch, ArgumentError, DeepAffectsClient, DeepAffectsConfig,
    PollConfig, SummaryModel,
};

/// Exit status for rejected command-line arguments
const USAGE_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "deepaffects-summary")]
#[command(author, version, about = "Summarize call transcripts with the DeepAffects async summary API", long_about = None)]
struct Cli {
    /// Transcript to summarize (.txt or .json), or a folder of transcripts
    #[arg(short = 'i', long = "input_file_path")]
    input_file_path: PathBuf,

    /// Existing directory where the summary output JSON is written
    #[arg(short = 'o', long = "output_folder")]
    output_folder: PathBuf,

    /// Summarization model
    #[arg(short, long, value_enum, default_value_t = SummaryModel::Iamus)]
    model: SummaryModel,

    /// Seconds to wait between status checks
    #[arg(long, default_value = "10")]
    poll_interval_secs: u64,

    /// Give up after this many status checks (default: never)
    #[arg(long)]
    max_polls: Option<u32>,

    /// Give up after this many seconds of polling (default: never)
    #[arg(long)]
    poll_timeout_secs: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn poll_config(&self) -> PollConfig {
        PollConfig {
            interval: Duration::from_secs(self.poll_interval_secs),
            max_attempts: self.max_polls,
            timeout: self.poll_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// What to do once credentials and arguments have been checked
enum Startup {
    Run(Cli, DeepAffectsConfig),
    Exit(u8),
}

/// Check the API key, then parse the arguments
///
/// A missing or placeholder key exits 0 before any argument is looked at.
fn startup<I, T>(args: I, lookup: impl Fn(&str) -> Option<String>) -> Result<Startup>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = match DeepAffectsConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(e) if e.is_missing_credentials() => {
            println!("Please update your valid api key");
            return Ok(Startup::Exit(0));
        }
        Err(e) => return Err(e.into()),
    };

    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Startup::Run(cli, config)),
        Err(e) => {
            let code = u8::try_from(e.exit_code()).unwrap_or(USAGE_EXIT_CODE);
            e.print()?;
            Ok(Startup::Exit(code))
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let (cli, config) = match startup(std::env::args_os(), |name| std::env::var(name).ok())? {
        Startup::Run(cli, config) => (cli, config),
        Startup::Exit(code) => return Ok(ExitCode::from(code)),
    };
    setup_logging(cli.verbose);

    let inputs = match validate_args(&cli.input_file_path, &cli.output_folder) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::from(USAGE_EXIT_CODE));
        }
    };

    info!(
        "Summarizing {} transcript(s) with model {}",
        inputs.len(),
        cli.model
    );

    let client = DeepAffectsClient::new(config);
    let report = process_batch(
        &client,
        &inputs,
        &cli.output_folder,
        cli.model,
        &cli.poll_config(),
    )
    .await;

    info!(
        "Complete: {} written, {} failed",
        report.written, report.failed
    );

    Ok(if report.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn validate_args(input: &Path, output_folder: &Path) -> Result<Vec<PathBuf>, ArgumentError> {
    let inputs = collect_inputs(input)?;
    if !output_folder.is_dir() {
        return Err(ArgumentError::InvalidOutputFolder(output_folder.to_path_buf()));
    }
    Ok(inputs)
}
