use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;

use schema_format::{
    CollectSink, FailFastSink, FormatName, NonTextPolicy, ValidationOptions, Violation,
    validate_known,
};
use schema_format_cli::{CheckReport, check_document, load_document, output};

use crate::logging;

#[derive(Parser)]
#[command(
    name = "schema-format",
    version,
    about = "Check values and documents against JSON Schema string formats"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputMode::Human, global = true)]
    pub output: OutputMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Human,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the supported formats
    Formats,
    /// Check literal values against one format
    Check(CheckArgs),
    /// Check an instance document against the `format` keywords of a schema
    Document(DocumentArgs),
}

#[derive(Args)]
pub struct PolicyArgs {
    /// Stop at the first violation
    #[arg(long)]
    pub fail_fast: bool,

    /// Report non-text values as type mismatches for every format
    #[arg(long)]
    pub strict_types: bool,
}

impl PolicyArgs {
    fn options(&self) -> ValidationOptions {
        let policy = if self.strict_types {
            NonTextPolicy::Strict
        } else {
            NonTextPolicy::Legacy
        };
        ValidationOptions::default()
            .with_record_errors(!self.fail_fast)
            .with_non_text_policy(policy)
    }
}

#[derive(Args)]
pub struct CheckArgs {
    /// Format name (e.g. date-time, ipv4, email)
    pub format: String,

    /// Values to check
    #[arg(required = true)]
    pub values: Vec<String>,

    /// Property name used in messages
    #[arg(long, default_value = "value")]
    pub fragment: String,

    /// Parse each value as JSON instead of taking it as text
    #[arg(long)]
    pub json_values: bool,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

#[derive(Args)]
pub struct DocumentArgs {
    /// Schema file (JSON, or YAML by extension)
    #[arg(long)]
    pub schema: PathBuf,

    /// Instance file (JSON, or YAML by extension)
    #[arg(long)]
    pub instance: PathBuf,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Parse arguments, run the command and map the outcome to an exit code:
/// success when no violation was found, failure otherwise.
///
/// # Errors
///
/// Returns an error for unknown formats, unreadable or unparsable files and
/// output failures.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let report = match &cli.command {
        Command::Formats => {
            output::write_formats(cli.output == OutputMode::Json, &mut std::io::stdout())?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::Check(args) => check_values(args)?,
        Command::Document(args) => {
            let schema = load_document(&args.schema)?;
            let instance = load_document(&args.instance)?;
            check_document(&schema, &instance, args.policy.options())
        }
    };

    let mut stdout = std::io::stdout();
    match cli.output {
        OutputMode::Human => output::write_human(&report, &mut stdout)?,
        OutputMode::Json => output::write_json(&report, &mut stdout)?,
    }
    stdout.flush()?;

    Ok(if report.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn check_values(args: &CheckArgs) -> Result<CheckReport> {
    let format: FormatName = args.format.parse()?;
    let options = args.policy.options();
    let fragment = schema_format::build_fragment(&[args.fragment.as_str()]);

    let mut violations: Vec<Violation> = Vec::new();
    for raw in &args.values {
        let value = if args.json_values {
            serde_json::from_str(raw).with_context(|| format!("Value is not JSON: {raw}"))?
        } else {
            Value::String(raw.clone())
        };

        if options.record_errors {
            let mut sink = CollectSink::new();
            validate_known(options.non_text_policy, format, &value, &fragment, &mut sink);
            violations.extend(sink.into_violations());
        } else {
            let mut sink = FailFastSink::new();
            validate_known(options.non_text_policy, format, &value, &fragment, &mut sink);
            violations.extend(sink.into_first());
        }
    }

    Ok(CheckReport::new(args.values.len(), violations))
}
