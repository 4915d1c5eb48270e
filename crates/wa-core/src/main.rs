//! Wind Analysis Core - command-line harness for the analysis engine.
//!
//! Reads a JSON array of observations, runs the engine, and prints the
//! report. Fetching, scraping, and rich rendering live elsewhere; this
//! binary only feeds the engine and prints its output.

use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use wa_common::{parse_samples, OutputFormat, Sample, CONDITION_CATALOG, SCHEMA_VERSION};
use wa_config::{load_policy, ConfigError, ConfigSource, LoadedPolicy, OrderingPolicy, ValidationError};
use wa_core::exit_codes::ExitCode;
use wa_core::logging::{
    event_names, generate_run_id, init_logging, LogConfig, LogFormat, Stage,
};
use wa_core::schema::{
    available_schemas, format_schema, generate_all_schemas, generate_schema, SchemaFormat,
};
use wa_core::{ReportAssembler, SystemClock};

/// Wind Analysis Core - statistics, anomalies, and trends for wind observations
#[derive(Parser)]
#[command(name = "wa-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Log format on stderr (human or jsonl)
    #[arg(long, global = true, env = "WA_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a window of observations and print the report
    Analyze(AnalyzeArgs),
    /// Print JSON schemas for report types
    Schema(SchemaArgs),
    /// Print the condition catalog
    Conditions,
    /// Inspect the analysis policy
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Observation file (JSON array); `-` reads stdin
    #[arg(long, short = 'i', default_value = "-")]
    input: PathBuf,

    /// Policy file (overrides WA_POLICY and the config directory)
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Fail when observations are not in ascending time order
    #[arg(long)]
    strict_order: bool,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    /// Type name to print
    type_name: Option<String>,

    /// List available schema types
    #[arg(long, conflicts_with_all = ["all", "type_name"])]
    list: bool,

    /// Print every schema as one object keyed by type name
    #[arg(long, conflicts_with = "type_name")]
    all: bool,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show the effective policy and where it came from
    Show {
        /// Policy file (overrides WA_POLICY and the config directory)
        #[arg(long)]
        policy: Option<PathBuf>,
    },
    /// Validate a policy file
    Validate {
        /// Policy file to validate
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_env(
        LogConfig::level_from_flags(cli.global.verbose, cli.global.quiet),
        cli.global.log_format,
    );
    init_logging(&log_config);

    let run_id = generate_run_id();
    let span = tracing::info_span!("run", run_id = %run_id);
    let _guard = span.enter();

    info!(
        event = event_names::RUN_STARTED,
        stage = %Stage::Init,
        version = env!("CARGO_PKG_VERSION"),
        "wa-core started"
    );

    let exit_code = match &cli.command {
        Commands::Analyze(args) => run_analyze(&cli.global, args),
        Commands::Schema(args) => run_schema(args),
        Commands::Conditions => run_conditions(&cli.global),
        Commands::Config(args) => run_config(&cli.global, args),
    };

    info!(
        event = event_names::RUN_FINISHED,
        stage = %Stage::Finish,
        exit_code = %exit_code,
        "wa-core finished"
    );
    drop(_guard);

    std::process::exit(exit_code.as_i32());
}

// ============================================================================
// Command implementations
// ============================================================================

fn run_analyze(global: &GlobalOpts, args: &AnalyzeArgs) -> ExitCode {
    let loaded = match load_effective_policy(args.policy.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => return output_config_error(global, &err),
    };

    let mut policy = loaded.policy;
    if args.strict_order {
        policy = policy.with_ordering(OrderingPolicy::Strict);
    }

    let samples = match read_samples(&args.input) {
        Ok(samples) => samples,
        Err(err) => return output_error(global, &err),
    };
    info!(
        event = event_names::INPUT_LOADED,
        stage = %Stage::Load,
        source = %args.input.display(),
        samples = samples.len(),
        "observations loaded"
    );

    let report = ReportAssembler::with_clock(policy, SystemClock).assemble(&samples);
    let exit_code = if report.is_success() {
        ExitCode::Clean
    } else {
        ExitCode::AnalysisFailed
    };

    match emit(global.format, &report, || report.summary_line()) {
        Ok(()) => exit_code,
        Err(code) => code,
    }
}

fn run_schema(args: &SchemaArgs) -> ExitCode {
    let format = if args.compact {
        SchemaFormat::JsonCompact
    } else {
        SchemaFormat::Json
    };

    if args.list {
        for (name, desc) in available_schemas() {
            println!("{:<24} {}", name, desc);
        }
        return ExitCode::Clean;
    }

    let value = if args.all {
        match serde_json::to_value(generate_all_schemas()) {
            Ok(v) => v,
            Err(err) => return internal_error(&err.to_string()),
        }
    } else {
        let Some(name) = args.type_name.as_deref() else {
            eprintln!("wa-core schema: pass a type name, --list, or --all");
            return ExitCode::ArgsError;
        };
        match generate_schema(name) {
            Some(v) => v,
            None => {
                eprintln!(
                    "wa-core schema: unknown type '{}' (see 'wa-core schema --list')",
                    name
                );
                return ExitCode::ArgsError;
            }
        }
    };

    match format_schema(&value, format) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::Clean
        }
        Err(err) => internal_error(&err.to_string()),
    }
}

fn run_conditions(global: &GlobalOpts) -> ExitCode {
    let payload = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "conditions": &CONDITION_CATALOG,
    });
    let summary = || {
        CONDITION_CATALOG
            .iter()
            .map(|info| format!("{:>2}  {:<14} {}", info.code, info.condition, info.description))
            .collect::<Vec<_>>()
            .join("\n")
    };
    match emit(global.format, &payload, summary) {
        Ok(()) => ExitCode::Clean,
        Err(code) => code,
    }
}

fn run_config(global: &GlobalOpts, args: &ConfigArgs) -> ExitCode {
    match &args.command {
        ConfigCommands::Show { policy } => run_config_show(global, policy.as_deref()),
        ConfigCommands::Validate { path } => run_config_validate(global, path),
    }
}

fn run_config_show(global: &GlobalOpts, cli_path: Option<&Path>) -> ExitCode {
    let loaded = match load_effective_policy(cli_path) {
        Ok(loaded) => loaded,
        Err(err) => return output_config_error(global, &err),
    };

    let payload = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "source": {
            "kind": source_name(loaded.source),
            "path": loaded.path.as_ref().map(|p| p.display().to_string()),
            "using_defaults": loaded.path.is_none(),
        },
        "policy": &loaded.policy,
    });
    let summary = || {
        let p = &loaded.policy;
        format!(
            "policy from {} (anomaly_sigma={}, hourly_sigma={}, unstable_volatility_pct={}, ordering={})",
            source_name(loaded.source),
            p.anomaly_sigma,
            p.hourly_sigma,
            p.unstable_volatility_pct,
            p.ordering
        )
    };
    match emit(global.format, &payload, summary) {
        Ok(()) => ExitCode::Clean,
        Err(code) => code,
    }
}

fn run_config_validate(global: &GlobalOpts, path: &Path) -> ExitCode {
    let loaded = match load_policy(Some(path)) {
        Ok(loaded) => loaded,
        Err(err) => return output_config_error(global, &err),
    };
    let payload = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "status": "valid",
        "path": path.display().to_string(),
        "policy": &loaded.policy,
    });
    match emit(global.format, &payload, || format!("{}: valid", path.display())) {
        Ok(()) => ExitCode::Clean,
        Err(code) => code,
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn load_effective_policy(cli_path: Option<&Path>) -> Result<LoadedPolicy, ConfigError> {
    let loaded = load_policy(cli_path)?;
    match &loaded.path {
        Some(path) => info!(
            event = event_names::CONFIG_LOADED,
            stage = %Stage::Init,
            source = source_name(loaded.source),
            path = %path.display(),
            "policy loaded"
        ),
        None => info!(
            event = event_names::CONFIG_DEFAULT_USED,
            stage = %Stage::Init,
            "using builtin policy defaults"
        ),
    }
    Ok(loaded)
}

fn read_samples(input: &Path) -> wa_common::Result<Vec<Sample>> {
    let text = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };
    parse_samples(&text)
}

fn source_name(source: ConfigSource) -> &'static str {
    match source {
        ConfigSource::CliArgument => "cli",
        ConfigSource::Environment => "env",
        ConfigSource::XdgConfig => "xdg",
        ConfigSource::BuiltinDefault => "default",
    }
}

/// Print a payload to stdout in the requested format.
fn emit<T, F>(format: OutputFormat, payload: &T, summary: F) -> Result<(), ExitCode>
where
    T: serde::Serialize,
    F: FnOnce() -> String,
{
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(payload),
        OutputFormat::Jsonl => serde_json::to_string(payload),
        OutputFormat::Summary => Ok(summary()),
    };
    match text {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(err) => Err(internal_error(&err.to_string())),
    }
}

fn output_error(global: &GlobalOpts, err: &wa_common::Error) -> ExitCode {
    let exit_code = ExitCode::for_error(err);
    error!(
        event = event_names::INPUT_ERROR,
        stage = %Stage::Load,
        code = err.code(),
        error = %err,
        "cannot read observations"
    );
    let response = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "status": "error",
        "error": {
            "code": err.code(),
            "category": err.category(),
            "message": err.to_string(),
            "remediation": err.remediation(),
        }
    });
    print_error(global, &response, &err.to_string());
    exit_code
}

fn output_config_error(global: &GlobalOpts, err: &ConfigError) -> ExitCode {
    let exit_code = match err {
        ConfigError::Invalid {
            source: ValidationError::IoError(_),
            ..
        } => ExitCode::IoError,
        _ => ExitCode::ConfigError,
    };
    error!(
        event = event_names::CONFIG_ERROR,
        stage = %Stage::Init,
        error = %err,
        "policy could not be loaded"
    );
    let common = wa_common::Error::InvalidPolicy(err.to_string());
    let response = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "status": "error",
        "error": {
            "code": common.code(),
            "category": common.category(),
            "message": err.to_string(),
            "remediation": common.remediation(),
        }
    });
    print_error(global, &response, &err.to_string());
    exit_code
}

fn print_error(global: &GlobalOpts, response: &serde_json::Value, message: &str) {
    match global.format {
        OutputFormat::Json => match serde_json::to_string_pretty(response) {
            Ok(text) => eprintln!("{}", text),
            Err(_) => eprintln!("error: {}", message),
        },
        OutputFormat::Jsonl => eprintln!("{}", response),
        OutputFormat::Summary => eprintln!("error: {}", message),
    }
}

fn internal_error(message: &str) -> ExitCode {
    error!(
        event = event_names::INTERNAL_ERROR,
        error = message,
        "internal error"
    );
    eprintln!("wa-core: internal error: {}", message);
    ExitCode::InternalError
}
