//! CLI interface for Mooring.
//!
//! Designed for scripts and humans alike: arguments in, JSON out on stdout,
//! short human-readable summaries on stderr.
//!
//! - `mooring status`: fetch (or load) and decode one status snapshot.
//! - `mooring wait <condition>`: poll until the model settles.
//!
//! Flags override the config file, which overrides built-in defaults.

mod format;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use jiff::Timestamp;
use serde::Serialize;

use mooring::config::Config;
use mooring::decode::{self, Dialect};
use mooring::juju::Juju;
use mooring::model::Status;
use mooring::predicates::{self, Apps};
use mooring::wait::{WaitError, WaitOptions, Waiter};

use format::{format_app_summary, format_duration};

/// Mooring: watch a Juju model settle.
#[derive(Debug, Parser)]
#[command(name = "mooring", version, after_long_help = EXAMPLES_HELP)]
pub struct Cli {
    /// Model to operate on. Defaults to the configured model, then juju's current model.
    #[arg(long, short, global = true)]
    model: Option<String>,

    /// Path to the juju executable.
    #[arg(long, global = true)]
    juju: Option<String>,

    /// Decode status in this dialect instead of detecting it from the document.
    #[arg(long, value_enum, global = true)]
    dialect: Option<DialectArg>,

    /// Log more: `-v` for info, `-vv` for debug. `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

const EXAMPLES_HELP: &str = r#"Examples:
  mooring status > status.json
  mooring status --from status.json
  mooring -m dev wait all-active --app mysql --app wordpress
  mooring wait all-agents-idle --timeout 600 --no-error-check"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one decoded status snapshot as JSON.
    ///
    /// A one-line summary per application is printed to stderr.
    Status {
        /// Decode a saved `juju status --format json` document instead of calling juju.
        #[arg(long)]
        from: Option<PathBuf>,

        /// Write the snapshot JSON to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Poll status until a condition holds for several checks in a row.
    ///
    /// Fails early if any selected application or unit reports "error",
    /// unless `--no-error-check` is given. Prints a JSON report either way;
    /// the exit code is non-zero unless the condition was met.
    Wait {
        condition: ConditionArg,

        /// Application to check. Can be specified multiple times.
        /// Defaults to the configured `wait.apps`, or every application.
        #[arg(long = "app")]
        apps: Vec<String>,

        /// Keep waiting even if something reports "error".
        #[arg(long)]
        no_error_check: bool,

        /// Seconds between status checks.
        #[arg(long)]
        delay: Option<f64>,

        /// Seconds to wait before giving up.
        #[arg(long)]
        timeout: Option<f64>,

        /// Consecutive passing checks required.
        #[arg(long)]
        successes: Option<u32>,
    },

    /// Print the version of the juju client.
    JujuVersion,
}

/// CLI-facing dialect, mapped to the domain `Dialect`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DialectArg {
    /// Juju 2.9.
    Juju2,
    /// Juju 3.x.
    Juju3,
}

impl DialectArg {
    fn to_domain(self) -> Dialect {
        match self {
            Self::Juju2 => Dialect::Juju2,
            Self::Juju3 => Dialect::Juju3,
        }
    }
}

/// CLI-facing wait condition, mapped to a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionArg {
    AllActive,
    AllBlocked,
    AllError,
    AllMaintenance,
    AllWaiting,
    AnyActive,
    AnyBlocked,
    AnyError,
    AnyMaintenance,
    AnyWaiting,
    /// No hooks running on any selected unit.
    AllAgentsIdle,
}

impl ConditionArg {
    fn to_domain(self) -> fn(&Status, &Apps) -> bool {
        match self {
            Self::AllActive => predicates::all_active,
            Self::AllBlocked => predicates::all_blocked,
            Self::AllError => predicates::all_error,
            Self::AllMaintenance => predicates::all_maintenance,
            Self::AllWaiting => predicates::all_waiting,
            Self::AnyActive => predicates::any_active,
            Self::AnyBlocked => predicates::any_blocked,
            Self::AnyError => predicates::any_error,
            Self::AnyMaintenance => predicates::any_maintenance,
            Self::AnyWaiting => predicates::any_waiting,
            Self::AllAgentsIdle => predicates::all_agents_idle,
        }
    }
}

/// How a wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Outcome {
    Succeeded,
    Errored,
    TimedOut,
}

/// JSON report printed by `mooring wait`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct WaitReport<'a> {
    condition: ConditionArg,
    apps: &'a Apps,
    outcome: Outcome,
    elapsed_secs: f64,
    finished_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a Status>,
}

/// Run the CLI, returning an error message on failure.
pub fn run(cli: Cli, config: &Config) -> Result<(), String> {
    let juju = juju_for(&cli, config);

    match cli.command {
        Command::Status { from, out } => {
            let dialect = cli.dialect.map(DialectArg::to_domain).or(config.dialect);
            cmd_status(&juju, dialect, from, out)
        }
        Command::Wait {
            condition,
            apps,
            no_error_check,
            delay,
            timeout,
            successes,
        } => {
            let apps = selected_apps(apps, config);
            let options = wait_options(config, delay, timeout, successes)?;
            cmd_wait(&juju, condition, &apps, !no_error_check, options)
        }
        Command::JujuVersion => {
            let version = juju.version().map_err(|e| e.to_string())?;
            println!("{version}");
            Ok(())
        }
    }
}

fn juju_for(cli: &Cli, config: &Config) -> Juju {
    let mut juju = Juju::new();
    if let Some(binary) = cli.juju.as_ref().or(config.juju_binary.as_ref()) {
        juju = juju.binary(binary.as_str());
    }
    if let Some(model) = cli.model.as_ref().or(config.model.as_ref()) {
        juju = juju.model(model.as_str());
    }
    if let Some(dialect) = cli.dialect.map(DialectArg::to_domain).or(config.dialect) {
        juju = juju.dialect(dialect);
    }
    juju
}

/// `--app` flags win; without any, the configured `wait.apps` apply.
fn selected_apps(apps: Vec<String>, config: &Config) -> Apps {
    if apps.is_empty() {
        config.wait.apps.clone()
    } else {
        Apps::Only(apps)
    }
}

/// Merge `--delay`/`--timeout`/`--successes` over the configured timings.
fn wait_options(
    config: &Config,
    delay: Option<f64>,
    timeout: Option<f64>,
    successes: Option<u32>,
) -> Result<WaitOptions, String> {
    let mut options = config.wait_options().map_err(|e| e.to_string())?;
    if let Some(delay) = delay {
        options.delay = seconds("--delay", delay)?;
    }
    if let Some(timeout) = timeout {
        options.timeout = seconds("--timeout", timeout)?;
    }
    if let Some(successes) = successes {
        options.successes = successes;
    }
    Ok(options)
}

fn seconds(flag: &str, secs: f64) -> Result<Duration, String> {
    Duration::try_from_secs_f64(secs)
        .map_err(|_| format!("{flag} must be a non-negative number of seconds, got {secs}"))
}

fn cmd_status(
    juju: &Juju,
    dialect: Option<Dialect>,
    from: Option<PathBuf>,
    out: Option<PathBuf>,
) -> Result<(), String> {
    let status = match from {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            decode::decode_str(&text, dialect)
                .map_err(|e| format!("failed to decode {}: {e}", path.display()))?
        }
        None => juju.status().map_err(|e| e.to_string())?,
    };

    for (name, app) in &status.apps {
        eprintln!("{}", format_app_summary(name, app, status.units(name).count()));
    }

    let json = serde_json::to_string_pretty(&status)
        .map_err(|e| format!("failed to serialize status: {e}"))?;

    match out {
        Some(path) => {
            fs::write(&path, &json)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            eprintln!("Status of {} → {}", status.model.name, path.display());
        }
        None => {
            println!("{json}");
        }
    }

    Ok(())
}

fn cmd_wait(
    juju: &Juju,
    condition: ConditionArg,
    apps: &Apps,
    error_check: bool,
    options: WaitOptions,
) -> Result<(), String> {
    let ready = condition.to_domain();

    let mut waiter = Waiter::new(juju).options(options).on_change(|status| {
        for (name, app) in &status.apps {
            eprintln!("{}", format_app_summary(name, app, status.units(name).count()));
        }
    });
    if error_check {
        waiter = waiter.error(|status| predicates::any_error(status, apps));
    }

    let started = std::time::Instant::now();
    let result = waiter.until(|status| ready(status, apps));
    let elapsed = started.elapsed();

    let (outcome, status) = match &result {
        Ok(status) => (Outcome::Succeeded, Some(status)),
        Err(WaitError::Errored { status }) => (Outcome::Errored, Some(&**status)),
        Err(WaitError::TimedOut { status, .. }) => (Outcome::TimedOut, status.as_deref()),
        Err(e @ WaitError::Fetch(_)) => return Err(e.to_string()),
    };

    let report = WaitReport {
        condition,
        apps,
        outcome,
        elapsed_secs: elapsed.as_secs_f64(),
        finished_at: Timestamp::now(),
        status,
    };
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| format!("failed to serialize wait report: {e}"))?;
    println!("{json}");

    match result {
        Ok(_) => {
            eprintln!("Condition met after {}", format_duration(elapsed));
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}
