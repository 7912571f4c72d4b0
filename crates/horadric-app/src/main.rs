mod cli;
mod repl;
mod startup;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use horadric_ai::Session;
use horadric_config::HoradricConfig;
use tokio::io::AsyncBufRead;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

type LogFilterHandle = reload::Handle<EnvFilter, Registry>;

fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into()),
    )
}

/// Install logging from `--log-level`/`RUST_LOG` before the config is read,
/// so loader warnings reach stderr.
fn init_logging(args: &cli::Args) -> LogFilterHandle {
    let directive = args.log_level.as_deref().unwrap_or("horadric=info");
    let (filter, handle) = reload::Layer::new(env_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Switch to `[logging].level` unless the command line already chose one.
fn apply_config_log_level(args: &cli::Args, config: &HoradricConfig, handle: &LogFilterHandle) {
    if args.log_level.is_some() {
        return;
    }
    let directive = format!("horadric={}", config.logging.level.as_directive());
    if let Err(e) = handle.reload(env_filter(&directive)) {
        tracing::warn!("failed to apply log level {directive}: {e}");
    }
}

/// Read the config file. Unreadable or unparseable files fall back to
/// defaults; a file with invalid values is kept as parsed.
fn load_config(path: Option<&Path>) -> HoradricConfig {
    let result = match path {
        Some(path) => horadric_config::load_config_from(path),
        None => horadric_config::load_config(),
    };
    result.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        HoradricConfig::default()
    })
}

async fn run<R, W>(config: &HoradricConfig, input: R, out: &mut W) -> horadric_common::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    repl::print_banner(out)?;

    let mut session = Session::initialize(&startup::session_settings(config))?;
    repl::run(&mut session, input, out).await?;

    let tracker = session.tracker();
    tracing::info!(
        session = %session.id(),
        calls = tracker.call_count(),
        input_tokens = tracker.total().input_tokens,
        output_tokens = tracker.total().output_tokens,
        "session finished"
    );
    Ok(())
}

/// Print how the run ended and return the process exit status.
fn report(result: horadric_common::Result<()>, api_key_env: &str, out: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) if e.is_missing_credential() => {
            tracing::error!("{e}");
            let _ = writeln!(out, "Error: {e}");
            let _ = writeln!(out, "Please set up your {api_key_env} in the .env file.");
            0
        }
        Err(e) => {
            tracing::error!("{e}");
            let _ = writeln!(out, "An unexpected error occurred: {e}");
            1
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Before anything reads the environment.
    startup::load_dotenv();

    let args = cli::parse();
    let log_filter = init_logging(&args);
    tracing::info!("Horadric v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = load_config(args.config.as_deref());
    apply_config_log_level(&args, &config, &log_filter);
    tracing::debug!("effective config: {}", horadric_config::config_to_json(&config));

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let result = run(&config, stdin, &mut stdout).await;
    ExitCode::from(report(result, &config.provider.api_key_env, &mut stdout))
}
