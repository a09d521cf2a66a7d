// ABOUTME: Entry point for the next-target-code CLI application.
// ABOUTME: Validates arguments, runs the lookup, and maps the outcome to output and exit code.

mod cli;

use clap::Parser;
use clap::error::ErrorKind;
use cli::Cli;
use next_target_code::api::CloudClient;
use next_target_code::config::Config;
use next_target_code::error::{Error, Result};
use next_target_code::output::Output;
use next_target_code::resolve::resolve_code;
use std::error::Error as _;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let mut output = Output::stdio();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = output.error(&usage_error_line(&e));
            std::process::exit(1);
        }
    };

    // Logs share stderr with error messages; stdout carries only the code.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let result = run(&cli).await;
    let written = match &result {
        Ok(code) => output.code(code),
        Err(e) => {
            if !matches!(e, Error::Validation(_)) {
                trace_error(e);
            }
            output.error(e)
        }
    };

    if result.is_err() || written.is_err() {
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<String> {
    let config = Config::from_params(&cli.params())?;
    tracing::debug!(
        service_target = %config.target,
        lb = %config.lb,
        options = %config.options,
        user = config.credentials.user(),
        mode = ?config.mode,
        "validated parameters"
    );

    let client = CloudClient::new(&config.api_url, &config.credentials)?;
    let resolution = resolve_code(&client, &config).await?;

    tracing::debug!(
        current = %resolution.current_service,
        warnings = resolution.diagnostics.warnings().len(),
        "resolved load balancer"
    );

    Ok(resolution.code)
}

/// First line of a clap error, without clap's own `error: ` prefix.
fn usage_error_line(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

/// Log the error with its full source chain.
fn trace_error(error: &Error) {
    let mut chain = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    tracing::error!(error = ?error, causes = ?chain, "lookup failed");
}
