//! # serr-runner
//!
//! Command-line front end: builds one structured error from its arguments,
//! logs it through `tracing` and prints the rendered line to stdout.
//!
//! # Usage
//!
//! ```bash
//! serr "upload failed" attempt 3 bucket=media --url https://example.com/health --with-body
//! ```
//!
//! Trailing tokens are plain arguments (integers stay integers). A token of
//! the form `key=value` is passed as a ready-made pair.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serr_core::config::{AppConfig, load_config};
use serr_core::{Arg, ArgValue, ErrorArg, ErrorMaker};
use serr_http::{HttpResponseParser, capture};
use tracing::{info, warn};

/// Structured error renderer.
#[derive(Parser)]
#[command(name = "serr", about = "Render a structured error from the command line")]
struct Cli {
    /// Error message.
    message: String,

    /// Context arguments: alternating keys and values, or `key=value` pairs.
    #[arg(allow_negative_numbers = true)]
    args: Vec<String>,

    /// Configuration file path (JSON).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Delimiter placed between rendered segments.
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Fetch this URL and attach the response as context.
    #[arg(long)]
    url: Option<String>,

    /// Include the response status line (with `--url`).
    #[arg(long)]
    with_status: bool,

    /// Include the response body (with `--url`).
    #[arg(long)]
    with_body: bool,

    /// Log filter: a level (trace, debug, info, warn, error) or directives
    /// such as `info,serr_http=debug`.
    #[arg(short, long)]
    log_level: Option<String>,

    /// Optional log directory for file output.
    #[arg(long)]
    log_dir: Option<String>,

    /// Do not log the constructed error.
    #[arg(long)]
    no_log: bool,
}

/// Convert one command-line token into a maker argument.
fn token_to_arg(token: &str) -> Arg {
    if let Some((key, value)) = token.split_once('=') {
        if !key.is_empty() {
            return Arg::Pair(ErrorArg::new(key, plain_value(value)));
        }
    }
    Arg::Plain(plain_value(token))
}

fn plain_value(token: &str) -> ArgValue {
    match token.parse::<i64>() {
        Ok(n) => ArgValue::Int(n),
        Err(_) => ArgValue::from(token),
    }
}

fn build_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    if let Some(delimiter) = &cli.delimiter {
        config.maker.delimiter = Some(delimiter.clone());
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.log_dir.is_some() {
        config.logging.dir = cli.log_dir.clone();
    }
    config.maker.log_errors = Some(!cli.no_log && config.maker.log_errors.unwrap_or(true));

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    serr_core::logging::init_logging(&config.logging);

    let maker = ErrorMaker::builder().from_config(&config.maker).build();
    info!("serr starting — delimiter={:?}, logging={}", maker.delimiter(), maker.has_sink());

    let mut args: Vec<Arg> = cli.args.iter().map(|t| token_to_arg(t)).collect();

    if let Some(url) = &cli.url {
        let mut parser = HttpResponseParser::new();
        if cli.with_status {
            parser = parser.with_status();
        }
        if cli.with_body {
            parser = parser.with_response_body();
        }

        match reqwest::get(url).await {
            Ok(resp) => {
                let captured = capture(resp).await;
                info!("fetched {url} — status={}", captured.status());
                args.push(Arg::from(parser.parse(&captured)));
            }
            Err(e) => {
                warn!("request to {url} failed: {e}");
                args.push(Arg::from(ErrorArg::new("requestError", e.to_string())));
            }
        }
    }

    let err = maker.make(cli.message.as_str(), args);
    println!("{err}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_become_plain_values() {
        assert_eq!(token_to_arg("age"), Arg::Plain(ArgValue::from("age")));
        assert_eq!(token_to_arg("123"), Arg::Plain(ArgValue::Int(123)));
        assert_eq!(token_to_arg("-4"), Arg::Plain(ArgValue::Int(-4)));
    }

    #[test]
    fn key_value_tokens_become_pairs() {
        assert_eq!(token_to_arg("bucket=media"), Arg::Pair(ErrorArg::new("bucket", "media")));
        assert_eq!(token_to_arg("n=7"), Arg::Pair(ErrorArg::new("n", 7i64)));
        assert_eq!(token_to_arg("=x"), Arg::Plain(ArgValue::from("=x")));
    }

    #[test]
    fn cli_overrides_config() {
        let cli = Cli::parse_from(["serr", "msg", "a", "1", "--delimiter", ";;", "--no-log"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.maker.delimiter.as_deref(), Some(";;"));
        assert_eq!(config.maker.log_errors, Some(false));

        let maker = ErrorMaker::builder().from_config(&config.maker).build();
        let args: Vec<Arg> = cli.args.iter().map(|t| token_to_arg(t)).collect();
        assert_eq!(maker.make(cli.message.as_str(), args).to_string(), "msg ;; a: 1");
    }

    #[test]
    fn negative_numbers_are_arguments() {
        let cli = Cli::try_parse_from(["serr", "msg", "delta", "-4", "--delimiter", "|", "--no-log"]).unwrap();
        assert_eq!(cli.args, vec!["delta", "-4"]);
        assert_eq!(cli.delimiter.as_deref(), Some("|"));

        let args: Vec<Arg> = cli.args.iter().map(|t| token_to_arg(t)).collect();
        let config = build_config(&cli).unwrap();
        let maker = ErrorMaker::builder().from_config(&config.maker).build();
        let err = maker.make(cli.message.as_str(), args);
        assert_eq!(err.to_string(), "msg | delta: -4");
    }

    #[test]
    fn accepts_filter_directives() {
        let cli = Cli::parse_from(["serr", "msg", "--log-level", "info,serr_http=debug"]);
        assert_eq!(build_config(&cli).unwrap().logging.level, "info,serr_http=debug");
    }

    #[test]
    fn rejects_invalid_level() {
        let cli = Cli::parse_from(["serr", "msg", "--log-level", "serr=chatty"]);
        assert!(build_config(&cli).is_err());
    }
}
