use activity_board::config::{BoardConfig, DEFAULT_BASE_URL, DEFAULT_NOTIFICATION_TTL};
use clap::Parser;
use std::time::Duration;

pub(crate) enum RunOutcome {
    Start(BoardConfig),
    Exit(i32),
}

pub(crate) fn run() -> RunOutcome {
    let cli = Cli::parse();
    match resolve_config(&cli) {
        Ok(config) => RunOutcome::Start(config),
        Err(err) => {
            eprintln!("error: {err}");
            RunOutcome::Exit(2)
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "activity-board",
    version,
    about = "Terminal client for the school activities API"
)]
struct Cli {
    #[arg(long, env = "ACTIVITY_BOARD_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[arg(long, env = "ACTIVITY_BOARD_NOTIFICATION_TTL")]
    notification_ttl: Option<String>,
    #[arg(long, env = "ACTIVITY_BOARD_REQUEST_TIMEOUT")]
    request_timeout: Option<String>,
}

fn resolve_config(cli: &Cli) -> Result<BoardConfig, String> {
    let base_url = cli.base_url.trim();
    if base_url.is_empty() {
        return Err("base url cannot be empty".to_string());
    }

    let notification_ttl = match cli.notification_ttl.as_deref() {
        Some(raw) => parse_duration("notification ttl", raw)?,
        None => DEFAULT_NOTIFICATION_TTL,
    };
    let request_timeout = cli
        .request_timeout
        .as_deref()
        .map(|raw| parse_duration("request timeout", raw))
        .transpose()?;

    Ok(BoardConfig {
        base_url: base_url.to_string(),
        notification_ttl,
        request_timeout,
    })
}

fn parse_duration(what: &str, raw: &str) -> Result<Duration, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(format!("{what} cannot be empty"));
    }

    let split = value
        .find(|ch: char| ch.is_ascii_alphabetic())
        .unwrap_or(value.len());
    let (amount, unit) = value.split_at(split);
    let unit = if unit.is_empty() { "s" } else { unit };

    let amount: u64 = amount
        .parse()
        .map_err(|_| format!("invalid {what} '{value}'; expected <number>[ms|s|m]"))?;
    if amount == 0 {
        return Err(format!("{what} must be greater than 0"));
    }

    match unit.to_ascii_lowercase().as_str() {
        "ms" => Ok(Duration::from_millis(amount)),
        "s" => Ok(Duration::from_secs(amount)),
        "m" => Ok(Duration::from_secs(amount.saturating_mul(60))),
        _ => Err(format!(
            "invalid {what} '{value}'; expected <number>[ms|s|m]"
        )),
    }
}
