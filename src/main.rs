//! gh-unfurl CLI entrypoint: prints a link summary for a GitHub URL as JSON.

use std::io::{self, Write};
use std::process::ExitCode;

use gh_unfurl::{
    GitHubSummarizer, OctocrabGateway, StaticFallbackSummarizer, Summary, SummaryError,
    UnfurlConfig,
};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gh_unfurl=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

async fn run() -> Result<(), SummaryError> {
    let config = load_config()?;

    let url = config.require_url()?;
    let token = config.resolve_token();
    let web_base = config.web_base()?;
    let api_base = config.api_base()?;

    let gateway = OctocrabGateway::for_api_base(token.as_ref(), &api_base).map_err(|error| {
        SummaryError::Configuration {
            message: error.to_string(),
        }
    })?;
    let summarizer = GitHubSummarizer::new(gateway, StaticFallbackSummarizer, web_base);
    let summary = summarizer.summarize(url).await?;

    write_summary(&summary, config.pretty)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`SummaryError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<UnfurlConfig, SummaryError> {
    UnfurlConfig::load().map_err(|error| SummaryError::Configuration {
        message: error.to_string(),
    })
}

fn write_summary(summary: &Summary, pretty: bool) -> Result<(), SummaryError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(summary)
    } else {
        serde_json::to_string(summary)
    }
    .map_err(|error| SummaryError::Io {
        message: error.to_string(),
    })?;

    writeln!(io::stdout().lock(), "{rendered}").map_err(|error| SummaryError::Io {
        message: error.to_string(),
    })
}
