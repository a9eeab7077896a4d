mod cli_arguments;

use std::{process::ExitCode, time::Duration};

use clap::Parser;
use tikhub_client::{
    Client, GenericGet, Param, Parsed, QueryParams, UnexpectedStatusPolicy,
};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli_arguments::CliArguments;

pub(crate) fn build_client(args: &CliArguments) -> Client {
    let policy = if args.strict {
        UnexpectedStatusPolicy::Raise
    } else {
        UnexpectedStatusPolicy::Ignore
    };

    let mut builder = Client::builder(args.base_url.clone(), policy)
        .header("Accept", "application/json")
        .timeout(Duration::from_secs(args.timeout_secs));

    if let Some(token) = &args.token {
        builder = builder.token(token.clone());
    }

    builder.build()
}

pub(crate) fn build_endpoint(args: &CliArguments) -> GenericGet {
    let params = args
        .query
        .iter()
        .map(|(key, value)| (key.clone(), Param::Value(value.clone().into())))
        .collect::<QueryParams>();

    GenericGet::new(args.path.clone(), params)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: CliArguments = CliArguments::parse();

    if args.token.is_none() {
        info!("No token configured, sending an unauthenticated request");
    }

    let client = build_client(&args);
    let endpoint = build_endpoint(&args);

    let response = match client.send_detailed(&endpoint).await {
        Ok(response) => response,
        Err(err) => {
            error!("Request to {} failed: {err}", args.path);
            return ExitCode::FAILURE;
        }
    };

    let printed = match &response.parsed {
        Some(Parsed::Success(model)) => serde_json::to_string_pretty(model),
        Some(Parsed::ValidationError(invalid)) => serde_json::to_string_pretty(invalid),
        None => {
            info!("No payload for status {}", response.status);
            return ExitCode::SUCCESS;
        }
    };

    match printed {
        Ok(json) => println!("{}", json),
        Err(err) => {
            error!("Failed to render response: {err}");
            return ExitCode::FAILURE;
        }
    }

    if matches!(response.parsed, Some(Parsed::ValidationError(_))) {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}
