//! Chatbot client - terminal front end for a remote query service
//!
//! Collects user input, forwards it to the query service and renders the
//! exchange as a running transcript.

mod config;
mod query;
mod repl;
mod runtime;
mod session;
mod state_machine;

use config::{ClientConfig, LogFormat};
use query::{HttpQueryClient, LoggingClient};
use runtime::ChatRuntime;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "chatbot_client=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so the transcript on stdout stays readable
    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(LogFormat::from_env());

    let config = ClientConfig::from_env()?;
    let client = HttpQueryClient::new(&config)?;
    tracing::info!(
        endpoint = %config.endpoint()?,
        timeout_secs = config.timeout.as_secs(),
        "Query service configured"
    );

    let runtime = Arc::new(ChatRuntime::new(LoggingClient::new(Arc::new(client))));
    repl::run(runtime).await?;

    Ok(())
}
