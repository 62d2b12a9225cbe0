//! Tracing subscriber setup.
//!
//! `RUST_LOG` selects what is logged (default: `notes=info,notesapp=info,tower_http=info`).
//! `log_format` in the config picks plain text or JSON lines.

use anyhow::{anyhow, Result};
use notesapp::config::NotesConfig;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

const DEFAULT_FILTER: &str = "notes=info,notesapp=info,tower_http=info";

type BoxedSubscriber = Box<dyn Subscriber + Send + Sync>;

fn subscriber<W>(config: &NotesConfig, writer: W) -> BoxedSubscriber
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(env_filter);

    if config.json_logs() {
        Box::new(registry.with(tracing_subscriber::fmt::layer().json().with_writer(writer)))
    } else {
        Box::new(registry.with(tracing_subscriber::fmt::layer().with_writer(writer)))
    }
}

pub fn init(config: &NotesConfig) -> Result<()> {
    tracing::subscriber::set_global_default(subscriber(config, std::io::stdout))
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))?;

    tracing::debug!(format = %config.log_format, "logging initialised");
    Ok(())
}
