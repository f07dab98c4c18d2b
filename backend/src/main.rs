//! Desk entry-point: boots the state core against real adapters and reports
//! the rehydrated state.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use mockable::{DefaultClock, DefaultEnv};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use complaint_desk::ComplaintDesk;
use complaint_desk::config::{DeskSettings, desk_settings_from_env};
use complaint_desk::domain::ports::{FixtureRecordGateway, RecordGateway};
use complaint_desk::outbound::ConsolePrompt;
use complaint_desk::outbound::persistence::JsonSnapshotStore;
use complaint_desk::outbound::remote::HttpRecordGateway;

/// Command-line overrides for the environment-driven settings.
#[derive(Debug, Parser)]
#[command(name = "complaint-desk", about = "SITS complaint desk state core")]
struct Cli {
    /// Directory holding the snapshot files.
    #[arg(long)]
    storage_dir: Option<PathBuf>,
    /// Base URL of the remote record collaborator.
    #[arg(long)]
    remote_url: Option<Url>,
}

/// Application bootstrap.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let mut settings: DeskSettings =
        desk_settings_from_env(&DefaultEnv::new()).wrap_err("desk configuration invalid")?;
    if let Some(storage_dir) = cli.storage_dir {
        settings.storage_dir = storage_dir;
    }
    if let Some(remote_url) = cli.remote_url {
        settings.remote_url = Some(remote_url);
    }

    let store = JsonSnapshotStore::open(&settings.storage_dir)
        .wrap_err("snapshot store unavailable")?;

    let gateway: Arc<dyn RecordGateway> = match settings.remote_url.as_ref() {
        Some(url) => Arc::new(
            HttpRecordGateway::new(url, settings.remote_timeout)
                .wrap_err("record gateway unavailable")?,
        ),
        None => {
            warn!("no remote endpoint configured; records stay local");
            Arc::new(FixtureRecordGateway)
        }
    };

    let desk = ComplaintDesk::boot(
        Arc::new(store),
        gateway,
        Arc::new(ConsolePrompt),
        Arc::new(DefaultClock),
    )
    .await;

    let tally = desk.tally();
    info!(
        roster = desk.session().roster().len(),
        authenticated = desk.session().current().is_some(),
        complaints = tally.total(),
        open = tally.open(),
        unconfirmed = tally.unconfirmed,
        screen = %desk.view().screen(),
        "complaint desk ready"
    );
    Ok(())
}
