mod cn2030;
mod config;
mod dingtalk;
mod hospitals;
mod inspector;
mod notify;
mod refresher;
mod scenario;
mod types;

#[cfg(test)]
mod testing;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cn2030::cn2030_client::Cn2030Client;
use crate::config::watcher_config::WatcherConfig;
use crate::hospitals::{hospital_source::SharedHospitalSource, snapshot_slot::SnapshotSlot};
use crate::inspector::inspector::Inspector;
use crate::refresher::Refresher;
use crate::scenario::notifiers::NotifierKind;
use crate::scenario::scenario::Scenario;

#[derive(Debug, Clone, Parser)]
struct Args {
    #[arg(long, default_value = "watcher.yml")]
    pub config: PathBuf,

    #[arg(long, value_enum, default_value = "dingtalk")]
    pub notifier: NotifierKind,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("vaccine_watcher=debug".parse().unwrap())
                .add_directive("reqwest=info".parse().unwrap()),
        )
        .with_target(false)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();
    let config = WatcherConfig::load(&args.config)?;

    info!(
        marker = %config.watch.marker,
        city_code = %config.upstream.city_code,
        "starting vaccine watcher"
    );

    let source: SharedHospitalSource = Arc::new(Cn2030Client::new(&config.upstream)?);
    let notifier = Scenario::notifier(args.notifier, &config.webhook)?;
    let slot = SnapshotSlot::new();

    let mut refresher = Refresher::new(
        source.clone(),
        slot.clone(),
        config.watch.refresh_interval(),
    )
    .spawn();

    let inspector = Inspector::new(source, notifier, slot, &config.watch);

    tokio::select! {
        outcome = &mut refresher => {
            let result = match outcome {
                Ok(Ok(())) => Err(anyhow!("refresher stopped unexpectedly")),
                Ok(Err(error)) => Err(error),
                Err(join_error) => Err(join_error).context("refresher task panicked"),
            };

            if let Err(error) = &result {
                error!("unable to refresh hospital list, shutting down: {error:#}");
            }

            result
        }

        _ = inspector.run() => Err(anyhow!("inspector stopped unexpectedly")),

        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for ctrl-c")?;
            info!("ctrl-c received, shutting down");
            refresher.abort();

            Ok(())
        }
    }
}
