use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use profile_viewer::api::{ClientConfig, HttpApiClient};
use profile_viewer::cli::Cli;
use profile_viewer::config::Config;
use profile_viewer::logging::init_tracing;
use profile_viewer::repository::Repository;
use profile_viewer::store::ProfileStore;
use profile_viewer::ui::runtime::run;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    config.apply_env();
    cli.apply(&mut config);
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    let _enter = runtime.enter();

    let client = HttpApiClient::new(&ClientConfig::from_config(&config))?;
    tracing::info!(
        base_url = %client.base_url(),
        user_id = %config.profile.user_id,
        "starting profile viewer"
    );

    let store = ProfileStore::new(
        Repository::new(Arc::new(client)),
        runtime.handle().clone(),
    );
    run(
        store,
        config.profile.user_id.clone(),
        Duration::from_millis(config.ui.tick_rate_ms),
        runtime.handle().clone(),
    )?;

    tracing::info!("profile viewer exited");
    Ok(())
}
