use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use kofu_reader::api::HttpContentService;
use kofu_reader::cli::Cli;
use kofu_reader::logging::init_tracing;
use kofu_reader::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli
        .resolve_config()
        .context("failed to load configuration")?;

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    if let Some(path) = init_tracing(cli.log.as_deref()) {
        tracing::info!(log = %path.display(), "Logging initialized");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("kofu-net")
        .build()
        .context("failed to start async runtime")?;

    let service = HttpContentService::new(&config.api).context("failed to build HTTP client")?;
    tracing::info!(base_url = %config.api.base_url, "Starting reader");

    ui::runtime::run(config, Arc::new(service), runtime.handle().clone())?;
    runtime.shutdown_background();
    Ok(())
}
