use std::sync::Arc;

use clap::Parser;
use frost_config::Config;
use frost_vision::TemplateSet;
use tracing_subscriber::EnvFilter;

mod capture;
mod clicker;
mod controller;
mod state;
mod status;
#[cfg(test)]
mod tests;

use controller::BotController;
use state::AppState;

/// Whiteout Survival helper: finds known UI elements in the game
/// window and clicks them on a schedule.
#[derive(Parser, Debug)]
#[command(name = "frost", version, about)]
struct Args {
    /// Delay between iterations in seconds
    #[arg(long)]
    delay: Option<u64>,

    /// Use a random delay between 0 and the configured delay
    #[arg(long)]
    random: bool,

    /// Number of iterations to run (0 for infinite)
    #[arg(long)]
    iterations: Option<u64>,

    /// Save annotated screenshots for every accepted match
    #[arg(long)]
    debug: bool,

    /// Process name of the game, as System Events reports it
    #[arg(long)]
    app_name: Option<String>,

    /// Directory holding the template images
    #[arg(long)]
    templates_dir: Option<String>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(delay) = self.delay {
            config.automation.delay_secs = delay;
        }
        if self.random {
            config.automation.random_delay = true;
        }
        if let Some(iterations) = self.iterations {
            config.automation.iterations = iterations;
        }
        if self.debug {
            config.automation.debug = true;
        }
        if let Some(app_name) = &self.app_name {
            config.target.app_name = app_name.clone();
        }
        if let Some(dir) = &self.templates_dir {
            config.matching.templates_dir = dir.clone();
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("FROST_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let mut config = Config::new();
    args.apply(&mut config);

    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    // Fail fast on missing template images; nothing else to do without them.
    let templates = TemplateSet::load(&config.matching)?;
    tracing::info!(
        dir = %config.matching.templates_dir,
        app = %config.target.app_name,
        "starting Whiteout Survival helper"
    );

    let state = Arc::new(AppState::new(config));
    let controller = BotController::new(state.clone());
    let mut tasks = controller.spawn_tasks(templates);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e:#}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
            Err(e) => tracing::error!("task panicked: {e}"),
        }
    }

    let snapshot = state.status.snapshot();
    tracing::info!(
        iterations = snapshot.iterations,
        clicks = snapshot.clicks,
        errors = snapshot.errors,
        "run finished"
    );
    Ok(())
}
