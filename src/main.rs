//! fakewatch - a terminal dashboard for a live fake-news scoring stream
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use tracing::error;

use fakewatch_app::config::load_settings;

/// Terminal dashboard for a live fake-news scoring stream
#[derive(Parser, Debug)]
#[command(name = "fakewatch")]
#[command(about = "Watch LLM fake-news verdicts stream in from a scoring server", long_about = None)]
struct Args {
    /// WebSocket URL of the scoring server (overrides the config file)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Hide the rolling score chart
    #[arg(long)]
    no_chart: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    fakewatch_core::logging::init()?;

    let mut settings = load_settings();
    if let Some(url) = args.url {
        settings.server.url = url;
    }
    if args.no_chart {
        settings.ui.show_chart = false;
    }

    if let Err(e) = fakewatch_tui::run(settings).await {
        error!("fakewatch exited with error: {e}");
        return Err(e.into());
    }

    Ok(())
}
