use clap::Parser;
use newsboard::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "newsboard", about = "Terminal dashboard for summarized AI news")]
struct Args {
    /// Base URL of the news API (overrides config and NEWSBOARD_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Per-request timeout in seconds; 0 disables it
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to newsboard.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("newsboard.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Newsboard starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, falling back to defaults", e);
        config::NewsboardConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            api_url: args.api_url,
            timeout_secs: args.timeout,
        },
    );

    newsboard::tui::run(resolved)
}
