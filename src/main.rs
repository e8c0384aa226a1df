use anyhow::Result;
use clap::Parser;
use tracing::info;

use rss_triage::analysis::analyze_feed;
use rss_triage::environment::Config;
use rss_triage::report::render_report;
use rss_triage::{logging, rss};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();
    logging::configure_logging(config.log_dir.as_deref());

    let llm_params = config.llm_params()?;
    info!("Using model {} at temperature {}", llm_params.model, llm_params.temperature);

    let entries = rss::load_feed(&config.feed_url).await?;
    let analyzed_items = analyze_feed(&entries, &llm_params).await?;

    println!("{}", render_report(&analyzed_items)?);

    Ok(())
}
