mod args;
mod dedup;
mod metadata;
mod output;
mod shuffle;
mod uagen_error;
mod user_agents;

use crate::metadata::Metadata;
use crate::uagen_error::UagenError;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE_SIZE: usize = 5;
const SAMPLE_MAX_CHARS: usize = 80;

fn main() -> Result<(), UagenError> {
    args::parse_command_line();
    setup_logging();

    info!("generating User-Agent list");
    let generated = user_agents::generate_variations();
    let distinct = dedup::distinct(generated);
    let shuffled = shuffle::fisher_yates(&distinct, &mut rand::thread_rng());
    info!("generated {} unique user agents", shuffled.len());

    output::write_user_agents(output::USER_AGENTS_FILE, &shuffled)?;
    info!("saved to: {}", output::USER_AGENTS_FILE);

    info!("sample user agents:");
    for (index, user_agent) in shuffled.iter().take(SAMPLE_SIZE).enumerate() {
        info!("  {}. {}", index + 1, preview(user_agent, SAMPLE_MAX_CHARS));
    }

    let metadata = Metadata::compute(&shuffled);
    match output::write_metadata(output::METADATA_FILE, &metadata) {
        Ok(()) => {
            info!("metadata saved to: {}", output::METADATA_FILE);
            info!("browser distribution: {}", metadata.browsers);
            info!("platform distribution: {}", metadata.platforms);
        }
        Err(e) => warn!("could not save metadata: {}", e),
    }

    info!("user agent generation completed");
    Ok(())
}

// fixed level filter, the tool reads no environment variables
fn setup_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(LevelFilter::INFO)
        .init();
}

fn preview(user_agent: &str, max_chars: usize) -> String {
    if user_agent.chars().count() <= max_chars {
        user_agent.to_string()
    } else {
        let truncated: String = user_agent.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}
