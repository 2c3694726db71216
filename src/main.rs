use std::path::PathBuf;

use anyhow::Context;
use deckkit::{init_logging, Config, DeckSession, BUILD_DATE, VERSION};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("DeckKit {} (built {})", VERSION, BUILD_DATE);

    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => Config::default_path()?,
    };
    let config = Config::load_or_default(&path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

    let session = DeckSession::from_config(&config);
    if let Some(issue) = session.parameter_issue() {
        println!("Warning: {}", issue);
    }

    println!("{}", session.readout());
    println!();
    println!("{}", session.takeoff());

    Ok(())
}
