use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use paper_desk::io::{Args, StreamConsole};
use paper_desk::{Desk, DeskError, Session};

fn main() -> Result<()> {
    let config = Args::parse().into_config();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level()))
        .init();
    info!(
        "=== Paper Desk Starting (quantity policy: {:?}) ===",
        config.quantity_policy()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let console = StreamConsole::new(stdin.lock(), stdout.lock());
    let mut desk = Desk::new(Session::seeded(config.quantity_policy()), console);

    match desk.run() {
        Ok(()) => {}
        Err(DeskError::InputClosed) => warn!("Input closed, ending session"),
        Err(e) => return Err(e).context("Trading session failed"),
    }

    Ok(())
}
