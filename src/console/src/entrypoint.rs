use std::io;

use agent::client::Client;
use common::message::round::RoundResult;
use tracing::Level;

use crate::{config::GameConfig, error::Result, service::game::Game};

pub fn init_logging() {
    // Ignore error if already set
    let _ = tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .try_init();
}

/// Plays one round on the process's stdin and stdout.
pub fn play(config: GameConfig) -> Result<RoundResult> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    Game::new(config, Client::random()).run(&mut input, &mut output)
}
