use game_console::{config::GameConfig, entrypoint};
use tracing::error;

fn main() {
    entrypoint::init_logging();
    // Always exits 0
    if let Err(e) = entrypoint::play(GameConfig::default()) {
        error!("Game ended early: {}", e);
    }
}
