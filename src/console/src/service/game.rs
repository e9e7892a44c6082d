use std::io::{BufRead, Write};

use agent::client::Client;
use common::message::round::RoundResult;
use tracing::{debug, warn};

use crate::{
    config::GameConfig,
    error::Result,
    service::{input::InputReader, presenter::Presenter},
};

/// One round against the opponent: read, randomize, resolve, print.
pub struct Game {
    config: GameConfig,
    opponent: Client,
}

impl Game {
    pub fn new(config: GameConfig, opponent: Client) -> Self {
        Game { config, opponent }
    }

    pub fn run<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<RoundResult>
    where
        R: BufRead,
        W: Write,
    {
        let presenter = Presenter::new(&self.config);
        presenter.welcome(output)?;

        let player_move = InputReader::new(&self.config).read_move(input, output)?;
        let other_move = self.opponent.play();
        let round = RoundResult::new(player_move, other_move);
        match round.to_json() {
            Ok(summary) => debug!("Round finished: {}", summary),
            Err(e) => warn!("Failed to serialize round: {:?}", e),
        }

        presenter.announce(output, &round)?;
        presenter.wait_for_close(input, output)?;
        Ok(round)
    }
}
