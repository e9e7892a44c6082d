use common::model::game::Move;
use tracing::debug;

use crate::strategy::{RandomMove, Strategy};

/// The opponent seat: plays whatever its strategy picks.
pub struct Client {
    strategy: Box<dyn Strategy>,
}

impl Client {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Client { strategy }
    }

    pub fn random() -> Self {
        Self::new(Box::new(RandomMove::from_entropy()))
    }

    pub fn play(&mut self) -> Move {
        let next_move = self.strategy.make_move();
        debug!("Opponent plays {:?}", next_move);
        next_move
    }
}
