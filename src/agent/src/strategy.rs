use common::model::game::Move;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

pub trait Strategy {
    fn make_move(&mut self) -> Move;
}

// Trivial strategies
pub struct OnlyRock {}
impl Strategy for OnlyRock {
    fn make_move(&mut self) -> Move {
        Move::Rock
    }
}
pub struct OnlyPaper {}
impl Strategy for OnlyPaper {
    fn make_move(&mut self) -> Move {
        Move::Paper
    }
}
pub struct OnlyScissors {}
impl Strategy for OnlyScissors {
    fn make_move(&mut self) -> Move {
        Move::Scissors
    }
}

// Random
pub struct RandomMove<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomMove<R> {
    pub fn new(rng: R) -> Self {
        RandomMove { rng }
    }
}

impl RandomMove<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Strategy for RandomMove<R> {
    fn make_move(&mut self) -> Move {
        let index = self.rng.random_range(0..Move::ALL.len());
        let chosen = Move::ALL[index];
        debug!("Random strategy picked {:?}", chosen);
        chosen
    }
}
