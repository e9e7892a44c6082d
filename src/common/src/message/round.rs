use crate::model::game::{resolve, Move, Outcome};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoundResult {
    pub player_move: Move,
    pub other_move: Move,
    pub result: Outcome,
}

impl RoundResult {
    pub fn new(player_move: Move, other_move: Move) -> Self {
        RoundResult {
            player_move,
            other_move,
            result: resolve(player_move, other_move),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_is_resolved_on_creation() {
        let round = RoundResult::new(Move::Paper, Move::Scissors);
        assert_eq!(round.result, Outcome::Loss);
    }

    #[test]
    fn json_summary() {
        let round = RoundResult::new(Move::Rock, Move::Scissors);
        assert_eq!(
            round.to_json().unwrap(),
            r#"{"player_move":"Rock","other_move":"Scissors","result":"Win"}"#
        );
    }
}
