use std::io::{BufRead, Write};

use common::model::game::Move;
use tracing::{debug, info};

use crate::{
    config::GameConfig,
    error::{GameError, Result},
};

pub struct InputReader<'a> {
    config: &'a GameConfig,
}

impl<'a> InputReader<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        InputReader { config }
    }

    /// Prompts until the player enters a valid move code.
    pub fn read_move<R, W>(&self, input: &mut R, output: &mut W) -> Result<Move>
    where
        R: BufRead,
        W: Write,
    {
        let mut line = Vec::new();
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            // Raw bytes so non-UTF-8 input is rejected like any other typo
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            match String::from_utf8_lossy(&line).parse::<Move>() {
                Ok(chosen) => {
                    debug!("Player chose {:?}", chosen);
                    return Ok(chosen);
                }
                Err(e) => {
                    info!("Rejected input: {}", e);
                    writeln!(output, "{}", self.config.invalid_input)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn read(text: &str) -> (Result<Move>, String) {
        read_bytes(text.as_bytes())
    }

    fn read_bytes(bytes: &[u8]) -> (Result<Move>, String) {
        let config = GameConfig::default();
        let mut input = Cursor::new(bytes.to_vec());
        let mut output = Vec::new();
        let result = InputReader::new(&config).read_move(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn valid_codes_need_one_prompt() {
        let config = GameConfig::default();
        for (text, expected) in [
            ("a\n", Move::Rock),
            ("b\n", Move::Paper),
            ("c\n", Move::Scissors),
        ] {
            let (result, output) = read(text);
            assert_eq!(result.unwrap(), expected);
            assert_eq!(output, config.prompt);
        }
    }

    #[test]
    fn case_and_whitespace_ignored() {
        assert_eq!(read("A\n").0.unwrap(), Move::Rock);
        assert_eq!(read(" b \n").0.unwrap(), Move::Paper);
        assert_eq!(read("\tC").0.unwrap(), Move::Scissors);
    }

    #[test]
    fn invalid_input_reprompts() {
        let config = GameConfig::default();
        let (result, output) = read("rock\n\nd\nc\n");
        assert_eq!(result.unwrap(), Move::Scissors);
        assert_eq!(output.matches(&config.invalid_input).count(), 3);
        assert_eq!(output.matches(&config.prompt).count(), 4);
    }

    #[test]
    fn non_utf8_line_reprompts() {
        let config = GameConfig::default();
        let (result, output) = read_bytes(b"\xff\xfe\n a\n");
        assert_eq!(result.unwrap(), Move::Rock);
        assert_eq!(output.matches(&config.invalid_input).count(), 1);
        assert_eq!(output.matches(&config.prompt).count(), 2);
    }

    #[test]
    fn eof_without_move_is_an_error() {
        let (result, output) = read("x\n");
        assert!(matches!(result, Err(GameError::InputClosed)));
        assert!(output.contains("Invalid input"));
    }
}
