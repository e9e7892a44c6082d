use std::io::{BufRead, Write};

use common::{message::round::RoundResult, model::game::Move};
use tracing::debug;

use crate::{config::GameConfig, error::Result};

pub struct Presenter<'a> {
    config: &'a GameConfig,
}

impl<'a> Presenter<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Presenter { config }
    }

    pub fn welcome<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "{}", self.config.title)?;
        for option in Move::ALL {
            writeln!(output, "{}: {}", option.code(), option.label())?;
        }
        Ok(())
    }

    pub fn announce<W: Write>(&self, output: &mut W, round: &RoundResult) -> Result<()> {
        writeln!(output, "{} {}", self.config.opponent_prefix, round.other_move)?;
        writeln!(output, "{}", round.result)?;
        writeln!(output, "{}", self.config.separator)?;
        Ok(())
    }

    /// Blocks until the player presses enter. A closed input counts as acknowledgment.
    pub fn wait_for_close<R, W>(&self, input: &mut R, output: &mut W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        write!(output, "{}", self.config.close_prompt)?;
        output.flush()?;
        let mut line = Vec::new();
        if input.read_until(b'\n', &mut line)? == 0 {
            debug!("Input closed at exit prompt");
        }
        Ok(())
    }
}
