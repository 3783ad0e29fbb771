//! Line-oriented console session.
//!
//! Drives one [`Game`] over any `BufRead`/`Write` pair: asks the setter
//! for a secret, hides it, then asks for guesses until the match ends.
//! Invalid input is reported and the player is asked again.

use crate::config::ConsoleConfig;
use crate::games::mastermind::{Code, Game, GameError, COLOR_CHOICES, MAX_ROUNDS};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Rules shown before the match.
pub fn rules_text() -> String {
    format!(
        "There are 2 players in this game, which is Code Maker and Code Breaker.
Code Maker must create a sequence of 4 code pegs.
Afterwards, Code Breaker must guess correctly to win within {MAX_ROUNDS} rounds.
The available Code Peg colors: {COLOR_CHOICES}

If the guess of a code peg is correct in the correct position, the displayed key peg will be [R]ed.
If the guess of a code peg is correct but the position is wrong, the displayed key peg will be [W]hite.
All incorrect code peg will be leave empty.
Key pegs will be sorted from [R]ed, [W]hite, and lastly [-] empty

Here are an example:

Code Maker: YOGB
Code Breaker: OWGR
Result Key Peg: RW--

Explanation: [O]range is correct but wrong position, [W] is incorrect, [G] is correct, [R]ed is incorrect
"
    )
}

/// Error that ends a console session early.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// Reading or writing the console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(#[error(not(source))] String),

    /// Input ended before the match finished.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// The game rejected a transition the session relies on.
    #[display("{}", _0)]
    Game(GameError),
}

impl From<GameError> for ConsoleError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// An interactive match bound to a reader and a writer.
pub struct ConsoleSession<R, W> {
    game: Game,
    config: ConsoleConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Creates a session around a fresh game.
    pub fn new(config: ConsoleConfig, input: R, output: W) -> Self {
        Self {
            game: Game::new(),
            config,
            input,
            output,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the session, returning the game and the writer.
    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.output)
    }

    /// Runs the whole match.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InputClosed`] if input runs out before the
    /// match ends, or [`ConsoleError::Io`] on a console failure.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        info!("Starting console session");
        writeln!(self.output, "Welcome to Mastermind Game!")?;
        self.separator()?;
        if *self.config.show_rules() {
            writeln!(self.output, "{}", rules_text())?;
        }
        writeln!(self.output, "Let's start the game!")?;
        self.separator()?;
        self.ask_code_maker()?;
        self.page_break()?;
        self.ask_code_breaker()?;
        self.output.flush()?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn ask_code_maker(&mut self) -> Result<(), ConsoleError> {
        loop {
            writeln!(
                self.output,
                "Code maker, what is your Code Pegs sequence (Length: 4 | Colors: {COLOR_CHOICES})?"
            )?;
            let line = self.read_line()?;
            match Code::parse(&line) {
                Ok(code) => {
                    self.game.set_secret(code)?;
                    debug!("Secret accepted");
                    return Ok(());
                }
                Err(e) => {
                    warn!(error = %e, "Rejected secret");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn ask_code_breaker(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "Code breaker, it time for you to guess!!")?;
        while self.game.is_active() {
            writeln!(
                self.output,
                "What is your guess (Length: 4 | Colors: {COLOR_CHOICES})?"
            )?;
            let line = self.read_line()?;
            let code = match Code::parse(&line) {
                Ok(code) => code,
                Err(e) => {
                    warn!(error = %e, "Rejected guess");
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            self.game.set_guess(code);
            match self.game.play() {
                Ok(feedback) => {
                    writeln!(self.output, "Round {}: {}", self.game.round(), feedback)?;
                    if let Some(name) = self.game.winner_name() {
                        writeln!(self.output, "{} WIN!!!", name)?;
                    }
                }
                Err(GameError::Finished) => break,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
        Ok(())
    }

    /// Reads one line with its terminator stripped; nothing else is trimmed.
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("Input closed mid-game");
            return Err(ConsoleError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn separator(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", "-".repeat(*self.config.separator_width()))?;
        Ok(())
    }

    fn page_break(&mut self) -> Result<(), ConsoleError> {
        for _ in 0..*self.config.page_break_lines() {
            writeln!(self.output, "|")?;
        }
        Ok(())
    }
}
