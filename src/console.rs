use std::io::{BufRead, Write};

use crate::{error::GameError, hand::Hand, strategy::Action};

pub const MAX_NAME_LEN: usize = 12;

/// Everything the game needs from the person at the table: answers in, text out.
pub trait Table {
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, GameError>;
    fn ask_name(&mut self) -> Result<String, GameError>;
    fn ask_action(&mut self) -> Result<Action, GameError>;
    /// Blocks until the operator lets the dealer continue.
    fn acknowledge(&mut self) -> Result<(), GameError>;
    fn show_hand(&mut self, owner: &str, hand: &Hand) -> Result<(), GameError>;
    fn say(&mut self, line: &str) -> Result<(), GameError>;
}

pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(char::is_whitespace)
        && name.chars().count() < MAX_NAME_LEN
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

/// Line-oriented terminal table over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }

    /// Re-prompts until `parse` accepts the answer.
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        error: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, GameError> {
        loop {
            let answer = self.read_answer(prompt)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            writeln!(self.output, "{error}")?;
        }
    }
}

impl<R: BufRead, W: Write> Table for Console<R, W> {
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, GameError> {
        self.ask_until(prompt, "ERROR: Only enter 'y' or 'n'", parse_yes_no)
    }

    fn ask_name(&mut self) -> Result<String, GameError> {
        loop {
            let name = self.read_answer("Enter your name: ")?;
            let valid = is_valid_name(&name);
            if !valid {
                writeln!(self.output, "ERROR: Must be 1 word and less than 12 characters.")?;
            }
            writeln!(self.output)?;
            if valid {
                return Ok(name);
            }
        }
    }

    fn ask_action(&mut self) -> Result<Action, GameError> {
        let action = self.ask_until(
            "Do you want to hit or stand (h/s): ",
            "ERROR: Must be 'h' or 's'.",
            Action::from_code,
        )?;
        writeln!(self.output)?;
        Ok(action)
    }

    fn acknowledge(&mut self) -> Result<(), GameError> {
        self.read_answer("Press \"Enter\" to continue...")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn show_hand(&mut self, owner: &str, hand: &Hand) -> Result<(), GameError> {
        writeln!(self.output, "{owner}'s hand: {hand}")?;
        writeln!(self.output, "Hand Total: ({})", hand.total())?;
        writeln!(self.output)?;
        Ok(())
    }

    fn say(&mut self, line: &str) -> Result<(), GameError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}
