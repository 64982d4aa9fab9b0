//! Interactive questions for values the command line left out.
//!
//! The only retry in the crate lives here: [`Prompter::ask_count`] keeps
//! asking until the answer fits the document's vocabulary.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{CloudError, Result};

pub const INPUT_QUESTION: &str = "Enter the name of the input file (include .txt): ";
pub const OUTPUT_QUESTION: &str = "Enter the name of the output file (include .html): ";
pub const COUNT_QUESTION: &str =
    "Enter a positive integer for the number of words to be included in the tag cloud";
const TOO_LARGE: &str =
    "Your input size is greater than the number of unique words in the input file.";
const NOT_A_NUMBER: &str = "Please enter a whole number.";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")
            .and_then(|()| self.output.flush())
            .map_err(CloudError::OutputWrite)
    }

    /// Next line of input without its line ending. EOF is [`CloudError::PromptClosed`].
    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(CloudError::InputRead)?;
        if read == 0 {
            return Err(CloudError::PromptClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask `question` until a non-blank answer arrives.
    pub fn ask_line(&mut self, question: &str) -> Result<String> {
        loop {
            self.say(question)?;
            let answer = self.read_answer()?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    /// Ask for a cloud size until the answer lies in `0..=available`.
    pub fn ask_count(&mut self, available: usize) -> Result<usize> {
        loop {
            self.say(COUNT_QUESTION)?;
            let answer = self.read_answer()?;
            let requested = match answer.parse::<i64>() {
                Ok(n) => n,
                Err(_) => {
                    debug!(answer = %answer, "count is not an integer");
                    self.say(NOT_A_NUMBER)?;
                    continue;
                }
            };
            match usize::try_from(requested) {
                Ok(n) if n <= available => return Ok(n),
                Ok(_) => {
                    debug!(requested, available, "count exceeds vocabulary");
                    self.say(TOO_LARGE)?;
                }
                Err(_) => debug!(requested, "count is negative"),
            }
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
