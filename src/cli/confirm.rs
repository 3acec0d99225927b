//! Yes/no confirmation prompts.

// Prompts go to the terminal directly.
#![allow(clippy::print_stdout)]

use crate::{Error, Result};
use std::io::{self, BufRead, Write};

/// Answers a yes/no question.
pub trait Confirm {
    /// Asks `question`; returns true only on an affirmative answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Asks on stdout and reads the answer from stdin.
///
/// Only `y` or `yes` (any case) count as yes; anything else, including end of
/// input, is a no.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        print!("{question} [y/N] ");
        io::stdout()
            .flush()
            .map_err(|e| Error::operation("flush_stdout", e))?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| Error::operation("read_stdin", e))?;

        Ok(is_affirmative(&input))
    }
}

/// Answers yes to everything (`--yes`).
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        tracing::debug!(question, "Confirmed by --yes");
        Ok(true)
    }
}

fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
