//! Interactive Confirmation
//!
//! Asks the operator, one line per question, whether an already archived
//! release may be overwritten.

use std::io::{self, BufRead, Write};

use crate::domain::ports::ConfirmationPort;
use crate::domain::value_objects::Decision;

/// Source of one answer line per question.
///
/// Implementations acquire their input handle per call and release it
/// before returning, so the port can be asked any number of times.
pub trait AnswerSource {
    /// Read one line. `Ok(None)` means the input is closed.
    fn read_answer(&mut self) -> io::Result<Option<String>>;
}

impl AnswerSource for io::Stdin {
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.lock().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    }
}

impl<T: AsRef<[u8]>> AnswerSource for io::Cursor<T> {
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    }
}

/// Default affirmative tokens (matched case-insensitively)
pub const DEFAULT_AFFIRMATIVE: &[&str] = &["y", "yes"];

/// Interactive confirmation using a line source and a question writer.
///
/// Anything other than an affirmative token, including end of input and
/// read errors, resolves to `Decision::Skip`.
pub struct InteractiveConfirmation<R = io::Stdin, W = io::Stdout> {
    input: R,
    output: W,
    affirmative: Vec<String>,
}

impl InteractiveConfirmation {
    /// Ask on stdout, read from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: AnswerSource, W: Write> InteractiveConfirmation<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            affirmative: DEFAULT_AFFIRMATIVE.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the affirmative tokens. An empty list keeps the defaults.
    pub fn with_affirmative(mut self, tokens: &[String]) -> Self {
        let tokens: Vec<String> = tokens
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        if !tokens.is_empty() {
            self.affirmative = tokens;
        }
        self
    }

    pub fn is_affirmative(&self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        self.affirmative.iter().any(|token| *token == answer)
    }

    /// Consume the port, returning the question writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, identity: &str) {
        let hint = self.affirmative.first().map(String::as_str).unwrap_or("y");
        let _ = write!(
            self.output,
            "Version {identity} already exists in the archive. Overwrite? [{hint}/N]: "
        );
        let _ = self.output.flush();
    }
}

impl<R: AnswerSource, W: Write> ConfirmationPort for InteractiveConfirmation<R, W> {
    fn confirm(&mut self, component: &str, version: &str) -> Decision {
        self.ask(&format!("{component}-{version}"));

        match self.input.read_answer() {
            Ok(Some(answer)) if self.is_affirmative(&answer) => Decision::Overwrite,
            Ok(Some(_)) => Decision::Skip,
            Ok(None) | Err(_) => {
                // Keep following output off the prompt line
                let _ = writeln!(self.output);
                Decision::Skip
            }
        }
    }
}
