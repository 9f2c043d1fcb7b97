//! Interactive fallback for values not given on the command line or in config.
use std::io::{BufRead, Write};

use crate::args::PositiveU64;
use crate::args::parsers::parse_request_count;
use crate::error::{AppError, AppResult, ValidationError};

pub const BASE_URL_PROMPT: &str = "Enter the base URL of your app";
pub const REQUEST_COUNT_PROMPT: &str = "Enter number of requests per endpoint";

/// Supplies values the operator did not pass as flags or config.
pub trait InputSource {
    /// # Errors
    ///
    /// Returns an error when no usable base URL can be obtained.
    fn base_url(&mut self) -> AppResult<String>;

    /// # Errors
    ///
    /// Returns an error when no valid request count can be obtained.
    fn request_count(&mut self) -> AppResult<PositiveU64>;
}

/// Source used with `--no-prompt`: every missing value is an input error.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonInteractive;

impl InputSource for NonInteractive {
    fn base_url(&mut self) -> AppResult<String> {
        Err(AppError::validation(ValidationError::MissingUrl))
    }

    fn request_count(&mut self) -> AppResult<PositiveU64> {
        Err(AppError::validation(ValidationError::MissingRequestCount))
    }
}

/// Asks one question per missing value. Each answer is read once; bad input
/// is an error rather than a re-prompt.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}: ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> InputSource for Prompter<R, W> {
    /// Empty answers and closed input both count as a missing URL.
    fn base_url(&mut self) -> AppResult<String> {
        match self.ask(BASE_URL_PROMPT)? {
            Some(answer) if !answer.is_empty() => Ok(answer),
            Some(_) | None => Err(AppError::validation(ValidationError::MissingUrl)),
        }
    }

    /// Closed input is a missing count; anything but a whole number >= 1 is
    /// an invalid one.
    fn request_count(&mut self) -> AppResult<PositiveU64> {
        let answer = self
            .ask(REQUEST_COUNT_PROMPT)?
            .ok_or_else(|| AppError::validation(ValidationError::MissingRequestCount))?;
        parse_request_count(&answer).map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reads_url_and_count_in_order() -> AppResult<()> {
        let mut prompter = prompter("http://localhost:5000\n 3 \n");
        let url = prompter.base_url()?;
        let count = prompter.request_count()?;
        if url != "http://localhost:5000" {
            return Err(AppError::validation(format!("Unexpected url {}", url)));
        }
        if count.get() != 3 {
            return Err(AppError::validation("Unexpected request count"));
        }
        let shown = String::from_utf8_lossy(&prompter.into_output()).into_owned();
        if shown != format!("{}: {}: ", BASE_URL_PROMPT, REQUEST_COUNT_PROMPT) {
            return Err(AppError::validation(format!("Unexpected prompts {:?}", shown)));
        }
        Ok(())
    }

    #[test]
    fn non_numeric_count_is_rejected() -> AppResult<()> {
        for bad in ["abc\n", "0\n", "-4\n", "2.5\n"] {
            let mut prompter = prompter(bad);
            match prompter.request_count() {
                Err(AppError::Validation(ValidationError::InvalidRequestCount { .. })) => {}
                Err(err) => {
                    return Err(AppError::validation(format!("Unexpected error {}", err)));
                }
                Ok(_) => {
                    return Err(AppError::validation(format!("Accepted {:?}", bad)));
                }
            }
        }
        Ok(())
    }

    #[test]
    fn empty_url_is_missing() -> AppResult<()> {
        let mut prompter = prompter("   \n");
        match prompter.base_url() {
            Err(AppError::Validation(ValidationError::MissingUrl)) => Ok(()),
            Err(err) => Err(AppError::validation(format!("Unexpected error {}", err))),
            Ok(url) => Err(AppError::validation(format!("Accepted {:?}", url))),
        }
    }

    #[test]
    fn non_interactive_reports_missing_values() -> AppResult<()> {
        let mut source = NonInteractive;
        if !matches!(
            source.base_url(),
            Err(AppError::Validation(ValidationError::MissingUrl))
        ) {
            return Err(AppError::validation("Expected MissingUrl"));
        }
        if !matches!(
            source.request_count(),
            Err(AppError::Validation(ValidationError::MissingRequestCount))
        ) {
            return Err(AppError::validation("Expected MissingRequestCount"));
        }
        Ok(())
    }

    #[test]
    fn closed_input_is_missing_count() -> AppResult<()> {
        let mut prompter = prompter("");
        match prompter.request_count() {
            Err(AppError::Validation(ValidationError::MissingRequestCount)) => Ok(()),
            Err(err) => Err(AppError::validation(format!("Unexpected error {}", err))),
            Ok(_) => Err(AppError::validation("Expected end of input to fail")),
        }
    }
}
