use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use super::outcome::AttemptOutcome;

/// Line-oriented progress output for a load run.
///
/// Each code is flushed as soon as it is written so the operator sees the
/// stream advance one request at a time.
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Reporter<W> {
    pub const fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// # Errors
    ///
    /// Returns an error when the output stream cannot be written.
    pub fn endpoint_started(&mut self, url: &str, requests: u64) -> io::Result<()> {
        writeln!(self.out, "Hitting {} {} times...", url, requests)?;
        self.out.flush()
    }

    /// # Errors
    ///
    /// Returns an error when the output stream cannot be written.
    pub fn attempt(&mut self, outcome: AttemptOutcome) -> io::Result<()> {
        if self.color {
            let token = outcome.to_string().with(outcome_color(outcome));
            write!(self.out, "{} ", token)?;
        } else {
            write!(self.out, "{} ", outcome)?;
        }
        self.out.flush()
    }

    /// Ends the codes line and announces the endpoint as done.
    ///
    /// # Errors
    ///
    /// Returns an error when the output stream cannot be written.
    pub fn endpoint_finished(&mut self, path: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Done with {}", path)?;
        self.out.flush()
    }

    /// # Errors
    ///
    /// Returns an error when the output stream cannot be written.
    pub fn finished(&mut self) -> io::Result<()> {
        writeln!(self.out, "Load test finished.")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

const fn outcome_color(outcome: AttemptOutcome) -> Color {
    match outcome {
        AttemptOutcome::Status(200..=299) => Color::Green,
        AttemptOutcome::Status(300..=399) => Color::Cyan,
        AttemptOutcome::Status(400..=499) => Color::Yellow,
        AttemptOutcome::Status(_) | AttemptOutcome::Failed => Color::Red,
    }
}
