use std::fmt;

/// Result of a single attempt, printed as soon as it is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The server answered with this status code.
    Status(u16),
    /// No response: connect error, timeout or an unusable URL.
    Failed,
}

impl AttemptOutcome {
    /// Printed in place of a status code when an attempt fails.
    pub const FAILURE_MARKER: &'static str = "000";
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptOutcome::Status(code) => write!(f, "{}", code),
            AttemptOutcome::Failed => f.write_str(Self::FAILURE_MARKER),
        }
    }
}
