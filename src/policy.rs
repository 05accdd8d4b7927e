use std::fmt;
use std::str::FromStr;
use tracing::error;

/// What a top-level caller does when a sweep or report fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log and terminate the process with status 1.
    #[default]
    Exit,
    /// Log and hand the error back to the caller.
    Continue,
}

impl FailurePolicy {
    /// Passes `Ok` through untouched. An `Err` is logged under `context`; under
    /// `Exit` the process stops here, otherwise the error is returned.
    pub fn check<T, E: fmt::Display>(self, context: &str, result: Result<T, E>) -> Result<T, E> {
        if let Err(e) = &result {
            error!(context, error = %e, policy = %self, "Operation failed");
            if self == FailurePolicy::Exit {
                std::process::exit(1);
            }
        }
        result
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Exit => f.write_str("exit"),
            FailurePolicy::Continue => f.write_str("continue"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exit" => Ok(FailurePolicy::Exit),
            "continue" => Ok(FailurePolicy::Continue),
            other => Err(format!("unknown policy '{}', expected 'exit' or 'continue'", other)),
        }
    }
}
