use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;
use crate::handlers::errors::ProfileSyncError;
use crate::handlers::SyncOutcome;

/// Decides whether a failed store call fails the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure and report the event as handled.
    #[default]
    Swallow,
    /// Log the failure and return it, so the event source may redeliver.
    Propagate,
}

impl FailurePolicy {
    pub fn resolve(self, outcome: SyncOutcome) -> Result<SyncOutcome, ProfileSyncError> {
        match (self, outcome) {
            (FailurePolicy::Propagate, SyncOutcome::Failed(err)) => Err(err.into()),
            (_, outcome) => Ok(outcome),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Swallow => write!(f, "swallow"),
            FailurePolicy::Propagate => write!(f, "propagate"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "swallow" => Ok(FailurePolicy::Swallow),
            "propagate" => Ok(FailurePolicy::Propagate),
            _ => Err(ConfigError::InvalidFailurePolicy(value.to_string())),
        }
    }
}
