use crate::handlers::failure_policy::FailurePolicy;

pub const USERS_TABLE_ENV: &str = "USERS_TABLE";
pub const FAILURE_POLICY_ENV: &str = "PROFILE_SYNC_FAILURE_POLICY";

/// Table standing in for the `users` collection when none is configured.
pub const DEFAULT_USERS_TABLE: &str = "users";

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyTableName,
    InvalidFailurePolicy(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyTableName => {
                write!(f, "{} must not be empty", USERS_TABLE_ENV)
            }
            ConfigError::InvalidFailurePolicy(value) => write!(
                f,
                "Invalid {} '{}': expected 'swallow' or 'propagate'",
                FAILURE_POLICY_ENV, value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings shared by the signup and delete functions.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncConfig {
    pub table_name: String,
    pub failure_policy: FailurePolicy,
}

impl SyncConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = match lookup(USERS_TABLE_ENV) {
            Some(name) if name.trim().is_empty() => return Err(ConfigError::EmptyTableName),
            Some(name) => name.trim().to_string(),
            None => DEFAULT_USERS_TABLE.to_string(),
        };
        let failure_policy = match lookup(FAILURE_POLICY_ENV) {
            Some(raw) => raw.parse()?,
            None => FailurePolicy::default(),
        };
        Ok(SyncConfig {
            table_name,
            failure_policy,
        })
    }
}
