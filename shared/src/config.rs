use std::env;

use crate::types::DEFAULT_ATTRIBUTE_PREFIX;

pub const USER_POOL_ID_VAR: &str = "COGNITO_USER_POOL_ID";
pub const ATTRIBUTE_PREFIX_VAR: &str = "CLAIM_ATTRIBUTE_PREFIX";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Identity-provider settings, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub user_pool_id: String,
    pub attribute_prefix: String,
}

impl AdminConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let user_pool_id = lookup(USER_POOL_ID_VAR)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing(USER_POOL_ID_VAR))?;

        let attribute_prefix = lookup(ATTRIBUTE_PREFIX_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ATTRIBUTE_PREFIX.to_string());

        Ok(Self {
            user_pool_id,
            attribute_prefix,
        })
    }
}
