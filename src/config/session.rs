//! Session cookie and lifetime configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session id
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Seconds an idle session survives before it expires
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Seconds between expired-session sweeps
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl SessionConfig {
    /// Session time-to-live as a `Duration`
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Sweep interval as a `Duration`
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cookie_name.is_empty() {
            return Err(ValidationError::EmptyCookieName);
        }
        if self.ttl_secs < 60 {
            return Err(ValidationError::SessionTtlTooShort);
        }
        if self.sweep_interval_secs == 0 {
            return Err(ValidationError::SweepIntervalTooShort);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            ttl_secs: default_ttl_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_cookie_name() -> String {
    "listkeeper_session".to_string()
}

fn default_ttl_secs() -> u64 {
    86_400
}

fn default_sweep_interval_secs() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.cookie_name, "listkeeper_session");
        assert_eq!(config.ttl(), Duration::from_secs(86_400));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_cookie_name() {
        let config = SessionConfig {
            cookie_name: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyCookieName)
        ));
    }

    #[test]
    fn test_validate_rejects_short_ttl() {
        let config = SessionConfig {
            ttl_secs: 59,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::SessionTtlTooShort)
        ));
    }
}
