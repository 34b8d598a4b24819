use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

/// Connection settings for the 123pan API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pan123Config {
    /// Base URL the endpoint paths are appended to
    pub api_base: String,
    pub user_agent: String,
    /// Per-request timeout applied by the transport
    pub timeout_secs: u64,
}

impl Default for Pan123Config {
    fn default() -> Self {
        Self {
            api_base: "https://www.123pan.com/api".to_string(),
            user_agent: "pan123-driver/0.1".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Pan123Config {
    /// Check that the settings can produce working request URLs
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api_base).map_err(|e| DriverError::InvalidConfig {
            message: format!("invalid api_base {:?}: {}", self.api_base, e),
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(DriverError::InvalidConfig {
                message: format!("api_base must be http or https, got {}", url.scheme()),
            });
        }
        if self.timeout_secs == 0 {
            return Err(DriverError::InvalidConfig {
                message: "timeout_secs must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Build the full URL for an endpoint path such as `file/list`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
