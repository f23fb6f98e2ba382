//! Fixed settings for the automation service.
//!
//! Everything here is compiled in. An [`AutomationConfig`] is created once,
//! wrapped in an `Arc` and shared read-only by every invocation.

use crate::envelope::{Credentials, RunConfig, UserData};
use std::collections::BTreeMap;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3002/routers/auto/start";
pub const DEFAULT_STEP: u32 = 1;
pub const DEFAULT_TOTAL_STEPS: u32 = 1;

const DEFAULT_ACCOUNT: &str = "csasiaop1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomationConfig {
    pub endpoint: String,
    pub user_data: UserData,
    pub run_config: RunConfig,
    pub auto_pre_data: BTreeMap<String, String>,
    pub step: u32,
    pub total_steps: u32,
}

impl AutomationConfig {
    /// Same constants, different service address.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_data: UserData::uniform(Credentials::new(DEFAULT_ACCOUNT, DEFAULT_ACCOUNT)),
            run_config: RunConfig::default(),
            auto_pre_data: BTreeMap::new(),
            step: DEFAULT_STEP,
            total_steps: DEFAULT_TOTAL_STEPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AutomationConfig::default();
        assert_eq!(config.endpoint, "http://localhost:3002/routers/auto/start");
        assert_eq!(config.step, 1);
        assert_eq!(config.total_steps, 1);
        assert!(config.auto_pre_data.is_empty());
        assert_eq!(config.run_config, RunConfig::default());
        for creds in [
            &config.user_data.tsp_pm,
            &config.user_data.tsp_re,
            &config.user_data.pc_pm,
            &config.user_data.pc_re,
        ] {
            assert_eq!(creds.user_id, "csasiaop1");
            assert_eq!(creds.password, "csasiaop1");
        }
    }

    #[test]
    fn test_with_endpoint_keeps_constants() {
        let config = AutomationConfig::default().with_endpoint("http://127.0.0.1:9/start");
        assert_eq!(config.endpoint, "http://127.0.0.1:9/start");
        assert_eq!(
            AutomationConfig {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                ..config
            },
            AutomationConfig::default()
        );
    }
}
