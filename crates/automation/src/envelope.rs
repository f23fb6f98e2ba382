use crate::case::CaseName;
use crate::config::AutomationConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub user_id: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
        }
    }
}

/// Login accounts the remote case uses, one per role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(rename = "TSP_PM")]
    pub tsp_pm: Credentials,
    #[serde(rename = "TSP_RE")]
    pub tsp_re: Credentials,
    #[serde(rename = "PC_PM")]
    pub pc_pm: Credentials,
    #[serde(rename = "PC_RE")]
    pub pc_re: Credentials,
}

impl UserData {
    pub fn uniform(credentials: Credentials) -> Self {
        Self {
            tsp_pm: credentials.clone(),
            tsp_re: credentials.clone(),
            pc_pm: credentials.clone(),
            pc_re: credentials,
        }
    }
}

/// Post-execution behaviour of the remote case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    pub is_async: bool,
    pub is_close_page: bool,
    pub is_logout: bool,
    pub is_confirm: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestHeader {
    pub id: Uuid,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestData {
    pub case_name: CaseName,
    pub auto_pre_data: BTreeMap<String, String>,
    pub step: u32,
    pub user_data: UserData,
    pub header_id: Uuid,
    pub total_steps: u32,
    pub run_config: RunConfig,
}

/// Body of a single `POST` to the automation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationRequest {
    pub header: RequestHeader,
    pub data: RequestData,
}

impl AutomationRequest {
    /// Builds a request with a new correlation id stamped with the current time.
    pub fn new(case_name: CaseName, config: &AutomationConfig) -> Self {
        let id = Uuid::new_v4();
        Self {
            header: RequestHeader {
                id,
                timestamp: chrono::Utc::now().timestamp_millis(),
            },
            data: RequestData {
                case_name,
                auto_pre_data: config.auto_pre_data.clone(),
                step: config.step,
                user_data: config.user_data.clone(),
                header_id: id,
                total_steps: config.total_steps,
                run_config: config.run_config,
            },
        }
    }

    pub fn correlation_id(&self) -> Uuid {
        self.header.id
    }
}
