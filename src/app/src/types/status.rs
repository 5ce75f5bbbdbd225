use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /api/v1/status` payload
///
/// Fields are not validated: a missing field renders as `undefined`, so the
/// textual ones are kept as raw JSON values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusReport {
    #[serde(default)]
    pub status: Option<Value>,
    /// Device clock as Unix epoch seconds, number or numeric string
    #[serde(default)]
    pub sys_timestamp: Option<Value>,
    #[serde(default)]
    pub ip: Option<Value>,
    #[serde(default)]
    pub main_dns: Option<Value>,
    #[serde(default)]
    pub uptime: Option<Value>,
    #[serde(default)]
    pub free_heap: Option<Value>,
}
