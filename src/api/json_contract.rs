use serde::{Deserialize, Serialize};

use crate::error::{RulerError, RulerResult};

use super::TimeRulerConfig;

pub const RULER_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: TimeRulerConfig,
}

impl TimeRulerConfig {
    pub fn to_json_contract_v1_pretty(&self) -> RulerResult<String> {
        let payload = RulerConfigJsonContractV1 {
            schema_version: RULER_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            RulerError::InvalidData(format!("failed to serialize ruler config contract v1: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned v1 contract.
    pub fn from_json_compat_str(input: &str) -> RulerResult<Self> {
        if let Ok(config) = serde_json::from_str::<TimeRulerConfig>(input) {
            return Ok(config);
        }
        let payload: RulerConfigJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            RulerError::InvalidData(format!("failed to parse ruler config json payload: {e}"))
        })?;
        if payload.schema_version != RULER_CONFIG_JSON_SCHEMA_V1 {
            return Err(RulerError::InvalidData(format!(
                "unsupported ruler config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
