//! Versioned JSON export of standings.

use serde::{Deserialize, Serialize};

use crate::{
    persist::{StoreError, StoreResult},
    types::Standing,
};

/// Version number for serialized [`StandingsReport`] payloads.
pub const REPORT_FORMAT_VERSION: u16 = 1;

/// Ranked standings wrapped for stable on-disk decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsReport {
    /// Payload format version.
    pub format_version: u16,
    /// Standings in rank order.
    pub standings: Vec<Standing>,
}

impl StandingsReport {
    /// Wraps `standings` using [`REPORT_FORMAT_VERSION`].
    pub fn new(standings: Vec<Standing>) -> Self {
        Self {
            format_version: REPORT_FORMAT_VERSION,
            standings,
        }
    }

    /// Encodes the report as JSON.
    pub fn to_json(&self) -> StoreResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decodes a report, rejecting unknown format versions.
    pub fn from_json(payload: &[u8]) -> StoreResult<Self> {
        let report: Self = serde_json::from_slice(payload)?;
        if report.format_version != REPORT_FORMAT_VERSION {
            return Err(StoreError::Message(format!(
                "unsupported standings report version: {}",
                report.format_version
            )));
        }
        Ok(report)
    }
}
