use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{ProbeError, ProbeResult};

/// Literal status storcli reports for a controller that answered the query.
pub const STATUS_SUCCESS: &str = "Success";

/// Top-level storcli JSON envelope: one entry per attached controller.
#[derive(Debug, Clone, Deserialize)]
pub struct StorcliReport {
    #[serde(rename = "Controllers")]
    pub controllers: Vec<ControllerEntry>,
}

/// One controller's section of the report.
///
/// "Response Data" is an open-ended, index-keyed map ("VD0 Properties",
/// "PDs for VD 0", ...); it is kept as raw JSON here and picked apart by
/// the extractor. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ControllerEntry {
    #[serde(rename = "Command Status")]
    pub command_status: CommandStatus,
    #[serde(rename = "Response Data", default)]
    pub response_data: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandStatus {
    #[serde(rename = "Controller")]
    pub controller: i32,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl ControllerEntry {
    /// Fail with the tool-supplied description when the controller did not
    /// answer with "Success". The description is informational only and is
    /// carried verbatim, never pattern-matched.
    pub fn ensure_success(&self) -> ProbeResult<()> {
        if self.command_status.status != STATUS_SUCCESS {
            return Err(ProbeError::Controller(
                self.command_status.description.clone(),
            ));
        }
        Ok(())
    }
}

/// Parse raw storcli output into the report envelope.
pub fn decode_report(raw: &[u8]) -> ProbeResult<StorcliReport> {
    serde_json::from_slice(raw).map_err(|e| ProbeError::MalformedResponse(e.to_string()))
}
