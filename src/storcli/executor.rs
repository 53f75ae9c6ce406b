use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::{ProbeError, ProbeResult};

/// Fixed query: full report for all controllers and all virtual drives,
/// JSON output. The argument vector must match the real utility exactly.
const QUERY_ARGS: [&str; 4] = ["/call/vall", "show", "all", "J"];

pub struct QueryExecutor;

impl QueryExecutor {
    /// Run the storcli query and return raw stdout bytes.
    ///
    /// Blocks for the full duration of the child process; storcli is local
    /// and fast, so no timeout is imposed here. Callers needing bounded
    /// latency wrap this externally.
    pub fn run(tool_path: &Path) -> ProbeResult<Vec<u8>> {
        debug!(tool = %tool_path.display(), "querying RAID controllers");

        let output = Command::new(tool_path)
            .args(QUERY_ARGS)
            .output()
            .map_err(|e| ProbeError::Execution {
                detail: format!("{}: {}", tool_path.display(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProbeError::Execution {
                detail: format!(
                    "{} exited with {}: {}",
                    tool_path.display(),
                    output.status,
                    stderr.trim()
                ),
            });
        }

        Ok(output.stdout)
    }
}
