use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the storcli binary. The utility installs itself at a
/// fixed path and is never discovered through PATH.
pub const STORCLI64_PATH: &str = "/opt/MegaRAID/storcli/storcli64";

/// Probe configuration, passed explicitly to [`MediaTypeProbe::new`].
///
/// The probe holds no process-wide mutable state; hosts that let operators
/// rename or disable probes map their settings into this struct.
///
/// [`MediaTypeProbe::new`]: crate::probe::MediaTypeProbe::new
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Path to the storcli management binary.
    pub tool_path: PathBuf,
    /// Probe name used in diagnostics.
    pub name: String,
    /// Disabled probes skip every device without touching the tool.
    pub enabled: bool,
    /// Ordering hint for hosts running several probes over one device.
    pub priority: u8,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            tool_path: PathBuf::from(STORCLI64_PATH),
            name: "mega-raid-probe".to_string(),
            enabled: true,
            priority: 2,
        }
    }
}

impl ProbeConfig {
    /// Configuration pointing at a non-default storcli location.
    pub fn with_tool_path(tool_path: impl Into<PathBuf>) -> Self {
        Self {
            tool_path: tool_path.into(),
            ..Self::default()
        }
    }
}
