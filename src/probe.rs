use tracing::{debug, warn};

use crate::config::ProbeConfig;
use crate::device::{InventoryDevice, LinkKind};
use crate::storcli::{decode_report, virtual_drives_from_report, QueryExecutor, VirtualDrive};
use crate::ProbeResult;

/// Outcome of classifying one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A virtual drive matched; the device's drive type was set to this.
    Matched(String),
    /// Controllers were queried but no virtual drive matched the device.
    NoMatch,
    /// The device has no by-id links; the tool was not invoked.
    Skipped,
    /// The probe is disabled by configuration.
    Disabled,
}

/// Resolves the physical media type of block devices sitting behind a
/// MegaRAID controller by correlating storcli's virtual-drive inventory
/// with the device's stable by-id links.
pub struct MediaTypeProbe {
    config: ProbeConfig,
}

impl MediaTypeProbe {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn priority(&self) -> u8 {
        self.config.priority
    }

    /// Classify one device, writing its drive-type attribute on a match.
    ///
    /// Devices without by-id links are skipped before any tool invocation.
    /// Each call performs its own storcli query and decode; nothing is
    /// cached across devices or calls.
    pub fn classify(&self, device: &mut dyn InventoryDevice) -> ProbeResult<Classification> {
        if !self.config.enabled {
            return Ok(Classification::Disabled);
        }

        let by_ids = by_id_links(device);
        if by_ids.is_empty() {
            debug!(device = device.dev_path(), "no by-id links, skipping");
            return Ok(Classification::Skipped);
        }

        let drives = self.query_virtual_drives()?;

        for vd in &drives {
            for link in &by_ids {
                if link_base(link) == vd.identifier {
                    device.set_drive_type(&vd.media_type);
                    return Ok(Classification::Matched(vd.media_type.clone()));
                }
            }
        }

        Ok(Classification::NoMatch)
    }

    /// Run the full storcli pipeline once: execute, decode the envelope,
    /// check controller status, extract and resolve virtual drives.
    pub fn query_virtual_drives(&self) -> ProbeResult<Vec<VirtualDrive>> {
        let raw = QueryExecutor::run(&self.config.tool_path)?;
        let report = decode_report(&raw)?;
        virtual_drives_from_report(&report)
    }

    /// Sweep-safe entry point: classify and log, never propagate.
    ///
    /// Probe failures abort classification for this device only and must
    /// not take down a broader inventory sweep, so every error lands in
    /// the log and the device's attribute is left unset.
    pub fn fill(&self, device: &mut dyn InventoryDevice) {
        let outcome = self.classify(device);
        let dev_path = device.dev_path();

        match outcome {
            Ok(Classification::Matched(media)) => {
                debug!(device = dev_path, media_type = %media, "set drive type");
            }
            Ok(Classification::NoMatch) => {
                debug!(device = dev_path, "no virtual drive matched");
            }
            Ok(Classification::Skipped) => {}
            Ok(Classification::Disabled) => {
                debug!(probe = self.name(), "probe disabled");
            }
            Err(err) => {
                warn!(device = dev_path, error = %err, "media-type probe failed");
            }
        }
    }
}

/// The device's stable hardware-identifier links, if any.
fn by_id_links(device: &dyn InventoryDevice) -> Vec<String> {
    device
        .dev_links()
        .iter()
        .find(|l| l.kind == LinkKind::ById)
        .map(|l| l.links.clone())
        .unwrap_or_default()
}

/// Final path component of a device link.
fn link_base(link: &str) -> &str {
    link.rsplit('/').next().unwrap_or(link)
}
