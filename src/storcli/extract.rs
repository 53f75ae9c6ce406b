use serde::Deserialize;
use serde_json::Value;

use super::response::{ControllerEntry, StorcliReport};
use crate::{ProbeError, ProbeResult};

/// Ceiling on the VD index scan. Purely a sanity bound; the key-presence
/// check below ends the scan long before this on any real controller.
const MAX_VD_SCAN: usize = 100;

/// Prefix turning a SCSI NAA id into the canonical WWN identifier udev
/// uses for by-id links.
pub const WWN_PREFIX: &str = "wwn-0x";

/// A virtual drive as this probe cares about it: its canonical WWN and the
/// media type of the physical drives backing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualDrive {
    pub identifier: String,
    pub media_type: String,
}

/// One member of a virtual drive's physical-drive list.
#[derive(Debug, Clone, Deserialize)]
pub struct PhysicalDrive {
    // "Med" : "HDD"
    #[serde(rename = "Med")]
    pub media_type: String,
}

#[derive(Debug, Clone, Deserialize)]
struct VdProperties {
    // "SCSI NAA Id" : "6a416e7a06f9600027d34e94a257db13"
    #[serde(rename = "SCSI NAA Id")]
    scsi_naa_id: String,
}

/// Derive the canonical WWN identifier from a raw SCSI NAA id.
///
/// Case is preserved as given. An empty input yields the bare prefix,
/// which simply matches no device link downstream.
pub fn wwn_from_naa(naa: &str) -> String {
    format!("{WWN_PREFIX}{naa}")
}

/// Pull virtual drives out of one controller's response map.
///
/// Indices are scanned from zero and BOTH the "VD{i} Properties" and
/// "PDs for VD {i}" keys must be present for an index to count; the scan
/// stops entirely at the first index where either is absent. Gaps are not
/// skipped over. The media type of a virtual drive is taken from the first
/// entry of its physical-drive list.
pub fn extract_virtual_drives(ctl: &ControllerEntry) -> ProbeResult<Vec<VirtualDrive>> {
    let mut drives = Vec::new();

    for i in 0..=MAX_VD_SCAN {
        let vd_key = format!("VD{i} Properties");
        let pd_key = format!("PDs for VD {i}");

        let (Some(vd_value), Some(pd_value)) =
            (ctl.response_data.get(&vd_key), ctl.response_data.get(&pd_key))
        else {
            break;
        };

        let pds = decode_physical_drives(&pd_key, pd_value)?;
        let props = decode_vd_properties(&vd_key, vd_value)?;

        let first_pd = pds.first().ok_or_else(|| {
            ProbeError::Decode(format!("empty physical-drive list under \"{pd_key}\""))
        })?;

        drives.push(VirtualDrive {
            identifier: wwn_from_naa(&props.scsi_naa_id),
            media_type: first_pd.media_type.clone(),
        });
    }

    Ok(drives)
}

/// Collect virtual drives across every controller in a report.
///
/// A controller reporting non-success fails the whole cycle; partial
/// results across controllers are not produced.
pub fn virtual_drives_from_report(report: &StorcliReport) -> ProbeResult<Vec<VirtualDrive>> {
    let mut drives = Vec::new();

    for ctl in &report.controllers {
        ctl.ensure_success()?;
        drives.extend(extract_virtual_drives(ctl)?);
    }

    Ok(drives)
}

fn decode_physical_drives(key: &str, value: &Value) -> ProbeResult<Vec<PhysicalDrive>> {
    serde_json::from_value(value.clone())
        .map_err(|e| ProbeError::Decode(format!("\"{key}\": {e}")))
}

fn decode_vd_properties(key: &str, value: &Value) -> ProbeResult<VdProperties> {
    serde_json::from_value(value.clone())
        .map_err(|e| ProbeError::Decode(format!("\"{key}\": {e}")))
}
