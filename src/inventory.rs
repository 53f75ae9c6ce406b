// Minimal block-device scanner for the CLI binary.
//
// Builds BlockDevice records from /sys/block and attaches each device's
// /dev/disk/by-id links, which is all the probe needs to correlate a
// kernel device with a controller-reported virtual drive.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::device::{BlockDevice, LinkKind};
use crate::ProbeResult;

const SYS_BLOCK: &str = "/sys/block";
const DISK_BY_ID: &str = "/dev/disk/by-id";

/// Scan the running system for physical block devices.
pub fn scan() -> ProbeResult<Vec<BlockDevice>> {
    scan_at(Path::new(SYS_BLOCK), Path::new(DISK_BY_ID))
}

pub(crate) fn scan_at(sys_block: &Path, by_id_dir: &Path) -> ProbeResult<Vec<BlockDevice>> {
    let mut devices = Vec::new();

    for entry in fs::read_dir(sys_block)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if should_skip_device(&name) {
            continue;
        }

        let dev_path = format!("/dev/{}", name);
        let by_ids = by_id_links_for(by_id_dir, &name);
        debug!(device = %dev_path, links = by_ids.len(), "found block device");

        let mut device = BlockDevice::new(dev_path);
        if !by_ids.is_empty() {
            device = device.with_links(LinkKind::ById, by_ids);
        }
        devices.push(device);
    }

    Ok(devices)
}

/// Skip loop devices, ram disks, device mapper, CD/DVD, zram.
pub(crate) fn should_skip_device(device_name: &str) -> bool {
    device_name.starts_with("loop")
        || device_name.starts_with("ram")
        || device_name.starts_with("dm-")
        || device_name.starts_with("sr")
        || device_name.starts_with("zram")
}

/// Collect the by-id symlinks resolving to the named device.
///
/// An unreadable by-id tree yields an empty set, which the probe then
/// treats as a skip; it is not an error at scan time.
fn by_id_links_for(by_id_dir: &Path, device_name: &str) -> Vec<String> {
    let mut links = Vec::new();

    let Ok(entries) = fs::read_dir(by_id_dir) else {
        return links;
    };

    for entry in entries.flatten() {
        let link_path = entry.path();
        let Ok(target) = fs::read_link(&link_path) else {
            continue;
        };
        // by-id links point at the device node relatively (../../sda);
        // the final component is the kernel device name.
        let points_here = target
            .file_name()
            .map(|n| n.to_string_lossy() == device_name)
            .unwrap_or(false);
        if points_here {
            links.push(link_path.to_string_lossy().into_owned());
        }
    }

    links
}
