// Narrow contract against the host's block-device inventory model.
//
// The probe only reads a device's stable by-id links and writes back a
// single attribute; everything else the inventory tracks stays opaque.

use serde::{Deserialize, Serialize};

/// Classes of udev-provided device symlinks an inventory records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkKind {
    /// `/dev/disk/by-id` - derived from stable hardware identifiers.
    ById,
    ByPath,
    ByUuid,
    ByPartUuid,
    ByPartLabel,
}

/// One group of device symlinks sharing a kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevLink {
    pub kind: LinkKind,
    /// Full link paths, in the order the inventory discovered them.
    pub links: Vec<String>,
}

/// Read/write surface the probe needs from a block-device record.
pub trait InventoryDevice {
    /// Kernel device node, e.g. `/dev/sda`.
    fn dev_path(&self) -> &str;

    /// All symlink groups known for this device.
    fn dev_links(&self) -> &[DevLink];

    /// Record the discovered media type (e.g. "HDD", "SSD").
    fn set_drive_type(&mut self, media_type: &str);
}

/// Minimal concrete device record, used by the CLI and in tests. Hosts with
/// their own inventory model implement [`InventoryDevice`] directly instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockDevice {
    pub dev_path: String,
    pub dev_links: Vec<DevLink>,
    pub drive_type: Option<String>,
}

impl BlockDevice {
    pub fn new(dev_path: impl Into<String>) -> Self {
        Self {
            dev_path: dev_path.into(),
            dev_links: Vec::new(),
            drive_type: None,
        }
    }

    pub fn with_links(mut self, kind: LinkKind, links: Vec<String>) -> Self {
        self.dev_links.push(DevLink { kind, links });
        self
    }
}

impl InventoryDevice for BlockDevice {
    fn dev_path(&self) -> &str {
        &self.dev_path
    }

    fn dev_links(&self) -> &[DevLink] {
        &self.dev_links
    }

    fn set_drive_type(&mut self, media_type: &str) {
        self.drive_type = Some(media_type.to_string());
    }
}
