// Allow uppercase acronyms for industry-standard terms like WWN, NAA, VD, PD
#![allow(clippy::upper_case_acronyms)]

pub mod config;
pub mod device;
pub mod inventory;
pub mod probe;
pub mod storcli;



// Re-exports for convenience
pub use config::ProbeConfig;
pub use device::{BlockDevice, DevLink, InventoryDevice, LinkKind};
pub use probe::{Classification, MediaTypeProbe};
pub use storcli::{PhysicalDrive, VirtualDrive};

use thiserror::Error;

/// Errors raised while classifying a device behind a RAID controller.
///
/// Any of these aborts the classification of the current device only;
/// callers running an inventory sweep log them and move on.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("storcli execution failed: {detail}")]
    Execution { detail: String },

    #[error("malformed storcli response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Controller(String),

    #[error("failed to decode drive record: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ProbeResult<T> = Result<T, ProbeError>;
