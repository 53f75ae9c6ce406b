// storcli query pipeline
//
// Organized structure:
// - executor.rs: runs the storcli binary and captures raw output
// - response.rs: top-level JSON envelope and per-controller command status
// - extract.rs: index-keyed VD/PD extraction and WWN derivation

pub mod executor;
pub mod extract;
pub mod response;


#[cfg(test)]
mod extract_tests;


pub use executor::QueryExecutor;
pub use extract::{
    extract_virtual_drives, virtual_drives_from_report, wwn_from_naa, PhysicalDrive, VirtualDrive,
    WWN_PREFIX,
};
pub use response::{decode_report, CommandStatus, ControllerEntry, StorcliReport, STATUS_SUCCESS};
