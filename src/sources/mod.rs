use crate::error::ScanError;
use crate::model::ApplicationEntry;

/// Something that contributes entries to the catalog.
///
/// Entries pushed into `out` before an error is returned are kept by the
/// caller, so a source should push as it goes rather than batching.
pub trait Source {
    fn describe(&self) -> String;
    fn scan(&self, out: &mut Vec<ApplicationEntry>) -> Result<(), ScanError>;
}

pub mod custom;
pub mod desktop;
