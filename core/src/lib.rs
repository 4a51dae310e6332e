pub mod api;
pub mod cli;
pub mod dose;
pub mod error;
pub mod extraction;
pub mod logging;
pub mod scan;
pub mod setup;
pub mod types;

#[cfg(test)]
mod testing;

pub use api::{DocumentMetadata, MetadataExtractor};
pub use cli::report::TextReport;
pub use error::{RdsrError, Result};
pub use extraction::{is_rdsr, read_metadata, RDSR_SOP_CLASS_UID};
pub use scan::{find_rdsr_files, RdsrLocator, ScanReport};
pub use types::*;
