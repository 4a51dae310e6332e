//! Core type definitions for RDSR scanning
//!
//! - [`ScanOptions`]: Configuration of a scan (collision policy, symlinks, ordering)
//! - [`CollisionPolicy`]: Handling of two files mapping to one destination name
//! - [`DestinationName`]: Normalized file name of a copied RDSR

mod destination;
mod options;

pub use destination::DestinationName;
pub use options::{CollisionPolicy, ScanOptions};
