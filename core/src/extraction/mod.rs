pub mod classify;
pub mod reader;
pub mod tags;

pub use classify::{is_rdsr, RDSR_SOP_CLASS_UID};
pub use reader::{open_header, read_metadata};
pub use tags::*;
