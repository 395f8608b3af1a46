//! attribute->tag mapper: derives OSM tags from NVDB segment properties.

mod access;
mod highway;
mod mapper;
mod misc;
pub mod numeric;
pub mod nvdb_columns;
mod names_refs;
mod speed;
mod structures;
mod surface_lanes;

pub use highway::{Classification, Highway};
pub use mapper::{derive_tags, derive_tags_recording, MappedTags};
