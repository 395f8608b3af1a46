mod cli_error;
mod convert_error;
mod node;
mod property_value;
mod run_summary;
mod segment;
mod tag_set;
mod tagged_segment;
mod way;
mod way_key;

pub use cli_error::CliError;
pub use convert_error::ConvertError;
pub use node::Node;
pub use property_value::PropertyValue;
pub use run_summary::{DropReason, RunSummary};
pub use segment::{PropertyMap, Segment};
pub use tag_set::{TagFingerprint, TagSet};
pub use tagged_segment::TaggedSegment;
pub use way::Way;
pub use way_key::WayKey;
