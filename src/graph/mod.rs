//! node interning and way construction (§4.2, §4.3).

mod geometry;
mod node_interner;
mod simplify_method;
mod way_builder;

pub use geometry::decode_linestring;
pub use node_interner::NodeInterner;
pub use simplify_method::{JoinKey, SimplifyMethod};
pub use way_builder::{WayBuilder, MAX_WAY_NODES};
