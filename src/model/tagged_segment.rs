use super::{TagSet, WayKey};
use geo::Coord;

/// a segment after the tag mapper has run: its decoded coordinates, derived
/// tags, and join key (§3's "Tagged segment (internal)").
#[derive(Debug, Clone)]
pub struct TaggedSegment {
    pub coords: Vec<Coord<f64>>,
    pub tags: TagSet,
    pub route_id: Option<String>,
    pub from_measure: Option<f64>,
    pub way_key: WayKey,
}
