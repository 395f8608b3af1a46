use serde::{Deserialize, Serialize};

/// a node carries no tags in this system (§3). coordinates are stored
/// already quantized to nano-degrees (decimal degrees * 1e7, OSM
/// convention: `granularity = 100` nanodegrees, offsets zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: i64,
    pub lon: i64,
    pub lat: i64,
}

impl Node {
    pub fn new(id: i64, lon: i64, lat: i64) -> Node {
        Node { id, lon, lat }
    }
}
