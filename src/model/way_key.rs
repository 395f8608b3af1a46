use super::TagFingerprint;

/// the join key described in §4.3: identifies whether two consecutive
/// segments are candidates for the same OSM way. the simplifier uses a
/// subset of these fields depending on the active [`crate::graph::SimplifyMethod`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WayKey {
    pub ref_: Option<String>,
    pub name: Option<String>,
    pub highway: Option<String>,
    pub route_id: Option<String>,
    pub tag_fingerprint: TagFingerprint,
}

impl WayKey {
    pub fn new(
        ref_: Option<String>,
        name: Option<String>,
        highway: Option<String>,
        route_id: Option<String>,
        tag_fingerprint: TagFingerprint,
    ) -> WayKey {
        WayKey {
            ref_,
            name,
            highway,
            route_id,
            tag_fingerprint,
        }
    }
}
