use crate::model::{PropertyMap, RunSummary, TagFingerprint, TagSet, WayKey};

use super::highway::{self, Classification};
use super::{access, misc, names_refs, speed, structures, surface_lanes};

/// outcome of running the attribute->tag mapper on one segment (§4.1's
/// `{ tags, way_key, drop }` contract).
pub struct MappedTags {
    pub tags: TagSet,
    pub way_key: WayKey,
    pub drop: bool,
}

/// runs every rule group in §4.1's fixed order and assembles the resulting
/// tag set and join key. a segment is dropped (`drop = true`) when the
/// highway/ferry classification cascade recognizes nothing for it.
pub fn derive_tags(props: &PropertyMap, route_id: Option<String>) -> MappedTags {
    let mut tags = TagSet::new();

    let highway = match highway::classify(props) {
        Classification::Ferry => {
            tags.insert("route".to_string(), "ferry".to_string());
            None
        }
        Classification::Highway(h) => {
            let h = highway::apply_link_detection(h, props);
            tags.insert("highway".to_string(), h.to_string());
            Some(h)
        }
        Classification::Unrecognized => {
            return MappedTags {
                tags,
                way_key: WayKey::new(None, None, None, route_id, TagFingerprint::default()),
                drop: true,
            };
        }
    };

    access::apply_direction_rules(props, &mut tags);
    access::apply_busway_rules(props, &mut tags);
    access::apply_vehicle_restrictions(props, &mut tags);
    access::apply_size_restrictions(props, &mut tags);
    speed::apply_speed_rules(props, &mut tags);
    surface_lanes::apply_surface_rule(props, &mut tags);
    surface_lanes::apply_lanes_rule(props, &mut tags);
    structures::apply_structure_rules(props, &mut tags);
    names_refs::apply_ref_rule(props, &mut tags);
    names_refs::apply_name_rule(props, &mut tags);
    misc::apply_roundabout_rule(props, &mut tags);
    misc::apply_low_emission_zone_rule(props, &mut tags);
    misc::apply_lit_rule(props, &mut tags);

    let way_key = WayKey::new(
        tags.get("ref").cloned(),
        tags.get("name").cloned(),
        highway.map(|h| h.to_string()),
        route_id,
        TagFingerprint::compute(&tags),
    );

    MappedTags { tags, way_key, drop: false }
}

/// convenience wrapper for callers that need to record the drop reason
/// without duplicating the classification check (§7 aggregated warnings).
pub fn derive_tags_recording(
    props: &PropertyMap,
    route_id: Option<String>,
    summary: &mut RunSummary,
) -> Option<MappedTags> {
    let mapped = derive_tags(props, route_id);
    if mapped.drop {
        summary.record_drop(crate::model::DropReason::MapperDrop);
        None
    } else {
        Some(mapped)
    }
}
