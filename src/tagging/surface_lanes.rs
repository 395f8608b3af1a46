use crate::model::{PropertyMap, PropertyValue, TagSet};

use super::nvdb_columns as col;

/// pavement code -> `surface=*` (§4.1 rule 5). unrecognized codes drop
/// silently, per §4.1's "unrecognized enum values drop silently".
fn surface_value(code: &str) -> Option<&'static str> {
    match code.trim().to_lowercase().as_str() {
        "belagd" | "paved" | "1" => Some("paved"),
        "grus" | "gravel" | "2" => Some("gravel"),
        "asfalt" | "asphalt" | "3" => Some("asphalt"),
        "obelagd" | "unpaved" | "4" => Some("unpaved"),
        _ => None,
    }
}

pub fn apply_surface_rule(props: &PropertyMap, tags: &mut TagSet) {
    if let Some(surface) = props
        .get(col::SLITL_152)
        .and_then(PropertyValue::as_trimmed_str)
        .and_then(|code| surface_value(&code))
    {
        tags.insert("surface".to_string(), surface.to_string());
    }
}

/// explicit lane count (§4.1 rule 5): `lanes=<n>`.
pub fn apply_lanes_rule(props: &PropertyMap, tags: &mut TagSet) {
    if let Some(n) = props.get(col::KORFA_497).and_then(PropertyValue::as_i64) {
        if n > 0 {
            tags.insert("lanes".to_string(), n.to_string());
        }
    }
}
