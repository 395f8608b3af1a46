use crate::model::{PropertyMap, PropertyValue, TagSet};

use super::nvdb_columns as col;

/// forward/backward direction prohibitions and symmetric access
/// restrictions (§4.1 rule 3, first half): `oneway=yes`/`oneway=-1`, or
/// `access=no` when travel is prohibited in both directions.
pub fn apply_direction_rules(props: &PropertyMap, tags: &mut TagSet) {
    let forward_prohibited = flag(props, col::F_FORBJUDEN_FARDRIKTNING);
    let backward_prohibited = flag(props, col::B_FORBJUDEN_FARDRIKTNING);

    match (forward_prohibited, backward_prohibited) {
        (true, true) => {
            tags.insert("access".to_string(), "no".to_string());
        }
        (true, false) => {
            tags.insert("oneway".to_string(), "-1".to_string());
        }
        (false, true) => {
            tags.insert("oneway".to_string(), "yes".to_string());
        }
        (false, false) => {}
    }
}

/// bus/HOV lane attachment (§4.1 rule 3): `busway:left`/`busway:right`
/// when the forward/backward lane-type columns indicate a bus lane.
pub fn apply_busway_rules(props: &PropertyMap, tags: &mut TagSet) {
    if is_bus_lane(props, col::F_KORFA_517) {
        tags.insert("busway:right".to_string(), "lane".to_string());
    }
    if is_bus_lane(props, col::B_KORFA_517) {
        tags.insert("busway:left".to_string(), "lane".to_string());
    }
}

/// vehicle-type-restricted traffic prohibitions (§4.1 rule 3): the
/// narrowest matching OSM access key, value `no`. the forward/backward
/// prohibition columns carry a vehicle-class code; codes that don't match
/// a known class drop silently, matching "unrecognized enum values drop
/// silently" (§4.1). each direction's prohibition is gated by its
/// `Gallar_135` ("applies") flag: when that flag is present and false, the
/// prohibition in that direction is not in effect and nothing is emitted;
/// when the flag is absent, the prohibition applies unconditionally.
pub fn apply_vehicle_restrictions(props: &PropertyMap, tags: &mut TagSet) {
    for (prohibition_col, applies_col) in [
        (col::F_FORBUD_TRAFIK, col::F_GALLAR_135),
        (col::B_FORBUD_TRAFIK, col::B_GALLAR_135),
    ] {
        if !restriction_applies(props, applies_col) {
            continue;
        }
        if let Some(key) = props
            .get(prohibition_col)
            .and_then(PropertyValue::as_trimmed_str)
            .and_then(|code| vehicle_access_key(&code))
        {
            tags.insert(key.to_string(), "no".to_string());
        }
    }
}

fn restriction_applies(props: &PropertyMap, applies_col: &str) -> bool {
    props.get(applies_col).and_then(PropertyValue::as_flag).unwrap_or(true)
}

/// maps an NVDB vehicle-prohibition code to the narrowest OSM access key
/// it restricts.
fn vehicle_access_key(code: &str) -> Option<&'static str> {
    match code.trim() {
        "motorfordon" | "motor_vehicle" | "1" => Some("motor_vehicle"),
        "tung_lastbil" | "hgv" | "2" => Some("hgv"),
        "cykel" | "bicycle" | "3" => Some("bicycle"),
        "gaende" | "foot" | "4" => Some("foot"),
        _ => None,
    }
}

/// weight/width/height/length restrictions (§4.1 rule 3): units stripped,
/// values already stored in tonnes/metres by the NVDB source, emitted
/// only when present and positive.
pub fn apply_size_restrictions(props: &PropertyMap, tags: &mut TagSet) {
    emit_positive_metric(props, tags, col::HOGST_46, "maxweight");
    emit_positive_metric(props, tags, col::HOGST_55_30, "maxaxleload");
    emit_positive_metric(props, tags, col::FRI_H_143, "maxheight");
    emit_positive_metric(props, tags, col::BREDD_156, "maxwidth");
    apply_directional_axleload(props, tags);
}

/// forward/backward axle-load limits (§6's Weight/size family:
/// `F_Hogst_24`/`B_Hogst_24`), emitted as directional `maxaxleload:*` tags
/// alongside (not instead of) the undirected `maxaxleload` above, the same
/// way directional speeds sit alongside `maxspeed`.
fn apply_directional_axleload(props: &PropertyMap, tags: &mut TagSet) {
    emit_positive_metric(props, tags, col::F_HOGST_24, "maxaxleload:forward");
    emit_positive_metric(props, tags, col::B_HOGST_24, "maxaxleload:backward");
}

fn emit_positive_metric(props: &PropertyMap, tags: &mut TagSet, column: &str, tag_key: &str) {
    if let Some(value) = props.get(column).and_then(PropertyValue::as_f64) {
        if value > 0.0 && value.is_finite() {
            tags.insert(tag_key.to_string(), super::numeric::canonical_decimal(value));
        }
    }
}

fn flag(props: &PropertyMap, column: &str) -> bool {
    props.get(column).and_then(PropertyValue::as_flag).unwrap_or(false)
}

fn is_bus_lane(props: &PropertyMap, column: &str) -> bool {
    props
        .get(column)
        .and_then(PropertyValue::as_trimmed_str)
        .map(|v| {
            let v = v.trim().to_lowercase();
            v == "buss" || v == "bus" || v == "kollektiv"
        })
        .unwrap_or(false)
}
