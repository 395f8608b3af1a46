use crate::model::{PropertyMap, PropertyValue, TagSet};

use super::nvdb_columns as col;

/// roundabout flag (§4.1 rule 8): `junction=roundabout`.
pub fn apply_roundabout_rule(props: &PropertyMap, tags: &mut TagSet) {
    if props
        .get(col::CIRKULATIONSPLATS)
        .and_then(PropertyValue::as_flag)
        .unwrap_or(false)
    {
        tags.insert("junction".to_string(), "roundabout".to_string());
    }
}

/// environmental (low-emission) zone class (§4.1 rule 8): class 2/3 bars
/// diesel HGVs below the corresponding Euro standard, rendered as
/// `hazmat=no` per the `hazmat=*` family §4.1 names for this rule. class 1
/// and below is not restrictive enough to tag.
pub fn apply_low_emission_zone_rule(props: &PropertyMap, tags: &mut TagSet) {
    if let Some(class) = props.get(col::MILJOZON_KLASS).and_then(PropertyValue::as_i64) {
        if class >= 2 {
            tags.insert("hazmat".to_string(), "no".to_string());
        }
    }
}

/// street lighting flag (§4.1 rule 8): `lit=yes`. absence means unknown,
/// not unlit, so no tag is emitted when the column is missing.
pub fn apply_lit_rule(props: &PropertyMap, tags: &mut TagSet) {
    if props.get(col::GCM_BELYST).and_then(PropertyValue::as_flag).unwrap_or(false) {
        tags.insert("lit".to_string(), "yes".to_string());
    }
}
