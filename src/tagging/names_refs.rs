use crate::model::{PropertyMap, PropertyValue, TagSet};

use super::nvdb_columns as col;

/// road number components assembled into `ref` in the order
/// `E<european> ; <national> ; <county><letter>` (§4.1 rule 7). any subset
/// of the three may be present; present components are joined with `; `.
pub fn apply_ref_rule(props: &PropertyMap, tags: &mut TagSet) {
    let mut parts = Vec::new();

    if let Some(european) = props.get(col::EVAG_555).and_then(PropertyValue::as_trimmed_str) {
        parts.push(format!("E{}", european.trim_start_matches(['E', 'e'])));
    }

    if let Some(national) = props.get(col::VAGNR_10370).and_then(PropertyValue::as_trimmed_str) {
        parts.push(national);
    }

    if let Some(county) = props.get(col::LAN_558).and_then(PropertyValue::as_trimmed_str) {
        parts.push(county);
    }

    if !parts.is_empty() {
        tags.insert("ref".to_string(), parts.join("; "));
    }
}

/// street name column (§4.1 rule 7).
pub fn apply_name_rule(props: &PropertyMap, tags: &mut TagSet) {
    if let Some(name) = props.get(col::NAMN_130).and_then(PropertyValue::as_trimmed_str) {
        tags.insert("name".to_string(), name);
    }
}
