use crate::model::{PropertyMap, PropertyValue, TagSet};

use super::{nvdb_columns as col, numeric::render_positive_round};

/// forward/backward speed columns (§4.1 rule 4). when forward and
/// backward speeds are equal, only `maxspeed` is emitted; when they
/// differ, the directional tags are emitted instead. falls back to the
/// undirected speed column when neither direction is present. missing or
/// zero values are omitted (§4.1 rule 4).
pub fn apply_speed_rules(props: &PropertyMap, tags: &mut TagSet) {
    let forward = speed_kph(props, col::F_HOGST_225);
    let backward = speed_kph(props, col::B_HOGST_225);
    let undirected = speed_kph(props, col::HOGST_36);

    match (forward, backward) {
        (Some(f), Some(b)) if f == b => {
            tags.insert("maxspeed".to_string(), f);
        }
        (Some(f), Some(b)) => {
            tags.insert("maxspeed:forward".to_string(), f);
            tags.insert("maxspeed:backward".to_string(), b);
        }
        (Some(f), None) => {
            tags.insert("maxspeed:forward".to_string(), f);
        }
        (None, Some(b)) => {
            tags.insert("maxspeed:backward".to_string(), b);
        }
        (None, None) => {
            if let Some(u) = undirected {
                tags.insert("maxspeed".to_string(), u);
            }
        }
    }
}

fn speed_kph(props: &PropertyMap, column: &str) -> Option<String> {
    let kph = props.get(column).and_then(PropertyValue::as_f64)?;
    render_positive_round(kph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props_with(pairs: &[(&str, PropertyValue)]) -> PropertyMap {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn equal_forward_backward_speeds_collapse_to_maxspeed() {
        let props = props_with(&[
            (col::F_HOGST_225, PropertyValue::from(70.0)),
            (col::B_HOGST_225, PropertyValue::from(70.0)),
        ]);
        let mut tags = TagSet::new();
        apply_speed_rules(&props, &mut tags);
        assert_eq!(tags.get("maxspeed").map(String::as_str), Some("70"));
        assert!(!tags.contains_key("maxspeed:forward"));
    }

    #[test]
    fn differing_speeds_emit_directional_tags() {
        let props = props_with(&[
            (col::F_HOGST_225, PropertyValue::from(70.0)),
            (col::B_HOGST_225, PropertyValue::from(50.0)),
        ]);
        let mut tags = TagSet::new();
        apply_speed_rules(&props, &mut tags);
        assert_eq!(tags.get("maxspeed:forward").map(String::as_str), Some("70"));
        assert_eq!(tags.get("maxspeed:backward").map(String::as_str), Some("50"));
    }

    #[test]
    fn zero_speed_is_omitted() {
        let props = props_with(&[(col::HOGST_36, PropertyValue::from(0.0))]);
        let mut tags = TagSet::new();
        apply_speed_rules(&props, &mut tags);
        assert!(tags.is_empty());
    }
}
