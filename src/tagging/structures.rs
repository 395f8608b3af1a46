use crate::model::{PropertyMap, PropertyValue, TagSet};

use super::nvdb_columns as col;

/// bridge/tunnel construction columns (§4.1 rule 6): `bridge=yes` or
/// `tunnel=yes`, with `layer` defaulting to `+1`/`-1` respectively when no
/// explicit layer is present. this crate does not recognize an explicit
/// layer column (none is named in §6's table), so the default always
/// applies — see DESIGN.md for this Open Question's resolution.
pub fn apply_structure_rules(props: &PropertyMap, tags: &mut TagSet) {
    let construction = props
        .get(col::KONST_190)
        .and_then(PropertyValue::as_trimmed_str)
        .map(|v| v.trim().to_lowercase());

    match construction.as_deref() {
        Some("bro") | Some("bridge") => {
            tags.insert("bridge".to_string(), "yes".to_string());
            tags.insert("layer".to_string(), "1".to_string());
        }
        Some("tunnel") | Some("tunnel_") => {
            tags.insert("tunnel".to_string(), "yes".to_string());
            tags.insert("layer".to_string(), "-1".to_string());
        }
        _ => {}
    }

    if let Some(name) = props.get(col::NAMN_193).and_then(PropertyValue::as_trimmed_str) {
        if tags.contains_key("bridge") {
            tags.insert("bridge:name".to_string(), name);
        } else if tags.contains_key("tunnel") {
            tags.insert("tunnel:name".to_string(), name);
        }
    }

    if let Some(ident) = props.get(col::IDENT_191).and_then(PropertyValue::as_trimmed_str) {
        if tags.contains_key("bridge") {
            tags.insert("bridge:ref".to_string(), ident);
        } else if tags.contains_key("tunnel") {
            tags.insert("tunnel:ref".to_string(), ident);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props_with(pairs: &[(&str, PropertyValue)]) -> PropertyMap {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn named_bridge_gets_layer_and_name() {
        let props = props_with(&[
            (col::KONST_190, PropertyValue::from("bro")),
            (col::NAMN_193, PropertyValue::from("Ölandsbron")),
        ]);
        let mut tags = TagSet::new();
        apply_structure_rules(&props, &mut tags);
        assert_eq!(tags.get("bridge").map(String::as_str), Some("yes"));
        assert_eq!(tags.get("layer").map(String::as_str), Some("1"));
        assert_eq!(tags.get("bridge:name").map(String::as_str), Some("Ölandsbron"));
    }

    #[test]
    fn tunnel_gets_negative_layer() {
        let props = props_with(&[(col::KONST_190, PropertyValue::from("tunnel"))]);
        let mut tags = TagSet::new();
        apply_structure_rules(&props, &mut tags);
        assert_eq!(tags.get("tunnel").map(String::as_str), Some("yes"));
        assert_eq!(tags.get("layer").map(String::as_str), Some("-1"));
    }

    #[test]
    fn structure_identifier_becomes_bridge_ref() {
        let props = props_with(&[
            (col::KONST_190, PropertyValue::from("bro")),
            (col::IDENT_191, PropertyValue::from("BRO-1042")),
        ]);
        let mut tags = TagSet::new();
        apply_structure_rules(&props, &mut tags);
        assert_eq!(tags.get("bridge:ref").map(String::as_str), Some("BRO-1042"));
    }

    #[test]
    fn structure_identifier_without_construction_type_is_not_tagged() {
        let props = props_with(&[(col::IDENT_191, PropertyValue::from("BRO-1042"))]);
        let mut tags = TagSet::new();
        apply_structure_rules(&props, &mut tags);
        assert!(tags.is_empty());
    }
}
