use std::fmt::Display;

use crate::model::{PropertyMap, PropertyValue};

use super::nvdb_columns as col;

/// the `highway=*` classification this crate can produce (§4.1 rule 1-2).
/// carries its own [`Display`] (the literal OSM tag value) rather than
/// relying on `serde` renaming, since the same string is used both as a
/// tag value and as a join-policy key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Highway {
    Motorway,
    Trunk,
    Primary,
    Secondary,
    Tertiary,
    Unclassified,
    Residential,
    Service,
    Track,
    MotorwayLink,
    TrunkLink,
    PrimaryLink,
    SecondaryLink,
    TertiaryLink,
    Footway,
    Cycleway,
    Path,
    Pedestrian,
    LivingStreet,
}

impl Display for Highway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Highway::Motorway => "motorway",
            Highway::Trunk => "trunk",
            Highway::Primary => "primary",
            Highway::Secondary => "secondary",
            Highway::Tertiary => "tertiary",
            Highway::Unclassified => "unclassified",
            Highway::Residential => "residential",
            Highway::Service => "service",
            Highway::Track => "track",
            Highway::MotorwayLink => "motorway_link",
            Highway::TrunkLink => "trunk_link",
            Highway::PrimaryLink => "primary_link",
            Highway::SecondaryLink => "secondary_link",
            Highway::TertiaryLink => "tertiary_link",
            Highway::Footway => "footway",
            Highway::Cycleway => "cycleway",
            Highway::Path => "path",
            Highway::Pedestrian => "pedestrian",
            Highway::LivingStreet => "living_street",
        };
        write!(f, "{s}")
    }
}

impl Highway {
    /// promotes this classification to its `_link` variant. only the 5
    /// classes that have an OSM `_link` counterpart change; everything
    /// else is returned unchanged (§4.1 rule 2).
    pub fn to_link(self) -> Highway {
        match self {
            Highway::Motorway => Highway::MotorwayLink,
            Highway::Trunk => Highway::TrunkLink,
            Highway::Primary => Highway::PrimaryLink,
            Highway::Secondary => Highway::SecondaryLink,
            Highway::Tertiary => Highway::TertiaryLink,
            other => other,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(
            self,
            Highway::MotorwayLink
                | Highway::TrunkLink
                | Highway::PrimaryLink
                | Highway::SecondaryLink
                | Highway::TertiaryLink
        )
    }
}

/// result of the ferry/highway classification rule: either a `highway=*`
/// class, or a ferry route (which gets `route=ferry` and no `highway`
/// key), or nothing recognized.
pub enum Classification {
    Highway(Highway),
    Ferry,
    Unrecognized,
}

/// functional-class code -> highway mapping used when neither the
/// motorway nor motor-traffic-route flag is set (§4.1 rule 1).
fn functional_class_highway(code: i64) -> Option<Highway> {
    match code {
        0 => Some(Highway::Primary),
        1 => Some(Highway::Primary),
        2 => Some(Highway::Secondary),
        3 => Some(Highway::Tertiary),
        4 => Some(Highway::Unclassified),
        5 => Some(Highway::Unclassified),
        6 => Some(Highway::Residential),
        7 => Some(Highway::Residential),
        8 => Some(Highway::Service),
        9 => Some(Highway::Track),
        _ => None,
    }
}

/// pedestrian/bicycle path-type override, consulted after the functional
/// class cascade (§4.1 rule 1: "overrides with footway, cycleway, path,
/// pedestrian, or living_street").
fn path_type_override(props: &PropertyMap) -> Option<Highway> {
    let is_flag = |col: &str| props.get(col).and_then(PropertyValue::as_flag).unwrap_or(false);

    if is_flag(col::L_GAGATA) || is_flag(col::R_GAGATA) {
        return Some(Highway::LivingStreet);
    }
    if is_flag(col::C_CYKELLED) {
        return Some(Highway::Cycleway);
    }
    match props.get(col::GCM_T_502).and_then(PropertyValue::as_trimmed_str) {
        Some(v) => match v.trim().to_lowercase().as_str() {
            "gangbana" | "footway" => Some(Highway::Footway),
            "cykelbana" | "cycleway" => Some(Highway::Cycleway),
            "gangochcykelbana" | "path" => Some(Highway::Path),
            "gagata" | "pedestrian" => Some(Highway::Pedestrian),
            _ => None,
        },
        None => None,
    }
}

/// the highway classification cascade from §4.1 rule 1: motorway flag,
/// then motor-traffic-route flag, then functional class, then any
/// pedestrian/bicycle override, then ferry (which overrides everything
/// else, per §4.1's "ferry routes produce route=ferry and no highway
/// key").
pub fn classify(props: &PropertyMap) -> Classification {
    let mut highway = if props
        .get(col::MOTORVAG)
        .and_then(PropertyValue::as_flag)
        .unwrap_or(false)
    {
        Some(Highway::Motorway)
    } else if props
        .get(col::MOTORTRAFIKLED)
        .and_then(PropertyValue::as_flag)
        .unwrap_or(false)
    {
        Some(Highway::Trunk)
    } else {
        let functional_class = props
            .get(col::KLASS_181)
            .and_then(PropertyValue::as_i64)
            .or_else(|| props.get(col::VAGTY_41).and_then(PropertyValue::as_i64))
            .or_else(|| props.get(col::KATEG_380).and_then(PropertyValue::as_i64));
        functional_class.and_then(functional_class_highway)
    };

    if let Some(path_override) = path_type_override(props) {
        highway = Some(path_override);
    }

    let is_ferry = props
        .get(col::FARJELED)
        .and_then(PropertyValue::as_flag)
        .unwrap_or(false)
        || props
            .get(col::FARJE_139)
            .and_then(PropertyValue::as_flag)
            .unwrap_or(false);

    if is_ferry {
        return Classification::Ferry;
    }

    match highway {
        Some(h) => Classification::Highway(h),
        None => Classification::Unrecognized,
    }
}

/// link-detection rule (§4.1 rule 2): promotes to `_link` only when both
/// the delivery-quality and link-class columns indicate a ramp.
pub fn apply_link_detection(highway: Highway, props: &PropertyMap) -> Highway {
    let delivery_quality_indicates_ramp = props
        .get(col::LEVER_292)
        .and_then(PropertyValue::as_trimmed_str)
        .map(|v| v.trim().eq_ignore_ascii_case("ramp"))
        .unwrap_or(false);
    let link_class_indicates_ramp = props
        .get(col::FPV_K_309)
        .and_then(PropertyValue::as_flag)
        .unwrap_or(false);

    if delivery_quality_indicates_ramp && link_class_indicates_ramp {
        highway.to_link()
    } else {
        highway
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props_with(pairs: &[(&str, PropertyValue)]) -> PropertyMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn motorway_flag_wins_over_functional_class() {
        let props = props_with(&[
            (col::MOTORVAG, PropertyValue::from(true)),
            (col::KLASS_181, PropertyValue::from(8i64)),
        ]);
        assert!(matches!(classify(&props), Classification::Highway(Highway::Motorway)));
    }

    #[test]
    fn ferry_flag_suppresses_highway_classification() {
        let props = props_with(&[(col::FARJELED, PropertyValue::from(true))]);
        assert!(matches!(classify(&props), Classification::Ferry));
    }

    #[test]
    fn link_promotion_requires_both_indicators() {
        let props_ramp = props_with(&[
            (col::LEVER_292, PropertyValue::from("ramp")),
            (col::FPV_K_309, PropertyValue::from(true)),
        ]);
        assert_eq!(
            apply_link_detection(Highway::Motorway, &props_ramp),
            Highway::MotorwayLink
        );

        let props_partial = props_with(&[(col::LEVER_292, PropertyValue::from("ramp"))]);
        assert_eq!(
            apply_link_detection(Highway::Motorway, &props_partial),
            Highway::Motorway
        );
    }

    #[test]
    fn ferry_flag_overrides_a_motorway_flag() {
        let props = props_with(&[
            (col::MOTORVAG, PropertyValue::from(true)),
            (col::FARJELED, PropertyValue::from(true)),
        ]);
        assert!(matches!(classify(&props), Classification::Ferry));
    }

    #[test]
    fn functional_class_maps_to_expected_highway() {
        let props = props_with(&[(col::KLASS_181, PropertyValue::from(6i64))]);
        assert!(matches!(
            classify(&props),
            Classification::Highway(Highway::Residential)
        ));
    }
}
