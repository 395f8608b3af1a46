use super::PropertyValue;
use std::collections::HashMap;

/// a mapping from NVDB attribute column name to its value for one input row.
/// property keys not recognized by the tag mapper are ignored (§6).
pub type PropertyMap = HashMap<String, PropertyValue>;

/// one input row: a WKB-encoded linestring plus its attribute columns.
/// input records arrive sorted by `(ROUTE_ID asc, FROM_MEASURE asc)`; this
/// order is load-bearing for way joining (§3).
#[derive(Debug, Clone)]
pub struct Segment {
    pub wkb: Vec<u8>,
    pub properties: PropertyMap,
}

impl Segment {
    pub fn new(wkb: Vec<u8>, properties: PropertyMap) -> Segment {
        Segment { wkb, properties }
    }

    pub fn get(&self, column: &str) -> Option<&PropertyValue> {
        self.properties.get(column)
    }

    pub fn route_id(&self) -> Option<String> {
        self.get(crate::tagging::nvdb_columns::ROUTE_ID)
            .and_then(PropertyValue::as_trimmed_str)
    }

    pub fn from_measure(&self) -> Option<f64> {
        self.get(crate::tagging::nvdb_columns::FROM_MEASURE)
            .and_then(PropertyValue::as_f64)
    }
}
