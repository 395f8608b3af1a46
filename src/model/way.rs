use super::TagSet;
use serde::{Deserialize, Serialize};

/// a finalized OSM way: `node_refs` has length >= 2 and no adjacent
/// duplicate refs (§3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Way {
    pub id: i64,
    pub node_refs: Vec<i64>,
    pub tags: TagSet,
}

impl Way {
    pub fn new(id: i64, node_refs: Vec<i64>, tags: TagSet) -> Way {
        Way {
            id,
            node_refs,
            tags,
        }
    }
}
