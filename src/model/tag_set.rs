use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// an OSM tag set: string key to string value. kept as a `BTreeMap` so
/// iteration order is stable, which matters for `TagFingerprint` and for
/// deterministic PBF output (§8 property 3).
pub type TagSet = BTreeMap<String, String>;

/// a stable hash of a tag set's sorted `(key, value)` pairs, excluding
/// `name` and `ref` (§4.1's Way key). used by the `refname`/`connected`
/// join policies as a cheap integer-equality proxy for "these two segments
/// carry the same tags".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TagFingerprint(pub u64);

impl TagFingerprint {
    pub fn compute(tags: &TagSet) -> TagFingerprint {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        for (k, v) in tags.iter() {
            if k == "name" || k == "ref" {
                continue;
            }
            k.hash(&mut hasher);
            v.hash(&mut hasher);
        }
        TagFingerprint(hasher.finish())
    }
}
