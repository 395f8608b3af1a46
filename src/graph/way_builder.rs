use std::collections::HashMap;

use itertools::Itertools;

use crate::model::{ConvertError, TagSet, TaggedSegment, Way};

use super::node_interner::NodeInterner;
use super::simplify_method::{JoinKey, SimplifyMethod};

/// OSM's hard per-way node limit; ways are forcibly split before reaching
/// it (§4.3's "implementations may cap at e.g. 2 000 nodes per way").
pub const MAX_WAY_NODES: usize = 2_000;

struct OpenWay {
    node_refs: Vec<i64>,
    tags: TagSet,
}

/// consumes tagged segments in input order and emits finished [`Way`]s
/// under the active join policy (§4.3). owns the node interner since way
/// construction and node interning happen in the same pass.
pub struct WayBuilder {
    method: SimplifyMethod,
    interner: NodeInterner,
    next_way_id: i64,
    open: HashMap<JoinKey, OpenWay>,
    /// insertion order of currently-open keys, kept in parallel with `open`
    /// so `finish` can close leftover ways deterministically — `HashMap`
    /// iteration order is randomized per run and would otherwise assign
    /// way ids in a different order every time (§5, §8 property 3).
    open_order: Vec<JoinKey>,
    finished: Vec<Way>,
}

impl WayBuilder {
    pub fn new(method: SimplifyMethod, node_id_start: i64, way_id_start: i64) -> WayBuilder {
        WayBuilder {
            method,
            interner: NodeInterner::new(node_id_start),
            next_way_id: way_id_start,
            open: HashMap::new(),
            open_order: Vec::new(),
            finished: Vec::new(),
        }
    }

    /// interns one segment's coordinates, then joins it to an open way or
    /// starts a new one under the active policy (§4.3 steps 1-4). returns
    /// `false` when the segment collapsed to fewer than two distinct nodes
    /// and was dropped.
    pub fn push(&mut self, segment: TaggedSegment) -> Result<bool, ConvertError> {
        let TaggedSegment { coords, tags, way_key, .. } = segment;

        let node_refs: Vec<i64> = coords
            .iter()
            .map(|c| self.interner.intern(c.x, c.y))
            .dedup()
            .collect();

        if node_refs.len() < 2 {
            return Ok(false);
        }

        let join_key = self.method.join_key(&way_key);
        let is_closed_loop = node_refs.first() == node_refs.last();

        let joined = match self.open.get(&join_key) {
            Some(open_way) => open_way.node_refs.last() == node_refs.first(),
            None => false,
        };

        if joined {
            let reversed = {
                let open_way = self.open.get(&join_key).expect("checked above");
                node_refs.len() >= 2
                    && open_way.node_refs.len() >= 2
                    && node_refs.get(1) == open_way.node_refs.get(open_way.node_refs.len() - 2)
            };

            if reversed {
                self.close(&join_key);
                self.open.insert(join_key.clone(), OpenWay { node_refs, tags });
                self.open_order.push(join_key.clone());
            } else {
                let open_way = self.open.get_mut(&join_key).expect("checked above");
                open_way.node_refs.extend(node_refs.into_iter().skip(1));
                merge_tags(&mut open_way.tags, tags, self.method);

                if open_way.node_refs.len() > MAX_WAY_NODES {
                    self.close(&join_key);
                }
            }
        } else {
            self.close(&join_key);
            self.open.insert(join_key.clone(), OpenWay { node_refs, tags });
            self.open_order.push(join_key.clone());
        }

        if is_closed_loop {
            self.close(&join_key);
        }

        Ok(true)
    }

    /// closes the open way under `join_key`, if any, appending it to the
    /// finished list (§4.3 step 3/5).
    fn close(&mut self, join_key: &JoinKey) {
        if let Some(open_way) = self.open.remove(join_key) {
            self.open_order.retain(|k| k != join_key);
            let id = self.next_way_id;
            self.next_way_id += 1;
            self.finished.push(Way::new(id, open_way.node_refs, open_way.tags));
        }
    }

    /// closes every remaining open way (§4.3 step 5) and returns the
    /// finished ways plus the interned nodes. closes in `open_order`
    /// (the order each key was first opened) rather than `self.open`'s
    /// hash order, so way ids are assigned deterministically run-to-run.
    pub fn finish(mut self) -> (Vec<crate::model::Node>, Vec<Way>) {
        let keys = std::mem::take(&mut self.open_order);
        for key in keys {
            self.close(&key);
        }
        (self.interner.into_nodes(), self.finished)
    }
}

/// policy `route`/`connected`: first segment's tags win on conflict
/// (§4.3 step 4). policy `refname` never merges divergent tags since its
/// join key already requires highway/ref/name/fingerprint equality.
fn merge_tags(existing: &mut TagSet, incoming: TagSet, method: SimplifyMethod) {
    if matches!(method, SimplifyMethod::Refname) {
        return;
    }
    for (k, v) in incoming {
        existing.entry(k).or_insert(v);
    }
}
