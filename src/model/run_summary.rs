use serde::{Deserialize, Serialize};

/// aggregated counts returned by a conversion run (§6, §7: "warnings are
/// aggregated, not per-record").
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunSummary {
    pub segments_read: u64,
    pub segments_dropped: u64,
    pub nodes_written: u64,
    pub ways_written: u64,

    pub dropped_malformed_wkb: u64,
    pub dropped_unsupported_geometry: u64,
    pub dropped_zero_length: u64,
    pub dropped_by_mapper: u64,
    pub dropped_policy_violation: u64,
}

impl RunSummary {
    pub fn record_drop(&mut self, reason: DropReason) {
        self.segments_dropped += 1;
        match reason {
            DropReason::MalformedWkb => self.dropped_malformed_wkb += 1,
            DropReason::UnsupportedGeometry => self.dropped_unsupported_geometry += 1,
            DropReason::ZeroLength => self.dropped_zero_length += 1,
            DropReason::MapperDrop => self.dropped_by_mapper += 1,
            DropReason::PolicyViolation => self.dropped_policy_violation += 1,
        }
    }
}

/// the reason a segment did not make it into the output, used purely for
/// per-kind aggregation in [`RunSummary`] (§7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    MalformedWkb,
    UnsupportedGeometry,
    ZeroLength,
    MapperDrop,
    PolicyViolation,
}
