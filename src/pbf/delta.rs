/// delta-encodes a strictly-ascending sequence of values (§4.4: "all
/// signed deltas are zig-zag encoded before varint serialization").
pub fn delta_encode(values: &[i64]) -> Vec<i64> {
    let mut out = Vec::with_capacity(values.len());
    let mut prev = 0i64;
    for &v in values {
        out.push(v - prev);
        prev = v;
    }
    out
}

/// zig-zag encodes a signed value into its unsigned varint-friendly form.
/// prost's `sint64` fields already apply this at the wire level, but the
/// dense-nodes `id`/`lat`/`lon` fields and way `refs` are declared `sint64`
/// in the schema for exactly that reason, so callers pass plain deltas
/// through unchanged; this helper exists for the tests that check the
/// wire-level expectation directly.
pub fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_encode_first_value_is_absolute() {
        assert_eq!(delta_encode(&[10, 15, 20]), vec![10, 5, 5]);
    }

    #[test]
    fn zigzag_round_trips_sign() {
        assert_eq!(zigzag_encode(0), 0);
        assert_eq!(zigzag_encode(-1), 1);
        assert_eq!(zigzag_encode(1), 2);
        assert_eq!(zigzag_encode(-2), 3);
    }
}
