use geo::{Coord, Geometry};
use geozero::{wkb::Wkb, ToGeo};

use crate::model::ConvertError;

/// decodes a segment's WKB payload into its coordinate sequence. only
/// `LineString` is a supported geometry (§4.3); everything else is
/// rejected, matching "malformed WKB ... causes the whole segment to be
/// dropped" (§4.3's failure semantics).
pub fn decode_linestring(wkb: &[u8]) -> Result<Vec<Coord<f64>>, ConvertError> {
    let geometry = Wkb(wkb.to_vec())
        .to_geo()
        .map_err(|e| ConvertError::InvalidWkb(e.to_string()))?;

    match geometry {
        Geometry::LineString(ls) => Ok(ls.0),
        other => Err(ConvertError::UnsupportedGeometry(format!("{other:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;
    use wkb::Endianness;

    fn encode(ls: &geo::LineString<f64>) -> Vec<u8> {
        let mut out = Vec::new();
        let geom = Geometry::LineString(ls.clone());
        wkb::writer::write_geometry(
            &mut out,
            &geom,
            &wkb::writer::WriteOptions { endianness: Endianness::LittleEndian },
        )
        .unwrap();
        out
    }

    #[test]
    fn decodes_a_simple_linestring() {
        let ls = line_string![(x: 17.01, y: 62.005), (x: 17.02, y: 62.006)];
        let bytes = encode(&ls);
        let coords = decode_linestring(&bytes).unwrap();
        assert_eq!(coords.len(), 2);
    }

    #[test]
    fn truncated_payload_is_invalid_wkb() {
        let err = decode_linestring(&[0x01, 0x02, 0x03]).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidWkb(_)));
    }

    #[test]
    fn point_geometry_is_unsupported() {
        let point = Geometry::Point(geo::Point::new(17.0, 62.0));
        let mut out = Vec::new();
        wkb::writer::write_geometry(
            &mut out,
            &point,
            &wkb::writer::WriteOptions { endianness: Endianness::LittleEndian },
        )
        .unwrap();
        let err = decode_linestring(&out).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedGeometry(_)));
    }
}
