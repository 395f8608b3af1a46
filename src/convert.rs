use std::path::Path;

use crate::graph::{decode_linestring, SimplifyMethod, WayBuilder};
use crate::model::{ConvertError, DropReason, PropertyMap, RunSummary, Segment, TaggedSegment};
use crate::pbf::PbfWriter;
use crate::tagging;

/// core entry point (§6): consumes `segments` in order and writes a
/// `.osm.pbf` file at `output_path`. never panics on malformed input;
/// failures short-circuit only on I/O errors (§4.4's failure semantics).
pub fn convert<I>(
    segments: I,
    output_path: &Path,
    simplify_method: SimplifyMethod,
    node_id_start: i64,
    way_id_start: i64,
) -> Result<RunSummary, ConvertError>
where
    I: IntoIterator<Item = (Vec<u8>, PropertyMap)>,
{
    let mut summary = RunSummary::default();
    let mut builder = WayBuilder::new(simplify_method, node_id_start, way_id_start);

    for (wkb, properties) in segments {
        summary.segments_read += 1;
        let segment = Segment::new(wkb, properties);

        let coords = match decode_linestring(&segment.wkb) {
            Ok(coords) => coords,
            Err(ConvertError::UnsupportedGeometry(_)) => {
                summary.record_drop(DropReason::UnsupportedGeometry);
                continue;
            }
            Err(_) => {
                summary.record_drop(DropReason::MalformedWkb);
                continue;
            }
        };

        let route_id = segment.route_id();
        let mapped = match tagging::derive_tags_recording(&segment.properties, route_id.clone(), &mut summary) {
            Some(mapped) => mapped,
            None => continue,
        };

        let tagged = TaggedSegment {
            coords,
            tags: mapped.tags,
            route_id,
            from_measure: segment.from_measure(),
            way_key: mapped.way_key,
        };

        match builder.push(tagged) {
            Ok(true) => {}
            Ok(false) => summary.record_drop(DropReason::ZeroLength),
            Err(e) => {
                log::warn!("dropping segment: {e}");
                summary.record_drop(DropReason::PolicyViolation);
            }
        }
    }

    let (nodes, ways) = builder.finish();
    summary.nodes_written = nodes.len() as u64;
    summary.ways_written = ways.len() as u64;

    log::info!(
        "read {} segments, dropped {}",
        summary.segments_read,
        summary.segments_dropped
    );

    let mut writer = PbfWriter::create(output_path)?;
    for node in &nodes {
        writer.write_node(*node)?;
    }
    let mut way_writer = writer.finish_nodes()?;
    for way in ways {
        way_writer.write_way(way)?;
    }
    way_writer.finish()?;

    log::info!(
        "wrote {} nodes, {} ways to {}",
        summary.nodes_written,
        summary.ways_written,
        output_path.display()
    );

    Ok(summary)
}
