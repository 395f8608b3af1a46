use std::fs::File;
use std::io::{BufWriter, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;
use prost::Message;

use crate::model::{ConvertError, Node, Way};

use super::delta::delta_encode;
use super::proto;
use super::string_table::StringTable;

/// `§4.4`'s "~8 000" batching guidance, kept as two distinct constants from
/// the way builder's per-way node cap (`graph::MAX_WAY_NODES`).
pub const MAX_NODES_PER_BLOCK: usize = 8_000;
pub const MAX_WAYS_PER_BLOCK: usize = 8_000;

const REQUIRED_FEATURES: [&str; 2] = ["OsmSchema-V0.6", "DenseNodes"];
const WRITING_PROGRAM: &str = "nvdb-osm";

/// writes a `.osm.pbf` file, enforcing "all node blocks precede all way
/// blocks" (§4.4) at the type level: [`PbfWriter`] only accepts nodes,
/// [`PbfWayWriter`] (returned by [`PbfWriter::finish_nodes`]) only accepts
/// ways.
pub struct PbfWriter {
    out: BufWriter<File>,
    node_buffer: Vec<Node>,
}

/// the way-writing phase of a PBF file, reachable only after
/// [`PbfWriter::finish_nodes`] has flushed every buffered node.
pub struct PbfWayWriter {
    out: BufWriter<File>,
    way_buffer: Vec<Way>,
}

impl PbfWriter {
    pub fn create(path: &std::path::Path) -> Result<PbfWriter, ConvertError> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        write_header_block(&mut out)?;
        Ok(PbfWriter { out, node_buffer: Vec::new() })
    }

    /// buffers one node, flushing a dense-nodes block once
    /// [`MAX_NODES_PER_BLOCK`] is reached. nodes must arrive in strictly
    /// ascending id order (§4.4's ordering invariant).
    pub fn write_node(&mut self, node: Node) -> Result<(), ConvertError> {
        self.node_buffer.push(node);
        if self.node_buffer.len() >= MAX_NODES_PER_BLOCK {
            self.flush_nodes()?;
        }
        Ok(())
    }

    fn flush_nodes(&mut self) -> Result<(), ConvertError> {
        if self.node_buffer.is_empty() {
            return Ok(());
        }
        let block = build_dense_nodes_block(&self.node_buffer);
        write_fileblock(&mut self.out, "OSMData", block.encode_to_vec())?;
        self.node_buffer.clear();
        Ok(())
    }

    /// flushes any buffered nodes and transitions to the way-writing phase.
    pub fn finish_nodes(mut self) -> Result<PbfWayWriter, ConvertError> {
        self.flush_nodes()?;
        Ok(PbfWayWriter { out: self.out, way_buffer: Vec::new() })
    }
}

impl PbfWayWriter {
    /// buffers one way, flushing a ways block once [`MAX_WAYS_PER_BLOCK`]
    /// is reached. ways must arrive in strictly ascending id order.
    pub fn write_way(&mut self, way: Way) -> Result<(), ConvertError> {
        self.way_buffer.push(way);
        if self.way_buffer.len() >= MAX_WAYS_PER_BLOCK {
            self.flush_ways()?;
        }
        Ok(())
    }

    fn flush_ways(&mut self) -> Result<(), ConvertError> {
        if self.way_buffer.is_empty() {
            return Ok(());
        }
        let block = build_ways_block(&self.way_buffer);
        write_fileblock(&mut self.out, "OSMData", block.encode_to_vec())?;
        self.way_buffer.clear();
        Ok(())
    }

    /// flushes any buffered ways and closes the underlying file.
    pub fn finish(mut self) -> Result<(), ConvertError> {
        self.flush_ways()?;
        self.out.flush()?;
        Ok(())
    }
}

fn write_header_block(out: &mut BufWriter<File>) -> Result<(), ConvertError> {
    let header = proto::HeaderBlock {
        bbox: None,
        required_features: REQUIRED_FEATURES.iter().map(|s| s.to_string()).collect(),
        optional_features: Vec::new(),
        writingprogram: Some(WRITING_PROGRAM.to_string()),
        source: None,
        osmosis_replication_timestamp: None,
        osmosis_replication_sequence_number: None,
        osmosis_replication_base_url: None,
    };
    write_fileblock(out, "OSMHeader", header.encode_to_vec())
}

fn build_dense_nodes_block(nodes: &[Node]) -> proto::PrimitiveBlock {
    let ids: Vec<i64> = delta_encode(&nodes.iter().map(|n| n.id).collect::<Vec<_>>());
    let lats: Vec<i64> = delta_encode(&nodes.iter().map(|n| n.lat).collect::<Vec<_>>());
    let lons: Vec<i64> = delta_encode(&nodes.iter().map(|n| n.lon).collect::<Vec<_>>());

    let dense = proto::DenseNodes {
        id: ids,
        lat: lats,
        lon: lons,
        keys_vals: Vec::new(),
    };

    proto::PrimitiveBlock {
        stringtable: Some(proto::StringTable { s: StringTable::new().into_bytes() }),
        primitivegroup: vec![proto::PrimitiveGroup { ways: Vec::new(), dense: Some(dense) }],
        granularity: Some(100),
        lat_offset: Some(0),
        lon_offset: Some(0),
        date_granularity: Some(1000),
    }
}

fn build_ways_block(ways: &[Way]) -> proto::PrimitiveBlock {
    let mut table = StringTable::new();
    let mut encoded_ways = Vec::with_capacity(ways.len());

    for way in ways {
        let refs = delta_encode(&way.node_refs);
        let mut keys = Vec::with_capacity(way.tags.len());
        let mut vals = Vec::with_capacity(way.tags.len());
        for (k, v) in &way.tags {
            keys.push(table.intern(k));
            vals.push(table.intern(v));
        }
        encoded_ways.push(proto::Way { id: way.id, keys, vals, refs });
    }

    proto::PrimitiveBlock {
        stringtable: Some(proto::StringTable { s: table.into_bytes() }),
        primitivegroup: vec![proto::PrimitiveGroup { ways: encoded_ways, dense: None }],
        granularity: Some(100),
        lat_offset: Some(0),
        lon_offset: Some(0),
        date_granularity: Some(1000),
    }
}

/// writes one fileblock: 4-byte BE `BlobHeader` length, the `BlobHeader`,
/// then the `Blob` (§4.4). payloads under 16 bytes are stored raw rather
/// than zlib-compressed; there's no benefit to compressing something that
/// small.
fn write_fileblock(out: &mut BufWriter<File>, blob_type: &str, payload: Vec<u8>) -> Result<(), ConvertError> {
    let raw_size = payload.len() as i32;

    let blob = if payload.len() < 16 {
        proto::Blob { raw: Some(payload), raw_size: None, ..Default::default() }
    } else {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(6));
        encoder.write_all(&payload)?;
        let compressed = encoder.finish()?;
        proto::Blob { zlib_data: Some(compressed), raw_size: Some(raw_size), ..Default::default() }
    };

    let blob_bytes = blob.encode_to_vec();
    let header = proto::BlobHeader {
        r#type: blob_type.to_string(),
        indexdata: None,
        datasize: blob_bytes.len() as i32,
    };
    let header_bytes = header.encode_to_vec();

    out.write_all(&(header_bytes.len() as u32).to_be_bytes())?;
    out.write_all(&header_bytes)?;
    out.write_all(&blob_bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TagSet;
    use tempfile::NamedTempFile;

    #[test]
    fn writes_a_file_with_one_node_block_and_one_way_block() {
        let file = NamedTempFile::new().unwrap();
        let mut writer = PbfWriter::create(file.path()).unwrap();
        writer.write_node(Node::new(1, 170_100_000, 620_050_000)).unwrap();
        writer.write_node(Node::new(2, 170_200_000, 620_060_000)).unwrap();

        let mut way_writer = writer.finish_nodes().unwrap();
        let mut tags = TagSet::new();
        tags.insert("highway".to_string(), "residential".to_string());
        way_writer.write_way(Way::new(1, vec![1, 2], tags)).unwrap();
        way_writer.finish().unwrap();

        let bytes = std::fs::read(file.path()).unwrap();
        assert!(!bytes.is_empty());

        let header_len = u32::from_be_bytes(bytes[0..4].try_into().unwrap()) as usize;
        let header = proto::BlobHeader::decode(&bytes[4..4 + header_len]).unwrap();
        assert_eq!(header.r#type, "OSMHeader");
    }

    #[test]
    fn large_node_batch_splits_across_blocks() {
        let file = NamedTempFile::new().unwrap();
        let mut writer = PbfWriter::create(file.path()).unwrap();
        for i in 0..(MAX_NODES_PER_BLOCK as i64 + 10) {
            writer.write_node(Node::new(i + 1, 170_000_000 + i, 620_000_000 + i)).unwrap();
        }
        let way_writer = writer.finish_nodes().unwrap();
        way_writer.finish().unwrap();

        let bytes = std::fs::read(file.path()).unwrap();
        let mut blob_count = 0;
        let mut offset = 0;
        while offset < bytes.len() {
            let header_len = u32::from_be_bytes(bytes[offset..offset + 4].try_into().unwrap()) as usize;
            offset += 4;
            let header = proto::BlobHeader::decode(&bytes[offset..offset + header_len]).unwrap();
            offset += header_len;
            offset += header.datasize as usize;
            blob_count += 1;
        }
        assert_eq!(blob_count, 3);
    }
}
