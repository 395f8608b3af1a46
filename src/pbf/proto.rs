//! generated prost types for the vendored OSM PBF schema (`proto/`).
#![allow(clippy::all)]

include!(concat!(env!("OUT_DIR"), "/osmpbf.rs"));
