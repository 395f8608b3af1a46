//! Build script for compiling the vendored OSM PBF protobuf definitions.
//!
//! Runs at compile time to generate Rust types from `proto/fileformat.proto`
//! and `proto/osmformat.proto` using prost-build, so the encoder works with
//! plain structs instead of hand-rolled wire-format writers.

fn main() {
    let mut config = prost_build::Config::new();
    config
        .compile_protos(
            &["proto/fileformat.proto", "proto/osmformat.proto"],
            &["proto/"],
        )
        .expect("failed to compile OSM PBF proto definitions");
}
