use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("invalid conversion configuration: {0}")]
    ConfigurationError(String),
    #[error("failure decoding WKB geometry: {0}")]
    InvalidWkb(String),
    #[error("geometry is not a supported linestring: {0}")]
    UnsupportedGeometry(String),
    #[error("failure simplifying ways: {0}")]
    WaySimplificationError(String),
    #[error("failure writing PBF output: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
    #[error("way '{0}' references node '{1}' not present in this run")]
    DanglingNodeReference(i64, i64),
    #[error("node or way ids are not strictly increasing: saw {0} after {1}")]
    NonMonotonicId(i64, i64),
    #[error("{0}")]
    InternalError(String),
}
