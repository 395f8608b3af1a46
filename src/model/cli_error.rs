use super::ConvertError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure converting NVDB segments to OSM PBF: {source}")]
    ConvertError {
        #[from]
        source: ConvertError,
    },
    #[error("failure reading input file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure decoding TOML: {source}")]
    TomlError {
        #[from]
        source: toml::de::Error,
    },
    #[error("failure decoding input row {0}: {1}")]
    RowDecodeError(u64, String),
}
