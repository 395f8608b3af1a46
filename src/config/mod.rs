mod convert_configuration;

pub use convert_configuration::ConvertConfiguration;
