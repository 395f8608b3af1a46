use serde::{Deserialize, Serialize};

use crate::graph::SimplifyMethod;
use crate::model::CliError;

/// defines behaviors for a conversion run (§6).
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ConvertConfiguration {
    pub simplify_method: String,
    pub node_id_start: i64,
    pub way_id_start: i64,
}

impl Default for ConvertConfiguration {
    fn default() -> Self {
        Self {
            simplify_method: "refname".to_string(),
            node_id_start: 1,
            way_id_start: 1,
        }
    }
}

impl ConvertConfiguration {
    pub fn parsed_simplify_method(&self) -> Result<SimplifyMethod, CliError> {
        self.simplify_method
            .parse()
            .map_err(|e: crate::model::ConvertError| CliError::ConfigurationError(e.to_string()))
    }
}

impl TryFrom<&String> for ConvertConfiguration {
    type Error = CliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| CliError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            toml::from_str(&s).map_err(|e| CliError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| CliError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            serde_json::from_str(&s).map_err(|e| CliError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else {
            Err(CliError::ConfigurationError(format!("unsupported file type: {f}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_refname_policy() {
        let conf = ConvertConfiguration::default();
        assert_eq!(conf.parsed_simplify_method().unwrap(), SimplifyMethod::Refname);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = ConvertConfiguration::try_from(&"config.yaml".to_string()).unwrap_err();
        assert!(matches!(err, CliError::ConfigurationError(_)));
    }
}
