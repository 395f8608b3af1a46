use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a scalar value from a segment's property map. explicit tagged union,
/// per the "do not lean on a language's runtime dynamic typing" guidance:
/// callers coerce per-rule rather than matching on an untyped value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl Default for PropertyValue {
    fn default() -> Self {
        PropertyValue::Null
    }
}

impl PropertyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// interprets this value as a boolean flag. NVDB flag columns show up as
    /// `1`/`0`, `"1"`/`"0"`, or `true`/`false` depending on the upstream
    /// reader; treat them as equivalent.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            PropertyValue::Int(i) => Some(*i != 0),
            PropertyValue::Float(f) => Some(*f != 0.0),
            PropertyValue::Str(s) => match s.trim() {
                "1" | "true" | "True" | "TRUE" => Some(true),
                "0" | "false" | "False" | "FALSE" => Some(false),
                _ => None,
            },
            PropertyValue::Null => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Int(i) => Some(*i as f64),
            PropertyValue::Float(f) => Some(*f),
            PropertyValue::Str(s) => s.trim().parse::<f64>().ok(),
            PropertyValue::Bool(_) | PropertyValue::Null => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            PropertyValue::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            PropertyValue::Float(_) => None,
            PropertyValue::Str(s) => s.trim().parse::<i64>().ok(),
            PropertyValue::Bool(_) | PropertyValue::Null => None,
        }
    }

    /// interprets this value as a trimmed, non-empty string. returns `None`
    /// for null, empty, or whitespace-only values, matching the mapper's
    /// "emitted only if non-empty" rule.
    pub fn as_trimmed_str(&self) -> Option<String> {
        let s = match self {
            PropertyValue::Str(s) => s.trim().to_string(),
            PropertyValue::Int(i) => i.to_string(),
            PropertyValue::Float(f) if f.is_finite() => crate::tagging::numeric::canonical_decimal(*f),
            PropertyValue::Float(_) => return None,
            PropertyValue::Bool(b) => b.to_string(),
            PropertyValue::Null => return None,
        };
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    }
}

impl Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::Null => write!(f, "null"),
            PropertyValue::Int(i) => write!(f, "{i}"),
            PropertyValue::Float(x) => write!(f, "{x}"),
            PropertyValue::Bool(b) => write!(f, "{b}"),
            PropertyValue::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Str(value.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_coercion_treats_variants_as_equivalent() {
        assert_eq!(PropertyValue::from(1i64).as_flag(), Some(true));
        assert_eq!(PropertyValue::from("1").as_flag(), Some(true));
        assert_eq!(PropertyValue::from(true).as_flag(), Some(true));
        assert_eq!(PropertyValue::from(0i64).as_flag(), Some(false));
        assert_eq!(PropertyValue::Null.as_flag(), None);
    }

    #[test]
    fn malformed_numeric_string_yields_no_value() {
        assert_eq!(PropertyValue::from("not-a-number").as_f64(), None);
        assert_eq!(PropertyValue::from("not-a-number").as_trimmed_str(), Some("not-a-number".to_string()));
    }

    #[test]
    fn fractional_float_has_no_i64_representation() {
        assert_eq!(PropertyValue::from(3.5).as_i64(), None);
        assert_eq!(PropertyValue::from(3.0).as_i64(), Some(3));
    }

    #[test]
    fn empty_string_is_treated_as_absent() {
        assert_eq!(PropertyValue::from("   ").as_trimmed_str(), None);
    }

    #[test]
    fn non_finite_float_is_treated_as_absent() {
        assert_eq!(PropertyValue::from(f64::NAN).as_trimmed_str(), None);
        assert_eq!(PropertyValue::from(f64::INFINITY).as_trimmed_str(), None);
    }
}
