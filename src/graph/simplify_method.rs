use std::str::FromStr;

use crate::model::{ConvertError, WayKey};

/// the active way-join policy (§4.3's three columns). controls which
/// fields of [`WayKey`] participate in the join key and whether endpoint
/// coincidence alone is sufficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimplifyMethod {
    #[default]
    Refname,
    Connected,
    Route,
}

impl FromStr for SimplifyMethod {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "refname" => Ok(SimplifyMethod::Refname),
            "connected" => Ok(SimplifyMethod::Connected),
            "route" => Ok(SimplifyMethod::Route),
            other => Err(ConvertError::ConfigurationError(format!(
                "unknown simplify_method '{other}', expected one of refname, connected, route"
            ))),
        }
    }
}

/// the part of a [`WayKey`] that two consecutive segments must agree on to
/// be join candidates under the active policy (§4.3's join-condition
/// table). tag fingerprint is always part of it except under `route`,
/// where tags need not match at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JoinKey {
    Refname {
        highway: Option<String>,
        ref_: Option<String>,
        name: Option<String>,
        fingerprint: u64,
    },
    Connected {
        ref_: Option<String>,
        name: Option<String>,
        fingerprint: u64,
    },
    Route {
        route_id: Option<String>,
    },
}

impl SimplifyMethod {
    /// derives the join key a way key participates under for this policy.
    pub fn join_key(&self, way_key: &WayKey) -> JoinKey {
        match self {
            SimplifyMethod::Refname => JoinKey::Refname {
                highway: way_key.highway.clone(),
                ref_: way_key.ref_.clone(),
                name: way_key.name.clone(),
                fingerprint: way_key.tag_fingerprint.0,
            },
            SimplifyMethod::Connected => JoinKey::Connected {
                ref_: way_key.ref_.clone(),
                name: way_key.name.clone(),
                fingerprint: way_key.tag_fingerprint.0,
            },
            SimplifyMethod::Route => JoinKey::Route {
                route_id: way_key.route_id.clone(),
            },
        }
    }
}
