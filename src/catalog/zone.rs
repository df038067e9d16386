//! Zone links and the identifiers derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix of the final path segment of every zone link.
pub const ZONE_SUFFIX: &str = ".zone";

/// URL of one downloadable zone file, as returned by the link listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneLink(String);

impl ZoneLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last non-empty path segment, query and fragment excluded.
    pub fn final_segment(&self) -> &str {
        let path = self.0.split(['?', '#']).next().unwrap_or_default();
        path.rsplit('/').find(|s| !s.is_empty()).unwrap_or_default()
    }

    /// The approved identifier: the final segment without [`ZONE_SUFFIX`].
    ///
    /// `https://x/czds/downloads/com.zone` yields `com`.
    pub fn identifier(&self) -> &str {
        let segment = self.final_segment();
        segment.strip_suffix(ZONE_SUFFIX).unwrap_or(segment)
    }

    /// Whether this link is the zone file of `identifier`.
    ///
    /// The final segment must equal `<identifier>.zone`, ignoring ASCII case;
    /// `com` does not match `xcom.zone`.
    pub fn matches(&self, identifier: &str) -> bool {
        let segment = self.final_segment();
        segment.len() == identifier.len() + ZONE_SUFFIX.len()
            && segment
                .get(..identifier.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(identifier))
            && segment.ends_with(ZONE_SUFFIX)
    }
}

impl fmt::Display for ZoneLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ZoneLink {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for ZoneLink {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}
