use std::fmt;

use semver::Version;
use serde::Serialize;

use crate::constants::SNAPSHOT_MARKER;
use crate::publishing::error::PublishingError;

/// Identity of the project whose plugins are being published
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCoordinates {
    pub group: String,
    pub name: String,
    pub version: Version,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectCoordinates {
    /// Build coordinates from raw strings, parsing `version` as semver
    pub fn parse(
        group: &str,
        name: &str,
        version: &str,
        description: Option<&str>,
    ) -> Result<Self, PublishingError> {
        for (field, value) in [("group", group), ("name", name)] {
            if value.trim().is_empty() {
                return Err(PublishingError::EmptyField { field: field.to_string() });
            }
        }
        let version = Version::parse(version.trim()).map_err(|source| PublishingError::InvalidVersion {
            value: version.to_string(),
            source,
        })?;
        Ok(Self {
            group: group.to_string(),
            name: name.to_string(),
            version,
            description: description.map(str::to_string),
        })
    }

    /// Snapshot builds carry a `SNAPSHOT` pre-release identifier at the end
    /// (`1.4.0-SNAPSHOT`, `2.0.0-rc.1-SNAPSHOT`); `1.0.0-NOSNAPSHOT` is not one
    pub fn is_snapshot(&self) -> bool {
        let pre = self.version.pre.as_str();
        match pre.strip_suffix(SNAPSHOT_MARKER) {
            Some(rest) => rest.is_empty() || rest.ends_with('.') || rest.ends_with('-'),
            None => false,
        }
    }

    pub fn is_release(&self) -> bool {
        !self.is_snapshot()
    }
}

impl fmt::Display for ProjectCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}
