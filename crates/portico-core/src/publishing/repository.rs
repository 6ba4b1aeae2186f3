use std::collections::HashMap;

use log::info;
use serde::{Deserialize, Serialize};

use crate::constants::{FORCE_SIGN_PROPERTY, PASSWORD_PROPERTY_SUFFIX, USERNAME_PROPERTY_SUFFIX};
use crate::publishing::error::PublishingError;
use crate::publishing::project::ProjectCoordinates;

fn accepts_releases() -> bool {
    true
}

/// A remote Maven repository a publication may be uploaded to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepository {
    pub name: String,
    pub url: String,
    /// Accepts release versions
    #[serde(default = "accepts_releases")]
    pub releases: bool,
    /// Accepts snapshot versions
    #[serde(default)]
    pub snapshots: bool,
}

impl RemoteRepository {
    pub fn new(name: &str, url: &str, releases: bool, snapshots: bool) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            releases,
            snapshots,
        }
    }

    /// Property names holding this repository's credentials
    pub fn credential_properties(&self) -> (String, String) {
        (
            format!("{}{}", self.name, USERNAME_PROPERTY_SUFFIX),
            format!("{}{}", self.name, PASSWORD_PROPERTY_SUFFIX),
        )
    }
}

/// Key/value properties supplied by the driver (`-P key=value`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishProperties {
    values: HashMap<String, String>,
}

impl PublishProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: &str) -> &mut Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Parse and insert a `key=value` assignment. A bare `key` is stored with
    /// an empty value, which is enough for presence flags like `forceSign`.
    pub fn insert_assignment(&mut self, assignment: &str) -> Result<&mut Self, PublishingError> {
        let (key, value) = assignment.split_once('=').unwrap_or((assignment, ""));
        if key.trim().is_empty() {
            return Err(PublishingError::MalformedProperty(assignment.to_string()));
        }
        Ok(self.insert(key.trim(), value))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

/// Repositories that should receive the publication.
///
/// A repository qualifies only when both credential properties are present
/// and it accepts the project's current state (release or snapshot).
pub fn publish_targets<'a>(
    repositories: &'a [RemoteRepository],
    project: &ProjectCoordinates,
    properties: &PublishProperties,
) -> Vec<&'a RemoteRepository> {
    repositories
        .iter()
        .filter(|repository| can_publish_to(repository, project, properties))
        .collect()
}

fn can_publish_to(
    repository: &RemoteRepository,
    project: &ProjectCoordinates,
    properties: &PublishProperties,
) -> bool {
    let (username, password) = repository.credential_properties();
    if !properties.contains(&username) || !properties.contains(&password) {
        info!(
            "Skipping repository {} because username or password was not set",
            repository.name
        );
        return false;
    }

    if repository.releases && project.is_release() {
        info!(
            "Adding repository {} because it accepts releases and {} is a release",
            repository.name, project.version
        );
        return true;
    }
    if repository.snapshots && project.is_snapshot() {
        info!(
            "Adding repository {} because it accepts snapshots and {} is a snapshot",
            repository.name, project.version
        );
        return true;
    }

    info!(
        "Skipping repository {} because release/snapshot constraint not met",
        repository.name
    );
    false
}

/// Releases are always signed; snapshots only when `forceSign` is set
pub fn signing_required(project: &ProjectCoordinates, properties: &PublishProperties) -> bool {
    properties.contains(FORCE_SIGN_PROPERTY) || project.is_release()
}
