use serde::{Deserialize, Serialize};

use crate::descriptor::dedup_tags;
use crate::publishing::project::ProjectCoordinates;

/// Plugin-portal metadata shared by every plugin of a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcs_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl PluginBundle {
    /// Drop repeated bundle tags, keeping first occurrences
    pub fn normalized(mut self) -> Self {
        self.tags = dedup_tags(std::mem::take(&mut self.tags));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `repo` or `manual`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,
}

/// Source control coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scm {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_connection: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiManagement {
    pub system: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueManagement {
    pub system: String,
    pub url: String,
}

/// Maven POM metadata attached to every publication
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub developers: Vec<Developer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<License>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm: Option<Scm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci: Option<CiManagement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<IssueManagement>,
}

impl PomMetadata {
    /// Fill `name`, `description` and `url` where the definition left them out.
    ///
    /// `name` comes from the project, `description` from the bundle and then
    /// the project, `url` from the bundle's VCS url and then the SCM url.
    pub fn resolved(&self, project: &ProjectCoordinates, bundle: Option<&PluginBundle>) -> Self {
        let mut pom = self.clone();
        pom.name.get_or_insert_with(|| project.name.clone());
        if pom.description.is_none() {
            pom.description = bundle
                .and_then(|b| b.description.clone())
                .or_else(|| project.description.clone());
        }
        if pom.url.is_none() {
            pom.url = bundle
                .and_then(|b| b.vcs_url.clone())
                .or_else(|| pom.scm.as_ref().map(|scm| scm.url.clone()));
        }
        pom
    }
}
