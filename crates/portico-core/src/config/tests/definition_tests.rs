// crates/portico-core/src/config/tests/definition_tests.rs
#![cfg(test)]

use std::fs;

use tempfile::tempdir;

use crate::config::{BuildDefinition, ConfigError, ConfigFormat};
use crate::descriptor::DescriptorField;
use crate::error::Error;
use crate::publishing::PublishingError;
use crate::registry::{DescriptorRegistry, RegistryError};

const INDRA_JSON: &str = r#"{
  "project": {
    "group": "net.kyori",
    "name": "indra-common",
    "version": "1.4.0-SNAPSHOT",
    "description": "KyoriPowered organizational build standards and utilities"
  },
  "bundle": {
    "website": "https://github.com/KyoriPowered/indra",
    "vcsUrl": "https://github.com/KyoriPowered/indra.git",
    "tags": ["kyori", "standard"]
  },
  "repositories": [
    { "name": "sonatypeSnapshots", "url": "https://oss.sonatype.org/content/repositories/snapshots/", "releases": false, "snapshots": true }
  ],
  "plugins": [
    {
      "id": "indra",
      "implementationRef": "net.kyori.indra.IndraPlugin",
      "displayName": "Indra",
      "description": "Simplified tools for configuring modern JVM projects",
      "tags": ["boilerplate", "java", "jvm"]
    },
    {
      "id": "indra.checkstyle",
      "implementation": "net.kyori.indra.IndraCheckstylePlugin",
      "displayName": "Indra Checkstyle",
      "description": "Checkstyle configuration in line with the Indra file layout",
      "tags": ["boilerplate", "checkstyle"]
    }
  ]
}"#;

#[test]
fn test_parse_json_definition() {
    let definition = BuildDefinition::parse(INDRA_JSON, ConfigFormat::Json).unwrap();
    assert_eq!(definition.project.group, "net.kyori");
    assert_eq!(definition.plugins.len(), 2);
    assert_eq!(definition.plugins[1].implementation_ref, "net.kyori.indra.IndraCheckstylePlugin");
    assert_eq!(definition.repositories[0].name, "sonatypeSnapshots");
    assert!(definition.repositories[0].snapshots);
    assert!(definition.coordinates().unwrap().is_snapshot());
}

#[test]
fn test_configure_registers_in_file_order() {
    let definition = BuildDefinition::parse(INDRA_JSON, ConfigFormat::Json).unwrap();
    let mut registry = DescriptorRegistry::new();
    definition.configure(&mut registry).unwrap();
    assert_eq!(registry.ids(), vec!["indra", "indra.checkstyle"]);
    assert!(!registry.is_frozen());
}

#[test]
fn test_configure_stops_at_invalid_plugin() {
    let mut definition = BuildDefinition::parse(INDRA_JSON, ConfigFormat::Json).unwrap();
    definition.plugins[0].display_name.clear();
    let mut registry = DescriptorRegistry::new();

    match definition.configure(&mut registry) {
        Err(Error::Registry(err)) => assert_eq!(err.field(), Some(DescriptorField::DisplayName)),
        other => panic!("Expected registry error, got {:?}", other),
    }
    assert!(registry.is_empty());
}

#[test]
fn test_configure_rejects_duplicate_plugin_ids() {
    let mut definition = BuildDefinition::parse(INDRA_JSON, ConfigFormat::Json).unwrap();
    let duplicate = definition.plugins[0].clone();
    definition.plugins.push(duplicate);
    let mut registry = DescriptorRegistry::new();

    let result = definition.configure(&mut registry);
    assert!(matches!(
        result,
        Err(Error::Registry(RegistryError::DuplicateId { ref id })) if id == "indra"
    ));
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_duplicate_repository_rejected() {
    let mut definition = BuildDefinition::parse(INDRA_JSON, ConfigFormat::Json).unwrap();
    let repository = definition.repositories[0].clone();
    definition.repositories.push(repository);
    let mut registry = DescriptorRegistry::new();

    assert!(matches!(
        definition.configure(&mut registry),
        Err(Error::Publishing(PublishingError::DuplicateRepository { .. }))
    ));
    assert!(registry.is_empty());
}

#[test]
fn test_load_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("portico.ini");
    fs::write(&path, "").unwrap();
    assert!(matches!(
        BuildDefinition::load(&path),
        Err(Error::Config(ConfigError::UnsupportedFormat(_)))
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");
    match BuildDefinition::load(&path) {
        Err(Error::Config(ConfigError::Io { path: reported, .. })) => assert_eq!(reported, path),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_load_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("portico.json");
    fs::write(&path, INDRA_JSON).unwrap();
    let definition = BuildDefinition::load(&path).unwrap();
    assert_eq!(definition.plugins[0].id, "indra");
}

#[cfg(feature = "toml-config")]
#[test]
fn test_load_toml_file() {
    let toml = r#"
[project]
group = "net.kyori"
name = "indra-common"
version = "1.4.0"

[[repositories]]
name = "sonatypeReleases"
url = "https://oss.sonatype.org/service/local/staging/deploy/maven2/"

[[plugins]]
id = "indra.publishing"
implementationRef = "net.kyori.indra.IndraPublishingPlugin"
displayName = "Indra Publishing"
description = "Reasonable publishing configuration and repository aliases"
tags = ["boilerplate", "publishing", "nexus"]
"#;
    let dir = tempdir().unwrap();
    let path = dir.path().join("portico.toml");
    fs::write(&path, toml).unwrap();

    let definition = BuildDefinition::load(&path).unwrap();
    assert!(definition.coordinates().unwrap().is_release());
    // Repositories accept releases unless told otherwise
    assert!(definition.repositories[0].releases);
    assert!(!definition.repositories[0].snapshots);
    assert_eq!(definition.plugins[0].tags, vec!["boilerplate", "publishing", "nexus"]);
}

#[cfg(feature = "yaml-config")]
#[test]
fn test_parse_yaml_definition() {
    let yaml = r#"
project:
  group: net.kyori
  name: indra-git
  version: 1.4.0-SNAPSHOT
plugins:
  - id: indra.git
    implementationRef: net.kyori.indra.git.GitPlugin
    displayName: Indra Git
    description: Git repository information for builds
    tags: [git]
"#;
    let definition = BuildDefinition::parse(yaml, ConfigFormat::Yaml).unwrap();
    assert_eq!(definition.plugins[0].id, "indra.git");
    assert!(definition.bundle.is_none());
}

#[test]
fn test_blank_repository_name_or_url_rejected() {
    let mut definition = BuildDefinition::parse(INDRA_JSON, ConfigFormat::Json).unwrap();
    definition.repositories[0].name = String::new();
    match definition.check_repositories() {
        Err(Error::Publishing(PublishingError::EmptyField { field })) => assert_eq!(field, "repositories.name"),
        other => panic!("Expected EmptyField, got {:?}", other),
    }

    let mut definition = BuildDefinition::parse(INDRA_JSON, ConfigFormat::Json).unwrap();
    definition.repositories[0].url = "  ".to_string();
    let mut registry = DescriptorRegistry::new();
    match definition.configure(&mut registry) {
        Err(Error::Publishing(PublishingError::EmptyField { field })) => assert_eq!(field, "repositories.url"),
        other => panic!("Expected EmptyField, got {:?}", other),
    }
    assert!(registry.is_empty());
}

#[test]
fn test_configure_leaves_version_parsing_to_coordinates() {
    let mut definition = BuildDefinition::parse(INDRA_JSON, ConfigFormat::Json).unwrap();
    definition.project.version = "not-a-version".to_string();

    let mut registry = DescriptorRegistry::new();
    definition.configure(&mut registry).unwrap();
    assert_eq!(registry.len(), 2);
    assert!(matches!(
        definition.coordinates(),
        Err(Error::Publishing(PublishingError::InvalidVersion { .. }))
    ));
}
