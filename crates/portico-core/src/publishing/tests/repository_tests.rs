// crates/portico-core/src/publishing/tests/repository_tests.rs
#![cfg(test)]

use crate::publishing::{
    publish_targets, signing_required, ProjectCoordinates, PublishProperties, PublishingError,
    RemoteRepository,
};

fn repositories() -> Vec<RemoteRepository> {
    vec![
        RemoteRepository::new("sonatypeReleases", "https://oss.sonatype.org/service/local/staging/deploy/maven2/", true, false),
        RemoteRepository::new("sonatypeSnapshots", "https://oss.sonatype.org/content/repositories/snapshots/", false, true),
        RemoteRepository::new("internal", "https://repo.example.com/maven/", true, true),
    ]
}

fn credentials_for(names: &[&str]) -> PublishProperties {
    let mut properties = PublishProperties::new();
    for name in names {
        properties.insert(&format!("{}Username", name), "user");
        properties.insert(&format!("{}Password", name), "secret");
    }
    properties
}

fn names<'a>(targets: &[&'a RemoteRepository]) -> Vec<&'a str> {
    targets.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_credential_property_names() {
    let repository = RemoteRepository::new("sonatypeSnapshots", "https://example.com", false, true);
    assert_eq!(
        repository.credential_properties(),
        ("sonatypeSnapshotsUsername".to_string(), "sonatypeSnapshotsPassword".to_string())
    );
}

#[test]
fn test_snapshot_targets_snapshot_repositories() {
    let project = ProjectCoordinates::parse("net.kyori", "indra", "1.4.0-SNAPSHOT", None).unwrap();
    let repositories = repositories();
    let properties = credentials_for(&["sonatypeReleases", "sonatypeSnapshots", "internal"]);
    let targets = publish_targets(&repositories, &project, &properties);
    assert_eq!(names(&targets), vec!["sonatypeSnapshots", "internal"]);
}

#[test]
fn test_release_targets_release_repositories() {
    let project = ProjectCoordinates::parse("net.kyori", "indra", "1.4.0", None).unwrap();
    let repositories = repositories();
    let properties = credentials_for(&["sonatypeReleases", "sonatypeSnapshots", "internal"]);
    let targets = publish_targets(&repositories, &project, &properties);
    assert_eq!(names(&targets), vec!["sonatypeReleases", "internal"]);
}

#[test]
fn test_missing_credentials_skip_repository() {
    let project = ProjectCoordinates::parse("net.kyori", "indra", "1.4.0", None).unwrap();
    let repositories = repositories();
    let mut properties = credentials_for(&["internal"]);
    // Username without password is not enough
    properties.insert("sonatypeReleasesUsername", "user");
    let targets = publish_targets(&repositories, &project, &properties);
    assert_eq!(names(&targets), vec!["internal"]);
}

#[test]
fn test_signing_rules() {
    let snapshot = ProjectCoordinates::parse("net.kyori", "indra", "1.4.0-SNAPSHOT", None).unwrap();
    let release = ProjectCoordinates::parse("net.kyori", "indra", "1.4.0", None).unwrap();
    let mut properties = PublishProperties::new();

    assert!(signing_required(&release, &properties));
    assert!(!signing_required(&snapshot, &properties));

    properties.insert_assignment("forceSign").unwrap();
    assert!(signing_required(&snapshot, &properties));
}

#[test]
fn test_property_assignments() {
    let mut properties = PublishProperties::new();
    properties.insert_assignment("internalUsername=deploy").unwrap();
    properties.insert_assignment("token=a=b").unwrap();
    assert_eq!(properties.get("internalUsername"), Some("deploy"));
    assert_eq!(properties.get("token"), Some("a=b"));

    assert!(matches!(
        properties.insert_assignment("=value"),
        Err(PublishingError::MalformedProperty(_))
    ));
}
