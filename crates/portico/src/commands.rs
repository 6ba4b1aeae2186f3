use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use portico_core::publishing::{publish_targets, signing_required};
use portico_core::{BuildDefinition, ConfigFormat, DescriptorRegistry, ProjectCoordinates, PublishProperties};

use crate::error::{CliError, Result};
use crate::manifest::PublicationManifest;

/// A fully configured, frozen view of one build definition
pub struct Session {
    definition: BuildDefinition,
    project: ProjectCoordinates,
    registry: DescriptorRegistry,
    properties: PublishProperties,
}

impl Session {
    /// Load the definition, register every plugin and freeze the registry
    pub fn open(path: &Path, assignments: &[String]) -> Result<Self> {
        let definition = BuildDefinition::load(path)?;
        let project = definition.coordinates()?;

        let mut registry = DescriptorRegistry::new();
        definition.configure(&mut registry)?;
        registry.freeze();

        let mut properties = PublishProperties::new();
        for assignment in assignments {
            properties
                .insert_assignment(assignment)
                .map_err(portico_core::Error::from)?;
        }

        Ok(Self {
            definition,
            project,
            registry,
            properties,
        })
    }

    pub fn check(&self) -> Result<()> {
        let state = if self.project.is_snapshot() { "snapshot" } else { "release" };
        println!(
            "OK: {} ({}), {} plugin(s), {} tag(s)",
            self.project,
            state,
            self.registry.len(),
            self.registry.tags().len()
        );
        Ok(())
    }

    pub fn list(&self, tag: Option<&str>) -> Result<()> {
        let descriptors = match tag {
            Some(tag) => self.registry.by_tag(tag),
            None => self.registry.all().iter().collect(),
        };
        if descriptors.is_empty() {
            match tag {
                Some(tag) => println!("No plugins tagged '{}'", tag),
                None => println!("No plugins registered"),
            }
        }
        for descriptor in descriptors {
            println!("{}", descriptor);
        }
        Ok(())
    }

    pub fn show(&self, id: &str) -> Result<()> {
        let descriptor = self
            .registry
            .get(id)
            .ok_or_else(|| CliError::UnknownPlugin(id.to_string()))?;
        let rendered = ConfigFormat::Json
            .render(descriptor)
            .map_err(portico_core::Error::from)?;
        println!("{}", rendered);
        Ok(())
    }

    pub fn tags(&self) -> Result<()> {
        for tag in self.registry.tags() {
            let ids: Vec<&str> = self
                .registry
                .by_tag(tag)
                .iter()
                .map(|d| d.id.as_str())
                .collect();
            println!("{}: {}", tag, ids.join(", "));
        }
        Ok(())
    }

    pub fn manifest(&self, format: &str, output: Option<&PathBuf>) -> Result<()> {
        let format = ConfigFormat::from_name(format).ok_or_else(|| CliError::UnknownFormat(format.to_string()))?;
        let manifest = PublicationManifest::new(&self.definition, self.project.clone(), &self.registry);
        let rendered = format.render(&manifest).map_err(portico_core::Error::from)?;

        match output {
            Some(path) => {
                fs::write(path, rendered).map_err(|source| CliError::Output {
                    path: path.clone(),
                    source,
                })?;
                info!("Wrote {} manifest to {}", format, path.display());
            }
            None => println!("{}", rendered),
        }
        Ok(())
    }

    pub fn targets(&self) -> Result<()> {
        let targets = publish_targets(&self.definition.repositories, &self.project, &self.properties);
        let signing = if signing_required(&self.project, &self.properties) {
            "required"
        } else {
            "skipped"
        };
        println!("Signing: {}", signing);
        if targets.is_empty() {
            println!("No repositories eligible for publication");
        }
        for repository in targets {
            println!("{} {}", repository.name, repository.url);
        }
        Ok(())
    }
}
