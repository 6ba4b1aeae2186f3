//! Field rules for plugin descriptors.
//!
//! Plugin ids are lowercase ASCII alphanumeric segments joined by a single
//! `.` or `-`, so `indra`, `indra.checkstyle` and `indra.license-header` are
//! accepted while `Indra`, `.indra`, `indra..git` and `indra-` are not. Every
//! other string field only has to be non-blank.
use crate::descriptor::{DescriptorField, PluginDescriptor};
use crate::registry::RegistryError;

/// Check that `id` follows the plugin identifier grammar
pub fn is_valid_id(id: &str) -> bool {
    let mut previous: Option<char> = None;
    for c in id.chars() {
        match c {
            'a'..='z' | '0'..='9' => {}
            '.' | '-' => match previous {
                // Separators may not lead or repeat
                None | Some('.') | Some('-') => return false,
                Some(_) => {}
            },
            _ => return false,
        }
        previous = Some(c);
    }
    matches!(previous, Some(c) if c.is_ascii_alphanumeric())
}

fn invalid(field: DescriptorField, value: &str, reason: impl Into<String>) -> RegistryError {
    RegistryError::Validation {
        field,
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn require_text(field: DescriptorField, value: &str) -> Result<(), RegistryError> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "must not be empty"));
    }
    Ok(())
}

/// Validate the identifier field alone
pub fn validate_id(id: &str) -> Result<(), RegistryError> {
    require_text(DescriptorField::Id, id)?;
    if !is_valid_id(id) {
        return Err(invalid(
            DescriptorField::Id,
            id,
            "must be lowercase alphanumeric segments separated by '.' or '-'",
        ));
    }
    Ok(())
}

/// Validate the tag list: at least one tag, none blank
pub fn validate_tags(tags: &[String]) -> Result<(), RegistryError> {
    if tags.is_empty() {
        return Err(invalid(DescriptorField::Tags, "", "at least one tag is required"));
    }
    if let Some(position) = tags.iter().position(|tag| tag.trim().is_empty()) {
        return Err(invalid(
            DescriptorField::Tags,
            &tags[position],
            format!("tag at position {} is empty", position),
        ));
    }
    Ok(())
}

/// Validate all fields in declaration order; the first failure is returned
pub fn validate_descriptor(descriptor: &PluginDescriptor) -> Result<(), RegistryError> {
    validate_id(&descriptor.id)?;
    require_text(DescriptorField::ImplementationRef, &descriptor.implementation_ref)?;
    require_text(DescriptorField::DisplayName, &descriptor.display_name)?;
    require_text(DescriptorField::Description, &descriptor.description)?;
    validate_tags(&descriptor.tags)
}
