// Common validation utilities for regfix CLI commands

use regex::Regex;

use crate::utils::error::{HarnessError, Result};

/// Validate a workspace name passed to `ng new`.
///
/// The framework CLI rejects anything that is not a valid npm-style project
/// name, so catch the obvious cases before spawning a process.
pub fn validate_workspace_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(HarnessError::ValidationError(
            "Workspace name cannot be empty.\n\nUsage: regfix scaffold new <workspace-name>"
                .to_string(),
        ));
    }

    // Mirrors the framework's project-name rules: leading letter, then
    // letters, digits and hyphens.
    let pattern = Regex::new(r"^[a-zA-Z][a-zA-Z0-9-]*$").map_err(|e| {
        HarnessError::ValidationError(format!("internal pattern error: {}", e))
    })?;

    if !pattern.is_match(name) {
        return Err(HarnessError::ValidationError(format!(
            "Invalid workspace name '{}'.\n\nWorkspace names must start with a letter and contain only letters, digits and hyphens:\n  ✓ my-workspace\n  ✗ 1st-workspace\n  ✗ my workspace",
            name
        )));
    }

    Ok(())
}

/// Validate a version string used for locally published packages
pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(HarnessError::ValidationError(
            "Version cannot be empty.\n\nExample: 9999.0.1-local-integration-tests".to_string(),
        ));
    }

    if version.contains(char::is_whitespace) {
        return Err(HarnessError::ValidationError(format!(
            "Invalid version '{}' - cannot contain whitespace.",
            version
        )));
    }

    Ok(())
}

/// Validate a local-registry target identifier (`<scope>:<name>:local-registry`)
pub fn validate_registry_target(target: &str) -> Result<()> {
    let pattern = Regex::new(r"^\S+:local-registry$").map_err(|e| {
        HarnessError::ValidationError(format!("internal pattern error: {}", e))
    })?;

    if !pattern.is_match(target) {
        return Err(HarnessError::ValidationError(format!(
            "Invalid registry target '{}'.\n\nExpected the form <scope>:<name>:local-registry, e.g. @angular-eslint/angular-eslint:local-registry",
            target
        )));
    }

    Ok(())
}
