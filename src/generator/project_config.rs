//! Project coordinates and the optional `restforge.toml` defaults file
//!
//! The defaults file sits in the output directory (or wherever `--config`
//! points) and fills in fields the caller left off the command line. Its
//! `[properties]` table is passed through to every template verbatim.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::source_type::SourceType;
use super::templates::BASIC_REST_TEMPLATE;

/// File name of the defaults file auto-detected in the output directory
pub const DEFAULTS_FILE_NAME: &str = "restforge.toml";

/// Group id used when neither the command line nor the defaults file has one
pub const DEFAULT_GROUP_ID: &str = "org.acme";
/// Version used when neither the command line nor the defaults file has one
pub const DEFAULT_VERSION: &str = "1.0.0-SNAPSHOT";
/// Build file written when none is requested
pub const DEFAULT_BUILD_FILE: &str = "pom.xml";
/// Resource path of the generated REST endpoint when none is requested
pub const DEFAULT_RESOURCE_PATH: &str = "/hello";
/// Resource class generated when no class name is requested
pub const DEFAULT_CLASS_NAME: &str = "GreetingResource";

/// Everything the generator needs to know about the project being created
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Group id; doubles as the package of the generated classes
    pub group_id: String,
    /// Artifact id; doubles as the project directory name
    pub artifact_id: String,
    /// Project version
    pub version: String,
    /// Source language of the generated project
    pub source_type: SourceType,
    /// Build file to generate (e.g. `pom.xml`, `build.gradle`)
    pub build_file: String,
    /// Template set to render
    pub template_name: String,
    /// Resource class name as supplied; may still carry a language extension
    pub class_name: Option<String>,
    /// HTTP path of the generated resource
    pub resource_path: Option<String>,
    /// Free-form values passed through to every template
    pub properties: BTreeMap<String, String>,
}

impl ProjectConfig {
    /// Config with built-in defaults for everything but the coordinates
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: DEFAULT_VERSION.to_string(),
            source_type: SourceType::Java,
            build_file: DEFAULT_BUILD_FILE.to_string(),
            template_name: BASIC_REST_TEMPLATE.to_string(),
            class_name: None,
            resource_path: None,
            properties: BTreeMap::new(),
        }
    }

    /// Resource class name with any language extension stripped
    ///
    /// Users pass things like `GreetingResource.java`; the generated class
    /// must not carry the suffix.
    pub fn class_name(&self) -> String {
        let raw = self.class_name.as_deref().unwrap_or(DEFAULT_CLASS_NAME);
        self.source_type.strip_extension(raw).to_string()
    }

    /// HTTP path of the generated resource
    pub fn resource_path(&self) -> &str {
        self.resource_path.as_deref().unwrap_or(DEFAULT_RESOURCE_PATH)
    }

    /// Package directory relative to a source root (dots become separators)
    pub fn package_dir(&self) -> PathBuf {
        self.group_id.split('.').collect()
    }
}

/// Defaults loaded from a `restforge.toml` file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDefaults {
    /// Field-level defaults applied when the command line leaves them unset
    #[serde(default)]
    pub defaults: DefaultsSection,
    /// Free-form values passed through to every template
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

/// The `[defaults]` table of a `restforge.toml` file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsSection {
    pub group_id: Option<String>,
    pub version: Option<String>,
    pub source_type: Option<SourceType>,
    pub build_file: Option<String>,
    pub resource_path: Option<String>,
}

/// Load a defaults file
///
/// # Returns
///
/// `Ok(Some(defaults))` if the file exists and parses,
/// `Ok(None)` if it doesn't exist (not an error),
/// `Err` if it exists but can't be read or parsed.
pub fn load_project_defaults(path: &Path) -> anyhow::Result<Option<ProjectDefaults>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read defaults file: {}", path.display()))?;
    let defaults: ProjectDefaults = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse defaults file: {}", path.display()))?;

    debug!(path = %path.display(), "loaded project defaults");
    Ok(Some(defaults))
}

/// Resolve the defaults file path
///
/// Priority:
/// 1. Explicitly provided path (via CLI)
/// 2. Auto-detected `restforge.toml` in the output directory
/// 3. None (no defaults file)
pub fn resolve_defaults_path(explicit_path: Option<&Path>, output_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let candidate = output_dir.join(DEFAULTS_FILE_NAME);
    if candidate.exists() {
        Some(candidate)
    } else {
        None
    }
}
