use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

const SRC_DIR_PREFIX: &str = "src/main/";
const TEST_SRC_DIR_PREFIX: &str = "src/test/";

/// Source language of a generated project
///
/// Each variant carries the file extension its compiler expects and derives
/// every path the generator needs (source directories, template paths) from
/// its own lowercased name. All methods are pure string computations over a
/// fixed pattern; nothing here touches the filesystem or validates inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Java sources (`.java`) under `src/main/java`
    Java,
    /// Kotlin sources (`.kt`) under `src/main/kotlin`
    Kotlin,
}

impl SourceType {
    /// Main source directory relative to the project root (e.g. `src/main/java`)
    pub fn source_dir(&self) -> String {
        format!("{SRC_DIR_PREFIX}{}", self.path_segment())
    }

    /// Test source directory relative to the project root (e.g. `src/test/java`)
    pub fn test_source_dir(&self) -> String {
        format!("{TEST_SRC_DIR_PREFIX}{}", self.path_segment())
    }

    /// Template path for a build file
    ///
    /// For example `build_file_template("basic-rest", "pom.xml")` resolves to
    /// `templates/basic-rest/java/pom.xml-template.ftl` for Java.
    pub fn build_file_template(&self, template_name: &str, build_file: &str) -> String {
        self.template_file(template_name, build_file)
    }

    /// Template path for the resource class
    pub fn resource_template(&self, template_name: &str) -> String {
        self.template_file(template_name, "resource")
    }

    /// Template path for the resource test class
    pub fn test_resource_template(&self, template_name: &str) -> String {
        self.template_file(template_name, "test-resource")
    }

    /// Template path for the native-image resource test class
    pub fn native_test_resource_template(&self, template_name: &str) -> String {
        self.template_file(template_name, "native-test-resource")
    }

    /// File extension for this language, leading dot included
    pub fn extension(&self) -> &'static str {
        match self {
            SourceType::Java => ".java",
            SourceType::Kotlin => ".kt",
        }
    }

    /// Remove this language's extension from `name` if present
    ///
    /// Best-effort normalization for user-supplied class names: a name
    /// without the extension (or with a different one) is returned unchanged.
    pub fn strip_extension<'a>(&self, name: &'a str) -> &'a str {
        name.strip_suffix(self.extension()).unwrap_or(name)
    }

    // Lowercased language name; the path segment in every derived path.
    fn path_segment(&self) -> &'static str {
        match self {
            SourceType::Java => "java",
            SourceType::Kotlin => "kotlin",
        }
    }

    // Every template path shares one layout; only the file stem differs
    // ("resource", "test-resource", "native-test-resource", or a build file name).
    fn template_file(&self, template_name: &str, stem: &str) -> String {
        format!(
            "templates/{template_name}/{}/{stem}-template.ftl",
            self.path_segment()
        )
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}
