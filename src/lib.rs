//! # restforge
//!
//! **restforge** is a template-driven scaffolding tool that generates runnable
//! JVM REST starter projects in Java or Kotlin.
//!
//! ## Overview
//!
//! restforge takes project coordinates (group id, artifact id, version), a
//! resource class name and path, a source language, and a build file, then
//! renders the embedded templates and writes a complete project tree. The
//! generated project builds with Maven or Gradle and serves a single REST
//! endpoint with a test and a native-image variant of it.
//!
//! ## Architecture
//!
//! The library is organized into two modules:
//!
//! - **[`generator`]** - source-language path resolution, the embedded
//!   template store, project configuration, and project generation
//! - **[`cli`]** - the `restforge-gen` command-line interface
//!
//! ### Generation Flow
//!
//! ```text
//! CLI args + restforge.toml → ProjectConfig
//!                                  │
//!                   SourceType computes template paths
//!                                  │
//!                  TemplateStore renders embedded templates
//!                                  │
//!                     generate_project writes the tree
//! ```
//!
//! Template paths are computed, not discovered: the selected [`SourceType`]
//! derives every path from its own lowercased name
//! (`templates/basic-rest/java/resource-template.ftl`, `src/main/java`, ...),
//! and the [`TemplateStore`] registers the embedded templates under exactly
//! those strings. Adding a language means adding a variant and its templates;
//! no lookup tables to keep in sync.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use restforge::{generate_project, ProjectConfig, SourceType};
//! use std::path::Path;
//!
//! let mut config = ProjectConfig::new("org.acme", "my-app");
//! config.source_type = SourceType::Kotlin;
//! let project_dir = generate_project(&config, Path::new("."), false)?;
//! println!("created {project_dir:?}");
//! ```
//!
//! ## Generated Structure
//!
//! ```text
//! my-app/
//! ├── pom.xml                 # or build.gradle
//! ├── .gitignore
//! └── src/
//!     ├── main/
//!     │   ├── java/org/acme/GreetingResource.java
//!     │   └── resources/application.properties
//!     └── test/
//!         └── java/org/acme/
//!             ├── GreetingResourceTest.java
//!             └── NativeGreetingResourceIT.java
//! ```

pub mod cli;
pub mod generator;

pub use generator::{
    generate_project, load_project_defaults, ProjectConfig, ProjectDefaults, SourceType,
    TemplateStore,
};
