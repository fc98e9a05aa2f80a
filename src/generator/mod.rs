//! # Generator Module
//!
//! The generator module creates complete JVM REST starter projects from the
//! templates shipped with the binary.
//!
//! ## Overview
//!
//! Given project coordinates and a source language, the generator produces a
//! runnable starter, including:
//! - **Build file** - `pom.xml` or `build.gradle` with the project coordinates
//! - **Resource class** - a minimal REST resource in Java or Kotlin
//! - **Tests** - a resource test plus a native-image variant of it
//! - **Configuration** - `application.properties` seeded from the defaults file
//!
//! ## Architecture
//!
//! ```text
//! Coordinates + SourceType → Template Paths → Template Rendering → Project Tree
//! ```
//!
//! 1. **SourceType** - computes source directories, template paths, and the
//!    file extension from the selected language
//! 2. **TemplateStore** - embedded templates keyed by those exact paths
//! 3. **Project generation** - renders each template and writes the tree
//!
//! ## Generated Structure
//!
//! A generated Java/Maven project has this structure:
//!
//! ```text
//! my-app/
//! ├── pom.xml
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
//!
//! ## Usage
//!
//! ### CLI Usage
//!
//! ```bash
//! cargo run --bin restforge-gen -- new \
//!     --group-id org.acme \
//!     --artifact-id my-app
//! ```
//!
//! ### Programmatic Usage
//!
//! ```rust,ignore
//! use restforge::generator::{generate_project, ProjectConfig};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ProjectConfig::new("org.acme", "my-app");
//! generate_project(&config, Path::new("."), false)?;
//! # Ok(())
//! # }
//! ```

mod project;
mod project_config;
mod source_type;
mod templates;
#[cfg(test)]
mod tests;

pub use project::*;
pub use project_config::*;
pub use source_type::*;
pub use templates::*;
