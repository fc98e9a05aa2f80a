//! # CLI Module
//!
//! The CLI module provides the command-line interface for the restforge
//! project generator.
//!
//! ## Commands
//!
//! ### `new`
//!
//! Create a new REST starter project:
//!
//! ```bash
//! restforge-gen new --group-id org.acme --artifact-id my-app
//! ```
//!
//! Options:
//! - `--artifact-id <ID>` - Artifact id and project directory name (required)
//! - `--group-id <ID>` - Group id / base package (default: `org.acme`)
//! - `--version <V>` - Project version (default: `1.0.0-SNAPSHOT`)
//! - `--class-name <N>` - Resource class name; a trailing language extension is stripped
//! - `--path </p>` - HTTP path of the generated resource (default: `/hello`)
//! - `--source-type <java|kotlin>` - Source language (default: `java`)
//! - `--build-file <F>` - Build file to generate (default: `pom.xml`)
//! - `--template <T>` - Template set to render (default: `basic-rest`)
//! - `--output <DIR>` - Directory the project is created under (default: `.`)
//! - `--config <FILE>` - Defaults file (auto-detected as `restforge.toml` otherwise)
//! - `--force` - Overwrite existing files
//!
//! ### `templates`
//!
//! Print the template paths a source language resolves to and whether each is
//! shipped with the binary:
//!
//! ```bash
//! restforge-gen templates --source-type kotlin
//! ```
//!
//! ## Binary
//!
//! The CLI is available as the `restforge-gen` binary:
//!
//! ```bash
//! cargo install restforge
//! restforge-gen --help
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands};
