use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::generator::{
    generate_project, load_project_defaults, resolve_defaults_path, ProjectConfig,
    ProjectDefaults, SourceType, TemplateStore, BASIC_REST_TEMPLATE, DEFAULT_BUILD_FILE,
    DEFAULT_GROUP_ID, DEFAULT_VERSION,
};

/// Command-line interface for restforge
///
/// Provides commands for generating JVM REST starter projects and inspecting
/// the shipped templates.
#[derive(Parser)]
#[command(name = "restforge")]
#[command(about = "restforge CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for restforge
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new REST starter project
    New {
        /// Artifact id; also the project directory name
        #[arg(short, long)]
        artifact_id: String,

        /// Group id and base package (default: org.acme, or the defaults file)
        #[arg(short, long)]
        group_id: Option<String>,

        /// Project version (default: 1.0.0-SNAPSHOT, or the defaults file)
        #[arg(short, long)]
        version: Option<String>,

        /// Resource class name; a trailing language extension is stripped
        #[arg(short, long)]
        class_name: Option<String>,

        /// HTTP path of the generated resource
        #[arg(short, long)]
        path: Option<String>,

        /// Source language of the generated project
        #[arg(short, long, value_enum)]
        source_type: Option<SourceType>,

        /// Build file to generate (pom.xml or build.gradle)
        #[arg(short, long)]
        build_file: Option<String>,

        /// Template set to render
        #[arg(short, long, default_value = BASIC_REST_TEMPLATE)]
        template: String,

        /// Directory the project is created under
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Path to a restforge.toml defaults file
        /// (auto-detected in the output directory if not given)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Overwrite existing files without prompting
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Print the template paths a source language resolves to
    Templates {
        /// Source language to resolve paths for
        #[arg(short, long, value_enum, default_value_t = SourceType::Java)]
        source_type: SourceType,

        /// Template set to resolve paths in
        #[arg(short, long, default_value = BASIC_REST_TEMPLATE)]
        template: String,
    },
}

/// Parse the command line and run the selected command
///
/// # Errors
///
/// Returns an error if the defaults file is invalid or project generation
/// fails.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::New {
            artifact_id,
            group_id,
            version,
            class_name,
            path,
            source_type,
            build_file,
            template,
            output,
            config,
            force,
        } => {
            let defaults = match resolve_defaults_path(config.as_deref(), &output) {
                Some(defaults_path) => {
                    load_project_defaults(&defaults_path)?.unwrap_or_default()
                }
                None => ProjectDefaults::default(),
            };

            // Command line wins over the defaults file, which wins over built-ins
            let config = ProjectConfig {
                group_id: group_id
                    .or(defaults.defaults.group_id)
                    .unwrap_or_else(|| DEFAULT_GROUP_ID.to_string()),
                artifact_id,
                version: version
                    .or(defaults.defaults.version)
                    .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
                source_type: source_type
                    .or(defaults.defaults.source_type)
                    .unwrap_or(SourceType::Java),
                build_file: build_file
                    .or(defaults.defaults.build_file)
                    .unwrap_or_else(|| DEFAULT_BUILD_FILE.to_string()),
                template_name: template,
                class_name,
                resource_path: path.or(defaults.defaults.resource_path),
                properties: defaults.properties,
            };

            let project_dir = generate_project(&config, &output, force)?;
            println!("✅ Created {} project at {project_dir:?}", config.source_type);
            Ok(())
        }
        Commands::Templates {
            source_type,
            template,
        } => {
            let store = TemplateStore::embedded()?;
            println!("source dir:      {}", source_type.source_dir());
            println!("test source dir: {}", source_type.test_source_dir());
            println!("file extension:  {}", source_type.extension());
            for path in [
                source_type.resource_template(&template),
                source_type.test_resource_template(&template),
                source_type.native_test_resource_template(&template),
                source_type.build_file_template(&template, "pom.xml"),
                source_type.build_file_template(&template, "build.gradle"),
            ] {
                let mark = if store.contains(&path) { "✅" } else { "❌" };
                println!("{mark} {path}");
            }
            Ok(())
        }
    }
}
