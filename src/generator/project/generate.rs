use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::{json, Value};

use crate::generator::project_config::ProjectConfig;
use crate::generator::templates::{
    application_properties_template, gitignore_template, TemplateStore,
};

/// Generate a complete starter project described by `config` under `output_dir`
///
/// Creates the directory tree (main and test source roots with the package
/// directories, plus `src/main/resources`), renders every template the
/// language resolves to, and writes the results. Existing files are left
/// alone unless `force` is set.
///
/// # Returns
///
/// The project base directory, `{output_dir}/{artifact_id}`.
///
/// # Errors
///
/// Returns an error if directory creation, template rendering, or file
/// writing fails. An unsupported build file surfaces here as an unknown
/// template path.
pub fn generate_project(
    config: &ProjectConfig,
    output_dir: &Path,
    force: bool,
) -> anyhow::Result<PathBuf> {
    let store = TemplateStore::embedded()?;

    let base_dir = output_dir.join(&config.artifact_id);
    let package_dir = config.package_dir();
    let src_dir = base_dir
        .join(config.source_type.source_dir())
        .join(&package_dir);
    let test_dir = base_dir
        .join(config.source_type.test_source_dir())
        .join(&package_dir);
    let resources_dir = base_dir.join("src").join("main").join("resources");
    fs::create_dir_all(&src_dir)
        .with_context(|| format!("Failed to create source dir {src_dir:?}"))?;
    fs::create_dir_all(&test_dir)
        .with_context(|| format!("Failed to create test source dir {test_dir:?}"))?;
    fs::create_dir_all(&resources_dir)
        .with_context(|| format!("Failed to create resources dir {resources_dir:?}"))?;

    let class_name = config.class_name();
    let ctx = template_context(config, &class_name);

    let template = &config.template_name;
    let source_type = config.source_type;
    let ext = source_type.extension();

    write_rendered(
        &store,
        &source_type.build_file_template(template, &config.build_file),
        &base_dir.join(&config.build_file),
        &ctx,
        force,
    )?;
    write_rendered(
        &store,
        &source_type.resource_template(template),
        &src_dir.join(format!("{class_name}{ext}")),
        &ctx,
        force,
    )?;
    write_rendered(
        &store,
        &source_type.test_resource_template(template),
        &test_dir.join(format!("{class_name}Test{ext}")),
        &ctx,
        force,
    )?;
    write_rendered(
        &store,
        &source_type.native_test_resource_template(template),
        &test_dir.join(format!("Native{class_name}IT{ext}")),
        &ctx,
        force,
    )?;
    write_rendered(
        &store,
        &application_properties_template(template),
        &resources_dir.join("application.properties"),
        &ctx,
        force,
    )?;
    write_rendered(
        &store,
        &gitignore_template(template),
        &base_dir.join(".gitignore"),
        &ctx,
        force,
    )?;

    Ok(base_dir)
}

fn template_context(config: &ProjectConfig, class_name: &str) -> Value {
    json!({
        "group_id": config.group_id,
        "artifact_id": config.artifact_id,
        "version": config.version,
        "package": config.group_id,
        "class_name": class_name,
        "resource_path": config.resource_path(),
        "properties": config.properties,
    })
}

fn write_rendered(
    store: &TemplateStore,
    template_path: &str,
    dest: &Path,
    ctx: &Value,
    force: bool,
) -> anyhow::Result<()> {
    if dest.exists() && !force {
        println!("⚠️  Skipping existing file: {dest:?}");
        return Ok(());
    }
    let rendered = store.render(template_path, ctx)?;
    fs::write(dest, rendered).with_context(|| format!("Failed to write {dest:?}"))?;
    println!("✅ Generated {dest:?}");
    Ok(())
}
