use anyhow::Context;
use minijinja::Environment;
use serde_json::Value;
use tracing::debug;

use super::source_type::SourceType;

/// Name of the template set shipped with the binary
pub const BASIC_REST_TEMPLATE: &str = "basic-rest";

/// Template path for the `application.properties` file (not language-keyed)
pub fn application_properties_template(template_name: &str) -> String {
    format!("templates/{template_name}/application.properties-template.ftl")
}

/// Template path for the `.gitignore` file (not language-keyed)
pub fn gitignore_template(template_name: &str) -> String {
    format!("templates/{template_name}/gitignore-template.ftl")
}

/// Catalog of project templates compiled into the binary
///
/// Templates are registered under the exact path strings [`SourceType`]
/// computes, so a computed path doubles as the lookup key. Rendering a path
/// nobody shipped a template for (say an unsupported build file) is the one
/// place that surfaces as an error.
pub struct TemplateStore {
    env: Environment<'static>,
}

impl TemplateStore {
    /// Build the store from the templates embedded at compile time
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to parse.
    pub fn embedded() -> anyhow::Result<Self> {
        let t = BASIC_REST_TEMPLATE;
        let entries: Vec<(String, &'static str)> = vec![
            (
                SourceType::Java.resource_template(t),
                include_str!("../../templates/basic-rest/java/resource-template.ftl"),
            ),
            (
                SourceType::Java.test_resource_template(t),
                include_str!("../../templates/basic-rest/java/test-resource-template.ftl"),
            ),
            (
                SourceType::Java.native_test_resource_template(t),
                include_str!("../../templates/basic-rest/java/native-test-resource-template.ftl"),
            ),
            (
                SourceType::Java.build_file_template(t, "pom.xml"),
                include_str!("../../templates/basic-rest/java/pom.xml-template.ftl"),
            ),
            (
                SourceType::Java.build_file_template(t, "build.gradle"),
                include_str!("../../templates/basic-rest/java/build.gradle-template.ftl"),
            ),
            (
                SourceType::Kotlin.resource_template(t),
                include_str!("../../templates/basic-rest/kotlin/resource-template.ftl"),
            ),
            (
                SourceType::Kotlin.test_resource_template(t),
                include_str!("../../templates/basic-rest/kotlin/test-resource-template.ftl"),
            ),
            (
                SourceType::Kotlin.native_test_resource_template(t),
                include_str!("../../templates/basic-rest/kotlin/native-test-resource-template.ftl"),
            ),
            (
                SourceType::Kotlin.build_file_template(t, "pom.xml"),
                include_str!("../../templates/basic-rest/kotlin/pom.xml-template.ftl"),
            ),
            (
                SourceType::Kotlin.build_file_template(t, "build.gradle"),
                include_str!("../../templates/basic-rest/kotlin/build.gradle-template.ftl"),
            ),
            (
                application_properties_template(t),
                include_str!("../../templates/basic-rest/application.properties-template.ftl"),
            ),
            (
                gitignore_template(t),
                include_str!("../../templates/basic-rest/gitignore-template.ftl"),
            ),
        ];

        let mut env = Environment::new();
        for (name, source) in entries {
            debug!(template = %name, "registering embedded template");
            env.add_template_owned(name.clone(), source)
                .with_context(|| format!("Failed to register template {name}"))?;
        }
        Ok(Self { env })
    }

    /// Render the template registered under `name` with the given context
    ///
    /// # Errors
    ///
    /// Returns an error if no template is registered under `name` or if
    /// rendering fails.
    pub fn render(&self, name: &str, ctx: &Value) -> anyhow::Result<String> {
        let template = self
            .env
            .get_template(name)
            .with_context(|| format!("Unknown template path: {name}"))?;
        template
            .render(ctx)
            .with_context(|| format!("Failed to render template {name}"))
    }

    /// Whether a template is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}
