#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use serde_json::json;

#[test]
fn test_source_dirs() {
    assert_eq!(SourceType::Java.source_dir(), "src/main/java");
    assert_eq!(SourceType::Java.test_source_dir(), "src/test/java");
    assert_eq!(SourceType::Kotlin.source_dir(), "src/main/kotlin");
    assert_eq!(SourceType::Kotlin.test_source_dir(), "src/test/kotlin");
}

#[test]
fn test_build_file_template_path() {
    assert_eq!(
        SourceType::Java.build_file_template("basic-rest", "pom.xml"),
        "templates/basic-rest/java/pom.xml-template.ftl"
    );
    assert_eq!(
        SourceType::Kotlin.build_file_template("basic-rest", "build.gradle"),
        "templates/basic-rest/kotlin/build.gradle-template.ftl"
    );
    // Both arguments are substituted verbatim, whatever they are
    assert_eq!(
        SourceType::Java.build_file_template("t", "b"),
        "templates/t/java/b-template.ftl"
    );
}

#[test]
fn test_resource_template_paths() {
    assert_eq!(
        SourceType::Java.resource_template("basic-rest"),
        "templates/basic-rest/java/resource-template.ftl"
    );
    assert_eq!(
        SourceType::Java.test_resource_template("basic-rest"),
        "templates/basic-rest/java/test-resource-template.ftl"
    );
    assert_eq!(
        SourceType::Java.native_test_resource_template("basic-rest"),
        "templates/basic-rest/java/native-test-resource-template.ftl"
    );
    assert_eq!(
        SourceType::Kotlin.resource_template("basic-rest"),
        "templates/basic-rest/kotlin/resource-template.ftl"
    );
}

#[test]
fn test_template_paths_are_stable() {
    // Pure functions: identical inputs, identical outputs
    let a = SourceType::Kotlin.resource_template("basic-rest");
    let b = SourceType::Kotlin.resource_template("basic-rest");
    assert_eq!(a, b);
}

#[test]
fn test_extension() {
    assert_eq!(SourceType::Java.extension(), ".java");
    assert_eq!(SourceType::Kotlin.extension(), ".kt");
}

#[test]
fn test_strip_extension() {
    assert_eq!(
        SourceType::Java.strip_extension("GreetingResource.java"),
        "GreetingResource"
    );
    assert_eq!(SourceType::Kotlin.strip_extension("Foo.kt"), "Foo");
}

#[test]
fn test_strip_extension_no_match() {
    // A different extension is not stripped
    assert_eq!(SourceType::Java.strip_extension("Foo.bar"), "Foo.bar");
    assert_eq!(SourceType::Kotlin.strip_extension("Foo.java"), "Foo.java");
    assert_eq!(SourceType::Java.strip_extension(""), "");
}

#[test]
fn test_strip_extension_absent_input() {
    // Callers model an absent name with Option; mapping keeps None as None
    let absent: Option<&str> = None;
    assert_eq!(absent.map(|n| SourceType::Java.strip_extension(n)), None);
}

#[test]
fn test_display_matches_path_segment() {
    assert_eq!(SourceType::Java.to_string(), "java");
    assert_eq!(SourceType::Kotlin.to_string(), "kotlin");
}

#[test]
fn test_embedded_store_contains_all_computed_paths() {
    let store = TemplateStore::embedded().unwrap();
    for st in [SourceType::Java, SourceType::Kotlin] {
        assert!(store.contains(&st.resource_template(BASIC_REST_TEMPLATE)));
        assert!(store.contains(&st.test_resource_template(BASIC_REST_TEMPLATE)));
        assert!(store.contains(&st.native_test_resource_template(BASIC_REST_TEMPLATE)));
        assert!(store.contains(&st.build_file_template(BASIC_REST_TEMPLATE, "pom.xml")));
        assert!(store.contains(&st.build_file_template(BASIC_REST_TEMPLATE, "build.gradle")));
    }
    assert!(store.contains(&application_properties_template(BASIC_REST_TEMPLATE)));
    assert!(store.contains(&gitignore_template(BASIC_REST_TEMPLATE)));
}

#[test]
fn test_store_render_resource() {
    let store = TemplateStore::embedded().unwrap();
    let ctx = json!({
        "package": "org.acme",
        "class_name": "GreetingResource",
        "resource_path": "/hello",
    });
    let rendered = store
        .render(&SourceType::Java.resource_template(BASIC_REST_TEMPLATE), &ctx)
        .unwrap();
    assert!(rendered.contains("package org.acme;"));
    assert!(rendered.contains("public class GreetingResource"));
    assert!(rendered.contains("@Path(\"/hello\")"));
}

#[test]
fn test_store_unknown_path_is_error() {
    let store = TemplateStore::embedded().unwrap();
    let err = store
        .render("templates/basic-rest/java/missing-template.ftl", &json!({}))
        .unwrap_err();
    assert!(err.to_string().contains("Unknown template path"));
}

#[test]
fn test_config_class_name_normalization() {
    let mut config = ProjectConfig::new("org.acme", "my-app");
    assert_eq!(config.class_name(), DEFAULT_CLASS_NAME);

    config.class_name = Some("HelloResource.java".to_string());
    assert_eq!(config.class_name(), "HelloResource");

    // Kotlin does not strip a Java suffix
    config.source_type = SourceType::Kotlin;
    assert_eq!(config.class_name(), "HelloResource.java");
}

#[test]
fn test_config_package_dir() {
    let config = ProjectConfig::new("org.acme.demo", "my-app");
    assert_eq!(
        config.package_dir(),
        std::path::PathBuf::from("org/acme/demo")
    );
}

#[test]
fn test_config_defaults() {
    let config = ProjectConfig::new("org.acme", "my-app");
    assert_eq!(config.version, DEFAULT_VERSION);
    assert_eq!(config.build_file, DEFAULT_BUILD_FILE);
    assert_eq!(config.source_type, SourceType::Java);
    assert_eq!(config.resource_path(), DEFAULT_RESOURCE_PATH);
    assert_eq!(config.template_name, BASIC_REST_TEMPLATE);
}
