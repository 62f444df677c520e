mod common;

use common::{write_fixture, LOGIN_MANIFEST_JSON, LOGIN_MANIFEST_YAML};
use fakegen::{load_catalog, CatalogFormat, ClassKind, Error, MethodKind};
use indoc::indoc;
use tempfile::TempDir;

#[test]
fn json_and_yaml_manifests_agree() {
    let dir = TempDir::new().unwrap();
    let json = write_fixture(dir.path(), "login.json", LOGIN_MANIFEST_JSON);
    let yaml = write_fixture(dir.path(), "login.yml", LOGIN_MANIFEST_YAML);

    let from_json = load_catalog(&json, None).unwrap();
    let from_yaml = load_catalog(&yaml, None).unwrap();
    assert_eq!(from_json, from_yaml);
    assert_eq!(from_json.classes[0].methods.len(), 2);
    assert_eq!(from_json.method_count(), 2);
}

#[test]
fn toml_manifest_loads() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        dir.path(),
        "catalog.toml",
        indoc! {r#"
            [[classes]]
            class_name = "Clock"
            class_kind = "protocol"

            [[classes.methods]]
            name = "now"
            kind = "class"
            return_type = "Date"
        "#},
    );

    let catalog = load_catalog(&path, Some(CatalogFormat::Manifest)).unwrap();
    let clock = &catalog.classes[0];
    assert_eq!(clock.class_kind, ClassKind::Protocol);
    assert_eq!(clock.methods[0].kind, MethodKind::Class);
    assert_eq!(clock.methods[0].result_type(), Some("Date"));
}

#[test]
fn sourcekitten_output_loads_with_explicit_format() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        dir.path(),
        "structure.out",
        indoc! {r#"
            {
              "key.substructure": [
                {
                  "key.kind": "source.lang.swift.decl.protocol",
                  "key.name": "Clock",
                  "key.substructure": [
                    {
                      "key.kind": "source.lang.swift.decl.function.method.instance",
                      "key.name": "schedule(_:after:)",
                      "key.typename": "Timer",
                      "key.substructure": [
                        { "key.kind": "source.lang.swift.decl.var.parameter", "key.name": "task", "key.typename": "Task" },
                        { "key.kind": "source.lang.swift.decl.var.parameter", "key.name": "after", "key.typename": "Double" }
                      ]
                    }
                  ]
                }
              ]
            }
        "#},
    );

    let catalog = load_catalog(&path, Some(CatalogFormat::SourceKitten)).unwrap();
    let schedule = &catalog.classes[0].methods[0];
    assert_eq!(schedule.base_name(), "schedule");
    assert_eq!(schedule.external_argument_names, vec!["_", "after"]);
    assert_eq!(schedule.parameter_names(), vec!["task", "after"]);
    assert_eq!(schedule.argument_types, vec!["Task", "Double"]);
    assert_eq!(schedule.result_type(), Some("Timer"));
}

#[test]
fn malformed_manifest_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "broken.json", "{ \"classes\": [ ");
    assert!(matches!(load_catalog(&path, None), Err(Error::Json(_))));
}

#[test]
fn catalog_errors_carry_the_file_path() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        dir.path(),
        "dupes.json",
        r#"{"classes": [{"class_name": "A"}, {"class_name": "A"}]}"#,
    );
    let err = load_catalog(&path, None).unwrap_err();
    match &err {
        Error::Catalog { path: Some(reported), .. } => assert_eq!(reported, &path),
        other => panic!("Expected catalog error, got {:?}", other),
    }
    assert!(err.to_string().contains("declared more than once"));
}

#[test]
fn missing_catalog_is_a_file_system_error() {
    let dir = TempDir::new().unwrap();
    let err = load_catalog(&dir.path().join("absent.json"), None).unwrap_err();
    assert!(matches!(err, Error::FileSystem { .. }));
}
