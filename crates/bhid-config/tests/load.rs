//! Loading configuration files from disk.

use std::fs;

use bhid_config::{ConfigError, load_config, load_salt};

const CONFIG: &str = r#"
[source]
path = "registrations.csv"
columns = [
    { name = "First Name", alias = "first_name" },
    { name = "MAPPING", alias = "col_mapping" },
]

[linked_source]
path = "payments.xlsx"
sheet = "Payments"
columns = [
    { name = "MAPPING", alias = "col_mapping" },
    { name = "Amount", alias = "amount" },
]

[rules]
amount = [{ op = "min_value", value = 0 }]

[algorithm]
to_translate = ["first_name"]
shared_columns = "strict"

[salt]
path = "secrets/salt.txt"

[destination]
path = "out/hashed.csv"
id_column = "beneficiary_id"

[validation]
fail_on_findings = true
"#;

#[test]
fn load_resolves_paths_next_to_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.toml");
    fs::write(&path, CONFIG).unwrap();
    fs::create_dir(dir.path().join("secrets")).unwrap();
    fs::write(dir.path().join("secrets/salt.txt"), "s3cr3t\n").unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.source.path, dir.path().join("registrations.csv"));
    let linked = config.linked_source.as_ref().unwrap();
    assert_eq!(linked.path, dir.path().join("payments.xlsx"));
    assert_eq!(linked.source_options().sheet.as_deref(), Some("Payments"));
    assert_eq!(config.destination.id_column, "beneficiary_id");
    assert!(config.validation.fail_on_findings);

    let salt = load_salt(&config.salt, &config.base_dir).unwrap();
    assert_eq!(salt.value(), "s3cr3t");

    let (source, linked) = config.schemas().unwrap();
    assert_eq!(source.alias_for("MAPPING"), Some("col_mapping"));
    assert!(linked.is_some());
}

#[test]
fn load_reports_toml_errors_with_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[source\npath = 1").unwrap();
    match load_config(&path) {
        Err(ConfigError::Toml { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected TOML error, got {other:?}"),
    }
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_config(&dir.path().join("absent.toml")),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn load_rejects_misspelled_hash_category() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.toml");
    let contents = CONFIG.replace(
        "to_translate = [\"first_name\"]",
        "to_translate = [\"first_name\"]\nrefrence = [\"document_id\"]",
    );
    fs::write(&path, contents).unwrap();
    match load_config(&path) {
        Err(ConfigError::Toml { path: reported, source }) => {
            assert_eq!(reported, path);
            assert!(source.to_string().contains("unknown field `refrence`"));
        }
        other => panic!("expected unknown field error, got {other:?}"),
    }
}
