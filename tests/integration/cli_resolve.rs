//! Command routing against fixture files

use container_resolver::cli::{Commands, RunContext};
use container_resolver::config::ResolverConfig;
use container_resolver::registry::ContainerConfiguration;
use container_resolver::{ContainerTree, ExecutionMode};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FIXTURE: &str = r#"[
    {"uid": 5, "CType": "b13-2cols"},
    {"uid": 10, "CType": "b13-2cols", "sys_language_uid": 1, "l18n_parent": 5},
    {"uid": 20, "CType": "text", "tx_container_parent": 5, "colPos": 0, "sorting": 1,
     "header": "One"},
    {"uid": 21, "CType": "text", "tx_container_parent": 5, "colPos": 0, "sorting": 2},
    {"uid": 30, "CType": "text", "tx_container_parent": 10, "colPos": 0,
     "sys_language_uid": 1, "l18n_parent": 20}
]"#;

fn context(root: &Path) -> RunContext {
    let config = ResolverConfig {
        containers: vec![ContainerConfiguration::new("b13-2cols")
            .with_column(0, "left")
            .with_column(1, "right")],
        ..Default::default()
    };
    RunContext::from_config(config, root.to_path_buf())
}

fn resolve_command(uid: u64, format: &str) -> Commands {
    Commands::Resolve {
        uid,
        fixture: "records.json".into(),
        mode: Some(ExecutionMode::BackEnd),
        language: None,
        no_overlays: false,
        workspace_id: None,
        ctypes: Vec::new(),
        format: format.to_string(),
    }
}

#[test]
fn test_resolve_json_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("records.json"), FIXTURE).unwrap();

    let output = context(dir.path())
        .execute(&resolve_command(10, "json"))
        .unwrap();
    let tree: ContainerTree = serde_json::from_str(&output).unwrap();

    assert_eq!(tree.uid(), 5);
    assert_eq!(tree.language_id(), 1);
    assert_eq!(tree.child_uids(), vec![30, 21]);
}

#[test]
fn test_resolve_text_output_names_columns() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("records.json"), FIXTURE).unwrap();

    let output = context(dir.path())
        .execute(&resolve_command(5, "text"))
        .unwrap();
    assert!(output.contains("left"));
    assert!(output.contains("20"));
}

#[test]
fn test_resolve_errors_carry_context() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("records.json"), FIXTURE).unwrap();
    let context = context(dir.path());

    let err = context.execute(&resolve_command(20, "json")).unwrap_err();
    assert!(format!("{:#}", err).contains("Not a container element with uid 20"));

    let err = context.execute(&resolve_command(5, "yaml")).unwrap_err();
    assert!(err.to_string().contains("Invalid format"));

    let missing = TempDir::new().unwrap();
    assert!(context_for_missing(missing.path()).is_err());
}

fn context_for_missing(root: &Path) -> anyhow::Result<String> {
    context(root).execute(&resolve_command(5, "json"))
}

#[test]
fn test_resolve_registers_extra_ctypes() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("records.json"),
        r#"{"records": [{"uid": 7, "CType": "tabs"}]}"#,
    )
    .unwrap();

    let context = context(dir.path());
    assert!(context.execute(&resolve_command(7, "json")).is_err());

    let command = Commands::Resolve {
        uid: 7,
        fixture: "records.json".into(),
        mode: None,
        language: None,
        no_overlays: false,
        workspace_id: None,
        ctypes: vec!["tabs".to_string()],
        format: "json".to_string(),
    };
    let output = context.execute(&command).unwrap();
    let tree: ContainerTree = serde_json::from_str(&output).unwrap();
    assert_eq!(tree.ctype(), "tabs");
    assert_eq!(tree.child_count(), 0);
}

#[test]
fn test_containers_and_validate() {
    let dir = TempDir::new().unwrap();
    let context = context(dir.path());

    let table = context.execute(&Commands::Containers).unwrap();
    assert!(table.contains("b13-2cols"));

    let message = context.execute(&Commands::Validate).unwrap();
    assert!(message.contains("1 container type(s)"));

    let duplicate = RunContext::from_config(
        ResolverConfig {
            containers: vec![
                ContainerConfiguration::new("b13-2cols"),
                ContainerConfiguration::new("b13-2cols"),
            ],
            ..Default::default()
        },
        dir.path().to_path_buf(),
    );
    let err = duplicate.execute(&Commands::Validate).unwrap_err();
    assert!(err.to_string().contains("validation failed"));
}
