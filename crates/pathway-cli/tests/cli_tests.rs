use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn pw_cmd(db_arg: &str) -> Command {
    let mut cmd = Command::cargo_bin("pw").expect("Failed to find pw binary");
    cmd.args(["--no-color", "--database-file", db_arg]);
    cmd
}

/// Pulls the identifier out of a "... with ID: <id>" line
fn extract_id_from_output(output: &str) -> String {
    output
        .lines()
        .find_map(|line| line.split("with ID: ").nth(1))
        .map(|rest| rest.trim().to_string())
        .expect("No ID in output")
}

fn run(db_arg: &str, args: &[&str]) -> String {
    let output = pw_cmd(db_arg)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("Invalid UTF-8")
}

fn create_pathway(db_arg: &str, name: &str) -> String {
    extract_id_from_output(&run(db_arg, &["pathway", "create", name]))
}

#[test]
fn test_cli_create_pathway() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    pw_cmd(db_path.to_str().unwrap())
        .args([
            "pathway",
            "create",
            "Rust Basics",
            "--description",
            "Ownership first",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created pathway with ID: pathway-"))
        .stdout(predicate::str::contains("# Rust Basics"))
        .stdout(predicate::str::contains("Ownership first"));
}

#[test]
fn test_cli_list_empty_pathways() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    pw_cmd(db_path.to_str().unwrap())
        .args(["pathway", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No pathways found."));
}

#[test]
fn test_cli_default_command_lists_pathways() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    create_pathway(db_arg, "Listed Pathway");

    pw_cmd(db_arg)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Pathways"))
        .stdout(predicate::str::contains("Listed Pathway"))
        .stdout(predicate::str::contains("(0 steps)"));
}

#[test]
fn test_cli_add_and_show_steps() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let pathway_id = create_pathway(db_arg, "Step Pathway");

    let output = run(db_arg, &["step", "add", &pathway_id, "content"]);
    assert!(output.starts_with("Created content step with ID: step-"));
    assert!(output.contains("This is a step"));
    assert!(output.contains("Step Content"));

    run(db_arg, &["step", "add", &pathway_id, "shared"]);

    pw_cmd(db_arg)
        .args(["pathway", "show", &pathway_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. This is a step"))
        .stdout(predicate::str::contains("### 2. Shared Step"))
        .stdout(predicate::str::contains("- Total time: 60s"));
}

#[test]
fn test_cli_move_step() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let pathway_id = create_pathway(db_arg, "Move Pathway");

    let first = extract_id_from_output(&run(db_arg, &["step", "add", &pathway_id, "pathway"]));
    let second = extract_id_from_output(&run(db_arg, &["step", "add", &pathway_id, "shared"]));

    pw_cmd(db_arg)
        .args(["step", "move", &pathway_id, "1", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved step from position 1 to 0"));

    let json = run(db_arg, &["pathway", "show", &pathway_id, "--json"]);
    let doc: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");
    assert_eq!(doc["stepOrder"], serde_json::json!([second, first]));
}

#[test]
fn test_cli_move_step_out_of_range() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let pathway_id = create_pathway(db_arg, "Range Pathway");
    run(db_arg, &["step", "add", &pathway_id, "pathway"]);

    pw_cmd(db_arg)
        .args(["step", "move", &pathway_id, "0", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_cli_update_and_delete_step() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let pathway_id = create_pathway(db_arg, "Edit Pathway");
    let step_id = extract_id_from_output(&run(db_arg, &["step", "add", &pathway_id, "content"]));

    pw_cmd(db_arg)
        .args([
            "step",
            "update",
            &pathway_id,
            &step_id,
            "--heading",
            "Borrowing",
            "--time",
            "90",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Heading set to 'Borrowing'"))
        .stdout(predicate::str::contains("90s"));

    pw_cmd(db_arg)
        .args(["pathway", "show", &pathway_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Borrowing"));

    pw_cmd(db_arg)
        .args(["step", "delete", &pathway_id, &step_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted step 'Borrowing'"));

    pw_cmd(db_arg)
        .args(["pathway", "show", &pathway_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("No steps in this pathway."));
}

#[test]
fn test_cli_update_content_round_trips_on_content_step() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let pathway_id = create_pathway(db_arg, "Content Pathway");
    let step_id = extract_id_from_output(&run(db_arg, &["step", "add", &pathway_id, "content"]));

    pw_cmd(db_arg)
        .args([
            "step",
            "update",
            &pathway_id,
            &step_id,
            "--content",
            "Moves transfer ownership",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Content updated"));

    let json = run(db_arg, &["pathway", "show", &pathway_id, "--json"]);
    let doc: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");
    assert_eq!(
        doc["steps"][&step_id]["content"],
        serde_json::json!("Moves transfer ownership")
    );
}

#[test]
fn test_cli_update_content_rejected_on_pathway_step() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let pathway_id = create_pathway(db_arg, "Plain Pathway");
    let step_id = extract_id_from_output(&run(db_arg, &["step", "add", &pathway_id, "pathway"]));

    pw_cmd(db_arg)
        .args([
            "step",
            "update",
            &pathway_id,
            &step_id,
            "--heading",
            "Renamed",
            "--content",
            "Lost body",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only content steps"));

    pw_cmd(db_arg)
        .args(["pathway", "show", &pathway_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Pathway Step"))
        .stdout(predicate::str::contains("Lost body").not());
}

#[test]
fn test_cli_update_step_requires_a_field() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let pathway_id = create_pathway(db_arg, "Empty Update");

    pw_cmd(db_arg)
        .args(["step", "update", &pathway_id, "step-x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
}

#[test]
fn test_cli_tags() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let pathway_id = create_pathway(db_arg, "Tagged Pathway");

    run(db_arg, &["tag", "add", &pathway_id, "rust"]);
    pw_cmd(db_arg)
        .args(["pathway", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Tags**: rust"));

    pw_cmd(db_arg)
        .args(["tag", "remove", &pathway_id, "go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has no tag 'go'"));

    pw_cmd(db_arg)
        .args(["tag", "remove", &pathway_id, "rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed tag 'rust'"));
}

#[test]
fn test_cli_rename_pathway() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let pathway_id = create_pathway(db_arg, "Old Name");

    pw_cmd(db_arg)
        .args(["pathway", "rename", &pathway_id, "New Name", "-d", "Fresh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name set to 'New Name'"))
        .stdout(predicate::str::contains("# New Name"));
}

#[test]
fn test_cli_delete_pathway_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let pathway_id = create_pathway(db_arg, "Doomed");

    pw_cmd(db_arg)
        .args(["pathway", "delete", &pathway_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));

    pw_cmd(db_arg)
        .args(["pathway", "delete", &pathway_id, "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted pathway 'Doomed'"));

    pw_cmd(db_arg)
        .args(["pathway", "show", &pathway_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_replay_actions() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let actions_path = temp_dir.path().join("actions.json");
    fs::write(
        &actions_path,
        r#"[
            {"type": "ADD_STEP", "stepData": {"id": "a", "heading": "First", "timeLimit": 30}},
            {"type": "ADD_STEP", "stepData": {"id": "b", "heading": "Second", "timeLimit": 45}},
            {"type": "REORDER_STEPS", "sourceIndex": 1, "destinationIndex": 0},
            {"type": "ADD_TAG", "tag": "rust"},
            {"type": "DELETE_STEP", "stepId": "missing"},
            {"type": "LOGOUT"}
        ]"#,
    )
    .expect("Failed to write actions");
    let actions_arg = actions_path.to_str().unwrap();

    pw_cmd(db_arg)
        .args(["replay", actions_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replayed 6 actions, 4 changed the document",
        ))
        .stdout(predicate::str::contains("### 1. Second"))
        .stdout(predicate::str::contains("### 2. First"));

    let json = run(db_arg, &["replay", actions_arg, "--json"]);
    let doc: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");
    assert_eq!(doc["stepOrder"], serde_json::json!(["b", "a"]));
    assert_eq!(doc["pathwayTags"], serde_json::json!(["rust"]));
    assert_eq!(doc["modalCloseOnOverlay"], serde_json::json!(true));
}

#[test]
fn test_cli_replay_rejects_malformed_file() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let actions_path = temp_dir.path().join("actions.json");
    fs::write(&actions_path, "{not json").expect("Failed to write actions");

    pw_cmd(db_path.to_str().unwrap())
        .args(["replay", actions_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse actions"));
}
