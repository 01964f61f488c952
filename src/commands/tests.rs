//! Tests for command handlers.

use super::*;
use crate::cli::{CompareArgs, ShowArgs, StatsArgs};
use crate::config::{CONFIG_FILE_NAME, OutputFormat};
use crate::error::BtDiffError;
use crate::exit_codes;
use crate::test_support::{DirGuard, NEW_XML, OLD_XML, fixture_pair, write_file};
use clap::Parser;
use serial_test::serial;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn compare_args(old: &Path, new: &Path) -> CompareArgs {
    CompareArgs {
        old: old.to_path_buf(),
        new: new.to_path_buf(),
        tree: None,
        hints: Vec::new(),
        format: None,
        show_unchanged: false,
        all: false,
        exit_code: false,
    }
}

// ============================================================================
// compare
// ============================================================================

#[test]
fn compare_selects_default_tree_without_hints() {
    let (_dir, old, new) = fixture_pair();

    let output = run_compare(&compare_args(&old, &new), &Config::default()).unwrap();

    assert!(output.has_changes);
    let text = &output.rendered;
    assert!(text.contains("Tree: MainTree"));
    assert!(text.contains("- REMOVED: BehaviorTree/Sequence[0]/Fallback[0]"));
    assert!(text.contains(
        "→ MOVED: BehaviorTree/Sequence[0]/Fallback[0]/Action[@ID='OpenGripper'] → BehaviorTree/Sequence[0]/Action[@ID='OpenGripper']"
    ));
    assert!(text.contains("* MODIFIED: BehaviorTree/Sequence[0]/SubTree[@ID='Dock']"));
    assert!(text.contains("    speed: '1' → '2'"));
    assert!(text.contains("    delay_msec: '100' → '250'"));
    assert!(!text.contains("UNCHANGED"));
}

#[test]
fn compare_hint_selects_matching_tree() {
    let (_dir, old, new) = fixture_pair();
    let mut args = compare_args(&old, &new);
    args.hints = vec!["CallForHelp".to_string()];

    let output = run_compare(&args, &Config::default()).unwrap();

    assert!(output.rendered.contains("Tree: Dock"));
    assert!(
        output
            .rendered
            .contains("+ ADDED: BehaviorTree/Fallback[0]/Action[@ID='CallForHelp']")
    );
}

#[test]
fn compare_merges_config_hints() {
    let (_dir, old, new) = fixture_pair();
    let config = Config {
        hints: vec!["DriveToDock".to_string()],
        ..Config::default()
    };

    let output = run_compare(&compare_args(&old, &new), &config).unwrap();
    assert!(output.rendered.contains("Tree: Dock"));
}

#[test]
fn compare_explicit_tree() {
    let (_dir, old, new) = fixture_pair();
    let mut args = compare_args(&old, &new);
    args.tree = Some("Dock".to_string());

    let output = run_compare(&args, &Config::default()).unwrap();
    assert!(output.rendered.contains("Tree: Dock"));
}

#[test]
fn compare_explicit_tree_must_exist() {
    let (_dir, old, new) = fixture_pair();
    let mut args = compare_args(&old, &new);
    args.tree = Some("Patrol".to_string());

    let err = run_compare(&args, &Config::default()).unwrap_err();
    assert!(matches!(err, BtDiffError::TreeNotFound { .. }));
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}

#[test]
fn compare_show_unchanged_from_flag_or_config() {
    let (_dir, old, new) = fixture_pair();
    let mut args = compare_args(&old, &new);
    args.show_unchanged = true;
    let from_flag = run_compare(&args, &Config::default()).unwrap();

    let config = Config {
        show_unchanged: true,
        ..Config::default()
    };
    let from_config = run_compare(&compare_args(&old, &new), &config).unwrap();

    assert!(from_flag.rendered.contains("  UNCHANGED: BehaviorTree/Sequence[0]"));
    assert!(from_config.rendered.contains("  UNCHANGED: BehaviorTree/Sequence[0]"));
}

#[test]
fn compare_json_output() {
    let (_dir, old, new) = fixture_pair();
    let mut args = compare_args(&old, &new);
    args.format = Some(OutputFormat::Json);

    let output = run_compare(&args, &Config::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output.rendered).unwrap();

    assert_eq!(value["trees"][0]["name"], "MainTree");
    assert_eq!(value["trees"][0]["summary"]["moved"], 1);
    assert_eq!(value["trees"][0]["summary"]["modified"], 2);
}

#[test]
fn compare_format_defaults_to_config() {
    let (_dir, old, new) = fixture_pair();
    let config = Config {
        output_format: OutputFormat::Json,
        ..Config::default()
    };

    let output = run_compare(&compare_args(&old, &new), &config).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&output.rendered).is_ok());

    let mut args = compare_args(&old, &new);
    args.format = Some(OutputFormat::Text);
    let output = run_compare(&args, &config).unwrap();
    assert!(output.rendered.starts_with("BehaviorTree XML Structural Diff"));
}

#[test]
fn compare_all_trees() {
    let (_dir, old, new) = fixture_pair();
    let mut args = compare_args(&old, &new);
    args.all = true;

    let output = run_compare(&args, &Config::default()).unwrap();

    assert!(output.rendered.contains("Tree: MainTree"));
    assert!(output.rendered.contains("Tree: Dock"));
    assert!(
        output
            .rendered
            .contains("SubTree references:\n  * Dock\n      speed: '1' → '2'")
    );
}

#[test]
fn compare_ignores_configured_attributes() {
    let (_dir, old, new) = fixture_pair();
    let config = Config {
        ignore_attributes: vec!["^speed$".to_string(), "^delay_msec$".to_string()],
        ..Config::default()
    };

    let output = run_compare(&compare_args(&old, &new), &config).unwrap();

    assert!(!output.rendered.contains("MODIFIED"));
    assert!(output.rendered.contains("→ MOVED:"));
}

#[test]
fn compare_identical_files_has_no_changes() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.xml", OLD_XML);
    let b = write_file(&dir, "b.xml", OLD_XML);

    let output = run_compare(&compare_args(&a, &b), &Config::default()).unwrap();

    assert!(!output.has_changes);
    assert!(output.rendered.contains("No changes."));
}

#[test]
fn compare_exit_code_flag() {
    let dir = TempDir::new().unwrap();
    let old = write_file(&dir, "old.xml", OLD_XML);
    let new = write_file(&dir, "new.xml", NEW_XML);

    let mut args = compare_args(&old, &new);
    args.exit_code = true;
    assert_eq!(
        cmd_compare(args, &Config::default()).unwrap(),
        exit_codes::CHANGES_DETECTED
    );

    assert_eq!(
        cmd_compare(compare_args(&old, &new), &Config::default()).unwrap(),
        exit_codes::SUCCESS
    );

    let mut args = compare_args(&old, &old);
    args.exit_code = true;
    assert_eq!(
        cmd_compare(args, &Config::default()).unwrap(),
        exit_codes::SUCCESS
    );
}

#[test]
fn compare_malformed_file_is_parse_failure() {
    let dir = TempDir::new().unwrap();
    let old = write_file(&dir, "old.xml", OLD_XML);
    let bad = write_file(&dir, "bad.xml", "<root><BehaviorTree></root>");

    let err = run_compare(&compare_args(&old, &bad), &Config::default()).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::PARSE_FAILURE);
}

#[test]
fn compare_duplicate_paths_is_precondition_failure() {
    let dir = TempDir::new().unwrap();
    let old = write_file(&dir, "old.xml", OLD_XML);
    let dup = write_file(
        &dir,
        "dup.xml",
        r#"<root><BehaviorTree ID="MainTree"><Sequence>
             <Action ID="Same"/><Action ID="Same"/>
           </Sequence></BehaviorTree></root>"#,
    );

    let err = run_compare(&compare_args(&old, &dup), &Config::default()).unwrap_err();
    assert!(matches!(err, BtDiffError::PreconditionViolation(_)));
    assert_eq!(err.exit_code(), exit_codes::PRECONDITION_FAILURE);
}

#[test]
fn compare_missing_file() {
    let dir = TempDir::new().unwrap();
    let old = write_file(&dir, "old.xml", OLD_XML);
    let missing = dir.path().join("missing.xml");

    let err = run_compare(&compare_args(&old, &missing), &Config::default()).unwrap_err();
    assert!(matches!(err, BtDiffError::Io { .. }));
}

// ============================================================================
// show / stats
// ============================================================================

#[test]
fn show_defaults_to_configured_tree() {
    let (_dir, old, _new) = fixture_pair();
    let args = ShowArgs {
        file: old,
        tree: None,
    };

    let text = render_show(&args, &Config::default()).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Tree: MainTree");
    assert_eq!(lines[1], "├─ BehaviorTree(action) ID=\"MainTree\"");
    assert!(text.contains("Action(action) ID=\"OpenGripper\""));
}

#[test]
fn show_falls_back_to_first_tree() {
    let dir = TempDir::new().unwrap();
    let file = write_file(
        &dir,
        "t.xml",
        r#"<root><BehaviorTree ID="Patrol"><Sequence/></BehaviorTree></root>"#,
    );
    let args = ShowArgs { file, tree: None };

    let text = render_show(&args, &Config::default()).unwrap();
    assert!(text.starts_with("Tree: Patrol\n"));
}

#[test]
fn show_named_tree() {
    let (_dir, old, _new) = fixture_pair();
    let args = ShowArgs {
        file: old,
        tree: Some("Dock".to_string()),
    };

    let text = render_show(&args, &Config::default()).unwrap();
    assert!(text.starts_with("Tree: Dock\n"));
    assert!(text.contains("Condition(condition) ID=\"IsDocked\""));
}

#[test]
fn show_unknown_tree_fails() {
    let (_dir, old, _new) = fixture_pair();
    let args = ShowArgs {
        file: old,
        tree: Some("Patrol".to_string()),
    };

    let err = render_show(&args, &Config::default()).unwrap_err();
    assert!(matches!(err, BtDiffError::TreeNotFound { .. }));
}

#[test]
fn show_document_without_trees_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "empty.xml", "<root/>");
    let args = ShowArgs { file, tree: None };

    let err = render_show(&args, &Config::default()).unwrap_err();
    assert!(matches!(err, BtDiffError::UserError(_)));
}

#[test]
fn stats_counts_nodes() {
    let (_dir, _old, new) = fixture_pair();
    let text = render_stats(&StatsArgs { file: new }).unwrap();

    assert!(text.contains("Trees:           2"));
    assert!(text.contains("  SubTree:       1"));
}

// ============================================================================
// dispatch
// ============================================================================

#[test]
fn dispatch_uses_explicit_config() {
    let (dir, old, new) = fixture_pair();
    let config = write_file(&dir, "cfg.yaml", "default_tree: Dock\n");

    let cli = Cli::try_parse_from([
        PathBuf::from("btdiff"),
        PathBuf::from("compare"),
        old,
        new,
        PathBuf::from("--exit-code"),
        PathBuf::from("--config"),
        config,
    ])
    .unwrap();

    assert_eq!(dispatch(cli).unwrap(), exit_codes::CHANGES_DETECTED);
}

#[test]
fn dispatch_rejects_missing_config() {
    let (dir, old, _new) = fixture_pair();
    let missing = dir.path().join("missing.yaml");

    let cli = Cli::try_parse_from([
        PathBuf::from("btdiff"),
        PathBuf::from("stats"),
        old,
        PathBuf::from("--config"),
        missing,
    ])
    .unwrap();

    let err = dispatch(cli).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}

#[test]
#[serial]
fn dispatch_reads_local_config() {
    let (dir, _old, _new) = fixture_pair();
    write_file(&dir, CONFIG_FILE_NAME, "ignore_attributes: [\"(\"]\n");
    let _guard = DirGuard::new(dir.path());

    let cli = Cli::try_parse_from(["btdiff", "stats", "old.xml"]).unwrap();

    let err = dispatch(cli).unwrap_err();
    assert!(err.to_string().contains("ignore_attributes"));
}

#[test]
#[serial]
fn dispatch_relative_paths() {
    let (dir, _old, _new) = fixture_pair();
    let _guard = DirGuard::new(dir.path());

    let cli = Cli::try_parse_from(["btdiff", "show", "new.xml", "--tree", "Dock"]).unwrap();
    assert_eq!(dispatch(cli).unwrap(), exit_codes::SUCCESS);
}
