//! Tests for whole-document comparison.

use super::*;
use crate::compare::AttributeDelta;
use crate::parser::parse_document;
use pretty_assertions::assert_eq;

const OLD: &str = r#"<root>
  <BehaviorTree ID="MainTree">
    <Sequence>
      <SubTree ID="Dock" speed="1"/>
      <SubTree ID="Charge"/>
      <Action ID="Wait" msec="100"/>
    </Sequence>
  </BehaviorTree>
  <BehaviorTree ID="Dock"><Action ID="Drive"/></BehaviorTree>
  <BehaviorTree ID="Charge"><Action ID="Plug"/></BehaviorTree>
</root>"#;

const NEW: &str = r#"<root>
  <BehaviorTree ID="MainTree">
    <Sequence>
      <SubTree ID="Dock" speed="2"/>
      <SubTree ID="Undock"/>
      <Action ID="Wait" msec="100"/>
    </Sequence>
  </BehaviorTree>
  <BehaviorTree ID="Dock"><Action ID="Drive"/></BehaviorTree>
  <BehaviorTree ID="Undock"><Action ID="Reverse"/></BehaviorTree>
</root>"#;

#[test]
fn shared_trees_are_compared() {
    let old = parse_document(OLD).unwrap();
    let new = parse_document(NEW).unwrap();

    let diff = compare_documents(&old, &new, &CompareOptions::default()).unwrap();

    let names: Vec<&str> = diff.trees.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["MainTree", "Dock"]);
    assert!(diff.trees[0].has_changes());
    assert!(!diff.trees[1].has_changes());
    assert!(diff.has_changes());
}

#[test]
fn one_sided_trees_are_listed() {
    let old = parse_document(OLD).unwrap();
    let new = parse_document(NEW).unwrap();

    let diff = compare_documents(&old, &new, &CompareOptions::default()).unwrap();

    assert_eq!(diff.added_trees, vec!["Undock".to_string()]);
    assert_eq!(diff.removed_trees, vec!["Charge".to_string()]);
}

#[test]
fn subtree_references_are_classified() {
    let old = parse_document(OLD).unwrap();
    let new = parse_document(NEW).unwrap();

    let refs = subtree_reference_changes(&old, &new, &CompareOptions::default());

    let summary: Vec<(ChangeKind, &str)> =
        refs.iter().map(|r| (r.kind, r.id.as_str())).collect();
    assert_eq!(
        summary,
        vec![
            (ChangeKind::Modified, "Dock"),
            (ChangeKind::Removed, "Charge"),
            (ChangeKind::Added, "Undock"),
        ]
    );
    assert_eq!(
        refs[0].attribute_deltas["speed"],
        AttributeDelta::new("1", "2")
    );
}

#[test]
fn identical_documents_have_no_changes() {
    let old = parse_document(OLD).unwrap();
    let new = parse_document(OLD).unwrap();

    let diff = compare_documents(&old, &new, &CompareOptions::default()).unwrap();

    assert!(!diff.has_changes());
    assert!(diff.subtree_refs.is_empty());
}

#[test]
fn duplicate_paths_fail_the_whole_comparison() {
    let xml = r#"<BehaviorTree ID="T"><Action ID="A"/><Action ID="A"/></BehaviorTree>"#;
    let old = parse_document(xml).unwrap();
    let new = parse_document(xml).unwrap();

    assert!(compare_documents(&old, &new, &CompareOptions::default()).is_err());
}
