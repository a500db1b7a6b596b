use super::codec::parse_line;
use super::*;

#[test]
fn test_parse_basic_line() {
    let task = parse_line("1;Buy milk;urgent,home").unwrap();
    assert_eq!(task.id, 1);
    assert_eq!(task.description, "Buy milk");
    assert_eq!(task.labels, vec!["urgent", "home"]);
}

#[test]
fn test_parse_legacy_two_field_line() {
    let task = parse_line("3;Pay rent").unwrap();
    assert_eq!(task.id, 3);
    assert_eq!(task.description, "Pay rent");
    assert!(task.labels.is_empty());
}

#[test]
fn test_parse_empty_label_field() {
    let task = parse_line("2;Call Bob;").unwrap();
    assert!(task.labels.is_empty());
}

#[test]
fn test_parse_label_tokens_cleaned() {
    let task = parse_line("1;A; x , y ,x ,,").unwrap();
    assert_eq!(task.labels, vec!["x", "y"]);
}

#[test]
fn test_parse_trims_id_field_only() {
    let task = parse_line("1 ; padded").unwrap();
    assert_eq!(task.id, 1);
    assert_eq!(task.description, " padded");
}

#[test]
fn test_parse_rejects_non_integer_id() {
    assert!(parse_line("abc;desc").is_none());
    assert!(parse_line("-1;desc").is_none());
    assert!(parse_line("1.5;desc").is_none());
}

#[test]
fn test_parse_tolerates_zero_id() {
    // Never generated, but accepted from a hand-edited file.
    let task = parse_line("0;old entry;").unwrap();
    assert_eq!(task.id, 0);
}

#[test]
fn test_parse_rejects_wrong_field_count() {
    assert!(parse_line("just some text").is_none());
    assert!(parse_line("1;desc;labels;extra").is_none());
}

#[test]
fn test_store_parse_skips_blank_lines() {
    let store = TaskStore::parse("\n1;A;\n\n   \n2;B;\n");
    assert_eq!(store.tasks.len(), 2);
    assert_eq!(store.skipped, 0);
}

#[test]
fn test_store_parse_counts_skipped_lines() {
    let store = TaskStore::parse("garbage\n1;A;x;extra\n2;B\nabc;C;\n");
    assert_eq!(store.tasks.len(), 1);
    assert_eq!(store.tasks[0].id, 2);
    assert_eq!(store.skipped, 3);
}

#[test]
fn test_roundtrip() {
    let content = "1;Buy milk;urgent\n2;Call Bob;\n3;Pay rent;bills,home\n";
    let store = TaskStore::parse(content);
    assert_eq!(store.to_string(), content);
}

#[test]
fn test_display_migrates_legacy_lines() {
    let store = TaskStore::parse("1;Pay rent\n");
    assert_eq!(store.to_string(), "1;Pay rent;\n");
}

#[test]
fn test_display_drops_malformed_lines() {
    let store = TaskStore::parse("1;A;\nnot a task\n2;B;\n");
    assert_eq!(store.to_string(), "1;A;\n2;B;\n");
    assert_eq!(store.skipped, 1);
}

#[test]
fn test_display_empty_store_is_empty() {
    assert_eq!(TaskStore::default().to_string(), "");
}

#[test]
fn test_to_line_always_emits_label_field() {
    let task = Task::new(2, "Call Bob");
    assert_eq!(task.to_line(), "2;Call Bob;");
}

#[test]
fn test_parse_id_accepts_padded_integer() {
    assert_eq!(parse_id("7"), Ok(7));
    assert_eq!(parse_id(" 8 "), Ok(8));
}

#[test]
fn test_parse_id_rejects_non_integer() {
    let err = parse_id("abc").unwrap_err();
    assert_eq!(err, InvalidId("abc".to_string()));
    assert_eq!(err.to_string(), "invalid task id 'abc'");
    assert!(parse_id("").is_err());
    assert!(parse_id("-3").is_err());
}

#[test]
fn test_parse_labels_cleans_tokens() {
    assert_eq!(parse_labels("a, b ,a,,c"), vec!["a", "b", "c"]);
    assert!(parse_labels("").is_empty());
    assert!(parse_labels(" , ,").is_empty());
}

#[test]
fn test_next_id_on_empty_store() {
    assert_eq!(TaskStore::default().next_id(), Some(1));
}

#[test]
fn test_next_id_skips_gaps() {
    let store = TaskStore::parse("1;A;\n5;B;\n");
    assert_eq!(store.next_id(), Some(6));
}

#[test]
fn test_add_assigns_sequential_ids() {
    let mut store = TaskStore::default();
    let first = store.add("Buy milk", &[]).unwrap();
    let second = store.add("Call Bob", &[]).unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(second.to_line(), "2;Call Bob;");
    assert_eq!(store.tasks.len(), 2);
}

#[test]
fn test_add_cleans_labels() {
    let mut store = TaskStore::default();
    let labels = vec!["x".to_string(), "x".to_string(), " y ".to_string()];
    let task = store.add("A", &labels).unwrap();
    assert_eq!(task.labels, vec!["x", "y"]);
}

#[test]
fn test_add_errors_when_highest_id_is_max() {
    // A hand-edited file can hold u32::MAX; the next id must not wrap to 0
    // or reuse an id.
    let mut store = TaskStore::parse("4294967295;edge;\n");
    assert_eq!(store.next_id(), None);
    let err = store.add("one more", &[]).unwrap_err();
    assert_eq!(err, IdsExhausted);
    assert_eq!(err.to_string(), "task id space exhausted");
    assert_eq!(store.tasks.len(), 1);
}

#[test]
fn test_removed_id_not_reused_while_higher_id_survives() {
    let mut store = TaskStore::parse("1;A;x\n2;B;y\n");
    assert_eq!(store.remove(1), RemoveOutcome::Removed);
    let task = store.add("C", &[]).unwrap();
    assert_eq!(task.id, 3);
    assert!(store.get(1).is_none());
}

#[test]
fn test_modify_preserves_labels_when_omitted() {
    let mut store = TaskStore::parse("1;Old;urgent,home\n");
    assert_eq!(store.modify(1, "New", None), ModifyOutcome::Modified);
    let task = store.get(1).unwrap();
    assert_eq!(task.description, "New");
    assert_eq!(task.labels, vec!["urgent", "home"]);
}

#[test]
fn test_modify_replaces_labels_when_provided() {
    let mut store = TaskStore::parse("1;Old;urgent\n");
    let labels = vec!["bills".to_string()];
    assert_eq!(store.modify(1, "New", Some(&labels)), ModifyOutcome::Modified);
    assert_eq!(store.get(1).unwrap().labels, vec!["bills"]);
}

#[test]
fn test_modify_with_empty_labels_clears() {
    let mut store = TaskStore::parse("1;Old;urgent\n");
    assert_eq!(store.modify(1, "New", Some(&[])), ModifyOutcome::Modified);
    assert!(store.get(1).unwrap().labels.is_empty());
}

#[test]
fn test_modify_missing_id_leaves_store_unchanged() {
    let mut store = TaskStore::parse("1;A;x\n2;B;y\n");
    let before = store.clone();
    assert_eq!(store.modify(99, "New", None), ModifyOutcome::NotFound);
    assert_eq!(store, before);
}

#[test]
fn test_remove_keeps_surviving_ids() {
    let mut store = TaskStore::parse("1;A;\n2;B;\n3;C;\n");
    assert_eq!(store.remove(2), RemoveOutcome::Removed);
    let ids: Vec<u32> = store.tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_remove_missing_id_leaves_store_unchanged() {
    let mut store = TaskStore::parse("1;A;\n");
    let before = store.clone();
    assert_eq!(store.remove(9), RemoveOutcome::NotFound);
    assert_eq!(store, before);
}

#[test]
fn test_add_label_is_idempotent() {
    let mut store = TaskStore::parse("1;A;\n");
    assert_eq!(store.add_label(1, "x"), AddLabelOutcome::Added);
    assert_eq!(store.add_label(1, "x"), AddLabelOutcome::AlreadyPresent);
    assert_eq!(store.get(1).unwrap().labels, vec!["x"]);
}

#[test]
fn test_add_label_missing_task() {
    let mut store = TaskStore::default();
    assert_eq!(store.add_label(1, "x"), AddLabelOutcome::NotFound);
}

#[test]
fn test_remove_label_present() {
    let mut store = TaskStore::parse("1;A;x,y\n");
    assert_eq!(store.remove_label(1, "x"), RemoveLabelOutcome::Removed);
    assert_eq!(store.get(1).unwrap().labels, vec!["y"]);
}

#[test]
fn test_remove_label_absent_leaves_labels_unchanged() {
    let mut store = TaskStore::parse("1;A;x,y\n");
    assert_eq!(store.remove_label(1, "z"), RemoveLabelOutcome::LabelMissing);
    assert_eq!(store.get(1).unwrap().labels, vec!["x", "y"]);
}

#[test]
fn test_remove_label_missing_task() {
    let mut store = TaskStore::parse("1;A;x\n");
    assert_eq!(store.remove_label(2, "x"), RemoveLabelOutcome::NotFound);
}

#[test]
fn test_set_labels_replaces_set() {
    let mut store = TaskStore::parse("1;A;x,y\n");
    let labels = vec!["z".to_string(), "z".to_string()];
    assert_eq!(store.set_labels(1, &labels), SetLabelsOutcome::Replaced);
    assert_eq!(store.get(1).unwrap().labels, vec!["z"]);
}

#[test]
fn test_set_labels_empty_clears() {
    let mut store = TaskStore::parse("1;A;x,y\n");
    assert_eq!(store.set_labels(1, &[]), SetLabelsOutcome::Replaced);
    assert!(store.get(1).unwrap().labels.is_empty());
}

#[test]
fn test_set_labels_missing_task() {
    let mut store = TaskStore::default();
    assert_eq!(store.set_labels(1, &[]), SetLabelsOutcome::NotFound);
}

#[test]
fn test_sorted_ascends_by_id_without_reordering_file() {
    let store = TaskStore::parse("3;C;\n1;A;\n2;B;\n");
    let sorted_ids: Vec<u32> = store.sorted().iter().map(|t| t.id).collect();
    assert_eq!(sorted_ids, vec![1, 2, 3]);
    let file_ids: Vec<u32> = store.tasks.iter().map(|t| t.id).collect();
    assert_eq!(file_ids, vec![3, 1, 2]);
}

#[test]
fn test_with_label_matches_exact_token() {
    let store = TaskStore::parse("1;A;urgent\n2;B;urge\n3;C;urgent,home\n");
    let ids: Vec<u32> = store.with_label("urgent").iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(store.with_label("nope").is_empty());
}

#[test]
fn test_duplicate_ids_first_match_wins() {
    let mut store = TaskStore::parse("1;A;\n1;B;\n");
    assert_eq!(store.get(1).unwrap().description, "A");
    assert_eq!(store.remove(1), RemoveOutcome::Removed);
    assert!(store.is_empty());
}

#[test]
fn test_has_label_and_push_label() {
    let mut task = Task::new(1, "A");
    assert!(task.push_label(" x "));
    assert!(!task.push_label("x"));
    assert!(!task.push_label("  "));
    assert!(task.has_label("x"));
    assert!(!task.has_label("y"));
    assert_eq!(task.labels_joined(), "x");
}
