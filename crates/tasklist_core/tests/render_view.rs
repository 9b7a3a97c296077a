use tasklist_core::{
    render, ComposerState, EditSession, FixedClock, ListView, RowMode, Task, TaskId,
    TaskListController,
};

fn tasks(texts: &[&str]) -> Vec<Task> {
    texts
        .iter()
        .enumerate()
        .map(|(idx, text)| Task::new(TaskId::from_raw(idx as u64 + 1), text, 0).unwrap())
        .collect()
}

#[test]
fn empty_list_has_one_placeholder_and_no_items() {
    let view = render(&[], None, &ComposerState::focused());

    assert!(view.is_placeholder());
    assert_eq!(view.item_count(), 0);
    assert!(view.items().is_empty());
    assert_eq!(view.editing_item(), None);
}

#[test]
fn non_empty_list_has_one_item_per_task_in_order() {
    let tasks = tasks(&["one", "two", "three"]);
    let view = render(&tasks, None, &ComposerState::focused());

    assert!(!view.is_placeholder());
    assert_eq!(view.item_count(), 3);
    let rendered: Vec<_> = view.items().iter().map(|item| item.text.as_str()).collect();
    assert_eq!(rendered, vec!["one", "two", "three"]);
    assert!(view.items().iter().all(|item| item.mode == RowMode::ReadOnly));
    assert!(view.items().iter().all(|item| item.delete_label == "Delete"));
}

#[test]
fn session_for_missing_task_renders_nothing_in_edit_mode() {
    let tasks = tasks(&["one"]);
    let session = EditSession {
        task_id: TaskId::from_raw(50),
        draft: "orphan".to_string(),
    };
    let view = render(&tasks, Some(&session), &ComposerState::focused());

    assert_eq!(view.editing_item(), None);
    assert_eq!(view.items()[0].text, "one");
}

#[test]
fn composer_value_is_rendered() {
    let composer = ComposerState {
        value: "partial".to_string(),
        focused: true,
    };
    let view = render(&[], None, &composer);

    assert_eq!(view.composer.value, "partial");
    assert_eq!(view.composer.add_label, "Add");
    assert!(view.composer.focused);
}

#[test]
fn controller_view_matches_fresh_render() {
    let mut controller = TaskListController::with_clock(FixedClock(0));
    let id = controller.add_task("a").unwrap();
    controller.add_task("b");
    controller.begin_edit(id);

    let expected = controller.view().clone();
    assert_eq!(controller.render(), &expected);
}

#[test]
fn view_serializes_with_tagged_list_kind() {
    let view = render(&tasks(&["one"]), None, &ComposerState::focused());
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["list"]["kind"], "items");
    assert_eq!(json["list"]["items"][0]["id"], 1);
    assert_eq!(json["list"]["items"][0]["mode"]["mode"], "read_only");

    let empty = render(&[], None, &ComposerState::focused());
    let json = serde_json::to_value(&empty).unwrap();
    assert_eq!(json["list"]["kind"], "empty");
    assert_eq!(json["list"]["message"], "No tasks yet. Add one above!");

    match serde_json::from_value::<tasklist_core::AppView>(json).unwrap().list {
        ListView::Empty(placeholder) => assert!(placeholder.message.starts_with("No tasks")),
        other => panic!("expected placeholder, got {other:?}"),
    }
}
