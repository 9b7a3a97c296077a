use tasklist_core::{Control, FixedClock, Key, Target, TaskListController, UiEvent};

fn controller() -> TaskListController<FixedClock> {
    TaskListController::with_clock(FixedClock(0))
}

#[test]
fn typing_then_enter_in_composer_adds_task() {
    let mut controller = controller();

    assert!(controller.handle_event(&UiEvent::input(Target::Composer, "Buy milk")));
    assert!(controller.handle_event(&UiEvent::key(Target::Composer, Key::Enter)));

    assert_eq!(controller.len(), 1);
    assert_eq!(controller.tasks()[0].text, "Buy milk");
    assert_eq!(controller.view().composer.value, "");
}

#[test]
fn add_click_with_blank_composer_changes_nothing() {
    let mut controller = controller();
    controller.handle_event(&UiEvent::input(Target::Composer, "   "));
    controller.handle_event(&UiEvent::click(Control::AddButton));

    assert!(controller.is_empty());
    assert!(controller.view().is_placeholder());
}

#[test]
fn edit_click_type_and_blur_commits() {
    let mut controller = controller();
    let id = controller.add_task("Buy milk").unwrap();

    controller.handle_event(&UiEvent::click(Control::EditButton(id)));
    controller.handle_event(&UiEvent::input(Target::TaskInput(id), "Buy oat milk"));
    controller.handle_event(&UiEvent::blur(Target::TaskInput(id)));

    assert_eq!(controller.task(id).unwrap().text, "Buy oat milk");
    assert_eq!(controller.editing_id(), None);
}

#[test]
fn enter_in_editing_row_commits_and_escape_cancels() {
    let mut controller = controller();
    let id = controller.add_task("first").unwrap();

    controller.handle_event(&UiEvent::click(Control::EditButton(id)));
    controller.handle_event(&UiEvent::input(Target::TaskInput(id), "second"));
    controller.handle_event(&UiEvent::key(Target::TaskInput(id), Key::Enter));
    assert_eq!(controller.task(id).unwrap().text, "second");

    controller.handle_event(&UiEvent::click(Control::EditButton(id)));
    controller.handle_event(&UiEvent::input(Target::TaskInput(id), "third"));
    controller.handle_event(&UiEvent::key(Target::TaskInput(id), Key::Escape));
    assert_eq!(controller.task(id).unwrap().text, "second");
    assert_eq!(controller.editing_id(), None);
}

#[test]
fn read_only_row_ignores_enter_blur_and_typing() {
    let mut controller = controller();
    let id = controller.add_task("fixed").unwrap();
    let revision = controller.revision();

    assert!(!controller.handle_event(&UiEvent::key(Target::TaskInput(id), Key::Enter)));
    assert!(!controller.handle_event(&UiEvent::blur(Target::TaskInput(id))));
    assert!(!controller.handle_event(&UiEvent::input(Target::TaskInput(id), "x")));
    assert_eq!(controller.revision(), revision);
}

#[test]
fn edit_click_on_second_row_cancels_first() {
    let mut controller = controller();
    let a = controller.add_task("a").unwrap();
    let b = controller.add_task("b").unwrap();

    controller.handle_event(&UiEvent::click(Control::EditButton(a)));
    controller.handle_event(&UiEvent::input(Target::TaskInput(a), "a changed"));
    controller.handle_event(&UiEvent::click(Control::EditButton(b)));

    assert_eq!(controller.task(a).unwrap().text, "a");
    assert_eq!(controller.editing_id(), Some(b));
}

#[test]
fn delete_click_removes_row() {
    let mut controller = controller();
    let id = controller.add_task("gone").unwrap();

    assert!(controller.handle_event(&UiEvent::click(Control::DeleteButton(id))));
    assert!(controller.is_empty());
    assert!(!controller.handle_event(&UiEvent::click(Control::DeleteButton(id))));
}

#[test]
fn save_click_after_blur_commit_leaves_row_read_only() {
    let mut controller = controller();
    let id = controller.add_task("a").unwrap();
    controller.handle_event(&UiEvent::click(Control::EditButton(id)));
    controller.handle_event(&UiEvent::input(Target::TaskInput(id), "b"));

    // Pressing Save: the input blurs first, then the click lands, both
    // raised against the view the host drew while the row was editing.
    let seen = controller.revision();
    assert!(controller.handle_event_at(&UiEvent::blur(Target::TaskInput(id)), seen));
    assert!(!controller.handle_event_at(&UiEvent::click(Control::EditButton(id)), seen));

    assert_eq!(controller.task(id).unwrap().text, "b");
    assert_eq!(controller.editing_id(), None);
    let item = controller.view().item(id).unwrap();
    assert!(item.is_read_only());
    assert_eq!(item.edit_label, "Edit");
}

#[test]
fn edit_click_on_fresh_view_after_blur_reenters_edit_mode() {
    let mut controller = controller();
    let id = controller.add_task("a").unwrap();
    controller.handle_event(&UiEvent::click(Control::EditButton(id)));
    controller.handle_event(&UiEvent::blur(Target::TaskInput(id)));

    let seen = controller.revision();
    assert!(controller.handle_event_at(&UiEvent::click(Control::EditButton(id)), seen));
    assert_eq!(controller.editing_id(), Some(id));
}

#[test]
fn stale_click_only_suppresses_the_row_that_left_edit_mode() {
    let mut controller = controller();
    let a = controller.add_task("a").unwrap();
    let b = controller.add_task("b").unwrap();
    controller.handle_event(&UiEvent::click(Control::EditButton(a)));

    let seen = controller.revision();
    controller.handle_event_at(&UiEvent::blur(Target::TaskInput(a)), seen);
    assert!(controller.handle_event_at(&UiEvent::click(Control::EditButton(b)), seen));
    assert_eq!(controller.editing_id(), Some(b));
}

#[test]
fn composer_loses_focus_during_edit_and_stays_unfocused_after_save() {
    let mut controller = controller();
    let id = controller.add_task("a").unwrap();
    assert!(controller.view().composer.focused);

    controller.handle_event(&UiEvent::click(Control::EditButton(id)));
    assert!(!controller.composer().focused);
    controller.handle_event(&UiEvent::key(Target::TaskInput(id), Key::Enter));
    assert!(!controller.view().composer.focused);

    controller.handle_event(&UiEvent::input(Target::Composer, "next"));
    controller.handle_event(&UiEvent::key(Target::Composer, Key::Enter));
    assert!(controller.view().composer.focused);
}
