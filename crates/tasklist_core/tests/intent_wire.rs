use tasklist_core::{Control, Intent, Key, Target, TaskId, UiEvent};

#[test]
fn intent_serialization_uses_tagged_snake_case() {
    let intent = Intent::CommitEdit {
        id: TaskId::from_raw(4),
        text: "Buy oat milk".to_string(),
    };

    let json = serde_json::to_value(&intent).unwrap();
    assert_eq!(json["intent"], "commit_edit");
    assert_eq!(json["id"], 4);
    assert_eq!(json["text"], "Buy oat milk");

    let decoded: Intent = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, intent);
    assert_eq!(decoded.name(), "commit_edit");
    assert_eq!(decoded.task_id(), Some(TaskId::from_raw(4)));
}

#[test]
fn composer_intents_carry_no_task_id() {
    let json = serde_json::to_value(Intent::SubmitComposer).unwrap();
    assert_eq!(json, serde_json::json!({ "intent": "submit_composer" }));
    assert_eq!(Intent::SubmitComposer.task_id(), None);
}

#[test]
fn host_events_decode_from_json() {
    let click: UiEvent = serde_json::from_value(serde_json::json!({
        "event": "click",
        "control": { "edit_button": 2 }
    }))
    .unwrap();
    assert_eq!(click, UiEvent::click(Control::EditButton(TaskId::from_raw(2))));

    let key: UiEvent = serde_json::from_value(serde_json::json!({
        "event": "key_press",
        "target": "composer",
        "key": "enter"
    }))
    .unwrap();
    assert_eq!(key, UiEvent::key(Target::Composer, Key::Enter));

    let input = UiEvent::input(Target::TaskInput(TaskId::from_raw(9)), "draft");
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(json["event"], "input");
    assert_eq!(json["target"]["task_input"], 9);
    assert_eq!(serde_json::from_value::<UiEvent>(json).unwrap(), input);
}
