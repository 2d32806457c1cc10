use super::*;

// =============================================================
// Inbound
// =============================================================

#[test]
fn decode_open_and_close() {
    let open = decode_host_event(serde_json::json!({"action": "open"})).expect("open");
    let close = decode_host_event(serde_json::json!({"action": "close"})).expect("close");
    assert_eq!(open, HostEvent::Open);
    assert_eq!(close, HostEvent::Close);
}

#[test]
fn decode_add_message_carries_message() {
    let event = decode_host_event(serde_json::json!({
        "action": "addMessage",
        "message": {"type": "me", "message": "waves", "playerName": "Ana"}
    }))
    .expect("addMessage");
    let HostEvent::AddMessage { message } = event else {
        panic!("expected AddMessage");
    };
    assert_eq!(message.kind, MessageType::Me);
    assert_eq!(message.message, "waves");
}

#[test]
fn decode_add_messages_defaults_to_empty_list() {
    let event = decode_host_event(serde_json::json!({"action": "addMessages"})).expect("addMessages");
    assert_eq!(event, HostEvent::AddMessages { messages: Vec::new() });
}

#[test]
fn decode_add_messages_keeps_order() {
    let event = decode_host_event(serde_json::json!({
        "action": "addMessages",
        "messages": [{"message": "one"}, {"message": "two"}]
    }))
    .expect("addMessages");
    let HostEvent::AddMessages { messages } = event else {
        panic!("expected AddMessages");
    };
    let texts: Vec<_> = messages.iter().map(|m| m.message.as_str()).collect();
    assert_eq!(texts, vec!["one", "two"]);
}

#[test]
fn decode_add_messages_skips_malformed_entries() {
    let event = decode_host_event(serde_json::json!({
        "action": "addMessages",
        "messages": [{"message": "one"}, {"playerName": "x"}, 7, {"message": "three"}]
    }))
    .expect("addMessages");
    let HostEvent::AddMessages { messages } = event else {
        panic!("expected AddMessages");
    };
    let texts: Vec<_> = messages.iter().map(|m| m.message.as_str()).collect();
    assert_eq!(texts, vec!["one", "three"]);
}

#[test]
fn decode_add_messages_null_batch_is_empty() {
    let event = decode_host_event(serde_json::json!({"action": "addMessages", "messages": null}))
        .expect("addMessages");
    assert_eq!(event, HostEvent::AddMessages { messages: Vec::new() });
}

#[test]
fn decode_config_reads_flattened_fields() {
    let event = decode_host_event(serde_json::json!({
        "action": "config",
        "maxMessages": 20,
        "fadeTimeout": 1500
    }))
    .expect("config");
    let HostEvent::Config(patch) = event else {
        panic!("expected Config");
    };
    assert_eq!(patch.max_messages, Some(20));
    assert_eq!(patch.fade_timeout, Some(1500));
    assert_eq!(patch.max_length, None);
}

#[test]
fn decode_rejects_missing_action() {
    let err = decode_host_event(serde_json::json!({"message": "x"})).expect_err("no action");
    assert!(matches!(err, ProtocolError::MissingAction));

    let err = decode_host_event(serde_json::json!({"action": 5})).expect_err("numeric action");
    assert!(matches!(err, ProtocolError::MissingAction));
}

#[test]
fn decode_rejects_unknown_action() {
    let err = decode_host_event(serde_json::json!({"action": "explode"})).expect_err("unknown");
    assert!(matches!(err, ProtocolError::UnknownAction(ref a) if a == "explode"));
}

#[test]
fn decode_rejects_malformed_payload() {
    let err = decode_host_event(serde_json::json!({"action": "addMessage"})).expect_err("no message");
    assert!(matches!(err, ProtocolError::Json(_)));
}

#[test]
fn decode_str_rejects_non_json() {
    let err = decode_host_event_str("not json").expect_err("garbage");
    assert!(matches!(err, ProtocolError::Json(_)));
}

#[test]
fn decode_str_accepts_clear_messages() {
    let event = decode_host_event_str(r#"{"action":"clearMessages"}"#).expect("clear");
    assert_eq!(event, HostEvent::ClearMessages);
    assert_eq!(event.action(), "clearMessages");
}

#[test]
fn every_host_action_name_round_trips_through_action() {
    let events = [
        HostEvent::Open,
        HostEvent::Close,
        HostEvent::AddMessage { message: ChatMessage::new(MessageType::Normal, "x") },
        HostEvent::AddMessages { messages: Vec::new() },
        HostEvent::ClearMessages,
        HostEvent::Config(ConfigPatch::default()),
    ];
    let names: Vec<_> = events.iter().map(HostEvent::action).collect();
    assert_eq!(names, HOST_ACTIONS.to_vec());
}

// =============================================================
// Outbound
// =============================================================

#[test]
fn send_message_body_uses_wire_type_name() {
    let event = OutgoingEvent::SendMessage { message: "hello there".to_owned(), kind: MessageType::Ooc };
    assert_eq!(event.name(), "sendMessage");
    assert_eq!(event.body(), serde_json::json!({"message": "hello there", "type": "ooc"}));
}

#[test]
fn execute_command_body_carries_raw_command() {
    let event = OutgoingEvent::ExecuteCommand { command: "kick 5 cheating".to_owned() };
    assert_eq!(event.name(), "executeCommand");
    assert_eq!(event.body(), serde_json::json!({"command": "kick 5 cheating"}));
}

#[test]
fn close_body_is_empty_object() {
    assert_eq!(OutgoingEvent::Close.name(), "close");
    assert_eq!(OutgoingEvent::Close.body(), serde_json::json!({}));
}
