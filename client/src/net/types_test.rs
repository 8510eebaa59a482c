use super::*;

#[test]
fn tap_deserializes_from_server_field_names() {
    let raw = r#"{"uuid":"tap-1","name":"Lobby","is_online":true}"#;
    let tap: Tap = serde_json::from_str(raw).unwrap();
    assert_eq!(tap.id, "tap-1");
    assert_eq!(tap.display_name, "Lobby");
    assert!(tap.is_online);
}

#[test]
fn tap_serializes_back_to_server_field_names() {
    let tap = Tap { id: "tap-1".to_owned(), display_name: "Lobby".to_owned(), is_online: false };
    let value = serde_json::to_value(&tap).unwrap();
    assert_eq!(value, serde_json::json!({"uuid": "tap-1", "name": "Lobby", "is_online": false}));
}

#[test]
fn tap_list_ignores_extra_fields() {
    let raw = r#"{
        "count": 1,
        "taps": [{"uuid":"tap-1","name":"Lobby","is_online":false,"description":"east wing","last_report":null}]
    }"#;
    let list: TapListResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(list.count, 1);
    assert_eq!(list.taps.len(), 1);
    assert!(!list.taps[0].is_online);
}

#[test]
fn tap_list_count_defaults_when_missing() {
    let list: TapListResponse = serde_json::from_str(r#"{"taps":[]}"#).unwrap();
    assert_eq!(list.count, 0);
    assert!(list.taps.is_empty());
}

#[test]
fn tap_missing_online_flag_is_rejected() {
    let raw = r#"{"uuid":"tap-1","name":"Lobby"}"#;
    assert!(serde_json::from_str::<Tap>(raw).is_err());
}
