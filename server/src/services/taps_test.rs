use super::*;
use crate::state::test_helpers;

fn at(minutes: i64) -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH + time::Duration::minutes(minutes)
}

// =============================================================================
// create_tap
// =============================================================================

#[tokio::test]
async fn create_tap_registers_offline_tap() {
    let state = test_helpers::test_app_state();
    let details = create_tap(&state, "  lobby  ", " east wing ", at(0)).await.unwrap();
    assert_eq!(details.name, "lobby");
    assert_eq!(details.description, "east wing");
    assert!(!details.is_online);
    assert_eq!(details.last_report, None);
    assert!(state.taps.read().await.contains_key(&details.uuid));
}

#[tokio::test]
async fn create_tap_rejects_blank_name() {
    let state = test_helpers::test_app_state();
    let err = create_tap(&state, "   ", "", at(0)).await.unwrap_err();
    assert!(matches!(err, TapError::BlankName));
    assert!(state.taps.read().await.is_empty());
}

// =============================================================================
// seed_taps
// =============================================================================

#[tokio::test]
async fn seed_taps_keeps_fixed_ids() {
    let state = test_helpers::test_app_state();
    let seeds = vec![
        TapSeed { uuid: Some(Uuid::from_u128(7)), name: "roof".into(), description: String::new() },
        TapSeed { uuid: None, name: "basement".into(), description: String::new() },
    ];
    assert_eq!(seed_taps(&state, &seeds, at(0)).await.unwrap(), 2);
    let taps = state.taps.read().await;
    assert_eq!(taps.len(), 2);
    assert_eq!(taps[&Uuid::from_u128(7)].name, "roof");
}

#[tokio::test]
async fn seed_taps_rejects_duplicate_ids() {
    let state = test_helpers::test_app_state();
    let seed = TapSeed { uuid: Some(Uuid::from_u128(7)), name: "roof".into(), description: String::new() };
    let err = seed_taps(&state, &[seed.clone(), seed], at(0)).await.unwrap_err();
    assert!(matches!(err, TapError::Duplicate(id) if id == Uuid::from_u128(7)));
    assert!(state.taps.read().await.is_empty());
}

#[tokio::test]
async fn seed_taps_blank_name_inserts_nothing() {
    let state = test_helpers::test_app_state();
    let seeds = vec![
        TapSeed { uuid: Some(Uuid::from_u128(1)), name: "roof".into(), description: String::new() },
        TapSeed { uuid: Some(Uuid::from_u128(2)), name: "  ".into(), description: String::new() },
    ];
    let err = seed_taps(&state, &seeds, at(0)).await.unwrap_err();
    assert!(matches!(err, TapError::BlankName));
    assert!(state.taps.read().await.is_empty());
}

#[tokio::test]
async fn seed_taps_clashing_with_existing_tap_inserts_nothing() {
    let state = test_helpers::test_app_state();
    let existing = test_helpers::seed_tap(&state, "lobby", None).await;
    let seeds = vec![
        TapSeed { uuid: Some(Uuid::from_u128(1)), name: "roof".into(), description: String::new() },
        TapSeed { uuid: Some(existing), name: "lobby again".into(), description: String::new() },
    ];
    let err = seed_taps(&state, &seeds, at(0)).await.unwrap_err();
    assert!(matches!(err, TapError::Duplicate(id) if id == existing));
    assert_eq!(state.taps.read().await.len(), 1);
}

// =============================================================================
// record_report
// =============================================================================

#[tokio::test]
async fn record_report_brings_tap_online() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_tap(&state, "lobby", None).await;
    record_report(&state, id, at(10)).await.unwrap();
    let details = find_tap(&state, id, at(11)).await.unwrap();
    assert!(details.is_online);
    assert_eq!(details.last_report, Some(at(10)));
}

#[tokio::test]
async fn record_report_never_moves_backwards() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_tap(&state, "lobby", Some(at(10))).await;
    record_report(&state, id, at(5)).await.unwrap();
    assert_eq!(state.taps.read().await[&id].last_report, Some(at(10)));
}

#[tokio::test]
async fn record_report_unknown_tap() {
    let state = test_helpers::test_app_state();
    let err = record_report(&state, Uuid::nil(), at(0)).await.unwrap_err();
    assert!(matches!(err, TapError::NotFound(_)));
}

// =============================================================================
// list_taps / find_tap
// =============================================================================

#[tokio::test]
async fn list_taps_sorted_with_liveness() {
    let state = test_helpers::test_app_state();
    test_helpers::seed_tap(&state, "roof", Some(at(9))).await;
    test_helpers::seed_tap(&state, "lobby", Some(at(1))).await;
    let list = list_taps(&state, at(10)).await;
    let names: Vec<&str> = list.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["lobby", "roof"]);
    assert!(!list[0].is_online);
    assert!(list[1].is_online);
}

#[tokio::test]
async fn list_taps_empty_registry() {
    let state = test_helpers::test_app_state();
    assert!(list_taps(&state, at(0)).await.is_empty());
}

#[tokio::test]
async fn tap_goes_offline_after_window() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_tap(&state, "lobby", Some(at(0))).await;
    assert!(find_tap(&state, id, at(1)).await.unwrap().is_online);
    assert!(!find_tap(&state, id, at(3)).await.unwrap().is_online);
}

#[tokio::test]
async fn find_tap_unknown() {
    let state = test_helpers::test_app_state();
    assert!(matches!(find_tap(&state, Uuid::nil(), at(0)).await, Err(TapError::NotFound(_))));
}

#[test]
fn tap_summary_serializes_inventory_shape() {
    let summary = TapSummary { uuid: Uuid::nil(), name: "lobby".into(), is_online: true };
    assert_eq!(
        serde_json::to_value(&summary).unwrap(),
        serde_json::json!({"uuid": "00000000-0000-0000-0000-000000000000", "name": "lobby", "is_online": true})
    );
}

#[test]
fn tap_details_serializes_timestamps_as_rfc3339() {
    let details = TapDetails {
        uuid: Uuid::nil(),
        name: "lobby".into(),
        description: String::new(),
        is_online: false,
        created_at: OffsetDateTime::UNIX_EPOCH,
        last_report: None,
    };
    let value = serde_json::to_value(&details).unwrap();
    assert_eq!(value["created_at"], "1970-01-01T00:00:00Z");
    assert!(value["last_report"].is_null());
}
