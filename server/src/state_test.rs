use super::*;

fn record(last_report: Option<OffsetDateTime>) -> TapRecord {
    TapRecord {
        id: Uuid::nil(),
        name: "lobby".into(),
        description: String::new(),
        created_at: OffsetDateTime::UNIX_EPOCH,
        last_report,
    }
}

#[test]
fn never_reported_tap_is_offline() {
    let now = OffsetDateTime::UNIX_EPOCH + time::Duration::hours(1);
    assert!(!record(None).is_online(now, time::Duration::minutes(2)));
}

#[test]
fn recent_report_is_online() {
    let now = OffsetDateTime::UNIX_EPOCH + time::Duration::hours(1);
    let tap = record(Some(now - time::Duration::seconds(30)));
    assert!(tap.is_online(now, time::Duration::minutes(2)));
}

#[test]
fn report_exactly_at_window_edge_is_offline() {
    let now = OffsetDateTime::UNIX_EPOCH + time::Duration::hours(1);
    let tap = record(Some(now - time::Duration::minutes(2)));
    assert!(!tap.is_online(now, time::Duration::minutes(2)));
}

#[test]
fn new_state_has_no_taps() {
    let state = AppState::new(time::Duration::minutes(2));
    assert!(state.taps.try_read().unwrap().is_empty());
    assert_eq!(state.online_window, time::Duration::minutes(2));
}
