use super::*;

#[test]
fn tick_event_serializes_with_type_tag() {
    let run_id = RunId::new();
    let envelope = EventEnvelope::now(CountdownEvent::Tick {
        run_id,
        remaining: 3,
    });

    let value: serde_json::Value =
        serde_json::from_str(&envelope.to_json_line().expect("json")).expect("parse");
    assert_eq!(value["type"], "tick");
    assert_eq!(value["payload"]["remaining"], 3);
    assert_eq!(value["payload"]["run_id"], run_id.0.to_string());
    assert!(value["emitted_at"].is_string());
}

#[test]
fn idle_trigger_change_omits_run_id() {
    let json = serde_json::to_string(&CountdownEvent::TriggerChanged {
        run_id: None,
        enabled: true,
    })
    .expect("json");
    assert_eq!(json, r#"{"type":"trigger_changed","payload":{"enabled":true}}"#);
}

#[test]
fn envelope_round_trips_through_json() {
    let envelope = EventEnvelope::now(CountdownEvent::Rejected {
        input: "abc".into(),
        message: "Please enter a number between 1 and 60".into(),
    });
    let decoded: EventEnvelope =
        serde_json::from_str(&envelope.to_json_line().expect("json")).expect("decode");
    assert_eq!(decoded, envelope);
    assert_eq!(decoded.event.run_id(), None);
}
