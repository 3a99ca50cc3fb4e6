#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;
use tally_core::wire::{CounterBody, DebugInfo, HealthBody, ServiceInfo};

#[test]
fn health_bodies_match_contract() {
    assert_eq!(
        serde_json::to_value(HealthBody::healthy()).unwrap(),
        json!({"status": "healthy", "redis": "connected"})
    );
    assert_eq!(
        serde_json::to_value(HealthBody::degraded()).unwrap(),
        json!({"status": "degraded", "redis": "disconnected"})
    );
}

#[test]
fn counter_read_omits_optional_fields() {
    // Absent fields must be omitted, not serialized as null.
    assert_eq!(
        serde_json::to_value(CounterBody::read(7)).unwrap(),
        json!({"count": 7})
    );
}

#[test]
fn counter_increment_carries_message() {
    assert_eq!(
        serde_json::to_value(CounterBody::incremented(3)).unwrap(),
        json!({"count": 3, "message": "Counter incremented"})
    );
}

#[test]
fn counter_unavailable_is_zero_with_error() {
    assert_eq!(
        serde_json::to_value(CounterBody::unavailable()).unwrap(),
        json!({"count": 0, "error": "Redis unavailable"})
    );
}

#[test]
fn counter_body_round_trips() {
    let body: CounterBody = serde_json::from_value(json!({"count": 12})).unwrap();
    assert_eq!(body, CounterBody::read(12));
}

#[test]
fn info_bodies_serialize_all_fields() {
    let svc = ServiceInfo {
        app: "tally-api".into(),
        version: "0.1.0".into(),
        endpoints: vec!["/health".into(), "/api/counter".into()],
    };
    assert_eq!(
        serde_json::to_value(svc).unwrap(),
        json!({
            "app": "tally-api",
            "version": "0.1.0",
            "endpoints": ["/health", "/api/counter"],
        })
    );

    let dbg = DebugInfo {
        hostname: "pod-7f9c".into(),
        redis_host: "redis.cache.svc".into(),
        redis_port: 6380,
    };
    assert_eq!(
        serde_json::to_value(dbg).unwrap(),
        json!({
            "hostname": "pod-7f9c",
            "redis_host": "redis.cache.svc",
            "redis_port": 6380,
        })
    );
}
