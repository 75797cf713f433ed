/// End-to-end detection scenarios: batch history, then a live stream.
use ripple_compute::{AnomalyRecord, DetectionEngine};
use ripple_core::{Amount, DetectionParams, Event};

fn amount(s: &str) -> Amount {
    s.parse().unwrap()
}

fn params(degree: u32, window: u32) -> DetectionParams {
    DetectionParams::new(degree, window).unwrap()
}

/// A befriends B; B buys 100 then 50.
fn two_friend_batch() -> Vec<Event> {
    vec![
        Event::befriend("A", "B", "2017-06-13 11:33:01"),
        Event::purchase("B", amount("100"), "2017-06-13 11:33:02"),
        Event::purchase("B", amount("50"), "2017-06-13 11:33:03"),
    ]
}

#[test]
fn large_purchase_is_flagged() {
    let mut engine = DetectionEngine::from_history(params(1, 2), two_friend_batch());

    let anomalies = engine.process_stream(vec![Event::purchase(
        "A",
        amount("10000"),
        "2017-06-13 11:33:04",
    )]);

    assert_eq!(
        anomalies,
        vec![AnomalyRecord {
            event_type: "purchase".into(),
            timestamp: "2017-06-13 11:33:04".into(),
            id: "A".into(),
            amount: "10000".into(),
            mean: "75.00".into(),
            sd: "25.00".into(),
        }]
    );
}

#[test]
fn ordinary_purchase_is_not_flagged() {
    let mut engine = DetectionEngine::from_history(params(1, 2), two_friend_batch());
    let anomalies =
        engine.process_stream(vec![Event::purchase("A", amount("120"), "2017-06-13 11:33:04")]);
    assert!(anomalies.is_empty());
}

#[test]
fn unfriended_buyer_has_no_network() {
    let mut engine = DetectionEngine::from_history(params(1, 2), two_friend_batch());
    let anomalies = engine.process_stream(vec![
        Event::unfriend("A", "B", "2017-06-13 11:33:04"),
        Event::purchase("A", amount("10000"), "2017-06-13 11:33:05"),
    ]);
    assert!(anomalies.is_empty());
    assert_eq!(engine.graph().get("A").unwrap().friend_count(), 0);
}

#[test]
fn window_uses_most_recent_purchases_across_batch_and_stream() {
    // Old, expensive history in the batch; cheap recent purchases in the stream.
    let batch = vec![
        Event::befriend("A", "B", "t"),
        Event::purchase("B", amount("1000"), "t"),
        Event::purchase("B", amount("1000"), "t"),
    ];
    let mut engine = DetectionEngine::from_history(params(1, 2), batch);

    let anomalies = engine.process_stream(vec![
        Event::purchase("B", amount("10"), "t"),
        Event::purchase("B", amount("12"), "t"),
        // Baseline is {12, 10}: mean 11, sd 1, threshold 14.
        Event::purchase("A", amount("15"), "s"),
    ]);

    assert_eq!(anomalies.len(), 1);
    assert_eq!(anomalies[0].mean, "11.00");
    assert_eq!(anomalies[0].sd, "1.00");
}

#[test]
fn degree_two_reaches_friends_of_friends() {
    // A - B - C; only C has history.
    let batch = vec![
        Event::befriend("A", "B", "t"),
        Event::befriend("B", "C", "t"),
        Event::purchase("C", amount("20"), "t"),
        Event::purchase("C", amount("40"), "t"),
    ];

    let mut narrow = DetectionEngine::from_history(params(1, 5), batch.clone());
    assert!(narrow
        .process_stream(vec![Event::purchase("A", amount("500"), "t")])
        .is_empty());

    let mut wide = DetectionEngine::from_history(params(2, 5), batch);
    let anomalies = wide.process_stream(vec![Event::purchase("A", amount("500"), "t")]);
    assert_eq!(anomalies.len(), 1);
    assert_eq!(anomalies[0].mean, "30.00");
    assert_eq!(anomalies[0].sd, "10.00");
}

#[test]
fn origin_purchases_leak_into_degree_two_baseline() {
    // With only A - B, A's degree-2 network is {A}: its own history is the baseline.
    let batch = vec![
        Event::befriend("A", "B", "t"),
        Event::purchase("A", amount("10"), "t"),
        Event::purchase("A", amount("30"), "t"),
        Event::purchase("B", amount("9999"), "t"),
    ];
    let mut engine = DetectionEngine::from_history(params(2, 10), batch);

    let anomalies = engine.process_stream(vec![Event::purchase("A", amount("61"), "t")]);
    assert_eq!(anomalies.len(), 1);
    assert_eq!(anomalies[0].mean, "20.00");
    assert_eq!(anomalies[0].sd, "10.00");
}

#[test]
fn anomalies_are_emitted_in_stream_order() {
    let mut engine = DetectionEngine::from_history(params(1, 3), two_friend_batch());
    let anomalies = engine.process_stream(vec![
        Event::purchase("A", amount("5000"), "first"),
        Event::befriend("C", "B", "t"),
        Event::purchase("C", amount("90000"), "second"),
    ]);

    let order: Vec<&str> = anomalies.iter().map(|r| r.timestamp.as_str()).collect();
    assert_eq!(order, vec!["first", "second"]);
}

#[test]
fn single_network_purchase_never_flags() {
    let batch = vec![
        Event::befriend("A", "B", "t"),
        Event::purchase("B", amount("1"), "t"),
    ];
    let mut engine = DetectionEngine::from_history(params(1, 50), batch);
    let anomalies = engine.process_stream(vec![
        Event::purchase("A", amount("1000000"), "t"),
        Event::purchase("A", amount("2000000"), "t"),
    ]);
    assert!(anomalies.is_empty());
}
