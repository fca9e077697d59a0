use super::*;
use serde_json::json;

fn next_event_fixture() -> Value {
    json!({
        "id": "401548412",
        "name": "Dallas Cowboys at Arizona Cardinals",
        "shortName": "DAL @ ARI",
        "date": "2026-09-13T20:25Z",
        "season": {"displayName": "2026 Regular Season"},
        "week": {"text": "Week 2"},
        "competitions": [{
            "competitors": [
                {
                    "team": {"id": "22", "displayName": "Arizona Cardinals", "nickname": "Cardinals", "location": "Arizona", "abbreviation": "ARI"},
                    "homeAway": "home",
                    "curatedRank": {"current": 14}
                },
                {
                    "team": {"id": "6", "displayName": "Dallas Cowboys", "nickname": "Cowboys", "location": "Dallas", "abbreviation": "DAL"},
                    "homeAway": "away",
                    "curatedRank": {"current": 9}
                }
            ],
            "venue": {"fullName": "State Farm Stadium", "address": {"city": "Glendale", "state": "AZ", "country": "USA"}},
            "broadcasts": [
                {"media": {"shortName": "FOX", "name": "Fox Sports"}},
                {"media": {"shortName": "FOX"}},
                {"media": {"name": "ESPN Radio"}}
            ],
            "tickets": [
                {"summary": "Tickets as low as $85", "startingPrice": 85.0},
                {"summary": "ignored", "startingPrice": 300.0}
            ],
            "status": {
                "detail": "Sun, September 13th at 1:25 PM MST",
                "shortDetail": "9/13 - 1:25 PM MST",
                "type": {"detail": "Scheduled for 9/13", "shortDetail": "9/13"}
            }
        }]
    })
}

#[test]
fn test_normalize_next_event_full() {
    let event = normalize_next_event(&next_event_fixture(), Some("22")).unwrap();
    assert_eq!(event.id, "401548412");
    assert_eq!(event.short_name.as_deref(), Some("DAL @ ARI"));
    assert_eq!(event.opponent_name.as_deref(), Some("Dallas Cowboys"));
    assert_eq!(event.opponent_abbreviation.as_deref(), Some("DAL"));
    assert_eq!(event.opponent_rank, Some(9.0));
    assert_eq!(event.is_home, Some(true));
    assert_eq!(event.venue_name.as_deref(), Some("State Farm Stadium"));
    assert_eq!(event.venue_city.as_deref(), Some("Glendale"));
    assert_eq!(event.season_text.as_deref(), Some("2026 Regular Season"));
    assert_eq!(event.week_text.as_deref(), Some("Week 2"));
}

#[test]
fn test_broadcasts_deduplicated_in_order() {
    let event = normalize_next_event(&next_event_fixture(), Some("22")).unwrap();
    assert_eq!(event.broadcasts, vec!["FOX", "ESPN Radio"]);
}

#[test]
fn test_first_ticket_wins() {
    let event = normalize_next_event(&next_event_fixture(), Some("22")).unwrap();
    assert_eq!(event.ticket_summary.as_deref(), Some("Tickets as low as $85"));
    assert_eq!(event.ticket_starting_price, Some(85.0));
}

#[test]
fn test_status_type_object_overrides_detail() {
    let event = normalize_next_event(&next_event_fixture(), Some("22")).unwrap();
    assert_eq!(event.status_detail.as_deref(), Some("Scheduled for 9/13"));
    assert_eq!(event.status_short_detail.as_deref(), Some("9/13"));
}

#[test]
fn test_status_without_type_object() {
    let raw = json!({
        "id": "1",
        "competitions": [{
            "status": {"detail": "Final", "shortDetail": "F"}
        }]
    });
    let event = normalize_next_event(&raw, None).unwrap();
    assert_eq!(event.status_detail.as_deref(), Some("Final"));
    assert_eq!(event.status_short_detail.as_deref(), Some("F"));
}

#[test]
fn test_missing_id_invalidates_event() {
    assert!(normalize_next_event(&json!({"name": "No Id"}), None).is_none());
    assert!(normalize_next_event(&json!(42), None).is_none());
}

#[test]
fn test_event_without_competitions_still_valid() {
    let event = normalize_next_event(&json!({"id": "9", "name": "TBD"}), None).unwrap();
    assert_eq!(event.id, "9");
    assert!(event.opponent_name.is_none());
    assert!(event.is_home.is_none());
    assert!(event.broadcasts.is_empty());
}

#[test]
fn test_is_home_inferred_from_opponent_when_ours_missing() {
    // Our competitor entry is absent; the opponent being home makes us away.
    let raw = json!({
        "id": "2",
        "competitions": [{
            "competitors": [
                {"team": {"id": "6", "displayName": "Dallas Cowboys"}, "homeAway": "home"}
            ]
        }]
    });
    let event = normalize_next_event(&raw, Some("22")).unwrap();
    assert_eq!(event.is_home, Some(false));
}

#[test]
fn test_is_home_unknown_when_nobody_says() {
    let raw = json!({
        "id": "3",
        "competitions": [{
            "competitors": [{"team": {"id": "6", "displayName": "Dallas Cowboys"}}]
        }]
    });
    let event = normalize_next_event(&raw, Some("22")).unwrap();
    assert!(event.is_home.is_none());
}

#[test]
fn test_opponent_name_fallback_chain() {
    let raw = json!({
        "id": "4",
        "competitions": [{
            "competitors": [
                {"team": {"id": "6", "nickname": "Cowboys", "location": "Dallas"}}
            ]
        }]
    });
    let event = normalize_next_event(&raw, Some("22")).unwrap();
    assert_eq!(event.opponent_name.as_deref(), Some("Cowboys"));

    let location_only = json!({
        "id": "5",
        "competitions": [{
            "competitors": [{"team": {"id": "6", "location": "Dallas"}}]
        }]
    });
    let event = normalize_next_event(&location_only, Some("22")).unwrap();
    assert_eq!(event.opponent_name.as_deref(), Some("Dallas"));
}

#[test]
fn test_schedule_event_week_number_backfill() {
    let raw = json!({
        "id": "6",
        "week": {"number": 4},
        "seasonType": {"name": "Regular Season"},
        "competitions": [{
            "broadcasts": [{"names": ["CBS", "CBS", "Westwood One"]}]
        }]
    });
    let event = normalize_schedule_event(&raw, Some("22")).unwrap();
    assert_eq!(event.week_text.as_deref(), Some("Week 4"));
    assert_eq!(event.season_text.as_deref(), Some("Regular Season"));
    assert_eq!(event.broadcasts, vec!["CBS", "Westwood One"]);
}

#[test]
fn test_first_schedule_event_skips_invalid_entries() {
    let payload = json!({
        "events": [
            {"name": "corrupt, no id"},
            {"id": "401", "name": "Valid Game"}
        ]
    });
    let event = first_schedule_event(&payload, None).unwrap();
    assert_eq!(event.id, "401");

    assert!(first_schedule_event(&json!({}), None).is_none());
    assert!(first_schedule_event(&json!({"events": "nope"}), None).is_none());
}
