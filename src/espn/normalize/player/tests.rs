use super::*;
use serde_json::json;

fn full_athlete() -> Value {
    json!({
        "id": 4241479,
        "uid": "s:20~l:28~a:4241479",
        "guid": "abcd-1234",
        "slug": "pat-example",
        "type": "football",
        "displayName": "Pat Example",
        "fullName": "Patrick Example",
        "firstName": "Patrick",
        "lastName": "Example",
        "shortName": "P. Example",
        "jersey": "12",
        "position": {"displayName": "Quarterback", "abbreviation": "QB", "name": "Quarterback", "id": "8"},
        "experience": {"displayValue": "5th Season", "abbreviation": "5th", "years": 5},
        "displayHeight": "6' 2\"",
        "displayWeight": "210 lbs",
        "birthPlace": {"city": "Austin", "state": "TX", "country": "USA"},
        "birthCountry": {"name": "United States", "abbreviation": "USA"},
        "flag": {"href": "https://a.espncdn.com/flags/usa.png", "alt": "USA"},
        "status": {"name": "Active", "type": "active", "abbreviation": "A"},
        "active": true,
        "injuries": [
            {"id": "900", "type": "Hamstring", "status": "Questionable", "description": "Hamstring strain", "date": "2026-08-01T12:00Z"}
        ]
    })
}

#[test]
fn test_normalize_player_full_record() {
    let player = normalize_player(&full_athlete()).unwrap();
    assert_eq!(player.id, "4241479");
    assert_eq!(player.display_name, "Pat Example");
    assert_eq!(player.jersey, "12");
    assert_eq!(player.position, "Quarterback");
    assert_eq!(player.position_abbreviation.as_deref(), Some("QB"));
    assert_eq!(player.experience, "5th Season");
    assert_eq!(player.experience_years, Some(5.0));
    assert_eq!(player.height, "6' 2\"");
    assert_eq!(player.weight, "210 lbs");
    assert_eq!(player.hometown, "Austin, TX");
    assert_eq!(player.status, "Active");
    assert!(player.is_active);
    assert_eq!(player.injuries.len(), 1);
    assert_eq!(player.injuries[0].status.as_deref(), Some("Questionable"));
}

#[test]
fn test_normalize_player_numeric_id_is_stringified() {
    let player = normalize_player(&json!({"id": 77, "displayName": "N"})).unwrap();
    assert_eq!(player.id, "77");
}

#[test]
fn test_normalize_player_missing_id_is_dropped() {
    assert!(normalize_player(&json!({"displayName": "No Id"})).is_none());
    assert!(normalize_player(&json!({"id": "  ", "displayName": "Blank Id"})).is_none());
}

#[test]
fn test_normalize_player_missing_display_name_is_dropped() {
    assert!(normalize_player(&json!({"id": "1"})).is_none());
    assert!(normalize_player(&json!({"id": "1", "displayName": ""})).is_none());
}

#[test]
fn test_normalize_player_full_name_backfills_display_name() {
    let player = normalize_player(&json!({"id": "1", "fullName": "Backup Name"})).unwrap();
    assert_eq!(player.display_name, "Backup Name");
}

#[test]
fn test_normalize_player_non_object_is_dropped() {
    assert!(normalize_player(&json!("athlete")).is_none());
    assert!(normalize_player(&json!(null)).is_none());
}

#[test]
fn test_dash_defaults_for_missing_display_fields() {
    let player = normalize_player(&json!({"id": "1", "displayName": "Sparse"})).unwrap();
    assert_eq!(player.jersey, "—");
    assert_eq!(player.position, "—");
    assert_eq!(player.experience, "—");
    assert_eq!(player.height, "—");
    assert_eq!(player.weight, "—");
    assert_eq!(player.hometown, "—");
    assert_eq!(player.status, "—");
    assert!(player.position_abbreviation.is_none());
}

#[test]
fn test_hometown_uses_country_when_state_missing() {
    let player = normalize_player(&json!({
        "id": "1",
        "displayName": "Abroad",
        "birthPlace": {"city": "London", "country": "England"}
    }))
    .unwrap();
    assert_eq!(player.hometown, "London, England");
}

#[test]
fn test_hometown_single_part() {
    let player = normalize_player(&json!({
        "id": "1",
        "displayName": "Stateless",
        "birthPlace": {"state": "TX"}
    }))
    .unwrap();
    assert_eq!(player.hometown, "TX");
}

#[test]
fn test_birth_country_falls_back_to_country_object() {
    let player = normalize_player(&json!({
        "id": "1",
        "displayName": "Intl",
        "birthCountry": {"name": "Ghana", "abbreviation": "GHA"}
    }))
    .unwrap();
    assert_eq!(player.birth_country.as_deref(), Some("Ghana"));
    assert_eq!(player.birth_country_abbreviation.as_deref(), Some("GHA"));
}

#[test]
fn test_is_active_inferred_from_status_type() {
    // no explicit `active` flag; status type decides, case-insensitively
    let player = normalize_player(&json!({
        "id": "1",
        "displayName": "Implicit",
        "status": {"type": "Active"}
    }))
    .unwrap();
    assert!(player.is_active);

    let benched = normalize_player(&json!({
        "id": "2",
        "displayName": "Out",
        "status": {"type": "injured"}
    }))
    .unwrap();
    assert!(!benched.is_active);
}

#[test]
fn test_explicit_active_flag_wins_over_status_type() {
    let player = normalize_player(&json!({
        "id": "1",
        "displayName": "Flagged",
        "active": false,
        "status": {"type": "active"}
    }))
    .unwrap();
    assert!(!player.is_active);
}

#[test]
fn test_normalize_injury_object_status_priority() {
    let injury = normalize_injury(&json!({
        "status": {"detail": "Out 4 weeks", "name": "Out"}
    }))
    .unwrap();
    assert_eq!(injury.status.as_deref(), Some("Out 4 weeks"));

    let described = normalize_injury(&json!({
        "status": {"description": "Day to day", "detail": "ignored"}
    }))
    .unwrap();
    assert_eq!(described.status.as_deref(), Some("Day to day"));

    let named = normalize_injury(&json!({"status": {"name": "Out"}})).unwrap();
    assert_eq!(named.status.as_deref(), Some("Out"));
}

#[test]
fn test_normalize_injury_all_null_is_dropped() {
    let raw = json!({"description": "", "type": null, "status": null, "date": null, "id": null});
    assert!(normalize_injury(&raw).is_none());
    assert!(normalize_injury(&json!({})).is_none());
    assert!(normalize_injury(&json!("injury")).is_none());
}

#[test]
fn test_normalize_injury_single_field_survives() {
    let injury = normalize_injury(&json!({"date": "2026-01-01"})).unwrap();
    assert_eq!(injury.date.as_deref(), Some("2026-01-01"));
    assert!(injury.id.is_none());
}

#[test]
fn test_malformed_injuries_list_degrades_to_empty() {
    let player = normalize_player(&json!({
        "id": "1",
        "displayName": "Healthy",
        "injuries": "none"
    }))
    .unwrap();
    assert!(player.injuries.is_empty());
}
