use serde_json::Value;

use crate::core::json::{number_or_null, to_trimmed_string, trimmed_or_null};
use crate::espn::types::{Player, PlayerInjury, DASH};

#[cfg(test)]
mod tests;

fn dash_default(v: Option<String>) -> String {
    v.unwrap_or_else(|| DASH.to_string())
}

/// Build a [`Player`] from one `team.athletes` entry.
///
/// Returns `None` (the record is dropped, not an error) unless both `id` and
/// a display name resolve to non-empty strings. Display-oriented fields fall
/// back to the dash placeholder instead of null.
pub fn normalize_player(raw: &Value) -> Option<Player> {
    if !raw.is_object() {
        return None;
    }

    let id = to_trimmed_string(raw.get("id"))?;
    let display_name = to_trimmed_string(raw.get("displayName"))
        .or_else(|| to_trimmed_string(raw.get("fullName")))?;

    let position = raw.get("position");
    let experience = raw.get("experience");
    let birth_place = raw.get("birthPlace");
    let birth_country_obj = raw.get("birthCountry");
    let flag = raw.get("flag");
    let status = raw.get("status");

    let birth_city = to_trimmed_string(birth_place.and_then(|b| b.get("city")));
    let birth_state = to_trimmed_string(birth_place.and_then(|b| b.get("state")));
    let birth_country = to_trimmed_string(birth_place.and_then(|b| b.get("country")))
        .or_else(|| to_trimmed_string(birth_country_obj.and_then(|b| b.get("name"))));

    // City joined with state (or country when no state), else the dash.
    let hometown = {
        let region = birth_state.clone().or_else(|| birth_country.clone());
        let parts: Vec<String> = [birth_city.clone(), region].into_iter().flatten().collect();
        if parts.is_empty() {
            DASH.to_string()
        } else {
            parts.join(", ")
        }
    };

    let status_type = to_trimmed_string(status.and_then(|s| s.get("type")));
    let is_active = match raw.get("active").and_then(Value::as_bool) {
        Some(flag) => flag,
        None => status_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("active")),
    };

    let injuries = raw
        .get("injuries")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(normalize_injury).collect())
        .unwrap_or_default();

    Some(Player {
        id,
        uid: to_trimmed_string(raw.get("uid")),
        guid: to_trimmed_string(raw.get("guid")),
        slug: to_trimmed_string(raw.get("slug")),
        player_type: to_trimmed_string(raw.get("type")),

        display_name,
        full_name: to_trimmed_string(raw.get("fullName")),
        first_name: to_trimmed_string(raw.get("firstName")),
        last_name: to_trimmed_string(raw.get("lastName")),
        short_name: to_trimmed_string(raw.get("shortName")),

        jersey: dash_default(to_trimmed_string(raw.get("jersey"))),
        position: dash_default(to_trimmed_string(position.and_then(|p| p.get("displayName")))),
        position_abbreviation: to_trimmed_string(position.and_then(|p| p.get("abbreviation"))),
        position_name: to_trimmed_string(position.and_then(|p| p.get("name"))),
        position_id: to_trimmed_string(position.and_then(|p| p.get("id"))),

        experience: dash_default(to_trimmed_string(
            experience.and_then(|e| e.get("displayValue")),
        )),
        experience_abbreviation: to_trimmed_string(experience.and_then(|e| e.get("abbreviation"))),
        experience_years: number_or_null(experience.and_then(|e| e.get("years"))),

        height: dash_default(to_trimmed_string(raw.get("displayHeight"))),
        weight: dash_default(to_trimmed_string(raw.get("displayWeight"))),

        birth_city,
        birth_state,
        birth_country,
        birth_country_abbreviation: to_trimmed_string(
            birth_country_obj.and_then(|b| b.get("abbreviation")),
        ),
        hometown,

        flag_url: to_trimmed_string(flag.and_then(|f| f.get("href"))),
        flag_alt: to_trimmed_string(flag.and_then(|f| f.get("alt"))),

        status: dash_default(to_trimmed_string(status.and_then(|s| s.get("name")))),
        status_type,
        status_abbreviation: to_trimmed_string(status.and_then(|s| s.get("abbreviation"))),
        is_active,

        injuries,
    })
}

/// Build a [`PlayerInjury`] from one `injuries` entry.
///
/// `status` may be a plain string or a nested object; for the object form the
/// value is derived from description, detail, type, then name, in that order.
/// Entries whose every field resolves to null are dropped.
pub fn normalize_injury(raw: &Value) -> Option<PlayerInjury> {
    if !raw.is_object() {
        return None;
    }

    let status = match raw.get("status") {
        Some(Value::String(s)) => trimmed_or_null(s),
        Some(obj) if obj.is_object() => to_trimmed_string(obj.get("description"))
            .or_else(|| to_trimmed_string(obj.get("detail")))
            .or_else(|| to_trimmed_string(obj.get("type")))
            .or_else(|| to_trimmed_string(obj.get("name"))),
        _ => None,
    };

    let injury = PlayerInjury {
        id: to_trimmed_string(raw.get("id")),
        injury_type: to_trimmed_string(raw.get("type")),
        status,
        description: to_trimmed_string(raw.get("description")),
        date: to_trimmed_string(raw.get("date")),
    };

    if injury.is_empty() {
        None
    } else {
        Some(injury)
    }
}
