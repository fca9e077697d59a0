//! Total coercions from loose JSON values to typed optional scalars.
//!
//! The ESPN payload is an uncontrolled third party: fields go missing, change
//! type between seasons, or arrive as empty strings. Every function here
//! accepts whatever it is handed and answers with `Some` or `None`, never a
//! panic or an error. Entity normalizers are built entirely out of these.

use serde_json::Value;


/// The value as a finite number, else `None`.
pub fn number_or_null(v: Option<&Value>) -> Option<f64> {
    let n = v?.as_f64()?;
    n.is_finite().then_some(n)
}

/// The value as a string, untouched, else `None`.
pub fn string_or_null(v: Option<&Value>) -> Option<&str> {
    v?.as_str()
}

/// Trimmed string, with empty (or all-whitespace) collapsing to `None`.
pub fn trimmed_or_null(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

/// Strings are trimmed (empty ⇒ `None`); finite numbers are stringified;
/// everything else is `None`.
pub fn to_trimmed_string(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::String(s) => trimmed_or_null(s),
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).map(|_| n.to_string()),
        _ => None,
    }
}

/// First run of ASCII digits in `s`, parsed base-10. `"210 lbs"` ⇒ 210.
pub fn parse_embedded_int(s: &str) -> Option<i64> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let digits = &s[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Total inches from a display height.
///
/// `"6' 2"` ⇒ 74 (feet then inches), `"6'"` ⇒ 72, and a bare digit run such
/// as `"74"` is already total inches. `None` when no leading digits exist or
/// a captured group overflows.
pub fn parse_feet_inches(s: &str) -> Option<i64> {
    let t = s.trim();
    let bytes = t.as_bytes();

    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == 0 {
        return None;
    }
    let first: i64 = t[..i].parse().ok()?;

    let mut saw_apostrophe = false;
    let mut j = i;
    while j < bytes.len() && (bytes[j] == b'\'' || bytes[j] == b' ') {
        saw_apostrophe |= bytes[j] == b'\'';
        j += 1;
    }

    let mut k = j;
    while k < bytes.len() && bytes[k].is_ascii_digit() {
        k += 1;
    }

    if k > j {
        let inches: i64 = t[j..k].parse().ok()?;
        Some(first * 12 + inches)
    } else if saw_apostrophe {
        Some(first * 12)
    } else {
        Some(first)
    }
}
