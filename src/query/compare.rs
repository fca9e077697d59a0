use std::cmp::Ordering;

use crate::cli::types::{SortConfig, SortDirection, SortKey};
use crate::core::json::{parse_embedded_int, parse_feet_inches};
use crate::espn::types::Player;


/// Total order over players for one sort key and direction.
///
/// Jersey, height, and weight compare numerically after parsing their
/// display strings. A side that fails to parse sorts after every side that
/// parses, in both directions — unknown values stay at the end of the list
/// rather than jumping to the top of a descending sort. All other
/// comparisons flip with the direction.
///
/// Never panics: every fallback bottoms out at the (required, non-empty)
/// display name.
pub fn compare_players(a: &Player, b: &Player, config: &SortConfig) -> Ordering {
    match config.key {
        SortKey::Jersey => numeric_order(a, b, config.direction, |p| parse_jersey(&p.jersey)),
        SortKey::Weight => {
            numeric_order(a, b, config.direction, |p| parse_embedded_int(&p.weight))
        }
        SortKey::Height => {
            numeric_order(a, b, config.direction, |p| parse_feet_inches(&p.height))
        }
        key => directed(string_order(a, b, key), config.direction),
    }
}

/// Jersey numbers compare by a strict parse of the whole trimmed string, so
/// `"00"` is 0 but `"12a"` (or the dash placeholder) is unparseable.
fn parse_jersey(jersey: &str) -> Option<i64> {
    jersey.trim().parse().ok()
}

fn directed(ord: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

fn name_order(a: &Player, b: &Player) -> Ordering {
    ci_compare(&a.display_name, &b.display_name)
}

fn ci_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn numeric_order(
    a: &Player,
    b: &Player,
    direction: SortDirection,
    parse: impl Fn(&Player) -> Option<i64>,
) -> Ordering {
    match (parse(a), parse(b)) {
        (Some(x), Some(y)) => match x.cmp(&y) {
            Ordering::Equal => directed(name_order(a, b), direction),
            ord => directed(ord, direction),
        },
        // Unparseable sorts last no matter the direction.
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => directed(name_order(a, b), direction),
    }
}

fn string_order(a: &Player, b: &Player, key: SortKey) -> Ordering {
    let (x, y) = match key {
        SortKey::Name => (&a.display_name, &b.display_name),
        SortKey::Position => (&a.position, &b.position),
        SortKey::Experience => (&a.experience, &b.experience),
        SortKey::Hometown => (&a.hometown, &b.hometown),
        // numeric keys never reach here
        SortKey::Jersey | SortKey::Height | SortKey::Weight => {
            (&a.display_name, &b.display_name)
        }
    };
    // displayName re-breaks ties even when it was the primary field; the
    // double comparison is idempotent.
    ci_compare(x, y).then_with(|| name_order(a, b))
}
