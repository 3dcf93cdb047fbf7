//! Timezone qualification of absolute URL bounds.
//!
//! Grammar for a qualified value: `<date-time><abbr?>` where `abbr` is a
//! trailing run of ASCII alphabetic characters. An empty suffix means the
//! viewer's local zone; a suffix that is not in [`TIMEZONES`] invalidates
//! the bound.

use chrono::FixedOffset;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timezone {
    pub abbr: &'static str,
    offset_minutes: i32,
}

/// Abbreviations recognized in shared links. A closed set by design:
/// abbreviations are ambiguous globally, so only this table is consulted.
pub const TIMEZONES: [Timezone; 16] = [
    Timezone { abbr: "UTC", offset_minutes: 0 },
    Timezone { abbr: "GMT", offset_minutes: 0 },
    Timezone { abbr: "EST", offset_minutes: -5 * 60 },
    Timezone { abbr: "EDT", offset_minutes: -4 * 60 },
    Timezone { abbr: "CST", offset_minutes: -6 * 60 },
    Timezone { abbr: "CDT", offset_minutes: -5 * 60 },
    Timezone { abbr: "MST", offset_minutes: -7 * 60 },
    Timezone { abbr: "MDT", offset_minutes: -6 * 60 },
    Timezone { abbr: "PST", offset_minutes: -8 * 60 },
    Timezone { abbr: "PDT", offset_minutes: -7 * 60 },
    Timezone { abbr: "BST", offset_minutes: 60 },
    Timezone { abbr: "CET", offset_minutes: 60 },
    Timezone { abbr: "CEST", offset_minutes: 2 * 60 },
    Timezone { abbr: "IST", offset_minutes: 5 * 60 + 30 },
    Timezone { abbr: "JST", offset_minutes: 9 * 60 },
    Timezone { abbr: "AEST", offset_minutes: 10 * 60 },
];

impl Timezone {
    pub fn utc() -> Timezone {
        TIMEZONES[0]
    }

    pub fn by_abbr(abbr: &str) -> Option<Timezone> {
        TIMEZONES.iter().copied().find(|tz| tz.abbr == abbr)
    }

    pub fn offset(&self) -> FixedOffset {
        // Every offset in TIMEZONES is within chrono's valid range.
        FixedOffset::east_opt(self.offset_minutes * 60).unwrap()
    }
}

/// Split a qualified value into its date-time part and timezone suffix.
/// The suffix may be empty.
pub fn split_timezone_suffix(raw: &str) -> (&str, &str) {
    let split_at = raw
        .rfind(|c: char| !c.is_ascii_alphabetic())
        .map(|i| i + raw[i..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    raw.split_at(split_at)
}
