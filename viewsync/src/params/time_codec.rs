//! Encode/decode between [`TimeRange`] and its two URL shapes: a symbolic
//! relative token (`interval=5m`) or absolute timezone-qualified bounds
//! (`from=01-Jan-2024_00-00UTC&to=...`).

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use log::debug;

use crate::params::timezone::{Timezone, split_timezone_suffix};
use crate::params::{CanonicalParams, ParamKey};
use crate::state::time_range::{FixedDuration, TimeRange};

pub const TIME_RANGE_FORMAT: &str = "%d-%b-%Y_%H-%M";

/// Canonical-params fragment for a time range. A `Fixed` range whose
/// interval is not registered degrades to the default duration's token;
/// lossy but never an error.
pub fn encode(range: &TimeRange, display_tz: Timezone) -> CanonicalParams {
    let mut fragment = CanonicalParams::new();

    match range {
        TimeRange::Fixed { interval } => {
            let duration = FixedDuration::by_millis(interval.num_milliseconds())
                .unwrap_or_else(|| {
                    debug!(
                        "No registered duration for {}ms; \
                        falling back to '{}'",
                        interval.num_milliseconds(),
                        FixedDuration::default_duration().token
                    );
                    FixedDuration::default_duration()
                });
            fragment.insert(ParamKey::Interval, duration.token);
        }
        TimeRange::Custom { start, end } => {
            fragment.insert(ParamKey::From, format_bound(*start, display_tz));
            fragment.insert(ParamKey::To, format_bound(*end, display_tz));
        }
    }

    fragment
}

pub fn format_bound(instant: DateTime<Utc>, tz: Timezone) -> String {
    let local = instant.with_timezone(&tz.offset());
    format!("{}{}", local.format(TIME_RANGE_FORMAT), tz.abbr)
}

/// Case-sensitive lookup; unregistered tokens are invalid and the caller
/// keeps its prior state.
pub fn decode_interval(token: &str) -> Option<TimeRange> {
    FixedDuration::by_token(token).map(TimeRange::fixed)
}

/// Decode a `from`/`to` pair. Either bound failing to parse, or a reversed
/// pair, rejects the pair as a whole; a `Custom` range is never built from
/// a single valid bound.
pub fn decode_custom(
    from: &str,
    to: &str,
    local_tz: Timezone,
) -> Option<TimeRange> {
    let start = parse_bound(from, local_tz)?;
    let end = parse_bound(to, local_tz)?;
    TimeRange::custom(start, end)
}

/// Parse one timezone-qualified bound. The suffix grammar lives in
/// [`crate::params::timezone`]; an empty suffix falls back to the viewer's
/// local zone.
pub fn parse_bound(raw: &str, local_tz: Timezone) -> Option<DateTime<Utc>> {
    let (datetime, abbr) = split_timezone_suffix(raw);
    let tz = if abbr.is_empty() {
        local_tz
    } else {
        Timezone::by_abbr(abbr)?
    };

    let naive = NaiveDateTime::parse_from_str(datetime, TIME_RANGE_FORMAT)
        .map_err(|err| {
            debug!("Unparseable time bound '{raw}': {err}");
            err
        })
        .ok()?;

    tz.offset()
        .from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
}
