//! The time window a log view is scoped to, in its two shapes: a relative
//! "last N units" window resolved against the clock at read time, or a pair
//! of absolute bounds.

use chrono::{DateTime, Duration, Utc};

/// A relative window selectable from the time-range picker. `token` is the
/// symbolic form carried in URLs and matched case-sensitively on decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDuration {
    pub label: &'static str,
    pub token: &'static str,
    pub millis: i64,
}

const MINUTE: i64 = 60 * 1000;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Registered relative windows. The first entry is the default that both
/// unregistered-interval encoding and `sync_time_range` fall back to.
pub const FIXED_DURATIONS: [FixedDuration; 8] = [
    FixedDuration { label: "Past 5 Minutes", token: "5m", millis: 5 * MINUTE },
    FixedDuration { label: "Past 15 Minutes", token: "15m", millis: 15 * MINUTE },
    FixedDuration { label: "Past 30 Minutes", token: "30m", millis: 30 * MINUTE },
    FixedDuration { label: "Past 1 Hour", token: "1h", millis: HOUR },
    FixedDuration { label: "Past 6 Hours", token: "6h", millis: 6 * HOUR },
    FixedDuration { label: "Past 24 Hours", token: "24h", millis: DAY },
    FixedDuration { label: "Past 3 Days", token: "3d", millis: 3 * DAY },
    FixedDuration { label: "Past 7 Days", token: "7d", millis: 7 * DAY },
];

impl FixedDuration {
    pub fn default_duration() -> &'static FixedDuration {
        &FIXED_DURATIONS[0]
    }

    pub fn by_token(token: &str) -> Option<&'static FixedDuration> {
        FIXED_DURATIONS.iter().find(|d| d.token == token)
    }

    pub fn by_millis(millis: i64) -> Option<&'static FixedDuration> {
        FIXED_DURATIONS.iter().find(|d| d.millis == millis)
    }

    pub fn duration(&self) -> Duration {
        Duration::milliseconds(self.millis)
    }
}

/// Exactly one shape is active at a time; `Custom` bounds satisfy
/// `start <= end` (enforced by [`TimeRange::custom`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeRange {
    Fixed { interval: Duration },
    Custom { start: DateTime<Utc>, end: DateTime<Utc> },
}

impl TimeRange {
    pub fn fixed(duration: &FixedDuration) -> Self {
        Self::Fixed {
            interval: duration.duration(),
        }
    }

    pub fn fixed_millis(millis: i64) -> Self {
        Self::Fixed {
            interval: Duration::milliseconds(millis),
        }
    }

    /// Returns `None` when `start > end`.
    pub fn custom(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self::Custom { start, end })
    }

    /// Absolute bounds of the window. `Fixed` windows are computed against
    /// the supplied clock reading, never cached.
    pub fn resolve(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        match self {
            Self::Fixed { interval } => (now - *interval, now),
            Self::Custom { start, end } => (*start, *end),
        }
    }

    pub fn interval_millis(&self) -> Option<i64> {
        match self {
            Self::Fixed { interval } => Some(interval.num_milliseconds()),
            Self::Custom { .. } => None,
        }
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::fixed(FixedDuration::default_duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_rejects_reversed_bounds() {
        let start = Utc::now();
        let end = start - Duration::minutes(1);
        assert!(TimeRange::custom(start, end).is_none());
        assert!(TimeRange::custom(end, start).is_some());
    }

    #[test]
    fn fixed_resolves_against_supplied_clock() {
        let now = Utc::now();
        let range = TimeRange::fixed(FixedDuration::default_duration());
        let (start, end) = range.resolve(now);
        assert_eq!(end, now);
        assert_eq!(end - start, Duration::minutes(5));
    }

    #[test]
    fn default_is_first_registered_duration() {
        assert_eq!(
            TimeRange::default().interval_millis(),
            Some(FIXED_DURATIONS[0].millis)
        );
    }

    #[test]
    fn token_lookup_is_case_sensitive() {
        assert!(FixedDuration::by_token("5m").is_some());
        assert!(FixedDuration::by_token("5M").is_none());
    }
}
