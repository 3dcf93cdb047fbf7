//! The canonical string-keyed view of the synchronized state. Both the
//! store projection and the parsed URL reduce to a [`CanonicalParams`] so a
//! single structural equality check decides convergence.

pub mod projection;
pub mod query_string;
pub mod time_codec;
pub mod timezone;

use indexmap::IndexMap;

/// The closed vocabulary shared between the store and the URL. Anything
/// else found in a query string is dropped silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    View,
    Rows,
    Interval,
    From,
    To,
    Offset,
    Page,
    Query,
    FilterType,
    RowNumber,
}

/// Canonical key order, used when serializing so projected URLs are stable.
pub const PARAM_KEYS: [ParamKey; 10] = [
    ParamKey::View,
    ParamKey::Rows,
    ParamKey::Interval,
    ParamKey::From,
    ParamKey::To,
    ParamKey::Offset,
    ParamKey::Page,
    ParamKey::Query,
    ParamKey::FilterType,
    ParamKey::RowNumber,
];

impl ParamKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Rows => "rows",
            Self::Interval => "interval",
            Self::From => "from",
            Self::To => "to",
            Self::Offset => "offset",
            Self::Page => "page",
            Self::Query => "query",
            Self::FilterType => "filterType",
            Self::RowNumber => "rowNumber",
        }
    }

    pub fn from_name(raw: &str) -> Option<Self> {
        PARAM_KEYS.iter().copied().find(|k| k.as_str() == raw)
    }
}

/// Tidy mapping from recognized keys to non-empty values. Inserting an
/// empty value is a no-op, which is what makes "key absent" and "key
/// empty" collapse into the same canonical shape on both sides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanonicalParams {
    entries: IndexMap<ParamKey, String>,
}

impl CanonicalParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: ParamKey, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.entries.insert(key, value);
        }
    }

    pub fn get(&self, key: ParamKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: ParamKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in canonical key order regardless of insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamKey, &str)> {
        PARAM_KEYS
            .iter()
            .filter_map(|key| self.get(*key).map(|value| (*key, value)))
    }
}
