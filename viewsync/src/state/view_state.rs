//! The slice of application state kept in sync with the URL.

use std::collections::BTreeSet;

use crate::host::ConditionTree;
use crate::state::time_range::TimeRange;

/// Page sizes the explorer offers. URL imports are validated against this
/// set; in-process mutators are trusted (see `ViewStore::set_rows_per_page`).
pub const ROWS_PER_PAGE: [u32; 4] = [25, 50, 100, 250];

pub const DEFAULT_ROWS_PER_PAGE: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Table,
    Json,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// How a non-empty `query` should be interpreted. Absent whenever the query
/// itself is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryKind {
    Filters,
    Sql,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Filters => "filters",
            Self::Sql => "sql",
        }
    }

    /// Anything non-empty that is not the literal `filters` is treated as
    /// free-form SQL.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "filters" => Some(Self::Filters),
            _ => Some(Self::Sql),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub view_mode: ViewMode,
    pub rows_per_page: u32,
    pub current_page: u32,
    /// Invariant: `current_offset == current_page * rows_per_page`. The
    /// store's pagination setters maintain it.
    pub current_offset: u32,
    pub selected_rows: BTreeSet<i64>,
    pub query: String,
    pub query_kind: Option<QueryKind>,
    pub time_range: TimeRange,
    /// Structured form of `query` derived by the translation collaborator
    /// when a URL query wins. Not part of the canonical projection.
    pub filter_tree: Option<ConditionTree>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Table,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            current_page: 0,
            current_offset: 0,
            selected_rows: BTreeSet::new(),
            query: String::new(),
            query_kind: None,
            time_range: TimeRange::default(),
            filter_tree: None,
        }
    }
}
