//! Compares the store's canonical projection with the currently-parsed URL
//! parameters and decides, per concern, which side is authoritative.
//!
//! URL → store precedence is per-field and validated; store → URL is a
//! single wholesale rewrite (the store is always internally consistent).
//! Decode failures never surface as errors: the store value is retained
//! and the malformed link degrades to defaults.

use std::collections::BTreeSet;

use log::warn;

use crate::host::{ConditionTree, QueryTranslator};
use crate::params::timezone::Timezone;
use crate::params::{CanonicalParams, ParamKey, time_codec};
use crate::state::time_range::TimeRange;
use crate::state::view_state::{QueryKind, ROWS_PER_PAGE, ViewMode};

/// One store mutation needed to converge on the URL's version of a field.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreAction {
    SetViewMode(ViewMode),
    SetRowsPerPage(u32),
    /// Installing a new query also resets the time range to its
    /// synchronized default: switching the active query invalidates any
    /// range override made before the query existed.
    ApplyQuery {
        query: String,
        kind: Option<QueryKind>,
        filter: Option<ConditionTree>,
    },
    SetTimeRange(TimeRange),
    SetRowSelection(BTreeSet<i64>),
}

/// Store → URL direction: a rewrite is due whenever the projections
/// differ. Structural equality is the terminal state for both directions.
pub fn needs_rewrite(
    store_params: &CanonicalParams,
    url_params: &CanonicalParams,
) -> bool {
    store_params != url_params
}

/// URL → store direction: the minimal action list that makes the store
/// converge on the URL's authoritative fields. Empty when the projections
/// already agree.
pub fn resolve(
    store_params: &CanonicalParams,
    url_params: &CanonicalParams,
    local_tz: Timezone,
    translator: &dyn QueryTranslator,
) -> Vec<StoreAction> {
    let mut actions = Vec::new();

    if store_params == url_params {
        return actions;
    }

    resolve_view(store_params, url_params, &mut actions);
    resolve_rows(store_params, url_params, &mut actions);
    resolve_query(store_params, url_params, translator, &mut actions);
    resolve_time_range(store_params, url_params, local_tz, &mut actions);
    resolve_row_selection(store_params, url_params, &mut actions);

    actions
}

/// URL wins when present, a valid mode, and different.
fn resolve_view(
    store_params: &CanonicalParams,
    url_params: &CanonicalParams,
    actions: &mut Vec<StoreAction>,
) {
    let Some(view) = url_params.get(ParamKey::View) else {
        return;
    };
    if store_params.get(ParamKey::View) == Some(view) {
        return;
    }
    match ViewMode::from_param(view) {
        Some(mode) => actions.push(StoreAction::SetViewMode(mode)),
        None => warn!("Ignoring view='{view}': not a recognized mode"),
    }
}

/// URL wins when present, numeric, a member of the allowed page sizes, and
/// different. Out-of-set values written into the URL by other actors never
/// re-import (the store keeps its page size).
fn resolve_rows(
    store_params: &CanonicalParams,
    url_params: &CanonicalParams,
    actions: &mut Vec<StoreAction>,
) {
    let Some(rows) = url_params.get(ParamKey::Rows) else {
        return;
    };
    if store_params.get(ParamKey::Rows) == Some(rows) {
        return;
    }
    match rows.parse::<u32>() {
        Ok(n) if ROWS_PER_PAGE.contains(&n) => {
            actions.push(StoreAction::SetRowsPerPage(n));
        }
        _ => warn!("Ignoring rows='{rows}': not an allowed page size"),
    }
}

/// URL wins when its (non-empty) query differs from the store's. The
/// filter kind is re-derived by translating the query text; translation
/// failure clears the kind but never blocks the import.
fn resolve_query(
    store_params: &CanonicalParams,
    url_params: &CanonicalParams,
    translator: &dyn QueryTranslator,
    actions: &mut Vec<StoreAction>,
) {
    let Some(query) = url_params.get(ParamKey::Query) else {
        return;
    };
    if store_params.get(ParamKey::Query) == Some(query) {
        return;
    }

    let (kind, filter) = match translator.condition_tree(query) {
        Ok(tree) => (Some(QueryKind::Filters), Some(tree)),
        Err(err) => {
            warn!("{err}");
            (None, None)
        }
    };

    actions.push(StoreAction::ApplyQuery {
        query: query.to_string(),
        kind,
        filter,
    });
}

/// The relative form is preferred: a present `interval` shadows any
/// `from`/`to` pair. Custom import requires both bounds present, both
/// valid, and both different from the store's encoding.
fn resolve_time_range(
    store_params: &CanonicalParams,
    url_params: &CanonicalParams,
    local_tz: Timezone,
    actions: &mut Vec<StoreAction>,
) {
    if let Some(token) = url_params.get(ParamKey::Interval) {
        if store_params.get(ParamKey::Interval) == Some(token) {
            return;
        }
        match time_codec::decode_interval(token) {
            Some(range) => actions.push(StoreAction::SetTimeRange(range)),
            None => warn!("Ignoring interval='{token}': unregistered token"),
        }
        return;
    }

    let (Some(from), Some(to)) = (
        url_params.get(ParamKey::From),
        url_params.get(ParamKey::To),
    ) else {
        return;
    };
    if store_params.get(ParamKey::From) == Some(from)
        || store_params.get(ParamKey::To) == Some(to)
    {
        return;
    }
    match time_codec::decode_custom(from, to, local_tz) {
        Some(range) => actions.push(StoreAction::SetTimeRange(range)),
        None => {
            warn!("Ignoring from='{from}' to='{to}': unparseable bounds")
        }
    }
}

/// URL wins whenever present and textually different from the store's
/// encoded selection. Entries are imported leniently: integer entries are
/// kept, malformed ones dropped, the value as a whole never rejected.
fn resolve_row_selection(
    store_params: &CanonicalParams,
    url_params: &CanonicalParams,
    actions: &mut Vec<StoreAction>,
) {
    let Some(raw) = url_params.get(ParamKey::RowNumber) else {
        return;
    };
    if store_params.get(ParamKey::RowNumber) == Some(raw) {
        return;
    }
    actions.push(StoreAction::SetRowSelection(parse_row_numbers(raw)));
}

fn parse_row_numbers(raw: &str) -> BTreeSet<i64> {
    if let Ok(rows) = serde_json::from_str::<Vec<i64>>(raw) {
        return rows.into_iter().collect();
    }

    // Not valid JSON: salvage the integer entries.
    raw.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .filter_map(|entry| entry.trim().parse().ok())
        .collect()
}
