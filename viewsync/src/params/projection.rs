//! Maps the synchronized state slice to its canonical params form and
//! parses a raw query string back into the same shape. Both directions
//! produce tidy maps, which is what makes the convergence check a plain
//! structural equality.

use crate::params::timezone::Timezone;
use crate::params::{CanonicalParams, ParamKey, query_string, time_codec};
use crate::state::view_state::ViewState;

/// The canonical "state as params" view. Derived on every call, never
/// stored.
pub fn project(state: &ViewState, display_tz: Timezone) -> CanonicalParams {
    let mut params = time_codec::encode(&state.time_range, display_tz);

    if !state.selected_rows.is_empty() {
        if let Ok(encoded) = serde_json::to_string(&state.selected_rows) {
            params.insert(ParamKey::RowNumber, encoded);
        }
    }

    params.insert(ParamKey::View, state.view_mode.as_str());
    params.insert(ParamKey::Rows, state.rows_per_page.to_string());
    // Zero is the pagination default; it stays out of shared links.
    if state.current_offset > 0 {
        params.insert(ParamKey::Offset, state.current_offset.to_string());
    }
    if state.current_page > 0 {
        params.insert(ParamKey::Page, state.current_page.to_string());
    }
    params.insert(ParamKey::Query, state.query.as_str());

    // A filter kind without a query is meaningless and must not leak into
    // the URL.
    if !state.query.is_empty() {
        if let Some(kind) = state.query_kind {
            params.insert(ParamKey::FilterType, kind.as_str());
        }
    }

    params
}

/// Partial parse of a raw query string. Absent keys stay absent so that
/// "key absent" and "key empty" remain distinguishable upstream.
pub fn parse(raw: &str) -> CanonicalParams {
    query_string::decode(raw)
}
