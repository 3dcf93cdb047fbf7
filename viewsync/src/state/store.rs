//! Owns the live [`ViewState`] and funnels every mutation through typed
//! setters so invariants hold no matter who writes.

use std::collections::BTreeSet;

use crate::host::ConditionTree;
use crate::state::time_range::TimeRange;
use crate::state::view_state::{QueryKind, ViewMode, ViewState};

/// Observable holder for the synchronized state slice. Change tracking is
/// a single dirty flag: the sync controller checks and clears it after each
/// propagation pass.
#[derive(Clone, Debug, Default)]
pub struct ViewStore {
    state: ViewState,
    changed: bool,
}

impl ViewStore {
    pub fn new(state: ViewState) -> Self {
        Self {
            state,
            changed: true,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn mark_unchanged(&mut self) {
        self.changed = false;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.state.view_mode != mode {
            self.state.view_mode = mode;
            self.changed = true;
        }
    }

    /// Page size changes keep the current page and recompute the offset so
    /// `offset == page * rows_per_page` continues to hold. Values outside
    /// `ROWS_PER_PAGE` are accepted here; only URL imports validate.
    pub fn set_rows_per_page(&mut self, rows: u32) {
        if self.state.rows_per_page != rows {
            self.state.rows_per_page = rows;
            self.state.current_offset = self.state.current_page * rows;
            self.changed = true;
        }
    }

    pub fn set_page(&mut self, page: u32) {
        if self.state.current_page != page {
            self.state.current_page = page;
            self.state.current_offset = page * self.state.rows_per_page;
            self.changed = true;
        }
    }

    pub fn set_row_selection(&mut self, rows: BTreeSet<i64>) {
        if self.state.selected_rows != rows {
            self.state.selected_rows = rows;
            self.changed = true;
        }
    }

    /// Install a new active query. An empty query clears the kind and the
    /// structured tree; a kind without a query is never stored.
    pub fn set_query(
        &mut self,
        query: &str,
        kind: Option<QueryKind>,
        filter_tree: Option<ConditionTree>,
    ) {
        let kind = if query.is_empty() { None } else { kind };
        let filter_tree = if query.is_empty() { None } else { filter_tree };

        if self.state.query != query
            || self.state.query_kind != kind
            || self.state.filter_tree != filter_tree
        {
            self.state.query = query.to_string();
            self.state.query_kind = kind;
            self.state.filter_tree = filter_tree;
            self.changed = true;
        }
    }

    pub fn set_time_range(&mut self, range: TimeRange) {
        if self.state.time_range != range {
            self.state.time_range = range;
            self.changed = true;
        }
    }

    /// Reset the window to the synchronized default. Switching the active
    /// query invalidates any override made before the query existed.
    pub fn sync_time_range(&mut self) {
        self.set_time_range(TimeRange::default());
    }
}
