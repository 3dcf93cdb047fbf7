//! Orchestrates the three lifecycle phases of state ↔ URL synchronization
//! and owns the readiness flag. Both propagation paths funnel through the
//! same equality check, so a single logical change produces at most one
//! corrective write to the opposite representation and loops terminate.

use log::{debug, info};

use crate::host::{NavigationHost, QueryTranslator};
use crate::params::projection::{parse, project};
use crate::params::query_string;
use crate::params::timezone::Timezone;
use crate::state::store::ViewStore;
use crate::sync::resolver::{self, StoreAction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncPhase {
    Uninitialized,
    /// One-shot: only ever entered during [`SyncSession::activate`].
    Syncing,
    Synchronized,
}

/// Composition root for one page load: owns the store, the navigation
/// host, the translator and the viewer's display timezone, and routes
/// every mutation through exactly one of the two propagation paths.
pub struct SyncSession<N: NavigationHost, T: QueryTranslator> {
    store: ViewStore,
    navigation: N,
    translator: T,
    display_tz: Timezone,
    phase: SyncPhase,
}

impl<N: NavigationHost, T: QueryTranslator> SyncSession<N, T> {
    pub fn new(
        store: ViewStore,
        navigation: N,
        translator: T,
        display_tz: Timezone,
    ) -> Self {
        Self {
            store,
            navigation,
            translator,
            display_tz,
            phase: SyncPhase::Uninitialized,
        }
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    pub fn is_synchronized(&self) -> bool {
        self.phase == SyncPhase::Synchronized
    }

    pub fn store(&self) -> &ViewStore {
        &self.store
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    /// External navigation events (back/forward, manual edits) are
    /// installed here, then fed through [`Self::url_changed`].
    pub fn navigation_mut(&mut self) -> &mut N {
        &mut self.navigation
    }

    /// Initial load: parse the current URL, resolve precedence against the
    /// store's defaults, push the resolved fields into the store and flip
    /// the readiness flag. Runs exactly once; later calls are no-ops.
    pub fn activate(&mut self) {
        if self.phase != SyncPhase::Uninitialized {
            return;
        }
        self.phase = SyncPhase::Syncing;

        let url_params = parse(&self.navigation.query_string());
        let store_params = project(self.store.state(), self.display_tz);
        let actions = resolver::resolve(
            &store_params,
            &url_params,
            self.display_tz,
            &self.translator,
        );
        self.apply(actions);

        self.store.mark_unchanged();
        self.phase = SyncPhase::Synchronized;
        info!("View state synchronized with URL");
    }

    /// Mutate the store, then run the store-changed propagation path.
    pub fn update_store(&mut self, mutate: impl FnOnce(&mut ViewStore)) {
        mutate(&mut self.store);
        self.store_changed();
    }

    /// URL-changed path: the query string changed for reasons outside the
    /// store-changed path. Applies the resolver's store mutations; never
    /// rewrites the URL itself.
    pub fn url_changed(&mut self) {
        if self.phase != SyncPhase::Synchronized {
            return;
        }

        let store_params = project(self.store.state(), self.display_tz);
        let url_params = parse(&self.navigation.query_string());
        if store_params == url_params {
            return;
        }

        let actions = resolver::resolve(
            &store_params,
            &url_params,
            self.display_tz,
            &self.translator,
        );
        self.apply(actions);

        // Mutations made on this path must not bounce back into a rewrite.
        self.store.mark_unchanged();
    }

    /// Store-changed path: recompute the projection and rewrite the URL if
    /// it differs from the currently-parsed parameters.
    fn store_changed(&mut self) {
        if self.phase != SyncPhase::Synchronized {
            return;
        }
        if !self.store.changed() {
            return;
        }
        self.store.mark_unchanged();

        let store_params = project(self.store.state(), self.display_tz);
        let url_params = parse(&self.navigation.query_string());
        if !resolver::needs_rewrite(&store_params, &url_params) {
            return;
        }

        let encoded = query_string::encode(&store_params);
        debug!("Rewriting URL to '{encoded}'");
        self.navigation.replace_query_string(&encoded);
    }

    fn apply(&mut self, actions: Vec<StoreAction>) {
        for action in actions {
            match action {
                StoreAction::SetViewMode(mode) => {
                    self.store.set_view_mode(mode)
                }
                StoreAction::SetRowsPerPage(rows) => {
                    self.store.set_rows_per_page(rows)
                }
                StoreAction::ApplyQuery { query, kind, filter } => {
                    self.store.sync_time_range();
                    self.store.set_query(&query, kind, filter);
                }
                StoreAction::SetTimeRange(range) => {
                    self.store.set_time_range(range)
                }
                StoreAction::SetRowSelection(rows) => {
                    self.store.set_row_selection(rows)
                }
            }
        }
    }
}
