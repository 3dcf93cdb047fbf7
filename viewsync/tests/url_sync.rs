mod support;

use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use support::{navigate, session_at, session_in};
use viewsync::host::NavigationHost;
use viewsync::params::timezone::Timezone;
use viewsync::state::{QueryKind, TimeRange, ViewMode};

#[test]
fn initial_load_imports_url_fields_over_defaults() {
    let mut s = session_at("?view=json&rows=100&interval=1h");
    s.activate();

    let state = s.store().state();
    assert_eq!(state.view_mode, ViewMode::Json);
    assert_eq!(state.rows_per_page, 100);
    assert_eq!(state.time_range, TimeRange::fixed_millis(60 * 60 * 1000));
    assert!(s.navigation().rewrites().is_empty());
}

#[test]
fn store_mutation_rewrites_url_exactly_once() {
    let mut s = session_at("");
    s.activate();

    s.update_store(|store| store.set_view_mode(ViewMode::Json));

    let rewrites = s.navigation().rewrites();
    assert_eq!(rewrites.len(), 1);
    assert_eq!(rewrites[0], "view=json&rows=50&interval=5m");
}

#[test]
fn store_to_url_is_idempotent() {
    let mut s = session_at("");
    s.activate();

    s.update_store(|store| store.set_page(2));
    let first = s.navigation().query_string();

    // Same logical state again: the second application is a no-op.
    s.update_store(|store| store.set_page(2));
    assert_eq!(s.navigation().query_string(), first);
    assert_eq!(s.navigation().rewrites().len(), 1);
}

#[test]
fn converged_representations_do_not_oscillate() {
    let mut s = session_at("");
    s.activate();

    s.update_store(|store| store.set_view_mode(ViewMode::Json));
    let state_after_rewrite = s.store().state().clone();

    // The rewrite's own change notification arrives: nothing propagates.
    s.url_changed();
    assert_eq!(s.store().state(), &state_after_rewrite);
    assert_eq!(s.navigation().rewrites().len(), 1);
}

#[test]
fn url_without_rows_leaves_page_size_untouched() {
    let mut s = session_at("?rows=100");
    s.activate();
    assert_eq!(s.store().state().rows_per_page, 100);

    navigate(&mut s, "?view=json");
    assert_eq!(s.store().state().rows_per_page, 100);
}

#[test]
fn explicit_utc_suffix_overrides_viewer_locale() {
    let expected = TimeRange::custom(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
    )
    .unwrap();

    let mut utc_viewer =
        session_at("?from=01-Jan-2024_00-00UTC&to=02-Jan-2024_00-00UTC");
    utc_viewer.activate();
    assert_eq!(utc_viewer.store().state().time_range, expected);

    let mut est_viewer = session_in(
        "?from=01-Jan-2024_00-00UTC&to=02-Jan-2024_00-00UTC",
        Timezone::by_abbr("EST").unwrap(),
    );
    est_viewer.activate();
    assert_eq!(est_viewer.store().state().time_range, expected);
}

#[test]
fn query_import_rederives_kind_and_resets_time_range() {
    let mut s = session_at("?interval=7d");
    s.activate();
    assert_eq!(
        s.store().state().time_range,
        TimeRange::fixed_millis(7 * 24 * 60 * 60 * 1000)
    );

    navigate(&mut s, "?interval=7d&query=status%3D500");

    let state = s.store().state();
    assert_eq!(state.query, "status=500");
    assert_eq!(state.query_kind, Some(QueryKind::Filters));
    let tree = state.filter_tree.as_ref().unwrap();
    assert_eq!(tree.conditions[0].field, "status");
    assert_eq!(tree.conditions[0].value, "500");
    // The URL's interval matches what the store projected before the query
    // arrived, so it does not re-import; the query's reset stands.
    assert_eq!(state.time_range, TimeRange::default());
}

#[test]
fn untranslatable_query_imports_with_empty_kind() {
    let mut s = session_at("");
    s.activate();

    navigate(&mut s, "?query=select+count%28%2A%29+from+logs");

    let state = s.store().state();
    assert_eq!(state.query, "select count(*) from logs");
    assert_eq!(state.query_kind, None);
    assert_eq!(state.filter_tree, None);
}

#[test]
fn malformed_row_number_entries_are_salvaged() {
    let mut s = session_at("");
    s.activate();

    navigate(&mut s, "?rowNumber=%5B1%2C2%2Cnotanumber%5D");
    assert_eq!(s.store().state().selected_rows, BTreeSet::from([1, 2]));
}

#[test]
fn out_of_set_rows_round_trip_is_one_directional() {
    let mut s = session_at("");
    s.activate();

    // The store is trusted: 999 projects into the URL as-is.
    s.update_store(|store| store.set_rows_per_page(999));
    assert!(s.navigation().query_string().contains("rows=999"));

    // But the URL never wins with it: a direct external write of the same
    // value cannot re-import, and a later legitimate store value sticks.
    s.update_store(|store| store.set_rows_per_page(50));
    navigate(&mut s, "?rows=999&view=table&interval=5m");
    assert_eq!(s.store().state().rows_per_page, 50);
}

#[test]
fn back_navigation_converges_store_onto_older_url() {
    let mut s = session_at("");
    s.activate();

    s.update_store(|store| store.set_view_mode(ViewMode::Json));
    s.update_store(|store| store.set_page(3));

    // Back to the first rewritten URL.
    let older = s.navigation().rewrites()[0].clone();
    navigate(&mut s, &older);

    assert_eq!(s.store().state().view_mode, ViewMode::Json);
    // Pagination has no URL-wins rule: the store keeps its page.
    assert_eq!(s.store().state().current_page, 3);
}

#[test]
fn malformed_link_degrades_to_defaults() {
    let mut s = session_at(
        "?view=grid&rows=banana&interval=9y&from=junk&to=junk&rowNumber=no",
    );
    s.activate();

    let state = s.store().state();
    assert_eq!(state.view_mode, ViewMode::Table);
    assert_eq!(state.rows_per_page, 50);
    assert_eq!(state.time_range, TimeRange::default());
    assert!(state.selected_rows.is_empty());
}

#[test]
fn time_range_survives_projection_round_trip() {
    let mut s = session_at("");
    s.activate();

    let custom = TimeRange::custom(
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 6, 2, 17, 45, 0).unwrap(),
    )
    .unwrap();
    s.update_store(|store| store.set_time_range(custom));

    // A fresh session loading the rewritten URL restores the same range.
    let shared_link = s.navigation().query_string();
    let mut fresh = session_at(&shared_link);
    fresh.activate();
    assert_eq!(fresh.store().state().time_range, custom);
}
