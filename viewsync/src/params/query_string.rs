//! Raw query-string form of [`CanonicalParams`]. Encoding is
//! percent-escaped and deterministic (canonical key order); decoding is
//! best-effort and keeps only recognized, non-empty keys.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::params::{CanonicalParams, ParamKey};

/// Escape everything except unreserved characters so values like
/// `01-Jan-2024_00-00UTC` stay readable in shared links.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn encode(params: &CanonicalParams) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!("{}={}", key.as_str(), utf8_percent_encode(value, QUERY_VALUE))
        })
        .collect::<Vec<_>>()
        .join("&")
}

pub fn decode(raw: &str) -> CanonicalParams {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let mut params = CanonicalParams::new();

    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let Some(key) = ParamKey::from_name(&decode_component(key)) else {
            continue;
        };
        params.insert(key, decode_component(value));
    }

    params
}

fn decode_component(raw: &str) -> String {
    // URLSearchParams semantics: '+' is a space in query strings.
    let raw = raw.replace('+', " ");
    percent_decode_str(&raw).decode_utf8_lossy().into_owned()
}
