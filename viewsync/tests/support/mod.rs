use viewsync::host::{
    Condition, ConditionTree, MemoryNavigation, QueryTranslator,
    TranslationError,
};
use viewsync::params::timezone::Timezone;
use viewsync::state::{ViewState, ViewStore};
use viewsync::sync::controller::SyncSession;

/// Minimal stand-in for the SQL/condition-builder collaborator: a single
/// `field=value` term translates, anything else fails.
pub struct EqualityTranslator;

impl QueryTranslator for EqualityTranslator {
    fn condition_tree(
        &self,
        query: &str,
    ) -> Result<ConditionTree, TranslationError> {
        match query.split_once('=') {
            Some((field, value)) if !field.contains(' ') => Ok(ConditionTree {
                combinator: "and".to_string(),
                conditions: vec![Condition {
                    field: field.to_string(),
                    operator: "=".to_string(),
                    value: value.to_string(),
                }],
            }),
            _ => Err(TranslationError {
                query: query.to_string(),
                reason: "not a single equality term".to_string(),
            }),
        }
    }
}

pub type TestSession = SyncSession<MemoryNavigation, EqualityTranslator>;

pub fn session_at(initial_url: &str) -> TestSession {
    session_in(initial_url, Timezone::utc())
}

pub fn session_in(initial_url: &str, tz: Timezone) -> TestSession {
    SyncSession::new(
        ViewStore::new(ViewState::default()),
        MemoryNavigation::new(initial_url),
        EqualityTranslator,
        tz,
    )
}

/// Simulate an externally-originated URL change (back/forward navigation or
/// a manual edit) and feed it through the URL-changed path.
pub fn navigate(session: &mut TestSession, raw: &str) {
    session.navigation_mut().set_query_string(raw);
    session.url_changed();
}
