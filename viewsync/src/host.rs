//! Interfaces the host environment supplies: somewhere to read and rewrite
//! the current query string, and a translator from query text to a
//! structured filter. Any host (browser shell, desktop webview, tests) can
//! implement these.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The "URL side" of the synchronization. `replace_query_string` is a
/// replace-style navigation: it must not re-enter the sync engine's
/// URL-changed path.
pub trait NavigationHost {
    fn query_string(&self) -> String;
    fn replace_query_string(&mut self, raw: &str);
}

/// In-memory navigation host. Keeps the history of rewrites so tests can
/// assert how many corrective writes a logical change produced.
#[derive(Debug, Default)]
pub struct MemoryNavigation {
    current: String,
    history: Vec<String>,
}

impl MemoryNavigation {
    pub fn new(initial: &str) -> Self {
        Self {
            current: initial.to_string(),
            history: Vec::new(),
        }
    }

    /// An externally-originated change (back/forward, manual edit). The
    /// caller is responsible for feeding this through the sync engine.
    pub fn set_query_string(&mut self, raw: &str) {
        self.current = raw.to_string();
    }

    pub fn rewrites(&self) -> &[String] {
        &self.history
    }
}

impl NavigationHost for MemoryNavigation {
    fn query_string(&self) -> String {
        self.current.clone()
    }

    fn replace_query_string(&mut self, raw: &str) {
        self.current = raw.to_string();
        self.history.push(raw.to_string());
    }
}

/// One leaf of a structured filter.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub field: String,
    pub operator: String,
    pub value: String,
}

/// Structured filter produced by translating query text. Opaque to the
/// sync engine; it only carries the tree from the translator into the
/// store for the filter-editing UI to consume.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct ConditionTree {
    pub combinator: String,
    pub conditions: Vec<Condition>,
}

/// Pure boundary to the SQL/condition-builder collaborator.
pub trait QueryTranslator {
    fn condition_tree(
        &self,
        query: &str,
    ) -> Result<ConditionTree, TranslationError>;
}

#[derive(Debug)]
pub struct TranslationError {
    pub query: String,
    pub reason: String,
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to derive a filter tree from {:?}: {}",
            self.query, self.reason
        )
    }
}

impl Error for TranslationError {}
