//! Keeps an explorer page's in-memory view state and the query string of a
//! shareable URL convergent.
//!
//! The store and the URL are two independently-mutable representations of
//! the same logical state. Both are reduced to the same tidy string-keyed
//! projection ([`params::CanonicalParams`]) so that a single structural
//! equality check decides whether anything needs to propagate, in either
//! direction, without feedback loops.

pub mod core;
pub mod host;
pub mod params;
pub mod state;
pub mod sync;

pub use host::{MemoryNavigation, NavigationHost, QueryTranslator};
pub use state::{TimeRange, ViewMode, ViewState, ViewStore};
pub use sync::controller::{SyncPhase, SyncSession};
