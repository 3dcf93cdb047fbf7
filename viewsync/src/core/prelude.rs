pub use crate::core::logging::init_logger;
pub use crate::core::logging::{debug, error, info, trace, warn};
pub use crate::host::{
    ConditionTree, MemoryNavigation, NavigationHost, QueryTranslator,
};
pub use crate::params::projection::{parse, project};
pub use crate::params::timezone::Timezone;
pub use crate::params::{CanonicalParams, ParamKey};
pub use crate::state::time_range::{FIXED_DURATIONS, FixedDuration};
pub use crate::state::view_state::ROWS_PER_PAGE;
pub use crate::state::{QueryKind, TimeRange, ViewMode, ViewState, ViewStore};
pub use crate::sync::controller::{SyncPhase, SyncSession};
pub use crate::sync::resolver::StoreAction;
