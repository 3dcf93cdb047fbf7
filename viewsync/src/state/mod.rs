pub mod store;
pub mod time_range;
pub mod view_state;

pub use store::*;
pub use time_range::*;
pub use view_state::*;
