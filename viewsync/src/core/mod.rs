pub mod logging;
pub mod prelude;
