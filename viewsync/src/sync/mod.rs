pub mod controller;
pub mod resolver;

pub use controller::*;
pub use resolver::*;
