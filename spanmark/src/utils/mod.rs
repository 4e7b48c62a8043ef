pub mod core;
pub mod loc;
pub mod logging;
