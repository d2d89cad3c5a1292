pub mod config;
pub mod logging;
pub mod release;
pub mod server;
