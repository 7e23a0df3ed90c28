pub mod analysis;
pub mod config;
pub mod console;
pub mod import;
pub mod output;
pub mod session;
pub mod store;
