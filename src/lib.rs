pub mod catalog;
pub mod config;
pub mod error;
pub mod explore;
pub mod filters;
pub mod loader;
pub mod prompt;
pub mod session;
pub mod stats;
pub mod table;
