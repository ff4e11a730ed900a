pub mod analyzers;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod record;
pub mod selector;
