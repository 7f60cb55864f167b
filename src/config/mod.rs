//! Configuration management for stache
//!
//! - `loader`: Settings file loading and discovery

pub mod loader;


pub use loader::Settings;
