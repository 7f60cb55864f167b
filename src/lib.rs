/// Handles argument parsing and the reference host.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared by the library and the binary.
pub mod constants;

/// Settings for engines and partial aliases.
pub mod config;

/// The `render` entry point handed to hosts.
pub mod adapter;

/// Rendering engines the adapter delegates to.
pub mod renderer;

/// Host partial loaders and the lazy partial capability.
pub mod loader;

/// A set of helpers for reading inputs and writing output.
pub mod ioutils;

pub use adapter::RenderAdapter;
pub use loader::{LoadPartial, PartialLoader, PartialMap};
pub use renderer::{EngineKind, Partials, TemplateRenderer};
