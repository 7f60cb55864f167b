use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to render. Original error: {0}")]
    MustacheError(#[from] mustache::Error),

    #[error("Failed to render. Original error: {0}")]
    HandlebarsError(#[from] handlebars::RenderError),

    #[error("Failed to compile partial. Original error: {0}")]
    HandlebarsTemplateError(#[from] handlebars::TemplateError),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Raised by host loaders when a partial name cannot be resolved.
    #[error("Partial '{name}' not found.")]
    PartialNotFound { name: String },

    #[error("Configuration file '{path}' does not exist.")]
    ConfigNotFound { path: String },

    #[error("Unsupported configuration format: '{path}'. Expected .json, .yaml or .yml.")]
    UnsupportedConfigFormat { path: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
