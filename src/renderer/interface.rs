use crate::{
    error::Result,
    loader::{LoadPartial, PartialMap},
    renderer::EngineKind,
};

/// Partial templates handed to an engine alongside the main template.
#[derive(Clone, Default)]
pub enum Partials<'a> {
    /// The template references no partials, or the engine should fail on any.
    #[default]
    None,
    /// Partials known up front, keyed by name.
    Static(&'a PartialMap),
    /// Partials resolved on demand through a host capability.
    Lazy(LoadPartial),
}

impl std::fmt::Debug for Partials<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Partials::None => write!(f, "Partials::None"),
            Partials::Static(map) => f.debug_tuple("Partials::Static").field(map).finish(),
            Partials::Lazy(_) => write!(f, "Partials::Lazy(..)"),
        }
    }
}

/// Trait for template rendering engines.
pub trait TemplateRenderer: Send + Sync {
    /// Renders a template string with the given view and partials.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `view` - Data substituted into the template
    /// * `partials` - Partial templates reachable from `template`
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string, or the engine's own error
    fn render(
        &self,
        template: &str,
        view: &serde_json::Value,
        partials: Partials<'_>,
    ) -> Result<String>;

    /// Which engine this renderer wraps.
    fn kind(&self) -> EngineKind;
}
