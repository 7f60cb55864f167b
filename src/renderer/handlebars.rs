use crate::{
    config::Settings,
    error::Result,
    loader::LoadPartial,
    renderer::{
        interface::{Partials, TemplateRenderer},
        EngineKind,
    },
};
use handlebars::{Handlebars, RenderErrorReason};
use log::trace;

/// Handlebars-based rendering engine: `{{name}}` interpolation, helpers such
/// as `{{#each}}` and `{{#if}}`, and `{{> name}}` partials. Mustache sections
/// (`{{#list}}`, `{{^list}}`) are not Handlebars syntax; use
/// [`MustacheRenderer`](super::MustacheRenderer) for those.
pub struct HandlebarsRenderer {
    /// Registry shared by every render; cloned per call so partials never leak
    /// from one render into the next.
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Creates a renderer with HTML escaping and lenient lookups.
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    /// Creates a renderer configured from `settings`.
    pub fn with_settings(settings: &Settings) -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(settings.strict);
        if !settings.escape_html {
            registry.register_escape_fn(handlebars::no_escape);
        }
        Self { registry }
    }

    /// Renders, registering each partial the engine reports missing through
    /// `load` and retrying. Each name is loaded at most once per call.
    ///
    /// A partial block `{{#> name}}fallback{{/name}}` never reports its partial
    /// missing: the engine renders the fallback and `load` is not called.
    fn render_lazy(
        &self,
        mut registry: Handlebars<'static>,
        template: &str,
        view: &serde_json::Value,
        load: LoadPartial,
    ) -> Result<String> {
        loop {
            let err = match registry.render_template(template, view) {
                Ok(rendered) => return Ok(rendered),
                Err(err) => err,
            };
            let name = match err.reason() {
                RenderErrorReason::PartialNotFound(name) if !registry.has_template(name) => {
                    name.clone()
                }
                _ => return Err(err.into()),
            };
            trace!("Resolving partial '{name}' through host loader");
            let source = load(&name)?;
            registry.register_partial(&name, source)?;
        }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(
        &self,
        template: &str,
        view: &serde_json::Value,
        partials: Partials<'_>,
    ) -> Result<String> {
        let mut registry = self.registry.clone();
        match partials {
            Partials::None => {}
            Partials::Static(map) => {
                for (name, source) in map {
                    registry.register_partial(name, source)?;
                }
            }
            Partials::Lazy(load) => {
                return self.render_lazy(registry, template, view, load);
            }
        }
        Ok(registry.render_template(template, view)?)
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Handlebars
    }
}
