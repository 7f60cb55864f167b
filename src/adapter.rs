//! The `render` entry point exposed to a host.
//!
//! Two call forms are kept apart on purpose:
//! - [`RenderAdapter::render_with_partials`] takes an optional static mapping
//!   of partial name to partial text;
//! - [`RenderAdapter::render`] resolves partials lazily through the
//!   [`PartialLoader`] injected with [`RenderAdapter::with_loader`].
//!
//! Arguments are passed to the engine untouched and its output, or its error,
//! is returned verbatim.

use crate::{
    config::Settings,
    error::Result,
    loader::{LoadPartial, PartialLoader, PartialMap},
    renderer::{create_renderer, Partials, TemplateRenderer},
};
use log::{debug, trace};
use std::sync::Arc;

/// Renders templates with one engine, forwarding partial requests to an
/// optional host loader.
pub struct RenderAdapter {
    renderer: Box<dyn TemplateRenderer>,
    loader: Option<Arc<dyn PartialLoader>>,
    aliases: Arc<PartialMap>,
}

impl RenderAdapter {
    /// Wraps `renderer` with no host loader attached.
    pub fn new(renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { renderer, loader: None, aliases: Arc::new(PartialMap::new()) }
    }

    /// Builds the engine described by `settings` and applies its partial aliases.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(create_renderer(settings)).with_aliases(settings.partial_aliases.clone())
    }

    /// Injects the host loader used by [`RenderAdapter::render`].
    pub fn with_loader<L>(mut self, loader: L) -> Self
    where
        L: PartialLoader + 'static,
    {
        self.loader = Some(Arc::new(loader));
        self
    }

    /// Maps partial names to the names requested from the host loader.
    pub fn with_aliases(mut self, aliases: PartialMap) -> Self {
        self.aliases = Arc::new(aliases);
        self
    }

    /// The engine every call is delegated to.
    pub fn renderer(&self) -> &dyn TemplateRenderer {
        self.renderer.as_ref()
    }

    /// Renders `template` against `view` with an optional static partial mapping.
    pub fn render_with_partials(
        &self,
        template: &str,
        view: &serde_json::Value,
        partials: Option<&PartialMap>,
    ) -> Result<String> {
        debug!(
            "Rendering with {} engine and {} static partial(s)",
            self.renderer.kind(),
            partials.map_or(0, |p| p.len())
        );
        let partials = partials.map_or(Partials::None, Partials::Static);
        self.renderer.render(template, view, partials)
    }

    /// Renders `template` against `view`, loading partials through the host
    /// loader as the engine reaches them. Without a loader, any partial
    /// reference fails the way the engine fails on an unknown partial.
    pub fn render(&self, template: &str, view: &serde_json::Value) -> Result<String> {
        let partials = match self.load_partial() {
            Some(load) => Partials::Lazy(load),
            None => Partials::None,
        };
        debug!("Rendering with {} engine and {partials:?}", self.renderer.kind());
        self.renderer.render(template, view, partials)
    }

    /// The `name -> template text` capability backed by the host loader.
    pub fn load_partial(&self) -> Option<LoadPartial> {
        let loader = Arc::clone(self.loader.as_ref()?);
        let aliases = Arc::clone(&self.aliases);
        Some(Arc::new(move |name: &str| -> Result<String> {
            let real_name = aliases.get(name).map_or(name, String::as_str);
            trace!("Load partial: {name} => {real_name}");
            loader.load(real_name)
        }))
    }
}

impl std::fmt::Debug for RenderAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderAdapter")
            .field("engine", &self.renderer.kind())
            .field("loader", &self.loader.is_some())
            .field("aliases", &self.aliases)
            .finish()
    }
}
