use crate::{
    config::Settings,
    error::{Error, Result},
    renderer::{
        interface::{Partials, TemplateRenderer},
        EngineKind,
    },
};
use log::trace;
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};
use std::sync::{Arc, Mutex};

/// MiniJinja-based rendering engine. Partials are named templates pulled in
/// with `{% include "name" %}`.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

/// Last error raised by a host loader during one render.
type LoaderFailure = Arc<Mutex<Option<Error>>>;

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    /// Creates a renderer configured from `settings`.
    pub fn with_settings(settings: &Settings) -> Self {
        let mut env = Environment::new();
        let auto_escape =
            if settings.escape_html { AutoEscape::Html } else { AutoEscape::None };
        env.set_auto_escape_callback(move |_| auto_escape);
        if settings.strict {
            env.set_undefined_behavior(UndefinedBehavior::Strict);
        }
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        view: &serde_json::Value,
        partials: Partials<'_>,
    ) -> Result<String> {
        let mut env = self.env.clone();
        let failure = LoaderFailure::default();

        match partials {
            Partials::None => {}
            Partials::Static(map) => {
                for (name, source) in map {
                    env.add_template_owned(name.clone(), source.clone())?;
                }
            }
            Partials::Lazy(load) => {
                let failure = Arc::clone(&failure);
                env.set_loader(move |name| {
                    trace!("Resolving partial '{name}' through host loader");
                    match load(name) {
                        Ok(source) => Ok(Some(source)),
                        Err(err) => {
                            let detail = err.to_string();
                            if let Ok(mut slot) = failure.lock() {
                                *slot = Some(err);
                            }
                            Err(minijinja::Error::new(ErrorKind::TemplateNotFound, detail))
                        }
                    }
                });
            }
        }

        match env.render_str(template, view) {
            Ok(rendered) => Ok(rendered),
            // The engine wraps loader errors in its own type; hand back the host's.
            // A slot filled by an `ignore missing` include must not mask a later,
            // unrelated engine error.
            Err(err) if err.kind() == ErrorKind::TemplateNotFound => {
                match failure.lock().ok().and_then(|mut slot| slot.take()) {
                    Some(loader_err) => Err(loader_err),
                    None => Err(err.into()),
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    fn kind(&self) -> EngineKind {
        EngineKind::MiniJinja
    }
}
