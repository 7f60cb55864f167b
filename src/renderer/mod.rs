//! Rendering engines the adapter can delegate to.

pub mod handlebars;
pub mod interface;
pub mod minijinja;
pub mod mustache;

pub use self::handlebars::HandlebarsRenderer;
pub use self::minijinja::MiniJinjaRenderer;
pub use self::mustache::MustacheRenderer;
pub use interface::{Partials, TemplateRenderer};

use crate::config::Settings;
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt::Display;

/// Available rendering engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum EngineKind {
    /// Mustache: sections, inverted sections and `{{> name}}` partials.
    #[default]
    Mustache,
    /// Handlebars: helpers such as `{{#each}}` and `{{> name}}` partials.
    Handlebars,
    /// Jinja syntax with `{% include "name" %}` partials.
    MiniJinja,
}

impl Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EngineKind::Mustache => "mustache",
            EngineKind::Handlebars => "handlebars",
            EngineKind::MiniJinja => "minijinja",
        };
        write!(f, "{s}")
    }
}

/// Builds the renderer selected by `settings.engine`.
pub fn create_renderer(settings: &Settings) -> Box<dyn TemplateRenderer> {
    match settings.engine {
        EngineKind::Mustache => Box::new(MustacheRenderer::with_settings(settings)),
        EngineKind::Handlebars => Box::new(HandlebarsRenderer::with_settings(settings)),
        EngineKind::MiniJinja => Box::new(MiniJinjaRenderer::with_settings(settings)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_engine_is_mustache() {
        let renderer = create_renderer(&Settings::default());
        assert_eq!(renderer.kind(), EngineKind::Mustache);
    }

    #[test]
    fn creates_requested_engine() {
        for engine in [EngineKind::Mustache, EngineKind::Handlebars, EngineKind::MiniJinja] {
            let settings = Settings { engine, ..Settings::default() };
            assert_eq!(create_renderer(&settings).kind(), engine);
        }
    }

    #[test]
    fn display_engine_kinds() {
        assert_eq!(EngineKind::Mustache.to_string(), "mustache");
        assert_eq!(EngineKind::Handlebars.to_string(), "handlebars");
        assert_eq!(EngineKind::MiniJinja.to_string(), "minijinja");
    }
}
