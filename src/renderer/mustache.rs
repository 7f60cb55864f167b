use crate::{
    config::Settings,
    error::{Error, Result},
    loader::{LoadPartial, PartialMap},
    renderer::{
        interface::{Partials, TemplateRenderer},
        EngineKind,
    },
};
use log::{debug, trace};
use mustache::{Context, Template};
use regex::Regex;
use std::collections::VecDeque;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tempfile::TempDir;

/// A `{{> name}}` tag with the default delimiters.
const PARTIAL_TAG: &str = r"\{\{>\s*([^\s}]+)\s*\}\}";

/// Extension the engine appends to a partial name when it looks the file up.
const PARTIAL_EXTENSION: &str = "mustache";

/// Mustache engine: sections, inverted sections, the implicit iterator `{{.}}`
/// and `{{> name}}` partials.
///
/// The engine resolves partials while compiling, from files under a directory.
/// Each call compiles against a fresh scratch directory holding only the
/// partials of that call. `{{x}}` is always HTML-escaped (`{{{x}}}` is raw) and
/// missing values always render empty, so `escape_html` and `strict` have no
/// effect here.
pub struct MustacheRenderer {
    _private: (),
}

impl MustacheRenderer {
    /// Creates a renderer with Mustache defaults.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Creates a renderer from `settings`.
    pub fn with_settings(settings: &Settings) -> Self {
        if !settings.escape_html || settings.strict {
            debug!("escape_html and strict are fixed by the mustache engine; ignoring them");
        }
        Self::new()
    }

    /// Compiles `template` with `partials` visible to `{{> name}}` tags.
    fn compile(template: &str, partials: &PartialMap) -> Result<Template> {
        let scratch = TempDir::new()?;
        for (name, source) in partials {
            let Some(path) = partial_path(scratch.path(), name) else {
                debug!("Skipping partial with unusable name '{name}'");
                continue;
            };
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, source)?;
        }
        // Partials are compiled into the template, so the directory can go.
        Ok(Context::new(scratch.path().to_path_buf()).compile(template.chars())?)
    }

    /// Loads every partial reachable from `template` through `load`, once per
    /// name. The first loader error is returned as is.
    fn resolve(template: &str, load: &LoadPartial) -> Result<PartialMap> {
        let tag = Regex::new(PARTIAL_TAG).map_err(|e| Error::Other(e.into()))?;
        let mut resolved = PartialMap::new();
        let mut pending: VecDeque<String> = partial_names(&tag, template).collect();

        while let Some(name) = pending.pop_front() {
            if resolved.contains_key(&name) {
                continue;
            }
            trace!("Resolving partial '{name}' through host loader");
            let source = load(&name)?;
            pending.extend(partial_names(&tag, &source));
            resolved.insert(name, source);
        }
        Ok(resolved)
    }
}

impl Default for MustacheRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MustacheRenderer {
    fn render(
        &self,
        template: &str,
        view: &serde_json::Value,
        partials: Partials<'_>,
    ) -> Result<String> {
        let compiled = match partials {
            Partials::None => Self::compile(template, &PartialMap::new())?,
            Partials::Static(map) => Self::compile(template, map)?,
            Partials::Lazy(load) => Self::compile(template, &Self::resolve(template, &load)?)?,
        };

        let mut out = Vec::new();
        compiled.render(&mut out, view)?;
        String::from_utf8(out).map_err(|e| Error::Other(e.into()))
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Mustache
    }
}

fn partial_names<'a>(tag: &'a Regex, source: &'a str) -> impl Iterator<Item = String> + 'a {
    tag.captures_iter(source).map(|caps| caps[1].to_string())
}

/// Where the engine looks for partial `name` under `dir`. Names that would
/// leave `dir` have no path.
fn partial_path(dir: &Path, name: &str) -> Option<PathBuf> {
    let relative = Path::new(name);
    if !relative.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    let mut path = dir.join(relative);
    path.set_extension(PARTIAL_EXTENSION);
    Some(path)
}
