use crate::{
    adapter::RenderAdapter,
    cli::{Args, PartialArg},
    config::Settings,
    constants::STDIN_INDICATOR,
    error::{Error, Result},
    ioutils::{parse_view, read_source, write_file},
    loader::PartialMap,
};
use log::{debug, info};
use std::{
    collections::HashMap,
    io::Write,
    path::{Path, PathBuf},
};

/// Main CLI runner: acts as the host, wiring files and settings into the adapter.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Renders the template and returns the output.
    pub fn render(&self) -> Result<String> {
        let settings = self.load_settings()?;
        let template = read_source(&self.args.template)?;
        let view = self.load_view()?;

        if self.args.lazy {
            let adapter = RenderAdapter::from_settings(&settings)
                .with_loader(Self::file_loader(&self.args.partials));
            adapter.render(&template, &view)
        } else {
            let adapter = RenderAdapter::from_settings(&settings);
            let partials = self.read_partials()?;
            let partials = (!partials.is_empty()).then_some(&partials);
            adapter.render_with_partials(&template, &view, partials)
        }
    }

    /// Renders and writes the output to its destination.
    pub fn run(self) -> Result<()> {
        let rendered = self.render()?;
        match &self.args.output {
            Some(path) => {
                write_file(&rendered, path)?;
                info!("Rendered output written to {}", path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }

    /// Settings from `--config`, else discovered next to the template.
    /// `--engine` always wins.
    fn load_settings(&self) -> Result<Settings> {
        let mut settings = match &self.args.config {
            Some(path) => Settings::load(path)?,
            None => Settings::discover(self.settings_dir()?)?,
        };
        if let Some(engine) = self.args.engine {
            settings.engine = engine;
        }
        debug!("Using settings: {settings:?}");
        Ok(settings)
    }

    /// The template's directory; the working directory for stdin or a bare
    /// file name.
    fn settings_dir(&self) -> Result<PathBuf> {
        let template = self.args.template.as_str();
        let parent = Path::new(template).parent().filter(|p| !p.as_os_str().is_empty());
        match parent {
            Some(dir) if template != STDIN_INDICATOR => Ok(dir.to_path_buf()),
            _ => Ok(std::env::current_dir()?),
        }
    }

    fn load_view(&self) -> Result<serde_json::Value> {
        let buf = match (&self.args.view, &self.args.view_file) {
            (Some(json), _) => json.clone(),
            (None, Some(source)) => read_source(source)?,
            (None, None) => String::new(),
        };
        parse_view(&buf)
    }

    fn read_partials(&self) -> Result<PartialMap> {
        self.args
            .partials
            .iter()
            .map(|PartialArg { name, path }| -> Result<(String, String)> {
                Ok((name.clone(), std::fs::read_to_string(path)?))
            })
            .collect()
    }

    /// A host loader reading a partial's file on first request.
    fn file_loader(partials: &[PartialArg]) -> impl Fn(&str) -> Result<String> + Send + Sync {
        let paths: HashMap<String, PathBuf> =
            partials.iter().map(|p| (p.name.clone(), p.path.clone())).collect();
        move |name: &str| -> Result<String> {
            let path = paths
                .get(name)
                .ok_or_else(|| Error::PartialNotFound { name: name.to_string() })?;
            debug!("Reading partial '{name}' from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
    }
}

/// Entry point used by the binary.
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}
