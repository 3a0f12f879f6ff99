// std imports
use std::path::{Path, PathBuf};

// third-party imports
use config::{Case, Config, Environment, File, FileFormat};

// local imports
use crate::{
    appdirs::AppDirs,
    error::Result,
    settings::{DEFAULT_SETTINGS, Settings},
};

// ---

pub const APP_NAME: &str = "bruteout";
pub const ENV_PREFIX: &str = "BRUTEOUT";

/// Starts loading settings from the given configuration files.
///
/// With no files given, the user configuration file is used if it exists.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new(paths.into_iter().map(|path| path.as_ref().to_owned()).collect())
}

pub fn app_dirs() -> Option<AppDirs> {
    AppDirs::new(APP_NAME)
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
    env: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
            env: true,
        }
    }

    /// Skips embedded defaults and the user configuration file.
    pub fn no_default(self, no_default: bool) -> Self {
        Self { no_default, ..self }
    }

    /// Enables or disables `BRUTEOUT_*` environment overrides.
    pub fn env(self, env: bool) -> Self {
        Self { env, ..self }
    }

    pub fn load(self) -> Result<Settings> {
        let mut builder = Config::builder();

        if !self.no_default {
            builder = builder.add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
            if self.paths.is_empty() {
                if let Some(dirs) = app_dirs() {
                    let path = dirs.config_dir.join("config");
                    log::debug!("looking for optional configuration at {}", path.display());
                    builder = builder.add_source(File::from(path).required(false));
                }
            }
        }

        for path in &self.paths {
            log::debug!("loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path.as_path()));
        }

        if self.env {
            builder = builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .convert_case(Case::Kebab)
                    .try_parsing(true),
            );
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}
