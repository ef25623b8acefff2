//! Layered configuration for the content template.
//!
//! Values are merged, lowest priority first, from:
//!
//! 1. built-in defaults,
//! 2. a configuration file (TOML, YAML or JSON, picked by extension),
//! 3. environment variables prefixed with `INKDEX_`; nested keys are
//!    separated by a double underscore (`INKDEX_RATE_LIMIT__REQUESTS=30`).
//!
//! # Example
//!
//! ```toml
//! catalog = "/srv/inkdex/content.json"
//!
//! [rate_limit]
//! requests = 15
//! buffer_interval = 10
//! ignore_images = true
//! ```

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use inkdex_catalog::Catalog;
use inkdex_extension::ContentTemplate;
use inkdex_extension::network::RateLimitOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::instrument;

const ENV_PREFIX: &str = "INKDEX_";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Requests allowed per buffer interval
    pub requests: u32,
    /// Buffer interval, in seconds
    pub buffer_interval: u64,
    pub ignore_images: bool,
}
impl Default for RateLimitConfig {
    fn default() -> Self {
        let options = RateLimitOptions::default();
        Self {
            requests: options.number_of_requests,
            buffer_interval: options.buffer_interval.as_secs(),
            ignore_images: options.ignore_images,
        }
    }
}
impl From<&RateLimitConfig> for RateLimitOptions {
    fn from(config: &RateLimitConfig) -> Self {
        Self {
            number_of_requests: config.requests,
            buffer_interval: Duration::from_secs(config.buffer_interval),
            ignore_images: config.ignore_images,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External catalog data file; the bundled catalog is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    pub rate_limit: RateLimitConfig,
}
impl Config {
    /// Location of the per-user configuration file, if the platform has a
    /// configuration directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "inkdex", "content-template").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Builds the layered [`Figment`] without extracting it.
    ///
    /// A missing file is skipped silently; use [`load`](Self::load) to
    /// require an explicit file to exist.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => figment.merge(Toml::file(path)),
            };
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads configuration from `path`, or from [`default_path`](Self::default_path)
    /// when no path is given.
    ///
    /// Returns [`ErrorKind::NotFound`] if an explicit `path` doesn't exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) if !path.exists() => exn::bail!(ErrorKind::NotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path(),
        };
        let config: Self = Self::figment(path.as_deref()).extract().or_raise(|| ErrorKind::Invalid)?;
        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Opens the configured catalog.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::from_path(path),
            None => Catalog::bundled(),
        }
        .or_raise(|| ErrorKind::Catalog)
    }

    /// Builds an extension over the configured catalog and rate limit.
    pub fn extension(&self) -> Result<ContentTemplate> {
        Ok(ContentTemplate::new(self.catalog()?).with_rate_limit((&self.rate_limit).into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config: Config = Config::figment(None).extract()?;
            assert_eq!(config, Config::default());
            assert_eq!(config.rate_limit.requests, 15);
            assert_eq!(config.rate_limit.buffer_interval, 10);
            assert!(config.rate_limit.ignore_images);
            assert_eq!(config.catalog, None);
            Ok(())
        });
    }

    #[rstest]
    #[case("config.toml", "catalog = \"data.json\"\n[rate_limit]\nrequests = 30\n")]
    #[case("config.yaml", "catalog: data.json\nrate_limit:\n  requests: 30\n")]
    #[case("config.json", r#"{"catalog": "data.json", "rate_limit": {"requests": 30}}"#)]
    fn test_file_formats(#[case] name: &str, #[case] contents: &str) {
        Jail::expect_with(|jail| {
            jail.create_file(name, contents)?;
            let config = Config::load(Some(Path::new(name))).unwrap();
            assert_eq!(config.catalog, Some(PathBuf::from("data.json")));
            assert_eq!(config.rate_limit.requests, 30);
            assert_eq!(config.rate_limit.buffer_interval, 10);
            Ok(())
        });
    }

    #[test]
    fn test_environment_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[rate_limit]\nrequests = 30\nignore_images = true\n")?;
            jail.set_env("INKDEX_RATE_LIMIT__REQUESTS", "5");
            jail.set_env("INKDEX_RATE_LIMIT__IGNORE_IMAGES", "false");
            let config = Config::load(Some(Path::new("config.toml"))).unwrap();
            assert_eq!(config.rate_limit.requests, 5);
            assert!(!config.rate_limit.ignore_images);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[rate_limit]\nrequests = \"many\"\n")?;
            let err = Config::load(Some(Path::new("config.toml"))).unwrap_err();
            assert_eq!(&*err, &ErrorKind::Invalid);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert_eq!(&*err, &ErrorKind::NotFound(PathBuf::from("/definitely/not/here.toml")));
    }

    #[test]
    fn test_catalog_sources() {
        let bundled = Config::default().catalog().unwrap();
        assert!(!bundled.is_empty());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, r#"[{"titleId":"a","primaryTitle":"Red Sky"}]"#).unwrap();
        let config = Config {
            catalog: Some(path),
            ..Config::default()
        };
        assert_eq!(config.catalog().unwrap().len(), 1);

        let broken = Config {
            catalog: Some(dir.path().join("missing.json")),
            ..Config::default()
        };
        assert_eq!(&*broken.catalog().unwrap_err(), &ErrorKind::Catalog);
    }

    #[test]
    fn test_extension_uses_rate_limit() {
        let config = Config {
            rate_limit: RateLimitConfig {
                requests: 2,
                buffer_interval: 60,
                ignore_images: false,
            },
            ..Config::default()
        };
        let extension = config.extension().unwrap();
        let options = extension.rate_limiter().options();
        assert_eq!(options.number_of_requests, 2);
        assert_eq!(options.buffer_interval, Duration::from_secs(60));
        assert!(!options.ignore_images);
    }
}
