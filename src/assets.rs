//! Config loading with an embedded fallback
//!
//! - If no config path is given: use the embedded `config.yaml` only
//! - If a path is given and the file exists: use the file
//! - If a path is given but missing: fall back to the embedded default

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Environment variable naming an external config file
pub const CONFIG_ENV: &str = "KOALIFY_CONFIG";

/// Where the active configuration comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// A path was configured but does not exist
    Missing(PathBuf),
    Embedded,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Missing(path) => {
                write!(f, "embedded ({} not found)", path.display())
            }
            ConfigSource::Embedded => write!(f, "embedded"),
        }
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Config loader with optional filesystem override
pub struct AssetLoader {
    /// External config file path (from --config or KOALIFY_CONFIG)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a loader. `None` means embedded config only.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Create a loader from an explicit path, else the `KOALIFY_CONFIG`
    /// environment variable.
    pub fn from_env(explicit: Option<PathBuf>) -> Self {
        Self::new(explicit.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from)))
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    pub fn config_source(&self) -> ConfigSource {
        match &self.config_file {
            Some(path) if path.exists() => ConfigSource::File(path.clone()),
            Some(path) => ConfigSource::Missing(path.clone()),
            None => ConfigSource::Embedded,
        }
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to the embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
            tracing::warn!(path = %path.display(), "Config file not found, using embedded default");
        }

        Self::embedded_config()
            .map(|data| {
                tracing::trace!("Loading config from embedded assets");
                data
            })
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found"))
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// The embedded default config.
    pub fn embedded_config() -> Option<Cow<'static, [u8]>> {
        EmbeddedConfig::get("config.yaml").map(|f| f.data)
    }

    /// Write the embedded config to the configured path (or
    /// `./config.yaml`) for customization.
    pub fn init(&self, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        let path = self
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("./config.yaml"));

        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(report);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if let Some(data) = Self::embedded_config() {
            fs::write(&path, &*data)?;
            report.written.push(path.display().to_string());
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_present() {
        let data = AssetLoader::embedded_config().expect("config.yaml is embedded");
        let text = std::str::from_utf8(&data).unwrap();
        assert!(text.contains("palette:"));
    }

    #[test]
    fn test_missing_file_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AssetLoader::new(Some(dir.path().join("nope.yaml")));
        assert!(matches!(loader.config_source(), ConfigSource::Missing(_)));
        let text = loader.read_config_string().unwrap();
        assert!(text.contains("palette:"));
    }

    #[test]
    fn test_external_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "palette: pepto\n").unwrap();

        let loader = AssetLoader::new(Some(path.clone()));
        assert_eq!(loader.config_source(), ConfigSource::File(path));
        assert_eq!(loader.read_config_string().unwrap(), "palette: pepto\n");
    }

    #[test]
    fn test_init_writes_then_skips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.yaml");
        let loader = AssetLoader::new(Some(path.clone()));

        let first = loader.init(false).unwrap();
        assert_eq!(first.written.len(), 1);
        assert!(path.exists());

        let second = loader.init(false).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.skipped.len(), 1);

        let forced = loader.init(true).unwrap();
        assert_eq!(forced.written.len(), 1);
    }
}
