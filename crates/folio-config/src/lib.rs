//! Configuration file handling for folio.
//!
//! The config lives at `<config dir>/folio/config.toml`. A missing file means
//! defaults; a malformed one is reported rather than silently ignored.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use folio_core::{AnimationSpeed, BackgroundStyle, Rgba};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default contact endpoint of a locally served site.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/contact";

/// Environment variable overriding the contact endpoint.
pub const ENDPOINT_ENV: &str = "FOLIO_ENDPOINT";

const CONFIG_FILE: &str = "config.toml";

/// Errors raised while reading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a home directory for folio")]
    NoHomeDir,
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// User configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL the contact form posts to.
    pub endpoint: String,
    /// JSON file holding the portfolio content.
    pub content_path: Option<PathBuf>,
    /// Background layers to draw.
    pub background: BackgroundStyle,
    /// Animation speed.
    pub speed: AnimationSpeed,
    /// Draw a glow that follows the mouse.
    pub pointer_glow: bool,
    /// Contact request timeout; unset waits indefinitely.
    pub request_timeout_secs: Option<u64>,
    /// Color of the pointer glow, in CSS notation; unset uses the built-in pink.
    pub glow_color: Option<Rgba>,
    /// Details listed beside the contact form.
    pub contact: ContactInfo,
}

/// Ways to reach the portfolio owner, shown on the Contact section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    /// Profile links, in display order.
    pub links: Vec<SocialLink>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.phone.is_none()
            && self.location.is_none()
            && self.links.is_empty()
    }
}

/// A labelled profile link such as GitHub or LinkedIn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            content_path: None,
            background: BackgroundStyle::default(),
            speed: AnimationSpeed::default(),
            pointer_glow: true,
            request_timeout_secs: None,
            glow_color: None,
            contact: ContactInfo::default(),
        }
    }
}

impl Config {
    /// Load the config from the platform config directory, then apply
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV)
            && !endpoint.trim().is_empty()
        {
            config.endpoint = endpoint;
        }
        Ok(config)
    }

    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, text).map_err(write_err)
    }

    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
    }

    /// Directory the log file is written to.
    pub fn log_dir() -> Result<PathBuf, ConfigError> {
        Ok(project_dirs()?.data_dir().to_path_buf())
    }

    /// Contact request timeout as a duration.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("", "", "folio").ok_or(ConfigError::NoHomeDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.pointer_glow);
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "background = \"starfield\"\nspeed = \"fast\"\nrequest_timeout_secs = 10\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.background, BackgroundStyle::Starfield);
        assert_eq!(config.speed, AnimationSpeed::Fast);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "background = \"plaid\"\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            endpoint: "https://example.com/api/contact".into(),
            content_path: Some(PathBuf::from("/tmp/portfolio.json")),
            background: BackgroundStyle::Particles,
            speed: AnimationSpeed::Slow,
            pointer_glow: false,
            request_timeout_secs: Some(5),
            glow_color: Some(Rgba::new(34, 211, 238, 0.2)),
            contact: ContactInfo {
                email: Some("me@example.com".into()),
                phone: None,
                location: Some("Lampung, Indonesia".into()),
                links: vec![SocialLink {
                    label: "GitHub".into(),
                    url: "https://github.com/example".into(),
                }],
            },
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_glow_color_and_contact_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r##"glow_color = "#22d3ee"

[contact]
email = "me@example.com"
phone = "+62 857 0000 0000"

[[contact.links]]
label = "GitHub"
url = "https://github.com/example"

[[contact.links]]
label = "LinkedIn"
url = "https://www.linkedin.com/in/example"
"##,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.glow_color, Some(Rgba::opaque(34, 211, 238)));
        assert_eq!(config.contact.email.as_deref(), Some("me@example.com"));
        assert_eq!(config.contact.location, None);
        assert_eq!(config.contact.links.len(), 2);
        assert_eq!(config.contact.links[1].label, "LinkedIn");
        assert!(!config.contact.is_empty());
        assert!(Config::default().contact.is_empty());
    }

    #[test]
    fn test_bad_glow_color_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "glow_color = \"hsl(1, 2%, 3%)\"\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("unrecognized color syntax"));
    }
}
