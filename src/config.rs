//! Render configuration.
//!
//! Read from `qdsl.toml` in the working directory, falling back to
//! `<config dir>/qdsl/config.toml`:
//!
//! ```toml
//! [render]
//! dialect = "postgres"
//! use_literals = false
//! placeholders = "dollar"   # question | positional | dollar | colon
//! quote = "reserved"        # never | reserved | always
//! escape = "!"
//! ```

use crate::error::{QdslError, QdslResult};
use crate::serializer::RenderOptions;
use crate::templates::{Dialect, PlaceholderStyle, QuoteMode, Templates, TemplatesBuilder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const CONFIG_FILE: &str = "qdsl.toml";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    render: RenderConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default)]
    pub dialect: Dialect,
    #[serde(default)]
    pub use_literals: bool,
    pub placeholders: Option<PlaceholderStyle>,
    pub quote: Option<QuoteMode>,
    pub escape: Option<char>,
}

impl RenderConfig {
    pub fn from_toml(content: &str) -> QdslResult<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.render)
    }

    pub fn load_from(path: &Path) -> QdslResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load from the first config file found, or defaults when there is none.
    pub fn load() -> QdslResult<Self> {
        match Self::locate() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading render config");
                Self::load_from(&path)
            }
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn locate() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }
        dirs::config_dir()
            .map(|dir| dir.join("qdsl").join("config.toml"))
            .filter(|p| p.exists())
    }

    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            use_literals: self.use_literals,
        }
    }

    /// Dialect table with this config's overrides applied.
    pub fn templates(&self) -> QdslResult<Arc<Templates>> {
        let base = match self.escape {
            Some(escape) => self.dialect.templates_with_escape(escape)?,
            None => self.dialect.templates()?,
        };
        if self.placeholders.is_none() && self.quote.is_none() {
            return Ok(base);
        }
        let mut builder = TemplatesBuilder::extending(&base, format!("{}+config", base.name()));
        if let Some(style) = self.placeholders {
            builder = builder.placeholders(style);
        }
        if let Some(mode) = self.quote {
            builder = builder.quoting(base.quoting().with_mode(mode));
        }
        builder.build()
    }

    /// Set a key from `key=value` text, as given on the command line.
    pub fn set(&mut self, key: &str, value: &str) -> QdslResult<()> {
        let invalid = || QdslError::Config(format!("invalid value '{}' for '{}'", value, key));
        match key {
            "dialect" => self.dialect = value.parse()?,
            "use_literals" => self.use_literals = value.parse().map_err(|_| invalid())?,
            "placeholders" => {
                self.placeholders = Some(
                    toml::Value::String(value.to_string())
                        .try_into()
                        .map_err(|_| invalid())?,
                )
            }
            "quote" => {
                self.quote = Some(
                    toml::Value::String(value.to_string())
                        .try_into()
                        .map_err(|_| invalid())?,
                )
            }
            "escape" => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => self.escape = Some(c),
                    _ => return Err(invalid()),
                }
            }
            _ => return Err(QdslError::Config(format!("unknown key '{}'", key))),
        }
        Ok(())
    }
}
