//! Server configuration: `orrery.toml` when present, then environment overrides.

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "orrery.toml";
pub const PORT_VAR: &str = "ORRERY_PORT";
pub const ROOT_VAR: &str = "ORRERY_ROOT";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    pub address: IpAddr,
    pub port: u16,
    /// Directory served as-is: wasm package, scripts, textures, views.
    pub static_root: PathBuf,
    /// Document returned for `/`, relative to `static_root`.
    pub entry_document: PathBuf,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            static_root: PathBuf::from("web"),
            entry_document: PathBuf::from("views/enter.html"),
        }
    }
}

impl ServeConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: ServeConfig = toml::from_str(text)?;
        Ok(config)
    }

    /// Read `path` if it exists, otherwise start from the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::info!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("bad config: {}", path.display()))
    }

    /// Apply `ORRERY_PORT` / `ORRERY_ROOT` as returned by `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        if let Some(port) = lookup(PORT_VAR) {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("{PORT_VAR} is not a port number: {port:?}"))?;
        }
        if let Some(root) = lookup(ROOT_VAR) {
            self.static_root = PathBuf::from(root);
        }
        Ok(self)
    }

    pub fn from_env(path: &Path) -> anyhow::Result<Self> {
        Self::load(path)?.with_overrides(|name| std::env::var(name).ok())
    }

    pub fn entry_path(&self) -> PathBuf {
        self.static_root.join(&self.entry_document)
    }

    /// The static root must be a directory before the file server mounts it.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.static_root.is_dir() {
            bail!("static root is not a directory: {}", self.static_root.display());
        }
        if !self.entry_path().is_file() {
            log::warn!("entry document missing: {}", self.entry_path().display());
        }
        Ok(())
    }
}
