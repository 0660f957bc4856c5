//! `ltport.toml` parsing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use ltport::{Flavor, OptionsBag, PlatformId};

/// File name searched for, from the working directory upward.
pub const CONFIG_FILE: &str = "ltport.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LtportConfig {
    /// Port selection defaults.
    #[serde(default)]
    pub port: PortConfig,
    /// Options handed to the resolver.
    #[serde(default)]
    pub options: OptionsBag,
}

/// `[port]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortConfig {
    /// Explicit port name.
    #[serde(default)]
    pub name: Option<String>,
    /// Platform to resolve for instead of the host.
    #[serde(default)]
    pub platform: Option<PlatformId>,
}

/// Selection and option flags given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub port: Option<String>,
    pub platform: Option<PlatformId>,
    /// `Some(false)` clears a flavor set in the file.
    pub chromium: Option<bool>,
    pub pixel_tests: Option<bool>,
}

impl Overrides {
    /// Whether the command line chooses the port itself.
    fn selects_port(&self) -> bool {
        self.port.is_some() || self.platform.is_some() || self.chromium.is_some()
    }
}

/// The resolver inputs after applying command-line overrides to the file.
#[derive(Debug, Clone, Default)]
pub struct Effective {
    pub port: Option<String>,
    pub platform: Option<PlatformId>,
    pub options: OptionsBag,
}

impl LtportConfig {
    /// Apply `overrides` on top of the file.
    ///
    /// Port name, platform and flavor form one selection: if the command
    /// line sets any of them, the file's port name no longer applies.
    /// Options are overridden field by field.
    pub fn effective(self, overrides: Overrides) -> Effective {
        let port = if overrides.selects_port() {
            overrides.port
        } else {
            self.port.name
        };
        let platform = overrides.platform.or(self.port.platform);

        let mut options = self.options;
        match overrides.chromium {
            Some(true) => options.flavor = Some(Flavor::Chromium),
            Some(false) => options.flavor = None,
            None => {}
        }
        if let Some(pixel_tests) = overrides.pixel_tests {
            options.pixel_tests = Some(pixel_tests);
        }

        Effective {
            port,
            platform,
            options,
        }
    }

    /// Search upward from `start_dir` for `ltport.toml`, parse and return it
    /// along with the path it was read from.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let config = Self::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((config, candidate)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
