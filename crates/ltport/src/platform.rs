//! Platform identification.
//!
//! A [`PlatformId`] names the operating environment the harness runs on,
//! using the short identifiers test tooling has always used (`darwin`,
//! `win32`, `cygwin`, `linux2`). The ambient value comes from a
//! [`PlatformProbe`] so callers can substitute their own.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The operating environment a port is resolved for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlatformId {
    /// macOS.
    Darwin,
    /// Native Windows.
    Win32,
    /// The Cygwin POSIX layer on Windows.
    Cygwin,
    /// Any Linux kernel (`linux`, `linux2`, ...).
    Linux,
    /// Anything else, kept verbatim. A known identifier wrapped here is
    /// still classified as the platform it names.
    Other(String),
}

impl PlatformId {
    /// Parse a platform identifier. Never fails; unknown names become `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            "darwin" => Self::Darwin,
            "win32" => Self::Win32,
            "cygwin" => Self::Cygwin,
            s if s.starts_with("linux") => Self::Linux,
            other => Self::Other(other.to_string()),
        }
    }

    /// The canonical identifier string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Darwin => "darwin",
            Self::Win32 => "win32",
            Self::Cygwin => "cygwin",
            Self::Linux => "linux2",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PlatformId {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for PlatformId {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<PlatformId> for String {
    fn from(p: PlatformId) -> Self {
        p.as_str().to_string()
    }
}

/// Platform grouping that ports are built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaseFamily {
    /// macOS.
    Mac,
    /// Native Windows and Cygwin alike.
    Windows,
    /// Any Linux distribution.
    Linux,
}

impl BaseFamily {
    /// Every family, in table order.
    pub const ALL: [BaseFamily; 3] = [Self::Mac, Self::Windows, Self::Linux];

    /// Map a platform to its family, or `None` if no port supports it.
    pub fn classify(platform: &PlatformId) -> Option<Self> {
        match platform {
            PlatformId::Darwin => Some(Self::Mac),
            PlatformId::Win32 | PlatformId::Cygwin => Some(Self::Windows),
            PlatformId::Linux => Some(Self::Linux),
            PlatformId::Other(s) => match PlatformId::parse(s) {
                PlatformId::Other(_) => None,
                known => Self::classify(&known),
            },
        }
    }

    /// Short lowercase name (`mac`, `win`, `linux`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mac => "mac",
            Self::Windows => "win",
            Self::Linux => "linux",
        }
    }
}

impl fmt::Display for BaseFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of the "current platform" when the caller does not pass one.
pub trait PlatformProbe {
    /// Read the current platform. Called at most once per resolution.
    fn current_platform(&self) -> PlatformId;
}

impl<F> PlatformProbe for F
where
    F: Fn() -> PlatformId,
{
    fn current_platform(&self) -> PlatformId {
        self()
    }
}

/// Probe for the platform this binary runs on.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl HostPlatform {
    /// Translate a Rust target OS name into a platform identifier.
    pub fn from_target_os(os: &str) -> PlatformId {
        match os {
            "macos" => PlatformId::Darwin,
            "windows" => PlatformId::Win32,
            "linux" => PlatformId::Linux,
            other => PlatformId::Other(other.to_string()),
        }
    }
}

impl PlatformProbe for HostPlatform {
    fn current_platform(&self) -> PlatformId {
        Self::from_target_os(std::env::consts::OS)
    }
}

/// Probe that always reports the same platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPlatform(pub PlatformId);

impl PlatformProbe for FixedPlatform {
    fn current_platform(&self) -> PlatformId {
        self.0.clone()
    }
}
