//! The closed set of ports and the tables that select among them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::options::SubFamily;
use crate::platform::BaseFamily;

/// Identifies one port implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantId {
    /// In-process fake used to test the harness itself.
    Test,
    /// Wraps another port and skips running anything.
    #[serde(rename = "dryrun")]
    DryRun,
    /// WebKit on macOS.
    Mac,
    /// WebKit on Windows, native or under Cygwin.
    Win,
    /// WebKitGTK on Linux.
    Gtk,
    /// QtWebKit. Only selected by name.
    Qt,
    /// Chromium on macOS.
    ChromiumMac,
    /// Chromium on Linux.
    ChromiumLinux,
    /// Chromium on Windows.
    ChromiumWin,
}

/// What a port name asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// A concrete port.
    Port(VariantId),
    /// A dry-run wrapper around `inner`, or around the test port when `None`.
    DryRun(Option<&'a str>),
}

const DRYRUN_PREFIX: &str = "dryrun-";

impl VariantId {
    /// Every port, in listing order.
    pub const ALL: [VariantId; 9] = [
        Self::Test,
        Self::DryRun,
        Self::Mac,
        Self::Win,
        Self::Gtk,
        Self::Qt,
        Self::ChromiumMac,
        Self::ChromiumLinux,
        Self::ChromiumWin,
    ];

    /// Canonical port name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::DryRun => "dryrun",
            Self::Mac => "mac",
            Self::Win => "win",
            Self::Gtk => "gtk",
            Self::Qt => "qt",
            Self::ChromiumMac => "chromium-mac",
            Self::ChromiumLinux => "chromium-linux",
            Self::ChromiumWin => "chromium-win",
        }
    }

    /// One-line description for listings.
    pub fn description(self) -> &'static str {
        match self {
            Self::Test => "Test double that runs no real binaries",
            Self::DryRun => "Dry run over another port (dryrun-<port>)",
            Self::Mac => "WebKit on macOS",
            Self::Win => "WebKit on Windows (native or Cygwin)",
            Self::Gtk => "WebKitGTK on Linux",
            Self::Qt => "QtWebKit",
            Self::ChromiumMac => "Chromium on macOS",
            Self::ChromiumLinux => "Chromium on Linux",
            Self::ChromiumWin => "Chromium on Windows",
        }
    }

    /// Whether the port is a Chromium build.
    pub fn is_chromium(self) -> bool {
        matches!(
            self,
            Self::ChromiumMac | Self::ChromiumLinux | Self::ChromiumWin
        )
    }

    /// The platform family the port runs on. `None` for ports that are not
    /// tied to one.
    pub fn family(self) -> Option<BaseFamily> {
        match self {
            Self::Mac | Self::ChromiumMac => Some(BaseFamily::Mac),
            Self::Win | Self::ChromiumWin => Some(BaseFamily::Windows),
            Self::Gtk | Self::ChromiumLinux => Some(BaseFamily::Linux),
            Self::Test | Self::DryRun | Self::Qt => None,
        }
    }

    /// Whether the name may carry a version suffix, as in `mac-leopard`.
    fn accepts_version(self) -> bool {
        !matches!(self, Self::Test | Self::DryRun)
    }

    /// Name of the test driver binary the port runs.
    pub fn driver_name(self) -> &'static str {
        match self {
            Self::Test | Self::DryRun => "TestDriver",
            Self::Mac | Self::Win | Self::Gtk | Self::Qt => "DumpRenderTree",
            Self::ChromiumMac | Self::ChromiumLinux | Self::ChromiumWin => "test_shell",
        }
    }

    /// Platform result directories searched after a versioned port name, most specific first.
    pub fn baseline_fallbacks(self) -> &'static [&'static str] {
        match self {
            Self::Test => &["test"],
            Self::DryRun => &[],
            Self::Mac => &["mac"],
            Self::Win => &["win", "mac"],
            Self::Gtk => &["gtk"],
            Self::Qt => &["qt"],
            Self::ChromiumMac => &["chromium-mac", "chromium", "mac"],
            Self::ChromiumWin => &["chromium-win", "chromium", "win", "mac"],
            Self::ChromiumLinux => &["chromium-linux", "chromium-win", "chromium", "win", "mac"],
        }
    }

    /// The port inferred for a platform family and build flavor.
    pub fn for_family(family: BaseFamily, sub_family: SubFamily) -> Self {
        match (family, sub_family) {
            (BaseFamily::Mac, SubFamily::Base) => Self::Mac,
            (BaseFamily::Mac, SubFamily::Vendor) => Self::ChromiumMac,
            (BaseFamily::Windows, SubFamily::Base) => Self::Win,
            (BaseFamily::Windows, SubFamily::Vendor) => Self::ChromiumWin,
            (BaseFamily::Linux, SubFamily::Base) => Self::Gtk,
            (BaseFamily::Linux, SubFamily::Vendor) => Self::ChromiumLinux,
        }
    }

    /// Look up a port name.
    ///
    /// Accepts canonical names, versioned platform names (`chromium-win-xp`),
    /// and `dryrun` / `dryrun-<port>`. Returns `None` for anything else.
    pub fn lookup(name: &str) -> Option<Selection<'_>> {
        if name == Self::DryRun.name() {
            return Some(Selection::DryRun(None));
        }
        if let Some(inner) = name.strip_prefix(DRYRUN_PREFIX) {
            if inner.is_empty() || inner.starts_with(Self::DryRun.name()) {
                return None;
            }
            return Some(Selection::DryRun(Some(inner)));
        }

        if let Some(exact) = Self::ALL.into_iter().find(|v| v.name() == name) {
            return Some(Selection::Port(exact));
        }

        Self::ALL
            .into_iter()
            .filter(|v| v.accepts_version())
            .filter(|v| {
                name.strip_prefix(v.name())
                    .and_then(|rest| rest.strip_prefix('-'))
                    .is_some_and(|version| !version.is_empty())
            })
            .max_by_key(|v| v.name().len())
            .map(Selection::Port)
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
