//! Port capability and the constructor table.
//!
//! Every [`VariantId`] maps to exactly one constructor in [`construct`].
//! Callers only see the [`Port`] trait through a [`PortHandle`].

use std::fmt;

use crate::options::OptionsBag;
use crate::platform::BaseFamily;
use crate::variant::VariantId;

pub mod chromium;
pub mod dryrun;
pub mod webkit;

pub use chromium::ChromiumPort;
pub use dryrun::DryRunPort;
pub use test::TestPort;
pub use webkit::WebKitPort;

/// An owned, resolved port.
pub type PortHandle = Box<dyn Port>;

/// What the test harness needs from a port.
pub trait Port: fmt::Debug + Send + Sync {
    /// The name the port was resolved under, e.g. `mac-leopard`.
    fn name(&self) -> &str;

    /// Which implementation this is.
    fn variant(&self) -> VariantId;

    /// Options the port was constructed with.
    fn options(&self) -> &OptionsBag;

    /// The version suffix of the name, e.g. `leopard` for `mac-leopard`.
    fn version(&self) -> Option<&str> {
        self.name()
            .strip_prefix(self.variant().name())
            .and_then(|rest| rest.strip_prefix('-'))
            .filter(|version| !version.is_empty())
    }

    /// The platform family the port runs on, if it is tied to one.
    fn family(&self) -> Option<BaseFamily> {
        self.variant().family()
    }

    /// The port a wrapper delegates to. `None` for ports that wrap nothing.
    fn inner(&self) -> Option<&dyn Port> {
        None
    }

    /// Name of the driver binary that renders tests.
    fn driver_name(&self) -> &str {
        self.variant().driver_name()
    }

    /// Result directories to search for expected output, most specific first.
    fn baseline_search_path(&self) -> Vec<String> {
        let mut path = vec![self.name().to_string()];
        for dir in self.variant().baseline_fallbacks() {
            if !path.iter().any(|p| p == dir) {
                path.push((*dir).to_string());
            }
        }
        path
    }

    /// Whether pixel results are compared. Off unless asked for.
    fn pixel_tests(&self) -> bool {
        self.options().pixel_tests.unwrap_or(false)
    }
}

/// Build the port for `variant`.
///
/// `DryRun` here wraps the test port; a dry run over some other port is
/// built with [`DryRunPort::new`] directly.
pub fn construct(variant: VariantId, name: String, options: OptionsBag) -> PortHandle {
    match variant {
        VariantId::Test => Box::new(TestPort::new(options)),
        VariantId::DryRun => {
            let inner = Box::new(TestPort::new(options));
            Box::new(DryRunPort::new(name, inner))
        }
        VariantId::Mac | VariantId::Win | VariantId::Gtk | VariantId::Qt => {
            Box::new(WebKitPort::new(variant, name, options))
        }
        VariantId::ChromiumMac | VariantId::ChromiumLinux | VariantId::ChromiumWin => {
            Box::new(ChromiumPort::new(variant, name, options))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_constructs_itself() {
        for v in VariantId::ALL {
            let port = construct(v, v.name().to_string(), OptionsBag::default());
            assert_eq!(port.variant(), v);
            assert_eq!(port.name(), v.name());
        }
    }

    #[test]
    fn versioned_name_leads_search_path() {
        let port = construct(VariantId::Mac, "mac-leopard".into(), OptionsBag::default());
        assert_eq!(port.baseline_search_path(), vec!["mac-leopard", "mac"]);
    }

    #[test]
    fn canonical_name_is_not_repeated() {
        let port = construct(VariantId::Win, "win".into(), OptionsBag::default());
        assert_eq!(port.baseline_search_path(), vec!["win", "mac"]);
    }

    #[test]
    fn version_and_family_come_from_the_name() {
        let port = construct(VariantId::ChromiumWin, "chromium-win-xp".into(), OptionsBag::default());
        assert_eq!(port.version(), Some("xp"));
        assert_eq!(port.family(), Some(BaseFamily::Windows));
        assert!(port.inner().is_none());

        let port = construct(VariantId::Qt, "qt".into(), OptionsBag::default());
        assert_eq!(port.version(), None);
        assert_eq!(port.family(), None);
    }

    #[test]
    fn pixel_tests_default_off() {
        let port = construct(VariantId::Gtk, "gtk".into(), OptionsBag::default());
        assert!(!port.pixel_tests());
        let port = construct(
            VariantId::Gtk,
            "gtk".into(),
            OptionsBag::default().with_pixel_tests(true),
        );
        assert!(port.pixel_tests());
    }
}
