//! Chromium ports, layered over the mac, win and linux platforms.

use crate::options::OptionsBag;
use crate::variant::VariantId;

use super::Port;

/// A Chromium port driven by `test_shell`.
#[derive(Debug, Clone)]
pub struct ChromiumPort {
    variant: VariantId,
    name: String,
    options: OptionsBag,
}

impl ChromiumPort {
    pub fn new(variant: VariantId, name: String, options: OptionsBag) -> Self {
        tracing::debug!(port = %name, %variant, "constructed Chromium port");
        Self {
            variant,
            name,
            options,
        }
    }
}

impl Port for ChromiumPort {
    fn name(&self) -> &str {
        &self.name
    }

    fn variant(&self) -> VariantId {
        self.variant
    }

    fn options(&self) -> &OptionsBag {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::BaseFamily;

    #[test]
    fn linux_falls_back_through_windows_baselines() {
        let port = ChromiumPort::new(
            VariantId::ChromiumLinux,
            "chromium-linux".into(),
            OptionsBag::chromium(),
        );
        assert_eq!(port.family(), Some(BaseFamily::Linux));
        assert_eq!(
            port.baseline_search_path(),
            vec!["chromium-linux", "chromium-win", "chromium", "win", "mac"]
        );
        assert_eq!(port.driver_name(), "test_shell");
    }

    #[test]
    fn versioned_windows_port() {
        let port = ChromiumPort::new(
            VariantId::ChromiumWin,
            "chromium-win-xp".into(),
            OptionsBag::default(),
        );
        assert_eq!(port.family(), Some(BaseFamily::Windows));
        assert_eq!(port.version(), Some("xp"));
        assert_eq!(port.baseline_search_path()[..2], ["chromium-win-xp", "chromium-win"]);
    }
}
