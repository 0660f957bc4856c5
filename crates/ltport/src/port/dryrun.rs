//! Dry-run wrapper: looks like another port but runs nothing.

use crate::options::OptionsBag;
use crate::platform::BaseFamily;
use crate::variant::VariantId;

use super::{Port, PortHandle};

/// Delegates everything descriptive to the wrapped port.
#[derive(Debug)]
pub struct DryRunPort {
    name: String,
    inner: PortHandle,
}

impl DryRunPort {
    pub fn new(name: String, inner: PortHandle) -> Self {
        tracing::debug!(port = %name, inner = inner.name(), "constructed dry-run port");
        Self { name, inner }
    }
}

impl Port for DryRunPort {
    fn name(&self) -> &str {
        &self.name
    }

    fn variant(&self) -> VariantId {
        VariantId::DryRun
    }

    fn options(&self) -> &OptionsBag {
        self.inner.options()
    }

    fn version(&self) -> Option<&str> {
        self.inner.version()
    }

    fn family(&self) -> Option<BaseFamily> {
        self.inner.family()
    }

    fn inner(&self) -> Option<&dyn Port> {
        Some(self.inner.as_ref())
    }

    fn driver_name(&self) -> &str {
        self.inner.driver_name()
    }

    fn baseline_search_path(&self) -> Vec<String> {
        self.inner.baseline_search_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::WebKitPort;

    #[test]
    fn delegates_to_inner() {
        let inner = Box::new(WebKitPort::new(
            VariantId::Mac,
            "mac-leopard".into(),
            OptionsBag::default().with_pixel_tests(true),
        ));
        let port = DryRunPort::new("dryrun-mac-leopard".into(), inner);
        assert_eq!(port.name(), "dryrun-mac-leopard");
        assert_eq!(port.variant(), VariantId::DryRun);
        assert_eq!(port.inner().map(|p| p.variant()), Some(VariantId::Mac));
        assert_eq!(port.version(), Some("leopard"));
        assert_eq!(port.family(), Some(BaseFamily::Mac));
        assert_eq!(port.driver_name(), "DumpRenderTree");
        assert_eq!(port.baseline_search_path(), vec!["mac-leopard", "mac"]);
        assert!(port.pixel_tests());
    }
}
