//! Engine-only WebKit ports: mac, win, gtk and qt.

use crate::options::OptionsBag;
use crate::variant::VariantId;

use super::Port;

/// A WebKit port driven by `DumpRenderTree`.
#[derive(Debug, Clone)]
pub struct WebKitPort {
    variant: VariantId,
    name: String,
    options: OptionsBag,
}

impl WebKitPort {
    pub fn new(variant: VariantId, name: String, options: OptionsBag) -> Self {
        tracing::debug!(port = %name, %variant, "constructed WebKit port");
        Self {
            variant,
            name,
            options,
        }
    }
}

impl Port for WebKitPort {
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
    fn version_suffix() {
        let port = WebKitPort::new(VariantId::Mac, "mac-snowleopard".into(), OptionsBag::default());
        assert_eq!(port.version(), Some("snowleopard"));
        assert_eq!(port.family(), Some(BaseFamily::Mac));
        let port = WebKitPort::new(VariantId::Qt, "qt".into(), OptionsBag::default());
        assert_eq!(port.version(), None);
    }

    #[test]
    fn driver_is_dump_render_tree() {
        let port = WebKitPort::new(VariantId::Win, "win".into(), OptionsBag::default());
        assert_eq!(port.driver_name(), "DumpRenderTree");
    }
}
