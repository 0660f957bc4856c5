//! Port resolution.
//!
//! An explicit port name always wins. Without one, the platform (given, or
//! read once from the probe) picks a family and the options pick the
//! engine or Chromium sibling:
//!
//! | family  | engine | chromium         |
//! |---------|--------|------------------|
//! | mac     | `mac`  | `chromium-mac`   |
//! | win     | `win`  | `chromium-win`   |
//! | linux   | `gtk`  | `chromium-linux` |
//!
//! The whole choice is made before any port is constructed, so a failed
//! resolution never runs a constructor.

use crate::error::{PortError, Result};
use crate::options::OptionsBag;
use crate::platform::{BaseFamily, HostPlatform, PlatformId, PlatformProbe};
use crate::port::{self, DryRunPort, PortHandle};
use crate::variant::{Selection, VariantId};

/// A fully decided port, not yet constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Blueprint {
    Port { variant: VariantId, name: String },
    DryRun {
        name: String,
        inner: VariantId,
        inner_name: String,
    },
}

impl Blueprint {
    fn from_name(name: &str) -> Result<Self> {
        let unknown = || PortError::UnknownVariant {
            name: name.to_string(),
        };
        match VariantId::lookup(name).ok_or_else(unknown)? {
            Selection::Port(variant) => Ok(Self::Port {
                variant,
                name: name.to_string(),
            }),
            Selection::DryRun(None) => Ok(Self::Port {
                variant: VariantId::DryRun,
                name: name.to_string(),
            }),
            Selection::DryRun(Some(inner_name)) => match VariantId::lookup(inner_name) {
                Some(Selection::Port(inner)) => Ok(Self::DryRun {
                    name: name.to_string(),
                    inner,
                    inner_name: inner_name.to_string(),
                }),
                _ => Err(unknown()),
            },
        }
    }

    fn build(self, options: OptionsBag) -> PortHandle {
        match self {
            Self::Port { variant, name } => port::construct(variant, name, options),
            Self::DryRun {
                name,
                inner,
                inner_name,
            } => {
                let inner = port::construct(inner, inner_name, options);
                Box::new(DryRunPort::new(name, inner))
            }
        }
    }
}

/// Resolves ports against an injected platform probe.
#[derive(Debug, Clone, Default)]
pub struct PortFactory<P = HostPlatform> {
    probe: P,
}

impl<P: PlatformProbe> PortFactory<P> {
    /// A factory that asks `probe` for the platform when none is passed.
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Resolve and construct a port.
    ///
    /// With `port_name`, that port is built and `platform` is ignored;
    /// `options` are still passed to it. Otherwise the platform decides,
    /// and a Chromium `flavor` in `options` selects the Chromium port.
    pub fn resolve(
        &self,
        port_name: Option<&str>,
        platform: Option<&PlatformId>,
        options: Option<OptionsBag>,
    ) -> Result<PortHandle> {
        let blueprint = self.plan(port_name, platform, options.as_ref())?;
        Ok(blueprint.build(options.unwrap_or_default()))
    }

    /// Which port `resolve` would build, without building it.
    pub fn select(
        &self,
        port_name: Option<&str>,
        platform: Option<&PlatformId>,
        options: Option<&OptionsBag>,
    ) -> Result<VariantId> {
        match self.plan(port_name, platform, options)? {
            Blueprint::Port { variant, .. } => Ok(variant),
            Blueprint::DryRun { .. } => Ok(VariantId::DryRun),
        }
    }

    fn plan(
        &self,
        port_name: Option<&str>,
        platform: Option<&PlatformId>,
        options: Option<&OptionsBag>,
    ) -> Result<Blueprint> {
        if let Some(name) = port_name {
            return Blueprint::from_name(name);
        }

        let platform = match platform {
            Some(p) => p.clone(),
            None => self.probe.current_platform(),
        };
        let family = BaseFamily::classify(&platform).ok_or_else(|| PortError::UnknownPlatform {
            platform: platform.to_string(),
        })?;
        let sub_family = options.map(OptionsBag::sub_family).unwrap_or_default();
        let variant = VariantId::for_family(family, sub_family);

        Ok(Blueprint::Port {
            variant,
            name: variant.name().to_string(),
        })
    }
}

/// Resolve a port, reading the host platform if `platform` is `None`.
pub fn resolve(
    port_name: Option<&str>,
    platform: Option<&PlatformId>,
    options: Option<OptionsBag>,
) -> Result<PortHandle> {
    PortFactory::new(HostPlatform).resolve(port_name, platform, options)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::options::SubFamily;

    fn factory_on(platform: PlatformId) -> PortFactory<impl PlatformProbe> {
        PortFactory::new(move || platform.clone())
    }

    #[test]
    fn explicit_name_ignores_platform() {
        let factory = factory_on(PlatformId::Other("plan9".into()));
        let port = factory
            .resolve(Some("qt"), Some(&PlatformId::Darwin), Some(OptionsBag::chromium()))
            .unwrap();
        assert_eq!(port.variant(), VariantId::Qt);
        assert_eq!(port.options().flavor, OptionsBag::chromium().flavor);
    }

    #[test]
    fn explicit_name_never_reads_probe() {
        let reads = Cell::new(0);
        let factory = PortFactory::new(|| {
            reads.set(reads.get() + 1);
            PlatformId::Darwin
        });
        factory.resolve(Some("win"), None, None).unwrap();
        assert_eq!(reads.get(), 0);
    }

    #[test]
    fn probe_read_once_when_platform_missing() {
        let reads = Cell::new(0);
        let factory = PortFactory::new(|| {
            reads.set(reads.get() + 1);
            PlatformId::Cygwin
        });
        let port = factory.resolve(None, None, None).unwrap();
        assert_eq!(port.variant(), VariantId::Win);
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn given_platform_overrides_probe() {
        let factory = factory_on(PlatformId::Win32);
        let port = factory.resolve(None, Some(&PlatformId::Darwin), None).unwrap();
        assert_eq!(port.variant(), VariantId::Mac);
    }

    #[test]
    fn select_matches_resolve() {
        let factory = factory_on(PlatformId::Linux);
        for options in [None, Some(OptionsBag::chromium()), Some(OptionsBag::default())] {
            let selected = factory.select(None, None, options.as_ref()).unwrap();
            let built = factory.resolve(None, None, options).unwrap();
            assert_eq!(selected, built.variant());
        }
    }

    #[test]
    fn known_platform_spelled_as_other_resolves() {
        let factory = factory_on(PlatformId::Other("plan9".into()));
        let port = factory
            .resolve(None, Some(&PlatformId::Other("darwin".into())), None)
            .unwrap();
        assert_eq!(port.variant(), VariantId::Mac);
    }

    #[test]
    fn inferred_port_uses_canonical_name() {
        let factory = factory_on(PlatformId::Darwin);
        let port = factory.resolve(None, None, Some(OptionsBag::chromium())).unwrap();
        assert_eq!(port.name(), "chromium-mac");
    }

    #[test]
    fn unsupported_platform_reports_identifier() {
        let factory = factory_on(PlatformId::Other("sunos5".into()));
        let err = factory.resolve(None, None, None).unwrap_err();
        assert_eq!(
            err,
            PortError::UnknownPlatform {
                platform: "sunos5".into()
            }
        );
        assert_eq!(err.to_string(), "unsupported platform: 'sunos5'");
    }

    #[test]
    fn dryrun_inner_must_exist() {
        let factory = factory_on(PlatformId::Darwin);
        let err = factory.resolve(Some("dryrun-bogus"), None, None).unwrap_err();
        assert_eq!(
            err,
            PortError::UnknownVariant {
                name: "dryrun-bogus".into()
            }
        );
    }

    #[test]
    fn bare_dryrun_wraps_test_port() {
        let factory = factory_on(PlatformId::Other("plan9".into()));
        let port = factory.resolve(Some("dryrun"), None, None).unwrap();
        assert_eq!(port.variant(), VariantId::DryRun);
        assert_eq!(port.driver_name(), "TestDriver");
    }

    #[test]
    fn sub_family_default_is_base() {
        assert_eq!(SubFamily::default(), SubFamily::Base);
    }
}
