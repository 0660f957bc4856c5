//! `ltport platform` — what the host looks like to the resolver.

use anyhow::Result;

use ltport::{BaseFamily, HostPlatform, OptionsBag, PlatformId, PlatformProbe, PortFactory};

/// Describe `platform` and the ports the resolver would infer for it.
pub fn report(platform: &PlatformId) -> String {
    let factory = PortFactory::new(HostPlatform);
    let mut out = format!("Platform: {platform}\n");
    let Some(family) = BaseFamily::classify(platform) else {
        out.push_str("Family:   unsupported\n");
        out.push_str("No port can be inferred here; pass --port to 'ltport resolve'.\n");
        return out;
    };
    out.push_str(&format!("Family:   {family}\n"));
    for (label, options) in [("Default: ", None), ("Chromium:", Some(OptionsBag::chromium()))] {
        match factory.select(None, Some(platform), options.as_ref()) {
            Ok(variant) => out.push_str(&format!("{label} {variant}\n")),
            Err(e) => out.push_str(&format!("{label} {e}\n")),
        }
    }
    out
}

/// Print the host platform and the ports it would resolve to.
pub fn run() -> Result<()> {
    print!("{}", report(&HostPlatform.current_platform()));
    Ok(())
}
