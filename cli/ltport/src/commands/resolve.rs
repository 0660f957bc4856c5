//! `ltport resolve` — resolve a port and describe it.

use anyhow::{bail, Context, Result};
use serde::Serialize;

use ltport::{BaseFamily, HostPlatform, OptionsBag, PlatformId, PlatformProbe, Port, PortFactory};

/// How to print the resolved port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Human,
    Json,
}

impl Format {
    pub fn parse(s: Option<&str>) -> Result<Self> {
        match s {
            None | Some("human") => Ok(Self::Human),
            Some("json") => Ok(Self::Json),
            Some(other) => bail!("unknown format: '{other}' (expected human or json)"),
        }
    }
}

/// Serializable summary of a port.
#[derive(Debug, Serialize)]
pub struct PortSummary<'a> {
    pub name: &'a str,
    pub variant: ltport::VariantId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<BaseFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run_of: Option<&'a str>,
    pub driver: &'a str,
    pub baseline_search_path: Vec<String>,
    pub pixel_tests: bool,
    pub options: &'a OptionsBag,
}

impl<'a> PortSummary<'a> {
    pub fn of(port: &'a dyn Port) -> Self {
        Self {
            name: port.name(),
            variant: port.variant(),
            version: port.version(),
            family: port.family(),
            dry_run_of: port.inner().map(|inner| inner.name()),
            driver: port.driver_name(),
            baseline_search_path: port.baseline_search_path(),
            pixel_tests: port.pixel_tests(),
            options: port.options(),
        }
    }
}

/// Resolve with `factory` and render the result.
pub fn render<P: PlatformProbe>(
    factory: &PortFactory<P>,
    port_name: Option<&str>,
    platform: Option<&PlatformId>,
    options: OptionsBag,
    format: Format,
) -> Result<String> {
    let port = factory
        .resolve(port_name, platform, Some(options))
        .context("resolving port")?;
    tracing::info!(port = port.name(), variant = %port.variant(), "resolved port");

    let summary = PortSummary::of(port.as_ref());
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(&summary)?),
        Format::Human => {
            let mut out = String::new();
            out.push_str(&format!("Port:     {}\n", summary.name));
            out.push_str(&format!("Variant:  {}\n", summary.variant));
            if let Some(inner) = summary.dry_run_of {
                out.push_str(&format!("Dry run:  {inner}\n"));
            }
            if let Some(version) = summary.version {
                out.push_str(&format!("Version:  {version}\n"));
            }
            if let Some(family) = summary.family {
                out.push_str(&format!("Family:   {family}\n"));
            }
            out.push_str(&format!("Driver:   {}\n", summary.driver));
            out.push_str(&format!("Pixel:    {}\n", summary.pixel_tests));
            out.push_str("Baselines:\n");
            for dir in &summary.baseline_search_path {
                out.push_str(&format!("  {dir}\n"));
            }
            Ok(out)
        }
    }
}

/// Run `ltport resolve` against the host platform.
pub fn run(
    port_name: Option<&str>,
    platform: Option<&PlatformId>,
    options: OptionsBag,
    format: Format,
) -> Result<()> {
    let factory = PortFactory::new(HostPlatform);
    print!("{}", render(&factory, port_name, platform, options, format)?);
    if format == Format::Json {
        println!();
    }
    Ok(())
}
