//! Port resolution for the layout-test harness.
//!
//! A harness asks for "the port" and gets back exactly one concrete
//! implementation from a closed set:
//! - **Explicit:** a port name such as `mac`, `chromium-win-xp` or `dryrun-test`
//! - **Inferred:** the host platform, plus an optional Chromium flavor in the options
//!
//! The explicit name always wins. See [`factory::resolve`].

pub mod error;
pub mod factory;
pub mod options;
pub mod platform;
pub mod port;
pub mod variant;

pub use error::{PortError, Result};
pub use factory::{resolve, PortFactory};
pub use options::{Flavor, OptionsBag, SubFamily};
pub use platform::{BaseFamily, FixedPlatform, HostPlatform, PlatformId, PlatformProbe};
pub use port::{Port, PortHandle};
pub use variant::VariantId;
