//! Runtime options handed to the resolver and on to the constructed port.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Build flavor layered on top of a base platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flavor {
    Chromium,
}

/// Which sibling of a base family to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubFamily {
    /// The engine-only port.
    #[default]
    Base,
    /// The vendor build layered on the engine port.
    Vendor,
}

/// Options bag. Every field is optional and absence is meaningful.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsBag {
    /// Whether pixel tests are enabled. Not consulted during resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_tests: Option<bool>,
    /// Vendor build marker. Its presence alone selects the vendor sub-family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<Flavor>,
    /// Fields the resolver does not know about, passed through untouched.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl OptionsBag {
    /// Options for a Chromium build.
    pub fn chromium() -> Self {
        Self {
            flavor: Some(Flavor::Chromium),
            ..Self::default()
        }
    }

    /// Set `pixel_tests`.
    pub fn with_pixel_tests(mut self, enabled: bool) -> Self {
        self.pixel_tests = Some(enabled);
        self
    }

    /// Insert an opaque field.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// The sub-family these options ask for.
    pub fn sub_family(&self) -> SubFamily {
        match self.flavor {
            Some(_) => SubFamily::Vendor,
            None => SubFamily::Base,
        }
    }

    /// Overlay `other` on top of `self`, field by field.
    pub fn merge(mut self, other: OptionsBag) -> Self {
        if other.pixel_tests.is_some() {
            self.pixel_tests = other.pixel_tests;
        }
        if other.flavor.is_some() {
            self.flavor = other.flavor;
        }
        self.extra.extend(other.extra);
        self
    }
}
