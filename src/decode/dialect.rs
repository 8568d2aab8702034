//! Wire-format dialects of `juju status --format json`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which Juju release family produced a status document.
///
/// The two families disagree on a handful of fields: 2.9 reports `series`
/// (and `os` for applications) where 3.x reports a `base`, and 2.9 lists
/// related applications by name where 3.x gives a descriptor object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// Juju 2.9.
    Juju2,

    /// Juju 3.x.
    #[default]
    Juju3,
}

impl Dialect {
    /// Dialect for a Juju version string such as `3.6.8` or `2.9.52-ubuntu-amd64`.
    ///
    /// Anything that isn't a 2.x version is treated as the current format.
    pub fn from_version(version: &str) -> Self {
        match version.trim().split('.').next() {
            Some("2") => Self::Juju2,
            _ => Self::Juju3,
        }
    }

    /// Dialect of a status document, from its `model.version` field.
    pub fn detect(document: &Value) -> Self {
        document
            .pointer("/model/version")
            .and_then(Value::as_str)
            .map_or_else(Self::default, Self::from_version)
    }

    /// Whether `series` (and `os`) are part of this dialect.
    pub(super) fn reads_series(self) -> bool {
        matches!(self, Self::Juju2)
    }

    /// Whether relation peers may be given as bare application names.
    pub(super) fn allows_bare_relations(self) -> bool {
        matches!(self, Self::Juju2)
    }
}
