//! Operating system base of an application or machine.

use serde::{Deserialize, Serialize};

/// An OS base such as `ubuntu@22.04`.
///
/// Only present in Juju 3 documents; Juju 2.9 reports a series instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedBase {
    pub name: String,
    pub channel: String,
}

impl std::fmt::Display for FormattedBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.channel)
    }
}
