//! Status leaves: the "current / message / since" records repeated throughout the tree.

use serde::{Deserialize, Serialize};

/// Status keyword Juju reports for a healthy workload.
pub const ACTIVE: &str = "active";
/// Workload needs operator intervention.
pub const BLOCKED: &str = "blocked";
/// Workload or hook failed.
pub const ERROR: &str = "error";
/// Workload is doing setup or upgrade work.
pub const MAINTENANCE: &str = "maintenance";
/// Workload is waiting on something outside its control.
pub const WAITING: &str = "waiting";
/// Agent has no hook running.
pub const IDLE: &str = "idle";
/// Marker for an entity whose status Juju could not compute.
pub const FAILED: &str = "failed";

/// Status of an application, unit, machine, or model.
///
/// Every field is optional on the wire and defaults to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StatusInfo {
    pub current: String,
    pub message: String,
    pub reason: String,
    pub since: String,
    pub version: String,
    pub life: String,
}

impl StatusInfo {
    /// The record produced when Juju reports a `status-error` instead of a status.
    pub fn failed(message: &str) -> Self {
        Self {
            current: FAILED.to_string(),
            message: message.to_string(),
            ..Self::default()
        }
    }

    /// Whether `current` equals the given keyword.
    pub fn is(&self, keyword: &str) -> bool {
        self.current == keyword
    }
}

/// Status of a storage instance, filesystem, or volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EntityStatus {
    pub current: String,
    pub message: String,
    pub since: String,
}
