//! Applications and their units.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    FormattedBase, StatusInfo,
    status_info::{ACTIVE, BLOCKED, ERROR, MAINTENANCE, WAITING},
};

/// Charm field value used for an application whose status could not be computed.
pub const FAILED_CHARM: &str = "<failed>";

/// One deployed application.
///
/// The serde field table covers the flat fields only. Status leaves,
/// relations, units, and the dialect-specific `series`/`os` fields are
/// filled in by the decoder, so build these through [`crate::decode`]
/// rather than deserializing them directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppStatus {
    pub charm: String,
    pub charm_origin: String,
    pub charm_name: String,
    pub charm_rev: i64,
    pub exposed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<FormattedBase>,

    /// Juju 2.9 only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,

    /// Juju 2.9 only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,

    #[serde(default)]
    pub charm_channel: String,
    #[serde(default)]
    pub charm_version: String,
    #[serde(default)]
    pub charm_profile: String,
    #[serde(default)]
    pub can_upgrade_to: String,
    #[serde(default)]
    pub scale: u32,
    #[serde(default)]
    pub provider_id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub life: String,

    #[serde(rename = "application-status", default, skip_deserializing)]
    pub app_status: StatusInfo,

    /// Endpoint name to the applications related over it.
    #[serde(default, skip_deserializing)]
    pub relations: BTreeMap<String, Vec<AppStatusRelation>>,

    #[serde(default)]
    pub subordinate_to: Vec<String>,

    #[serde(default, skip_deserializing)]
    pub units: BTreeMap<String, UnitStatus>,

    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub endpoint_bindings: BTreeMap<String, String>,
}

impl AppStatus {
    /// The record produced when Juju reports a `status-error` for an application.
    pub fn failed(message: &str) -> Self {
        Self {
            charm: FAILED_CHARM.to_string(),
            charm_origin: FAILED_CHARM.to_string(),
            charm_name: FAILED_CHARM.to_string(),
            charm_rev: -1,
            exposed: false,
            base: None,
            series: None,
            os: None,
            charm_channel: String::new(),
            charm_version: String::new(),
            charm_profile: String::new(),
            can_upgrade_to: String::new(),
            scale: 0,
            provider_id: String::new(),
            address: String::new(),
            life: String::new(),
            app_status: StatusInfo::failed(message),
            relations: BTreeMap::new(),
            subordinate_to: Vec::new(),
            units: BTreeMap::new(),
            version: String::new(),
            endpoint_bindings: BTreeMap::new(),
        }
    }

    /// Whether the application status is "active".
    pub fn is_active(&self) -> bool {
        self.app_status.is(ACTIVE)
    }

    /// Whether the application status is "blocked".
    pub fn is_blocked(&self) -> bool {
        self.app_status.is(BLOCKED)
    }

    /// Whether the application status is "error".
    pub fn is_error(&self) -> bool {
        self.app_status.is(ERROR)
    }

    /// Whether the application status is "maintenance".
    pub fn is_maintenance(&self) -> bool {
        self.app_status.is(MAINTENANCE)
    }

    /// Whether the application status is "waiting".
    pub fn is_waiting(&self) -> bool {
        self.app_status.is(WAITING)
    }
}

/// One end of a relation, seen from the owning application.
///
/// Juju 2.9 only names the related application; `interface` and `scope`
/// stay empty for documents in that dialect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AppStatusRelation {
    #[serde(rename = "related-application")]
    pub related_app: String,
    pub interface: String,
    pub scope: String,
}

/// One running instance of an application.
///
/// As with [`AppStatus`], the status leaves and subordinates are owned by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct UnitStatus {
    #[serde(skip_deserializing)]
    pub workload_status: StatusInfo,

    /// Agent status.
    #[serde(skip_deserializing)]
    pub juju_status: StatusInfo,

    pub leader: bool,
    pub upgrading_from: String,
    pub machine: String,
    pub open_ports: Vec<String>,
    pub public_address: String,
    pub address: String,
    pub provider_id: String,

    #[serde(skip_deserializing)]
    pub subordinates: BTreeMap<String, UnitStatus>,
}

impl UnitStatus {
    /// The record produced when Juju reports a `status-error` for a unit.
    pub fn failed(message: &str) -> Self {
        Self {
            workload_status: StatusInfo::failed(message),
            juju_status: StatusInfo::failed(message),
            ..Self::default()
        }
    }

    /// Whether the workload status is "active".
    pub fn is_active(&self) -> bool {
        self.workload_status.is(ACTIVE)
    }

    /// Whether the workload status is "blocked".
    pub fn is_blocked(&self) -> bool {
        self.workload_status.is(BLOCKED)
    }

    /// Whether the workload status is "error".
    pub fn is_error(&self) -> bool {
        self.workload_status.is(ERROR)
    }

    /// Whether the workload status is "maintenance".
    pub fn is_maintenance(&self) -> bool {
        self.workload_status.is(MAINTENANCE)
    }

    /// Whether the workload status is "waiting".
    pub fn is_waiting(&self) -> bool {
        self.workload_status.is(WAITING)
    }
}
