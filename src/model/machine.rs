//! Machines: the infrastructure nodes that host units.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{FormattedBase, StatusInfo};

/// An infrastructure node, possibly hosting nested containers.
///
/// Status leaves and containers are filled in by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MachineStatus {
    /// Agent status.
    #[serde(skip_deserializing)]
    pub juju_status: StatusInfo,

    pub hostname: String,
    pub dns_name: String,
    pub ip_addresses: Vec<String>,
    pub instance_id: String,
    pub display_name: String,

    #[serde(skip_deserializing)]
    pub machine_status: StatusInfo,

    #[serde(skip_deserializing)]
    pub modification_status: StatusInfo,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<FormattedBase>,

    /// Juju 2.9 only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,

    pub network_interfaces: BTreeMap<String, NetworkInterface>,

    #[serde(skip_deserializing)]
    pub containers: BTreeMap<String, MachineStatus>,

    pub constraints: String,
    pub hardware: String,
    pub controller_member_status: String,
    pub ha_primary: bool,
    pub lxd_profiles: BTreeMap<String, LxdProfileContents>,
}

impl MachineStatus {
    /// The record produced when Juju reports a `status-error` for a machine.
    pub fn failed(message: &str) -> Self {
        Self {
            juju_status: StatusInfo::failed(message),
            machine_status: StatusInfo::failed(message),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkInterface {
    pub ip_addresses: Vec<String>,
    pub mac_address: String,
    pub is_up: bool,

    #[serde(default)]
    pub gateway: String,
    #[serde(default)]
    pub dns_nameservers: Vec<String>,
    #[serde(default)]
    pub space: String,
}

/// An LXD profile applied to a machine by a charm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LxdProfileContents {
    pub config: BTreeMap<String, String>,
    pub description: String,
    pub devices: BTreeMap<String, BTreeMap<String, String>>,
}
