//! The snapshot root: one decoded `juju status` document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    AppStatus, CombinedStorage, MachineStatus, OfferStatus, RemoteAppStatus, StatusInfo,
    UnitStatus,
};

/// One decoded `juju status --format json` document.
///
/// A value type: two snapshots decoded from equal documents compare equal,
/// whatever order the keys arrived in. Serializing a snapshot produces the
/// wire key names, so the output can be decoded again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Status {
    pub model: ModelStatus,
    pub machines: BTreeMap<String, MachineStatus>,

    #[serde(rename = "applications")]
    pub apps: BTreeMap<String, AppStatus>,

    /// Applications consumed from other models.
    #[serde(
        rename = "application-endpoints",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub app_endpoints: BTreeMap<String, RemoteAppStatus>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub offers: BTreeMap<String, OfferStatus>,

    #[serde(skip_serializing_if = "CombinedStorage::is_empty")]
    pub storage: CombinedStorage,

    pub controller: ControllerStatus,
}

impl Status {
    /// Units of the named application.
    ///
    /// A subordinate application has no units of its own in the document;
    /// its units live under the principal units they are attached to, so
    /// they are gathered from there. Unknown applications yield nothing.
    pub fn units<'a>(
        &'a self,
        app: &str,
    ) -> impl Iterator<Item = (&'a String, &'a UnitStatus)> + use<'a> {
        let app_status = self.apps.get(app);
        let prefix = format!("{app}/");

        let own = app_status
            .filter(|a| a.subordinate_to.is_empty())
            .into_iter()
            .flat_map(|a| &a.units);
        let attached = app_status
            .into_iter()
            .flat_map(|a| &a.subordinate_to)
            .filter_map(|principal| self.apps.get(principal))
            .flat_map(|principal| principal.units.values())
            .flat_map(|unit| &unit.subordinates)
            .filter(move |(name, _)| name.starts_with(&prefix));

        own.chain(attached)
    }
}

/// The `model` section.
///
/// `model_status` is filled in by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ModelStatus {
    pub name: String,
    #[serde(rename = "type")]
    pub model_type: String,
    pub controller: String,
    pub cloud: String,
    pub version: String,

    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub upgrade_available: String,

    #[serde(default, skip_deserializing)]
    pub model_status: StatusInfo,
}

/// The `controller` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerStatus {
    pub timestamp: String,
}
