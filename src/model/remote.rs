//! Cross-model pieces: offers made by this model and applications consumed from others.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{StatusInfo, application::FAILED_CHARM};

/// An endpoint exposed across models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEndpoint {
    pub interface: String,
    pub role: String,
}

/// An application endpoint offered to other models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OfferStatus {
    #[serde(rename = "application")]
    pub app: String,
    pub endpoints: BTreeMap<String, RemoteEndpoint>,

    #[serde(default)]
    pub charm: String,
    #[serde(default)]
    pub total_connected_count: u32,
    #[serde(default)]
    pub active_connected_count: u32,
}

impl OfferStatus {
    /// The record produced when Juju reports a `status-error` for an offer.
    ///
    /// Offers have no status leaf, so the error text rides along in `app`.
    pub fn failed(message: &str) -> Self {
        Self {
            app: format!("{FAILED_CHARM} ({message})"),
            endpoints: BTreeMap::new(),
            charm: String::new(),
            total_connected_count: 0,
            active_connected_count: 0,
        }
    }
}

/// An application consumed from another model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RemoteAppStatus {
    pub url: String,

    #[serde(default)]
    pub endpoints: BTreeMap<String, RemoteEndpoint>,
    #[serde(default)]
    pub life: String,

    #[serde(rename = "application-status", default, skip_deserializing)]
    pub app_status: StatusInfo,

    /// Endpoint name to related application names.
    #[serde(default)]
    pub relations: BTreeMap<String, Vec<String>>,
}

impl RemoteAppStatus {
    /// The record produced when Juju reports a `status-error` for a remote application.
    pub fn failed(message: &str) -> Self {
        Self {
            url: FAILED_CHARM.to_string(),
            endpoints: BTreeMap::new(),
            life: String::new(),
            app_status: StatusInfo::failed(message),
            relations: BTreeMap::new(),
        }
    }
}
