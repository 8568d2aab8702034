//! Storage instances, filesystems, and volumes.
//!
//! None of these carry `status-error` markers, so serde decodes them directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::EntityStatus;

/// The `storage` section of a status document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombinedStorage {
    pub storage: BTreeMap<String, StorageInfo>,
    pub filesystems: BTreeMap<String, FilesystemInfo>,
    pub volumes: BTreeMap<String, VolumeInfo>,
}

impl CombinedStorage {
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty() && self.filesystems.is_empty() && self.volumes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageInfo {
    pub kind: String,
    pub status: EntityStatus,
    pub persistent: bool,

    #[serde(default)]
    pub life: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<StorageAttachments>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageAttachments {
    pub units: BTreeMap<String, UnitStorageAttachment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitStorageAttachment {
    pub machine: String,
    pub location: String,
    pub life: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FilesystemInfo {
    /// Size in MiB.
    pub size: u64,

    #[serde(default)]
    pub provider_id: String,
    #[serde(default)]
    pub volume: String,
    #[serde(default)]
    pub storage: String,
    #[serde(default)]
    pub attachments: FilesystemAttachments,
    #[serde(default)]
    pub pool: String,
    #[serde(default)]
    pub life: String,
    #[serde(default)]
    pub status: EntityStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesystemAttachments {
    pub machines: BTreeMap<String, FilesystemAttachment>,
    pub containers: BTreeMap<String, FilesystemAttachment>,
    pub units: BTreeMap<String, UnitStorageAttachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FilesystemAttachment {
    pub mount_point: String,
    pub read_only: bool,

    #[serde(default)]
    pub life: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VolumeInfo {
    /// Size in MiB.
    pub size: u64,
    pub persistent: bool,

    #[serde(default)]
    pub provider_id: String,
    #[serde(default)]
    pub storage: String,
    #[serde(default)]
    pub attachments: VolumeAttachments,
    #[serde(default)]
    pub pool: String,
    #[serde(default)]
    pub hardware_id: String,
    #[serde(default)]
    pub wwn: String,
    #[serde(default)]
    pub life: String,
    #[serde(default)]
    pub status: EntityStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeAttachments {
    pub machines: BTreeMap<String, VolumeAttachment>,
    pub containers: BTreeMap<String, VolumeAttachment>,
    pub units: BTreeMap<String, UnitStorageAttachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VolumeAttachment {
    pub read_only: bool,

    #[serde(default)]
    pub device: String,
    #[serde(default)]
    pub device_link: String,
    #[serde(default)]
    pub bus_address: String,
    #[serde(default)]
    pub life: String,
}
