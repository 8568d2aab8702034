//! Typed view of `juju status --format json`.
//!
//! These types hold a decoded snapshot: the model, its machines and
//! applications, cross-model offers and consumers, and storage.
//! Build them with [`crate::decode`]; they are immutable values once built.

mod application;
mod base;
mod machine;
mod remote;
mod status;
mod status_info;
mod storage;

pub use application::{AppStatus, AppStatusRelation, FAILED_CHARM, UnitStatus};
pub use base::FormattedBase;
pub use machine::{LxdProfileContents, MachineStatus, NetworkInterface};
pub use remote::{OfferStatus, RemoteAppStatus, RemoteEndpoint};
pub use status::{ControllerStatus, ModelStatus, Status};
pub use status_info::{
    ACTIVE, BLOCKED, ERROR, EntityStatus, FAILED, IDLE, MAINTENANCE, StatusInfo, WAITING,
};
pub use storage::{
    CombinedStorage, FilesystemAttachment, FilesystemAttachments, FilesystemInfo,
    StorageAttachments, StorageInfo, UnitStorageAttachment, VolumeAttachment, VolumeAttachments,
    VolumeInfo,
};
