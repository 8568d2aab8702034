//! Decoding `juju status --format json` into a [`Status`] snapshot.
//!
//! Flat fields go through the serde field table on each model type.
//! This module owns everything serde can't express on its own:
//!
//! - `status-error` markers, which become "failed" sentinel records
//!   (see [`AppStatus::failed`] and friends) rather than aborting the decode;
//! - dialect rules for `series`/`os` and relation descriptors;
//! - recursion into subordinate units and nested containers, bounded by
//!   [`MAX_DEPTH`].
//!
//! Every entity with a `status-error` is decoded to its sentinel, always.
//! A warning naming the entity path is logged for each one.

mod dialect;
#[cfg(test)]
pub(crate) mod fixtures;

pub use dialect::Dialect;

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::model::{
    AppStatus, AppStatusRelation, CombinedStorage, ControllerStatus, MachineStatus, ModelStatus,
    OfferStatus, RemoteAppStatus, Status, StatusInfo, UnitStatus,
};

/// Deepest nesting of subordinate units or containers the decoder follows.
pub const MAX_DEPTH: usize = 64;

/// Key Juju puts in place of an entity's fields when it can't compute its status.
const STATUS_ERROR: &str = "status-error";

/// Errors that can occur while decoding a status document.
///
/// Each variant names the path of the offending entity,
/// e.g. `applications.mysql.units.mysql/0`.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}: expected {expected}")]
    Malformed { path: String, expected: &'static str },

    #[error("{path}: missing required field `{field}`")]
    MissingField { path: String, field: &'static str },

    #[error("{path}: {source}")]
    Field {
        path: String,
        source: serde_json::Error,
    },

    #[error("{path}: nested more than {limit} levels deep")]
    TooDeep { path: String, limit: usize },
}

pub type Result<T> = core::result::Result<T, DecodeError>;

/// Decode a status document in the given dialect.
pub fn decode(document: &Value, dialect: Dialect) -> Result<Status> {
    Decoder { dialect }.status(document)
}

/// Parse and decode a status document.
///
/// When no dialect is given it is detected from `model.version`.
pub fn decode_str(text: &str, dialect: Option<Dialect>) -> Result<Status> {
    let document: Value = serde_json::from_str(text)?;
    let dialect = dialect.unwrap_or_else(|| Dialect::detect(&document));
    decode(&document, dialect)
}

struct Decoder {
    dialect: Dialect,
}

impl Decoder {
    fn status(&self, document: &Value) -> Result<Status> {
        let root = object(document, "document")?;

        let model = self.model(required(root, "model", "document")?)?;

        let machines = entries(
            Some(required(root, "machines", "document")?),
            "machines",
            |value, path| self.machine(value, path, 1),
        )?;

        let apps = entries(
            Some(required(root, "applications", "document")?),
            "applications",
            |value, path| self.app(value, path),
        )?;

        let app_endpoints = entries(
            field(root, "application-endpoints"),
            "application-endpoints",
            |value, path| self.remote_app(value, path),
        )?;

        let offers = entries(field(root, "offers"), "offers", |value, path| {
            self.offer(value, path)
        })?;

        let storage = match field(root, "storage") {
            Some(value) => fields::<CombinedStorage>(value, "storage")?,
            None => CombinedStorage::default(),
        };

        let controller = match field(root, "controller") {
            Some(value) => fields::<ControllerStatus>(value, "controller")?,
            None => ControllerStatus::default(),
        };

        Ok(Status {
            model,
            machines,
            apps,
            app_endpoints,
            offers,
            storage,
            controller,
        })
    }

    fn model(&self, value: &Value) -> Result<ModelStatus> {
        let obj = object(value, "model")?;
        let mut model: ModelStatus = fields(value, "model")?;
        model.model_status = self.status_info(obj, "model-status", "model")?;
        Ok(model)
    }

    fn app(&self, value: &Value, path: &str) -> Result<AppStatus> {
        let obj = object(value, path)?;
        if let Some(message) = status_error(obj) {
            report_failed(path, &message);
            return Ok(AppStatus::failed(&message));
        }

        let mut app: AppStatus = fields(value, path)?;
        if !self.dialect.reads_series() {
            app.series = None;
            app.os = None;
        }
        app.app_status = self.status_info(obj, "application-status", path)?;
        app.relations = self.relations(obj, path)?;
        app.units = entries(
            field(obj, "units"),
            &child(path, "units"),
            |value, path| self.unit(value, path, 1),
        )?;
        Ok(app)
    }

    fn relations(
        &self,
        obj: &Map<String, Value>,
        path: &str,
    ) -> Result<BTreeMap<String, Vec<AppStatusRelation>>> {
        entries(
            field(obj, "relations"),
            &child(path, "relations"),
            |value, path| {
                let peers = value.as_array().ok_or_else(|| DecodeError::Malformed {
                    path: path.to_string(),
                    expected: "an array of relation peers",
                })?;
                peers
                    .iter()
                    .enumerate()
                    .map(|(i, peer)| self.relation(peer, &child(path, &i.to_string())))
                    .collect::<Result<Vec<_>>>()
            },
        )
    }

    fn relation(&self, value: &Value, path: &str) -> Result<AppStatusRelation> {
        match value {
            Value::String(name) if self.dialect.allows_bare_relations() => Ok(AppStatusRelation {
                related_app: name.clone(),
                ..AppStatusRelation::default()
            }),
            _ => fields(value, path),
        }
    }

    fn unit(&self, value: &Value, path: &str, depth: usize) -> Result<UnitStatus> {
        guard_depth(path, depth)?;
        let obj = object(value, path)?;
        if let Some(message) = status_error(obj) {
            report_failed(path, &message);
            return Ok(UnitStatus::failed(&message));
        }

        let mut unit: UnitStatus = fields(value, path)?;
        unit.workload_status = self.status_info(obj, "workload-status", path)?;
        unit.juju_status = self.status_info(obj, "juju-status", path)?;
        unit.subordinates = entries(
            field(obj, "subordinates"),
            &child(path, "subordinates"),
            |value, path| self.unit(value, path, depth + 1),
        )?;
        Ok(unit)
    }

    fn machine(&self, value: &Value, path: &str, depth: usize) -> Result<MachineStatus> {
        guard_depth(path, depth)?;
        let obj = object(value, path)?;
        if let Some(message) = status_error(obj) {
            report_failed(path, &message);
            return Ok(MachineStatus::failed(&message));
        }

        let mut machine: MachineStatus = fields(value, path)?;
        if !self.dialect.reads_series() {
            machine.series = None;
        }
        machine.juju_status = self.status_info(obj, "juju-status", path)?;
        machine.machine_status = self.status_info(obj, "machine-status", path)?;
        machine.modification_status = self.status_info(obj, "modification-status", path)?;
        machine.containers = entries(
            field(obj, "containers"),
            &child(path, "containers"),
            |value, path| self.machine(value, path, depth + 1),
        )?;
        Ok(machine)
    }

    fn offer(&self, value: &Value, path: &str) -> Result<OfferStatus> {
        let obj = object(value, path)?;
        if let Some(message) = status_error(obj) {
            report_failed(path, &message);
            return Ok(OfferStatus::failed(&message));
        }
        fields(value, path)
    }

    fn remote_app(&self, value: &Value, path: &str) -> Result<RemoteAppStatus> {
        let obj = object(value, path)?;
        if let Some(message) = status_error(obj) {
            report_failed(path, &message);
            return Ok(RemoteAppStatus::failed(&message));
        }

        let mut remote: RemoteAppStatus = fields(value, path)?;
        remote.app_status = self.status_info(obj, "application-status", path)?;
        Ok(remote)
    }

    /// Decode an optional status leaf, honoring its own `status-error` marker.
    fn status_info(&self, obj: &Map<String, Value>, key: &str, path: &str) -> Result<StatusInfo> {
        let Some(value) = field(obj, key) else {
            return Ok(StatusInfo::default());
        };
        let path = child(path, key);
        let leaf = object(value, &path)?;
        if let Some(message) = status_error(leaf) {
            report_failed(&path, &message);
            return Ok(StatusInfo::failed(&message));
        }
        fields(value, &path)
    }
}

// ── Helpers ──

/// An optional field; explicit `null` counts as absent.
fn field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|value| !value.is_null())
}

fn required<'a>(
    obj: &'a Map<String, Value>,
    key: &'static str,
    path: &str,
) -> Result<&'a Value> {
    field(obj, key).ok_or_else(|| DecodeError::MissingField {
        path: path.to_string(),
        field: key,
    })
}

fn object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| DecodeError::Malformed {
        path: path.to_string(),
        expected: "an object",
    })
}

/// Run a record's serde field table over a JSON object.
fn fields<T: DeserializeOwned>(value: &Value, path: &str) -> Result<T> {
    T::deserialize(value).map_err(|source| DecodeError::Field {
        path: path.to_string(),
        source,
    })
}

/// Decode every entry of an optional mapping section.
fn entries<T>(
    section: Option<&Value>,
    path: &str,
    mut decode: impl FnMut(&Value, &str) -> Result<T>,
) -> Result<BTreeMap<String, T>> {
    let Some(section) = section else {
        return Ok(BTreeMap::new());
    };
    object(section, path)?
        .iter()
        .map(|(key, value)| Ok((key.clone(), decode(value, &child(path, key))?)))
        .collect()
}

fn status_error(obj: &Map<String, Value>) -> Option<String> {
    obj.get(STATUS_ERROR).map(|value| match value {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    })
}

fn report_failed(path: &str, message: &str) {
    tracing::warn!(path, error = message, "status-error reported; recording as failed");
}

fn guard_depth(path: &str, depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(DecodeError::TooDeep {
            path: path.to_string(),
            limit: MAX_DEPTH,
        });
    }
    Ok(())
}

fn child(path: &str, key: &str) -> String {
    format!("{path}.{key}")
}
