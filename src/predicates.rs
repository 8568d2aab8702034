//! Aggregate checks over a [`Status`] snapshot.
//!
//! `all_*` holds when every selected application and each of its units
//! reports the keyword; `any_*` holds when at least one of them does.
//! An application's units include subordinate units attached elsewhere,
//! as returned by [`Status::units`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::model::{ACTIVE, BLOCKED, ERROR, IDLE, MAINTENANCE, Status, WAITING};

/// Which applications a predicate looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Apps {
    /// Every application in the snapshot.
    #[default]
    All,

    /// The named applications only.
    Only(Vec<String>),
}

impl Apps {
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only(names.into_iter().map(Into::into).collect())
    }

    fn names<'a>(&'a self, status: &'a Status) -> Vec<&'a str> {
        match self {
            Self::All => status.apps.keys().map(String::as_str).collect(),
            Self::Only(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

/// A selection that couldn't be built from user input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("apps must be a list of application names, not the string {0:?}")]
    BareString(String),

    #[error("apps must be a list of application names, got {0}")]
    NotAList(&'static str),

    #[error("application names must be strings, got {0}")]
    NotAName(&'static str),
}

impl TryFrom<&Value> for Apps {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::All),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(name) => Ok(name.clone()),
                    other => Err(ValidationError::NotAName(kind(other))),
                })
                .collect::<Result<_, _>>()
                .map(Self::Only),
            Value::String(name) => Err(ValidationError::BareString(name.clone())),
            other => Err(ValidationError::NotAList(kind(other))),
        }
    }
}

impl<'de> Deserialize<'de> for Apps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(&value).map_err(serde::de::Error::custom)
    }
}

/// `null` for every application, otherwise the list of names.
impl Serialize for Apps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_none(),
            Self::Only(names) => names.serialize(serializer),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Workload checks ──

fn all_are(status: &Status, apps: &Apps, keyword: &str) -> bool {
    apps.names(status).into_iter().all(|name| {
        status.apps.get(name).is_some_and(|app| {
            app.app_status.is(keyword)
                && status
                    .units(name)
                    .all(|(_, unit)| unit.workload_status.is(keyword))
        })
    })
}

fn any_is(status: &Status, apps: &Apps, keyword: &str) -> bool {
    apps.names(status).into_iter().any(|name| {
        status.apps.get(name).is_some_and(|app| {
            app.app_status.is(keyword)
                || status
                    .units(name)
                    .any(|(_, unit)| unit.workload_status.is(keyword))
        })
    })
}

pub fn all_active(status: &Status, apps: &Apps) -> bool {
    all_are(status, apps, ACTIVE)
}

pub fn all_blocked(status: &Status, apps: &Apps) -> bool {
    all_are(status, apps, BLOCKED)
}

pub fn all_error(status: &Status, apps: &Apps) -> bool {
    all_are(status, apps, ERROR)
}

pub fn all_maintenance(status: &Status, apps: &Apps) -> bool {
    all_are(status, apps, MAINTENANCE)
}

pub fn all_waiting(status: &Status, apps: &Apps) -> bool {
    all_are(status, apps, WAITING)
}

pub fn any_active(status: &Status, apps: &Apps) -> bool {
    any_is(status, apps, ACTIVE)
}

pub fn any_blocked(status: &Status, apps: &Apps) -> bool {
    any_is(status, apps, BLOCKED)
}

pub fn any_error(status: &Status, apps: &Apps) -> bool {
    any_is(status, apps, ERROR)
}

pub fn any_maintenance(status: &Status, apps: &Apps) -> bool {
    any_is(status, apps, MAINTENANCE)
}

pub fn any_waiting(status: &Status, apps: &Apps) -> bool {
    any_is(status, apps, WAITING)
}

/// Every selected unit's agent is idle, i.e. no hooks are running.
///
/// Looks at units only; an application with no units passes.
/// A named application missing from the snapshot fails.
pub fn all_agents_idle(status: &Status, apps: &Apps) -> bool {
    apps.names(status).into_iter().all(|name| {
        status.apps.contains_key(name)
            && status
                .units(name)
                .all(|(_, unit)| unit.juju_status.is(IDLE))
    })
}
