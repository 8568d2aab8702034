//! Mooring: a typed client for the Juju CLI.
//!
//! - [`decode`] turns `juju status --format json` into a [`model::Status`] snapshot.
//! - [`predicates`] answers "is everything active?" style questions about a snapshot.
//! - [`wait`] polls a model until one of those questions holds.
//! - [`juju`] runs the CLI itself.

pub mod config;
pub mod decode;
pub mod juju;
pub mod model;
pub mod predicates;
pub mod wait;
