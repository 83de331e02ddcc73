//! # rig_host
//!
//! The seam between the rig and the game's scripting host. The host owns
//! spawning, object transforms and error reporting; the rig only calls into
//! it through the [`Host`] trait.
//!
//! This crate provides:
//!
//! - [`Host`] trait — the host calls the rig depends on.
//! - [`ObjectId`] — opaque handle of a spawned host object.
//! - [`Prefab`] / [`SpawnCatalog`] — what can be spawned.
//! - [`HostTransform`] — a position plus host Euler rotation.
//! - [`MemoryHost`] — an in-memory host for tools and tests.

pub mod catalog;
pub mod error;
pub mod handle;
pub mod host;
pub mod memory;

pub use catalog::{Prefab, SpawnCatalog};
pub use error::HostError;
pub use handle::ObjectId;
pub use host::{Host, HostTransform};
pub use memory::{HostObject, MemoryHost};
