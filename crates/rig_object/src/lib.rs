//! # rig_object
//!
//! Spawned-object wrappers for level scripts.
//!
//! A [`RigObject`] owns one host object plus the pose the rig tracks for it:
//! a rotation pivot, an orientation, and a fixed local offset from the pivot
//! to the object. Moves and rotations about arbitrary pivots accumulate in a
//! [`PendingTransform`] and reach the host as one transform write when the
//! object is applied.
//!
//! [`Scene`] manages several objects over one host and reports degenerate
//! input through the host's error channel instead of failing the script.
//!
//! ## Usage
//!
//! ```rust
//! use rig_host::{MemoryHost, Prefab};
//! use rig_math::Vec3;
//! use rig_object::{Scene, SceneConfig, SpawnSpec};
//!
//! let mut scene = Scene::new(MemoryHost::new(), SceneConfig::new("doors"));
//!
//! // A door whose hinge sits one unit from its centre.
//! let door = scene
//!     .spawn(SpawnSpec::new(Prefab::common("Door"), Vec3::ZERO).with_offset(Vec3::X))
//!     .unwrap();
//!
//! scene.rotate(door, Vec3::Z, std::f32::consts::FRAC_PI_2, None).unwrap();
//! assert_eq!(scene.apply_all().unwrap(), 1);
//! ```

pub mod config;
pub mod error;
pub mod object;
pub mod pending;
pub mod scene;
pub mod spawn;

pub use config::SceneConfig;
pub use error::RigError;
pub use object::RigObject;
pub use pending::PendingTransform;
pub use scene::Scene;
pub use spawn::{Orientation, SpawnSpec};
