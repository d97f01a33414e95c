//! Reconciliation engine for the managed container

pub mod lifecycle;
pub mod mounts;
pub mod probe;
pub mod reconciler;

pub use lifecycle::{build, clean, rebuild, stop};
pub use mounts::{MountSpec, RawMount, DEFAULT_CONTAINER_PATH};
pub use probe::{image_exists, probe, ContainerState};
pub use reconciler::reconcile;
