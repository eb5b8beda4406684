//! Configuration loading
//!
//! Loads [`travelgate_domain::Config`] from the environment or from files.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
