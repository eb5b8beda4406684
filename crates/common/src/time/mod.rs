//! Time utilities
//!
//! - **[`timer`]**: cancellable one-shot timers and a single-slot scoped timer

pub mod timer;

pub use timer::{timeout, ScopedTimer, TimerHandle};
