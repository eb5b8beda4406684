//! Testing utilities and helpers
//!
//! - **[`async_utils`]**: the `assert_eventually_async!` macro for
//!   components that publish results from background tasks

pub mod async_utils;
