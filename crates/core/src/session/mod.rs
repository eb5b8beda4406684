//! Identity session: who is signed in and which roles they hold

pub mod context;
pub mod ports;
pub mod service;

pub use context::{SessionContext, SessionHandle};
pub use ports::IdentityProvider;
pub use service::SessionService;
