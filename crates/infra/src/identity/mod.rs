//! Identity provider integration

pub mod claims;
pub mod keycloak;

pub use claims::{RoleSet, TokenClaims};
pub use keycloak::KeycloakIdentity;
