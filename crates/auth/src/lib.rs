//! `stockyard-auth`: roles, capabilities and the permission predicate.
//!
//! Authentication itself (sessions, tokens) lives outside this crate.

pub mod authorize;
pub mod input;
pub mod permissions;
pub mod profile;
pub mod roles;

pub use authorize::{
    AuthzError, Grant, PermissionPolicy, StaticRolePolicy, authorize, authorize_with, has_permission, role_grant,
};
pub use input::{CreateProfileInput, UpdateProfileInput};
pub use permissions::Capability;
pub use profile::{NewProfile, Profile, ProfileChanges};
pub use roles::Role;
