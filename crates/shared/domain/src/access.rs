//! DTOs describing the access model itself: role ranks, scope catalogue and permission
//! checks.

use crate::role::Role;
use crate::scope::{ApiKeyScope, ScopeAction, ScopeResource};
use changelog_derive::api_model;

#[api_model]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RoleInfo {
    pub role: Role,
    pub rank: u16,
}

impl From<Role> for RoleInfo {
    fn from(role: Role) -> Self {
        Self { role, rank: role.rank() }
    }
}

#[api_model]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ScopeInfo {
    pub scope: ApiKeyScope,
    pub resource: ScopeResource,
    pub action: ScopeAction,
}

impl From<ApiKeyScope> for ScopeInfo {
    fn from(scope: ApiKeyScope) -> Self {
        Self { scope, resource: scope.resource(), action: scope.action() }
    }
}

#[api_model]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PermissionCheckRequest {
    pub actor_role: Role,
    pub required_role: Role,
}

#[api_model]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PermissionCheck {
    pub actor_role: Role,
    pub required_role: Role,
    pub granted: bool,
}

impl From<PermissionCheckRequest> for PermissionCheck {
    fn from(request: PermissionCheckRequest) -> Self {
        Self {
            actor_role: request.actor_role,
            required_role: request.required_role,
            granted: request.actor_role.has_permission(request.required_role),
        }
    }
}
