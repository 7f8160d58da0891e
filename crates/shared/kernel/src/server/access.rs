use super::{ApiError, ApiJson, ApiQuery};
use crate::security::ScopeGuard;
use axum::Json;
use axum::extract::{Path, State};
use changelog_derive::api_handler;
use changelog_domain::access::{PermissionCheck, PermissionCheckRequest, RoleInfo, ScopeInfo};
use changelog_domain::config::ApiConfig;
use changelog_domain::constants::ACCESS_TAG;
use changelog_domain::response::{ApiResponse, PageQuery, PaginatedResponse};
use changelog_domain::role::Role;
use changelog_domain::scope::ApiKeyScope;
use strum::IntoEnumIterator;
use tracing::debug;

#[api_handler(
    get,
    path = "/roles",
    responses((status = OK, description = "Roles ordered from the highest rank", body = ApiResponse<Vec<RoleInfo>>)),
    tag = ACCESS_TAG,
)]
pub(super) async fn list_roles() -> Json<ApiResponse<Vec<RoleInfo>>> {
    Json(ApiResponse::ok(Role::ALL.into_iter().map(RoleInfo::from).collect()))
}

#[api_handler(
    get,
    path = "/scopes",
    params(PageQuery),
    responses(
        (status = OK, description = "One page of the scope catalogue", body = PaginatedResponse<ScopeInfo>),
        (status = BAD_REQUEST, description = "Unparsable paging parameters"),
    ),
    tag = ACCESS_TAG,
)]
pub(super) async fn list_scopes(
    State(config): State<ApiConfig>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Json<PaginatedResponse<ScopeInfo>>, ApiError> {
    let request = query.into_request(config.api.default_page_size, config.api.max_page_size);
    let catalogue: Vec<ScopeInfo> = ApiKeyScope::iter().map(ScopeInfo::from).collect();
    let total = u64::try_from(catalogue.len()).unwrap_or(u64::MAX);

    debug!(page = request.page, page_size = request.page_size, "Listing scopes");
    let page = PaginatedResponse::for_request(request.slice(&catalogue).to_vec(), request, total)?;
    Ok(Json(page))
}

#[api_handler(
    get,
    path = "/scopes/{scope}",
    params(("scope" = String, Path, description = "Scope string, e.g. `changelogs:read`")),
    responses(
        (status = OK, description = "The scope and its parts", body = ApiResponse<ScopeInfo>),
        (status = BAD_REQUEST, description = "Not a known scope"),
    ),
    tag = ACCESS_TAG,
)]
pub(super) async fn get_scope(Path(scope): Path<String>) -> Result<Json<ApiResponse<ScopeInfo>>, ApiError> {
    let scope = ScopeGuard::verify(&scope)?;
    Ok(Json(ApiResponse::ok(scope.into())))
}

#[api_handler(
    post,
    path = "/check",
    request_body = PermissionCheckRequest,
    responses(
        (status = OK, description = "Whether the actor role covers the required role", body = ApiResponse<PermissionCheck>),
        (status = BAD_REQUEST, description = "Malformed body or unknown role"),
    ),
    tag = ACCESS_TAG,
)]
pub(super) async fn check_permission(
    ApiJson(request): ApiJson<PermissionCheckRequest>,
) -> Json<ApiResponse<PermissionCheck>> {
    Json(ApiResponse::ok(request.into()))
}
