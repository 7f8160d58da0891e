use super::state::ApiState;
use super::{access, health};
use crate::openapi;
use axum::Router;
use changelog_domain::constants::API_PREFIX;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[derive(OpenApi)]
#[openapi(
    info(title = "Changelog Hub API", description = "Roles, API-key scopes and DTO contracts"),
    tags(
        (name = "System", description = "Operational endpoints"),
        (name = "Access", description = "Role hierarchy and API-key scopes"),
    )
)]
struct ApiDoc;

pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    OpenApiRouter::<S>::new().routes(routes!(health::health_handler))
}

pub fn access_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(access::list_roles))
        .routes(routes!(access::list_scopes))
        .routes(routes!(access::get_scope))
        .routes(routes!(access::check_permission))
}

/// Builds the routed service and its `OpenAPI` document, with every DTO schema merged
/// into the document's components.
pub fn build(state: ApiState) -> (Router, utoipa::openapi::OpenApi) {
    health::start_clock();

    let (router, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(system_router())
        .nest(&format!("{API_PREFIX}/access"), access_router())
        .with_state(state)
        .split_for_parts();

    openapi::register(&mut api);
    (router, api)
}
