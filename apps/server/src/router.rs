use axum::Router;
use changelog::server::ApiState;
use tower_http::trace::TraceLayer;
use utoipa_scalar::{Scalar, Servable};

pub(super) const DOCS_PATH: &str = "/docs";

pub(super) fn init(state: ApiState) -> Router {
    let (routes, api_doc) = changelog::server::router::build(state);

    Router::new()
        .merge(routes)
        .merge(Scalar::with_url(DOCS_PATH, api_doc))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use changelog::domain::config::ApiConfig;
    use tower::ServiceExt;

    fn app() -> Router {
        init(changelog::init(&ApiConfig::default()).unwrap())
    }

    #[tokio::test]
    async fn docs_are_served() {
        let response = app().oneshot(Request::get(DOCS_PATH).body(Body::empty()).unwrap()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn api_routes_are_mounted() {
        let response =
            app().oneshot(Request::get("/api/v1/access/roles").body(Body::empty()).unwrap()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let missing = app().oneshot(Request::get("/api/v2/roles").body(Body::empty()).unwrap()).await.unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
