//! Axum router assembly.

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as CorsAny, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::errors::ApiError;
use crate::api::handlers::{addresses, health, owners, persons, pets};
use crate::api::state::AppState;

/// Build the application [`Router`] over the given state
///
/// Person and address records cannot be deleted; owners and pets can.
pub fn build(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(CorsAny)
        .allow_methods(CorsAny)
        .allow_headers(CorsAny);

    Router::new()
        .route("/", get(health::root))
        // Health check
        .route("/health", get(health::health_check))
        .route("/health/:path_echo", get(health::health_check_with_path))
        // Address routes
        .route(
            "/addresses",
            get(addresses::list_addresses).post(addresses::create_address),
        )
        .route(
            "/addresses/:id",
            get(addresses::get_address).patch(addresses::update_address),
        )
        // Person routes
        .route(
            "/persons",
            get(persons::list_persons).post(persons::create_person),
        )
        .route(
            "/persons/:id",
            get(persons::get_person).patch(persons::update_person),
        )
        // Owner routes
        .route("/owners", get(owners::list_owners).post(owners::create_owner))
        .route(
            "/owners/:id",
            get(owners::get_owner)
                .patch(owners::update_owner)
                .delete(owners::delete_owner),
        )
        // Pet routes
        .route("/pets", get(pets::list_pets).post(pets::create_pet))
        .route(
            "/pets/:id",
            get(pets::get_pet)
                .patch(pets::update_pet)
                .delete(pets::delete_pet),
        )
        .fallback(fallback)
        // Middleware
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}

async fn fallback() -> ApiError {
    ApiError::not_found("Resource not found")
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "handler panicked");

    ApiError::internal_server_error("Internal server error").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let app = build(AppState::default());

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Resource not found");
    }

    #[tokio::test]
    async fn panic_is_rendered_as_generic_500() {
        async fn boom() -> &'static str {
            panic!("secret internal detail")
        }

        let app: Router = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));

        let response = app
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Internal server error");
    }

    #[tokio::test]
    async fn person_has_no_delete_route() {
        let app = build(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/persons/{}", uuid::Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
