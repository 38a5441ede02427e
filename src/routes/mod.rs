use axum::{
    Router,
    extract::Request,
    http::{
        HeaderValue, Method,
        header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use tower_http::{
    catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::{
    error::{AppError, handle_panic},
    state::SharedState,
};

pub mod docs;
pub mod health;
pub mod players;

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Compose all route trees, wiring in shared state and documentation routes.
///
/// Anything unmatched, including known paths hit with an unsupported method,
/// answers 404 with the standard error body.
pub fn router(state: SharedState) -> Router<()> {
    let max_body_bytes = state.config().max_body_bytes;

    health::router()
        .merge(players::router(max_body_bytes))
        .merge(docs::router())
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
}

/// Build the full application: routes plus the cross-cutting middleware layers.
pub fn app(state: SharedState) -> Router<()> {
    router(state)
        .layer(middleware::from_fn(reject_head))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::map_response(json_with_charset))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> Response {
    AppError::route_not_found().into_response()
}

/// axum answers `HEAD` on every `GET` route; this API only serves the listed methods.
async fn reject_head(request: Request, next: Next) -> Response {
    if request.method() == Method::HEAD {
        return not_found().await;
    }
    next.run(request).await
}

/// Advertise the body charset on JSON responses.
async fn json_with_charset(mut response: Response) -> Response {
    let headers = response.headers_mut();
    if headers
        .get(CONTENT_TYPE)
        .is_some_and(|value| value == "application/json")
    {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
    }
    response
}
