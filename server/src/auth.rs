use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;

use crate::error::ErrorResponse;
use crate::handler::AppModule;

/*
 * Every route except the public ones sits behind this layer. The token
 * is compared against ADMIN_TOKEN from the environment.
 */
pub async fn require_admin(
    State(handler): State<AppModule>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = bearer
        .map(|TypedHeader(Authorization(token))| token.token() == handler.config().admin_token())
        .unwrap_or(false);

    if authorized {
        next.run(request).await
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new(
                "Unauthorized",
                "missing or invalid bearer token",
            )),
        )
            .into_response()
    }
}
