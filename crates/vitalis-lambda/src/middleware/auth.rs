use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

/// Bearer-token middleware for the history routes.
///
/// Extracts the `Authorization: Bearer <token>` header and inserts
/// [`AuthUser`] into request extensions for handlers to use. The token's
/// subject scopes all history access. Cryptographic validation happens
/// at the identity provider upstream of this service; an absent or
/// malformed header is rejected here.
pub async fn require_auth(mut req: Request, next: Next) -> Result<Response, StatusCode> {
    let sub = {
        let auth_header = req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(StatusCode::UNAUTHORIZED)?;

        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        token.to_string()
    };

    req.extensions_mut().insert(AuthUser { sub });

    Ok(next.run(req).await)
}

/// Authenticated user extracted from the bearer token.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
}
