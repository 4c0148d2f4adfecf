//! Auth middleware and request guards

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::auth::{can_list_properties, AuthContext, AuthenticatedUser};

use super::error::ApiError;
use super::AppState;

/// Runs the authenticator on every request
///
/// Missing credentials insert an anonymous context and let the request
/// continue; invalid credentials are rejected here with 401.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let header = match req.headers().get(AUTHORIZATION) {
        None => None,
        Some(value) => match value.to_str() {
            Ok(value) => Some(value.to_string()),
            Err(_) => {
                return ApiError::unauthorized("malformed authorization header").into_response()
            }
        },
    };

    match state.authenticator.authenticate(header.as_deref()).await {
        Ok(context) => {
            req.extensions_mut().insert(context);
            next.run(req).await
        }
        Err(err) => {
            tracing::debug!(error = %err, "authentication failed");
            ApiError::unauthorized(err.to_string()).into_response()
        }
    }
}

/// Extracts the authenticated caller, rejecting anonymous requests with 401
pub struct CurrentUser(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .unwrap_or(AuthContext::Anonymous);

        match context {
            AuthContext::Authenticated(user) => Ok(CurrentUser(user)),
            AuthContext::Anonymous => Err(ApiError::unauthorized("Authentication required")),
        }
    }
}

/// Guard for the property-listing endpoint
///
/// Rejects before the handler body executes: anonymous callers get 401,
/// authenticated callers whose role is outside the allow-list get 403.
pub struct RequireLister(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireLister
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        if !can_list_properties(user.role()) {
            tracing::info!(
                user_id = %user.id,
                role = user.role().unwrap_or("<none>"),
                "listing denied: role not allowed"
            );
            return Err(ApiError::forbidden("Insufficient permissions"));
        }

        Ok(RequireLister(user))
    }
}
