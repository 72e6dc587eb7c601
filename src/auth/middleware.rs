use actix_web::FromRequest;
use actix_web::{HttpRequest, dev::Payload, web};
use sea_orm::DatabaseConnection;
use std::future::Future;
use std::pin::Pin;
use uuid::Uuid;

use crate::auth::jwt;
use crate::config::AppConfig;
use crate::db::users::find_or_create_from_auth;
use crate::error::ApiError;
use crate::models::users::{self, CreateUserFromAuth};

/// Extractor for routes that require a signed-in user.
///
/// Validates the Bearer token and resolves it to a local `users` row,
/// creating the row (and its default portfolio) on first sight.
pub struct AuthenticatedUser(pub users::Model);

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. Extract the Bearer token from the Authorization header.
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".into()))?;

            let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
                ApiError::Unauthorized("Authorization header must be: Bearer <token>".into())
            })?;

            // 2. Validate the JWT against the shared secret.
            let config = req
                .app_data::<web::Data<AppConfig>>()
                .ok_or_else(|| ApiError::Internal("Auth secret not configured".into()))?;

            let claims = jwt::validate_token(token, &config.jwt_secret)
                .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {e}")))?;

            // 3. Extract user info from claims.
            let user_id = claims.user_id().map_err(ApiError::Unauthorized)?;

            let email = claims
                .user_email()
                .ok_or_else(|| ApiError::Unauthorized("No email in token claims".into()))?;

            // 4. Find or create the user.
            let db = req
                .app_data::<web::Data<DatabaseConnection>>()
                .ok_or_else(|| ApiError::Internal("Database not configured".into()))?;

            let user = find_or_create_from_auth(
                db.get_ref(),
                CreateUserFromAuth {
                    id: user_id,
                    email,
                    username: claims.username(),
                    display_name: claims.display_name(),
                    avatar_url: claims.avatar_url(),
                    auth_provider: "oidc".to_string(),
                },
            )
            .await?;

            Ok(AuthenticatedUser(user))
        })
    }
}

/// Extractor for routes that serve both anonymous and signed-in callers.
///
/// Never rejects the request: a missing, malformed or expired token simply
/// yields `None`, and the route answers as it would for a stranger.
pub struct MaybeAuthenticated(pub Option<Uuid>);

impl FromRequest for MaybeAuthenticated {
    type Error = ApiError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let requester = req
            .app_data::<web::Data<AppConfig>>()
            .and_then(|config| {
                req.headers()
                    .get("Authorization")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|h| h.strip_prefix("Bearer "))
                    .and_then(|token| jwt::validate_token(token, &config.jwt_secret).ok())
            })
            .and_then(|claims| claims.user_id().ok());

        std::future::ready(Ok(MaybeAuthenticated(requester)))
    }
}
