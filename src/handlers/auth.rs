use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::users as user_db;
use crate::error::{ApiError, ApiResult};
use crate::models::users::{CompleteProfile, UserResponse};

/// GET /api/auth/me — return the currently authenticated user's profile.
pub async fn me(user: AuthenticatedUser) -> impl Responder {
    HttpResponse::Ok().json(UserResponse::from(user.0))
}

/// POST /api/auth/complete-profile — set username, display_name, bio after
/// first login.
pub async fn complete_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CompleteProfile>,
) -> ApiResult<HttpResponse> {
    let input = body.into_inner();

    // Usernames are path segments in portfolio URLs, so enforce a shape that
    // stays routable.
    if let Some(username) = input.username.as_deref() {
        if !is_valid_username(username) {
            return Err(ApiError::Validation(
                "Username must be 3-30 characters: letters, digits, '-' or '_'".into(),
            ));
        }
        // Claimed by someone else?
        if let Some(holder) = user_db::find_by_username(db.get_ref(), username).await? {
            if holder.id != user.0.id {
                return Err(ApiError::Conflict("Username is already taken".into()));
            }
        }
    }

    let updated = user_db::complete_profile(db.get_ref(), user.0.id, input).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}

fn is_valid_username(username: &str) -> bool {
    (3..=30).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
