use sea_orm::*;
use uuid::Uuid;

use crate::db::portfolio as portfolio_db;
use crate::models::users::{self, CompleteProfile, CreateUserFromAuth};

/// Create a new user from verified JWT claims (called by auth middleware).
///
/// First sight of an identity also mints the user's default portfolio, so
/// every account starts with something to show.
pub async fn find_or_create_from_auth(
    db: &DatabaseConnection,
    input: CreateUserFromAuth,
) -> Result<users::Model, DbErr> {
    // Try to find the user first (by the auth provider's UUID).
    if let Some(existing) = users::Entity::find_by_id(input.id).one(db).await? {
        return Ok(existing);
    }

    // Only claim the username hint if nobody holds it yet.
    let username = match input.username {
        Some(name) if find_by_username(db, &name).await?.is_none() => Some(name),
        _ => None,
    };

    let new_user = users::ActiveModel {
        id: Set(input.id),
        email: Set(input.email),
        username: Set(username),
        display_name: Set(input.display_name),
        avatar_url: Set(input.avatar_url),
        bio: Set(None),
        auth_provider: Set(input.auth_provider),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    let user = new_user.insert(db).await?;
    portfolio_db::insert_default_portfolio(db, user.id).await?;

    Ok(user)
}

/// Fetch a single user by username.
pub async fn find_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(db)
        .await
}

/// Complete a user's profile (set username, display_name, bio after first login).
pub async fn complete_profile(
    db: &DatabaseConnection,
    id: Uuid,
    input: CompleteProfile,
) -> Result<users::Model, DbErr> {
    let user = users::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("User not found".to_string()))?;

    let mut active: users::ActiveModel = user.into();

    if let Some(username) = input.username {
        active.username = Set(Some(username));
    }
    if let Some(display_name) = input.display_name {
        active.display_name = Set(Some(display_name));
    }
    if let Some(avatar_url) = input.avatar_url {
        active.avatar_url = Set(Some(avatar_url));
    }
    if let Some(bio) = input.bio {
        active.bio = Set(Some(bio));
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}
