use sea_orm::prelude::Expr;
use sea_orm::*;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::models::portfolio::{self, Contact, SocialLinks, Theme, UpdatePortfolio};
use crate::models::users;

fn json_value<T: serde::Serialize>(value: &T) -> Result<JsonValue, DbErr> {
    serde_json::to_value(value).map_err(|e| DbErr::Json(e.to_string()))
}

/// Build the portfolio a user starts with: public, stock headline, empty
/// sections, default theme.
pub fn default_portfolio(user_id: Uuid) -> Result<portfolio::ActiveModel, DbErr> {
    let now = chrono::Utc::now();

    Ok(portfolio::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        title: Set("My Portfolio".to_string()),
        tagline: Set("Web Developer".to_string()),
        about: Set(String::new()),
        avatar: Set(String::new()),
        banner_image: Set(String::new()),
        skills: Set(JsonValue::Array(Vec::new())),
        projects: Set(JsonValue::Array(Vec::new())),
        experience: Set(JsonValue::Array(Vec::new())),
        education: Set(JsonValue::Array(Vec::new())),
        contact: Set(json_value(&Contact::default())?),
        social_links: Set(json_value(&SocialLinks::default())?),
        theme: Set(json_value(&Theme::default())?),
        is_public: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    })
}

/// Insert the default portfolio for a freshly created user.
pub async fn insert_default_portfolio(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<portfolio::Model, DbErr> {
    default_portfolio(user_id)?.insert(db).await
}

/// Fetch the portfolio owned by the given user, if any.
pub async fn get_portfolio_by_owner(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<portfolio::Model>, DbErr> {
    portfolio::Entity::find()
        .filter(portfolio::Column::UserId.eq(user_id))
        .one(db)
        .await
}

/// Mark the patched fields on the active model.
///
/// Absent patch fields stay `Unchanged` and are left out of the UPDATE
/// statement, so concurrent edits to disjoint fields both land. `updated_at`
/// is always refreshed.
pub fn apply_patch(
    active: &mut portfolio::ActiveModel,
    input: UpdatePortfolio,
) -> Result<(), DbErr> {
    if let Some(title) = input.title {
        active.title = Set(title);
    }
    if let Some(tagline) = input.tagline {
        active.tagline = Set(tagline);
    }
    if let Some(about) = input.about {
        active.about = Set(about);
    }
    if let Some(avatar) = input.avatar {
        active.avatar = Set(avatar);
    }
    if let Some(banner_image) = input.banner_image {
        active.banner_image = Set(banner_image);
    }
    if let Some(skills) = input.skills {
        active.skills = Set(json_value(&skills)?);
    }
    if let Some(projects) = input.projects {
        active.projects = Set(json_value(&projects)?);
    }
    if let Some(experience) = input.experience {
        active.experience = Set(json_value(&experience)?);
    }
    if let Some(education) = input.education {
        active.education = Set(json_value(&education)?);
    }
    if let Some(contact) = input.contact {
        active.contact = Set(json_value(&contact)?);
    }
    if let Some(social_links) = input.social_links {
        active.social_links = Set(json_value(&social_links)?);
    }
    if let Some(theme) = input.theme {
        active.theme = Set(json_value(&theme)?);
    }
    if let Some(is_public) = input.is_public {
        active.is_public = Set(is_public);
    }
    active.updated_at = Set(chrono::Utc::now());

    Ok(())
}

/// Apply a sparse update to the portfolio owned by `user_id`.
pub async fn update_portfolio(
    db: &DatabaseConnection,
    user_id: Uuid,
    input: UpdatePortfolio,
) -> Result<portfolio::Model, DbErr> {
    let item = get_portfolio_by_owner(db, user_id)
        .await?
        .ok_or(DbErr::RecordNotFound("Portfolio not found".to_string()))?;

    let mut active: portfolio::ActiveModel = item.into();
    apply_patch(&mut active, input)?;

    active.update(db).await
}

/// Escape LIKE wildcards so a search term only ever matches literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Filter for the public listing: public portfolios only, optionally narrowed
/// to owners whose username or display name contains the search term
/// (case-insensitive).
fn public_filter(search: Option<&str>) -> Condition {
    use sea_orm::sea_query::extension::postgres::PgExpr;

    let mut condition = Condition::all().add(portfolio::Column::IsPublic.eq(true));

    if let Some(term) = search {
        let pattern = format!("%{}%", escape_like(term));
        condition = condition.add(
            Condition::any()
                .add(Expr::col((users::Entity, users::Column::Username)).ilike(pattern.clone()))
                .add(Expr::col((users::Entity, users::Column::DisplayName)).ilike(pattern)),
        );
    }

    condition
}

/// Fetch one page of public portfolios with their owners, plus the total
/// match count for the pagination envelope.
///
/// Ordering is newest-edited first, with created_at and id as tie-breakers so
/// pages never shuffle between requests. `page` is 1-based.
pub async fn list_public_portfolios(
    db: &DatabaseConnection,
    search: Option<&str>,
    page: u64,
    limit: u64,
) -> Result<(Vec<(portfolio::Model, Option<users::Model>)>, u64), DbErr> {
    let condition = public_filter(search);

    let total = portfolio::Entity::find()
        .join(JoinType::InnerJoin, portfolio::Relation::User.def())
        .filter(condition.clone())
        .count(db)
        .await?;

    let rows = portfolio::Entity::find()
        .find_also_related(users::Entity)
        .filter(condition)
        .order_by_desc(portfolio::Column::UpdatedAt)
        .order_by_asc(portfolio::Column::CreatedAt)
        .order_by_asc(portfolio::Column::Id)
        .offset(page.saturating_sub(1) * limit)
        .limit(limit)
        .all(db)
        .await?;

    Ok((rows, total))
}
