use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::authorization::can_view;
use crate::auth::middleware::{AuthenticatedUser, MaybeAuthenticated};
use crate::db::portfolio as portfolio_db;
use crate::db::users as user_db;
use crate::error::{ApiError, ApiResult};
use crate::models::portfolio::{PortfolioWithUser, UpdatePortfolio};
use crate::models::users::PublicUser;
use crate::models::{ListQuery, Paginated, Pagination};

/// GET /api/portfolio/all — browse/search public portfolios (no auth).
pub async fn get_all_portfolios(
    db: web::Data<DatabaseConnection>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let page = query.page();
    let limit = query.limit();

    let (rows, total) =
        portfolio_db::list_public_portfolios(db.get_ref(), query.search(), page, limit).await?;

    let items: Vec<PortfolioWithUser> = rows
        .into_iter()
        .map(|(portfolio, user)| PortfolioWithUser {
            portfolio,
            user: user.map(PublicUser::from),
        })
        .collect();

    Ok(HttpResponse::Ok().json(Paginated {
        items,
        pagination: Pagination::new(page, limit, total),
    }))
}

/// GET /api/portfolio/{username} — view one portfolio by its owner's
/// username. Anonymous callers see it if it's public; the owner always does.
pub async fn get_portfolio(
    requester: MaybeAuthenticated,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let username = path.into_inner();

    let user = user_db::find_by_username(db.get_ref(), &username)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    let portfolio = portfolio_db::get_portfolio_by_owner(db.get_ref(), user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Portfolio not found".into()))?;

    if !can_view(&portfolio, requester.0) {
        return Err(ApiError::Forbidden("This portfolio is private".into()));
    }

    Ok(HttpResponse::Ok().json(PortfolioWithUser {
        portfolio,
        user: Some(PublicUser::from(user)),
    }))
}

/// GET /api/portfolio/my — the authenticated user's own portfolio, private or
/// not.
pub async fn get_my_portfolio(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> ApiResult<HttpResponse> {
    let portfolio = portfolio_db::get_portfolio_by_owner(db.get_ref(), user.0.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Portfolio not found".into()))?;

    Ok(HttpResponse::Ok().json(portfolio))
}

/// PUT /api/portfolio/my — partially update the authenticated user's
/// portfolio. Unknown keys are rejected at deserialization.
pub async fn update_my_portfolio(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<UpdatePortfolio>,
) -> ApiResult<HttpResponse> {
    let updated =
        portfolio_db::update_portfolio(db.get_ref(), user.0.id, body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Portfolio updated successfully",
        "portfolio": updated,
    })))
}
