pub mod auth;
pub mod portfolio;
pub mod upload;

use actix_web::{HttpResponse, Responder, web};

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));

    // ── Auth routes (protected by JWT via the AuthenticatedUser extractor) ──
    cfg.service(
        web::scope("/auth")
            .route("/me", web::get().to(auth::me))
            .route("/complete-profile", web::post().to(auth::complete_profile)),
    );

    // ── Portfolio routes ──
    // `/all` and `/my` must be registered before the `{username}` catch-all;
    // actix matches routes in registration order.
    cfg.service(
        web::scope("/portfolio")
            .route("/all", web::get().to(portfolio::get_all_portfolios))
            .route("/my", web::get().to(portfolio::get_my_portfolio))
            .route("/my", web::put().to(portfolio::update_my_portfolio))
            .route("/{username}", web::get().to(portfolio::get_portfolio)),
    );

    // ── Upload routes (all protected — require valid JWT) ──
    cfg.service(
        web::scope("/upload")
            .route("/image", web::post().to(upload::upload_image))
            .route("/images", web::post().to(upload::upload_images)),
    );
}

/// GET /api/health — liveness probe.
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "message": "Server is running",
    }))
}
