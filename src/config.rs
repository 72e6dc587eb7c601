use std::env;

/// Runtime configuration, read once at startup.
///
/// `DATABASE_URL` and `JWT_SECRET` are required and missing values abort the
/// process. The image host pair is optional; without it, uploads fall back to
/// inline data URLs so local setups work with no credentials.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub image_host: Option<ImageHostConfig>,
}

#[derive(Debug, Clone)]
pub struct ImageHostConfig {
    pub upload_url: String,
    pub api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);

        let image_host = match (
            env::var("IMAGE_HOST_UPLOAD_URL"),
            env::var("IMAGE_HOST_API_KEY"),
        ) {
            (Ok(upload_url), Ok(api_key)) => Some(ImageHostConfig {
                upload_url,
                api_key,
            }),
            _ => None,
        };

        Self {
            database_url,
            jwt_secret,
            port,
            image_host,
        }
    }
}
