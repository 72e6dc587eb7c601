use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures_util::TryStreamExt;

use crate::auth::middleware::AuthenticatedUser;
use crate::error::{ApiError, ApiResult};
use crate::images::ImageHost;

const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
const MAX_BATCH_FILES: usize = 10;

/// POST /api/upload/image — upload a single image (requires authentication).
pub async fn upload_image(
    _user: AuthenticatedUser,
    host: web::Data<ImageHost>,
    payload: Multipart,
) -> ApiResult<HttpResponse> {
    let mut images = read_images(payload, 1).await?;
    let image = images
        .pop()
        .ok_or_else(|| ApiError::Validation("No file uploaded".into()))?;

    let url = host.store(image.data, &image.mime, &image.file_name).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Image uploaded successfully",
        "imageUrl": url,
        "originalName": image.file_name,
    })))
}

/// POST /api/upload/images — upload up to ten images (requires
/// authentication).
pub async fn upload_images(
    _user: AuthenticatedUser,
    host: web::Data<ImageHost>,
    payload: Multipart,
) -> ApiResult<HttpResponse> {
    let images = read_images(payload, MAX_BATCH_FILES).await?;
    if images.is_empty() {
        return Err(ApiError::Validation("No files uploaded".into()));
    }

    let mut stored = Vec::with_capacity(images.len());
    for image in images {
        let url = host.store(image.data, &image.mime, &image.file_name).await?;
        stored.push(serde_json::json!({
            "url": url,
            "originalName": image.file_name,
        }));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Images uploaded successfully",
        "images": stored,
    })))
}

struct IncomingImage {
    data: Vec<u8>,
    mime: String,
    file_name: String,
}

/// Drain a multipart payload into memory, enforcing the image-only MIME rule,
/// the 5 MB per-file cap and the file-count cap.
async fn read_images(mut payload: Multipart, max_files: usize) -> ApiResult<Vec<IncomingImage>> {
    let mut images = Vec::new();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| ApiError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if images.len() == max_files {
            return Err(ApiError::Validation(format!(
                "Too many files (limit is {max_files})"
            )));
        }

        let mime = field
            .content_type()
            .map(|m| m.essence_str().to_owned())
            .unwrap_or_default();
        if !mime.starts_with("image/") {
            return Err(ApiError::Validation("Only image files are allowed!".into()));
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("upload")
            .to_owned();

        let mut data = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| ApiError::Validation(format!("Invalid multipart payload: {e}")))?
        {
            if data.len() + chunk.len() > MAX_IMAGE_BYTES {
                return Err(ApiError::Validation("Image exceeds the 5 MB limit".into()));
            }
            data.extend_from_slice(&chunk);
        }

        if data.is_empty() {
            return Err(ApiError::Validation("Uploaded file is empty".into()));
        }

        images.push(IncomingImage {
            data,
            mime,
            file_name,
        });
    }

    Ok(images)
}
