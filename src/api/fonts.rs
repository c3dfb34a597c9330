//! Font API handlers
//!
//! Upload, list, retrieve and delete endpoints. Business logic lives in
//! [`FontService`](crate::services::FontService).

use crate::error::AppError;
use crate::state::AppState;
use crate::storage::name::content_type;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use tracing::{debug, warn};

/// Multipart field carrying the uploaded font
pub const FONT_FIELD: &str = "font";

/// GET /get-font/:font_name - Serve raw font bytes
pub async fn get_font(
    State(state): State<AppState>,
    Path(font_name): Path<String>,
) -> Result<Response, AppError> {
    let (name, bytes) = state.fonts.retrieve(&font_name).await?;
    Ok(([(header::CONTENT_TYPE, content_type(name.extension()))], bytes).into_response())
}

/// POST /add-font - Upload a font as multipart field `font`
pub async fn add_font(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, String), AppError> {
    let mut multipart = multipart.map_err(|e| {
        debug!(error = %e, "Upload request is not multipart");
        AppError::NoFileUploaded
    })?;

    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("").to_string();
        let file_name = field.file_name().map(str::to_string);

        if field_name != FONT_FIELD {
            warn!(field = %field_name, "Ignoring unknown multipart field");
            continue;
        }
        let Some(file_name) = file_name else {
            debug!("Ignoring `font` field without a file name");
            continue;
        };
        if upload.is_some() {
            return Err(AppError::MultipleFilesUploaded);
        }

        let data = field.bytes().await?;
        upload = Some((file_name, Vec::from(data)));
    }

    let (file_name, bytes) = upload.ok_or(AppError::NoFileUploaded)?;
    let name = state.fonts.upload(&file_name, bytes).await?;

    Ok((
        StatusCode::CREATED,
        format!("Font {} uploaded successfully.", name),
    ))
}

/// DELETE /delete-font/:font_name - Remove a font
pub async fn delete_font(
    State(state): State<AppState>,
    Path(font_name): Path<String>,
) -> Result<String, AppError> {
    let name = state.fonts.delete(&font_name).await?;
    Ok(format!("Font {} deleted successfully.", name))
}

/// GET /fonts - List stored font file names
pub async fn list_fonts(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.fonts.list().await?))
}
