use axum::{
    extract::{FromRequest, Multipart, Request, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use crate::config::AppState;
use crate::error::AppError;
use crate::models::application_model::{AdImageField, ApplicationForm, ImageUpload};
use crate::models::form_schema::AD_IMAGE;
use crate::services::application_service::{ApplicationService, MAX_IMAGE_BYTES};
use crate::utils::api_response::ResponseBuilder;
use crate::utils::storage_key::random_segment;

pub async fn apply_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    // Extracted by hand so a malformed body becomes a 500, not axum's 400
    let multipart = Multipart::from_request(request, &state).await?;
    let form = read_application_form(multipart).await?;

    let image_url =
        ApplicationService::submit(&state, form, Utc::now(), &random_segment()).await?;

    Ok(ResponseBuilder::success(image_url))
}

pub async fn not_found_handler() -> Response {
    ResponseBuilder::not_found()
}

/// Collects every part. `adImage` keeps its file metadata; any other field is
/// read as text, even when the client attached it as a file.
async fn read_application_form(mut multipart: Multipart) -> Result<ApplicationForm, AppError> {
    let mut form = ApplicationForm::default();

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        if name.is_empty() {
            continue;
        }

        if name == AD_IMAGE {
            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().unwrap_or("").to_string();

                    // Count every byte but keep at most one image's worth
                    let mut data = Vec::new();
                    let mut size = 0usize;
                    while let Some(chunk) = field.chunk().await? {
                        size += chunk.len();
                        if size <= MAX_IMAGE_BYTES {
                            data.extend_from_slice(&chunk);
                        }
                    }

                    form.set_ad_image(AdImageField::File(ImageUpload {
                        file_name,
                        content_type,
                        data,
                        size,
                    }));
                }
                None => {
                    let text = field.text().await?;
                    form.set_ad_image(AdImageField::Text(text));
                }
            }
        } else {
            let data = field.bytes().await?;
            form.insert_text(name, String::from_utf8_lossy(&data).into_owned());
        }
    }

    Ok(form)
}
