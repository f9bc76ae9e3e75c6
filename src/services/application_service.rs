use chrono::{DateTime, Utc};
use crate::config::AppState;
use crate::error::AppError;
use crate::models::application_model::{
    AdImageField, ApplicationForm, ImageUpload, NotificationMessage, PlanSelection,
};
use crate::models::form_schema::{
    FormSchema, PaymentOption, PlanOption, AD_IMAGE, EMAIL, PAYMENT, PLAN, TERMS_ACCEPTED,
};
use crate::utils::storage_key::{build_storage_key, public_url};
use crate::utils::validator_utils::{is_present, is_valid_email};

pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// A submission that passed every check and is ready to be stored.
#[derive(Debug)]
pub struct ValidatedApplication {
    pub image: ImageUpload,
    pub selection: Option<PlanSelection>,
}

pub struct ApplicationService;

impl ApplicationService {
    /// Runs the checks in their fixed order; the first failure is returned.
    pub fn validate(
        schema: &FormSchema,
        form: &mut ApplicationForm,
    ) -> Result<ValidatedApplication, AppError> {
        // 1. Presence
        let all_present = schema.required_fields.iter().all(|field| {
            if *field == AD_IMAGE {
                match &form.ad_image {
                    Some(AdImageField::File(_)) => true,
                    Some(AdImageField::Text(value)) => !value.is_empty(),
                    None => false,
                }
            } else {
                is_present(form.get(field))
            }
        });
        if !all_present {
            return Err(AppError::MissingFields);
        }

        // 2. Allow-listed plan and payment
        let selection = if schema.has_plan_and_payment {
            let plan = PlanOption::from_code(form.text(PLAN)).ok_or(AppError::InvalidPlan)?;
            let payment =
                PaymentOption::from_code(form.text(PAYMENT)).ok_or(AppError::InvalidPayment)?;
            Some(PlanSelection { plan, payment })
        } else {
            None
        };

        // 3. Email shape
        if !is_valid_email(form.text(EMAIL)) {
            return Err(AppError::InvalidEmail);
        }

        // 4. Image
        let image = match form.ad_image.take() {
            Some(AdImageField::File(image)) => image,
            _ => return Err(AppError::ImageNotFile),
        };

        if !image.content_type.starts_with("image/") {
            return Err(AppError::NotAnImage);
        }

        if image.size() > MAX_IMAGE_BYTES {
            return Err(AppError::ImageTooLarge);
        }

        Ok(ValidatedApplication { image, selection })
    }

    /// Validate, store the image, notify the team. Returns the public image URL.
    ///
    /// The stored image is kept even when the notification fails.
    pub async fn submit(
        state: &AppState,
        mut form: ApplicationForm,
        now: DateTime<Utc>,
        random: &str,
    ) -> Result<String, AppError> {
        let schema = state.config.form_variant.schema();
        let ValidatedApplication { image, selection } = Self::validate(schema, &mut form)?;

        if let Some(terms) = form.get(TERMS_ACCEPTED) {
            tracing::debug!("termsAccepted={}", terms);
        }

        let key = build_storage_key(now, random, &image.content_type, Some(image.file_name.as_str()));
        let size = image.size();

        state
            .storage
            .put_object(&key, image.data, &image.content_type)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        tracing::info!(
            key = %key,
            size,
            content_type = %image.content_type,
            "Stored ad image"
        );

        let image_url = public_url(&state.config.public_image_base_url, &key);
        let message = NotificationMessage::render(schema, &form, selection, &image_url);

        state.slack_service.send_message(&message).await?;

        tracing::info!(variant = %schema.variant, key = %key, "Application accepted");
        Ok(image_url)
    }
}
