use std::collections::HashMap;
use crate::models::form_schema::{FormSchema, MessageLine, PaymentOption, PlanOption};

/// An uploaded file part.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    /// Declared part content type, empty when the client sent none.
    pub content_type: String,
    pub data: Vec<u8>,
    /// Bytes received for the part. Larger than `data.len()` when the upload
    /// was cut short for exceeding the image limit.
    pub size: usize,
}

impl ImageUpload {
    pub fn new(file_name: String, content_type: String, data: Vec<u8>) -> Self {
        let size = data.len();
        Self { file_name, content_type, data, size }
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// `adImage` as it arrived: a file part, or a plain text value.
#[derive(Debug, Clone)]
pub enum AdImageField {
    File(ImageUpload),
    Text(String),
}

/// The parsed multipart submission. Only the first value of each field is kept.
#[derive(Debug, Default)]
pub struct ApplicationForm {
    fields: HashMap<String, String>,
    pub ad_image: Option<AdImageField>,
}

impl ApplicationForm {
    pub fn insert_text(&mut self, name: String, value: String) {
        self.fields.entry(name).or_insert(value);
    }

    pub fn set_ad_image(&mut self, value: AdImageField) {
        if self.ad_image.is_none() {
            self.ad_image = Some(value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Raw text value, or the empty string when absent.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }
}

/// Plan and payment resolved from their submitted codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanSelection {
    pub plan: PlanOption,
    pub payment: PaymentOption,
}

/// Plain-text chat message announcing a new application.
///
/// User input is interpolated as-is.
pub struct NotificationMessage;

impl NotificationMessage {
    /// Fills the schema's template line by line.
    pub fn render(
        schema: &FormSchema,
        form: &ApplicationForm,
        selection: Option<PlanSelection>,
        image_url: &str,
    ) -> String {
        let lines: Vec<String> = schema
            .message_template
            .iter()
            .map(|line| match *line {
                MessageLine::Text(text) => text.to_string(),
                MessageLine::Field(prefix, field) => format!("{}{}", prefix, form.text(field)),
                MessageLine::PlanLabel(prefix) => format!(
                    "{}{}",
                    prefix,
                    selection.map(|s| s.plan.label()).unwrap_or_default()
                ),
                MessageLine::PaymentLabel(prefix) => format!(
                    "{}{}",
                    prefix,
                    selection.map(|s| s.payment.label()).unwrap_or_default()
                ),
                MessageLine::ImageUrl => image_url.to_string(),
            })
            .collect();

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form_schema::{FormVariant, AD_TEXT, APPLICANT_NAME, BIKE_NO, EMAIL, PHONE};

    fn sample_form() -> ApplicationForm {
        let mut form = ApplicationForm::default();
        form.insert_text(BIKE_NO.into(), "B-12".into());
        form.insert_text(APPLICANT_NAME.into(), "山田商店".into());
        form.insert_text(PHONE.into(), "03-1234-5678".into());
        form.insert_text(EMAIL.into(), "info@yamada.example".into());
        form.insert_text(AD_TEXT.into(), "春のセール\n全品10%オフ".into());
        form
    }

    #[test]
    fn first_value_wins() {
        let mut form = ApplicationForm::default();
        form.insert_text(PHONE.into(), "first".into());
        form.insert_text(PHONE.into(), "second".into());
        assert_eq!(form.get(PHONE), Some("first"));
        assert_eq!(form.text("missing"), "");
    }

    #[test]
    fn renders_generic_message() {
        let message = NotificationMessage::render(
            FormVariant::Generic.schema(),
            &sample_form(),
            None,
            "https://img.example.com/uploads/x.png",
        );

        assert_eq!(
            message,
            "📩 新規広告申込み\n\n法人名/氏名：山田商店\n電話番号：03-1234-5678\nメール：info@yamada.example\n\n広告内容：\n春のセール\n全品10%オフ\n\n広告画像：\nhttps://img.example.com/uploads/x.png"
        );
    }

    #[test]
    fn renders_bicycle_message_with_labels() {
        let selection = PlanSelection {
            plan: PlanOption::SixMonths,
            payment: PaymentOption::Credit,
        };
        let message = NotificationMessage::render(
            FormVariant::Bicycle.schema(),
            &sample_form(),
            Some(selection),
            "https://img.example.com/uploads/x.png",
        );

        assert_eq!(
            message,
            "📩 新規広告申込み\n\n自転車No：B-12\n法人名/氏名：山田商店\n電話番号：03-1234-5678\nメール：info@yamada.example\n\n掲載期間・金額：6カ月（55,000円）\n支払い方法：クレジット決済（Stripe）\n\n広告内容：\n春のセール\n全品10%オフ\n\n広告画像：\nhttps://img.example.com/uploads/x.png"
        );
    }
}
