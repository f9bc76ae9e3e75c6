use std::fmt;
use std::str::FromStr;

pub const BIKE_NO: &str = "bikeNo";
pub const APPLICANT_NAME: &str = "applicantName";
pub const PHONE: &str = "phone";
pub const EMAIL: &str = "email";
pub const PLAN: &str = "plan";
pub const PAYMENT: &str = "payment";
pub const AD_TEXT: &str = "adText";
pub const AD_IMAGE: &str = "adImage";
pub const TERMS_ACCEPTED: &str = "termsAccepted";

/// Which application form this deployment accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    Generic,
    Bicycle,
}

impl FormVariant {
    pub fn schema(self) -> &'static FormSchema {
        match self {
            FormVariant::Generic => &GENERIC_SCHEMA,
            FormVariant::Bicycle => &BICYCLE_SCHEMA,
        }
    }
}

impl FromStr for FormVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" => Ok(FormVariant::Generic),
            "bicycle" => Ok(FormVariant::Bicycle),
            other => Err(format!("unknown form variant: {}", other)),
        }
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormVariant::Generic => f.write_str("generic"),
            FormVariant::Bicycle => f.write_str("bicycle"),
        }
    }
}

/// Field layout of one form variant.
#[derive(Debug)]
pub struct FormSchema {
    pub variant: FormVariant,
    /// Checked in order; all must be present before anything else runs.
    pub required_fields: &'static [&'static str],
    /// Whether `plan` and `payment` are checked against [`PlanOption`] / [`PaymentOption`].
    pub has_plan_and_payment: bool,
    /// Notification layout, one entry per line.
    pub message_template: &'static [MessageLine],
}

/// One line of the chat notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLine {
    Text(&'static str),
    /// Prefix followed by the raw value of a form field.
    Field(&'static str, &'static str),
    PlanLabel(&'static str),
    PaymentLabel(&'static str),
    ImageUrl,
}

const HEADER: MessageLine = MessageLine::Text("📩 新規広告申込み");
const BLANK: MessageLine = MessageLine::Text("");

pub static GENERIC_SCHEMA: FormSchema = FormSchema {
    variant: FormVariant::Generic,
    required_fields: &[APPLICANT_NAME, PHONE, EMAIL, AD_TEXT, AD_IMAGE],
    has_plan_and_payment: false,
    message_template: &[
        HEADER,
        BLANK,
        MessageLine::Field("法人名/氏名：", APPLICANT_NAME),
        MessageLine::Field("電話番号：", PHONE),
        MessageLine::Field("メール：", EMAIL),
        BLANK,
        MessageLine::Text("広告内容："),
        MessageLine::Field("", AD_TEXT),
        BLANK,
        MessageLine::Text("広告画像："),
        MessageLine::ImageUrl,
    ],
};

pub static BICYCLE_SCHEMA: FormSchema = FormSchema {
    variant: FormVariant::Bicycle,
    required_fields: &[BIKE_NO, APPLICANT_NAME, PHONE, EMAIL, PLAN, PAYMENT, AD_TEXT, AD_IMAGE],
    has_plan_and_payment: true,
    message_template: &[
        HEADER,
        BLANK,
        MessageLine::Field("自転車No：", BIKE_NO),
        MessageLine::Field("法人名/氏名：", APPLICANT_NAME),
        MessageLine::Field("電話番号：", PHONE),
        MessageLine::Field("メール：", EMAIL),
        BLANK,
        MessageLine::PlanLabel("掲載期間・金額："),
        MessageLine::PaymentLabel("支払い方法："),
        BLANK,
        MessageLine::Text("広告内容："),
        MessageLine::Field("", AD_TEXT),
        BLANK,
        MessageLine::Text("広告画像："),
        MessageLine::ImageUrl,
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOption {
    OneMonth,
    SixMonths,
    TwelveMonths,
}

impl PlanOption {
    pub const ALL: [PlanOption; 3] = [PlanOption::OneMonth, PlanOption::SixMonths, PlanOption::TwelveMonths];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|plan| plan.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            PlanOption::OneMonth => "1month_10000",
            PlanOption::SixMonths => "6months_55000",
            PlanOption::TwelveMonths => "12months_100000",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlanOption::OneMonth => "1カ月（10,000円）",
            PlanOption::SixMonths => "6カ月（55,000円）",
            PlanOption::TwelveMonths => "12カ月（100,000円）",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOption {
    Bank,
    Credit,
}

impl PaymentOption {
    pub const ALL: [PaymentOption; 2] = [PaymentOption::Bank, PaymentOption::Credit];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|payment| payment.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            PaymentOption::Bank => "bank",
            PaymentOption::Credit => "credit",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentOption::Bank => "振込決済",
            PaymentOption::Credit => "クレジット決済（Stripe）",
        }
    }
}
