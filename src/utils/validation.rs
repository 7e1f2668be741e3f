use crate::domain::model::{FieldErrors, FormKind, FormValues, InquiryField};
use crate::utils::error::{InquiryError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub const NAME_MIN_LENGTH: usize = 2;
pub const PHONE_MIN_LENGTH: usize = 10;
pub const MESSAGE_MIN_LENGTH: usize = 10;

pub const NAME_MSG: &str = "Name must be at least 2 characters";
pub const EMAIL_MSG: &str = "Please enter a valid email address";
pub const PHONE_MSG: &str = "Please enter a valid phone number";
pub const SERVICE_REQUIRED_MSG: &str = "Please select a service";
pub const SERVICE_UNKNOWN_MSG: &str = "Please select a service from the list";
pub const OTHER_SERVICE_MSG: &str = "Please specify your service request";
pub const MESSAGE_MSG: &str = "Message must be at least 10 characters";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Runs every field rule of `kind` against `values`. Pure; the returned
/// map is empty when the form may be submitted.
pub fn validate_form(kind: FormKind, values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if !has_min_length(&values.name, NAME_MIN_LENGTH) {
        errors.insert(InquiryField::Name, NAME_MSG);
    }

    if !is_valid_email(&values.email) {
        errors.insert(InquiryField::Email, EMAIL_MSG);
    }

    if !has_min_length(&values.phone, PHONE_MIN_LENGTH) {
        errors.insert(InquiryField::Phone, PHONE_MSG);
    }

    if values.service.is_empty() {
        errors.insert(InquiryField::Service, SERVICE_REQUIRED_MSG);
    } else if kind.service_from_label(&values.service).is_none() {
        errors.insert(InquiryField::Service, SERVICE_UNKNOWN_MSG);
    }

    // 只有選擇 "Other Services" 時才需要補充說明
    if kind.offers_other_service()
        && values.is_other_service_selected()
        && values.other_service.is_empty()
    {
        errors.insert(InquiryField::OtherService, OTHER_SERVICE_MSG);
    }

    if !has_min_length(&values.message, MESSAGE_MIN_LENGTH) {
        errors.insert(InquiryField::Message, MESSAGE_MSG);
    }

    errors
}

/// Length in UTF-16 code units, untrimmed, the way browser form limits count.
pub fn has_min_length(value: &str, min: usize) -> bool {
    value.encode_utf16().count() >= min
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
            .expect("email pattern compiles")
    })
}

pub fn is_valid_email(value: &str) -> bool {
    // regex crate 不支援 lookahead，開頭的點與連續的點另外檢查
    !value.starts_with('.') && !value.contains("..") && email_pattern().is_match(value)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(InquiryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(InquiryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(InquiryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(InquiryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InquiryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
