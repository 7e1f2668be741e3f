use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::InquiryError;

/// The fields of the inquiry form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InquiryField {
    Name,
    Email,
    Phone,
    Service,
    OtherService,
    Message,
}

impl InquiryField {
    pub const ALL: [InquiryField; 6] = [
        InquiryField::Name,
        InquiryField::Email,
        InquiryField::Phone,
        InquiryField::Service,
        InquiryField::OtherService,
        InquiryField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryField::Name => "name",
            InquiryField::Email => "email",
            InquiryField::Phone => "phone",
            InquiryField::Service => "service",
            InquiryField::OtherService => "otherService",
            InquiryField::Message => "message",
        }
    }
}

impl fmt::Display for InquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryField {
    type Err = InquiryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| InquiryError::UnknownField {
                name: s.to_string(),
            })
    }
}

/// Every service label either form can offer. `OtherServices` is the
/// reserved value that unlocks the free-text detail field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    #[serde(rename = "Regular House Cleaning")]
    RegularHouseCleaning,
    #[serde(rename = "Deep Cleaning Service")]
    DeepCleaning,
    #[serde(rename = "Office Cleaning")]
    OfficeCleaning,
    #[serde(rename = "Move-in/Move-out Cleaning")]
    MoveInMoveOut,
    #[serde(rename = "Post-Construction Cleanup")]
    PostConstruction,
    #[serde(rename = "Retail Space Cleaning")]
    RetailSpace,
    #[serde(rename = "Other Services")]
    OtherServices,
    #[serde(rename = "Residential Cleaning")]
    Residential,
    #[serde(rename = "Commercial Cleaning")]
    Commercial,
    #[serde(rename = "Specialized Services")]
    Specialized,
}

impl ServiceKind {
    pub const OTHER_LABEL: &'static str = "Other Services";

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::RegularHouseCleaning => "Regular House Cleaning",
            ServiceKind::DeepCleaning => "Deep Cleaning Service",
            ServiceKind::OfficeCleaning => "Office Cleaning",
            ServiceKind::MoveInMoveOut => "Move-in/Move-out Cleaning",
            ServiceKind::PostConstruction => "Post-Construction Cleanup",
            ServiceKind::RetailSpace => "Retail Space Cleaning",
            ServiceKind::OtherServices => Self::OTHER_LABEL,
            ServiceKind::Residential => "Residential Cleaning",
            ServiceKind::Commercial => "Commercial Cleaning",
            ServiceKind::Specialized => "Specialized Services",
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, ServiceKind::OtherServices)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const CONTACT_SERVICES: [ServiceKind; 7] = [
    ServiceKind::RegularHouseCleaning,
    ServiceKind::DeepCleaning,
    ServiceKind::OfficeCleaning,
    ServiceKind::MoveInMoveOut,
    ServiceKind::PostConstruction,
    ServiceKind::RetailSpace,
    ServiceKind::OtherServices,
];

const QUOTE_SERVICES: [ServiceKind; 3] = [
    ServiceKind::Residential,
    ServiceKind::Commercial,
    ServiceKind::Specialized,
];

/// Which of the site's two independent inquiry forms a controller drives:
/// the full contact page form or the short quote form on the home page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    #[default]
    Contact,
    Quote,
}

impl FormKind {
    /// Selectable services, in display order.
    pub fn services(&self) -> &'static [ServiceKind] {
        match self {
            FormKind::Contact => &CONTACT_SERVICES,
            FormKind::Quote => &QUOTE_SERVICES,
        }
    }

    pub fn service_from_label(&self, label: &str) -> Option<ServiceKind> {
        self.services().iter().copied().find(|s| s.label() == label)
    }

    /// Whether picking "Other Services" can reveal the detail field.
    pub fn offers_other_service(&self) -> bool {
        self.services().iter().any(ServiceKind::is_other)
    }

    pub fn default_delay_ms(&self) -> u64 {
        match self {
            FormKind::Contact => 2000,
            FormKind::Quote => 1500,
        }
    }

    pub fn default_messages(&self) -> FormMessages {
        match self {
            FormKind::Contact => FormMessages {
                success: "Message sent successfully! We'll get back to you within 24 hours."
                    .to_string(),
                error: "Failed to send message. Please try again.".to_string(),
            },
            FormKind::Quote => FormMessages {
                success: "Request sent! We will contact you soon.".to_string(),
                error: "Failed to send request. Please try again.".to_string(),
            },
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormKind::Contact => "Send Message",
            FormKind::Quote => "Request a Quote",
        }
    }

    pub fn submitting_label(&self) -> &'static str {
        match self {
            FormKind::Contact => "Sending Message...",
            FormKind::Quote => "Sending...",
        }
    }
}

/// Toast texts shown after a submission completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMessages {
    pub success: String,
    pub error: String,
}

impl Default for FormMessages {
    fn default() -> Self {
        FormKind::Contact.default_messages()
    }
}

/// Raw text currently held by the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub other_service: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::Name => &self.name,
            InquiryField::Email => &self.email,
            InquiryField::Phone => &self.phone,
            InquiryField::Service => &self.service,
            InquiryField::OtherService => &self.other_service,
            InquiryField::Message => &self.message,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: InquiryField) -> &mut String {
        match field {
            InquiryField::Name => &mut self.name,
            InquiryField::Email => &mut self.email,
            InquiryField::Phone => &mut self.phone,
            InquiryField::Service => &mut self.service,
            InquiryField::OtherService => &mut self.other_service,
            InquiryField::Message => &mut self.message,
        }
    }

    pub fn is_other_service_selected(&self) -> bool {
        self.service == ServiceKind::OTHER_LABEL
    }
}

/// Per-field violation messages. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<InquiryField, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: InquiryField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: InquiryField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: InquiryField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (InquiryField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// One validated customer inquiry, built fresh for every submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: ServiceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_service: Option<String>,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl InquiryRequest {
    /// Validates `values` against `kind`'s rules and builds the payload.
    pub fn build(kind: FormKind, values: &FormValues) -> Result<Self, FieldErrors> {
        let errors = crate::utils::validation::validate_form(kind, values);
        if !errors.is_empty() {
            return Err(errors);
        }

        let service = kind.service_from_label(&values.service).ok_or_else(|| {
            let mut errors = FieldErrors::default();
            errors.insert(
                InquiryField::Service,
                crate::utils::validation::SERVICE_UNKNOWN_MSG,
            );
            errors
        })?;

        Ok(Self {
            name: values.name.clone(),
            email: values.email.clone(),
            phone: values.phone.clone(),
            service,
            other_service: service.is_other().then(|| values.other_service.clone()),
            message: values.message.clone(),
            submitted_at: Utc::now(),
        })
    }
}
